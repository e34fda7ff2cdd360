#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-timeline-block]";

/// Default CSS for the block along with easy-to-override design tokens.
pub const DEFAULT_STYLES: &str = r#"
:root {
  --timeline-font-family: 'PT Sans', system-ui, -apple-system, 'Segoe UI', sans-serif;
  --timeline-bg: #f6f7fa;
  --timeline-text: #42567a;
  --timeline-muted: #465175;
  --timeline-line: #e2e4ea;
  --timeline-accent: #f36ba6;
  --timeline-accent-soft: #6566f6;
  --timeline-card-bg: #ffffff;
  --timeline-card-radius: 16px;
  --timeline-dot-active-bg: #ffffff;
}

.timeline-block {
  font-family: var(--timeline-font-family);
  color: var(--timeline-text);
  background: var(--timeline-bg);
  position: relative;
  padding: 48px 40px;
  overflow: hidden;
}

.timeline-header {
  display: flex;
  align-items: center;
  font-size: 40px;
  font-weight: 700;
  line-height: 1.2;
  margin-bottom: 48px;
}

.timeline-header-accent {
  border-left: 4px solid var(--timeline-accent);
  margin-right: 16px;
  height: 32px;
}

.timeline-circle {
  position: relative;
  margin: 0 auto;
}

.timeline-period-dots {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.timeline-years {
  position: absolute;
  top: 50%;
  left: 50%;
  transform: translate(-50%, -50%);
  display: flex;
  gap: 48px;
  font-size: 120px;
  font-weight: 700;
  letter-spacing: -0.02em;
  white-space: nowrap;
  pointer-events: none;
}

.timeline-year.is-inactive {
  color: var(--timeline-accent-soft);
}

.timeline-year.is-active {
  color: var(--timeline-accent);
}

@keyframes timeline-year-enter {
  from {
    transform: translateY(40px);
    opacity: 0;
  }
  to {
    transform: translateY(0);
    opacity: 1;
  }
}

.timeline-dot {
  position: absolute;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  border: 1px solid var(--timeline-text);
  background: var(--timeline-text);
  color: transparent;
  font-size: 16px;
  cursor: pointer;
  transform: scale(0.15);
  transition: transform 0.3s ease, background 0.3s ease, color 0.3s ease;
}

.timeline-dot:hover,
.timeline-dot:focus-visible,
.timeline-dot.is-active {
  transform: scale(1);
  background: var(--timeline-dot-active-bg);
  color: var(--timeline-text);
}

.timeline-dot-label {
  position: absolute;
  left: 120%;
  top: 50%;
  transform: translateY(-50%);
  font-size: 14px;
  color: var(--timeline-muted);
  white-space: nowrap;
  font-weight: 400;
  opacity: 0;
  transition: opacity 0.3s ease;
}

.timeline-dot.is-active .timeline-dot-label {
  opacity: 1;
}

.timeline-slider {
  margin-top: 56px;
}

.timeline-carousel {
  position: relative;
  padding: 0 56px 40px;
}

.timeline-carousel-viewport {
  overflow: hidden;
}

.timeline-carousel-track {
  display: flex;
  transition: transform 0.3s ease;
}

.timeline-card {
  background: var(--timeline-card-bg);
  border-radius: var(--timeline-card-radius);
  box-shadow: 0 2px 16px #e2e4ea55;
  padding: 32px;
  min-height: 220px;
  display: flex;
  flex-direction: column;
  gap: 12px;
  box-sizing: border-box;
}

.timeline-card-year {
  color: var(--timeline-accent-soft);
  font-weight: 700;
  font-size: 18px;
}

.timeline-card-title {
  font-weight: 700;
  font-size: 16px;
}

.timeline-card-description {
  color: var(--timeline-muted);
  font-size: 15px;
}

.timeline-carousel-prev,
.timeline-carousel-next {
  position: absolute;
  top: calc(50% - 20px);
  transform: translateY(-50%);
  width: 40px;
  height: 40px;
  border-radius: 50%;
  border: none;
  background: var(--timeline-card-bg);
  box-shadow: 0 0 15px rgba(56, 119, 238, 0.1);
  cursor: pointer;
}

.timeline-carousel-prev {
  left: 0;
}

.timeline-carousel-next {
  right: 0;
}

.timeline-carousel-prev::after,
.timeline-carousel-next::after {
  color: var(--timeline-accent-soft);
  font-size: 18px;
}

.timeline-carousel-prev::after {
  content: '‹';
}

.timeline-carousel-next::after {
  content: '›';
}

.timeline-carousel-prev:disabled,
.timeline-carousel-next:disabled {
  opacity: 0.35;
  cursor: default;
}

.timeline-carousel-pagination {
  position: absolute;
  bottom: 0;
  left: 0;
  right: 0;
  display: flex;
  justify-content: center;
  gap: 10px;
}

.timeline-bullet {
  width: 8px;
  height: 8px;
  padding: 0;
  border: none;
  border-radius: 50%;
  background: var(--timeline-text);
  opacity: 0.4;
  cursor: pointer;
}

.timeline-bullet.is-active {
  opacity: 1;
}

@media (max-width: 900px) {
  .timeline-years {
    font-size: 80px;
    gap: 24px;
  }
}

@media (max-width: 600px) {
  .timeline-block {
    padding: 24px 20px;
  }

  .timeline-header {
    font-size: 20px;
    margin-bottom: 24px;
  }

  .timeline-years {
    font-size: 56px;
  }

  .timeline-carousel {
    padding: 0 0 40px;
  }

  .timeline-carousel-prev,
  .timeline-carousel-next {
    display: none;
  }
}
"#;

pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no <head>"))?;

    let style_el = document.create_element("style")?;
    style_el.set_attribute("data-timeline-block", "v1")?;
    style_el.set_text_content(Some(DEFAULT_STYLES));
    head.append_child(&style_el.clone().dyn_into::<Node>()?)?;

    Ok(())
}
