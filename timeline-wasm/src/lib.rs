//! Framework-neutral WASM <-> JavaScript bridge for the timeline block's
//! layout and paging helpers.

use serde::Deserialize;
use serde_wasm_bindgen::{from_value, to_value};
use timeline_core::{TimelineConfig, TimelineError};
use wasm_bindgen::prelude::*;

/// Reads the same nested shape as `TimelineConfig`'s serde form, so one
/// config object works here, in `mount_timeline_block` and in the CLI.
/// Missing fields fall back to defaults; unknown fields are an error.
fn config_from_json(value: serde_json::Value) -> Result<TimelineConfig, String> {
    TimelineConfig::deserialize(value).map_err(|err| format!("could not read config: {err}"))
}

fn read_config(config: Option<JsValue>) -> Result<TimelineConfig, JsValue> {
    match config {
        Some(js_cfg) if !js_cfg.is_undefined() && !js_cfg.is_null() => {
            let value: serde_json::Value = from_value(js_cfg)
                .map_err(|err| JsValue::from_str(&format!("could not read config: {err}")))?;
            config_from_json(value).map_err(|err| JsValue::from_str(&err))
        }
        _ => Ok(TimelineConfig::default()),
    }
}

/// `[{ left, top }, ...]` for a dial of `count` periods.
#[wasm_bindgen]
pub fn dial_positions(count: usize, config: Option<JsValue>) -> Result<JsValue, JsValue> {
    let cfg = read_config(config)?;
    if count == 0 {
        return Err(JsValue::from_str(&format_timeline_error(
            TimelineError::EmptyPeriods,
        )));
    }
    to_value(&cfg.dial.positions(count))
        .map_err(|err| JsValue::from_str(&format!("could not serialize positions: {err}")))
}

/// Cards per view for a viewport `width` in CSS pixels.
#[wasm_bindgen]
pub fn slides_per_view(width: u32, config: Option<JsValue>) -> Result<usize, JsValue> {
    Ok(read_config(config)?.slides_per_view(width))
}

/// Validates a period list and returns it in canonical form.
#[wasm_bindgen]
pub fn normalize_periods(periods: JsValue, config: Option<JsValue>) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let cfg = read_config(config)?;
    let value = from_value::<serde_json::Value>(periods)
        .map_err(|err| JsValue::from_str(&format!("could not read periods: {err}")))?;

    let periods = timeline_data::periods_from_value(&value, &cfg)
        .map_err(|err| JsValue::from_str(&format_timeline_error(err)))?;

    to_value(&periods.to_vec())
        .map_err(|err| JsValue::from_str(&format!("could not serialize periods: {err}")))
}

/// The built-in dataset.
#[wasm_bindgen]
pub fn default_periods() -> Result<JsValue, JsValue> {
    to_value(&timeline_data::timeline_data())
        .map_err(|err| JsValue::from_str(&format!("could not serialize periods: {err}")))
}

fn format_timeline_error(err: TimelineError) -> String {
    format!("Timeline error: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;
    use timeline_core::Breakpoint;

    #[test]
    fn nested_config_matches_core_shape() {
        let raw = json!({ "dial": { "radius": 100 }, "space_between": 16 });
        let bridged = config_from_json(raw.clone()).unwrap();
        let core: TimelineConfig = serde_json::from_value(raw).unwrap();

        assert_eq!(bridged, core);
        assert_eq!(bridged.dial.radius, 100.0);
        assert_eq!(bridged.dial.circle_size, 520.0);
        assert_eq!(bridged.space_between, 16.0);
        assert_eq!(bridged.dial.positions(1)[0].top, 260.0 - 100.0 - 20.0);
    }

    #[test]
    fn partial_config_covers_every_section() {
        let cfg = config_from_json(json!({
            "breakpoints": [{ "min_width": 0, "per_view": 2 }],
            "transition": { "duration": 0.25 },
            "heading": "Timeline",
            "reject_duplicate_keys": true
        }))
        .unwrap();
        assert_eq!(cfg.breakpoints, vec![Breakpoint::new(0, 2)]);
        assert_eq!(cfg.slides_per_view(1200), 2);
        assert_eq!(cfg.transition.duration, 0.25);
        assert_eq!(cfg.transition.stagger, 0.1);
        assert_eq!(cfg.heading, "Timeline");
        assert!(cfg.reject_duplicate_keys);
    }

    #[test]
    fn flat_config_is_an_error() {
        let err = config_from_json(json!({ "radius": 100, "circle_size": 400 })).unwrap_err();
        assert!(err.contains("unknown field `radius`"), "{err}");
    }

    #[test]
    fn errors_are_prefixed() {
        assert_eq!(
            format_timeline_error(TimelineError::EmptyPeriods),
            "Timeline error: timeline needs at least one period"
        );
    }
}
