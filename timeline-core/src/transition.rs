//! Entrance transition played on the year readout.
//!
//! The browser plays it as a CSS animation; [`EntranceTransition::sample`]
//! evaluates the same curve on the host.

use serde::{Deserialize, Serialize};

/// Easing curves understood by the readout transition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Quadratic ease-out.
    Power1Out,
    /// Cubic ease-out, `1 - (1 - t)^3`.
    Power2Out,
    /// Quartic ease-out.
    Power3Out,
}

impl Easing {
    /// Maps progress `t` (clamped to `0..=1`) onto the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let inv = 1.0 - t;
        match self {
            Easing::Linear => t,
            Easing::Power1Out => 1.0 - inv.powi(2),
            Easing::Power2Out => 1.0 - inv.powi(3),
            Easing::Power3Out => 1.0 - inv.powi(4),
        }
    }

    /// Equivalent CSS timing function.
    pub fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Power1Out => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
            Easing::Power2Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Easing::Power3Out => "cubic-bezier(0.165, 0.84, 0.44, 1)",
        }
    }
}

/// Visual state of one readout label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TweenState {
    /// Vertical offset in CSS pixels.
    pub y: f64,
    pub opacity: f64,
}

impl TweenState {
    fn lerp(self, to: TweenState, k: f64) -> TweenState {
        TweenState {
            y: self.y + (to.y - self.y) * k,
            opacity: self.opacity + (to.opacity - self.opacity) * k,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EntranceTransition {
    pub from: TweenState,
    pub to: TweenState,
    /// Seconds per label.
    pub duration: f64,
    /// Seconds between the starts of consecutive labels.
    pub stagger: f64,
    pub easing: Easing,
}

impl Default for EntranceTransition {
    fn default() -> Self {
        Self {
            from: TweenState { y: 40.0, opacity: 0.0 },
            to: TweenState { y: 0.0, opacity: 1.0 },
            duration: 0.5,
            stagger: 0.1,
            easing: Easing::Power2Out,
        }
    }
}

impl EntranceTransition {
    pub fn delay(&self, child: usize) -> f64 {
        self.stagger * child as f64
    }

    /// Total running time for `children` labels.
    pub fn total_duration(&self, children: usize) -> f64 {
        match children {
            0 => 0.0,
            n => self.delay(n - 1) + self.duration,
        }
    }

    /// State of label `child` at `elapsed` seconds after the trigger.
    pub fn sample(&self, child: usize, elapsed: f64) -> TweenState {
        let local = elapsed - self.delay(child);
        if local <= 0.0 {
            return self.from;
        }
        if self.duration <= 0.0 || local >= self.duration {
            return self.to;
        }
        self.from.lerp(self.to, self.easing.apply(local / self.duration))
    }

    /// Inline `animation` value for label `child`; pairs with the
    /// `timeline-year-enter` keyframes in the default stylesheet.
    pub fn css_animation(&self, child: usize) -> String {
        format!(
            "timeline-year-enter {}ms {} {}ms both",
            (self.duration * 1000.0).round(),
            self.easing.css(),
            (self.delay(child) * 1000.0).round()
        )
    }

    /// Keyframes matching `from`/`to`, for hosts that do not ship the
    /// default stylesheet.
    pub fn css_keyframes(&self) -> String {
        format!(
            "@keyframes timeline-year-enter {{ from {{ transform: translateY({}px); opacity: {}; }} to {{ transform: translateY({}px); opacity: {}; }} }}",
            self.from.y, self.from.opacity, self.to.y, self.to.opacity
        )
    }
}
