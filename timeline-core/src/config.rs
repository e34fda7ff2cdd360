use serde::{Deserialize, Serialize};

use crate::{Breakpoint, DialGeometry, EntranceTransition};

/// Tunable measurements and behaviour of the timeline block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TimelineConfig {
    pub dial: DialGeometry,
    /// Cards per view by viewport width.
    pub breakpoints: Vec<Breakpoint>,
    /// Gap between carousel cards, in CSS pixels.
    pub space_between: f64,
    pub transition: EntranceTransition,
    /// Fail instead of warning when two events of a period share a key.
    pub reject_duplicate_keys: bool,
    pub heading: String,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            dial: DialGeometry::default(),
            breakpoints: Breakpoint::defaults(),
            space_between: 32.0,
            transition: EntranceTransition::default(),
            reject_duplicate_keys: false,
            heading: "Исторические даты".to_string(),
        }
    }
}

impl TimelineConfig {
    pub fn slides_per_view(&self, viewport_width: u32) -> usize {
        Breakpoint::resolve(&self.breakpoints, viewport_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: TimelineConfig =
            serde_json::from_str(r#"{ "space_between": 16, "dial": { "radius": 100 } }"#).unwrap();
        assert_eq!(config.space_between, 16.0);
        assert_eq!(config.dial.radius, 100.0);
        assert_eq!(config.dial.circle_size, 520.0);
        assert_eq!(config.breakpoints, Breakpoint::defaults());
        assert_eq!(config.slides_per_view(650), 2);
    }

    #[test]
    fn flat_keys_are_rejected_instead_of_ignored() {
        let err = serde_json::from_str::<TimelineConfig>(r#"{ "radius": 100 }"#).unwrap_err();
        assert!(err.to_string().contains("unknown field `radius`"), "{err}");

        let err =
            serde_json::from_str::<TimelineConfig>(r#"{ "dial": { "raduis": 100 } }"#).unwrap_err();
        assert!(err.to_string().contains("unknown field `raduis`"), "{err}");
    }
}
