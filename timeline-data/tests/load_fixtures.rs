use std::fs;

use timeline_core::{TimelineConfig, TimelineError, TimelineWidget};
use timeline_data::{periods_from_str, timeline_data};

fn fixture_path(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn read_fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name)).expect("fixture should be readable")
}

#[test]
fn two_period_fixture_drives_widget() {
    let config = TimelineConfig::default();
    let periods = periods_from_str(&read_fixture("two_periods.json"), &config)
        .expect("fixture should load");
    assert_eq!(periods.len(), 2);

    let mut widget = TimelineWidget::new(periods, config);
    assert_eq!(widget.years(), [1900, 1920]);
    assert_eq!(widget.events()[0].key(), "1905X");

    widget.select(1).expect("second period exists");
    let keys: Vec<String> = widget.events().iter().map(|e| e.key()).collect();
    assert_eq!(keys, vec!["1960Y", "1965Z"]);
    assert_eq!(widget.carousel().page(), 0);
}

#[test]
fn duplicate_keys_warn_by_default_and_fail_when_strict() {
    let json = read_fixture("duplicate_keys.json");

    let lenient = periods_from_str(&json, &TimelineConfig::default()).expect("lenient load");
    assert_eq!(lenient[0].events.len(), 3);

    let strict = TimelineConfig {
        reject_duplicate_keys: true,
        ..TimelineConfig::default()
    };
    let err = periods_from_str(&json, &strict).unwrap_err();
    assert_eq!(
        err,
        TimelineError::DuplicateEventKey {
            period: "Космос".to_string(),
            key: "1961Восток-1".to_string(),
        }
    );
}

#[test]
fn builtin_data_survives_json_round_trip() {
    let data = timeline_data();
    let json = serde_json::to_string(&data).expect("serialize");
    let periods = periods_from_str(&json, &TimelineConfig::default()).expect("reload");
    assert_eq!(periods.to_vec(), data);
}
