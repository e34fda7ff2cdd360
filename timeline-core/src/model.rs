//! Period and event records.

use std::collections::HashSet;
use std::ops::Deref;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::TimelineError;

/// A single dated event shown as a carousel card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineEvent {
    pub year: i32,
    pub title: String,
    pub description: String,
}

impl TimelineEvent {
    pub fn new(year: i32, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            year,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Card identity: the year immediately followed by the title.
    pub fn key(&self) -> String {
        format!("{}{}", self.year, self.title)
    }
}

/// A labeled two-year range with its events in display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelinePeriod {
    pub label: String,
    pub years: [i32; 2],
    pub events: Vec<TimelineEvent>,
}

impl TimelinePeriod {
    pub fn new(label: impl Into<String>, years: [i32; 2], events: Vec<TimelineEvent>) -> Self {
        Self {
            label: label.into(),
            years,
            events,
        }
    }

    pub fn start_year(&self) -> i32 {
        self.years[0]
    }

    pub fn end_year(&self) -> i32 {
        self.years[1]
    }

    /// Keys that occur on more than one event, in first-seen order.
    pub fn duplicate_keys(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for event in &self.events {
            let key = event.key();
            if !seen.insert(key.clone()) && !duplicates.contains(&key) {
                duplicates.push(key);
            }
        }
        duplicates
    }
}

/// Non-empty list of periods shared between the widget and its views.
///
/// Cloning is cheap: the underlying list is reference counted.
#[derive(Debug, Clone, PartialEq)]
pub struct Periods(Rc<[TimelinePeriod]>);

impl Periods {
    /// Validates the list. Duplicate event keys are logged; pass `strict`
    /// to turn them into [`TimelineError::DuplicateEventKey`].
    pub fn new(periods: Vec<TimelinePeriod>, strict: bool) -> Result<Self, TimelineError> {
        if periods.is_empty() {
            return Err(TimelineError::EmptyPeriods);
        }

        for period in &periods {
            if let Some(key) = period.duplicate_keys().into_iter().next() {
                if strict {
                    return Err(TimelineError::DuplicateEventKey {
                        period: period.label.clone(),
                        key,
                    });
                }
                log::warn!(
                    "period {:?} has duplicate event key {key:?}; cards may render ambiguously",
                    period.label
                );
            }
        }

        Ok(Self(periods.into()))
    }

    pub fn as_slice(&self) -> &[TimelinePeriod] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<TimelinePeriod> {
        self.0.to_vec()
    }
}

impl Deref for Periods {
    type Target = [TimelinePeriod];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(label: &str, events: Vec<TimelineEvent>) -> TimelinePeriod {
        TimelinePeriod::new(label, [1900, 1920], events)
    }

    #[test]
    fn key_concatenates_year_and_title() {
        let event = TimelineEvent::new(1905, "X", "d1");
        assert_eq!(event.key(), "1905X");
    }

    #[test]
    fn empty_list_is_rejected() {
        assert_eq!(Periods::new(Vec::new(), false), Err(TimelineError::EmptyPeriods));
    }

    #[test]
    fn duplicate_keys_are_reported_once() {
        let p = period(
            "A",
            vec![
                TimelineEvent::new(1905, "X", "a"),
                TimelineEvent::new(1905, "X", "b"),
                TimelineEvent::new(1905, "X", "c"),
                TimelineEvent::new(1906, "X", "d"),
            ],
        );
        assert_eq!(p.duplicate_keys(), vec!["1905X".to_string()]);
    }

    #[test]
    fn duplicates_pass_unless_strict() {
        let events = vec![
            TimelineEvent::new(1905, "X", "a"),
            TimelineEvent::new(1905, "X", "b"),
        ];
        assert!(Periods::new(vec![period("A", events.clone())], false).is_ok());

        let err = Periods::new(vec![period("A", events)], true).unwrap_err();
        assert_eq!(
            err,
            TimelineError::DuplicateEventKey {
                period: "A".into(),
                key: "1905X".into(),
            }
        );
    }

    #[test]
    fn years_serialize_as_array() {
        let p = period("A", vec![TimelineEvent::new(1905, "X", "d1")]);
        let value = serde_json::to_value(&p).unwrap();
        assert_eq!(value["years"], serde_json::json!([1900, 1920]));
        assert_eq!(value["events"][0]["title"], "X");
    }
}
