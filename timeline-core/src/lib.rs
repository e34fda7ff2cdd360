//! Core logic for the historical timeline block: period data, dial layout,
//! year readout transition and event carousel paging.
//!
//! Nothing in this crate touches the DOM. The Yew component in `timeline-ui`
//! and the demo CLI both drive the same [`TimelineWidget`] state machine.

mod carousel;
mod config;
mod dial;
mod model;
mod transition;
mod widget;

pub use carousel::{Breakpoint, Carousel};
pub use config::TimelineConfig;
pub use dial::{DialDot, DialGeometry, DotPosition};
pub use model::{Periods, TimelineEvent, TimelinePeriod};
pub use transition::{Easing, EntranceTransition, TweenState};
pub use widget::{SelectionChange, TimelineWidget, DEFAULT_VIEWPORT_WIDTH};

/// Errors raised while building or driving the timeline block.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimelineError {
    #[error("timeline needs at least one period")]
    EmptyPeriods,
    #[error("selection {index} is out of range for {len} periods")]
    SelectionOutOfRange { index: usize, len: usize },
    #[error("period \"{period}\" has more than one event keyed \"{key}\"")]
    DuplicateEventKey { period: String, key: String },
    #[error("could not read timeline data: {0}")]
    Parse(String),
}
