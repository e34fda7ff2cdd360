//! Selection state of the timeline block and its cascade onto the year
//! readout and the event carousel.

use crate::{
    Carousel, DialDot, Periods, TimelineConfig, TimelineError, TimelineEvent, TimelinePeriod,
};

/// Viewport width assumed until the host reports one.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1024;

/// Outcome of activating a dial control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// The period changed; the readout replays and the carousel restarts.
    Changed { from: usize, to: usize },
    /// The control was already active.
    Unchanged,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineWidget {
    periods: Periods,
    config: TimelineConfig,
    selection: usize,
    /// Bumped on every effective selection change; views key the readout
    /// labels by it so the entrance transition restarts.
    transition_epoch: u64,
    viewport_width: u32,
    carousel: Carousel,
}

impl TimelineWidget {
    pub fn new(periods: Periods, config: TimelineConfig) -> Self {
        Self::with_viewport(periods, config, DEFAULT_VIEWPORT_WIDTH)
    }

    pub fn with_viewport(periods: Periods, config: TimelineConfig, viewport_width: u32) -> Self {
        let carousel = Carousel::new(
            periods[0].events.len(),
            config.slides_per_view(viewport_width),
        );
        Self {
            periods,
            config,
            selection: 0,
            transition_epoch: 0,
            viewport_width,
            carousel,
        }
    }

    /// Validates `periods` against `config` and builds the widget.
    pub fn from_periods(
        periods: Vec<TimelinePeriod>,
        config: TimelineConfig,
    ) -> Result<Self, TimelineError> {
        let periods = Periods::new(periods, config.reject_duplicate_keys)?;
        Ok(Self::new(periods, config))
    }

    pub fn periods(&self) -> &Periods {
        &self.periods
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn transition_epoch(&self) -> u64 {
        self.transition_epoch
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    pub fn active_period(&self) -> &TimelinePeriod {
        &self.periods[self.selection]
    }

    /// Start and end year shown by the readout.
    pub fn years(&self) -> [i32; 2] {
        self.active_period().years
    }

    pub fn events(&self) -> &[TimelineEvent] {
        &self.active_period().events
    }

    /// Events currently in view, in display order.
    pub fn visible_events(&self) -> &[TimelineEvent] {
        &self.events()[self.carousel.visible_range()]
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Positioned dial controls, one per period.
    pub fn dial(&self) -> Vec<DialDot> {
        let total = self.periods.len();
        self.periods
            .iter()
            .enumerate()
            .filter_map(|(index, period)| {
                let position = self.config.dial.position(index, total)?;
                Some(DialDot {
                    index,
                    label: period.label.clone(),
                    position,
                    active: index == self.selection,
                })
            })
            .collect()
    }

    /// Activates dial control `index`.
    pub fn select(&mut self, index: usize) -> Result<SelectionChange, TimelineError> {
        if index >= self.periods.len() {
            return Err(TimelineError::SelectionOutOfRange {
                index,
                len: self.periods.len(),
            });
        }
        if index == self.selection {
            return Ok(SelectionChange::Unchanged);
        }

        let from = self.selection;
        self.selection = index;
        self.on_selection_changed();
        log::debug!(
            "period {from} -> {index} ({:?}), epoch {}",
            self.active_period().label,
            self.transition_epoch
        );
        Ok(SelectionChange::Changed { from, to: index })
    }

    fn on_selection_changed(&mut self) {
        self.transition_epoch += 1;
        self.carousel = Carousel::new(
            self.events().len(),
            self.config.slides_per_view(self.viewport_width),
        );
    }

    /// Swaps in new data and config, back on the first period. The
    /// transition epoch keeps counting so the readout replays.
    pub fn reset(&mut self, periods: Periods, config: TimelineConfig) {
        self.periods = periods;
        self.config = config;
        self.selection = 0;
        self.on_selection_changed();
        log::debug!(
            "reset to {} periods, epoch {}",
            self.periods.len(),
            self.transition_epoch
        );
    }

    /// Resets only when the host handed over different periods or config.
    /// Returns whether anything changed.
    pub fn sync(&mut self, periods: Periods, config: TimelineConfig) -> bool {
        if periods == self.periods && config == self.config {
            return false;
        }
        self.reset(periods, config);
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.carousel.next()
    }

    pub fn prev_page(&mut self) -> bool {
        self.carousel.prev()
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.carousel.go_to(page);
    }

    pub fn set_viewport_width(&mut self, width: u32) {
        self.viewport_width = width;
        self.carousel.set_per_view(self.config.slides_per_view(width));
    }

    /// Class list for the root section, with the host's extra class.
    pub fn section_class(class_name: Option<&str>) -> String {
        format!("timeline-block {}", class_name.unwrap_or_default())
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(events_per_period: &[usize]) -> TimelineWidget {
        let periods = events_per_period
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                let events = (0..count)
                    .map(|e| TimelineEvent::new(2000 + e as i32, format!("e{e}"), "d"))
                    .collect();
                TimelinePeriod::new(format!("p{i}"), [2000, 2010], events)
            })
            .collect();
        TimelineWidget::from_periods(periods, TimelineConfig::default()).unwrap()
    }

    #[test]
    fn out_of_range_selection_is_an_error() {
        let mut w = widget(&[1, 2]);
        assert_eq!(
            w.select(2),
            Err(TimelineError::SelectionOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(w.selection(), 0);
    }

    #[test]
    fn changing_period_restarts_carousel_and_transition() {
        let mut w = widget(&[6, 6]);
        assert!(w.next_page());
        assert!(w.next_page());
        assert_eq!(w.carousel().page(), 2);

        assert_eq!(w.select(1), Ok(SelectionChange::Changed { from: 0, to: 1 }));
        assert_eq!(w.carousel().page(), 0);
        assert_eq!(w.transition_epoch(), 1);
    }

    #[test]
    fn reselecting_keeps_paging() {
        let mut w = widget(&[6, 6]);
        w.next_page();
        assert_eq!(w.select(0), Ok(SelectionChange::Unchanged));
        assert_eq!(w.carousel().page(), 1);
        assert_eq!(w.transition_epoch(), 0);
    }

    #[test]
    fn reset_applies_new_config_and_replays_readout() {
        let mut w = widget(&[6, 6]);
        w.select(1).unwrap();
        w.next_page();
        w.set_viewport_width(700);
        let epoch = w.transition_epoch();

        let periods = w.periods().clone();
        let config = TimelineConfig {
            breakpoints: vec![crate::Breakpoint::new(0, 3)],
            ..TimelineConfig::default()
        };
        w.reset(periods, config.clone());

        assert_eq!(w.config(), &config);
        assert_eq!(w.selection(), 0);
        assert_eq!(w.carousel().page(), 0);
        assert_eq!(w.carousel().per_view(), 3);
        assert_eq!(w.viewport_width(), 700);
        assert_eq!(w.transition_epoch(), epoch + 1);
    }

    #[test]
    fn reset_from_fresh_widget_still_bumps_epoch() {
        let mut w = widget(&[2]);
        let periods = w.periods().clone();
        w.reset(periods, TimelineConfig::default());
        assert_eq!(w.transition_epoch(), 1);
    }

    #[test]
    fn sync_picks_up_config_only_changes() {
        let mut w = widget(&[4, 4]);
        let periods = w.periods().clone();
        assert!(!w.sync(periods.clone(), TimelineConfig::default()));
        assert_eq!(w.transition_epoch(), 0);

        let config = TimelineConfig {
            heading: "Timeline".to_string(),
            ..TimelineConfig::default()
        };
        assert!(w.sync(periods, config));
        assert_eq!(w.config().heading, "Timeline");
        assert_eq!(w.transition_epoch(), 1);
    }

    #[test]
    fn viewport_drives_cards_per_view() {
        let mut w = widget(&[5]);
        assert_eq!(w.carousel().per_view(), 3);
        w.set_viewport_width(500);
        assert_eq!(w.carousel().per_view(), 1);
        assert_eq!(w.visible_events().len(), 1);
        w.set_viewport_width(700);
        assert_eq!(w.visible_events().len(), 2);
    }

    #[test]
    fn dial_marks_the_active_dot() {
        let mut w = widget(&[1, 1, 1]);
        w.select(2).unwrap();
        let active: Vec<_> = w.dial().iter().filter(|d| d.active).map(|d| d.ordinal()).collect();
        assert_eq!(active, vec![3]);
    }

    #[test]
    fn section_class_appends_host_class() {
        assert_eq!(TimelineWidget::section_class(None), "timeline-block");
        assert_eq!(
            TimelineWidget::section_class(Some("wide")),
            "timeline-block wide"
        );
    }
}
