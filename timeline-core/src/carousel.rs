//! Paging state of the event carousel.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// From `min_width` CSS pixels upwards, show `per_view` cards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Breakpoint {
    pub min_width: u32,
    pub per_view: usize,
}

impl Breakpoint {
    pub const fn new(min_width: u32, per_view: usize) -> Self {
        Self {
            min_width,
            per_view,
        }
    }

    pub fn defaults() -> Vec<Breakpoint> {
        vec![
            Breakpoint::new(0, 1),
            Breakpoint::new(600, 2),
            Breakpoint::new(900, 3),
        ]
    }

    /// Cards per view for `width`: the widest breakpoint not above it,
    /// or a single card when none applies.
    pub fn resolve(breakpoints: &[Breakpoint], width: u32) -> usize {
        breakpoints
            .iter()
            .filter(|bp| bp.min_width <= width)
            .max_by_key(|bp| bp.min_width)
            .map(|bp| bp.per_view.max(1))
            .unwrap_or(1)
    }
}

/// One page advances by one card; there is no looping.
///
/// A new `Carousel` is built for every active period, so paging always
/// starts from the first page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    slide_count: usize,
    per_view: usize,
    page: usize,
}

impl Carousel {
    pub fn new(slide_count: usize, per_view: usize) -> Self {
        Self {
            slide_count,
            per_view: per_view.max(1),
            page: 0,
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn per_view(&self) -> usize {
        self.per_view
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.slide_count.saturating_sub(self.per_view) + 1
    }

    pub fn can_prev(&self) -> bool {
        self.page > 0
    }

    pub fn can_next(&self) -> bool {
        self.page + 1 < self.page_count()
    }

    /// Returns whether the page moved.
    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.page += 1;
        log::debug!("carousel page -> {}", self.page);
        true
    }

    pub fn prev(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        self.page -= 1;
        log::debug!("carousel page -> {}", self.page);
        true
    }

    /// Jumps to `page`, clamped to the last page.
    pub fn go_to(&mut self, page: usize) {
        self.page = page.min(self.page_count() - 1);
    }

    /// Applies a new cards-per-view count, keeping the page in range.
    pub fn set_per_view(&mut self, per_view: usize) {
        self.per_view = per_view.max(1);
        self.go_to(self.page);
    }

    /// Indices of the cards currently in view.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.page + self.per_view).min(self.slide_count);
        self.page.min(end)..end
    }

    /// Horizontal track offset for the current page, as a percentage of one
    /// card's width plus gaps: `(percent, gap_px)`.
    pub fn track_offset(&self, space_between: f64) -> (f64, f64) {
        let percent = -(self.page as f64) * 100.0 / self.per_view as f64;
        let gap = -(self.page as f64) * space_between / self.per_view as f64;
        (percent, gap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_pick_cards_per_view() {
        let bps = Breakpoint::defaults();
        assert_eq!(Breakpoint::resolve(&bps, 320), 1);
        assert_eq!(Breakpoint::resolve(&bps, 599), 1);
        assert_eq!(Breakpoint::resolve(&bps, 600), 2);
        assert_eq!(Breakpoint::resolve(&bps, 899), 2);
        assert_eq!(Breakpoint::resolve(&bps, 900), 3);
        assert_eq!(Breakpoint::resolve(&bps, 2560), 3);
    }

    #[test]
    fn unordered_breakpoints_still_resolve() {
        let bps = vec![Breakpoint::new(900, 3), Breakpoint::new(600, 2)];
        assert_eq!(Breakpoint::resolve(&bps, 700), 2);
        assert_eq!(Breakpoint::resolve(&bps, 100), 1);
    }

    #[test]
    fn paging_stops_at_both_ends() {
        let mut carousel = Carousel::new(5, 3);
        assert_eq!(carousel.page_count(), 3);
        assert!(!carousel.prev());
        assert!(carousel.next());
        assert!(carousel.next());
        assert!(!carousel.next());
        assert_eq!(carousel.page(), 2);
        assert_eq!(carousel.visible_range(), 2..5);
    }

    #[test]
    fn fewer_cards_than_view_is_one_page() {
        let carousel = Carousel::new(1, 3);
        assert_eq!(carousel.page_count(), 1);
        assert!(!carousel.can_next());
        assert_eq!(carousel.visible_range(), 0..1);

        let empty = Carousel::new(0, 2);
        assert_eq!(empty.page_count(), 1);
        assert_eq!(empty.visible_range(), 0..0);
    }

    #[test]
    fn widening_clamps_page() {
        let mut carousel = Carousel::new(4, 1);
        carousel.go_to(3);
        assert_eq!(carousel.page(), 3);
        carousel.set_per_view(3);
        assert_eq!(carousel.page(), 1);
        assert_eq!(carousel.visible_range(), 1..4);
    }

    #[test]
    fn go_to_clamps() {
        let mut carousel = Carousel::new(3, 1);
        carousel.go_to(10);
        assert_eq!(carousel.page(), 2);
    }

    #[test]
    fn track_offset_moves_one_card_per_page() {
        let mut carousel = Carousel::new(6, 2);
        carousel.go_to(1);
        assert_eq!(carousel.track_offset(32.0), (-50.0, -16.0));
    }
}
