//! Sticky header and scroll-to-top visibility

use crate::consts::{SCROLL_TOP_OFFSET, STICKY_HEADER_OFFSET};

/// What the page should show for a given scroll offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollView {
    pub sticky_header: bool,
    pub show_scroll_top: bool,
}

impl ScrollView {
    pub fn at(offset: f64) -> Self {
        Self {
            sticky_header: offset > STICKY_HEADER_OFFSET,
            show_scroll_top: offset > SCROLL_TOP_OFFSET,
        }
    }

    /// CSS `display` for the scroll-to-top button
    pub fn scroll_top_display(&self) -> &'static str {
        if self.show_scroll_top { "block" } else { "none" }
    }
}

/// Tracks the last scroll offset seen
#[derive(Debug, Clone, Default)]
pub struct ScrollPresenter {
    last_offset: f64,
    view: ScrollView,
}

impl ScrollPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll event at vertical offset `offset`
    pub fn on_scroll(&mut self, offset: f64) -> ScrollView {
        self.last_offset = offset;
        let view = ScrollView::at(offset);
        if view != self.view {
            log::debug!("Scroll view changed at {offset}: {view:?}");
        }
        self.view = view;
        view
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    pub fn view(&self) -> ScrollView {
        self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_top_of_page() {
        let view = ScrollPresenter::new().on_scroll(0.0);
        assert_eq!(view, ScrollView::default());
        assert_eq!(view.scroll_top_display(), "none");
    }

    #[test]
    fn test_boundaries_are_exclusive() {
        let mut presenter = ScrollPresenter::new();
        assert!(!presenter.on_scroll(50.0).sticky_header);
        assert!(presenter.on_scroll(50.5).sticky_header);
        assert!(!presenter.on_scroll(300.0).show_scroll_top);
        assert!(presenter.on_scroll(301.0).show_scroll_top);
    }

    #[test]
    fn test_scrolling_back_up_unsticks() {
        let mut presenter = ScrollPresenter::new();
        presenter.on_scroll(900.0);
        let view = presenter.on_scroll(10.0);
        assert!(!view.sticky_header);
        assert!(!view.show_scroll_top);
        assert_eq!(presenter.last_offset(), 10.0);
    }

    proptest! {
        #[test]
        fn prop_view_follows_last_offset(offsets in prop::collection::vec(0.0f64..2000.0, 1..20)) {
            let mut presenter = ScrollPresenter::new();
            for &y in &offsets {
                presenter.on_scroll(y);
            }
            let last = *offsets.last().unwrap();
            prop_assert_eq!(presenter.view().sticky_header, last > 50.0);
            prop_assert_eq!(presenter.view().show_scroll_top, last > 300.0);
        }
    }
}
