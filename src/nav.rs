//! Mobile navigation menu
//!
//! Two states per page load, starting closed. The link container carries the
//! `open` class while open, and the toggle button swaps its menu/close glyphs.

/// CSS `display` values for the (menu, close) glyph pair
pub type GlyphDisplay = (&'static str, &'static str);

/// Open/closed state of the mobile menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Toggle button activated. Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A nav link was activated. Returns true if the menu was open and is now closed.
    pub fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }

    /// Menu glyph shows while closed, close glyph while open
    pub fn glyphs(&self) -> GlyphDisplay {
        if self.open {
            ("none", "block")
        } else {
            ("block", "none")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_closed() {
        let menu = NavMenu::new();
        assert!(!menu.is_open());
        assert_eq!(menu.glyphs(), ("block", "none"));
    }

    #[test]
    fn test_toggle_swaps_glyphs() {
        let mut menu = NavMenu::new();
        assert!(menu.toggle());
        assert_eq!(menu.glyphs(), ("none", "block"));
        assert!(!menu.toggle());
        assert_eq!(menu.glyphs(), ("block", "none"));
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut menu = NavMenu::new();
        assert!(!menu.close());
        menu.toggle();
        assert!(menu.close());
        assert!(!menu.close());
        assert_eq!(menu.glyphs(), ("block", "none"));
    }

    proptest! {
        #[test]
        fn prop_toggle_parity(n in 0usize..64) {
            let mut menu = NavMenu::new();
            for _ in 0..n {
                menu.toggle();
            }
            prop_assert_eq!(menu.is_open(), n % 2 == 1);
        }

        #[test]
        fn prop_link_always_closes(n in 0usize..64) {
            let mut menu = NavMenu::new();
            for _ in 0..n {
                menu.toggle();
            }
            menu.close();
            prop_assert!(!menu.is_open());
        }
    }
}
