//! Light/dark theme state
//!
//! The active theme lives on the document `data-theme` attribute and is mirrored
//! into a sun/moon icon pair. Exactly one icon is visible at any time.

use serde::{Deserialize, Serialize};

use crate::persistence::PreferenceStore;

/// Display theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value. Only the exact literals are accepted.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The other theme
    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// (sun, moon) icon opacities for this theme
    pub fn icon_opacities(self) -> (f32, f32) {
        match self {
            Theme::Dark => (0.0, 1.0),
            Theme::Light => (1.0, 0.0),
        }
    }
}

/// Pick the startup theme: stored preference, then the OS preference, then dark.
pub fn initial_theme(stored: Option<Theme>, prefers_light: bool) -> Theme {
    match stored {
        Some(theme) => theme,
        None if prefers_light => Theme::Light,
        None => Theme::Dark,
    }
}

/// What the page should render after a theme change
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeView {
    pub theme: Theme,
    pub sun_opacity: f32,
    pub moon_opacity: f32,
}

impl ThemeView {
    fn of(theme: Theme) -> Self {
        let (sun_opacity, moon_opacity) = theme.icon_opacities();
        Self {
            theme,
            sun_opacity,
            moon_opacity,
        }
    }

    /// Number of icons drawn fully opaque
    pub fn visible_icons(&self) -> usize {
        [self.sun_opacity, self.moon_opacity]
            .iter()
            .filter(|&&o| o >= 1.0)
            .count()
    }
}

/// Owns the current theme and keeps the preference store in sync with it
pub struct ThemePresenter<S: PreferenceStore> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemePresenter<S> {
    /// Resolve the startup theme and apply it
    pub fn init(store: S, prefers_light: bool) -> (Self, ThemeView) {
        let stored = store.get();
        let theme = initial_theme(stored, prefers_light);
        log::info!(
            "Initial theme: {} (stored: {})",
            theme.as_str(),
            stored.map(|t| t.as_str()).unwrap_or("none")
        );

        let mut presenter = Self {
            store,
            current: theme,
        };
        let view = presenter.apply(theme);
        (presenter, view)
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Make `theme` active and persist it
    pub fn apply(&mut self, theme: Theme) -> ThemeView {
        self.current = theme;
        self.store.set(theme);
        ThemeView::of(theme)
    }

    /// Flip between light and dark
    pub fn toggle(&mut self) -> ThemeView {
        let next = self.current.flipped();
        log::debug!("Theme toggled to {}", next.as_str());
        self.apply(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use proptest::prelude::*;

    fn any_theme() -> impl Strategy<Value = Theme> {
        prop_oneof![Just(Theme::Light), Just(Theme::Dark)]
    }

    #[test]
    fn test_parse_only_exact_literals() {
        assert_eq!(Theme::from_str("light"), Some(Theme::Light));
        assert_eq!(Theme::from_str("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_str("Dark"), None);
        assert_eq!(Theme::from_str(""), None);
    }

    #[test]
    fn test_initial_theme_policy() {
        assert_eq!(initial_theme(Some(Theme::Dark), true), Theme::Dark);
        assert_eq!(initial_theme(Some(Theme::Light), false), Theme::Light);
        assert_eq!(initial_theme(None, true), Theme::Light);
        assert_eq!(initial_theme(None, false), Theme::Dark);
    }

    #[test]
    fn test_init_persists_resolved_theme() {
        let (presenter, view) = ThemePresenter::init(MemoryStore::default(), true);
        assert_eq!(view.theme, Theme::Light);
        assert_eq!(presenter.store().get(), Some(Theme::Light));
    }

    #[test]
    fn test_dark_shows_moon() {
        let (mut presenter, _) = ThemePresenter::init(MemoryStore::default(), false);
        let view = presenter.apply(Theme::Dark);
        assert_eq!(view.moon_opacity, 1.0);
        assert_eq!(view.sun_opacity, 0.0);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        let t: Theme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(t, Theme::Dark);
    }

    proptest! {
        #[test]
        fn prop_apply_persists_and_shows_one_icon(theme in any_theme(), start in any_theme()) {
            let store = MemoryStore::with(start);
            let (mut presenter, _) = ThemePresenter::init(store, false);
            let view = presenter.apply(theme);
            prop_assert_eq!(view.theme, theme);
            prop_assert_eq!(presenter.current(), theme);
            prop_assert_eq!(presenter.store().get(), Some(theme));
            prop_assert_eq!(view.visible_icons(), 1);
        }

        #[test]
        fn prop_toggle_twice_is_identity(start in any_theme(), prefers_light in any::<bool>()) {
            let (mut presenter, first) = ThemePresenter::init(MemoryStore::with(start), prefers_light);
            presenter.toggle();
            let view = presenter.toggle();
            prop_assert_eq!(view, first);
            prop_assert_eq!(presenter.store().get(), Some(start));
        }
    }
}
