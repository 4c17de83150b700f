//! Theme preference persistence
//!
//! A single key/value entry holds the theme as the literal `light` or `dark`.
//! On web this is LocalStorage; everywhere else an in-memory store stands in.

#[cfg(target_arch = "wasm32")]
mod local;

#[cfg(target_arch = "wasm32")]
pub use local::LocalStore;

use crate::theme::Theme;

/// Storage for the two-valued theme preference
pub trait PreferenceStore {
    /// Stored theme, if one was saved and parses
    fn get(&self) -> Option<Theme>;
    /// Persist the theme
    fn set(&mut self, theme: Theme);
}

/// In-memory store holding the raw stored string
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    raw: Option<String>,
}

impl MemoryStore {
    /// Store pre-seeded with a theme
    pub fn with(theme: Theme) -> Self {
        Self {
            raw: Some(theme.as_str().to_string()),
        }
    }

    /// Store pre-seeded with an arbitrary stored value
    pub fn with_raw(raw: &str) -> Self {
        Self {
            raw: Some(raw.to_string()),
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self) -> Option<Theme> {
        self.raw.as_deref().and_then(Theme::from_str)
    }

    fn set(&mut self, theme: Theme) {
        self.raw = Some(theme.as_str().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_reads_none() {
        assert_eq!(MemoryStore::default().get(), None);
    }

    #[test]
    fn test_set_writes_literal() {
        let mut store = MemoryStore::default();
        store.set(Theme::Light);
        assert_eq!(store.raw(), Some("light"));
        assert_eq!(store.get(), Some(Theme::Light));
    }

    #[test]
    fn test_garbage_value_reads_as_absent() {
        let store = MemoryStore::with_raw("solarized");
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_garbage_falls_back_to_system_preference() {
        use crate::theme::ThemePresenter;

        let (presenter, view) = ThemePresenter::init(MemoryStore::with_raw("solarized"), true);
        assert_eq!(view.theme, Theme::Light);
        assert_eq!(presenter.store().raw(), Some("light"));
    }
}
