use web_sys::Storage;

use super::PreferenceStore;
use crate::consts::THEME_STORAGE_KEY;
use crate::theme::Theme;

/// LocalStorage-backed preference store
///
/// A missing or blocked LocalStorage reads as "no preference" and drops writes.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable - theme preference will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self) -> Option<Theme> {
        let raw = self.storage.as_ref()?.get_item(THEME_STORAGE_KEY).ok()??;
        let theme = Theme::from_str(&raw);
        if theme.is_none() {
            log::warn!("Ignoring stored theme {:?}", raw);
        }
        theme
    }

    fn set(&mut self, theme: Theme) {
        if let Some(storage) = &self.storage {
            if storage.set_item(THEME_STORAGE_KEY, theme.as_str()).is_err() {
                log::warn!("Failed to save theme preference");
            }
        }
    }
}
