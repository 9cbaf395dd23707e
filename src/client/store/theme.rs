use std::rc::Rc;

use crate::client::{
    constant::THEME_STORAGE_KEY, model::error::StorageError, store::storage::KeyValueStorage,
};

/// Dark mode preference, stored as a JSON boolean.
#[derive(Clone)]
pub struct ThemeStore {
    storage: Rc<dyn KeyValueStorage>,
    is_dark: bool,
}

impl ThemeStore {
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        let is_dark = storage
            .get(THEME_STORAGE_KEY)
            .and_then(|saved| serde_json::from_str::<bool>(&saved).ok())
            .unwrap_or(false);

        Self { storage, is_dark }
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    /// Switches the theme. The in-page theme changes even when it cannot be
    /// persisted; the error is returned for logging.
    pub fn toggle(&mut self) -> Result<(), StorageError> {
        self.is_dark = !self.is_dark;
        self.storage
            .set(THEME_STORAGE_KEY, if self.is_dark { "true" } else { "false" })
    }
}
