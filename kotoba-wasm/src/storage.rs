//! `localStorage`-backed preference slot.

use crate::errors::describe;
use kotoba_core::{Error, Language, PreferenceStore, Result};
use web_sys::Storage;

/// Persists the explicit language choice under a single key.
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    /// Store writing under `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    // Looked up on every access: storage can be disabled while the page lives.
    fn storage(&self) -> Result<Storage> {
        let win = web_sys::window().ok_or_else(|| Error::storage("no window"))?;
        win.local_storage()
            .map_err(|e| Error::storage(describe(&e)))?
            .ok_or_else(|| Error::storage("localStorage unavailable"))
    }
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self) -> Result<Option<String>> {
        let value = self
            .storage()?
            .get_item(&self.key)
            .map_err(|e| Error::storage(describe(&e)))?;
        // An empty entry is treated as never set.
        Ok(value.filter(|v| !v.is_empty()))
    }

    fn save(&mut self, language: Language) -> Result<()> {
        self.storage()?
            .set_item(&self.key, language.code())
            .map_err(|e| Error::storage(describe(&e)))
    }
}
