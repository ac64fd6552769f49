//! WASM-specific error handling for the language toggle

use wasm_bindgen::prelude::*;

/// Errors surfaced across the JS boundary
#[derive(Debug, Clone, thiserror::Error)]
pub enum KotobaWasmError {
    /// No `window`/`document` (e.g. running in a worker)
    #[error("Environment error: {0}")]
    Environment(String),
    /// Configuration is invalid
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// Language code other than `ja` / `en`
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
    /// Event listener could not be attached
    #[error("Binding error: {0}")]
    Binding(String),
}

impl From<KotobaWasmError> for JsValue {
    fn from(error: KotobaWasmError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

impl From<kotoba_core::Error> for KotobaWasmError {
    fn from(error: kotoba_core::Error) -> Self {
        KotobaWasmError::Configuration(error.to_string())
    }
}

/// Result type for WASM operations
pub type WasmResult<T> = Result<T, KotobaWasmError>;

/// Render a thrown JS value for error messages and logs.
pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
