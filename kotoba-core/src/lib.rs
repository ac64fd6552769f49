//! Japanese/English language toggle for static pages.
//!
//! The domain here is platform independent: browser globals are reached only
//! through the traits in [`ports`]. `kotoba-wasm` supplies the `web-sys`
//! implementations; [`memory`] supplies in-process ones.
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod language;
pub mod memory;
pub mod model;
pub mod ports;
pub mod presenter;
pub mod resolver;
pub mod toggle;

pub use config::ToggleConfig;
pub use error::{Error, Result};
pub use language::{Language, UnknownLanguage};
pub use model::{ContentMode, LocalizedText, TranslatableElement, TranslatableImage};
pub use ports::{DocumentView, LocaleSource, PreferenceStore};
pub use presenter::{present_page, present_toggle, PageReport};
pub use resolver::resolve_language;
pub use toggle::{LanguageToggle, ToggleAction};
