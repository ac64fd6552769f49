//! Collaborator traits standing in for browser globals.
//!
//! `kotoba-wasm` implements them over `localStorage`, `navigator` and the
//! live DOM; [`crate::memory`] implements them for native use and tests.

use crate::error::Result;
use crate::language::Language;
use crate::model::{ContentMode, TranslatableElement, TranslatableImage};

/// Persistent slot for the user's explicit choice.
pub trait PreferenceStore {
	/// Raw stored value, `None` when nothing was ever saved.
	fn load(&self) -> Result<Option<String>>;
	/// Persist an explicit choice as its language code.
	fn save(&mut self, language: Language) -> Result<()>;
}

/// Source of the host's reported user locale (`navigator.language`).
pub trait LocaleSource {
	/// Locale tag such as `ja-JP`, `None` when the host reports nothing.
	fn reported_locale(&self) -> Option<String>;
}

/// Read/write view over the page.
pub trait DocumentView {
	/// Handle to a live node; cloned into the scanned records.
	type Node;

	/// Set the root element's `lang` attribute.
	fn set_document_language(&mut self, code: &str) -> Result<()>;

	/// Translatable elements in document order.
	fn scan_elements(&self) -> Result<Vec<TranslatableElement<Self::Node>>>;

	/// Replace an element's content as text or markup.
	fn write_content(&mut self, node: &Self::Node, content: &str, mode: ContentMode) -> Result<()>;

	/// Images carrying both alt variants, in document order.
	fn scan_images(&self) -> Result<Vec<TranslatableImage<Self::Node>>>;

	/// Replace an image's alt text.
	fn write_alt(&mut self, node: &Self::Node, alt: &str) -> Result<()>;

	/// Whether the control selecting `language` is on the page.
	fn has_control(&self, language: Language) -> bool;

	/// Add or remove the active class on the control for `language`.
	fn set_control_active(&mut self, language: Language, active: bool) -> Result<()>;
}
