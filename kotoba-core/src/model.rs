//! Typed records for the translatable parts of a page.
//!
//! Adapters build these by scanning the document; the presenters only ever
//! see the records and the adapter's opaque node handle `N`.

use crate::language::Language;
use serde::{Deserialize, Serialize};

/// A pair of per-language strings read off one node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
	/// Japanese value.
	pub ja: Option<String>,
	/// English value.
	pub en: Option<String>,
}

impl LocalizedText {
	/// Pair from the two raw attribute values.
	pub fn new(ja: Option<String>, en: Option<String>) -> Self { Self { ja, en } }

	/// Value for `language`, or `None` when missing or empty.
	pub fn get(&self, language: Language) -> Option<&str> {
		let value = match language {
			Language::Japanese => self.ja.as_deref(),
			Language::English => self.en.as_deref(),
		};
		value.filter(|v| !v.is_empty())
	}
}

/// How replacement content is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMode {
	/// Plain text, no markup interpretation.
	Text,
	/// Markup is parsed and rendered.
	Markup,
}

/// An element marked translatable, with both content variants.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatableElement<N> {
	/// Adapter handle of the element.
	pub node: N,
	/// Translation key; only used in logs.
	pub key: String,
	/// Replacement content per language.
	pub text: LocalizedText,
	/// `<title>` or explicitly flagged elements.
	pub text_only: bool,
}

impl<N> TranslatableElement<N> {
	/// How this element's content is replaced.
	pub fn content_mode(&self) -> ContentMode {
		if self.text_only { ContentMode::Text } else { ContentMode::Markup }
	}
}

/// An image declaring both alt variants.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatableImage<N> {
	/// Adapter handle of the image.
	pub node: N,
	/// Alt text per language.
	pub alt: LocalizedText,
}
