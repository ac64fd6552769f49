//! In-memory collaborators for native use and tests.

use crate::error::{Error, Result};
use crate::language::Language;
use crate::model::{ContentMode, LocalizedText, TranslatableElement, TranslatableImage};
use crate::ports::{DocumentView, LocaleSource, PreferenceStore};
use std::collections::HashMap;

/// Key-value store keeping a single preference entry under `key`.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
	key: String,
	entries: HashMap<String, String>,
	writes: usize,
}

impl MemoryPreferenceStore {
	/// Empty store keyed by `key`.
	pub fn new(key: impl Into<String>) -> Self {
		Self { key: key.into(), ..Self::default() }
	}

	/// Store pre-seeded with a raw value, valid or not.
	pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
		let mut store = Self::new(key);
		store.entries.insert(store.key.clone(), value.into());
		store
	}

	/// Value currently stored, as written.
	pub fn raw(&self) -> Option<&str> { self.entries.get(&self.key).map(String::as_str) }

	/// Number of `save` calls so far.
	pub fn writes(&self) -> usize { self.writes }
}

impl PreferenceStore for MemoryPreferenceStore {
	fn load(&self) -> Result<Option<String>> { Ok(self.entries.get(&self.key).cloned()) }

	fn save(&mut self, language: Language) -> Result<()> {
		self.entries.insert(self.key.clone(), language.code().to_string());
		self.writes += 1;
		Ok(())
	}
}

/// Locale fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct FixedLocale(Option<String>);

impl FixedLocale {
	/// Host reporting `locale`.
	pub fn new(locale: impl Into<String>) -> Self { Self(Some(locale.into())) }
	/// Host reports no locale at all.
	pub fn unknown() -> Self { Self(None) }
}

impl LocaleSource for FixedLocale {
	fn reported_locale(&self) -> Option<String> { self.0.clone() }
}

#[derive(Debug, Clone)]
struct MemoryElement {
	id: String,
	text: LocalizedText,
	text_only: bool,
	content: String,
	mode: ContentMode,
}

#[derive(Debug, Clone)]
struct MemoryImage {
	id: String,
	alt_ja: Option<String>,
	alt_en: Option<String>,
	alt: String,
}

/// Flat page model: translatable elements, images and the two controls.
///
/// Nodes are addressed by their index in insertion (document) order.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
	lang: Option<String>,
	elements: Vec<MemoryElement>,
	images: Vec<MemoryImage>,
	controls: HashMap<Language, bool>,
}

impl MemoryDocument {
	/// Empty page without controls.
	pub fn new() -> Self { Self::default() }

	/// Element rendered with markup semantics. `id` doubles as translation key.
	pub fn add_element(&mut self, id: &str, initial: &str, ja: Option<&str>, en: Option<&str>) -> &mut Self {
		self.push_element(id, initial, ja, en, false)
	}

	/// Element flagged text-only (or a `<title>`).
	pub fn add_text_element(&mut self, id: &str, initial: &str, ja: Option<&str>, en: Option<&str>) -> &mut Self {
		self.push_element(id, initial, ja, en, true)
	}

	fn push_element(&mut self, id: &str, initial: &str, ja: Option<&str>, en: Option<&str>, text_only: bool) -> &mut Self {
		self.elements.push(MemoryElement {
			id: id.to_string(),
			text: LocalizedText::new(ja.map(str::to_string), en.map(str::to_string)),
			text_only,
			content: initial.to_string(),
			mode: ContentMode::Markup,
		});
		self
	}

	/// Image; only picked up by scans when both alt variants are declared.
	pub fn add_image(&mut self, id: &str, alt_ja: Option<&str>, alt_en: Option<&str>, initial_alt: &str) -> &mut Self {
		self.images.push(MemoryImage {
			id: id.to_string(),
			alt_ja: alt_ja.map(str::to_string),
			alt_en: alt_en.map(str::to_string),
			alt: initial_alt.to_string(),
		});
		self
	}

	/// One toggle control, inactive.
	pub fn add_control(&mut self, language: Language) -> &mut Self {
		self.controls.insert(language, false);
		self
	}

	/// Both toggle controls, neither active.
	pub fn add_controls(&mut self) -> &mut Self {
		for lang in Language::ALL {
			self.add_control(lang);
		}
		self
	}

	/// `<html lang>`, `None` until first set.
	pub fn document_language(&self) -> Option<&str> { self.lang.as_deref() }

	/// Current content and how it was last written.
	pub fn content(&self, id: &str) -> Option<(&str, ContentMode)> {
		self.elements.iter().find(|e| e.id == id).map(|e| (e.content.as_str(), e.mode))
	}

	/// Current content of element `id`.
	pub fn content_text(&self, id: &str) -> Option<&str> { self.content(id).map(|(c, _)| c) }

	/// Current alt text of image `id`.
	pub fn alt(&self, id: &str) -> Option<&str> {
		self.images.iter().find(|i| i.id == id).map(|i| i.alt.as_str())
	}

	/// Controls carrying the active marker, Japanese first.
	pub fn active_controls(&self) -> Vec<Language> {
		Language::ALL.into_iter().filter(|l| self.controls.get(l).copied().unwrap_or(false)).collect()
	}
}

impl DocumentView for MemoryDocument {
	type Node = usize;

	fn set_document_language(&mut self, code: &str) -> Result<()> {
		self.lang = Some(code.to_string());
		Ok(())
	}

	fn scan_elements(&self) -> Result<Vec<TranslatableElement<usize>>> {
		Ok(self
			.elements
			.iter()
			.enumerate()
			.map(|(node, e)| TranslatableElement { node, key: e.id.clone(), text: e.text.clone(), text_only: e.text_only })
			.collect())
	}

	fn write_content(&mut self, node: &usize, content: &str, mode: ContentMode) -> Result<()> {
		let element = self.elements.get_mut(*node).ok_or_else(|| Error::document(format!("no element #{node}")))?;
		element.content = content.to_string();
		element.mode = mode;
		Ok(())
	}

	fn scan_images(&self) -> Result<Vec<TranslatableImage<usize>>> {
		Ok(self
			.images
			.iter()
			.enumerate()
			.filter(|(_, i)| i.alt_ja.is_some() && i.alt_en.is_some())
			.map(|(node, i)| TranslatableImage { node, alt: LocalizedText::new(i.alt_ja.clone(), i.alt_en.clone()) })
			.collect())
	}

	fn write_alt(&mut self, node: &usize, alt: &str) -> Result<()> {
		let image = self.images.get_mut(*node).ok_or_else(|| Error::document(format!("no image #{node}")))?;
		image.alt = alt.to_string();
		Ok(())
	}

	fn has_control(&self, language: Language) -> bool { self.controls.contains_key(&language) }

	fn set_control_active(&mut self, language: Language, active: bool) -> Result<()> {
		match self.controls.get_mut(&language) {
			Some(state) => {
				*state = active;
				Ok(())
			}
			None => Err(Error::document(format!("no control for {language}"))),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn store_counts_writes() {
		let mut store = MemoryPreferenceStore::new("language");
		assert_eq!(store.load().unwrap(), None);
		store.save(Language::Japanese).unwrap();
		assert_eq!(store.raw(), Some("ja"));
		assert_eq!(store.writes(), 1);
	}

	#[test]
	fn images_need_both_alts() {
		let mut doc = MemoryDocument::new();
		doc.add_image("a", Some("あ"), None, "").add_image("b", Some("び"), Some("b"), "");
		let scanned = doc.scan_images().unwrap();
		assert_eq!(scanned.len(), 1);
		assert_eq!(scanned[0].node, 1);
	}
}
