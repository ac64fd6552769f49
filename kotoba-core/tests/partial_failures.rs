//! A document that rejects some writes must not stop the rest of the page
//! from switching language.

use kotoba_core::memory::{FixedLocale, MemoryDocument, MemoryPreferenceStore};
use kotoba_core::{
	present_page, ContentMode, DocumentView, Error, Language, LanguageToggle, Result, TranslatableElement,
	TranslatableImage,
};

/// Wraps [`MemoryDocument`], failing content writes to one node and
/// optionally the element scan.
struct FlakyDocument {
	inner: MemoryDocument,
	reject_node: Option<usize>,
	reject_scan: bool,
}

impl DocumentView for FlakyDocument {
	type Node = usize;

	fn set_document_language(&mut self, code: &str) -> Result<()> { self.inner.set_document_language(code) }

	fn scan_elements(&self) -> Result<Vec<TranslatableElement<usize>>> {
		if self.reject_scan {
			return Err(Error::document("SyntaxError: invalid selector"));
		}
		self.inner.scan_elements()
	}

	fn write_content(&mut self, node: &usize, content: &str, mode: ContentMode) -> Result<()> {
		if self.reject_node == Some(*node) {
			return Err(Error::document(format!("write to #{node} rejected")));
		}
		self.inner.write_content(node, content, mode)
	}

	fn scan_images(&self) -> Result<Vec<TranslatableImage<usize>>> { self.inner.scan_images() }

	fn write_alt(&mut self, node: &usize, alt: &str) -> Result<()> { self.inner.write_alt(node, alt) }

	fn has_control(&self, language: Language) -> bool { self.inner.has_control(language) }

	fn set_control_active(&mut self, language: Language, active: bool) -> Result<()> {
		self.inner.set_control_active(language, active)
	}
}

fn page(reject_node: Option<usize>, reject_scan: bool) -> FlakyDocument {
	let mut inner = MemoryDocument::new();
	inner
		.add_element("a", "A-ja", Some("A-ja"), Some("A-en"))
		.add_element("b", "B-ja", Some("B-ja"), Some("B-en"))
		.add_element("c", "C-ja", Some("C-ja"), Some("C-en"))
		.add_image("img", Some("img-ja"), Some("img-en"), "img-ja")
		.add_controls();
	FlakyDocument { inner, reject_node, reject_scan }
}

#[test]
fn rejected_write_does_not_stop_later_nodes() {
	let mut t = LanguageToggle::new(MemoryPreferenceStore::new("language"), FixedLocale::new("ja-JP"), page(Some(1), false));
	t.initialize();
	t.choose(Language::English);

	let doc = &t.view().inner;
	assert_eq!(doc.document_language(), Some("en"));
	assert_eq!(doc.content_text("a"), Some("A-en"));
	assert_eq!(doc.content_text("b"), Some("B-ja"));
	assert_eq!(doc.content_text("c"), Some("C-en"));
	assert_eq!(doc.alt("img"), Some("img-en"));
	assert_eq!(doc.active_controls(), vec![Language::English]);
}

#[test]
fn report_counts_rejected_write() {
	let mut doc = page(Some(1), false);
	let report = present_page(&mut doc, Language::English);
	assert_eq!(report.elements_updated, 2);
	assert_eq!(report.elements_failed, 1);
	assert_eq!(report.images_updated, 1);
	assert!(!report.is_complete());
}

#[test]
fn failed_element_scan_still_updates_images() {
	let mut doc = page(None, true);
	let report = present_page(&mut doc, Language::English);
	assert_eq!(report.structure_failures, 1);
	assert_eq!(report.elements_updated, 0);
	assert_eq!(report.images_updated, 1);
	assert_eq!(doc.inner.alt("img"), Some("img-en"));
	assert_eq!(doc.inner.document_language(), Some("en"));
}
