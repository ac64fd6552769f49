//! Document mutation for a chosen language.
//!
//! Both presenters are idempotent: applying the same language twice leaves
//! the page exactly as applying it once.

use crate::error::Result;
use crate::language::Language;
use crate::ports::DocumentView;
use tracing::{debug, warn};

/// Counts from one [`present_page`] pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageReport {
	/// Elements rewritten in the target language.
	pub elements_updated: usize,
	/// No value for the target language; left as they were.
	pub elements_skipped: usize,
	/// Writes the document rejected; content left as it was.
	pub elements_failed: usize,
	/// Images whose alt text was rewritten.
	pub images_updated: usize,
	/// Selected alt value empty; left as it was.
	pub images_skipped: usize,
	/// Alt writes the document rejected.
	pub images_failed: usize,
	/// `<html lang>` write or a scan failed.
	pub structure_failures: usize,
}

impl PageReport {
	/// Whether every write and scan of the pass went through.
	pub fn is_complete(&self) -> bool {
		self.elements_failed == 0 && self.images_failed == 0 && self.structure_failures == 0
	}
}

/// Rewrite `<html lang>`, translatable content and image alt text.
///
/// Never stops early: a failed write or scan is logged, counted in the
/// report and the remaining nodes are still presented.
pub fn present_page<D>(view: &mut D, language: Language) -> PageReport
where
	D: DocumentView + ?Sized,
{
	let mut report = PageReport::default();
	if let Err(e) = view.set_document_language(language.code()) {
		warn!(error = %e, language = %language, "could not set document language");
		report.structure_failures += 1;
	}

	let elements = view.scan_elements().unwrap_or_else(|e| {
		warn!(error = %e, "translatable element scan failed");
		report.structure_failures += 1;
		Vec::new()
	});
	for element in elements {
		match element.text.get(language) {
			Some(content) => match view.write_content(&element.node, content, element.content_mode()) {
				Ok(()) => report.elements_updated += 1,
				Err(e) => {
					warn!(key = %element.key, error = %e, "content write failed, leaving element");
					report.elements_failed += 1;
				}
			},
			None => {
				debug!(key = %element.key, language = %language, "no translation, leaving content");
				report.elements_skipped += 1;
			}
		}
	}

	let images = view.scan_images().unwrap_or_else(|e| {
		warn!(error = %e, "translatable image scan failed");
		report.structure_failures += 1;
		Vec::new()
	});
	for image in images {
		match image.alt.get(language) {
			Some(alt) => match view.write_alt(&image.node, alt) {
				Ok(()) => report.images_updated += 1,
				Err(e) => {
					warn!(error = %e, "alt write failed, leaving image");
					report.images_failed += 1;
				}
			},
			None => report.images_skipped += 1,
		}
	}

	debug!(language = %language, ?report, "page presented");
	report
}

/// Mark the control for `language` active and the other inactive.
///
/// Returns `Ok(false)` without touching anything when either control is
/// absent from the page.
pub fn present_toggle<D>(view: &mut D, language: Language) -> Result<bool>
where
	D: DocumentView + ?Sized,
{
	if !Language::ALL.iter().all(|l| view.has_control(*l)) {
		debug!("toggle controls missing, skipping");
		return Ok(false);
	}
	view.set_control_active(language, true)?;
	view.set_control_active(language.other(), false)?;
	Ok(true)
}
