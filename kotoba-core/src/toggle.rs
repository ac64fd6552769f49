//! Page-lifetime language state machine.
//!
//! Two reachable states (Japanese / English) entered through three entry
//! points: [`LanguageToggle::initialize`] on document-ready and
//! [`LanguageToggle::choose`] for each control click. Only `choose` persists.

use crate::language::Language;
use crate::ports::{DocumentView, LocaleSource, PreferenceStore};
use crate::presenter::{present_page, present_toggle};
use crate::resolver::resolve_language;
use tracing::{info, warn};

/// Events the host feeds into the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
	/// Document finished parsing.
	Initialize,
	/// User clicked the control for this language.
	Choose(Language),
}

/// Current language plus the collaborators it is read from and written to.
pub struct LanguageToggle<S, L, D> {
	store: S,
	locale: L,
	view: D,
	current: Option<Language>,
}

impl<S, L, D> LanguageToggle<S, L, D>
where
	S: PreferenceStore,
	L: LocaleSource,
	D: DocumentView,
{
	/// Uninitialized toggle; nothing is read or written until an entry point runs.
	pub fn new(store: S, locale: L, view: D) -> Self {
		Self { store, locale, view, current: None }
	}

	/// Language currently shown; `None` until initialized.
	pub fn current(&self) -> Option<Language> { self.current }

	/// Resolve and present the initial language without persisting it.
	pub fn initialize(&mut self) -> Language {
		let lang = resolve_language(&self.store, &self.locale);
		self.apply(lang);
		info!(language = %lang, "language initialized");
		lang
	}

	/// Explicit user choice: persist, then present. Re-choosing the active
	/// language re-applies it.
	pub fn choose(&mut self, language: Language) -> Language {
		if let Err(e) = self.store.save(language) {
			warn!(error = %e, language = %language, "could not persist language preference");
		}
		self.apply(language);
		info!(language = %language, "language chosen");
		language
	}

	/// Re-present the current language, e.g. after content was inserted.
	pub fn refresh(&mut self) -> Option<Language> {
		let lang = self.current?;
		self.apply(lang);
		Some(lang)
	}

	/// Route a host event to its entry point.
	pub fn dispatch(&mut self, action: ToggleAction) -> Language {
		match action {
			ToggleAction::Initialize => self.initialize(),
			ToggleAction::Choose(lang) => self.choose(lang),
		}
	}

	fn apply(&mut self, language: Language) {
		self.current = Some(language);
		let report = present_page(&mut self.view, language);
		if !report.is_complete() {
			warn!(language = %language, ?report, "page presentation incomplete");
		}
		if let Err(e) = present_toggle(&mut self.view, language) {
			warn!(error = %e, language = %language, "toggle presentation incomplete");
		}
	}

	/// Preference store backing the toggle.
	pub fn store(&self) -> &S { &self.store }

	/// Document the toggle presents into.
	pub fn view(&self) -> &D { &self.view }

	/// Give the collaborators back.
	pub fn into_parts(self) -> (S, L, D) { (self.store, self.locale, self.view) }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::memory::{FixedLocale, MemoryDocument, MemoryPreferenceStore};

	fn toggle(stored: Option<&str>, locale: &str) -> LanguageToggle<MemoryPreferenceStore, FixedLocale, MemoryDocument> {
		let store = match stored {
			Some(v) => MemoryPreferenceStore::with_value("language", v),
			None => MemoryPreferenceStore::new("language"),
		};
		let mut doc = MemoryDocument::new();
		doc.add_element("greeting", "", Some("こんにちは"), Some("Hello")).add_controls();
		LanguageToggle::new(store, FixedLocale::new(locale), doc)
	}

	#[test]
	fn initialize_does_not_persist() {
		let mut t = toggle(None, "ja-JP");
		assert_eq!(t.current(), None);
		assert_eq!(t.initialize(), Language::Japanese);
		assert_eq!(t.current(), Some(Language::Japanese));
		assert_eq!(t.store().writes(), 0);
		assert_eq!(t.store().raw(), None);
	}

	#[test]
	fn dispatch_routes_actions() {
		let mut t = toggle(None, "en-US");
		assert_eq!(t.dispatch(ToggleAction::Initialize), Language::English);
		assert_eq!(t.dispatch(ToggleAction::Choose(Language::Japanese)), Language::Japanese);
		assert_eq!(t.store().raw(), Some("ja"));
		assert_eq!(t.view().content_text("greeting"), Some("こんにちは"));
	}

	#[test]
	fn refresh_before_initialize_is_noop() {
		let mut t = toggle(None, "ja");
		assert_eq!(t.refresh(), None);
		assert_eq!(t.view().document_language(), None);
		t.initialize();
		assert_eq!(t.refresh(), Some(Language::Japanese));
	}
}
