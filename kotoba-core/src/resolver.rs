//! Initial language resolution.

use crate::language::Language;
use crate::ports::{LocaleSource, PreferenceStore};
use tracing::{debug, warn};

/// Pick the language to show.
///
/// A valid stored preference always wins. Otherwise the reported locale
/// decides: `ja*` gives Japanese, anything else (or nothing) English.
/// Unreadable or unrecognised stored values are logged and ignored.
pub fn resolve_language<S, L>(store: &S, locale: &L) -> Language
where
	S: PreferenceStore + ?Sized,
	L: LocaleSource + ?Sized,
{
	match store.load() {
		Ok(Some(raw)) => match Language::from_code(&raw) {
			Some(lang) => {
				debug!(language = %lang, "using stored preference");
				return lang;
			}
			None => warn!(stored = %raw, "ignoring unsupported stored language"),
		},
		Ok(None) => {}
		Err(e) => warn!(error = %e, "preference store unreadable"),
	}
	let reported = locale.reported_locale().unwrap_or_default();
	let lang = Language::from_locale(&reported);
	debug!(locale = %reported, language = %lang, "derived language from locale");
	lang
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::{Error, Result};
	use crate::memory::{FixedLocale, MemoryPreferenceStore};

	struct Broken;
	impl PreferenceStore for Broken {
		fn load(&self) -> Result<Option<String>> { Err(Error::storage("SecurityError")) }
		fn save(&mut self, _: Language) -> Result<()> { Err(Error::storage("SecurityError")) }
	}

	#[test]
	fn stored_preference_wins() {
		let store = MemoryPreferenceStore::with_value("language", "en");
		assert_eq!(resolve_language(&store, &FixedLocale::new("ja-JP")), Language::English);
	}

	#[test]
	fn locale_used_without_preference() {
		let store = MemoryPreferenceStore::new("language");
		assert_eq!(resolve_language(&store, &FixedLocale::new("ja-JP")), Language::Japanese);
		assert_eq!(resolve_language(&store, &FixedLocale::new("en-US")), Language::English);
		assert_eq!(resolve_language(&store, &FixedLocale::unknown()), Language::English);
	}

	#[test]
	fn bad_store_falls_back_to_locale() {
		assert_eq!(resolve_language(&Broken, &FixedLocale::new("ja")), Language::Japanese);
		let store = MemoryPreferenceStore::with_value("language", "de");
		assert_eq!(resolve_language(&store, &FixedLocale::new("ja")), Language::Japanese);
	}
}
