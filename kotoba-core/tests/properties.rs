//! Property tests for language resolution and presentation.

use kotoba_core::memory::{FixedLocale, MemoryDocument, MemoryPreferenceStore};
use kotoba_core::{present_page, present_toggle, resolve_language, Language};
use proptest::prelude::*;

fn arb_language() -> impl Strategy<Value = Language> {
	prop_oneof![Just(Language::Japanese), Just(Language::English)]
}

prop_compose! {
	fn arb_entry()(
		ja in proptest::option::of("[a-z<>/ ]{0,12}"),
		en in proptest::option::of("[a-z<>/ ]{0,12}"),
		text_only in any::<bool>(),
	) -> (Option<String>, Option<String>, bool) {
		(ja, en, text_only)
	}
}

fn build(entries: &[(Option<String>, Option<String>, bool)]) -> MemoryDocument {
	let mut doc = MemoryDocument::new();
	for (i, (ja, en, text_only)) in entries.iter().enumerate() {
		let id = format!("e{i}");
		if *text_only {
			doc.add_text_element(&id, "initial", ja.as_deref(), en.as_deref());
		} else {
			doc.add_element(&id, "initial", ja.as_deref(), en.as_deref());
		}
		doc.add_image(&format!("i{i}"), ja.as_deref(), en.as_deref(), "initial");
	}
	doc.add_controls();
	doc
}

fn snapshot(doc: &MemoryDocument, n: usize) -> Vec<String> {
	let mut out = vec![format!("{:?}", doc.document_language()), format!("{:?}", doc.active_controls())];
	for i in 0..n {
		out.push(format!("{:?}", doc.content(&format!("e{i}"))));
		out.push(format!("{:?}", doc.alt(&format!("i{i}"))));
	}
	out
}

proptest! {
	/// Property: `ja*` locales resolve to Japanese, everything else to English
	#[test]
	fn locale_prefix_decides(suffix in "[A-Za-z-]{0,6}", other in "[a-ik-z][a-z-]{0,6}") {
		let store = MemoryPreferenceStore::new("language");
		let ja = format!("ja{suffix}");
		prop_assert_eq!(resolve_language(&store, &FixedLocale::new(ja)), Language::Japanese);
		prop_assert_eq!(resolve_language(&store, &FixedLocale::new(other)), Language::English);
	}

	/// Property: a stored preference wins over any locale
	#[test]
	fn stored_preference_wins(lang in arb_language(), locale in ".{0,10}") {
		let store = MemoryPreferenceStore::with_value("language", lang.code());
		prop_assert_eq!(resolve_language(&store, &FixedLocale::new(locale)), lang);
	}

	/// Property: presenting twice equals presenting once
	#[test]
	fn presentation_is_idempotent(entries in prop::collection::vec(arb_entry(), 0..8), lang in arb_language()) {
		let mut once = build(&entries);
		present_page(&mut once, lang);
		present_toggle(&mut once, lang).unwrap();
		let mut twice = once.clone();
		present_page(&mut twice, lang);
		present_toggle(&mut twice, lang).unwrap();
		prop_assert_eq!(snapshot(&once, entries.len()), snapshot(&twice, entries.len()));
	}

	/// Property: exactly one control is active after any sequence of applications
	#[test]
	fn controls_mutually_exclusive(seq in prop::collection::vec(arb_language(), 1..10)) {
		let mut doc = build(&[]);
		for lang in &seq {
			present_toggle(&mut doc, *lang).unwrap();
			prop_assert_eq!(doc.active_controls(), vec![*lang]);
		}
	}
}
