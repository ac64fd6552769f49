//! Display language of the page.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
	/// 日本語
	#[serde(rename = "ja")]
	Japanese,
	/// English
	#[serde(rename = "en")]
	English,
}

impl Language {
	/// Every supported language, Japanese first.
	pub const ALL: [Language; 2] = [Language::Japanese, Language::English];

	/// Two-letter code written to storage and to `<html lang>`.
	pub const fn code(self) -> &'static str {
		match self {
			Language::Japanese => "ja",
			Language::English => "en",
		}
	}

	/// Exact code lookup. Only `ja` and `en` are accepted.
	pub fn from_code(code: &str) -> Option<Self> {
		match code {
			"ja" => Some(Language::Japanese),
			"en" => Some(Language::English),
			_ => None,
		}
	}

	/// Derive a language from a browser locale tag (`ja-JP`, `en-US`, ...).
	/// Anything not starting with `ja` collapses to English.
	pub fn from_locale(locale: &str) -> Self {
		if locale.starts_with("ja") { Language::Japanese } else { Language::English }
	}

	/// The other member of the pair.
	pub const fn other(self) -> Self {
		match self {
			Language::Japanese => Language::English,
			Language::English => Language::Japanese,
		}
	}
}

impl fmt::Display for Language {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.code()) }
}

/// Returned when a string is neither `ja` nor `en`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language code: {0:?}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
	type Err = UnknownLanguage;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Language::from_code(s).ok_or_else(|| UnknownLanguage(s.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn codes_roundtrip() {
		for lang in Language::ALL {
			assert_eq!(Language::from_code(lang.code()), Some(lang));
			assert_eq!(lang.to_string(), lang.code());
		}
		assert_eq!(Language::from_code("JA"), None);
		assert_eq!(Language::from_code("ja-JP"), None);
		assert!("fr".parse::<Language>().is_err());
	}

	#[test]
	fn locale_prefix_decides() {
		assert_eq!(Language::from_locale("ja"), Language::Japanese);
		assert_eq!(Language::from_locale("ja-JP"), Language::Japanese);
		assert_eq!(Language::from_locale("en-US"), Language::English);
		assert_eq!(Language::from_locale("fr"), Language::English);
		assert_eq!(Language::from_locale(""), Language::English);
		// prefix match is case-sensitive, like the browser check it mirrors
		assert_eq!(Language::from_locale("JA-jp"), Language::English);
	}

	#[test]
	fn serde_uses_codes() {
		assert_eq!(serde_json::to_string(&Language::Japanese).unwrap(), "\"ja\"");
		let l: Language = serde_json::from_str("\"en\"").unwrap();
		assert_eq!(l, Language::English);
		assert_eq!(Language::English.other(), Language::Japanese);
	}
}
