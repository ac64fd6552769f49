//! Toggle configuration loaded from TOML or JSON.

use crate::error::{Error, Result};
use crate::language::Language;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Ids and class of the two toggle controls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ControlConfig {
	/// Id of the element selecting Japanese.
	pub japanese_id: String,
	/// Id of the element selecting English.
	pub english_id: String,
	/// Class carried by the control of the shown language.
	pub active_class: String,
}

impl Default for ControlConfig {
	fn default() -> Self {
		Self { japanese_id: "lang-ja".into(), english_id: "lang-en".into(), active_class: "active".into() }
	}
}

impl ControlConfig {
	/// Element id of the control selecting `language`.
	pub fn id_for(&self, language: Language) -> &str {
		match language {
			Language::Japanese => &self.japanese_id,
			Language::English => &self.english_id,
		}
	}
}

/// Attribute names making up the document contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AttributeConfig {
	/// Marks an element as translatable; its value is the translation key.
	pub key: String,
	/// Japanese content of a translatable element.
	pub japanese: String,
	/// English content of a translatable element.
	pub english: String,
	/// Presence forces plain-text replacement instead of markup.
	pub text_only: String,
	/// Japanese image alt text.
	pub japanese_alt: String,
	/// English image alt text.
	pub english_alt: String,
}

impl Default for AttributeConfig {
	fn default() -> Self {
		Self {
			key: "data-i18n".into(),
			japanese: "data-ja".into(),
			english: "data-en".into(),
			text_only: "data-text-only".into(),
			japanese_alt: "data-alt-ja".into(),
			english_alt: "data-alt-en".into(),
		}
	}
}

/// Toggle configuration; every field has a default matching the stock page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ToggleConfig {
	/// `localStorage` key holding the explicit choice.
	pub storage_key: String,
	/// Most verbose level logged: `trace`, `debug`, `info`, `warn` or `error`.
	pub log_level: String,
	pub controls: ControlConfig,
	pub attributes: AttributeConfig,
}

impl Default for ToggleConfig {
	fn default() -> Self {
		Self {
			storage_key: "language".into(),
			log_level: "info".into(),
			controls: ControlConfig::default(),
			attributes: AttributeConfig::default(),
		}
	}
}

impl ToggleConfig {
	/// Load and validate a TOML file.
	pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
		let data = fs::read_to_string(path)?;
		Self::from_toml_str(&data)
	}

	/// Parse and validate TOML; unspecified fields keep their defaults.
	pub fn from_toml_str(data: &str) -> Result<Self> {
		let cfg: Self = toml::from_str(data)?;
		cfg.validate()?;
		Ok(cfg)
	}

	/// Parse a JSON object; unspecified fields keep their defaults.
	pub fn from_json(data: &str) -> Result<Self> {
		let cfg: Self = serde_json::from_str(data)?;
		cfg.validate()?;
		Ok(cfg)
	}

	/// Serialize as TOML.
	pub fn to_toml_string(&self) -> Result<String> {
		toml::to_string(self).map_err(|e| Error::config(format!("toml serialize error: {e}")))
	}

	/// Write as TOML to `path`.
	pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
		fs::write(path, self.to_toml_string()?)?;
		Ok(())
	}

	/// Reject values the toggle cannot use in DOM lookups or selectors.
	pub fn validate(&self) -> Result<()> {
		let allowed = ["trace", "debug", "info", "warn", "error"];
		if !allowed.contains(&self.log_level.as_str()) {
			return Err(Error::config(format!("invalid log_level: {}", self.log_level)));
		}
		let named = [
			("storage_key", &self.storage_key),
			("controls.japanese_id", &self.controls.japanese_id),
			("controls.english_id", &self.controls.english_id),
			("controls.active_class", &self.controls.active_class),
			("attributes.key", &self.attributes.key),
			("attributes.japanese", &self.attributes.japanese),
			("attributes.english", &self.attributes.english),
			("attributes.text_only", &self.attributes.text_only),
			("attributes.japanese_alt", &self.attributes.japanese_alt),
			("attributes.english_alt", &self.attributes.english_alt),
		];
		for (name, value) in named {
			if value.trim().is_empty() {
				return Err(Error::config(format!("{name} must not be empty")));
			}
			if value.chars().any(char::is_whitespace) {
				return Err(Error::config(format!("{name} must not contain whitespace: {value:?}")));
			}
		}
		let attributes = [
			("attributes.key", &self.attributes.key),
			("attributes.japanese", &self.attributes.japanese),
			("attributes.english", &self.attributes.english),
			("attributes.text_only", &self.attributes.text_only),
			("attributes.japanese_alt", &self.attributes.japanese_alt),
			("attributes.english_alt", &self.attributes.english_alt),
		];
		for (name, value) in attributes {
			if !is_css_identifier(value) {
				return Err(Error::config(format!("{name} is not a valid attribute name: {value:?}")));
			}
		}
		if self.controls.japanese_id == self.controls.english_id {
			return Err(Error::config("toggle controls must have distinct ids"));
		}
		Ok(())
	}

	/// Parsed `log_level`.
	pub fn max_level(&self) -> Result<tracing::Level> {
		self.log_level.parse().map_err(|_| Error::config(format!("invalid log_level: {}", self.log_level)))
	}

	/// CSS selector matching every translatable element.
	pub fn element_selector(&self) -> String { format!("[{}]", self.attributes.key) }

	/// CSS selector matching images that carry both alt variants.
	pub fn image_selector(&self) -> String {
		format!("img[{}][{}]", self.attributes.japanese_alt, self.attributes.english_alt)
	}
}

// Attribute names are spliced into `[name]` selectors, so only plain
// identifiers are accepted: no escapes, no leading digit.
fn is_css_identifier(name: &str) -> bool {
	let body = name.strip_prefix('-').unwrap_or(name);
	let mut chars = body.chars();
	match chars.next() {
		Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '-' => {}
		_ => return false,
	}
	chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
