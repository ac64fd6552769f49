//! Crate error type.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised by configuration loading and by collaborators.
#[derive(Debug, Error)]
pub enum Error {
	/// Reading or writing a config file.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Malformed JSON config.
	#[error("serde: {0}")]
	Serde(#[from] serde_json::Error),
	/// Malformed TOML config.
	#[error("toml: {0}")]
	Toml(#[from] toml::de::Error),
	/// Config parsed but holds unusable values.
	#[error("config: {0}")]
	Config(String),
	/// Preference store unavailable or refused the write.
	#[error("storage: {0}")]
	Storage(String),
	/// DOM lookup or mutation failed.
	#[error("document: {0}")]
	Document(String),
}

impl Error {
	/// [`Error::Config`] from a message.
	pub fn config(msg: impl Into<String>) -> Self { Self::Config(msg.into()) }
	/// [`Error::Storage`] from a message.
	pub fn storage(msg: impl Into<String>) -> Self { Self::Storage(msg.into()) }
	/// [`Error::Document`] from a message.
	pub fn document(msg: impl Into<String>) -> Self { Self::Document(msg.into()) }
}
