//! Error types for the configuration form client.
//!
//! Validation failures reported by the server (`status = "error"`) are not
//! errors here: they are an ordinary render outcome. The types below cover
//! everything that prevents a response from being rendered at all.

use thiserror::Error;

/// Failure to obtain a usable validation response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
	/// The request never completed (connection refused, CORS, offline, ...)
	#[error("Network error: {0}")]
	Network(String),

	/// The submission could not be encoded as a request body
	#[error("Serialization error: {0}")]
	Serialization(String),

	/// The response body was not a valid validation response
	#[error("Deserialization error: {0}")]
	Deserialization(String),

	/// The server answered with a non-2xx status
	#[error("Server error ({status}): {message}")]
	Server {
		/// HTTP status code
		status: u16,
		/// Status text or body excerpt
		message: String,
	},
}

impl SubmitError {
	/// Create a network error
	pub fn network(msg: impl Into<String>) -> Self {
		Self::Network(msg.into())
	}

	/// Create a serialization error
	pub fn serialization(msg: impl Into<String>) -> Self {
		Self::Serialization(msg.into())
	}

	/// Create a deserialization error
	pub fn deserialization(msg: impl Into<String>) -> Self {
		Self::Deserialization(msg.into())
	}

	/// Create a server error
	pub fn server(status: u16, message: impl Into<String>) -> Self {
		Self::Server {
			status,
			message: message.into(),
		}
	}
}

/// Failure to attach the submit handler to the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
	/// No global `window` (not running in a browser)
	#[error("no global window available")]
	NoWindow,

	/// The window has no document
	#[error("window has no document")]
	NoDocument,

	/// No element carries the configured id
	#[error("element #{0} not found")]
	ElementNotFound(String),

	/// The configured form id names something other than a `<form>`
	#[error("element #{0} is not a form")]
	NotAForm(String),

	/// `addEventListener` rejected the callback
	#[error("failed to attach listener: {0}")]
	Listener(String),
}

/// Failure to read embedded form settings.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The settings JSON could not be parsed
	#[error("invalid form settings: {0}")]
	Parse(#[from] serde_json::Error),
}
