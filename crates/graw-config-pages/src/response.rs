//! Validation endpoint reply.
//!
//! ```json
//! {
//!   "status": "error",
//!   "message": "<strong>Unable to apply changes.</strong>",
//!   "errors": ["svn_url", "svn_int"]
//! }
//! ```

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Verdict reported by the validation endpoint.
///
/// The field is an open-ended string on the wire; anything other than the
/// three known values is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ValidationStatus {
	Success,
	Warning,
	Error,
	Other(String),
}

impl Default for ValidationStatus {
	fn default() -> Self {
		Self::Other(String::new())
	}
}

impl ValidationStatus {
	pub fn as_str(&self) -> &str {
		match self {
			Self::Success => "success",
			Self::Warning => "warning",
			Self::Error => "error",
			Self::Other(other) => other,
		}
	}
}

impl From<String> for ValidationStatus {
	fn from(value: String) -> Self {
		match value.as_str() {
			"success" => Self::Success,
			"warning" => Self::Warning,
			"error" => Self::Error,
			_ => Self::Other(value),
		}
	}
}

impl From<&str> for ValidationStatus {
	fn from(value: &str) -> Self {
		Self::from(value.to_string())
	}
}

impl From<ValidationStatus> for String {
	fn from(status: ValidationStatus) -> Self {
		match status {
			ValidationStatus::Other(other) => other,
			known => known.as_str().to_string(),
		}
	}
}

impl fmt::Display for ValidationStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Reply body of the validation endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResponse {
	#[serde(default)]
	pub status: ValidationStatus,

	/// Pre-rendered markup; inserted into the banner unescaped
	#[serde(default, deserialize_with = "null_as_default")]
	pub message: String,

	/// Names of the fields that failed validation, in server order
	#[serde(default, deserialize_with = "null_as_default")]
	pub errors: Vec<String>,
}

impl ValidationResponse {
	pub fn new(status: impl Into<ValidationStatus>, message: impl Into<String>) -> Self {
		Self {
			status: status.into(),
			message: message.into(),
			errors: Vec::new(),
		}
	}

	pub fn with_errors<I, S>(mut self, errors: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.errors = errors.into_iter().map(Into::into).collect();
		self
	}

	/// Parses a reply body. Only a JSON object is a verdict; serde would
	/// otherwise also read a positional array into the struct.
	pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
		let value: Value = serde_json::from_str(body)?;
		if !value.is_object() {
			return Err(<serde_json::Error as de::Error>::invalid_type(unexpected(&value), &"a JSON object"));
		}
		serde_json::from_value(value)
	}
}

fn unexpected(value: &Value) -> Unexpected<'_> {
	match value {
		Value::Null => Unexpected::Unit,
		Value::Bool(b) => Unexpected::Bool(*b),
		Value::Number(_) => Unexpected::Other("number"),
		Value::String(s) => Unexpected::Str(s),
		Value::Array(_) => Unexpected::Seq,
		Value::Object(_) => Unexpected::Map,
	}
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
