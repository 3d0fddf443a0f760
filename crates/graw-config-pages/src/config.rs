//! Page contract for the configuration form.
//!
//! `FormConfig` names every element id, class and URL the client touches.
//! The defaults match the bot configuration page; a page can override any
//! subset by embedding a JSON settings block:
//!
//! ```html
//! <script type="application/json" id="config_form_settings">
//!   {"endpoint": "/guilds/42/validate"}
//! </script>
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Id of the optional `<script type="application/json">` settings block.
pub const SETTINGS_ELEMENT_ID: &str = "config_form_settings";

/// CSS classes toggled on the banner and field markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerClasses {
	pub hidden: String,
	pub success: String,
	pub warning: String,
	pub danger: String,
	/// Class marking a field-error element as invalid
	pub invalid: String,
}

impl Default for BannerClasses {
	fn default() -> Self {
		Self {
			hidden: "hidden".to_string(),
			success: "alert-success".to_string(),
			warning: "alert-warning".to_string(),
			danger: "alert-danger".to_string(),
			invalid: "has-error".to_string(),
		}
	}
}

impl BannerClasses {
	/// Every class `reset` removes from the banner before a new render.
	pub fn resettable(&self) -> [&str; 4] {
		[
			self.hidden.as_str(),
			self.success.as_str(),
			self.warning.as_str(),
			self.danger.as_str(),
		]
	}
}

/// Element ids, classes and endpoint used by the submit handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
	/// Id of the `<form>` whose submit event is intercepted
	pub form_id: String,
	/// Id of the status banner; also the fragment navigated to after a render
	pub banner_id: String,
	/// Prefix joined with a field name to address its error element
	pub field_error_prefix: String,
	/// URL the serialized form is POSTed to, relative to the page
	pub endpoint: String,
	/// Banner message shown when no validation response could be obtained
	pub failure_message: String,
	pub classes: BannerClasses,
}

impl Default for FormConfig {
	fn default() -> Self {
		Self {
			form_id: "config_form".to_string(),
			banner_id: "alert_box".to_string(),
			field_error_prefix: "error_".to_string(),
			endpoint: "validate".to_string(),
			failure_message: "<strong>The configuration could not be validated.</strong> Please try again."
				.to_string(),
			classes: BannerClasses::default(),
		}
	}
}

impl FormConfig {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses a (possibly partial) JSON settings object over the defaults.
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		Ok(serde_json::from_str(json)?)
	}

	pub fn with_form_id(mut self, id: impl Into<String>) -> Self {
		self.form_id = id.into();
		self
	}

	pub fn with_banner_id(mut self, id: impl Into<String>) -> Self {
		self.banner_id = id.into();
		self
	}

	pub fn with_field_error_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.field_error_prefix = prefix.into();
		self
	}

	pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
		self.endpoint = endpoint.into();
		self
	}

	pub fn with_failure_message(mut self, message: impl Into<String>) -> Self {
		self.failure_message = message.into();
		self
	}

	pub fn with_classes(mut self, classes: BannerClasses) -> Self {
		self.classes = classes;
		self
	}

	/// Id of the error element for `field`, e.g. `error_svn_url`.
	pub fn field_marker_id(&self, field: &str) -> String {
		format!("{}{}", self.field_error_prefix, field)
	}
}
