//! Form snapshot taken at submit time, and submission ordering.
//!
//! Serialization follows the browser's "successful controls" rules as used
//! by classic AJAX form posting:
//!
//! - controls without a name, disabled controls and submitter-like inputs
//!   (`submit`, `button`, `image`, `reset`, `file`) are skipped
//! - checkboxes and radios contribute only when checked
//! - a `<select multiple>` contributes one pair per selected option
//! - line breaks in values are normalised to CRLF
//!
//! Pairs keep document order and repeated names are kept as repeated keys.

use crate::error::SubmitError;
use std::cell::Cell;

/// What kind of form control a [`FormControl`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
	/// `<input>` of any type not listed below
	Input,
	Checkbox,
	Radio,
	TextArea,
	Select,
	/// `submit`, `button`, `image`, `reset` and `file` inputs, and `<button>`
	Submitter,
}

impl ControlKind {
	/// Classifies an `<input>` by its `type` attribute.
	pub fn from_input_type(input_type: &str) -> Self {
		match input_type.to_ascii_lowercase().as_str() {
			"checkbox" => Self::Checkbox,
			"radio" => Self::Radio,
			"submit" | "button" | "image" | "reset" | "file" => Self::Submitter,
			_ => Self::Input,
		}
	}
}

/// One form control as read from the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormControl {
	pub name: String,
	pub kind: ControlKind,
	pub disabled: bool,
	pub checked: bool,
	/// Current value; several for a multi-select, none for an empty select
	pub values: Vec<String>,
}

impl FormControl {
	pub fn new(name: impl Into<String>, kind: ControlKind) -> Self {
		Self {
			name: name.into(),
			kind,
			disabled: false,
			checked: false,
			values: Vec::new(),
		}
	}

	pub fn input(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self::new(name, ControlKind::Input).with_value(value)
	}

	pub fn with_value(mut self, value: impl Into<String>) -> Self {
		self.values.push(value.into());
		self
	}

	pub fn checked(mut self, checked: bool) -> Self {
		self.checked = checked;
		self
	}

	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	fn is_successful(&self) -> bool {
		if self.name.is_empty() || self.disabled {
			return false;
		}
		match self.kind {
			ControlKind::Submitter => false,
			ControlKind::Checkbox | ControlKind::Radio => self.checked,
			_ => true,
		}
	}
}

/// Serialized form fields for one submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
	pairs: Vec<(String, String)>,
}

impl Submission {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a submission from controls in document order.
	pub fn from_controls<I>(controls: I) -> Self
	where
		I: IntoIterator<Item = FormControl>,
	{
		let mut submission = Self::new();
		for control in controls {
			if !control.is_successful() {
				continue;
			}
			for value in &control.values {
				submission.push(control.name.clone(), value);
			}
		}
		submission
	}

	/// Appends a pair, normalising line breaks in `value`.
	pub fn push(&mut self, name: impl Into<String>, value: impl AsRef<str>) {
		self.pairs.push((name.into(), normalize_newlines(value.as_ref())));
	}

	pub fn pairs(&self) -> &[(String, String)] {
		&self.pairs
	}

	/// First value submitted under `name`.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.pairs
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value.as_str())
	}

	pub fn len(&self) -> usize {
		self.pairs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}

	/// `application/x-www-form-urlencoded` body.
	pub fn encode(&self) -> Result<String, SubmitError> {
		serde_urlencoded::to_string(&self.pairs).map_err(|e| SubmitError::serialization(e.to_string()))
	}
}

fn normalize_newlines(value: &str) -> String {
	value.replace("\r\n", "\n").replace('\n', "\r\n")
}

/// Number assigned to a submission, increasing with every submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
	pub fn get(self) -> u64 {
		self.0
	}
}

impl std::fmt::Display for Ticket {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Hands out tickets and tells whether a ticket is still the latest.
///
/// A response is only rendered if its ticket is current; anything that
/// arrives after a newer submit has started is dropped.
#[derive(Debug, Default)]
pub struct SubmissionSequence {
	latest: Cell<u64>,
}

impl SubmissionSequence {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn begin(&self) -> Ticket {
		let next = self.latest.get() + 1;
		self.latest.set(next);
		Ticket(next)
	}

	pub fn is_current(&self, ticket: Ticket) -> bool {
		self.latest.get() == ticket.0
	}

	/// The most recently issued ticket, if any.
	pub fn latest(&self) -> Option<Ticket> {
		match self.latest.get() {
			0 => None,
			n => Some(Ticket(n)),
		}
	}
}
