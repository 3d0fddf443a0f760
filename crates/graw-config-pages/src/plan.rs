//! Pure mapping from a validation outcome to what the page should show.

use crate::response::{ValidationResponse, ValidationStatus};

/// Styling applied to the banner. `None` in a plan means neutral styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BannerVariant {
	Success,
	Warning,
	Danger,
}

/// Everything a view needs to render one validation outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
	pub variant: Option<BannerVariant>,
	/// Banner markup, inserted as-is
	pub message: String,
	/// Fields to flag as invalid; empty unless `variant` is `Danger`
	pub invalid_fields: Vec<String>,
}

impl RenderPlan {
	/// Builds the plan for a server verdict.
	///
	/// `errors` is only honoured for `status = "error"`, and duplicate names
	/// are collapsed while keeping server order.
	pub fn from_response(response: &ValidationResponse) -> Self {
		let (variant, invalid_fields) = match &response.status {
			ValidationStatus::Success => (Some(BannerVariant::Success), Vec::new()),
			ValidationStatus::Warning => (Some(BannerVariant::Warning), Vec::new()),
			ValidationStatus::Error => (Some(BannerVariant::Danger), dedup(&response.errors)),
			ValidationStatus::Other(_) => (None, Vec::new()),
		};

		Self {
			variant,
			message: response.message.clone(),
			invalid_fields,
		}
	}

	/// Builds the generic danger banner shown when no verdict arrived.
	pub fn transport_failure(message: impl Into<String>) -> Self {
		Self {
			variant: Some(BannerVariant::Danger),
			message: message.into(),
			invalid_fields: Vec::new(),
		}
	}

	pub fn is_invalid(&self, field: &str) -> bool {
		self.invalid_fields.iter().any(|f| f == field)
	}
}

fn dedup(fields: &[String]) -> Vec<String> {
	let mut seen = Vec::with_capacity(fields.len());
	for field in fields {
		if !seen.contains(field) {
			seen.push(field.clone());
		}
	}
	seen
}
