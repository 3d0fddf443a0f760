//! Banner and field-marker state transitions.

use crate::plan::RenderPlan;
use crate::response::{ValidationResponse, ValidationStatus};
use crate::view::FormView;

/// Owns every change made to the banner and the field markers.
///
/// A render always starts from a clean slate: markers from the previous
/// response are cleared and all variant classes removed before the new
/// outcome is applied, so nothing survives from one response to the next.
#[derive(Debug)]
pub struct BannerPresenter<V> {
	view: V,
}

impl<V: FormView> BannerPresenter<V> {
	pub fn new(view: V) -> Self {
		Self { view }
	}

	pub fn view(&self) -> &V {
		&self.view
	}

	/// Hides the banner while a request is in flight.
	pub fn reset(&self) {
		self.view.hide_banner();
	}

	/// Renders `plan`.
	pub fn apply(&self, plan: &RenderPlan) {
		self.view.clear_field_markers();
		self.view.reset_banner();
		self.view.set_banner_content(&plan.message);

		if let Some(variant) = plan.variant {
			self.view.add_banner_variant(variant);
		}
		for field in &plan.invalid_fields {
			self.view.mark_field(field);
		}

		self.view.reveal_banner();
	}

	/// Renders a verdict given as its parts.
	pub fn set_status<I, S>(&self, status: impl Into<ValidationStatus>, message: impl Into<String>, fields: I)
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let response = ValidationResponse::new(status, message).with_errors(fields);
		self.apply(&RenderPlan::from_response(&response));
	}
}
