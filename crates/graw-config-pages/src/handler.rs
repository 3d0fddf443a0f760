//! Submit lifecycle of the configuration form.
//!
//! ```text
//!  submit event ──▶ begin()            hide banner, take ticket
//!                      │
//!                      ▼
//!                  dispatch(ticket)    POST validate ──▶ verdict / failure
//!                      │
//!          ticket still latest? ──no──▶ Discarded
//!                      │ yes
//!                      ▼
//!                  presenter.apply()   banner + field markers + fragment
//! ```
//!
//! `begin` is synchronous so the banner is hidden inside the event callback,
//! before the request future is even spawned.

use crate::client::ValidationClient;
use crate::config::FormConfig;
use crate::error::SubmitError;
use crate::plan::RenderPlan;
use crate::presenter::BannerPresenter;
use crate::response::ValidationStatus;
use crate::submission::{Submission, SubmissionSequence, Ticket};
use crate::view::FormView;
use crate::{debug_log, error_log, warn_log};

/// How a dispatched submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// A verdict arrived and was rendered
	Rendered(RenderPlan),
	/// No verdict; the generic failure banner was rendered
	Failed { error: SubmitError, plan: RenderPlan },
	/// A newer submission started before this one finished; nothing rendered
	Discarded(Ticket),
}

/// Intercepts submits of one form and renders the validation result.
pub struct FormSubmitHandler<V, C> {
	presenter: BannerPresenter<V>,
	client: C,
	sequence: SubmissionSequence,
	failure_message: String,
}

impl<V: FormView, C: ValidationClient> FormSubmitHandler<V, C> {
	pub fn new(view: V, client: C, config: &FormConfig) -> Self {
		Self {
			presenter: BannerPresenter::new(view),
			client,
			sequence: SubmissionSequence::new(),
			failure_message: config.failure_message.clone(),
		}
	}

	pub fn presenter(&self) -> &BannerPresenter<V> {
		&self.presenter
	}

	pub fn client(&self) -> &C {
		&self.client
	}

	/// Starts a submission: hides the banner and issues a ticket.
	pub fn begin(&self) -> Ticket {
		let ticket = self.sequence.begin();
		self.presenter.reset();
		ticket
	}

	/// Sends `submission` and renders the outcome if `ticket` is still current.
	pub async fn dispatch(&self, ticket: Ticket, submission: Submission) -> SubmitOutcome {
		debug_log!("dispatching submission {} ({} fields)", ticket, submission.len());

		let result = self.client.validate(&submission).await;

		if !self.sequence.is_current(ticket) {
			debug_log!(
				"discarding reply to submission {}, latest is {:?}",
				ticket,
				self.sequence.latest()
			);
			return SubmitOutcome::Discarded(ticket);
		}

		match result {
			Ok(response) => {
				if matches!(response.status, ValidationStatus::Other(_)) {
					warn_log!("unrecognised validation status {:?}", response.status.as_str());
				}
				let plan = RenderPlan::from_response(&response);
				self.presenter.apply(&plan);
				SubmitOutcome::Rendered(plan)
			}
			Err(error) => {
				error_log!("validation request {} failed: {}", ticket, error);
				let plan = RenderPlan::transport_failure(self.failure_message.as_str());
				self.presenter.apply(&plan);
				SubmitOutcome::Failed { error, plan }
			}
		}
	}

	/// `begin` followed by `dispatch`.
	pub async fn submit(&self, submission: Submission) -> SubmitOutcome {
		let ticket = self.begin();
		self.dispatch(ticket, submission).await
	}
}
