//! Transport to the validation endpoint.

use crate::error::SubmitError;
use crate::response::ValidationResponse;
use crate::submission::Submission;
use async_trait::async_trait;

/// `Content-Type` of the request body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// `Accept` header announcing a JSON reply.
pub const JSON_ACCEPT: &str = "application/json, text/javascript, */*; q=0.01";

/// Sends a submission and returns the server's verdict.
///
/// Futures are `!Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait ValidationClient {
	async fn validate(&self, submission: &Submission) -> Result<ValidationResponse, SubmitError>;
}

/// POSTs submissions to the configured endpoint using the Fetch API.
#[derive(Debug, Clone)]
pub struct HttpValidationClient {
	endpoint: String,
}

impl HttpValidationClient {
	pub fn new(endpoint: impl Into<String>) -> Self {
		Self {
			endpoint: endpoint.into(),
		}
	}

	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}
}

#[async_trait(?Send)]
impl ValidationClient for HttpValidationClient {
	#[cfg(target_arch = "wasm32")]
	async fn validate(&self, submission: &Submission) -> Result<ValidationResponse, SubmitError> {
		use gloo_net::http::Request;

		let body = submission.encode()?;

		let response = Request::post(&self.endpoint)
			.header("Content-Type", FORM_CONTENT_TYPE)
			.header("Accept", JSON_ACCEPT)
			.header("X-Requested-With", "XMLHttpRequest")
			.body(body)
			.map_err(|e| SubmitError::network(e.to_string()))?
			.send()
			.await
			.map_err(|e| SubmitError::network(e.to_string()))?;

		let status = response.status();
		let status_text = response.status_text();
		let text = response
			.text()
			.await
			.map_err(|e| SubmitError::network(e.to_string()))?;

		parse_reply(status, &status_text, &text)
	}

	/// Validates a submission (non-WASM stub).
	#[cfg(not(target_arch = "wasm32"))]
	async fn validate(&self, submission: &Submission) -> Result<ValidationResponse, SubmitError> {
		submission.encode()?;
		Err(SubmitError::network(format!(
			"cannot reach {} outside WASM",
			self.endpoint
		)))
	}
}

/// Turns a raw HTTP reply into a verdict.
///
/// Any non-2xx status is a failure regardless of the body.
pub fn parse_reply(status: u16, status_text: &str, body: &str) -> Result<ValidationResponse, SubmitError> {
	if !(200..300).contains(&status) {
		return Err(SubmitError::server(status, status_text));
	}
	ValidationResponse::from_json(body).map_err(|e| SubmitError::deserialization(e.to_string()))
}
