//! Submit Flow Integration Tests
//!
//! Drives `FormSubmitHandler` end to end against `MemoryView` with scripted
//! transports.
//!
//! Test Categories:
//! - Category 1: Status to banner mapping
//! - Category 2: Field markers
//! - Category 3: Repeated and overlapping submissions
//! - Category 4: Transport failures
//!
//! Note: DOM binding and event suppression are covered by the wasm tests.

#![cfg(not(target_arch = "wasm32"))]

use async_trait::async_trait;
use graw_config_pages::{
	FormConfig, FormSubmitHandler, MemoryView, Submission, SubmitError, SubmitOutcome, ValidationClient,
	ValidationResponse,
};
use rstest::{fixture, rstest};
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap, VecDeque};
use tokio::sync::oneshot;

type Reply = Result<ValidationResponse, SubmitError>;

/// Answers each call with the next queued reply.
struct ScriptedClient {
	replies: RefCell<VecDeque<Reply>>,
}

#[async_trait(?Send)]
impl ValidationClient for ScriptedClient {
	async fn validate(&self, _submission: &Submission) -> Reply {
		self.replies
			.borrow_mut()
			.pop_front()
			.unwrap_or_else(|| Err(SubmitError::network("no reply scripted")))
	}
}

/// Holds each request open until the test sends its reply.
///
/// Requests are matched to channels by their `n` field, so the order in
/// which futures get polled does not matter.
struct GatedClient {
	gates: RefCell<HashMap<String, oneshot::Receiver<Reply>>>,
}

#[async_trait(?Send)]
impl ValidationClient for GatedClient {
	async fn validate(&self, submission: &Submission) -> Reply {
		let key = submission.get("n").unwrap_or_default().to_string();
		let gate = self.gates.borrow_mut().remove(&key);
		match gate {
			Some(rx) => rx.await.unwrap_or_else(|_| Err(SubmitError::network("gate dropped"))),
			None => Err(SubmitError::network("no gate")),
		}
	}
}

const FIELDS: [&str; 6] = ["username", "email", "host", "port", "svn_url", "svn_int"];

#[fixture]
fn config() -> FormConfig {
	FormConfig::default()
}

fn scripted(config: &FormConfig, replies: Vec<Reply>) -> FormSubmitHandler<MemoryView, ScriptedClient> {
	let view = MemoryView::new(config.clone()).with_fields(FIELDS);
	let client = ScriptedClient {
		replies: RefCell::new(replies.into()),
	};
	FormSubmitHandler::new(view, client, config)
}

fn numbered(n: &str) -> Submission {
	let mut submission = Submission::new();
	submission.push("n", n);
	submission
}

fn classes(names: &[&str]) -> BTreeSet<String> {
	names.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Category 1: Status to banner mapping
// ============================================================================

/// Success scenario: visible banner, success styling, content, fragment
#[rstest]
#[tokio::test]
async fn test_success_scenario(config: FormConfig) {
	let handler = scripted(&config, vec![Ok(ValidationResponse::new("success", "Saved."))]);

	handler.submit(Submission::new()).await;

	let view = handler.presenter().view();
	assert_eq!(view.banner_classes(), classes(&["alert-success"]));
	assert_eq!(view.banner_html(), "Saved.");
	assert!(view.marked_fields().is_empty());
	assert_eq!(view.fragment().as_deref(), Some("alert_box"));
}

/// Each status yields exactly one variant class (or none for unknown)
#[rstest]
#[case("success", &["alert-success"])]
#[case("warning", &["alert-warning"])]
#[case("error", &["alert-danger"])]
#[case("pending", &[])]
#[tokio::test]
async fn test_status_style_mapping(config: FormConfig, #[case] status: &str, #[case] expected: &[&str]) {
	let handler = scripted(&config, vec![Ok(ValidationResponse::new(status, "msg"))]);

	handler.submit(Submission::new()).await;

	let view = handler.presenter().view();
	assert_eq!(view.banner_classes(), classes(expected));
	assert!(!view.is_banner_hidden());
}

/// Markup in the message is inserted verbatim
#[rstest]
#[tokio::test]
async fn test_message_markup_not_escaped(config: FormConfig) {
	let message = "<strong>Configuration changes applied successfully.</strong>";
	let handler = scripted(&config, vec![Ok(ValidationResponse::new("success", message))]);

	handler.submit(Submission::new()).await;

	assert_eq!(handler.presenter().view().banner_html(), message);
}

// ============================================================================
// Category 2: Field markers
// ============================================================================

/// Error scenario with two fields
#[rstest]
#[tokio::test]
async fn test_error_with_two_fields(config: FormConfig) {
	let handler = scripted(
		&config,
		vec![Ok(ValidationResponse::new("error", "Fix errors below.").with_errors(["username", "email"]))],
	);

	handler.submit(Submission::new()).await;

	let view = handler.presenter().view();
	assert_eq!(view.banner_classes(), classes(&["alert-danger"]));
	assert_eq!(view.banner_html(), "Fix errors below.");
	assert!(view.is_marked("username"));
	assert!(view.is_marked("email"));
}

/// Only the listed fields are marked
#[rstest]
#[tokio::test]
async fn test_field_marker_precision(config: FormConfig) {
	let handler = scripted(
		&config,
		vec![Ok(ValidationResponse::new("error", "").with_errors(["host", "port"]))],
	);

	handler.submit(Submission::new()).await;

	let view = handler.presenter().view();
	assert_eq!(view.marked_fields(), vec!["host", "port"]);
	for untouched in ["username", "email", "svn_url", "svn_int"] {
		assert_eq!(
			view.classes_of(&config.field_marker_id(untouched)),
			Some(BTreeSet::new()),
			"{untouched} should be untouched"
		);
	}
}

/// Custom prefix and invalid class flow through to the markers
#[rstest]
#[tokio::test]
async fn test_custom_marker_contract() {
	let mut config = FormConfig::default().with_field_error_prefix("err-");
	config.classes.invalid = "is-invalid".to_string();
	let handler = scripted(
		&config,
		vec![Ok(ValidationResponse::new("error", "").with_errors(["port"]))],
	);

	handler.submit(Submission::new()).await;

	let marker = handler.presenter().view().classes_of("err-port").unwrap();
	assert_eq!(marker, classes(&["is-invalid"]));
}

// ============================================================================
// Category 3: Repeated and overlapping submissions
// ============================================================================

/// Error then success: the marker is cleared and only success styling remains
#[rstest]
#[tokio::test]
async fn test_repeated_submit_clears_previous_error(config: FormConfig) {
	let handler = scripted(
		&config,
		vec![
			Ok(ValidationResponse::new("error", "Bad email.").with_errors(["email"])),
			Ok(ValidationResponse::new("success", "Saved.")),
		],
	);

	handler.submit(Submission::new()).await;
	assert!(handler.presenter().view().is_marked("email"));

	handler.submit(Submission::new()).await;

	let view = handler.presenter().view();
	assert!(!view.is_marked("email"));
	assert_eq!(view.banner_classes(), classes(&["alert-success"]));
	assert_eq!(view.banner_html(), "Saved.");
}

/// Banner is hidden between begin and the reply
#[rstest]
#[tokio::test]
async fn test_banner_hidden_while_in_flight(config: FormConfig) {
	let (tx, rx) = oneshot::channel();
	let view = MemoryView::new(config.clone()).with_fields(FIELDS);
	let client = GatedClient {
		gates: RefCell::new(HashMap::from([("1".to_string(), rx)])),
	};
	let handler = FormSubmitHandler::new(view, client, &config);
	handler.presenter().set_status("warning", "stale", Vec::<String>::new());

	let ticket = handler.begin();
	assert!(handler.presenter().view().is_banner_hidden());

	tx.send(Ok(ValidationResponse::new("success", "fresh"))).unwrap();
	let outcome = handler.dispatch(ticket, numbered("1")).await;

	assert!(matches!(outcome, SubmitOutcome::Rendered(_)));
	assert_eq!(handler.presenter().view().banner_html(), "fresh");
}

/// A reply to an older submission arriving last does not overwrite the newer one
#[rstest]
#[tokio::test]
async fn test_out_of_order_reply_discarded(config: FormConfig) {
	let (tx1, rx1) = oneshot::channel();
	let (tx2, rx2) = oneshot::channel();
	let view = MemoryView::new(config.clone()).with_fields(FIELDS);
	let client = GatedClient {
		gates: RefCell::new(HashMap::from([("1".to_string(), rx1), ("2".to_string(), rx2)])),
	};
	let handler = FormSubmitHandler::new(view, client, &config);

	let first = handler.begin();
	let second = handler.begin();

	let (first_outcome, second_outcome, ()) = tokio::join!(
		handler.dispatch(first, numbered("1")),
		handler.dispatch(second, numbered("2")),
		async {
			tx2.send(Ok(ValidationResponse::new("success", "Saved."))).unwrap();
			tokio::task::yield_now().await;
			tx1.send(Ok(ValidationResponse::new("error", "Bad email.").with_errors(["email"])))
				.unwrap();
		}
	);

	assert_eq!(first_outcome, SubmitOutcome::Discarded(first));
	assert!(matches!(second_outcome, SubmitOutcome::Rendered(_)));

	let view = handler.presenter().view();
	assert_eq!(view.banner_classes(), classes(&["alert-success"]));
	assert_eq!(view.banner_html(), "Saved.");
	assert!(!view.is_marked("email"));
}

// ============================================================================
// Category 4: Transport failures
// ============================================================================

/// A failed request after an error verdict clears the old markers
#[rstest]
#[tokio::test]
async fn test_failure_after_error_verdict(config: FormConfig) {
	let handler = scripted(
		&config,
		vec![
			Ok(ValidationResponse::new("error", "").with_errors(["svn_url"])),
			Err(SubmitError::server(502, "Bad Gateway")),
		],
	);

	handler.submit(Submission::new()).await;
	let outcome = handler.submit(Submission::new()).await;

	let SubmitOutcome::Failed { error, plan } = outcome else {
		panic!("expected a transport failure");
	};
	assert_eq!(error, SubmitError::server(502, "Bad Gateway"));
	assert_eq!(plan.message, config.failure_message);

	let view = handler.presenter().view();
	assert_eq!(view.banner_classes(), classes(&["alert-danger"]));
	assert!(view.marked_fields().is_empty());
}

/// The failure message is configurable
#[rstest]
#[tokio::test]
async fn test_custom_failure_message() {
	let config = FormConfig::default().with_failure_message("Server unreachable.");
	let handler = scripted(&config, vec![Err(SubmitError::network("Failed to fetch"))]);

	handler.submit(Submission::new()).await;

	assert_eq!(handler.presenter().view().banner_html(), "Server unreachable.");
}
