//! Graw configuration page client
//!
//! Client-side validation round-trip for the bot configuration form. When
//! the form is submitted the native navigation is cancelled, the fields are
//! POSTed to the `validate` endpoint, and the JSON verdict is rendered
//! inline: a status banner styled by outcome, and `has-error` markers on
//! the fields the server rejected.
//!
//! ## Architecture
//!
//! ```text
//!  <form #config_form> ──submit──▶ FormSubmitHandler ──POST──▶ validate
//!                                      │      ▲
//!                                      │      └── ValidationResponse (JSON)
//!                                      ▼
//!                            RenderPlan::from_response
//!                                      │
//!                                      ▼
//!                      BannerPresenter ──▶ FormView (DomView | MemoryView)
//! ```
//!
//! - [`response`]: wire types of the endpoint's reply
//! - [`plan`]: pure mapping from a reply to a [`RenderPlan`]
//! - [`presenter`] / [`view`]: applying a plan to the page
//! - [`submission`]: form serialization and submission ordering
//! - [`client`]: transport ([`HttpValidationClient`] uses the Fetch API)
//! - [`handler`]: the submit lifecycle
//! - `dom` (wasm32 only): web-sys view and event binding
//!
//! ## Example
//!
//! ```ignore
//! use graw_config_pages::{FormConfig, bind_submit_handler};
//!
//! let handler = bind_submit_handler(FormConfig::default())?;
//! ```

pub mod client;
pub mod config;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod error;
pub mod handler;
pub mod logging;
pub mod plan;
pub mod presenter;
pub mod response;
pub mod submission;
pub mod view;

pub use client::{HttpValidationClient, ValidationClient, parse_reply};
pub use config::{BannerClasses, FormConfig};
#[cfg(target_arch = "wasm32")]
pub use dom::{DomSubmitHandler, DomView, bind_submit_handler, page_config, serialize_form};
pub use error::{BindError, ConfigError, SubmitError};
pub use handler::{FormSubmitHandler, SubmitOutcome};
pub use plan::{BannerVariant, RenderPlan};
pub use presenter::BannerPresenter;
pub use response::{ValidationResponse, ValidationStatus};
pub use submission::{ControlKind, FormControl, Submission, SubmissionSequence, Ticket};
pub use view::{FormView, MemoryView};

#[doc(hidden)]
pub mod __private {
	#[cfg(target_arch = "wasm32")]
	pub use web_sys;
}
