//! Contact form submission handler.
//!
//! Reads the four contact inputs, posts them as JSON to `/api/contact`,
//! and reflects the result on the page: a busy submit button while the
//! request is in flight, then a success or error banner.
//!
//! Page elements are injected as handles (see [`ui`]); the network is behind
//! [`network::ContactTransport`]. Validation, spam filtering and rate
//! limiting belong to the server.

pub mod config;
pub mod network;
pub mod types;
pub mod ui;

pub use config::ContactConfig;
pub use network::{ContactTransport, HttpTransport};
pub use types::*;
pub use ui::{FormSubmitHandler, SubmitEvent, SubmitOutcome};
