//! Contact form submission flow
//!
//! ```text
//! Idle --submit--> Sending --2xx-------> Idle (success shown, fields cleared)
//!                  Sending --non-2xx---> Idle (server error or fallback shown)
//!                  Sending --failure---> Idle (network error shown)
//! ```
//!
//! Sending is entered and left exactly once per accepted submit. The exit
//! runs from a drop guard, so the button comes back even if the submit
//! future is dropped mid-request.

use serde_json::Value;

use super::{theme, FormView, StatusBanner, SubmitControl};
use crate::network::{ContactResponse, ContactTransport, TransportError};
use crate::types::{ContactPayload, Status, UiState};

/// A form submission event
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the page's own navigation-based submission
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// How a submit event ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 2xx from the server
    Accepted,
    /// Non-2xx; carries the banner text
    Rejected(String),
    /// No usable response; carries the banner text
    NetworkFailure(String),
    /// Arrived while a request was already in flight
    Ignored,
}

impl SubmitOutcome {
    /// Banner status for this outcome (none for ignored submits)
    pub fn status(&self) -> Option<Status> {
        match self {
            SubmitOutcome::Accepted => Some(Status::success(theme::SUCCESS_TEXT)),
            SubmitOutcome::Rejected(text) | SubmitOutcome::NetworkFailure(text) => {
                Some(Status::error(text.clone()))
            }
            SubmitOutcome::Ignored => None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}

/// Map a transport result to an outcome
pub fn resolve(result: Result<ContactResponse, TransportError>) -> SubmitOutcome {
    let response = match result {
        Ok(response) => response,
        Err(e) => {
            log::warn!("Contact request failed: {}", e);
            return SubmitOutcome::NetworkFailure(theme::NETWORK_ERROR_TEXT.to_string());
        }
    };

    if response.is_success() {
        log::info!("Contact message accepted ({})", response.status);
        return SubmitOutcome::Accepted;
    }

    match rejection_text(&response.body) {
        Some(text) => {
            log::info!("Contact message rejected ({}): {}", response.status, text);
            SubmitOutcome::Rejected(text)
        }
        None => {
            log::warn!("Contact endpoint answered {} with a null body", response.status);
            SubmitOutcome::NetworkFailure(theme::NETWORK_ERROR_TEXT.to_string())
        }
    }
}

/// Banner text for a rejected submit, `None` if the body is JSON `null`
///
/// Falsy `error` values (missing, null, false, 0, "") fall back to the
/// generic text. Any other non-string value is shown as its JSON text
/// (`["a","b"]`, `{"k":1}`), not the browser's `a,b` / `[object Object]`.
fn rejection_text(body: &Value) -> Option<String> {
    let error = match body {
        Value::Null => return None,
        Value::Object(fields) => fields.get("error"),
        _ => None,
    };

    let text = match error {
        None | Some(Value::Null) | Some(Value::Bool(false)) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(other) => Some(other.to_string()),
    };

    Some(text.unwrap_or_else(|| theme::FALLBACK_ERROR_TEXT.to_string()))
}

/// Holds the form in the Sending state until dropped
///
/// The button's label at engage time is put back on release.
struct BusyGuard<'a, B: SubmitControl> {
    button: &'a B,
    state: &'a mut UiState,
    idle_label: String,
}

impl<'a, B: SubmitControl> BusyGuard<'a, B> {
    fn engage(button: &'a B, state: &'a mut UiState) -> Self {
        let idle_label = button.label();
        state.busy = true;
        button.set_disabled(true);
        button.set_label(theme::SENDING_LABEL);
        log::debug!("Contact form: Idle -> Sending");
        Self {
            button,
            state,
            idle_label,
        }
    }
}

impl<B: SubmitControl> Drop for BusyGuard<'_, B> {
    fn drop(&mut self) {
        self.state.busy = false;
        self.button.set_disabled(false);
        self.button.set_label(&self.idle_label);
        log::debug!("Contact form: Sending -> Idle");
    }
}

/// Submit handler bound to one contact form
///
/// Owns the element handles it was built with and the [`UiState`] they
/// reflect. Nothing else writes to either.
pub struct FormSubmitHandler<T, F, B, S> {
    transport: T,
    form: F,
    button: B,
    banner: S,
    state: UiState,
}

impl<T, F, B, S> FormSubmitHandler<T, F, B, S>
where
    T: ContactTransport,
    F: FormView,
    B: SubmitControl,
    S: StatusBanner,
{
    pub fn new(transport: T, form: F, button: B, banner: S) -> Self {
        Self {
            transport,
            form,
            button,
            banner,
            state: UiState::default(),
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Handle one submit event: send the form, show the result
    pub async fn on_submit(&mut self, event: &mut SubmitEvent) -> SubmitOutcome {
        event.prevent_default();

        if self.state.busy || self.button.is_disabled() {
            log::debug!("Contact form: submit ignored while sending");
            return SubmitOutcome::Ignored;
        }

        let payload = ContactPayload::from_fields(|field| self.form.value(field));

        #[cfg(feature = "verbose-network")]
        log::debug!("Contact form: submitting {:?}", payload);

        let Self {
            transport,
            form,
            button,
            banner,
            state,
        } = self;

        let busy = BusyGuard::engage(&*button, state);

        let outcome = resolve(transport.post(&payload).await);
        if let Some(status) = outcome.status() {
            banner.show(&status);
            busy.state.last_status = Some(status);
        }
        if outcome.is_accepted() {
            form.reset();
        }

        drop(busy);
        outcome
    }
}
