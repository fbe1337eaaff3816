//! Contact form UI layer.
//!
//! The handler never looks elements up by id. It is handed element handles
//! at construction and talks to them through the traits below. Handles take
//! `&self` since page elements are shared references with their own interior
//! state; the submission flow is their only writer.

pub mod submit;
pub mod theme;
pub mod widgets;

use crate::types::{Field, Status};

pub use submit::{FormSubmitHandler, SubmitEvent, SubmitOutcome};
pub use widgets::{AlertBox, FormFields, SubmitButton};

/// The form element: field values and reset
pub trait FormView {
    /// Current raw (untrimmed) value of an input
    fn value(&self, field: Field) -> String;

    /// Clear every input back to empty
    fn reset(&self);
}

/// The submit button
pub trait SubmitControl {
    fn set_disabled(&self, disabled: bool);
    fn is_disabled(&self) -> bool;
    fn set_label(&self, label: &str);
    fn label(&self) -> String;
}

/// The status banner above the form
pub trait StatusBanner {
    fn show(&self, status: &Status);
}
