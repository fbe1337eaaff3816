//! In-memory page elements.
//!
//! Each widget is a cheap handle over shared state: clones observe and
//! mutate the same element, so the caller can keep one handle for display
//! while the handler owns another.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{theme, FormView, StatusBanner, SubmitControl};
use crate::types::{Field, Status};

/// Text inputs of the contact form
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    values: Rc<RefCell<HashMap<Field, String>>>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, field: Field, value: impl Into<String>) {
        self.values.borrow_mut().insert(field, value.into());
    }

    /// Builder-style `set` for filling a form in one expression
    pub fn with(self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// True when every input is empty
    pub fn is_empty(&self) -> bool {
        self.values.borrow().values().all(|v| v.is_empty())
    }
}

impl FormView for FormFields {
    fn value(&self, field: Field) -> String {
        self.values.borrow().get(&field).cloned().unwrap_or_default()
    }

    fn reset(&self) {
        for value in self.values.borrow_mut().values_mut() {
            value.clear();
        }
    }
}

#[derive(Debug)]
struct ButtonState {
    label: String,
    disabled: bool,
}

/// Submit button with a text label
#[derive(Debug, Clone)]
pub struct SubmitButton {
    state: Rc<RefCell<ButtonState>>,
}

impl SubmitButton {
    pub fn new() -> Self {
        Self::with_label(theme::SUBMIT_LABEL)
    }

    pub fn with_label(label: &str) -> Self {
        Self {
            state: Rc::new(RefCell::new(ButtonState {
                label: label.to_string(),
                disabled: false,
            })),
        }
    }
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmitControl for SubmitButton {
    fn set_disabled(&self, disabled: bool) {
        self.state.borrow_mut().disabled = disabled;
    }

    fn is_disabled(&self) -> bool {
        self.state.borrow().disabled
    }

    fn set_label(&self, label: &str) {
        self.state.borrow_mut().label = label.to_string();
    }

    fn label(&self) -> String {
        self.state.borrow().label.clone()
    }
}

#[derive(Debug, Default)]
struct AlertState {
    class_name: String,
    text: String,
}

/// Status banner; hidden (empty class and text) until the first status
#[derive(Debug, Clone, Default)]
pub struct AlertBox {
    state: Rc<RefCell<AlertState>>,
}

impl AlertBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class_name(&self) -> String {
        self.state.borrow().class_name.clone()
    }

    pub fn text(&self) -> String {
        self.state.borrow().text.clone()
    }
}

impl StatusBanner for AlertBox {
    fn show(&self, status: &Status) {
        let mut state = self.state.borrow_mut();
        state.class_name = status.kind.class_name().to_string();
        state.text = status.text.clone();
    }
}
