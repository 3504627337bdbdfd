//! Per-field live subscriptions used by controlled inputs.

use leptos::{Callback, Signal, SignalWith};

use crate::FieldError;

#[derive(Clone)]
/// Everything a controlled input needs to drive one field.
pub struct Controller {
    /// Value and event wiring.
    pub field: ControllerField,
    /// Live meta state for the same field.
    pub field_state: FieldState,
}

#[derive(Clone)]
/// Value/event half of a [`Controller`].
pub struct ControllerField {
    /// Registered field name.
    pub name: String,
    /// Current value; only notifies when this field's value changes.
    pub value: Signal<String>,
    /// Writes a new value into the form.
    pub on_change: Callback<String>,
    /// Marks the field as touched.
    pub on_blur: Callback<()>,
}

#[derive(Clone, Copy)]
/// Meta half of a [`Controller`].
pub struct FieldState {
    /// Current validation error for the field.
    pub error: Signal<Option<FieldError>>,
    /// Whether the field has been blurred at least once.
    pub is_touched: Signal<bool>,
    /// Whether the value differs from the default value.
    pub is_dirty: Signal<bool>,
    /// Whether the field currently carries an error.
    pub invalid: Signal<bool>,
}

impl FieldState {
    /// Message of the current error, if any.
    pub fn error_message(&self) -> Signal<Option<String>> {
        let error = self.error;
        Signal::derive(move || error.with(|error| error.as_ref().map(|err| err.message.clone())))
    }
}
