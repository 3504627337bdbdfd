//! Headless form-state engine for browser-hosted Leptos forms.
//!
//! A [`FormHandle`] stores field values keyed by name, runs each field's
//! [`FieldRules`], aggregates [`FieldErrors`], and hands per-field subscriptions
//! to controlled inputs. Uncontrolled inputs join a form through
//! [`RegisterField::register`]. UI composition lives in `form_ui`; this crate
//! renders nothing.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod controller;
mod handle;
mod rules;
mod values;

pub use controller::{Controller, ControllerField, FieldState};
pub use handle::{
    FieldRegistration, FormHandle, FormOptions, RegisterField, RevalidateMode, SetValueOptions,
    SubmitOutcome, ValidationMode,
};
pub use rules::{
    FieldError, FieldErrors, FieldRules, RequiredRule, ValidateFn, MANUAL_RULE, REQUIRED_RULE,
};
pub use values::{decode_values, encode_values, FieldValues, FormError, FormValues};
