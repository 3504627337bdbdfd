//! Shared control primitives and the token helpers behind the `data-ui-*` contract.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::field::{with_attrs, NodeProps};

mod controls;

pub use controls::{Button, Input};
pub(crate) use controls::render_input;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Primary emphasized action button.
    Primary,
    /// Secondary action button.
    Secondary,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Native `type` of a button element.
pub enum ButtonType {
    /// Submits the enclosing form.
    Submit,
    /// Plain button with no form behavior.
    Button,
    /// Resets the enclosing form.
    Reset,
}

impl Default for ButtonType {
    fn default() -> Self {
        Self::Submit
    }
}

impl ButtonType {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Submit => "submit",
            Self::Button => "button",
            Self::Reset => "reset",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
