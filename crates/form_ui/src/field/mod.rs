//! Form fields: the shared template, the controlled and uncontrolled variants and
//! the [`FormField`] dispatcher choosing between them.

use form_state::FormValues;
use leptos::*;

mod binder;
mod controlled;
mod node;
mod required;
mod template;
mod uncontrolled;

pub use binder::{bind_nodes, BindScope};
pub use controlled::{ControlledField, ControlledFormField, RenderController};
pub(crate) use node::with_attrs;
pub use node::{
    render_nodes, ContainerNode, ContainerTag, CustomNode, FieldNode, InputNode, NodeProps,
    NodeShape, RenderCustom, SelectNode, SelectOption,
};
pub use required::{is_field_required, use_is_field_required};
pub use template::{error_slot_text, FieldTemplate, EMPTY_ERROR_TEXT, REQUIRED_MARKER};
pub use uncontrolled::{BoundField, UncontrolledField, UncontrolledFormField};

use controlled::render_controlled;
use uncontrolled::render_uncontrolled;

/// Which field variant to render, with the props that variant accepts.
pub enum FieldMode<T: 'static> {
    /// Caller renders the input from a live controller.
    Controlled(ControlledField<T>),
    /// Inputs in a node tree register themselves.
    Uncontrolled(UncontrolledField<T>),
}

impl<T: 'static> FieldMode<T> {
    /// Whether this is the controlled variant.
    pub fn is_controlled(&self) -> bool {
        matches!(self, Self::Controlled(_))
    }

    /// Field name, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Controlled(field) => Some(&field.name),
            Self::Uncontrolled(field) => field.name.as_deref(),
        }
    }
}

impl<T: 'static> From<ControlledField<T>> for FieldMode<T> {
    fn from(field: ControlledField<T>) -> Self {
        Self::Controlled(field)
    }
}

impl<T: 'static> From<UncontrolledField<T>> for FieldMode<T> {
    fn from(field: UncontrolledField<T>) -> Self {
        Self::Uncontrolled(field)
    }
}

#[component]
/// One form field, controlled or uncontrolled depending on `mode`.
pub fn FormField<T: FormValues>(
    mode: FieldMode<T>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    match mode {
        FieldMode::Controlled(field) => render_controlled(field, label, layout_class),
        FieldMode::Uncontrolled(field) => render_uncontrolled(field, label, layout_class),
    }
}
