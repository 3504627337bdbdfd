//! Form components layered over the `form_state` engine.
//!
//! [`Form`] owns or adopts a [`form_state::FormHandle`] and hands it to its
//! children explicitly. Each [`FormField`] is either controlled (rendered by the
//! caller from a live controller) or uncontrolled (a [`FieldNode`] tree whose
//! inputs the binder registers). Both share the [`FieldTemplate`] chrome and the
//! `data-ui-*` DOM contract of the [`Button`] and [`Input`] primitives.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod field;
mod form;
mod primitives;

pub use field::{
    bind_nodes, error_slot_text, is_field_required, render_nodes, use_is_field_required,
    BindScope, BoundField, ContainerNode, ContainerTag, ControlledField, ControlledFormField,
    CustomNode, FieldMode, FieldNode, FieldTemplate, FormField, InputNode, NodeProps, NodeShape,
    SelectNode, SelectOption, UncontrolledField, UncontrolledFormField, REQUIRED_MARKER,
};
pub use form::{acquire_form, Form};
pub use primitives::{Button, ButtonType, ButtonVariant, Input};

/// Convenience imports for application crates building forms.
pub mod prelude {
    pub use crate::{
        Button, ButtonType, ButtonVariant, ContainerNode, ContainerTag, ControlledField,
        ControlledFormField, CustomNode, FieldMode, FieldNode, FieldTemplate, Form, FormField,
        Input, InputNode, NodeProps, SelectNode, SelectOption, UncontrolledField,
        UncontrolledFormField,
    };
    pub use form_state::{
        Controller, FieldErrors, FieldRules, FormHandle, FormOptions, RequiredRule,
        RevalidateMode, ValidationMode,
    };
}
