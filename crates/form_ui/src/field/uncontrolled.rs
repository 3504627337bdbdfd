use form_state::{FieldRules, FormHandle, FormValues, RegisterField};
use leptos::*;

use super::{
    binder::{bind_nodes, BindScope},
    node::{render_nodes, FieldNode},
    required::is_field_required,
    template::{render_template, TemplateParts},
};

/// Props of a field whose inputs register themselves with the form.
pub struct UncontrolledField<T: 'static> {
    /// Field name; also the label target and the id of the first bound input.
    pub name: Option<String>,
    /// Form the inputs register with. Without one nothing is bound.
    pub form: Option<FormHandle<T>>,
    /// Rules passed to every registration.
    pub rules: FieldRules,
    /// Error shown under the field; read from the form by name when unset.
    pub error: Option<MaybeSignal<Option<String>>>,
    /// Field content.
    pub nodes: Vec<FieldNode>,
}

impl<T: 'static> Default for UncontrolledField<T> {
    fn default() -> Self {
        Self {
            name: None,
            form: None,
            rules: FieldRules::default(),
            error: None,
            nodes: Vec::new(),
        }
    }
}

impl<T: 'static> UncontrolledField<T> {
    /// Empty field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the form to register with.
    pub fn form(mut self, form: FormHandle<T>) -> Self {
        self.form = Some(form);
        self
    }

    /// Sets the rules.
    pub fn rules(mut self, rules: FieldRules) -> Self {
        self.rules = rules;
        self
    }

    /// Overrides the error read from the form.
    pub fn error(mut self, error: impl Into<MaybeSignal<Option<String>>>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Appends one node.
    pub fn node(mut self, node: impl Into<FieldNode>) -> Self {
        self.nodes.push(node.into());
        self
    }

    /// Replaces the content.
    pub fn nodes(mut self, nodes: Vec<FieldNode>) -> Self {
        self.nodes = nodes;
        self
    }
}

/// Error message for a field: the explicit one, else the form's error for `name`.
pub(crate) fn field_error_message<T: FormValues>(
    explicit: Option<MaybeSignal<Option<String>>>,
    form: Option<FormHandle<T>>,
    name: Option<&str>,
) -> Signal<Option<String>> {
    match (explicit, form, name) {
        (Some(error), _, _) => Signal::derive(move || error.get()),
        (None, Some(form), Some(name)) => {
            let error = form.error(name);
            Signal::derive(move || error.with(|error| error.as_ref().map(|err| err.message.clone())))
        }
        _ => Signal::derive(|| None),
    }
}

/// Uncontrolled field after binding: inputs registered and error resolved.
pub struct BoundField {
    /// Field name.
    pub name: Option<String>,
    /// Whether the label carries the required marker.
    pub required: bool,
    /// Message shown in the error row.
    pub error: Signal<Option<String>>,
    /// Content with registration bindings applied.
    pub nodes: Vec<FieldNode>,
}

impl<T: FormValues> UncontrolledField<T> {
    /// Registers the content with the form and resolves the field's error.
    pub fn bind(self) -> BoundField {
        let UncontrolledField {
            name,
            form,
            rules,
            error,
            nodes,
        } = self;

        let error = field_error_message(error, form, name.as_deref());
        let invalid = Signal::derive(move || {
            error.with(|error| error.as_deref().is_some_and(|msg| !msg.is_empty()))
        });
        let registrar = form.as_ref().map(|form| form as &dyn RegisterField);
        let nodes = bind_nodes(
            &BindScope {
                field_name: name.as_deref(),
                rules: &rules,
                invalid,
                registrar,
            },
            nodes,
        );

        BoundField {
            name,
            required: is_field_required(rules.required_rule()),
            error,
            nodes,
        }
    }
}

pub(crate) fn render_uncontrolled<T: FormValues>(
    field: UncontrolledField<T>,
    label: Option<String>,
    layout_class: Option<&'static str>,
) -> View {
    let BoundField {
        name,
        required,
        error,
        nodes,
    } = field.bind();

    render_template(
        TemplateParts {
            name: name.unwrap_or_default(),
            label,
            required: MaybeSignal::Static(required),
            error,
            layout_class,
        },
        render_nodes(nodes),
    )
}

#[component]
/// Field whose inputs register themselves with `form` through the binder.
///
/// Content is a [`FieldNode`] tree; every input, select or custom node with a
/// name (its own or the field's) is registered with `rules`.
pub fn UncontrolledFormField<T: FormValues>(
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] form: Option<FormHandle<T>>,
    #[prop(optional)] rules: FieldRules,
    #[prop(optional, into)] error: Option<MaybeSignal<Option<String>>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] nodes: Vec<FieldNode>,
) -> impl IntoView {
    render_uncontrolled(
        UncontrolledField {
            name,
            form,
            rules,
            error,
            nodes,
        },
        label,
        layout_class,
    )
}
