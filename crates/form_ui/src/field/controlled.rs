use std::rc::Rc;

use form_state::{Controller, FieldRules, FormHandle, FormValues};
use leptos::*;

use super::{
    required::is_field_required,
    template::{render_template, TemplateParts},
};

/// Render closure of a controlled field.
pub type RenderController = Rc<dyn Fn(Controller) -> View>;

/// Props of a field rendered by the caller from a live [`Controller`].
pub struct ControlledField<T: 'static> {
    /// Field name.
    pub name: String,
    /// Form the field belongs to.
    pub form: FormHandle<T>,
    /// Validation rules.
    pub rules: FieldRules,
    /// Renders the input from the controller.
    pub render: RenderController,
}

impl<T: 'static> ControlledField<T> {
    /// Field `name` of `form`, rendered by `render`.
    pub fn new<IV: IntoView>(
        name: impl Into<String>,
        form: FormHandle<T>,
        render: impl Fn(Controller) -> IV + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            form,
            rules: FieldRules::default(),
            render: Rc::new(move |controller: Controller| render(controller).into_view()),
        }
    }

    /// Sets the rules.
    pub fn rules(mut self, rules: FieldRules) -> Self {
        self.rules = rules;
        self
    }
}

pub(crate) fn render_controlled<T: FormValues>(
    field: ControlledField<T>,
    label: Option<String>,
    layout_class: Option<&'static str>,
) -> View {
    let ControlledField {
        name,
        form,
        rules,
        render,
    } = field;

    let controller = form.controller(&name, &rules);
    let error = controller.field_state.error_message();
    let content = render(controller);

    render_template(
        TemplateParts {
            name,
            label,
            required: MaybeSignal::Static(is_field_required(rules.required_rule())),
            error,
            layout_class,
        },
        content,
    )
}

#[component]
/// Field whose input is rendered by the caller from a live [`Controller`].
///
/// Only this field's value and meta state are subscribed, so changes to other
/// fields do not re-render it.
pub fn ControlledFormField<T, F, IV>(
    #[prop(into)] name: String,
    form: FormHandle<T>,
    #[prop(optional)] rules: FieldRules,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: F,
) -> impl IntoView
where
    T: FormValues,
    F: Fn(Controller) -> IV + 'static,
    IV: IntoView,
{
    render_controlled(ControlledField::new(name, form, children).rules(rules), label, layout_class)
}
