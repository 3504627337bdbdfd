use leptos::*;

use crate::primitives::{bool_token, merge_layout_class};

/// Prefix rendered in the label of a required field.
pub const REQUIRED_MARKER: &str = "*\u{a0}";

/// Placeholder keeping the error row at full height while there is no message.
pub const EMPTY_ERROR_TEXT: &str = "\u{a0}";

/// Text shown in the error row.
pub fn error_slot_text(error: Option<&str>) -> String {
    match error {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => EMPTY_ERROR_TEXT.to_string(),
    }
}

#[component]
/// Label, content and error row shared by every form field.
///
/// The error row is always rendered; a missing message leaves a non-breaking
/// space so the layout does not jump when errors come and go.
pub fn FieldTemplate(
    /// Target of the label's `for` attribute.
    #[prop(optional, into)]
    name: String,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] required: MaybeSignal<bool>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    render_template(
        TemplateParts {
            name,
            label,
            required,
            error: Signal::derive(move || error.get()),
            layout_class,
        },
        children().into_view(),
    )
}

pub(crate) struct TemplateParts {
    pub name: String,
    pub label: Option<String>,
    pub required: MaybeSignal<bool>,
    pub error: Signal<Option<String>>,
    pub layout_class: Option<&'static str>,
}

pub(crate) fn render_template(parts: TemplateParts, content: View) -> View {
    let TemplateParts {
        name,
        label,
        required,
        error,
        layout_class,
    } = parts;
    let label_for = (!name.is_empty()).then_some(name);
    let has_error =
        move || error.with(|error| error.as_deref().is_some_and(|message| !message.is_empty()));

    view! {
        <div
            class=merge_layout_class("ui-form-field", layout_class)
            data-ui-primitive="true"
            data-ui-kind="form-field"
            data-ui-invalid=move || bool_token(has_error())
        >
            <div class="ui-form-field-row">
                <label class="ui-form-field-label" for=label_for>
                    {move || {
                        required
                            .get()
                            .then(|| view! { <span class="ui-form-field-required">{REQUIRED_MARKER}</span> })
                    }}
                    {label}
                </label>
                {content}
            </div>
            <span class="ui-form-field-error" aria-live="polite">
                {move || error.with(|error| error_slot_text(error.as_deref()))}
            </span>
        </div>
    }
    .into_view()
}
