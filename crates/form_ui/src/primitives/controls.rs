use super::*;

#[component]
/// Shared button primitive. Defaults to a primary submit button.
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] button_type: ButtonType,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=button_type.token()
            class=merge_layout_class("ui-button", layout_class)
            id=id
            aria-label=aria_label
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Shared text input primitive.
///
/// `on_change` receives the new text on every `input` event. `error` only
/// switches the invalid styling hooks; messages are rendered by the field template.
pub fn Input(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] error: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(optional)] on_blur: Option<Callback<()>>,
) -> impl IntoView {
    let props = NodeProps {
        id,
        name,
        value: Some(value),
        error: Some(error),
        on_change,
        on_blur,
        attrs: Vec::new(),
    };
    render_input(
        layout_class,
        input_type.unwrap_or("text"),
        placeholder,
        disabled,
        props,
    )
}

pub(crate) fn render_input(
    layout_class: Option<&'static str>,
    input_type: &'static str,
    placeholder: Option<String>,
    disabled: MaybeSignal<bool>,
    props: NodeProps,
) -> View {
    let NodeProps {
        id,
        name,
        value,
        error,
        on_change,
        on_blur,
        attrs,
    } = props;
    let value = value.unwrap_or_default();
    let error = error.unwrap_or_default();

    let input = view! {
        <input
            class=merge_layout_class("ui-input", layout_class)
            id=id
            name=name
            type=input_type
            placeholder=placeholder
            prop:value=move || value.get()
            disabled=move || disabled.get()
            aria-invalid=move || bool_token(error.get())
            data-ui-primitive="true"
            data-ui-kind="input"
            data-ui-invalid=move || bool_token(error.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:input=move |ev| {
                if let Some(on_change) = on_change.as_ref() {
                    on_change.call(event_target_value(&ev));
                }
            }
            on:blur=move |_| {
                if let Some(on_blur) = on_blur.as_ref() {
                    on_blur.call(());
                }
            }
        />
    };
    with_attrs(input, attrs).into_view()
}
