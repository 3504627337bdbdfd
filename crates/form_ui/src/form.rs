use form_state::{FieldErrors, FormHandle, FormOptions, FormValues};
use leptos::ev::SubmitEvent;
use leptos::*;

use crate::primitives::merge_layout_class;

/// Adopts `form` when given, otherwise builds a handle from `options`.
pub fn acquire_form<T: FormValues>(
    form: Option<FormHandle<T>>,
    options: Option<FormOptions<T>>,
) -> FormHandle<T> {
    form.unwrap_or_else(|| FormHandle::new(options.unwrap_or_default()))
}

#[component]
/// `<form>` element bound to a [`FormHandle`].
///
/// The handle is handed to `children`, which pass it on to their fields. The
/// browser submission is always prevented; with `on_submit` set, submitting
/// validates every registered field and calls exactly one of `on_submit` and
/// `on_error`.
pub fn Form<T, F, IV>(
    /// Handle owned by the caller; a new one is built from `options` otherwise.
    #[prop(optional)]
    form: Option<FormHandle<T>>,
    #[prop(optional)] options: Option<FormOptions<T>>,
    #[prop(optional)] on_submit: Option<Callback<T>>,
    #[prop(optional)] on_error: Option<Callback<FieldErrors>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: F,
) -> impl IntoView
where
    T: FormValues,
    F: Fn(FormHandle<T>) -> IV + 'static,
    IV: IntoView,
{
    let form = acquire_form(form, options);
    let submit = on_submit.map(|on_submit| form.handle_submit(on_submit, on_error));

    view! {
        <form
            class=merge_layout_class("ui-form", layout_class)
            aria-label=aria_label
            novalidate=true
            data-ui-primitive="true"
            data-ui-kind="form"
            on:submit=move |ev: SubmitEvent| match submit {
                Some(submit) => submit(ev),
                None => ev.prevent_default(),
            }
        >
            {children(form)}
        </form>
    }
}
