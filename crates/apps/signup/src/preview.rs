use form_ui::{Button, ButtonType, ButtonVariant};
use leptos::*;

use crate::form::{SignupFormData, ADDRESS_LABEL, SURNAME_LABEL, USERNAME_LABEL};

/// Label/value rows shown by the preview, in display order.
pub fn preview_rows(data: &SignupFormData) -> [(&'static str, String); 3] {
    [
        (USERNAME_LABEL, data.username.clone()),
        (SURNAME_LABEL, data.surname.clone()),
        (ADDRESS_LABEL, data.address.clone()),
    ]
}

#[component]
/// Read-only summary of a submitted snapshot with "Go back" and "Confirm" actions.
pub fn SignupPreview(
    data: SignupFormData,
    #[prop(into)] on_go_back: Callback<()>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="signup-preview" data-ui-kind="signup-preview">
            <h2 class="signup-preview-title">"Confirm Your Information"</h2>
            <ul class="signup-preview-list">
                {preview_rows(&data)
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <li class="signup-preview-row">
                                <span class="signup-preview-label">{label}</span>
                                <span class="signup-preview-value">{value}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="signup-preview-actions">
                <Button
                    variant=ButtonVariant::Secondary
                    button_type=ButtonType::Button
                    on_click=Callback::new(move |_| on_go_back.call(()))
                >
                    "Go back"
                </Button>
                <Button
                    button_type=ButtonType::Button
                    on_click=Callback::new(move |_| on_confirm.call(()))
                >
                    "Confirm"
                </Button>
            </div>
        </section>
    }
}
