//! Signup form: record type, field rules and the form view.

use form_ui::prelude::*;
use leptos::*;
use serde::{Deserialize, Serialize};

use crate::validations::{contains_characters, starts_with_capital};

/// Field name of the username.
pub const USERNAME_FIELD: &str = "username";
/// Field name of the surname.
pub const SURNAME_FIELD: &str = "surname";
/// Field name of the address.
pub const ADDRESS_FIELD: &str = "address";

/// Label of the username field and preview row.
pub const USERNAME_LABEL: &str = "Username:";
/// Label of the surname field and preview row.
pub const SURNAME_LABEL: &str = "Surname:";
/// Label of the address field and preview row.
pub const ADDRESS_LABEL: &str = "Address:";

const CAPITAL_MESSAGE: &str = "Should start with capital letter.";
const SURNAME_MESSAGE: &str = "Please input a valid surname.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Values collected by the signup form.
pub struct SignupFormData {
    /// Username; must start with an uppercase letter.
    pub username: String,
    /// Surname; letters, apostrophes, hyphens and spaces, starting uppercase.
    pub surname: String,
    /// Postal address.
    pub address: String,
}

/// Rules of the username field.
pub fn username_rules() -> FieldRules {
    FieldRules::new()
        .required("Please input your username!")
        .validate("startsWithCapital", |value| {
            starts_with_capital(value, CAPITAL_MESSAGE)
        })
}

/// Rules of the surname field.
pub fn surname_rules() -> FieldRules {
    FieldRules::new()
        .required("Please input your surname!")
        .validate("startsWithCapital", |value| {
            starts_with_capital(value, CAPITAL_MESSAGE)
        })
        .validate("containsCharacters", |value| {
            contains_characters(value, SURNAME_MESSAGE)
        })
}

/// Rules of the address field.
pub fn address_rules() -> FieldRules {
    FieldRules::new().required("Please input your address!")
}

/// The three input fields with their labels, bound to `form`.
pub fn signup_fields(
    form: FormHandle<SignupFormData>,
) -> [(&'static str, UncontrolledField<SignupFormData>); 3] {
    let field = |name: &'static str, rules: FieldRules| {
        UncontrolledField::new()
            .name(name)
            .form(form)
            .rules(rules)
            .node(InputNode::new())
    };
    [
        (USERNAME_LABEL, field(USERNAME_FIELD, username_rules())),
        (SURNAME_LABEL, field(SURNAME_FIELD, surname_rules())),
        (ADDRESS_LABEL, field(ADDRESS_FIELD, address_rules())),
    ]
}

fn submit_node() -> CustomNode {
    CustomNode::new("submit", |_, _| {
        view! { <Button layout_class="signup-submit">"Submit"</Button> }.into_view()
    })
}

#[component]
/// Signup form; `on_submit` receives the values once every field is valid.
pub fn SignupForm(
    form: FormHandle<SignupFormData>,
    #[prop(into)] on_submit: Callback<SignupFormData>,
) -> impl IntoView {
    view! {
        <Form form=form on_submit=on_submit layout_class="signup-form" let:handle>
            {signup_fields(handle)
                .into_iter()
                .map(|(label, field)| {
                    view! { <FormField label=label mode=FieldMode::Uncontrolled(field) /> }
                })
                .collect_view()}
            <FormField mode=FieldMode::Uncontrolled(UncontrolledField::new().form(handle).node(submit_node())) />
        </Form>
    }
}
