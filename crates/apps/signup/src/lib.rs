//! Signup feature: a validated form followed by a confirmation preview.
//!
//! [`SignupFlow`] owns the form handle and the wizard phase. [`SignupApp`] renders
//! the form while editing and the preview of the submitted snapshot afterwards.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod form;
mod preview;
mod validations;
mod wizard;

use form_state::{FormHandle, FormOptions};
use leptos::*;

pub use form::{
    address_rules, signup_fields, surname_rules, username_rules, SignupForm, SignupFormData,
    ADDRESS_FIELD, ADDRESS_LABEL, SURNAME_FIELD, SURNAME_LABEL, USERNAME_FIELD, USERNAME_LABEL,
};
pub use preview::{preview_rows, SignupPreview};
pub use validations::{contains_characters, starts_with_capital};
pub use wizard::{reduce_wizard, WizardAction, WizardEffect, WizardError, WizardPhase};

/// Message shown when the user confirms without a custom handler.
pub const CONFIRMATION_MESSAGE: &str = "form submitted";

#[derive(Clone, Copy)]
/// Reactive state of one signup session.
pub struct SignupFlow {
    /// Form values; kept while moving between form and preview.
    pub form: FormHandle<SignupFormData>,
    /// Current wizard phase.
    pub phase: RwSignal<WizardPhase>,
    on_confirm: Option<Callback<SignupFormData>>,
}

impl SignupFlow {
    /// Fresh session with empty values in the editing phase.
    pub fn new() -> Self {
        Self {
            form: FormHandle::new(FormOptions::with_defaults(SignupFormData::default())),
            phase: create_rw_signal(WizardPhase::default()),
            on_confirm: None,
        }
    }

    /// Hands confirmed values to `on_confirm` instead of the default announcement.
    pub fn with_on_confirm(mut self, on_confirm: Callback<SignupFormData>) -> Self {
        self.on_confirm = Some(on_confirm);
        self
    }

    /// Runs `action` through [`reduce_wizard`] and stores the new phase.
    ///
    /// # Errors
    ///
    /// Returns the reducer error; the phase is left unchanged.
    pub fn dispatch(&self, action: WizardAction) -> Result<Vec<WizardEffect>, WizardError> {
        let current = self.phase.get_untracked();
        let mut next = current.clone();
        let effects = reduce_wizard(&mut next, action)?;
        if next != current {
            self.phase.set(next);
        }
        Ok(effects)
    }

    /// Dispatches `action` and runs its effects; rejected actions are logged.
    pub fn run(&self, action: WizardAction) {
        let effects = self.dispatch(action).unwrap_or_else(|err| {
            logging::warn!("signup wizard: {err}");
            Vec::new()
        });
        for effect in effects {
            match effect {
                WizardEffect::Submitted(data) => match self.on_confirm {
                    Some(on_confirm) => on_confirm.call(data),
                    None => announce_confirmation(&data),
                },
            }
        }
    }

    /// Listener for valid form submissions; opens the preview.
    pub fn on_submit(&self) -> Callback<SignupFormData> {
        let flow = *self;
        Callback::new(move |data| flow.run(WizardAction::Continue(data)))
    }
}

impl Default for SignupFlow {
    fn default() -> Self {
        Self::new()
    }
}

fn announce_confirmation(data: &SignupFormData) {
    logging::log!("signup confirmed for {}", data.username);
    if let Err(err) = window().alert_with_message(CONFIRMATION_MESSAGE) {
        logging::warn!("confirmation alert failed: {err:?}");
    }
}

#[component]
/// Signup form and confirmation preview.
///
/// `on_confirm` receives the confirmed values; without it the confirmation is
/// logged and announced with a browser alert.
pub fn SignupApp(#[prop(optional)] on_confirm: Option<Callback<SignupFormData>>) -> impl IntoView {
    let flow = match on_confirm {
        Some(on_confirm) => SignupFlow::new().with_on_confirm(on_confirm),
        None => SignupFlow::new(),
    };

    view! {
        <main class="signup" data-ui-kind="signup">
            {move || match flow.phase.get() {
                WizardPhase::Editing => view! {
                    <SignupForm form=flow.form on_submit=flow.on_submit() />
                }
                .into_view(),
                WizardPhase::Previewing(data) => view! {
                    <SignupPreview
                        data=data
                        on_go_back=move |_: ()| flow.run(WizardAction::GoBack)
                        on_confirm=move |_: ()| flow.run(WizardAction::Confirm)
                    />
                }
                .into_view(),
            }}
        </main>
    }
}
