//! Two-phase signup flow: edit the form, then confirm a snapshot of it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::form::SignupFormData;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Current phase of the signup flow.
pub enum WizardPhase {
    /// The form is shown.
    Editing,
    /// The preview of the snapshot taken when the form was submitted is shown.
    Previewing(SignupFormData),
}

impl Default for WizardPhase {
    fn default() -> Self {
        Self::Editing
    }
}

impl WizardPhase {
    fn token(&self) -> &'static str {
        match self {
            Self::Editing => "editing",
            Self::Previewing(_) => "previewing",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_wizard`].
pub enum WizardAction {
    /// The form passed validation with these values.
    Continue(SignupFormData),
    /// Return from the preview to the form.
    GoBack,
    /// Accept the previewed values.
    Confirm,
}

impl WizardAction {
    fn token(&self) -> &'static str {
        match self {
            Self::Continue(_) => "continue",
            Self::GoBack => "go back",
            Self::Confirm => "confirm",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side effects emitted by [`reduce_wizard`] for the UI layer to run.
pub enum WizardEffect {
    /// The user confirmed these values.
    Submitted(SignupFormData),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors for actions that make no sense in the current phase.
pub enum WizardError {
    /// The action is not available in the current phase.
    #[error("cannot {action} while {phase}")]
    InvalidTransition {
        /// Phase the flow was in.
        phase: &'static str,
        /// Rejected action.
        action: &'static str,
    },
}

/// Applies `action` to `phase` and returns the effects to run.
///
/// # Errors
///
/// Returns [`WizardError::InvalidTransition`] when the action is not available in
/// the current phase; `phase` is left unchanged.
pub fn reduce_wizard(
    phase: &mut WizardPhase,
    action: WizardAction,
) -> Result<Vec<WizardEffect>, WizardError> {
    let next = match (&*phase, action) {
        (WizardPhase::Editing, WizardAction::Continue(snapshot)) => {
            WizardPhase::Previewing(snapshot)
        }
        (WizardPhase::Previewing(_), WizardAction::GoBack) => WizardPhase::Editing,
        (WizardPhase::Previewing(snapshot), WizardAction::Confirm) => {
            return Ok(vec![WizardEffect::Submitted(snapshot.clone())]);
        }
        (current, action) => {
            return Err(WizardError::InvalidTransition {
                phase: current.token(),
                action: action.token(),
            });
        }
    };
    *phase = next;
    Ok(Vec::new())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn snapshot() -> SignupFormData {
        SignupFormData {
            username: "Alice".to_string(),
            surname: "O'Brien".to_string(),
            address: "1 Main St".to_string(),
        }
    }

    #[test]
    fn continue_moves_to_preview_with_the_snapshot() {
        let mut phase = WizardPhase::default();

        let effects = reduce_wizard(&mut phase, WizardAction::Continue(snapshot())).expect("continue");

        assert_eq!(phase, WizardPhase::Previewing(snapshot()));
        assert!(effects.is_empty());
    }

    #[test]
    fn go_back_returns_to_editing() {
        let mut phase = WizardPhase::Previewing(snapshot());

        reduce_wizard(&mut phase, WizardAction::GoBack).expect("go back");

        assert_eq!(phase, WizardPhase::Editing);
    }

    #[test]
    fn confirm_emits_the_snapshot_and_stays_in_preview() {
        let mut phase = WizardPhase::Previewing(snapshot());

        let effects = reduce_wizard(&mut phase, WizardAction::Confirm).expect("confirm");

        assert_eq!(effects, vec![WizardEffect::Submitted(snapshot())]);
        assert_eq!(phase, WizardPhase::Previewing(snapshot()));
    }

    #[test]
    fn unavailable_actions_are_rejected_without_changing_phase() {
        let mut editing = WizardPhase::Editing;
        assert_eq!(
            reduce_wizard(&mut editing, WizardAction::Confirm),
            Err(WizardError::InvalidTransition {
                phase: "editing",
                action: "confirm",
            })
        );
        assert_eq!(
            reduce_wizard(&mut editing, WizardAction::GoBack)
                .expect_err("go back")
                .to_string(),
            "cannot go back while editing"
        );
        assert_eq!(editing, WizardPhase::Editing);

        let mut previewing = WizardPhase::Previewing(snapshot());
        assert!(reduce_wizard(&mut previewing, WizardAction::Continue(SignupFormData::default())).is_err());
        assert_eq!(previewing, WizardPhase::Previewing(snapshot()));
    }
}
