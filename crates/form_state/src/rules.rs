//! Per-field validation rules and the errors they produce.

use std::{collections::BTreeMap, fmt, rc::Rc};

use serde::{Deserialize, Serialize};

/// Rule name recorded on errors raised by the `required` check.
pub const REQUIRED_RULE: &str = "required";

/// Rule name recorded on errors set through [`crate::FormHandle::set_error`].
pub const MANUAL_RULE: &str = "manual";

/// Custom validator: `Ok(())` accepts the value, `Err(message)` rejects it.
pub type ValidateFn = Rc<dyn Fn(&str) -> Result<(), String>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// The `required` part of a field's rules.
pub enum RequiredRule {
    /// Plain on/off switch with an empty error message.
    Flag(bool),
    /// Required, reporting the given message when the value is empty.
    Message(String),
    /// Explicit switch plus message.
    Detailed {
        /// Whether the field is required.
        value: bool,
        /// Message reported when the value is empty.
        message: String,
    },
}

impl RequiredRule {
    /// Returns whether this rule actually demands a value.
    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Flag(value) => *value,
            Self::Message(_) => true,
            Self::Detailed { value, .. } => *value,
        }
    }

    /// Message reported when the rule fails.
    pub fn message(&self) -> &str {
        match self {
            Self::Flag(_) => "",
            Self::Message(message) | Self::Detailed { message, .. } => message,
        }
    }
}

impl From<bool> for RequiredRule {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for RequiredRule {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

impl From<String> for RequiredRule {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A single field's validation failure.
pub struct FieldError {
    /// Name of the rule that failed (`"required"`, a validator name, or `"manual"`).
    pub rule: String,
    /// Human-readable message shown next to the field.
    pub message: String,
}

impl FieldError {
    /// Builds an error for `rule` with `message`.
    pub fn new(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            message: message.into(),
        }
    }
}

/// Validation errors keyed by field name.
pub type FieldErrors = BTreeMap<String, FieldError>;

/// Validation configuration attached to one field at registration time.
#[derive(Clone, Default)]
pub struct FieldRules {
    required: Option<RequiredRule>,
    validators: Vec<(String, ValidateFn)>,
}

impl fmt::Debug for FieldRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRules")
            .field("required", &self.required)
            .field("validators", &self.validator_names().collect::<Vec<_>>())
            .finish()
    }
}

impl FieldRules {
    /// Empty rule set: nothing is required, nothing is checked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `required` rule.
    pub fn required(mut self, rule: impl Into<RequiredRule>) -> Self {
        self.required = Some(rule.into());
        self
    }

    /// Adds a named validator. A validator with the same name is replaced in place.
    pub fn validate(
        mut self,
        name: impl Into<String>,
        check: impl Fn(&str) -> Result<(), String> + 'static,
    ) -> Self {
        let name = name.into();
        let check: ValidateFn = Rc::new(check);
        match self.validators.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = check,
            None => self.validators.push((name, check)),
        }
        self
    }

    /// The configured `required` rule, if any.
    pub fn required_rule(&self) -> Option<&RequiredRule> {
        self.required.as_ref()
    }

    /// Validator names in evaluation order.
    pub fn validator_names(&self) -> impl Iterator<Item = &str> {
        self.validators.iter().map(|(name, _)| name.as_str())
    }

    /// Runs the rules against `value` and returns the first failure.
    ///
    /// The `required` rule only rejects the empty string. Validators run in
    /// insertion order, including on empty values.
    pub fn check(&self, value: &str) -> Option<FieldError> {
        if let Some(required) = self.required.as_ref() {
            if required.is_enabled() && value.is_empty() {
                return Some(FieldError::new(REQUIRED_RULE, required.message()));
            }
        }

        self.validators.iter().find_map(|(name, check)| {
            check(value)
                .err()
                .map(|message| FieldError::new(name.clone(), message))
        })
    }
}
