//! The form handle: value storage, validation, error aggregation, and submission.

use std::{
    collections::{BTreeMap, BTreeSet},
    marker::PhantomData,
};

use leptos::{
    create_memo, create_rw_signal, ev::SubmitEvent, store_value, Callable, Callback, RwSignal,
    Signal, SignalGet, SignalGetUntracked, SignalSet, SignalUpdate, SignalUpdateUntracked,
    SignalWith, SignalWithUntracked, StoredValue,
};
use serde::{Deserialize, Serialize};

use crate::{
    controller::{Controller, ControllerField, FieldState},
    rules::{FieldError, FieldErrors, FieldRules, MANUAL_RULE},
    values::{decode_values, encode_values, FieldValues, FormError, FormValues},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// When fields are validated before the first submit.
pub enum ValidationMode {
    /// Only on submit.
    OnSubmit,
    /// On blur.
    OnBlur,
    /// On every change.
    OnChange,
    /// On first blur, then on every change.
    OnTouched,
    /// On blur and on change.
    All,
}

impl Default for ValidationMode {
    fn default() -> Self {
        Self::OnSubmit
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// When fields are re-validated after the form has been submitted once.
pub enum RevalidateMode {
    /// On every change.
    OnChange,
    /// On blur.
    OnBlur,
    /// Only on the next submit.
    OnSubmit,
}

impl Default for RevalidateMode {
    fn default() -> Self {
        Self::OnChange
    }
}

#[derive(Debug, Clone)]
/// Construction options for [`FormHandle`].
pub struct FormOptions<T> {
    /// Validation strategy before the first submit.
    pub mode: ValidationMode,
    /// Validation strategy after the first submit.
    pub re_validate_mode: RevalidateMode,
    /// Initial values; also the baseline for dirty tracking and [`FormHandle::reset`].
    pub default_values: Option<T>,
}

impl<T> Default for FormOptions<T> {
    fn default() -> Self {
        Self {
            mode: ValidationMode::default(),
            re_validate_mode: RevalidateMode::default(),
            default_values: None,
        }
    }
}

impl<T> FormOptions<T> {
    /// Default options seeded with `default_values`.
    pub fn with_defaults(default_values: T) -> Self {
        Self {
            default_values: Some(default_values),
            ..Self::default()
        }
    }

    /// Replaces the validation mode.
    pub fn mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Replaces the re-validation mode.
    pub fn re_validate_mode(mut self, re_validate_mode: RevalidateMode) -> Self {
        self.re_validate_mode = re_validate_mode;
        self
    }
}

#[derive(Clone)]
/// Bindings an input needs to take part in a form, produced by [`RegisterField::register`].
pub struct FieldRegistration {
    /// Registered field name.
    pub name: String,
    /// Live field value; follows `set_value` and `reset`.
    pub value: Signal<String>,
    /// Pushes a new input value into the form.
    pub on_change: Callback<String>,
    /// Reports that the input lost focus.
    pub on_blur: Callback<()>,
}

/// Imperative registration contract used by uncontrolled fields.
pub trait RegisterField {
    /// Registers `name` with `rules` and returns the bindings for its input.
    ///
    /// Registering an already known name replaces its rules and keeps its value.
    fn register(&self, name: &str, rules: &FieldRules) -> FieldRegistration;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Result of a submit attempt that reached validation.
pub enum SubmitOutcome {
    /// Every registered field passed; the success callback ran.
    Valid,
    /// At least one field failed; the failure callback ran.
    Invalid,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Side effects requested by [`FormHandle::set_value`].
pub struct SetValueOptions {
    /// Validate the field after writing.
    pub should_validate: bool,
    /// Mark the field as touched.
    pub should_touch: bool,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum FieldEvent {
    Change,
    Blur,
}

/// Reactive state for one form instance, keyed by field name.
///
/// The handle is `Copy`; every copy points at the same storage. `T` is the typed
/// record returned by [`FormHandle::get_values`] and handed to submit callbacks.
pub struct FormHandle<T> {
    values: RwSignal<FieldValues>,
    defaults: StoredValue<FieldValues>,
    errors: RwSignal<FieldErrors>,
    touched: RwSignal<BTreeSet<String>>,
    rules: StoredValue<BTreeMap<String, FieldRules>>,
    submit_count: RwSignal<u32>,
    mode: ValidationMode,
    re_validate_mode: RevalidateMode,
    record: PhantomData<fn() -> T>,
}

impl<T> Clone for FormHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FormHandle<T> {}

impl<T: FormValues> FormHandle<T> {
    /// Builds a handle, seeding values from `options.default_values`.
    ///
    /// # Errors
    ///
    /// Returns a [`FormError`] when the default record cannot be flattened.
    pub fn try_new(options: FormOptions<T>) -> Result<Self, FormError> {
        let defaults = match options.default_values.as_ref() {
            Some(record) => encode_values(record)?,
            None => FieldValues::new(),
        };
        Ok(Self::from_parts(
            defaults,
            options.mode,
            options.re_validate_mode,
        ))
    }

    /// Builds a handle; unusable default values are logged and replaced by an empty form.
    pub fn new(options: FormOptions<T>) -> Self {
        let mode = options.mode;
        let re_validate_mode = options.re_validate_mode;
        Self::try_new(options).unwrap_or_else(|err| {
            leptos::logging::warn!("form defaults ignored: {err}");
            Self::from_parts(FieldValues::new(), mode, re_validate_mode)
        })
    }

    fn from_parts(
        defaults: FieldValues,
        mode: ValidationMode,
        re_validate_mode: RevalidateMode,
    ) -> Self {
        Self {
            values: create_rw_signal(defaults.clone()),
            defaults: store_value(defaults),
            errors: create_rw_signal(FieldErrors::new()),
            touched: create_rw_signal(BTreeSet::new()),
            rules: store_value(BTreeMap::new()),
            submit_count: create_rw_signal(0),
            mode,
            re_validate_mode,
            record: PhantomData,
        }
    }

    /// Decodes the current values into `T` without subscribing.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Decode`] when the values do not fit `T`.
    pub fn get_values(&self) -> Result<T, FormError> {
        self.values.with_untracked(decode_values)
    }

    /// Current value of one field without subscribing.
    pub fn get_value(&self, name: &str) -> Option<String> {
        self.values
            .with_untracked(|values| values.get(name).cloned())
    }

    /// All values as a signal.
    pub fn values(&self) -> Signal<FieldValues> {
        self.values.into()
    }

    /// Subscribes to one field's value.
    pub fn watch(&self, name: &str) -> Signal<String> {
        let values = self.values;
        let name = name.to_string();
        create_memo(move |_| values.with(|values| values.get(&name).cloned().unwrap_or_default()))
            .into()
    }

    /// Writes a value from outside an input.
    pub fn set_value(&self, name: &str, value: impl Into<String>, options: SetValueOptions) {
        self.write_value(name, value.into());
        if options.should_touch {
            self.mark_touched(name);
        }
        if options.should_validate {
            self.validate_field(name);
        }
    }

    /// Validation errors keyed by field name.
    pub fn errors(&self) -> Signal<FieldErrors> {
        self.errors.into()
    }

    /// Subscribes to one field's error.
    pub fn error(&self, name: &str) -> Signal<Option<FieldError>> {
        let errors = self.errors;
        let name = name.to_string();
        create_memo(move |_| errors.with(|errors| errors.get(&name).cloned())).into()
    }

    /// Sets a manual error on `name`. It stays until cleared, revalidated, or the next submit.
    pub fn set_error(&self, name: &str, message: impl Into<String>) {
        self.store_error(name, Some(FieldError::new(MANUAL_RULE, message)));
    }

    /// Clears the error of `name`, or every error when `name` is `None`.
    pub fn clear_errors(&self, name: Option<&str>) {
        match name {
            Some(name) => self.store_error(name, None),
            None => self.errors.set(FieldErrors::new()),
        }
    }

    /// Validates one registered field, or all of them when `name` is `None`.
    ///
    /// Returns whether the validated fields are error free.
    pub fn trigger(&self, name: Option<&str>) -> bool {
        match name {
            Some(name) => self.validate_field(name),
            None => self.validate_registered().is_empty(),
        }
    }

    /// Restores the default values and clears errors, touched state, and the submit count.
    pub fn reset(&self) {
        self.values.set(self.defaults.get_value());
        self.errors.set(FieldErrors::new());
        self.touched.set(BTreeSet::new());
        self.submit_count.set(0);
    }

    /// Replaces the default values with `record`, then resets.
    ///
    /// # Errors
    ///
    /// Returns a [`FormError`] when `record` cannot be flattened; the form is left untouched.
    pub fn reset_with(&self, record: &T) -> Result<(), FormError> {
        let defaults = encode_values(record)?;
        self.defaults.set_value(defaults);
        self.reset();
        Ok(())
    }

    /// Whether any value differs from its default.
    pub fn is_dirty(&self) -> bool {
        let defaults = self.defaults.get_value();
        self.values.with_untracked(|values| {
            values
                .iter()
                .any(|(name, value)| {
                    defaults.get(name).map(String::as_str).unwrap_or_default() != value.as_str()
                })
        })
    }

    /// Whether the field has been blurred at least once.
    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.with_untracked(|touched| touched.contains(name))
    }

    /// Number of submit attempts since creation or the last reset.
    pub fn submit_count(&self) -> Signal<u32> {
        self.submit_count.into()
    }

    /// Whether the form has been submitted at least once.
    pub fn is_submitted(&self) -> bool {
        self.submit_count.get_untracked() > 0
    }

    /// Names of every registered field.
    pub fn registered_fields(&self) -> Vec<String> {
        self.rules.with_value(|rules| rules.keys().cloned().collect())
    }

    /// Registers `name` and returns a live, per-field subscription for controlled inputs.
    pub fn controller(&self, name: &str, rules: &FieldRules) -> Controller {
        let registration = self.register(name, rules);
        let errors = self.errors;
        let touched = self.touched;
        let defaults = self.defaults;

        let value = registration.value;
        let error = {
            let name = registration.name.clone();
            create_memo(move |_| errors.with(|errors| errors.get(&name).cloned()))
        };
        let is_touched = {
            let name = registration.name.clone();
            create_memo(move |_| touched.with(|touched| touched.contains(&name)))
        };
        let is_dirty = {
            let name = registration.name.clone();
            create_memo(move |_| {
                let current = value.get();
                defaults.with_value(|defaults| {
                    defaults.get(&name).map(String::as_str).unwrap_or_default() != current
                })
            })
        };
        let invalid = create_memo(move |_| error.with(Option::is_some));

        Controller {
            field: ControllerField {
                name: registration.name,
                value,
                on_change: registration.on_change,
                on_blur: registration.on_blur,
            },
            field_state: FieldState {
                error: error.into(),
                is_touched: is_touched.into(),
                is_dirty: is_dirty.into(),
                invalid: invalid.into(),
            },
        }
    }

    /// Validates every registered field and runs exactly one of the callbacks.
    ///
    /// The error map is replaced with the fresh results, so manual errors do not
    /// survive a submit.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Decode`] when validation passes but the values do not
    /// fit `T`; neither callback runs in that case.
    pub fn submit(
        &self,
        on_valid: impl FnOnce(T),
        on_invalid: impl FnOnce(FieldErrors),
    ) -> Result<SubmitOutcome, FormError> {
        let errors = self.validate_registered();
        self.submit_count.update(|count| *count += 1);

        if errors.is_empty() {
            let record = self.get_values()?;
            on_valid(record);
            Ok(SubmitOutcome::Valid)
        } else {
            on_invalid(errors);
            Ok(SubmitOutcome::Invalid)
        }
    }

    /// [`FormHandle::submit`] with callbacks; what the `<form>` listener runs.
    ///
    /// # Errors
    ///
    /// Returns a [`FormError`] when the values cannot be decoded into `T`.
    pub fn submit_with(
        &self,
        on_valid: Callback<T>,
        on_invalid: Option<Callback<FieldErrors>>,
    ) -> Result<SubmitOutcome, FormError> {
        self.submit(
            |record| on_valid.call(record),
            |errors| {
                if let Some(on_invalid) = on_invalid {
                    on_invalid.call(errors);
                }
            },
        )
    }

    /// Wraps [`FormHandle::submit_with`] as a `<form>` submit listener.
    ///
    /// The browser submission is always prevented.
    pub fn handle_submit(
        &self,
        on_valid: Callback<T>,
        on_invalid: Option<Callback<FieldErrors>>,
    ) -> impl Fn(SubmitEvent) + Copy + 'static {
        let handle = *self;
        move |ev: SubmitEvent| {
            ev.prevent_default();
            if let Err(err) = handle.submit_with(on_valid, on_invalid) {
                leptos::logging::warn!("form submit failed: {err}");
            }
        }
    }

    fn handle_change(&self, name: &str, value: String) {
        self.write_value(name, value);
        if self.should_validate(FieldEvent::Change, name) {
            self.validate_field(name);
        }
    }

    fn handle_blur(&self, name: &str) {
        self.mark_touched(name);
        if self.should_validate(FieldEvent::Blur, name) {
            self.validate_field(name);
        }
    }

    fn write_value(&self, name: &str, value: String) {
        let unchanged = self
            .values
            .with_untracked(|values| values.get(name) == Some(&value));
        if !unchanged {
            self.values.update(|values| {
                values.insert(name.to_string(), value);
            });
        }
    }

    fn mark_touched(&self, name: &str) {
        if !self.is_touched(name) {
            self.touched.update(|touched| {
                touched.insert(name.to_string());
            });
        }
    }

    fn should_validate(&self, event: FieldEvent, name: &str) -> bool {
        if self.is_submitted() {
            return match self.re_validate_mode {
                RevalidateMode::OnChange => event == FieldEvent::Change,
                RevalidateMode::OnBlur => event == FieldEvent::Blur,
                RevalidateMode::OnSubmit => false,
            };
        }

        match self.mode {
            ValidationMode::OnSubmit => false,
            ValidationMode::OnBlur => event == FieldEvent::Blur,
            ValidationMode::OnChange => event == FieldEvent::Change,
            ValidationMode::OnTouched => event == FieldEvent::Blur || self.is_touched(name),
            ValidationMode::All => true,
        }
    }

    fn validate_field(&self, name: &str) -> bool {
        let value = self.get_value(name).unwrap_or_default();
        let error = self
            .rules
            .with_value(|rules| rules.get(name).and_then(|rules| rules.check(&value)));
        let valid = error.is_none();
        self.store_error(name, error);
        valid
    }

    fn validate_registered(&self) -> FieldErrors {
        let errors = self.values.with_untracked(|values| {
            self.rules.with_value(|rules| {
                rules
                    .iter()
                    .filter_map(|(name, rules)| {
                        let value = values.get(name).map(String::as_str).unwrap_or_default();
                        rules.check(value).map(|error| (name.clone(), error))
                    })
                    .collect::<FieldErrors>()
            })
        });
        self.errors.set(errors.clone());
        errors
    }

    fn store_error(&self, name: &str, error: Option<FieldError>) {
        let current = self.errors.with_untracked(|errors| errors.get(name).cloned());
        if current == error {
            return;
        }
        self.errors.update(|errors| match error {
            Some(error) => {
                errors.insert(name.to_string(), error);
            }
            None => {
                errors.remove(name);
            }
        });
    }
}

impl<T: FormValues> RegisterField for FormHandle<T> {
    fn register(&self, name: &str, rules: &FieldRules) -> FieldRegistration {
        self.rules.update_value(|registered| {
            registered.insert(name.to_string(), rules.clone());
        });

        let known = self.values.with_untracked(|values| values.contains_key(name));
        if !known {
            let initial = self
                .defaults
                .with_value(|defaults| defaults.get(name).cloned().unwrap_or_default());
            self.values.update_untracked(|values| {
                values.insert(name.to_string(), initial);
            });
        }

        let handle = *self;
        let change_name = name.to_string();
        let blur_name = name.to_string();
        FieldRegistration {
            name: name.to_string(),
            value: self.watch(name),
            on_change: Callback::new(move |value: String| handle.handle_change(&change_name, value)),
            on_blur: Callback::new(move |_: ()| handle.handle_blur(&blur_name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    use super::*;
    use crate::REQUIRED_RULE;

    #[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
    struct Login {
        user: String,
        password: String,
    }

    fn login_form(options: FormOptions<Login>) -> FormHandle<Login> {
        let form = FormHandle::new(options);
        form.register("user", &FieldRules::new().required("User is required."));
        form.register(
            "password",
            &FieldRules::new().validate("long", |value| {
                if value.len() >= 4 {
                    Ok(())
                } else {
                    Err("Too short.".to_string())
                }
            }),
        );
        form
    }

    fn filled() -> Login {
        Login {
            user: "ada".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn defaults_seed_values() {
        let _ = leptos::create_runtime();
        let form = FormHandle::new(FormOptions::with_defaults(filled()));

        assert_eq!(form.get_value("user").as_deref(), Some("ada"));
        assert_eq!(form.get_values().expect("decode"), filled());
        assert!(!form.is_dirty());
    }

    #[test]
    fn registering_twice_keeps_a_single_entry() {
        let _ = leptos::create_runtime();
        let form = FormHandle::<Login>::new(FormOptions::default());

        let first = form.register("user", &FieldRules::new());
        first.on_change.call("grace".to_string());
        let second = form.register("user", &FieldRules::new().required(true));

        assert_eq!(form.registered_fields(), vec!["user".to_string()]);
        assert_eq!(second.value.get_untracked(), "grace");
    }

    #[test]
    fn change_writes_value_without_validating_before_submit() {
        let _ = leptos::create_runtime();
        let form = login_form(FormOptions::default());
        let registration = form.register("user", &FieldRules::new().required("User is required."));

        registration.on_change.call(String::new());

        assert_eq!(form.get_value("user").as_deref(), Some(""));
        assert!(form.errors().get_untracked().is_empty());
    }

    #[test]
    fn invalid_submit_reports_all_errors_once() {
        let _ = leptos::create_runtime();
        let form = login_form(FormOptions::default());
        let valid_calls = Rc::new(RefCell::new(0));
        let invalid_calls = Rc::new(RefCell::new(Vec::new()));

        let outcome = form
            .submit(
                |_| *valid_calls.borrow_mut() += 1,
                |errors| invalid_calls.borrow_mut().push(errors),
            )
            .expect("submit");

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(*valid_calls.borrow(), 0);
        let calls = invalid_calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].get("user").map(|err| err.rule.as_str()), Some(REQUIRED_RULE));
        assert_eq!(calls[0].get("password").map(|err| err.message.as_str()), Some("Too short."));
        assert_eq!(form.errors().get_untracked(), calls[0]);
        assert!(form.is_submitted());
    }

    #[test]
    fn submit_with_routes_to_the_matching_callback() {
        let _ = leptos::create_runtime();
        let form = login_form(FormOptions::default());
        let received = Rc::new(RefCell::new(Vec::new()));
        let failures = Rc::new(RefCell::new(0));
        let on_valid = {
            let received = Rc::clone(&received);
            Callback::new(move |record: Login| received.borrow_mut().push(record))
        };
        let on_invalid = {
            let failures = Rc::clone(&failures);
            Callback::new(move |_: FieldErrors| *failures.borrow_mut() += 1)
        };

        let first = form.submit_with(on_valid, Some(on_invalid)).expect("submit");
        form.set_value("user", "ada", SetValueOptions::default());
        form.set_value("password", "secret", SetValueOptions::default());
        let second = form.submit_with(on_valid, None).expect("submit");

        assert_eq!((first, second), (SubmitOutcome::Invalid, SubmitOutcome::Valid));
        assert_eq!(*failures.borrow(), 1);
        assert_eq!(
            *received.borrow(),
            vec![Login {
                user: "ada".to_string(),
                password: "secret".to_string(),
            }]
        );
    }

    #[test]
    fn registration_value_follows_reset_with() {
        let _ = leptos::create_runtime();
        let form = FormHandle::<Login>::new(FormOptions::default());
        let registration = form.register("user", &FieldRules::new());

        form.reset_with(&Login {
            user: "grace".to_string(),
            password: String::new(),
        })
        .expect("reset");

        assert_eq!(registration.value.get_untracked(), "grace");
    }

    #[test]
    fn valid_submit_hands_over_the_record() {
        let _ = leptos::create_runtime();
        let form = login_form(FormOptions::with_defaults(filled()));
        let received = Rc::new(RefCell::new(None));

        let outcome = form
            .submit(
                |record| *received.borrow_mut() = Some(record),
                |_| panic!("no errors expected"),
            )
            .expect("submit");

        assert_eq!(outcome, SubmitOutcome::Valid);
        assert_eq!(received.borrow().clone(), Some(filled()));
    }

    #[test]
    fn change_after_failed_submit_revalidates_the_field() {
        let _ = leptos::create_runtime();
        let form = login_form(FormOptions::default());
        let user = form.register("user", &FieldRules::new().required("User is required."));
        let _ = form.submit(|_| {}, |_| {}).expect("submit");
        assert!(form.error("user").get_untracked().is_some());

        user.on_change.call("ada".to_string());

        assert_eq!(form.error("user").get_untracked(), None);
        assert!(form.error("password").get_untracked().is_some());
    }

    #[test]
    fn blur_mode_validates_on_blur_only() {
        let _ = leptos::create_runtime();
        let form = login_form(FormOptions::default().mode(ValidationMode::OnBlur));
        let password = form.controller("password", &FieldRules::new().validate("long", |value| {
            if value.len() >= 4 {
                Ok(())
            } else {
                Err("Too short.".to_string())
            }
        }));

        password.field.on_change.call("ab".to_string());
        assert!(!password.field_state.invalid.get_untracked());

        password.field.on_blur.call(());
        assert!(password.field_state.invalid.get_untracked());
        assert!(password.field_state.is_touched.get_untracked());
    }

    #[test]
    fn controller_tracks_value_and_dirty_state() {
        let _ = leptos::create_runtime();
        let form = login_form(FormOptions::with_defaults(filled()));
        let user = form.controller("user", &FieldRules::new());

        assert_eq!(user.field.value.get_untracked(), "ada");
        assert!(!user.field_state.is_dirty.get_untracked());

        user.field.on_change.call("grace".to_string());

        assert_eq!(user.field.value.get_untracked(), "grace");
        assert!(user.field_state.is_dirty.get_untracked());
        assert!(form.is_dirty());
    }

    #[test]
    fn manual_errors_are_replaced_by_submit() {
        let _ = leptos::create_runtime();
        let form = login_form(FormOptions::with_defaults(filled()));

        form.set_error("user", "Taken.");
        assert_eq!(
            form.error("user").get_untracked().map(|err| err.rule),
            Some(MANUAL_RULE.to_string())
        );

        let outcome = form.submit(|_| {}, |_| {}).expect("submit");
        assert_eq!(outcome, SubmitOutcome::Valid);
        assert!(form.errors().get_untracked().is_empty());
    }

    #[test]
    fn clear_errors_targets_one_or_all_fields() {
        let _ = leptos::create_runtime();
        let form = login_form(FormOptions::default());
        let _ = form.submit(|_| {}, |_| {}).expect("submit");

        form.clear_errors(Some("user"));
        assert_eq!(
            form.errors().get_untracked().keys().cloned().collect::<Vec<_>>(),
            vec!["password".to_string()]
        );

        form.clear_errors(None);
        assert!(form.errors().get_untracked().is_empty());
    }

    #[test]
    fn trigger_validates_without_submitting() {
        let _ = leptos::create_runtime();
        let form = login_form(FormOptions::default());

        assert!(!form.trigger(Some("user")));
        assert!(!form.trigger(None));
        assert!(!form.is_submitted());
    }

    #[test]
    fn reset_restores_defaults_and_clears_state() {
        let _ = leptos::create_runtime();
        let form = login_form(FormOptions::with_defaults(filled()));
        form.set_value(
            "user",
            "",
            SetValueOptions {
                should_validate: true,
                should_touch: true,
            },
        );
        assert!(form.error("user").get_untracked().is_some());
        assert!(form.is_touched("user"));

        form.reset();

        assert_eq!(form.get_values().expect("decode"), filled());
        assert!(form.errors().get_untracked().is_empty());
        assert!(!form.is_touched("user"));
        assert_eq!(form.submit_count().get_untracked(), 0);
    }

    #[test]
    fn reset_with_moves_the_dirty_baseline() {
        let _ = leptos::create_runtime();
        let form = login_form(FormOptions::default());
        form.reset_with(&filled()).expect("reset");

        assert_eq!(form.get_value("password").as_deref(), Some("secret"));
        assert!(!form.is_dirty());
    }

    #[test]
    fn watch_follows_one_field() {
        let _ = leptos::create_runtime();
        let form = login_form(FormOptions::default());
        let user = form.watch("user");

        form.set_value("user", "ada", SetValueOptions::default());

        assert_eq!(user.get_untracked(), "ada");
    }

    #[test]
    fn submit_reports_undecodable_values() {
        #[derive(Debug, Serialize, Deserialize)]
        struct Counter {
            count: u32,
        }

        let _ = leptos::create_runtime();
        let form = FormHandle::<Counter>::new(FormOptions::with_defaults(Counter { count: 2 }));
        let err = form
            .submit(|_| panic!("not decodable"), |_| panic!("no rules registered"))
            .expect_err("decode");

        assert!(matches!(err, FormError::Decode(_)));
    }
}
