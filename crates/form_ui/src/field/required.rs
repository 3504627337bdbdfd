use form_state::RequiredRule;
use leptos::{create_memo, MaybeSignal, Memo, SignalWith};

/// Whether a field should be decorated as required.
///
/// Only used for the label marker; the actual check lives in [`form_state::FieldRules`].
pub fn is_field_required(rule: Option<&RequiredRule>) -> bool {
    rule.is_some_and(RequiredRule::is_enabled)
}

/// Memoized [`is_field_required`]; only notifies when the resolved flag flips.
pub fn use_is_field_required(rule: MaybeSignal<Option<RequiredRule>>) -> Memo<bool> {
    create_memo(move |_| rule.with(|rule| is_field_required(rule.as_ref())))
}
