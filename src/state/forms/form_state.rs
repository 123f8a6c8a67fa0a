//! Contact form values, validation and the form controller

use super::field::{
    Field, FieldError, FieldInput, FieldKind, FormError, QueryType, SelectOption, SupportRequest,
};
use crate::state::SuccessBanner;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tokio::time::{Duration, Instant};

/// Characters that count as whitespace in the email shape check: Unicode
/// space separators, line terminators, BOM. NEL (U+0085) is not included.
const EMAIL_SPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// Permissive `something@something.something` shape check
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let word = format!("[^{EMAIL_SPACE}]+");
    Regex::new(&format!(r"{word}@{word}\.{word}")).expect("Invalid email regex")
});

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Everything the user has entered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub query_type: QueryType,
    pub support_request: SupportRequest,
    pub message: String,
    pub consent: bool,
}

impl FormValues {
    /// Text content of a text field, `None` for selects and the checkbox
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::FirstName => Some(&self.first_name),
            Field::LastName => Some(&self.last_name),
            Field::Email => Some(&self.email),
            Field::Message => Some(&self.message),
            _ => None,
        }
    }

    /// Merge a single field change, leaving every other field untouched
    pub fn apply(&mut self, field: Field, input: FieldInput) -> Result<(), FormError> {
        match (field, input) {
            (Field::Consent, FieldInput::Checked(checked)) => self.consent = checked,
            (_, FieldInput::Checked(_)) | (Field::Consent, FieldInput::Text(_)) => {
                return Err(FormError::InputMismatch { field });
            }
            (Field::QueryType, FieldInput::Text(value)) => {
                self.query_type = QueryType::from_value(&value)
                    .ok_or(FormError::UnknownOption { field, value })?;
            }
            (Field::SupportRequest, FieldInput::Text(value)) => {
                self.support_request = SupportRequest::from_value(&value)
                    .ok_or(FormError::UnknownOption { field, value })?;
            }
            (Field::FirstName, FieldInput::Text(value)) => self.first_name = value,
            (Field::LastName, FieldInput::Text(value)) => self.last_name = value,
            (Field::Email, FieldInput::Text(value)) => self.email = value,
            (Field::Message, FieldInput::Text(value)) => self.message = value,
        }
        Ok(())
    }
}

/// Failing fields from the most recent validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<Field, FieldError>);

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Failing fields in display order
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

/// Run every field rule and collect the failures.
///
/// The support request is optional and never checked.
pub fn validate(values: &FormValues) -> FormErrors {
    let mut errors = BTreeMap::new();
    if values.first_name.is_empty() {
        errors.insert(Field::FirstName, FieldError::FirstNameRequired);
    }
    if values.last_name.is_empty() {
        errors.insert(Field::LastName, FieldError::LastNameRequired);
    }
    if !EMAIL_PATTERN.is_match(&values.email) {
        errors.insert(Field::Email, FieldError::InvalidEmail);
    }
    if values.query_type.is_unset() {
        errors.insert(Field::QueryType, FieldError::QueryTypeRequired);
    }
    if values.message.is_empty() {
        errors.insert(Field::Message, FieldError::MessageRequired);
    }
    if !values.consent {
        errors.insert(Field::Consent, FieldError::ConsentRequired);
    }
    FormErrors(errors)
}

/// Initial, empty form contents
pub fn reset() -> FormValues {
    FormValues::default()
}

fn step<T: SelectOption>(current: T, forward: bool) -> T {
    if forward {
        current.next()
    } else {
        current.prev()
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed; carries the values that were submitted
    Accepted(FormValues),
    /// Validation failed for this many fields
    Rejected(usize),
}

/// Contact form controller: values, errors, banner and focus
#[derive(Debug, Clone)]
pub struct ContactForm {
    values: FormValues,
    errors: FormErrors,
    banner: SuccessBanner,
    banner_duration: Duration,
    /// Focused row: one per field, then the submit button
    pub active_field_index: usize,
}

impl ContactForm {
    /// Focus index of the submit button
    pub const SUBMIT_INDEX: usize = Field::ALL.len();

    pub fn new() -> Self {
        Self::with_banner_duration(SuccessBanner::DEFAULT_DURATION)
    }

    pub fn with_banner_duration(banner_duration: Duration) -> Self {
        Self {
            values: reset(),
            errors: FormErrors::default(),
            banner: SuccessBanner::default(),
            banner_duration,
            active_field_index: 0,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Whether the success banner is showing
    pub fn is_submitted(&self) -> bool {
        self.banner.is_visible()
    }

    /// Focused field, `None` when the submit button is focused
    pub fn focused_field(&self) -> Option<Field> {
        Field::ALL.get(self.active_field_index).copied()
    }

    pub fn is_submit_focused(&self) -> bool {
        self.active_field_index == Self::SUBMIT_INDEX
    }

    /// Apply a change event. Errors are left untouched until the next submit.
    pub fn apply_change(&mut self, field: Field, input: FieldInput) -> Result<(), FormError> {
        self.values.apply(field, input)
    }

    /// Apply a change event addressed by external field name
    #[cfg(test)]
    pub fn apply_named_change(&mut self, name: &str, input: FieldInput) -> Result<(), FormError> {
        let field = name.parse::<Field>()?;
        self.apply_change(field, input)
    }

    /// Append a character to the focused text field
    pub fn input_char(&mut self, c: char) -> Result<(), FormError> {
        let Some(field) = self.focused_field() else {
            return Ok(());
        };
        let Some(current) = self.values.text(field) else {
            return Ok(());
        };
        let mut text = current.to_string();
        text.push(c);
        self.apply_change(field, FieldInput::Text(text))
    }

    /// Remove the last character of the focused text field
    pub fn backspace(&mut self) -> Result<(), FormError> {
        let Some(field) = self.focused_field() else {
            return Ok(());
        };
        let Some(current) = self.values.text(field) else {
            return Ok(());
        };
        let mut text = current.to_string();
        text.pop();
        self.apply_change(field, FieldInput::Text(text))
    }

    /// Step the focused select to its next or previous option
    pub fn cycle_option(&mut self, forward: bool) -> Result<(), FormError> {
        let Some(field) = self.focused_field() else {
            return Ok(());
        };
        let value = match field {
            Field::QueryType => step(self.values.query_type, forward).value(),
            Field::SupportRequest => step(self.values.support_request, forward).value(),
            _ => return Ok(()),
        };
        self.apply_change(field, FieldInput::Text(value.to_string()))
    }

    /// Flip the consent checkbox
    pub fn toggle_consent(&mut self) -> Result<(), FormError> {
        let checked = !self.values.consent;
        self.apply_change(Field::Consent, FieldInput::Checked(checked))
    }

    /// Validate and, if everything passes, show the banner and reset the form.
    ///
    /// On failure only the displayed errors change.
    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        self.errors = validate(&self.values);
        if !self.errors.is_empty() {
            tracing::debug!(
                failing = ?self.errors.fields().map(Field::name).collect::<Vec<_>>(),
                "contact form rejected"
            );
            return SubmitOutcome::Rejected(self.errors.len());
        }

        let submitted = std::mem::replace(&mut self.values, reset());
        self.errors = FormErrors::default();
        self.banner.show(now, self.banner_duration);
        self.active_field_index = 0;
        SubmitOutcome::Accepted(submitted)
    }

    /// Advance the banner timer
    pub fn tick(&mut self, now: Instant) {
        if self.banner.update(now) {
            tracing::debug!("success banner expired");
        }
    }

    pub fn focused_kind(&self) -> Option<FieldKind> {
        self.focused_field().map(Field::kind)
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        Field::ALL.len() + 1 // fields, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_INDEX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tokio_test::{assert_err, assert_ok};

    fn valid_values() -> FormValues {
        FormValues {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            query_type: QueryType::General,
            support_request: SupportRequest::Unset,
            message: "Hello there".to_string(),
            consent: true,
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.values = valid_values();
        form
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_complete_values_pass() {
            assert!(validate(&valid_values()).is_empty());
        }

        #[test]
        fn test_empty_form_fails_every_required_field() {
            let errors = validate(&FormValues::default());
            assert_eq!(
                errors.fields().collect::<Vec<_>>(),
                vec![
                    Field::FirstName,
                    Field::LastName,
                    Field::Email,
                    Field::QueryType,
                    Field::Message,
                    Field::Consent,
                ]
            );
            assert!(errors.get(Field::SupportRequest).is_none());
        }

        #[test]
        fn test_each_missing_field_reports_only_itself() {
            type Clear = fn(&mut FormValues);
            let cases: [(Field, Clear, FieldError); 6] = [
                (
                    Field::FirstName,
                    |v| v.first_name.clear(),
                    FieldError::FirstNameRequired,
                ),
                (
                    Field::LastName,
                    |v| v.last_name.clear(),
                    FieldError::LastNameRequired,
                ),
                (Field::Email, |v| v.email.clear(), FieldError::InvalidEmail),
                (
                    Field::QueryType,
                    |v| v.query_type = QueryType::Unset,
                    FieldError::QueryTypeRequired,
                ),
                (
                    Field::Message,
                    |v| v.message.clear(),
                    FieldError::MessageRequired,
                ),
                (
                    Field::Consent,
                    |v| v.consent = false,
                    FieldError::ConsentRequired,
                ),
            ];

            for (field, clear, expected) in cases {
                let mut values = valid_values();
                clear(&mut values);
                let errors = validate(&values);
                assert_eq!(errors.len(), 1, "{field}");
                assert_eq!(errors.get(field), Some(&expected));
            }
        }

        #[test]
        fn test_email_shapes() {
            let mut values = valid_values();

            values.email = "a@b.c".to_string();
            assert!(validate(&values).get(Field::Email).is_none());

            values.email = "abc".to_string();
            let malformed = validate(&values).get(Field::Email).copied();

            values.email = String::new();
            let missing = validate(&values).get(Field::Email).copied();

            assert_eq!(malformed, Some(FieldError::InvalidEmail));
            assert_eq!(missing, malformed);
        }

        #[test]
        fn test_email_treats_bom_and_nbsp_as_whitespace() {
            let mut values = valid_values();
            for email in ["a@b.\u{FEFF}", "a@b.\u{A0}", "a @b.c", "a@b.\u{3000}"] {
                values.email = email.to_string();
                assert_eq!(
                    validate(&values).get(Field::Email),
                    Some(&FieldError::InvalidEmail),
                    "{email:?}"
                );
            }
        }

        #[test]
        fn test_email_accepts_surrounding_text() {
            let mut values = valid_values();
            values.email = "contact: a@b.c please".to_string();
            assert!(validate(&values).get(Field::Email).is_none());
        }

        #[test]
        fn test_email_without_dot_after_at_fails() {
            let mut values = valid_values();
            values.email = "ada@example".to_string();
            assert!(validate(&values).get(Field::Email).is_some());
        }

        #[test]
        fn test_whitespace_name_counts_as_present() {
            let mut values = valid_values();
            values.first_name = " ".to_string();
            assert!(validate(&values).is_empty());
        }

        #[test]
        fn test_support_request_is_optional() {
            let mut values = valid_values();
            values.query_type = QueryType::Support;
            values.support_request = SupportRequest::Unset;
            assert!(validate(&values).is_empty());
        }
    }

    mod field_changes {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_text_change_preserves_other_fields() {
            let mut form = filled_form();
            assert_ok!(form.apply_change(Field::LastName, FieldInput::Text("Byron".into())));

            let mut expected = valid_values();
            expected.last_name = "Byron".to_string();
            assert_eq!(form.values(), &expected);
        }

        #[test]
        fn test_checkbox_change_only_touches_consent() {
            let mut form = filled_form();
            assert_ok!(form.apply_named_change("consent", FieldInput::Checked(false)));

            let mut expected = valid_values();
            expected.consent = false;
            assert_eq!(form.values(), &expected);
        }

        #[test]
        fn test_select_change_by_option_value() {
            let mut form = ContactForm::new();
            assert_ok!(form.apply_named_change("querytype", FieldInput::Text("support".into())));
            assert_ok!(
                form.apply_named_change("supportrequest", FieldInput::Text("billing".into()))
            );
            assert_eq!(form.values().query_type, QueryType::Support);
            assert_eq!(form.values().support_request, SupportRequest::Billing);
        }

        #[test]
        fn test_unknown_option_leaves_values_unchanged() {
            let mut form = filled_form();
            let err = assert_err!(
                form.apply_change(Field::QueryType, FieldInput::Text("sales".into()))
            );
            assert_eq!(
                err,
                FormError::UnknownOption {
                    field: Field::QueryType,
                    value: "sales".to_string()
                }
            );
            assert_eq!(form.values(), &valid_values());
        }

        #[test]
        fn test_input_kind_mismatch_is_rejected() {
            let mut form = ContactForm::new();
            assert_eq!(
                form.apply_change(Field::Email, FieldInput::Checked(true)),
                Err(FormError::InputMismatch { field: Field::Email })
            );
            assert_eq!(
                form.apply_change(Field::Consent, FieldInput::Text("on".into())),
                Err(FormError::InputMismatch {
                    field: Field::Consent
                })
            );
            assert_eq!(form.values(), &FormValues::default());
        }

        #[test]
        fn test_unknown_field_name_is_rejected() {
            let mut form = ContactForm::new();
            assert_eq!(
                form.apply_named_change("phone", FieldInput::Text("123".into())),
                Err(FormError::UnknownField("phone".to_string()))
            );
        }

        #[test]
        fn test_changes_do_not_revalidate() {
            let mut form = ContactForm::new();
            form.submit(Instant::now());
            assert_ok!(form.apply_change(Field::FirstName, FieldInput::Text("Ada".into())));
            assert!(form.errors().get(Field::FirstName).is_some());
        }

        #[test]
        fn test_typing_into_focused_field() {
            let mut form = ContactForm::new();
            assert_ok!(form.input_char('A'));
            assert_ok!(form.input_char('d'));
            assert_ok!(form.input_char('x'));
            assert_ok!(form.backspace());
            assert_eq!(form.values().first_name, "Ad");
        }

        #[test]
        fn test_typing_on_select_is_ignored() {
            let mut form = ContactForm::new();
            form.set_active_field(3);
            assert_ok!(form.input_char('g'));
            assert_eq!(form.values(), &FormValues::default());
        }

        #[test]
        fn test_cycle_option_on_focused_select() {
            let mut form = ContactForm::new();
            form.set_active_field(3);
            assert_ok!(form.cycle_option(true));
            assert_eq!(form.values().query_type, QueryType::General);
            assert_ok!(form.cycle_option(false));
            assert_ok!(form.cycle_option(false));
            assert_eq!(form.values().query_type, QueryType::Support);

            form.set_active_field(4);
            assert_ok!(form.cycle_option(true));
            assert_eq!(form.values().support_request, SupportRequest::Technical);
        }

        #[test]
        fn test_toggle_consent() {
            let mut form = ContactForm::new();
            assert_ok!(form.toggle_consent());
            assert!(form.values().consent);
            assert_ok!(form.toggle_consent());
            assert!(!form.values().consent);
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_successful_submit_resets_form() {
            let mut form = filled_form();
            form.set_active_field(ContactForm::SUBMIT_INDEX);

            let outcome = form.submit(Instant::now());

            assert_eq!(outcome, SubmitOutcome::Accepted(valid_values()));
            assert_eq!(form.values(), &FormValues::default());
            assert!(form.errors().is_empty());
            assert!(form.is_submitted());
            assert_eq!(form.active_field(), 0);
        }

        #[test]
        fn test_failed_submit_keeps_values_and_status() {
            let mut form = filled_form();
            form.values.email = "abc".to_string();
            let before = form.values().clone();

            let outcome = form.submit(Instant::now());

            assert_eq!(outcome, SubmitOutcome::Rejected(1));
            assert_eq!(form.values(), &before);
            assert!(!form.is_submitted());
            assert_eq!(form.errors().get(Field::Email), Some(&FieldError::InvalidEmail));
        }

        #[test]
        fn test_resubmitting_invalid_form_is_idempotent() {
            let mut form = ContactForm::new();
            let now = Instant::now();

            form.submit(now);
            let first = form.errors().clone();
            form.submit(now);

            assert_eq!(form.errors(), &first);
            assert!(!form.is_submitted());
        }

        #[test]
        fn test_errors_are_replaced_not_merged() {
            let mut form = ContactForm::new();
            form.submit(Instant::now());
            assert_eq!(form.errors().len(), 6);

            form.values = valid_values();
            form.values.message.clear();
            form.submit(Instant::now());

            assert_eq!(form.errors().fields().collect::<Vec<_>>(), vec![Field::Message]);
        }

        #[test]
        fn test_banner_reverts_after_duration_and_not_before() {
            let start = Instant::now();
            let mut form = filled_form();
            form.submit(start);

            form.tick(start + Duration::from_millis(2999));
            assert!(form.is_submitted());

            form.tick(start + Duration::from_millis(3000));
            assert!(!form.is_submitted());
        }

        #[test]
        fn test_second_submit_rearms_banner() {
            let start = Instant::now();
            let mut form = filled_form();
            form.submit(start);

            form.values = valid_values();
            form.submit(start + Duration::from_secs(2));

            form.tick(start + Duration::from_secs(4));
            assert!(form.is_submitted());
            form.tick(start + Duration::from_secs(5));
            assert!(!form.is_submitted());
        }

        #[test]
        fn test_failed_submit_while_banner_visible_keeps_deadline() {
            let start = Instant::now();
            let mut form = filled_form();
            form.submit(start);

            form.submit(start + Duration::from_secs(1));
            assert!(form.is_submitted());
            assert!(!form.errors().is_empty());

            form.tick(start + Duration::from_secs(3));
            assert!(!form.is_submitted());
        }

        #[test]
        fn test_custom_banner_duration() {
            let start = Instant::now();
            let mut form = ContactForm::with_banner_duration(Duration::from_millis(500));
            form.values = valid_values();
            form.submit(start);

            form.tick(start + Duration::from_millis(500));
            assert!(!form.is_submitted());
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_focus_cycles_through_submit_button() {
            let mut form = ContactForm::new();
            assert_eq!(form.focused_field(), Some(Field::FirstName));
            for _ in 0..Field::ALL.len() {
                form.next_field();
            }
            assert!(form.is_submit_focused());
            assert_eq!(form.focused_field(), None);
            form.next_field();
            assert_eq!(form.active_field(), 0);
        }

        #[test]
        fn test_prev_field_wraps_to_submit() {
            let mut form = ContactForm::new();
            form.prev_field();
            assert!(form.is_submit_focused());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = ContactForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field(), ContactForm::SUBMIT_INDEX);
        }
    }
}
