//! Form field identifiers, select options and field-level errors

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Select,
    Checkbox,
}

/// Every named input of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    QueryType,
    SupportRequest,
    Message,
    Consent,
}

impl Field {
    /// Fields in display order
    pub const ALL: [Field; 7] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::QueryType,
        Field::SupportRequest,
        Field::Message,
        Field::Consent,
    ];

    /// External identifier used by event bindings
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstname",
            Field::LastName => "lastname",
            Field::Email => "email",
            Field::QueryType => "querytype",
            Field::SupportRequest => "supportrequest",
            Field::Message => "message",
            Field::Consent => "consent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name *",
            Field::LastName => "Last Name *",
            Field::Email => "Email Address *",
            Field::QueryType => "Query Type *",
            Field::SupportRequest => "Support Request",
            Field::Message => "Message *",
            Field::Consent => "I consent to being contacted by the team",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::QueryType | Field::SupportRequest => FieldKind::Select,
            Field::Consent => FieldKind::Checkbox,
            _ => FieldKind::Text,
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, Field::Message)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// A closed set of options behind a select field.
///
/// The first entry of `OPTIONS` is the unset placeholder, whose value is `""`.
pub trait SelectOption: Copy + PartialEq + 'static {
    const OPTIONS: &'static [Self];

    /// Whether cycling lands on the placeholder
    const PLACEHOLDER_SELECTABLE: bool = true;

    /// Option value as submitted by the select
    fn value(self) -> &'static str;

    /// Human-readable option text
    fn label(self) -> &'static str;

    fn from_value(value: &str) -> Option<Self> {
        Self::OPTIONS.iter().copied().find(|o| o.value() == value)
    }

    fn is_unset(self) -> bool {
        self.value().is_empty()
    }

    /// Options reachable by cycling
    fn choices() -> Vec<Self> {
        Self::OPTIONS
            .iter()
            .copied()
            .filter(|o| Self::PLACEHOLDER_SELECTABLE || !o.is_unset())
            .collect()
    }

    /// Next option, wrapping around
    fn next(self) -> Self {
        let choices = Self::choices();
        match choices.iter().position(|o| *o == self) {
            Some(idx) => choices[(idx + 1) % choices.len()],
            None => choices[0],
        }
    }

    /// Previous option, wrapping around
    fn prev(self) -> Self {
        let choices = Self::choices();
        match choices.iter().position(|o| *o == self) {
            Some(0) | None => choices[choices.len() - 1],
            Some(idx) => choices[idx - 1],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryType {
    #[default]
    Unset,
    General,
    Feedback,
    Support,
}

impl SelectOption for QueryType {
    const OPTIONS: &'static [Self] = &[
        QueryType::Unset,
        QueryType::General,
        QueryType::Feedback,
        QueryType::Support,
    ];

    fn value(self) -> &'static str {
        match self {
            QueryType::Unset => "",
            QueryType::General => "general",
            QueryType::Feedback => "feedback",
            QueryType::Support => "support",
        }
    }

    fn label(self) -> &'static str {
        match self {
            QueryType::Unset => "Query Type",
            QueryType::General => "General Enquiry",
            QueryType::Feedback => "Feedback",
            QueryType::Support => "Support",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SupportRequest {
    #[default]
    Unset,
    Technical,
    Billing,
    Account,
}

impl SelectOption for SupportRequest {
    // Placeholder is disabled once a request is picked
    const PLACEHOLDER_SELECTABLE: bool = false;

    const OPTIONS: &'static [Self] = &[
        SupportRequest::Unset,
        SupportRequest::Technical,
        SupportRequest::Billing,
        SupportRequest::Account,
    ];

    fn value(self) -> &'static str {
        match self {
            SupportRequest::Unset => "",
            SupportRequest::Technical => "technical",
            SupportRequest::Billing => "billing",
            SupportRequest::Account => "account",
        }
    }

    fn label(self) -> &'static str {
        match self {
            SupportRequest::Unset => "Support Request",
            SupportRequest::Technical => "Technical Support",
            SupportRequest::Billing => "Billing",
            SupportRequest::Account => "Account Issue",
        }
    }
}

/// New value delivered by a change event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    /// Raw text, or the option value for selects
    Text(String),
    /// Checkbox state
    Checked(bool),
}

/// Rejected change events
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown field `{0}`")]
    UnknownField(String),
    #[error("`{value}` is not an option of `{field}`")]
    UnknownOption { field: Field, value: String },
    #[error("field `{field}` does not accept this kind of input")]
    InputMismatch { field: Field },
}

/// Validation failure for a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("First Name is required.")]
    FirstNameRequired,
    #[error("Last Name is required.")]
    LastNameRequired,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please select a Query Type.")]
    QueryTypeRequired,
    #[error("This field is required.")]
    MessageRequired,
    #[error("Consent is required to proceed.")]
    ConsentRequired,
}
