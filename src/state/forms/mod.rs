//! Form domain layer
//!
//! Values, validation rules and the controller behind the contact form.
//! Rendering lives in `ui::forms`.

mod field;
mod form_state;

pub use field::{Field, FieldError, FieldKind, SelectOption};
pub use form_state::{ContactForm, Form, FormValues, SubmitOutcome};

#[cfg(test)]
pub use field::{FieldInput, QueryType};
