//! Trait abstraction for submission handling to enable mocking in tests

use crate::state::FormValues;

/// Receives every submission that passed validation
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink {
    /// Accept the values of a validated submission
    fn accept(&mut self, values: &FormValues);
}
