//! Log-only submission sink

use super::traits::SubmissionSink;
use crate::state::{FormValues, SelectOption};

/// Records accepted submissions as `tracing` debug events.
///
/// Names and email address are left out of the event. The default log
/// filter is `info`, so nothing reaches stderr while the form is on screen.
#[derive(Debug, Default)]
pub struct TracingSink {
    accepted: usize,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of submissions accepted so far
    #[cfg(test)]
    pub fn accepted(&self) -> usize {
        self.accepted
    }
}

impl SubmissionSink for TracingSink {
    fn accept(&mut self, values: &FormValues) {
        self.accepted += 1;
        tracing::debug!(
            query_type = values.query_type.value(),
            support_request = values.support_request.value(),
            consent = values.consent,
            message_len = values.message.chars().count(),
            total = self.accepted,
            "contact form submitted"
        );
    }
}
