//! Where accepted submissions go
//!
//! Submissions stay local: the default sink only records a structured log
//! event. Nothing is persisted or sent anywhere.

mod sink;
mod traits;

pub use sink::TracingSink;
pub use traits::SubmissionSink;

#[cfg(test)]
pub use traits::MockSubmissionSink;
