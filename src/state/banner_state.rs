//! Success banner timer

use tokio::time::{Duration, Instant};

/// Single-shot timer behind the success banner.
///
/// The banner is visible while a deadline is armed. Arming it again replaces
/// the previous deadline.
#[derive(Debug, Clone, Default)]
pub struct SuccessBanner {
    deadline: Option<Instant>,
}

impl SuccessBanner {
    /// How long the banner stays up after a successful submit
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

    /// Banner text
    pub const MESSAGE: &'static str = "Form submitted successfully!";

    /// Show the banner until `now + duration`
    pub fn show(&mut self, now: Instant, duration: Duration) {
        self.deadline = Some(now + duration);
    }

    pub fn is_visible(&self) -> bool {
        self.deadline.is_some()
    }

    /// Hide the banner once its deadline has passed.
    /// Returns true if it was hidden by this call.
    pub fn update(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
