//! Wall-clock access for stamping `created_at` on new story sessions.

use chrono::{DateTime, Utc};

/// Source of the current time, injected so session timestamps are testable.
pub trait Clock: Send + Sync {
    /// Returns the current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by `Utc::now`, used by the server binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
