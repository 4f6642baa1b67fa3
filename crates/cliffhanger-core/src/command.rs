//! Requests that change story state, such as starting a story or making a choice.

use uuid::Uuid;

/// A state-changing request handled by the story context.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Stable name logged with every handled command, e.g. `story.start_story`.
    fn command_type(&self) -> &'static str;

    /// Per-request id that ties the handler's log lines together.
    fn correlation_id(&self) -> Uuid;
}
