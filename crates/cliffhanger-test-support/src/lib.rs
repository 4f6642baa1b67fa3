//! Shared test mocks and utilities for the Cliffhanger story service.

mod clock;
mod repository;
mod rng;

pub use clock::FixedClock;
pub use repository::{
    ConflictingSessionRepository, EmptySessionRepository, FailingSessionRepository,
    RecordingSessionRepository,
};
pub use rng::{MockRng, SequenceRng};
