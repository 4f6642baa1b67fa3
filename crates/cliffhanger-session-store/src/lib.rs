//! Cliffhanger session store.
//!
//! Provides [`memory_session_repository::InMemorySessionRepository`], a
//! process-lifetime implementation of the `SessionRepository` trait.

pub mod memory_session_repository;
