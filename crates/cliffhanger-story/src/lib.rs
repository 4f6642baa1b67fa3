//! Cliffhanger — story generation bounded context.
//!
//! Responsible for the content tables, opening scenarios, story beats,
//! choice sets and the story session lifecycle.

pub mod application;
pub mod domain;
