//! Cliffhanger Core — shared domain abstractions.
//!
//! This crate defines the fundamental traits and types that the story
//! context, the session store and the API depend on. It contains no
//! infrastructure code beyond the production random source.

pub mod clock;
pub mod command;
pub mod error;
pub mod repository;
pub mod rng;
