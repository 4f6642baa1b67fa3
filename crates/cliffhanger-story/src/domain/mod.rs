//! Domain layer for the story context.

pub mod aggregates;
pub mod beats;
pub mod choices;
pub mod commands;
pub mod config;
pub mod content;
pub mod scenario;
pub mod template;
