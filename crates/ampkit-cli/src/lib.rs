//! ampkit CLI library: prompts, configuration, and install orchestration.
#![deny(warnings, clippy::all, clippy::pedantic)]
#![warn(missing_docs)]

/// CLI command implementations.
pub mod commands;
/// Installer configuration resolved from the environment.
pub mod config;
pub mod installer;
pub mod prompt;
pub mod ui;
