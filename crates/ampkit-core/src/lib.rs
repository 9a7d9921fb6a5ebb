//! Core domain types for the ampkit skill installer.
#![deny(warnings, clippy::all, clippy::pedantic)]
#![warn(missing_docs)]

pub mod catalog;
pub mod scope;
pub mod selection;
pub mod types;
