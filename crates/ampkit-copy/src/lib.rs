//! Recursive directory copy primitives for installing skill trees.
#![deny(warnings, clippy::all, clippy::pedantic)]
#![warn(missing_docs)]

pub mod copy;
pub mod error;
