//! Skill identifiers that are safe to use as directory names.

use std::fmt;

use thiserror::Error;

/// Longest identifier accepted as a skill directory name.
const MAX_ID_LEN: usize = 64;

/// Why a string was refused as a skill identifier.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The identifier is empty.
    #[error("skill identifier must not be empty")]
    Empty,
    /// The identifier is longer than a skill directory name may be.
    #[error("skill identifier is {got} characters long; the limit is {max}")]
    TooLong {
        /// Longest accepted identifier.
        max: usize,
        /// Length of the refused identifier.
        got: usize,
    },
    /// The identifier has a character that could not appear in a skill
    /// directory name (path separators, dots, uppercase, whitespace).
    #[error("skill identifier may only use lowercase letters, digits and '-'")]
    InvalidCharacters,
}

/// A validated skill identifier (lowercase alphanumeric + hyphens, 1–64 chars).
///
/// Identifiers double as directory names under the install target, so the
/// character set rules out separators and `..`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SkillId(String);

impl SkillId {
    /// Accept `id` as the name of a skill directory.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when `id` could not serve as a single
    /// directory name under the install target.
    pub fn new(id: &str) -> Result<Self, ValidationError> {
        let is_slug_char = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-';
        match id.len() {
            0 => Err(ValidationError::Empty),
            len if len > MAX_ID_LEN => Err(ValidationError::TooLong {
                max: MAX_ID_LEN,
                got: len,
            }),
            _ if !id.chars().all(is_slug_char) => Err(ValidationError::InvalidCharacters),
            _ => Ok(Self(id.to_owned())),
        }
    }

    /// The identifier, which is also the skill's directory name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<std::path::Path> for SkillId {
    fn as_ref(&self) -> &std::path::Path {
        std::path::Path::new(&self.0)
    }
}
