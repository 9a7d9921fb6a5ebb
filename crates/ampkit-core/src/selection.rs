//! Turning a prompt answer into the ordered list of skills to install.

use std::collections::HashSet;

use thiserror::Error;

use crate::catalog::{catalog, Skill};

/// Identifier that stands for every catalog entry.
pub const ALL_ID: &str = "all";

/// Error returned when a selection cannot be resolved against the catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// Nothing was selected.
    #[error("at least one skill must be selected")]
    Empty,
    /// A selected identifier is not in the catalog.
    #[error("unknown skill '{0}'")]
    UnknownSkill(String),
}

/// What the user asked to install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every catalog entry.
    All,
    /// The listed identifiers; [`ALL_ID`] among them means [`Selection::All`].
    Skills(Vec<String>),
}

impl Selection {
    /// Resolve the selection to catalog entries.
    ///
    /// The result is in catalog order with each skill appearing once,
    /// regardless of the order or repetition of the input. A subset that
    /// contains [`ALL_ID`] resolves like [`Selection::All`].
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::Empty`] for an empty subset and
    /// [`SelectionError::UnknownSkill`] for an identifier not in the catalog.
    pub fn resolve(&self) -> Result<Vec<&'static Skill>, SelectionError> {
        let ids = match self {
            Self::Skills(ids) if !ids.iter().any(|id| id == ALL_ID) => ids,
            _ => return Ok(catalog().iter().collect()),
        };
        if ids.is_empty() {
            return Err(SelectionError::Empty);
        }

        let mut wanted = HashSet::new();
        for id in ids {
            if !catalog().iter().any(|s| s.id == id.as_str()) {
                return Err(SelectionError::UnknownSkill(id.clone()));
            }
            wanted.insert(id.as_str());
        }

        Ok(catalog().iter().filter(|s| wanted.contains(s.id)).collect())
    }
}
