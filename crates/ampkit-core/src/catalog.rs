//! The fixed catalog of installable skills.

use crate::types::{SkillId, ValidationError};

/// A skill that can be installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    /// Unique identifier; also the directory name at source and target.
    pub id:          &'static str,
    /// Label shown in the selection prompt.
    pub label:       &'static str,
    /// Short description shown as the prompt hint.
    pub description: &'static str,
    /// Slash command the skill exposes once installed.
    pub usage:       &'static str,
    /// One-line summary of the slash command.
    pub summary:     &'static str,
}

impl Skill {
    /// Return the identifier as a validated [`SkillId`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the identifier is not a valid slug.
    pub fn skill_id(&self) -> Result<SkillId, ValidationError> {
        SkillId::new(self.id)
    }
}

const CATALOG: &[Skill] = &[
    Skill {
        id:          "amp-docs",
        label:       "amp:docs",
        description: "Enhanced documentation with Mermaid diagrams",
        usage:       "/amp:docs [topic]",
        summary:     "Generate documentation",
    },
    Skill {
        id:          "amp-plan",
        label:       "amp:plan",
        description: "Auto-generate PRD, PLAN, PROGRESS, PIVOTS",
        usage:       "/amp:plan [name]",
        summary:     "Start brainstorming/planning",
    },
    Skill {
        id:          "amp-track",
        label:       "amp:track",
        description: "Lightweight PM via PROJECT.md",
        usage:       "/amp:track [action]",
        summary:     "Manage project board",
    },
];

/// Return every installable skill, in catalog order.
#[must_use]
pub fn catalog() -> &'static [Skill] {
    CATALOG
}

/// Look up a catalog entry by identifier.
#[must_use]
pub fn find(id: &str) -> Option<&'static Skill> {
    CATALOG.iter().find(|s| s.id == id)
}
