//! Install scope and target directory resolution.

use std::fmt;
use std::path::{Path, PathBuf};

/// Where skills get installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallScope {
    /// `~/.claude/skills/`, visible to every project.
    Global,
    /// `./.claude/skills/`, visible to the current project only.
    Local,
}

impl InstallScope {
    /// All scopes, in prompt order.
    pub const ALL: [Self; 2] = [Self::Global, Self::Local];

    /// Label shown in the location prompt.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Global => "Global (~/.claude/skills/)",
            Self::Local => "Local (./.claude/skills/)",
        }
    }

    /// Hint shown next to the label.
    #[must_use]
    pub fn hint(self) -> &'static str {
        match self {
            Self::Global => "Available in all projects",
            Self::Local => "This project only",
        }
    }

    /// Resolve the directory skills are copied into.
    ///
    /// Both scopes append the same `.claude/skills` suffix; only the prefix
    /// (`home` or `cwd`) differs.
    #[must_use]
    pub fn target_base(self, home: &Path, cwd: &Path) -> PathBuf {
        let prefix = match self {
            Self::Global => home,
            Self::Local => cwd,
        };
        prefix.join(".claude").join("skills")
    }
}

impl fmt::Display for InstallScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Global => "global",
            Self::Local => "local",
        })
    }
}
