//! Copies selected skills from the source root into the install target.

use std::path::{Path, PathBuf};

use ampkit_copy::copy::replace_dir;
use ampkit_copy::error::CopyError;
use ampkit_core::catalog::Skill;
use ampkit_core::types::{SkillId, ValidationError};
use log::{debug, info};
use thiserror::Error;

/// Errors that can occur while installing skills.
#[derive(Debug, Error)]
pub enum InstallError {
    /// A catalog identifier is not a valid directory name.
    #[error("invalid skill id: {0}")]
    Validation(#[from] ValidationError),
    /// The skill's source directory does not exist.
    #[error("source for skill '{skill}' not found at {}", path.display())]
    MissingSource {
        /// Skill identifier.
        skill: SkillId,
        /// Expected source directory.
        path:  PathBuf,
    },
    /// Copying the skill tree failed.
    #[error("failed to install skill '{skill}': {source}")]
    Copy {
        /// Skill identifier.
        skill:  SkillId,
        /// Underlying copy error.
        source: CopyError,
    },
}

/// Progress notifications emitted before each skill is copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallEvent<'a> {
    /// The skill is being installed for the first time.
    Installing(&'a Skill),
    /// An existing copy of the skill is being replaced.
    Overwriting(&'a Skill),
}

/// One installed skill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledSkill {
    /// Skill identifier.
    pub id:       SkillId,
    /// Directory the skill now lives in.
    pub path:     PathBuf,
    /// Whether an earlier copy was replaced.
    pub replaced: bool,
    /// Number of files copied.
    pub files:    u64,
}

/// Result of a completed install run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    /// Directory the skills were installed under.
    pub target_base: PathBuf,
    /// Installed skills, in install order.
    pub installed:   Vec<InstalledSkill>,
}

/// Copies skill trees from a source root into a target base directory.
pub struct Installer {
    source_root: PathBuf,
    target_base: PathBuf,
}

impl Installer {
    /// Create a new `Installer`.
    ///
    /// # Arguments
    ///
    /// * `source_root` - Directory holding one `<id>/` tree per skill.
    /// * `target_base` - Directory skills are installed under
    ///   (e.g. `~/.claude/skills`).
    pub fn new(source_root: PathBuf, target_base: PathBuf) -> Self {
        Self {
            source_root,
            target_base,
        }
    }

    /// Directory skills are installed under.
    #[must_use]
    pub fn target_base(&self) -> &Path {
        &self.target_base
    }

    /// Install `skills` one at a time, in the order given.
    ///
    /// Each skill's source tree replaces `<target_base>/<id>` entirely.
    /// `on_event` is called before each copy starts.
    ///
    /// # Errors
    ///
    /// Returns [`InstallError`] on the first skill that fails; skills
    /// installed before it are left in place.
    pub fn install<F>(&self, skills: &[&Skill], mut on_event: F) -> Result<InstallReport, InstallError>
    where
        F: FnMut(InstallEvent<'_>),
    {
        info!(
            "installing {} skill(s) into {}",
            skills.len(),
            self.target_base.display()
        );

        let mut installed = Vec::with_capacity(skills.len());
        for &skill in skills {
            let id = skill.skill_id()?;
            let source = self.source_root.join(&id);
            if !source.is_dir() {
                return Err(InstallError::MissingSource { skill: id, path: source });
            }

            let target = self.target_base.join(&id);
            let replaced = target.exists();
            if replaced {
                debug!("{id} already present at {}", target.display());
                on_event(InstallEvent::Overwriting(skill));
            } else {
                on_event(InstallEvent::Installing(skill));
            }

            let files = match replace_dir(&source, &target) {
                Ok(files) => files,
                Err(source) => return Err(InstallError::Copy { skill: id, source }),
            };
            info!("installed {id} to {} ({files} files)", target.display());

            installed.push(InstalledSkill {
                id,
                path: target,
                replaced,
                files,
            });
        }

        Ok(InstallReport {
            target_base: self.target_base.clone(),
            installed,
        })
    }
}
