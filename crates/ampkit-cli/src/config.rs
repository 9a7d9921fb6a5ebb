//! Installer configuration: where skill sources live and where they go.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use ampkit_core::scope::InstallScope;
use thiserror::Error;

/// Environment variable overriding the skill source root.
pub const SKILLS_DIR_ENV: &str = "AMPKIT_SKILLS_DIR";

/// Errors during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No home directory could be determined for a global install.
    #[error("could not determine the home directory for a global install")]
    NoHomeDir,
    /// The current working directory is unavailable.
    #[error("cannot read the current working directory: {0}")]
    CurrentDir(#[from] std::io::Error),
}

/// Runtime configuration for one installer run.
#[derive(Debug, Clone)]
pub struct InstallerConfig {
    /// Directory holding one `<id>/` subdirectory per catalog skill.
    pub skills_source: PathBuf,
    /// Home directory, prefix of the global scope.
    pub home:          Option<PathBuf>,
    /// Working directory, prefix of the local scope.
    pub cwd:           PathBuf,
}

impl InstallerConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CurrentDir`] if the working directory cannot be
    /// read.
    pub fn from_env() -> Result<Self, ConfigError> {
        let exe_dir = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        Ok(Self {
            skills_source: resolve_skills_source(env::var_os(SKILLS_DIR_ENV), exe_dir.as_deref()),
            home:          dirs::home_dir(),
            cwd:           env::current_dir()?,
        })
    }

    /// Directory the skills are copied into for `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoHomeDir`] for [`InstallScope::Global`] when no
    /// home directory is known.
    pub fn target_base(&self, scope: InstallScope) -> Result<PathBuf, ConfigError> {
        match scope {
            InstallScope::Global => {
                let home = self.home.as_deref().ok_or(ConfigError::NoHomeDir)?;
                Ok(scope.target_base(home, &self.cwd))
            }
            InstallScope::Local => Ok(scope.target_base(&self.cwd, &self.cwd)),
        }
    }
}

/// Pick the skill source root.
///
/// A non-empty `override_dir` wins. Otherwise the first existing directory
/// among `<exe dir>/skills` and `<exe dir>/../share/ampkit/skills` is used,
/// falling back to the `skills/` directory shipped with this workspace.
#[must_use]
pub fn resolve_skills_source(override_dir: Option<OsString>, exe_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir.filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }

    let bundled = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("skills");

    exe_dir
        .into_iter()
        .flat_map(|dir| {
            [
                dir.join("skills"),
                dir.join("..").join("share").join("ampkit").join("skills"),
            ]
        })
        .find(|candidate| candidate.is_dir())
        .unwrap_or(bundled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn override_wins() {
        let dir = tempdir().unwrap();
        fs_skills(dir.path());
        let resolved = resolve_skills_source(Some("/opt/skills".into()), Some(dir.path()));
        assert_eq!(resolved, PathBuf::from("/opt/skills"));
    }

    #[test]
    fn empty_override_is_ignored() {
        let dir = tempdir().unwrap();
        fs_skills(dir.path());
        let resolved = resolve_skills_source(Some(OsString::new()), Some(dir.path()));
        assert_eq!(resolved, dir.path().join("skills"));
    }

    #[test]
    fn falls_back_to_bundled_skills() {
        let dir = tempdir().unwrap();
        let resolved = resolve_skills_source(None, Some(dir.path()));
        assert!(resolved.join("amp-docs").join("SKILL.md").is_file());
    }

    #[test]
    fn global_scope_needs_home() {
        let cfg = InstallerConfig {
            skills_source: PathBuf::from("skills"),
            home:          None,
            cwd:           PathBuf::from("/work"),
        };
        assert!(matches!(
            cfg.target_base(InstallScope::Global),
            Err(ConfigError::NoHomeDir)
        ));
        assert_eq!(
            cfg.target_base(InstallScope::Local).unwrap(),
            PathBuf::from("/work/.claude/skills")
        );
    }

    #[test]
    fn local_scope_ignores_home() {
        let cfg = InstallerConfig {
            skills_source: PathBuf::from("skills"),
            home:          Some(PathBuf::from("/home/amp")),
            cwd:           PathBuf::from("/work"),
        };
        assert_eq!(
            cfg.target_base(InstallScope::Local).unwrap(),
            PathBuf::from("/work/.claude/skills")
        );
        assert_eq!(
            cfg.target_base(InstallScope::Global).unwrap(),
            PathBuf::from("/home/amp/.claude/skills")
        );
    }

    fn fs_skills(dir: &Path) {
        std::fs::create_dir_all(dir.join("skills")).unwrap();
    }
}
