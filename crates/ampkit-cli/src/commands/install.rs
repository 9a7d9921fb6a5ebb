//! `ampkit` - pick skills, pick a location, copy them into place.

use anyhow::{anyhow, Result};
use ampkit_core::catalog::{catalog, Skill};
use ampkit_core::scope::InstallScope;
use ampkit_core::selection::{Selection, ALL_ID};

use crate::config::InstallerConfig;
use crate::installer::{InstallEvent, InstallReport, Installer};
use crate::prompt::{Choice, Prompted, Prompter};
use crate::ui;

const TITLE: &str = "Itay Claude Skills Installer";
const SKILLS_MESSAGE: &str = "Which skills would you like to install?";
const LOCATION_MESSAGE: &str = "Install location?";
const ALL_LABEL: &str = "All skills (recommended)";
const CANCELLED: &str = "Installation cancelled.";

/// How an install run ended.
#[derive(Debug)]
pub enum InstallOutcome {
    /// Skills were copied.
    Installed(InstallReport),
    /// The user cancelled a prompt; nothing was written.
    Cancelled,
}

/// Run the interactive install.
///
/// Nothing touches the filesystem until both prompts are answered, so a
/// cancellation at either prompt leaves the disk untouched.
///
/// # Errors
///
/// Returns an error if a prompt fails, the install location cannot be
/// resolved, or any skill fails to copy.
pub fn run_install(prompter: &mut dyn Prompter, config: &InstallerConfig) -> Result<InstallOutcome> {
    ui::intro(TITLE);

    let Prompted::Answered(picked) = prompter.multiselect(SKILLS_MESSAGE, &skill_choices(), true)?
    else {
        ui::cancel(CANCELLED);
        return Ok(InstallOutcome::Cancelled);
    };
    let skills = selection_from_indices(&picked).resolve()?;

    let Prompted::Answered(location) = prompter.select(LOCATION_MESSAGE, &scope_choices())? else {
        ui::cancel(CANCELLED);
        return Ok(InstallOutcome::Cancelled);
    };
    let scope = InstallScope::ALL
        .get(location)
        .copied()
        .ok_or_else(|| anyhow!("no install location at index {location}"))?;

    let installer = Installer::new(config.skills_source.clone(), config.target_base(scope)?);

    let spinner = ui::spinner("Installing skills...");
    let result = installer.install(&skills, |event| {
        if let InstallEvent::Overwriting(skill) = event {
            spinner.set_message(format!("Overwriting {}...", skill.id));
        }
    });
    let report = match result {
        Ok(report) => report,
        Err(e) => {
            ui::spinner_failed(&spinner, "Installation failed.");
            return Err(e.into());
        }
    };
    ui::spinner_done(&spinner, "Skills installed successfully!");

    ui::note("Next steps", &summary_lines(&report, &skills));
    ui::outro("Happy building!");

    Ok(InstallOutcome::Installed(report))
}

fn skill_choices() -> Vec<Choice> {
    catalog()
        .iter()
        .map(|s| Choice::new(s.label).with_hint(s.description))
        .chain(std::iter::once(Choice::new(ALL_LABEL)))
        .collect()
}

fn scope_choices() -> Vec<Choice> {
    InstallScope::ALL
        .iter()
        .map(|s| Choice::new(s.label()).with_hint(s.hint()))
        .collect()
}

/// Map prompt indices to a selection; the index past the catalog is "all".
fn selection_from_indices(picked: &[usize]) -> Selection {
    Selection::Skills(
        picked
            .iter()
            .filter_map(|&i| match catalog().get(i) {
                Some(skill) => Some(skill.id),
                None => (i == catalog().len()).then_some(ALL_ID),
            })
            .map(str::to_owned)
            .collect(),
    )
}

fn summary_lines(report: &InstallReport, skills: &[&Skill]) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Installed {} skill(s) to {}",
            report.installed.len(),
            report.target_base.display()
        ),
        String::new(),
        "Available commands:".to_owned(),
    ];
    lines.extend(
        skills
            .iter()
            .map(|s| format!("  {:<21} {}", s.usage, s.summary)),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_entry_sits_after_catalog() {
        let choices = skill_choices();
        assert_eq!(choices.len(), catalog().len() + 1);
        assert_eq!(choices.last().unwrap().label, ALL_LABEL);
    }

    #[test]
    fn all_index_wins_over_individual_picks() {
        let selection = selection_from_indices(&[0, catalog().len()]);
        assert_eq!(
            selection,
            Selection::Skills(vec!["amp-docs".to_owned(), ALL_ID.to_owned()])
        );
        assert_eq!(selection.resolve().unwrap().len(), catalog().len());
    }

    #[test]
    fn indices_map_to_ids() {
        assert_eq!(
            selection_from_indices(&[0, 2]),
            Selection::Skills(vec!["amp-docs".to_owned(), "amp-track".to_owned()])
        );
    }
}
