use std::process::ExitCode;

use ampkit_cli::commands::install::{run_install, InstallOutcome};
use ampkit_cli::config::InstallerConfig;
use ampkit_cli::prompt::ConsolePrompter;
use clap::Parser;
use log::{debug, error};

/// Install the amp Claude skills into `~/.claude/skills` or `./.claude/skills`.
#[derive(Parser)]
#[command(name = "ampkit", version, about)]
struct Cli {}

fn main() -> ExitCode {
    env_logger::init();
    let Cli {} = Cli::parse();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let config = InstallerConfig::from_env()?;
    debug!("skill sources: {}", config.skills_source.display());

    let mut prompter = ConsolePrompter::new();
    match run_install(&mut prompter, &config)? {
        InstallOutcome::Installed(report) => {
            debug!("installed {} skill(s)", report.installed.len());
        }
        InstallOutcome::Cancelled => debug!("cancelled by user"),
    }
    Ok(())
}
