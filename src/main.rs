use std::ffi::OsString;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use bump_version::git::{Git2Repository, Repository};
use bump_version::runner::SystemRunner;
use bump_version::{cli, config, logging, ui, BumpError};

fn main() -> ExitCode {
    logging::init_logging();

    let argv: Vec<OsString> = std::env::args_os().collect();
    let program = cli::program_name(argv.first());

    match run(argv) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            if matches!(e.downcast_ref::<BumpError>(), Some(BumpError::Usage(_))) {
                ui::display_usage(&program);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(argv: Vec<OsString>) -> Result<()> {
    let args = cli::parse_args(argv)?;

    let config = config::load_config(None).context("Error loading config")?;

    // Preflight only; the release itself goes through the git binary.
    let search_from = config.manifest.dir().unwrap_or_else(|| Path::new("."));
    let repo = match Git2Repository::discover(search_from) {
        Ok(repo) => Some(repo),
        Err(e) => {
            tracing::debug!(error = %e, "no git repository found");
            None
        }
    };

    let outcome = cli::run_release(
        &args,
        &config,
        &SystemRunner,
        repo.as_ref().map(|r| r as &dyn Repository),
    )?;

    tracing::debug!(?outcome, "release finished");
    Ok(())
}
