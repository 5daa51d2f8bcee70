//! Main release workflow orchestration logic
//!
//! Wires the steps together in their fixed order, threading one
//! [ReleasePlan] through them:
//! 1. Read and decode the manifest
//! 2. Compute the new version, tag and install command
//! 3. Patch the manifest bytes
//! 4. Preflight checks against the repository
//! 5. Write, package, commit, tag and push
//! 6. Copy the install command to the clipboard

use std::path::PathBuf;

use crate::clipboard::{self, ClipboardOutcome};
use crate::config::Config;
use crate::domain::{patch_version, ManifestDocument, ReleasePlan, VersionBump};
use crate::error::Result;
use crate::executor::ReleaseExecutor;
use crate::git::Repository;
use crate::preflight;
use crate::runner::CommandRunner;
use crate::ui;

/// Arguments for the release workflow
///
/// Decoupled from the clap definition so the workflow can be called
/// programmatically.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseArgs {
    /// Which version component to increment
    pub bump: VersionBump,

    /// Preview mode - no file writes, commands or clipboard changes
    pub dry_run: bool,

    /// Commit message for the release commit
    pub message: String,
}

/// Result of a successful release workflow
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseOutcome {
    pub old_version: String,
    pub new_version: String,
    pub tag: String,
    pub dry_run: bool,
    pub manifest_written: bool,
    pub published: bool,
    pub install_command: String,
    pub clipboard: ClipboardOutcome,
}

/// Run one release
///
/// # Arguments
///
/// * `args` - Bump mode, dry-run flag and commit message
/// * `config` - Manifest location, package manager, git and clipboard settings
/// * `runner` - Starts every external program
/// * `repo` - Repository for preflight checks, `None` if none was found
///
/// # Returns
///
/// What was done, or the first fatal error. Errors from reading, parsing,
/// patching and preflight happen before any side effect.
pub fn run_release(
    args: &ReleaseArgs,
    config: &Config,
    runner: &dyn CommandRunner,
    repo: Option<&dyn Repository>,
) -> Result<ReleaseOutcome> {
    let document = ManifestDocument::read(&config.manifest.path)?;
    let plan = ReleasePlan::new(
        &document.manifest,
        args.bump,
        &args.message,
        args.dry_run,
        config,
    )?;
    let new_version = plan.new_version.to_string();

    tracing::info!(
        old = %plan.old_version,
        new = %new_version,
        bump = %plan.bump,
        dry_run = plan.dry_run,
        "release planned"
    );
    ui::display_version_change(&plan.old_version, &new_version);
    if plan.dry_run {
        ui::display_dry_run_banner();
    }

    let patched = patch_version(&document.raw, &plan.old_version, &new_version)?;

    let manifest_dir = config
        .manifest
        .dir()
        .map(|dir| dir.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    let warnings = preflight::check(repo, &plan, &config.tag_pattern()?, manifest_dir)?;
    for warning in &warnings {
        ui::display_preflight_warning(warning);
    }

    let report = ReleaseExecutor::new(runner, config).execute(&plan, &document, &patched)?;
    let clipboard = clipboard::notify(runner, &plan, &config.clipboard);

    Ok(ReleaseOutcome {
        old_version: plan.old_version,
        new_version,
        tag: plan.tag,
        dry_run: plan.dry_run,
        manifest_written: report.manifest_written,
        published: report.published,
        install_command: plan.install_command,
        clipboard,
    })
}
