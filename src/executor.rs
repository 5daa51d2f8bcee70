//! Side-effecting release steps, in their fixed order.
//!
//! 1. write the patched manifest
//! 2. run the packaging script, if the manifest defines one
//! 3. `git add -A`, `git commit`, `git tag`, `git push`, `git push --tags`
//!
//! Under a dry run each step only prints what it would do. The first
//! failure stops the run; earlier steps are not undone.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::domain::{ManifestDocument, ReleasePlan};
use crate::error::{BumpError, Result};
use crate::git::GitCommands;
use crate::runner::{quoted, CommandRunner, Invocation};
use crate::ui;

/// Manifest file mode on unix (rw-r--r--)
pub const MANIFEST_MODE: u32 = 0o644;

/// Which steps actually changed something
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecutionReport {
    pub manifest_written: bool,
    pub packaged: bool,
    pub published: bool,
}

/// Runs the release steps through a [CommandRunner]
pub struct ReleaseExecutor<'a> {
    runner: &'a dyn CommandRunner,
    config: &'a Config,
}

impl<'a> ReleaseExecutor<'a> {
    pub fn new(runner: &'a dyn CommandRunner, config: &'a Config) -> Self {
        ReleaseExecutor { runner, config }
    }

    /// Run every step for `plan`, writing `patched` as the new manifest
    pub fn execute(
        &self,
        plan: &ReleasePlan,
        document: &ManifestDocument,
        patched: &[u8],
    ) -> Result<ExecutionReport> {
        let manifest_written = self.update_manifest(plan, document, patched)?;
        let packaged = self.run_package_script(plan)?;
        let published = self.publish(plan)?;

        ui::display_summary(&plan.new_version.to_string(), plan.dry_run);

        Ok(ExecutionReport {
            manifest_written,
            packaged,
            published,
        })
    }

    fn update_manifest(
        &self,
        plan: &ReleasePlan,
        document: &ManifestDocument,
        patched: &[u8],
    ) -> Result<bool> {
        let label = document.label();
        if plan.dry_run {
            ui::display_intent(&format!("update {} to version {}", label, plan.new_version));
            return Ok(false);
        }

        write_manifest(&document.path, patched)
            .map_err(|e| BumpError::manifest(format!("Error writing {}: {}", label, e)))?;
        ui::display_success(&format!("Updated {} to version {}", label, plan.new_version));
        Ok(true)
    }

    fn package_invocation(&self) -> Invocation {
        let package = &self.config.package;
        Invocation::new(package.manager.clone(), ["run", package.script.as_str()])
            .in_dir(self.config.manifest.dir())
    }

    fn run_package_script(&self, plan: &ReleasePlan) -> Result<bool> {
        if !plan.has_package_script {
            return Ok(false);
        }

        let invocation = self.package_invocation();
        if plan.dry_run {
            ui::display_intent(&format!("run: {}", invocation));
            return Ok(false);
        }

        println!("\n📦 Running '{}'...", invocation);
        let step = invocation.to_string();
        let output = self
            .runner
            .run_streaming(&invocation)
            .map_err(|e| BumpError::command(&step, e.to_string()))?;
        if !output.is_success() {
            return Err(BumpError::command(step, output.status_text()));
        }

        ui::display_success("Package built successfully");
        Ok(true)
    }

    fn publish(&self, plan: &ReleasePlan) -> Result<bool> {
        let git = GitCommands::new(self.config.git.remote.as_deref(), self.config.manifest.dir());
        let sequence = git.release_sequence(&plan.message, &plan.tag);

        if plan.dry_run {
            ui::display_would_execute(&would_execute(&sequence, &plan.message));
            return Ok(false);
        }

        for (step, invocation) in &sequence {
            self.run_git_step(step, invocation)?;
            match *step {
                "git commit" => ui::display_success("Committed changes"),
                "git tag" => ui::display_success(&format!("Created git tag {}", plan.tag)),
                "git push" => ui::display_success("Pushed commits to remote"),
                "git push --tags" => ui::display_success("Pushed tags to remote"),
                _ => {}
            }
        }
        Ok(true)
    }

    fn run_git_step(&self, step: &str, invocation: &Invocation) -> Result<()> {
        tracing::info!(command = %invocation, "git step");

        let output = self
            .runner
            .run_captured(invocation)
            .map_err(|e| BumpError::command(step, e.to_string()))?;
        if !output.is_success() {
            return Err(BumpError::command(
                step,
                format!("{}\n{}", output.status_text(), output.combined.trim_end()),
            ));
        }
        Ok(())
    }
}

/// Dry-run command lines; the commit message is always shown quoted
fn would_execute(sequence: &[(&'static str, Invocation)], message: &str) -> Vec<String> {
    sequence
        .iter()
        .map(|(step, invocation)| match *step {
            "git commit" => format!("{} commit -m {}", invocation.program, quoted(message)),
            _ => invocation.to_string(),
        })
        .collect()
}

/// Replace the file at `path` with `contents` in one rename.
///
/// The bytes go to a temporary file in the same directory first, so a
/// failed write never leaves a truncated manifest behind.
pub fn write_manifest(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(contents)?;
    file.as_file().sync_all()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(fs::Permissions::from_mode(MANIFEST_MODE))?;
    }

    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
