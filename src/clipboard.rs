//! Install command text and putting it on the OS clipboard.

use crate::config::ClipboardConfig;
use crate::domain::ReleasePlan;
use crate::runner::{CommandRunner, Invocation};
use crate::ui;

/// Result of the clipboard step; never an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardOutcome {
    Copied,
    /// Dry run: only printed
    Announced,
    Disabled,
    /// Clipboard tool missing or failed; carries the reason
    Failed(String),
}

/// Fill the install template: `{name}` and `{version}` placeholders
pub fn install_command(template: &str, name: &str, version: &str) -> String {
    template.replace("{name}", name).replace("{version}", version)
}

/// Clipboard command with `{text}` substituted, or `None` for an empty command
pub fn clipboard_invocation(command: &[String], text: &str) -> Option<Invocation> {
    let (program, args) = command.split_first()?;
    let args = args.iter().map(|arg| arg.replace("{text}", text));
    Some(Invocation::new(program.replace("{text}", text), args))
}

/// Copy the plan's install command, downgrading any failure to a warning
pub fn notify(runner: &dyn CommandRunner, plan: &ReleasePlan, config: &ClipboardConfig) -> ClipboardOutcome {
    let text = &plan.install_command;

    if plan.dry_run {
        println!();
        ui::display_intent(&format!("copy to clipboard: {}", text));
        return ClipboardOutcome::Announced;
    }
    if !config.enabled {
        tracing::debug!("clipboard disabled by configuration");
        return ClipboardOutcome::Disabled;
    }

    let Some(invocation) = clipboard_invocation(&config.command(), text) else {
        return warn(String::from("no clipboard command configured"));
    };

    match runner.run_captured(&invocation) {
        Ok(output) if output.is_success() => {
            println!("\n📋 Copied to clipboard: {}", text);
            ClipboardOutcome::Copied
        }
        Ok(output) => warn(format!(
            "{} ({})",
            output.status_text(),
            output.combined.trim()
        )),
        Err(e) => warn(e.to_string()),
    }
}

fn warn(reason: String) -> ClipboardOutcome {
    ui::display_warning(&format!("Could not copy to clipboard: {}", reason));
    ClipboardOutcome::Failed(reason)
}
