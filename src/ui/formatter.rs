//! Pure formatting functions for UI output.
//!
//! Everything the user reads about a release goes through here: progress on
//! stdout, warnings and errors on stderr.

use console::style;

use crate::preflight::PreflightWarning;

/// Error line with a red `ERROR:` prefix.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red(), message)
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Format and print a warning in yellow.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), message);
}

/// Success line with a green checkmark.
pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green(), message)
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{}", format_success(message));
}

/// Print something a dry run would have done.
pub fn display_intent(message: &str) {
    println!("{} {}", style("Would").cyan(), message);
}

/// Display the version change, e.g. `Bumping version: 1.2.3 -> 1.3.0`.
pub fn display_version_change(old: &str, new: &str) {
    println!(
        "Bumping version: {} -> {}",
        style(old).red(),
        style(new).green()
    );
}

/// Banner shown once at the start of a dry run.
pub fn display_dry_run_banner() {
    println!(
        "\n{}\n",
        style("🔍 DRY RUN MODE - No changes will be made").bold()
    );
}

/// The "Would execute:" block, one indented command per line.
///
/// # Arguments
/// * `commands` - Command lines in execution order
pub fn format_would_execute(commands: &[String]) -> String {
    let mut out = format!("{}", style("Would execute:").bold());
    for command in commands {
        out.push_str(&format!("\n  {}", style(command).cyan()));
    }
    out
}

/// Display the commands a dry run skipped.
pub fn display_would_execute(commands: &[String]) {
    println!("\n{}", format_would_execute(commands));
}

/// Display a non-fatal preflight finding.
pub fn display_preflight_warning(warning: &PreflightWarning) {
    display_warning(&warning.to_string());
}

/// Final line of a completed run.
pub fn display_summary(new_version: &str, dry_run: bool) {
    if dry_run {
        println!(
            "\n{} Dry run complete - version would be {}",
            style("✅").green(),
            style(new_version).bold()
        );
    } else {
        println!(
            "\n{} Successfully bumped to version {} and pushed to remote!",
            style("✅").green(),
            style(new_version).bold()
        );
    }
}
