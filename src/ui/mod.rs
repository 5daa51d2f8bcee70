//! User interface module - terminal narration of a release.
//!
//! `formatter` holds the individual message styles; this module adds the
//! few composite messages the pipeline prints.

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_dry_run_banner, display_error, display_intent, display_preflight_warning,
    display_success, display_summary, display_version_change, display_warning,
    display_would_execute,
};

/// Usage text printed on any argument error.
///
/// # Arguments
/// * `program` - Name the tool was invoked as
pub fn usage_text(program: &str) -> String {
    format!(
        "Usage: {program} [--major|--minor] [--dryrun] <commit-message>\n\
         \x20 --major:   Bump major version (x.0.0)\n\
         \x20 --minor:   Bump minor version (x.y.0)\n\
         \x20 --dryrun:  Show what would happen without making changes\n\
         \x20 (default)  Bump patch version (x.y.z)\n"
    )
}

/// Print the usage text to stderr.
pub fn display_usage(program: &str) {
    eprint!("{}", usage_text(program));
}
