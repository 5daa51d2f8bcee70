//! Command line surface: `bump-version [--major|--minor] [--dryrun] <commit-message>`

pub mod orchestration;

use std::ffi::OsString;

use clap::Parser;

use crate::domain::VersionBump;
use crate::error::{BumpError, Result};
pub use orchestration::{run_release, ReleaseArgs, ReleaseOutcome};

#[derive(Debug, clap::Parser)]
#[command(
    name = "bump-version",
    about = "Bump the package version, commit, tag and push a release",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
struct Args {
    #[arg(long, overrides_with = "minor", help = "Bump major version (x.0.0)")]
    major: bool,

    #[arg(long, overrides_with = "major", help = "Bump minor version (x.y.0)")]
    minor: bool,

    #[arg(
        long = "dryrun",
        help = "Show what would happen without making changes"
    )]
    dry_run: bool,

    /// Commit message; flag scanning stops at the first token that is not a flag
    #[arg(
        value_name = "COMMIT_MESSAGE",
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    message: Vec<String>,
}

/// Parse the full process argument list (program name first).
///
/// `--major` and `--minor` override each other, the later one winning.
/// A bare `--` ends flag scanning and is not itself the message.
/// Exactly one message token is accepted; anything after it is rejected so
/// an unquoted multi-word message is not silently cut to its first word.
pub fn parse_args<I, T>(argv: I) -> Result<ReleaseArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    if argv.len() < 2 {
        return Err(BumpError::usage("no arguments given"));
    }

    let args = Args::try_parse_from(&argv).map_err(|e| {
        let rendered = e.to_string();
        let first_line = rendered.lines().next().unwrap_or_default();
        BumpError::usage(first_line.trim_start_matches("error: ").to_string())
    })?;

    let mut tokens = args.message.into_iter();
    let message = tokens
        .next()
        .filter(|m| !m.is_empty())
        .ok_or_else(|| BumpError::usage("commit message is required"))?;
    if let Some(extra) = tokens.next() {
        return Err(BumpError::usage(format!(
            "unexpected argument '{}' after the commit message (quote multi-word messages)",
            extra
        )));
    }

    let bump = if args.major {
        VersionBump::Major
    } else if args.minor {
        VersionBump::Minor
    } else {
        VersionBump::Patch
    };

    Ok(ReleaseArgs {
        bump,
        dry_run: args.dry_run,
        message,
    })
}

/// Name the tool was invoked as, for the usage text
pub fn program_name(argv0: Option<&OsString>) -> String {
    argv0
        .map(std::path::Path::new)
        .and_then(|p| p.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "bump-version".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<ReleaseArgs> {
        let mut argv = vec!["bump-version"];
        argv.extend_from_slice(args);
        parse_args(argv)
    }

    #[test]
    fn test_default_is_patch() {
        let args = parse(&["release"]).unwrap();
        assert_eq!(args.bump, VersionBump::Patch);
        assert!(!args.dry_run);
        assert_eq!(args.message, "release");
    }

    #[test]
    fn test_flags_in_any_order() {
        let args = parse(&["--dryrun", "--minor", "release"]).unwrap();
        assert_eq!(args.bump, VersionBump::Minor);
        assert!(args.dry_run);

        let args = parse(&["--major", "--dryrun", "release"]).unwrap();
        assert_eq!(args.bump, VersionBump::Major);
        assert!(args.dry_run);
    }

    #[test]
    fn test_last_bump_flag_wins() {
        assert_eq!(parse(&["--major", "--minor", "m"]).unwrap().bump, VersionBump::Minor);
        assert_eq!(parse(&["--minor", "--major", "m"]).unwrap().bump, VersionBump::Major);
    }

    #[test]
    fn test_repeated_flags_allowed() {
        let args = parse(&["--dryrun", "--dryrun", "m"]).unwrap();
        assert!(args.dry_run);
    }

    #[test]
    fn test_message_with_spaces() {
        let args = parse(&["--minor", "feat: add thing"]).unwrap();
        assert_eq!(args.message, "feat: add thing");
    }

    #[test]
    fn test_no_arguments() {
        let err = parse_args(["bump-version"]).unwrap_err();
        assert!(matches!(err, BumpError::Usage(_)));
    }

    #[test]
    fn test_flags_without_message() {
        let err = parse(&["--major", "--dryrun"]).unwrap_err();
        assert!(err.to_string().contains("commit message is required"));
    }

    #[test]
    fn test_empty_message() {
        let err = parse(&[""]).unwrap_err();
        assert!(err.to_string().contains("commit message is required"));
    }

    #[test]
    fn test_trailing_tokens_rejected() {
        let err = parse(&["fix", "typo"]).unwrap_err();
        assert!(err.to_string().contains("'typo'"));

        let err = parse(&["release", "--major"]).unwrap_err();
        assert!(matches!(err, BumpError::Usage(_)));
    }

    #[test]
    fn test_double_dash_ends_flags() {
        let args = parse(&["--", "release"]).unwrap();
        assert_eq!(args.message, "release");
        assert_eq!(args.bump, VersionBump::Patch);

        let args = parse(&["--major", "--", "--minor"]).unwrap();
        assert_eq!(args.message, "--minor");
        assert_eq!(args.bump, VersionBump::Major);

        let err = parse(&["--"]).unwrap_err();
        assert!(matches!(err, BumpError::Usage(_)));
    }

    #[test]
    fn test_help_is_a_message() {
        let args = parse(&["--help"]).unwrap();
        assert_eq!(args.message, "--help");
    }

    #[test]
    fn test_program_name() {
        assert_eq!(program_name(Some(&OsString::from("/usr/bin/bv"))), "bv");
        assert_eq!(program_name(None), "bump-version");
    }
}
