// tests/release_test.rs
use std::fs;
use std::path::PathBuf;

use bump_version::cli::{run_release, ReleaseArgs};
use bump_version::clipboard::ClipboardOutcome;
use bump_version::config::Config;
use bump_version::domain::VersionBump;
use bump_version::git::{MockRepository, Repository};
use bump_version::runner::RecordingRunner;
use bump_version::BumpError;
use tempfile::TempDir;

const ACME: &str = "{\n  \"name\": \"@acme/tool\",\n  \"version\": \"1.2.3\"\n}\n";

fn workspace(manifest: &str) -> (TempDir, Config) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("package.json");
    fs::write(&path, manifest).unwrap();

    let mut config = Config::default();
    config.manifest.path = path;
    config.clipboard.command = Some(vec!["clip-set".to_string(), "{text}".to_string()]);
    (dir, config)
}

fn manifest_path(config: &Config) -> PathBuf {
    config.manifest.path.clone()
}

fn args(bump: VersionBump, dry_run: bool) -> ReleaseArgs {
    ReleaseArgs {
        bump,
        dry_run,
        message: "release".to_string(),
    }
}

#[test]
fn test_minor_release_end_to_end() {
    let (_dir, config) = workspace(ACME);
    let runner = RecordingRunner::new();
    let repo = MockRepository::new().with_tag("v1.2.3");

    let outcome = run_release(
        &args(VersionBump::Minor, false),
        &config,
        &runner,
        Some(&repo as &dyn Repository),
    )
    .unwrap();

    assert_eq!(outcome.old_version, "1.2.3");
    assert_eq!(outcome.new_version, "1.3.0");
    assert_eq!(outcome.tag, "v1.3.0");
    assert!(outcome.manifest_written);
    assert!(outcome.published);
    assert_eq!(outcome.clipboard, ClipboardOutcome::Copied);

    assert_eq!(
        fs::read_to_string(manifest_path(&config)).unwrap(),
        "{\n  \"name\": \"@acme/tool\",\n  \"version\": \"1.3.0\"\n}\n"
    );
    assert_eq!(
        runner.command_lines(),
        vec![
            "git add -A",
            "git commit -m release",
            "git tag v1.3.0",
            "git push",
            "git push --tags",
            "clip-set \"pnpm add https://github.com/acme/tool#v1.3.0\"",
        ]
    );
    let clipboard = &runner.invocations()[5];
    assert_eq!(clipboard.program, "clip-set");
    assert_eq!(clipboard.args, vec!["pnpm add https://github.com/acme/tool#v1.3.0"]);
    assert!(outcome.install_command.contains("acme/tool"));
    assert!(!outcome.install_command.contains('@'));
}

#[test]
fn test_dry_run_changes_nothing() {
    let (_dir, config) = workspace(ACME);
    let runner = RecordingRunner::new();

    let outcome = run_release(&args(VersionBump::Patch, true), &config, &runner, None).unwrap();

    assert!(outcome.dry_run);
    assert_eq!(outcome.new_version, "1.2.4");
    assert!(!outcome.manifest_written);
    assert!(!outcome.published);
    assert_eq!(outcome.clipboard, ClipboardOutcome::Announced);
    assert!(runner.invocations().is_empty());
    assert_eq!(fs::read_to_string(manifest_path(&config)).unwrap(), ACME);
}

#[test]
fn test_dry_run_with_package_script_runs_nothing() {
    let manifest = r#"{"version": "0.9.9", "scripts": {"package": "vite build"}}"#;
    let (_dir, config) = workspace(manifest);
    let runner = RecordingRunner::new();

    let outcome = run_release(&args(VersionBump::Major, true), &config, &runner, None).unwrap();

    assert_eq!(outcome.new_version, "1.0.0");
    assert!(runner.invocations().is_empty());
    assert_eq!(fs::read_to_string(manifest_path(&config)).unwrap(), manifest);
}

#[test]
fn test_package_script_runs_before_git() {
    let manifest = "{\"version\": \"0.1.0\", \"scripts\": {\"package\": \"vite build\"}}";
    let (_dir, config) = workspace(manifest);
    let runner = RecordingRunner::new();
    let repo = MockRepository::new();

    run_release(
        &args(VersionBump::Patch, false),
        &config,
        &runner,
        Some(&repo as &dyn Repository),
    )
    .unwrap();

    let lines = runner.command_lines();
    assert_eq!(lines[0], "pnpm run package");
    assert_eq!(lines[1], "git add -A");
}

#[test]
fn test_missing_version_fails_before_any_write() {
    let manifest = r#"{"name": "x"}"#;
    let (_dir, config) = workspace(manifest);
    let runner = RecordingRunner::new();

    let err = run_release(&args(VersionBump::Patch, false), &config, &runner, None).unwrap_err();

    assert!(matches!(err, BumpError::Manifest(_)));
    assert!(runner.invocations().is_empty());
    assert_eq!(fs::read_to_string(manifest_path(&config)).unwrap(), manifest);
}

#[test]
fn test_non_string_version_fails() {
    let (_dir, config) = workspace(r#"{"version": 1}"#);
    let err = run_release(
        &args(VersionBump::Patch, true),
        &config,
        &RecordingRunner::new(),
        None,
    )
    .unwrap_err();
    assert!(err.to_string().contains("not a string"));
}

#[test]
fn test_malformed_version_names_input() {
    for (version, needle) in [("1.2", "1.2"), ("1.two.3", "minor"), ("x.2.3", "major")] {
        let (_dir, config) = workspace(&format!("{{\"version\": \"{}\"}}", version));
        let err = run_release(
            &args(VersionBump::Patch, false),
            &config,
            &RecordingRunner::new(),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, BumpError::Version(_)), "{}: {}", version, err);
        assert!(err.to_string().contains(needle), "{}: {}", version, err);
    }
}

#[test]
fn test_unpatchable_layout_is_an_error() {
    // Decodes to "1.2.3", but that text never appears in the raw bytes.
    let manifest = r#"{"version": "1.2.\u0033"}"#;
    let (_dir, config) = workspace(manifest);
    let runner = RecordingRunner::new();

    let err = run_release(&args(VersionBump::Patch, false), &config, &runner, None).unwrap_err();

    assert!(matches!(err, BumpError::Patch(_)));
    assert!(runner.invocations().is_empty());
    assert_eq!(fs::read_to_string(manifest_path(&config)).unwrap(), manifest);
}

#[test]
fn test_nested_version_key_is_left_alone() {
    let manifest = r#"{"name": "x", "engines": {"version": "1.2.3"}, "version": "1.2.3"}"#;
    let (_dir, config) = workspace(manifest);
    let runner = RecordingRunner::new();
    let repo = MockRepository::new();

    let outcome = run_release(
        &args(VersionBump::Patch, false),
        &config,
        &runner,
        Some(&repo as &dyn Repository),
    )
    .unwrap();

    assert_eq!(outcome.tag, "v1.2.4");
    assert_eq!(
        fs::read_to_string(manifest_path(&config)).unwrap(),
        r#"{"name": "x", "engines": {"version": "1.2.3"}, "version": "1.2.4"}"#
    );
}

#[test]
fn test_existing_tag_stops_live_run_before_write() {
    let (_dir, config) = workspace(ACME);
    let runner = RecordingRunner::new();
    let repo = MockRepository::new().with_tag("v1.2.4");

    let err = run_release(
        &args(VersionBump::Patch, false),
        &config,
        &runner,
        Some(&repo as &dyn Repository),
    )
    .unwrap_err();

    assert!(matches!(err, BumpError::Preflight(_)));
    assert!(runner.invocations().is_empty());
    assert_eq!(fs::read_to_string(manifest_path(&config)).unwrap(), ACME);
}

#[test]
fn test_no_repository_stops_live_run() {
    let (_dir, config) = workspace(ACME);
    let err = run_release(
        &args(VersionBump::Patch, false),
        &config,
        &RecordingRunner::new(),
        None,
    )
    .unwrap_err();
    assert!(matches!(err, BumpError::Preflight(_)));
}

#[test]
fn test_failed_push_leaves_local_changes() {
    let (_dir, config) = workspace(ACME);
    let runner = RecordingRunner::new().fail_on("git push", 1, "fatal: no upstream");
    let repo = MockRepository::new();

    let err = run_release(
        &args(VersionBump::Patch, false),
        &config,
        &runner,
        Some(&repo as &dyn Repository),
    )
    .unwrap_err();

    assert!(err.to_string().contains("no upstream"));
    assert!(fs::read_to_string(manifest_path(&config))
        .unwrap()
        .contains("1.2.4"));
    assert!(!runner
        .command_lines()
        .iter()
        .any(|line| line.starts_with("clip-set")));
}

#[test]
fn test_clipboard_failure_is_only_a_warning() {
    let (_dir, config) = workspace(ACME);
    let runner = RecordingRunner::new().spawn_error_on("clip-set", "not installed");
    let repo = MockRepository::new();

    let outcome = run_release(
        &args(VersionBump::Patch, false),
        &config,
        &runner,
        Some(&repo as &dyn Repository),
    )
    .unwrap();

    assert!(outcome.published);
    assert!(matches!(outcome.clipboard, ClipboardOutcome::Failed(_)));
}

#[test]
fn test_configured_remote_and_pattern() {
    let (_dir, mut config) = workspace(ACME);
    config.git.remote = Some("upstream".to_string());
    config.git.tag_pattern = "release-{version}".to_string();
    let runner = RecordingRunner::new();
    let repo = MockRepository::new();

    let outcome = run_release(
        &args(VersionBump::Patch, false),
        &config,
        &runner,
        Some(&repo as &dyn Repository),
    )
    .unwrap();

    assert_eq!(outcome.tag, "release-1.2.4");
    let lines = runner.command_lines();
    assert!(lines.contains(&"git tag release-1.2.4".to_string()));
    assert!(lines.contains(&"git push upstream".to_string()));
    assert!(lines.contains(&"git push upstream --tags".to_string()));
}
