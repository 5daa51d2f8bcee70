//! Read-only repository checks that run before anything is changed.

use std::fmt;
use std::path::PathBuf;

use crate::domain::{ReleasePlan, TagPattern};
use crate::error::{BumpError, Result};
use crate::git::Repository;

/// Findings about the repository that may make a release go wrong.
#[derive(Debug, Clone, PartialEq)]
pub enum PreflightWarning {
    /// No git repository contains the manifest directory
    NotARepository { path: PathBuf },
    /// The tag for the new version is already taken
    TagAlreadyExists { tag: String },
    /// A tag following the pattern carries a higher version
    NewerTagExists { tag: String, new_version: String },
}

impl PreflightWarning {
    /// Whether this finding must stop a live run
    pub fn blocks_release(&self) -> bool {
        matches!(
            self,
            PreflightWarning::NotARepository { .. } | PreflightWarning::TagAlreadyExists { .. }
        )
    }
}

impl fmt::Display for PreflightWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreflightWarning::NotARepository { path } => {
                write!(f, "'{}' is not inside a git repository", path.display())
            }
            PreflightWarning::TagAlreadyExists { tag } => {
                write!(f, "Tag '{}' already exists", tag)
            }
            PreflightWarning::NewerTagExists { tag, new_version } => {
                write!(
                    f,
                    "Tag '{}' is newer than the new version {}",
                    tag, new_version
                )
            }
        }
    }
}

/// Inspect the repository for the planned release.
///
/// `repo` is `None` when no repository could be discovered. Findings that
/// block a release are errors in a live run and plain warnings in a dry
/// run; everything else is always a warning.
pub fn check(
    repo: Option<&dyn Repository>,
    plan: &ReleasePlan,
    pattern: &TagPattern,
    manifest_dir: PathBuf,
) -> Result<Vec<PreflightWarning>> {
    let mut warnings = Vec::new();

    match repo {
        None => warnings.push(PreflightWarning::NotARepository { path: manifest_dir }),
        Some(repo) => {
            if repo.tag_exists(&plan.tag)? {
                warnings.push(PreflightWarning::TagAlreadyExists {
                    tag: plan.tag.clone(),
                });
            }
            if let Some(tag) = newest_tag_above(repo, plan, pattern)? {
                warnings.push(PreflightWarning::NewerTagExists {
                    tag,
                    new_version: plan.new_version.to_string(),
                });
            }
        }
    }

    if !plan.dry_run {
        if let Some(blocking) = warnings.iter().find(|w| w.blocks_release()) {
            return Err(BumpError::preflight(blocking.to_string()));
        }
    }

    tracing::debug!(count = warnings.len(), "preflight finished");
    Ok(warnings)
}

fn newest_tag_above(
    repo: &dyn Repository,
    plan: &ReleasePlan,
    pattern: &TagPattern,
) -> Result<Option<String>> {
    let Ok(new_version) = semver::Version::parse(&plan.new_version.to_string()) else {
        return Ok(None);
    };

    let newest = repo
        .list_tags()?
        .into_iter()
        .filter_map(|tag| {
            let version = pattern
                .version_of(&tag)
                .and_then(|v| semver::Version::parse(v).ok())?;
            Some((version, tag))
        })
        .filter(|(version, _)| *version > new_version)
        .max_by(|a, b| a.0.cmp(&b.0))
        .map(|(_, tag)| tag);

    Ok(newest)
}
