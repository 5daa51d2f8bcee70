use crate::clipboard::install_command;
use crate::config::Config;
use crate::domain::{Manifest, Version, VersionBump};
use crate::error::Result;

/// Everything a run decides up front, before any side effect
#[derive(Debug, Clone, PartialEq)]
pub struct ReleasePlan {
    pub dry_run: bool,
    pub message: String,
    pub bump: VersionBump,
    /// Version text exactly as found in the manifest
    pub old_version: String,
    pub new_version: Version,
    pub tag: String,
    pub has_package_script: bool,
    pub install_command: String,
}

impl ReleasePlan {
    /// Compute the plan for bumping `manifest`
    ///
    /// Fails if the manifest's version is not a dotted triple or the
    /// configured tag pattern is invalid.
    pub fn new(
        manifest: &Manifest,
        bump: VersionBump,
        message: &str,
        dry_run: bool,
        config: &Config,
    ) -> Result<Self> {
        let current = Version::parse(&manifest.version)?;
        let new_version = current.bump(bump)?;
        let tag = config.tag_pattern()?.format(&new_version.to_string());

        Ok(ReleasePlan {
            dry_run,
            message: message.to_string(),
            bump,
            old_version: manifest.version.clone(),
            new_version,
            tag,
            has_package_script: manifest.has_script(&config.package.script),
            install_command: install_command(
                &config.clipboard.template,
                manifest.install_name(),
                &new_version.to_string(),
            ),
        })
    }
}
