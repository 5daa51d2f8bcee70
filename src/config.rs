use crate::domain::tag::{TagPattern, DEFAULT_TAG_PATTERN};
use crate::error::{BumpError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit configuration file
pub const CONFIG_ENV: &str = "BUMP_VERSION_CONFIG";

/// Configuration file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "bumpversion.toml";

/// Represents the complete configuration for bump-version.
///
/// Every section is optional; an absent file yields the defaults, which
/// reproduce the plain `package.json` / `pnpm` / `git` workflow.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub manifest: ManifestConfig,

    #[serde(default)]
    pub package: PackageConfig,

    #[serde(default)]
    pub git: GitConfig,

    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

/// Where the manifest lives.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ManifestConfig {
    #[serde(default = "default_manifest_path")]
    pub path: PathBuf,
}

fn default_manifest_path() -> PathBuf {
    PathBuf::from("package.json")
}

impl Default for ManifestConfig {
    fn default() -> Self {
        ManifestConfig {
            path: default_manifest_path(),
        }
    }
}

impl ManifestConfig {
    /// Directory holding the manifest, if the path names one
    pub fn dir(&self) -> Option<&Path> {
        self.path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
    }
}

/// Package manager used to run the packaging script.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PackageConfig {
    #[serde(default = "default_package_manager")]
    pub manager: String,

    #[serde(default = "default_package_script")]
    pub script: String,
}

fn default_package_manager() -> String {
    "pnpm".to_string()
}

fn default_package_script() -> String {
    "package".to_string()
}

impl Default for PackageConfig {
    fn default() -> Self {
        PackageConfig {
            manager: default_package_manager(),
            script: default_package_script(),
        }
    }
}

/// Tag naming and push target.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitConfig {
    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,

    /// Remote to push to; `None` pushes to the branch's configured upstream.
    #[serde(default)]
    pub remote: Option<String>,
}

fn default_tag_pattern() -> String {
    DEFAULT_TAG_PATTERN.to_string()
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            tag_pattern: default_tag_pattern(),
            remote: None,
        }
    }
}

/// Install command template and the tool that puts it on the clipboard.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ClipboardConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// `{name}` is the package name without its `@`, `{version}` the new version.
    #[serde(default = "default_install_template")]
    pub template: String,

    /// Program and arguments; `{text}` is replaced by the install command.
    #[serde(default)]
    pub command: Option<Vec<String>>,
}

fn default_true() -> bool {
    true
}

fn default_install_template() -> String {
    "pnpm add https://github.com/{name}#v{version}".to_string()
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        ClipboardConfig {
            enabled: true,
            template: default_install_template(),
            command: None,
        }
    }
}

impl ClipboardConfig {
    /// The configured clipboard command, or the platform default
    pub fn command(&self) -> Vec<String> {
        self.command
            .clone()
            .unwrap_or_else(default_clipboard_command)
    }
}

/// Platform clipboard setter, with `{text}` passed as a literal argument.
pub fn default_clipboard_command() -> Vec<String> {
    let parts: &[&str] = if cfg!(windows) {
        &["pwsh", "-command", "Set-Clipboard -Value '{text}'"]
    } else if cfg!(target_os = "macos") {
        &["sh", "-c", "printf '%s' \"$1\" | pbcopy", "sh", "{text}"]
    } else {
        &[
            "sh",
            "-c",
            "printf '%s' \"$1\" | xclip -selection clipboard",
            "sh",
            "{text}",
        ]
    };
    parts.iter().map(|part| part.to_string()).collect()
}

impl Config {
    /// Compiled tag pattern
    pub fn tag_pattern(&self) -> Result<TagPattern> {
        TagPattern::new(self.git.tag_pattern.clone())
    }

    /// Reject settings that would only fail halfway through a release
    pub fn validate(&self) -> Result<()> {
        self.tag_pattern()?;

        if self.package.manager.trim().is_empty() {
            return Err(BumpError::config("package.manager must not be empty"));
        }
        if self.clipboard.command.as_ref().is_some_and(|c| c.is_empty()) {
            return Err(BumpError::config("clipboard.command must name a program"));
        }
        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. Path in the `BUMP_VERSION_CONFIG` environment variable
/// 3. `bumpversion.toml` in current directory
/// 4. `.bumpversion.toml` in the user config directory
/// 5. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded and validated, or default, configuration
/// * `Err` - If a file exists but cannot be read, parsed, or validated
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let Some(path) = locate_config(config_path) else {
        tracing::debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        BumpError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;
    let config: Config = toml::from_str(&config_str)
        .map_err(|e| BumpError::config(format!("Cannot parse {}: {}", path.display(), e)))?;
    config.validate()?;

    tracing::debug!(path = %path.display(), "configuration loaded");
    Ok(config)
}

fn locate_config(config_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local.to_path_buf());
    }

    dirs::config_dir()
        .map(|dir| dir.join(format!(".{}", LOCAL_CONFIG_FILE)))
        .filter(|path| path.exists())
}
