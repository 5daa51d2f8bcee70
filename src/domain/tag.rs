use crate::error::{BumpError, Result};
use regex::Regex;

/// Tag pattern used when none is configured
pub const DEFAULT_TAG_PATTERN: &str = "v{version}";

/// Tag naming pattern (e.g., "v{version}", "release-{version}")
#[derive(Debug, Clone)]
pub struct TagPattern {
    pattern: String,
    matcher: Regex,
}

impl TagPattern {
    /// Create a tag pattern; it must contain exactly one `{version}` placeholder
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.matches("{version}").count() != 1 {
            return Err(BumpError::config(format!(
                "Tag pattern '{}' must contain exactly one {{version}} placeholder",
                pattern
            )));
        }

        let escaped = regex::escape(&pattern);
        let regex_pattern = escaped.replace(r"\{version\}", r"(\d+\.\d+\.\d+)");
        let matcher = Regex::new(&format!("^{}$", regex_pattern))
            .map_err(|e| BumpError::config(format!("Invalid tag pattern '{}': {}", pattern, e)))?;

        Ok(TagPattern { pattern, matcher })
    }

    /// The raw pattern text
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Format a version according to pattern
    /// Example: pattern="v{version}", version="1.2.3" -> "v1.2.3"
    pub fn format(&self, version: &str) -> String {
        self.pattern.replace("{version}", version)
    }

    /// Extract the version part of a tag produced by this pattern
    pub fn version_of<'t>(&self, tag: &'t str) -> Option<&'t str> {
        self.matcher
            .captures(tag)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }
}
