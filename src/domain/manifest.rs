use crate::error::{BumpError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// The fields of a package manifest that a release needs.
///
/// Everything else in the document is ignored here and left untouched on
/// disk, since the version is written back by patching the raw bytes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Manifest {
    pub version: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub scripts: Option<BTreeMap<String, serde_json::Value>>,
}

impl Manifest {
    /// Decode manifest JSON
    ///
    /// A missing or non-string `version` gets its own error, separate from
    /// malformed JSON and wrongly typed optional fields.
    pub fn decode(raw: &[u8], label: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_slice(raw)
            .map_err(|e| BumpError::manifest(format!("Error parsing {}: {}", label, e)))?;

        if !value.get("version").is_some_and(|v| v.is_string()) {
            return Err(BumpError::manifest(format!(
                "version field not found or not a string in {}",
                label
            )));
        }

        serde_json::from_value(value)
            .map_err(|e| BumpError::manifest(format!("Error parsing {}: {}", label, e)))
    }

    /// Whether the `scripts` mapping defines `script`
    pub fn has_script(&self, script: &str) -> bool {
        self.scripts
            .as_ref()
            .is_some_and(|scripts| scripts.contains_key(script))
    }

    /// Package name with a single leading `@` scope marker removed
    ///
    /// `"@acme/tool"` becomes `"acme/tool"`; a missing name becomes `""`.
    pub fn install_name(&self) -> &str {
        let name = self.name.as_deref().unwrap_or("");
        name.strip_prefix('@').unwrap_or(name)
    }
}

/// A manifest read from disk, keeping the original bytes for patching
#[derive(Debug, Clone)]
pub struct ManifestDocument {
    pub path: PathBuf,
    pub raw: Vec<u8>,
    pub manifest: Manifest,
}

impl ManifestDocument {
    /// Read and decode the manifest at `path`
    pub fn read(path: &Path) -> Result<Self> {
        let label = file_label(path);
        let raw = fs::read(path)
            .map_err(|e| BumpError::manifest(format!("Error reading {}: {}", label, e)))?;
        let manifest = Manifest::decode(&raw, &label)?;

        tracing::debug!(path = %path.display(), version = %manifest.version, "manifest loaded");

        Ok(ManifestDocument {
            path: path.to_path_buf(),
            raw,
            manifest,
        })
    }

    /// Short name of the manifest file for messages (e.g., "package.json")
    pub fn label(&self) -> String {
        file_label(&self.path)
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_minimal() {
        let m = Manifest::decode(br#"{"version": "1.2.3"}"#, "package.json").unwrap();
        assert_eq!(m.version, "1.2.3");
        assert_eq!(m.name, None);
        assert!(!m.has_script("package"));
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let raw = br#"{"name": "x", "version": "0.1.0", "private": true, "dependencies": {"a": "^1"}}"#;
        let m = Manifest::decode(raw, "package.json").unwrap();
        assert_eq!(m.name.as_deref(), Some("x"));
    }

    #[test]
    fn test_decode_missing_version() {
        let err = Manifest::decode(br#"{"name": "x"}"#, "package.json").unwrap_err();
        assert!(err.to_string().contains("version field not found"));
    }

    #[test]
    fn test_decode_non_string_version() {
        let err = Manifest::decode(br#"{"version": 3}"#, "package.json").unwrap_err();
        assert!(err.to_string().contains("not a string"));
    }

    #[test]
    fn test_decode_invalid_json() {
        let err = Manifest::decode(b"{not json", "package.json").unwrap_err();
        assert!(err.to_string().contains("Error parsing package.json"));
    }

    #[test]
    fn test_has_script() {
        let raw = br#"{"version": "1.0.0", "scripts": {"package": "vite build", "test": "vitest"}}"#;
        let m = Manifest::decode(raw, "package.json").unwrap();
        assert!(m.has_script("package"));
        assert!(!m.has_script("build"));
    }

    #[test]
    fn test_install_name_strips_one_scope_marker() {
        let mut m = Manifest::decode(br#"{"name": "@acme/tool", "version": "1.0.0"}"#, "p").unwrap();
        assert_eq!(m.install_name(), "acme/tool");

        m.name = Some("@@odd".to_string());
        assert_eq!(m.install_name(), "@odd");

        m.name = None;
        assert_eq!(m.install_name(), "");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ManifestDocument::read(&dir.path().join("package.json")).unwrap_err();
        assert!(err.to_string().contains("Error reading package.json"));
    }

    #[test]
    fn test_read_keeps_raw_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        let text = "{\n  \"version\": \"2.0.0\"\n}\n";
        fs::write(&path, text).unwrap();

        let doc = ManifestDocument::read(&path).unwrap();
        assert_eq!(doc.raw, text.as_bytes());
        assert_eq!(doc.label(), "package.json");
    }
}
