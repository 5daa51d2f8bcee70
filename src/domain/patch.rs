use super::manifest::Manifest;
use crate::error::{BumpError, Result};
use regex::bytes::{Captures, Regex};

/// Replace the manifest's top-level version value in place.
///
/// Matches `"version": "<old>"` with any whitespace around the colon and
/// rewrites only the quoted value. Every other byte of `raw` is returned
/// unchanged, so key order, indentation and trailing newlines survive.
///
/// A nested object may carry a `version` key with the same text ahead of
/// the top-level one, so each match is tried in turn and the first result
/// whose decoded top-level `version` equals `new` is returned.
///
/// # Errors
/// Returns a patch error when `"version": "<old>"` does not occur in `raw`,
/// or when no occurrence is the top-level field.
///
/// # Example
/// ```ignore
/// let out = patch_version(br#"{"version":  "1.2.3"}"#, "1.2.3", "1.2.4")?;
/// assert_eq!(out, br#"{"version":  "1.2.4"}"#);
/// ```
pub fn patch_version(raw: &[u8], old: &str, new: &str) -> Result<Vec<u8>> {
    let pattern = format!(r#"("version"\s*:\s*)"{}""#, regex::escape(old));
    let re = Regex::new(&pattern)
        .map_err(|e| BumpError::patch(format!("Invalid version pattern: {}", e)))?;

    let mut matched = false;
    for captures in re.captures_iter(raw) {
        matched = true;
        let out = splice(raw, &captures, new);
        if top_level_version(&out).as_deref() == Some(new) {
            return Ok(out);
        }
        tracing::debug!(offset = captures.get(0).map(|m| m.start()), "skipping nested version key");
    }

    if matched {
        Err(BumpError::patch(format!(
            "\"version\": \"{}\" found only in nested objects, not the top-level field",
            old
        )))
    } else {
        Err(BumpError::patch(format!(
            "\"version\": \"{}\" not found verbatim in manifest",
            old
        )))
    }
}

fn splice(raw: &[u8], captures: &Captures<'_>, new: &str) -> Vec<u8> {
    // Both groups exist whenever the pattern matched.
    let whole = captures.get(0).map(|m| m.range()).unwrap_or_default();
    let key = captures.get(1).map(|m| m.range()).unwrap_or_default();

    let mut out = Vec::with_capacity(raw.len() + new.len());
    out.extend_from_slice(&raw[..key.end]);
    out.push(b'"');
    out.extend_from_slice(new.as_bytes());
    out.push(b'"');
    out.extend_from_slice(&raw[whole.end..]);
    out
}

fn top_level_version(bytes: &[u8]) -> Option<String> {
    Manifest::decode(bytes, "manifest").ok().map(|m| m.version)
}
