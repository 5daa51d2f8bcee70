//! Git access for a release
//!
//! Two halves with different jobs:
//!
//! - [Repository]: read-only inspection (tags) through `git2`, used by the
//!   preflight checks before anything is changed. Implemented by
//!   [repository::Git2Repository] and, for tests, [mock::MockRepository].
//! - [commands::GitCommands]: the mutating steps (`add`, `commit`, `tag`,
//!   `push`) expressed as invocations of the system `git` binary, so they
//!   honor the user's hooks, signing and credential setup, and run through
//!   a [crate::runner::CommandRunner].

pub mod commands;
pub mod mock;
pub mod repository;

pub use commands::GitCommands;
pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Read-only view of the repository the manifest lives in
pub trait Repository {
    /// Get all tag names in the repository
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names, in no particular order
    /// * `Err` - If there's a Git error
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Check whether a tag exists
    ///
    /// # Arguments
    /// * `tag_name` - Name of the tag (e.g., "v1.0.0")
    ///
    /// # Returns
    /// * `Ok(true)` / `Ok(false)` - Whether `refs/tags/<tag_name>` exists
    /// * `Err` - If there's a Git error other than "not found"
    fn tag_exists(&self, tag_name: &str) -> Result<bool>;
}
