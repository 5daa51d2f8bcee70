//! Domain logic - pure release rules independent of processes and git

pub mod manifest;
pub mod patch;
pub mod plan;
pub mod tag;
pub mod version;

pub use manifest::{Manifest, ManifestDocument};
pub use patch::patch_version;
pub use plan::ReleasePlan;
pub use tag::TagPattern;
pub use version::{Version, VersionBump};
