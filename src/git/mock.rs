use crate::error::Result;
use crate::git::Repository;
use std::collections::BTreeSet;

/// Mock repository for testing without an actual git repository
#[derive(Debug, Default)]
pub struct MockRepository {
    tags: BTreeSet<String>,
}

impl MockRepository {
    /// Create a new mock repository without tags
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.insert(name.into());
    }

    /// Builder form of [MockRepository::add_tag]
    pub fn with_tag(mut self, name: impl Into<String>) -> Self {
        self.add_tag(name);
        self
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.iter().cloned().collect())
    }

    fn tag_exists(&self, tag_name: &str) -> Result<bool> {
        Ok(self.tags.contains(tag_name))
    }
}
