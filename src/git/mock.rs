use crate::error::{CommitverError, Result};
use crate::git::{CommitInfo, Repository};
use git2::Oid;

/// Mock repository for testing without actual git operations.
///
/// Commits are held oldest first; tags point at a commit index.
#[derive(Default)]
pub struct MockRepository {
    commits: Vec<CommitInfo>,
    tags: Vec<(String, usize)>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a commit with the given message.
    pub fn add_commit(&mut self, message: impl Into<String>) {
        let index = self.commits.len();
        self.commits.push(CommitInfo {
            hash: format!("{:040x}", index + 1),
            message: message.into(),
            author: "Test Author".to_string(),
        });
    }

    /// Tag the most recently added commit.
    pub fn tag_head(&mut self, name: impl Into<String>) {
        let position = self.commits.len().saturating_sub(1);
        self.tags.push((name.into(), position));
    }
}

impl Repository for MockRepository {
    fn head_oid(&self) -> Result<Oid> {
        if self.commits.is_empty() {
            return Err(CommitverError::tag("Mock repository has no commits"));
        }
        Oid::from_str(&self.commits[self.commits.len() - 1].hash).map_err(Into::into)
    }

    fn tags_in_ancestry(&self) -> Result<Vec<String>> {
        let mut tags = self.tags.clone();
        tags.sort_by_key(|(_, position)| *position);
        Ok(tags.into_iter().map(|(name, _)| name).collect())
    }

    fn commits_since(&self, tag_name: Option<&str>) -> Result<Vec<CommitInfo>> {
        let start = match tag_name {
            Some(name) => {
                let (_, position) = self
                    .tags
                    .iter()
                    .find(|(n, _)| n == name)
                    .ok_or_else(|| CommitverError::tag(format!("Tag '{}' not found", name)))?;
                position + 1
            }
            None => 0,
        };

        Ok(self.commits[start.min(self.commits.len())..].to_vec())
    }

    fn create_tag(&self, _name: &str, _oid: Oid) -> Result<()> {
        Ok(())
    }

    fn push_tag(&self, _remote: &str, _tag_name: &str) -> Result<()> {
        Ok(())
    }

    fn fetch_from_remote(&self, _remote: &str) -> Result<()> {
        Ok(())
    }
}
