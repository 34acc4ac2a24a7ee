use crate::error::{CommitverError, Result};
use crate::git::CommitInfo;
use git2::{Oid, Repository as Git2Repo};
use std::collections::HashMap;
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Map every tag to the OID of the commit it points at.
    /// Annotated tags are peeled to their target commit.
    fn tag_targets(&self) -> Result<HashMap<Oid, Vec<String>>> {
        let mut targets: HashMap<Oid, Vec<String>> = HashMap::new();

        for name in self.repo.tag_names(None)?.iter().flatten() {
            let reference_name = format!("refs/tags/{}", name);
            if let Ok(reference) = self.repo.find_reference(&reference_name) {
                if let Ok(object) = reference.peel(git2::ObjectType::Commit) {
                    targets.entry(object.id()).or_default().push(name.to_string());
                }
            }
        }

        Ok(targets)
    }

    fn find_tag_oid(&self, tag_name: &str) -> Result<Option<Oid>> {
        let reference_name = format!("refs/tags/{}", tag_name);

        match self.repo.find_reference(&reference_name) {
            Ok(reference) => {
                let oid = reference
                    .peel(git2::ObjectType::Commit)
                    .map_err(|e| CommitverError::tag(format!("Cannot peel tag: {}", e)))?
                    .id();

                Ok(Some(oid))
            }
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(CommitverError::tag(format!(
                "Cannot find tag '{}': {}",
                tag_name, e
            ))),
        }
    }
}

impl super::Repository for Git2Repository {
    fn head_oid(&self) -> Result<Oid> {
        let head = self.repo.head()?;
        head.target()
            .ok_or_else(|| CommitverError::tag("HEAD has no target commit"))
    }

    fn tags_in_ancestry(&self) -> Result<Vec<String>> {
        let targets = self.tag_targets()?;
        if targets.is_empty() {
            return Ok(Vec::new());
        }

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(self.head_oid()?)?;
        revwalk.set_sorting(git2::Sort::TOPOLOGICAL | git2::Sort::REVERSE)?;

        let mut ordered = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result?;
            if let Some(names) = targets.get(&oid) {
                ordered.extend(names.iter().cloned());
            }
        }

        Ok(ordered)
    }

    fn commits_since(&self, tag_name: Option<&str>) -> Result<Vec<CommitInfo>> {
        let stop_oid = match tag_name {
            Some(name) => Some(self.find_tag_oid(name)?.ok_or_else(|| {
                CommitverError::tag(format!("Tag '{}' not found", name))
            })?),
            None => None,
        };

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(self.head_oid()?)?;

        let mut commits = Vec::new();

        for oid_result in revwalk {
            let oid = oid_result?;

            if Some(oid) == stop_oid {
                break;
            }

            let commit = self.repo.find_commit(oid)?;

            let message = commit.message().unwrap_or("(empty message)").to_string();
            let author = commit.author().name().unwrap_or("unknown").to_string();

            commits.push(CommitInfo {
                hash: oid.to_string(),
                message,
                author,
            });
        }

        commits.reverse();
        Ok(commits)
    }

    fn create_tag(&self, name: &str, oid: Oid) -> Result<()> {
        let object = self
            .repo
            .find_object(oid, None)
            .map_err(|e| CommitverError::tag(format!("Cannot find object: {}", e)))?;

        self.repo
            .tag_lightweight(name, &object, false)
            .map_err(|e| CommitverError::tag(format!("Cannot create tag: {}", e)))?;

        Ok(())
    }

    fn push_tag(&self, remote: &str, tag_name: &str) -> Result<()> {
        let mut remote = self
            .repo
            .find_remote(remote)
            .map_err(|e| CommitverError::remote(format!("Cannot find remote: {}", e)))?;

        let refspec = format!("refs/tags/{}:refs/tags/{}", tag_name, tag_name);

        remote
            .push(&[refspec.as_str()], None)
            .map_err(|e| CommitverError::remote(format!("Push failed: {}", e)))?;

        Ok(())
    }

    fn fetch_from_remote(&self, remote: &str) -> Result<()> {
        let mut remote = self
            .repo
            .find_remote(remote)
            .map_err(|e| CommitverError::remote(format!("Cannot find remote: {}", e)))?;

        remote
            .fetch(&[] as &[&str], None, None)
            .map_err(|e| CommitverError::remote(format!("Fetch failed: {}", e)))?;

        Ok(())
    }
}

// SAFETY: Git2Repository wraps git2::Repository which is Send.
// git2 is thread-safe for read operations via libgit2's thread-safe design.
unsafe impl Sync for Git2Repository {}
