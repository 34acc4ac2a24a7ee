//! Git operations abstraction layer
//!
//! Provides a trait-based abstraction over the git operations commitver
//! needs, with a real implementation backed by the `git2` crate and a mock
//! implementation for testing.
//!
//! Most code should depend on the [Repository] trait rather than concrete
//! implementations to enable easy testing.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use git2::Oid;

/// Commit information for analysis
#[derive(Debug, Clone, PartialEq)]
pub struct CommitInfo {
    /// The commit hash
    pub hash: String,
    /// The commit message
    pub message: String,
    /// The commit author
    pub author: String,
}

/// Common git operation trait for abstraction
///
/// All implementors must be `Send + Sync`. Methods return
/// [crate::error::Result] which maps underlying git errors to
/// [crate::error::CommitverError] variants.
pub trait Repository: Send + Sync {
    /// The OID of the current HEAD commit.
    fn head_oid(&self) -> Result<Oid>;

    /// Tag names reachable from HEAD, in ancestry order (oldest first).
    ///
    /// This is the ordering version history queries rely on; it is by
    /// commit position, never lexical.
    fn tags_in_ancestry(&self) -> Result<Vec<String>>;

    /// Commit messages since the given tag (exclusive), oldest first.
    ///
    /// With `None`, returns every commit reachable from HEAD (initial
    /// release case).
    fn commits_since(&self, tag_name: Option<&str>) -> Result<Vec<CommitInfo>>;

    /// Create a lightweight tag at the given OID.
    fn create_tag(&self, name: &str, oid: Oid) -> Result<()>;

    /// Push a single tag to a remote.
    fn push_tag(&self, remote: &str, tag_name: &str) -> Result<()>;

    /// Fetch the remote's configured refspecs (branches and tags).
    fn fetch_from_remote(&self, remote: &str) -> Result<()>;
}
