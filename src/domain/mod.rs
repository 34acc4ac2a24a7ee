//! Domain logic - pure version and commit rules independent of git operations

pub mod commit;
pub mod prerelease;
pub mod tag;
pub mod version;

pub use commit::ParsedCommit;
pub use prerelease::PreRelease;
pub use tag::{Tag, TagHistory, TagPattern};
pub use version::{Bump, Version};
