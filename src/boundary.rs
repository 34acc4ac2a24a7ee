use std::fmt;

/// Warnings that occur when reading version history near repository
/// boundaries. These are non-fatal issues that should be reported to the
/// user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No new commits since the latest stable tag
    NoNewCommits {
        latest_tag: String,
        current_commit_hash: String,
    },
    /// Tag exists but does not match the pattern or parse as a version
    UnparsableTag { tag: String },
    /// An in-flight pre-release tag has no numeric delta against its base,
    /// so the bump that produced it cannot be derived; the version will be
    /// recomputed from the base tag.
    AmbiguousPreRelease { tag: String, base: String },
    /// Fetch from remote failed; analysis continues on local data
    FetchFailed { remote: String, reason: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoNewCommits {
                latest_tag,
                current_commit_hash,
            } => {
                let short_hash = if current_commit_hash.len() > 7 {
                    &current_commit_hash[..7]
                } else {
                    current_commit_hash.as_str()
                };
                write!(
                    f,
                    "No new commits since tag '{}' (current: {})",
                    latest_tag, short_hash
                )
            }
            BoundaryWarning::UnparsableTag { tag } => {
                write!(f, "Ignoring tag '{}': not a recognized version", tag)
            }
            BoundaryWarning::AmbiguousPreRelease { tag, base } => {
                write!(
                    f,
                    "Pre-release tag '{}' has no version delta against base '{}'; recomputing from base",
                    tag, base
                )
            }
            BoundaryWarning::FetchFailed { remote, reason } => {
                write!(
                    f,
                    "Could not fetch from remote '{}': {}. Using local data.",
                    remote, reason
                )
            }
        }
    }
}
