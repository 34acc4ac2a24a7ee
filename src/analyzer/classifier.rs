use std::fmt;

use crate::config::Config;
use crate::domain::ParsedCommit;

/// Per-commit conditions recovered during classification.
/// These are non-fatal and reported to the user, never aborting the run.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifyWarning {
    /// Commit message does not match the conventional commit grammar
    Unparseable { message: String, reason: String },
    /// Commit parsed but its type is absent from the configured type table
    UnknownType {
        message: String,
        commit_type: String,
    },
}

impl fmt::Display for ClassifyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifyWarning::Unparseable { message, reason } => {
                write!(f, "Unparseable commit '{}': {}", summary(message), reason)
            }
            ClassifyWarning::UnknownType {
                message,
                commit_type,
            } => {
                write!(
                    f,
                    "Commit with unknown type '{}': '{}'",
                    commit_type,
                    summary(message)
                )
            }
        }
    }
}

/// First line of a message, truncated for display.
fn summary(message: &str) -> &str {
    let first = message.lines().next().unwrap_or("");
    match first.char_indices().nth(60) {
        Some((idx, _)) => &first[..idx],
        None => first,
    }
}

/// Result of classifying a batch of raw commit messages.
///
/// Carries the surviving commits together with the accumulated warnings so
/// classification stays pure; callers decide whether to display the
/// warnings (and can simply ignore them when re-deriving for the changelog).
#[derive(Debug, Clone, Default)]
pub struct Classification {
    pub commits: Vec<ParsedCommit>,
    pub warnings: Vec<ClassifyWarning>,
}

/// Filters raw commit messages against the configured type table.
pub struct CommitClassifier {
    config: Config,
}

impl CommitClassifier {
    /// Create a new classifier
    pub fn new(config: Config) -> Self {
        CommitClassifier { config }
    }

    /// Classify raw commit messages, preserving input order.
    ///
    /// Unparseable messages and messages with unknown types are dropped
    /// from the commit list and recorded as warnings. This never fails as
    /// a whole; it degrades by omission.
    pub fn classify<S: AsRef<str>>(&self, messages: &[S]) -> Classification {
        let mut result = Classification::default();

        for message in messages {
            let message = message.as_ref();
            match ParsedCommit::parse(message) {
                Ok(commit) => {
                    if self.config.weight_of(&commit.r#type).is_some() {
                        result.commits.push(commit);
                    } else {
                        result.warnings.push(ClassifyWarning::UnknownType {
                            message: message.to_string(),
                            commit_type: commit.r#type,
                        });
                    }
                }
                Err(e) => {
                    result.warnings.push(ClassifyWarning::Unparseable {
                        message: message.to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        result
    }
}
