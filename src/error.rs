use thiserror::Error;

/// Unified error type for commitver operations
#[derive(Error, Debug)]
pub enum CommitverError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Commit parsing error: {0}")]
    Parse(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    /// No commit in range justifies a bump and --force-patch was not set.
    /// Surfaced explicitly so the caller can decide instead of re-tagging
    /// the old version.
    #[error("No commit in range justifies a version bump")]
    NoVersionChange,

    /// No prior non-prerelease tag exists; the caller must decide whether
    /// this is an initial release.
    #[error("No non-prerelease base tag found in history")]
    MissingBaseTag,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in commitver
pub type Result<T> = std::result::Result<T, CommitverError>;

impl CommitverError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        CommitverError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        CommitverError::Version(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        CommitverError::Tag(msg.into())
    }

    /// Create a commit parse error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        CommitverError::Parse(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        CommitverError::Remote(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CommitverError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CommitverError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(CommitverError::version("test")
            .to_string()
            .contains("Version"));
        assert!(CommitverError::tag("test").to_string().contains("Tag"));
        assert!(CommitverError::parse("test")
            .to_string()
            .contains("Commit parsing"));
    }

    #[test]
    fn test_error_all_variants() {
        let errors = vec![
            CommitverError::config("config issue"),
            CommitverError::version("version issue"),
            CommitverError::tag("tag issue"),
            CommitverError::parse("parse issue"),
            CommitverError::remote("remote issue"),
            CommitverError::NoVersionChange,
            CommitverError::MissingBaseTag,
        ];

        for err in errors {
            let msg = err.to_string();
            assert!(!msg.is_empty());
        }
    }

    #[test]
    fn test_whole_run_variants_are_matchable() {
        let err = CommitverError::NoVersionChange;
        assert!(matches!(err, CommitverError::NoVersionChange));

        let err = CommitverError::MissingBaseTag;
        assert!(matches!(err, CommitverError::MissingBaseTag));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (CommitverError::config("x"), "Configuration error"),
            (CommitverError::version("x"), "Version parsing error"),
            (CommitverError::tag("x"), "Tag error"),
            (CommitverError::parse("x"), "Commit parsing error"),
            (CommitverError::remote("x"), "Remote operation failed"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_special_characters_in_messages() {
        let special_chars = vec![
            "message with\nnewline",
            "message with\ttab",
            "message with 'quotes'",
            "message with unicode: ñ",
        ];

        for msg in special_chars {
            let err = CommitverError::version(msg);
            let err_msg = err.to_string();
            assert!(err_msg.contains("Version"));
        }
    }
}
