//! Pre-release identifier handling.
//!
//! Identifiers follow the project convention of a counter concatenated to
//! the label, e.g. "rc0", "rc1", "beta2", or a bare label like "nightly".

use crate::error::{CommitverError, Result};
use std::fmt;
use std::str::FromStr;

/// Label used by the auto-incrementing release-candidate flow.
pub const RC_LABEL: &str = "rc";

/// Pre-release identifier with an optional trailing counter.
///
/// # Examples
/// - "rc0" -> PreRelease { label: "rc", counter: Some(0) }
/// - "beta" -> PreRelease { label: "beta", counter: None }
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PreRelease {
    pub label: String,
    pub counter: Option<u32>,
}

impl PreRelease {
    /// Create a pre-release identifier from parts.
    pub fn new(label: impl Into<String>, counter: Option<u32>) -> Self {
        PreRelease {
            label: label.into(),
            counter,
        }
    }

    /// Create a release-candidate identifier with the given counter.
    pub fn rc(counter: u32) -> Self {
        PreRelease::new(RC_LABEL, Some(counter))
    }

    /// Whether this identifier belongs to the `rc` counter flow.
    pub fn is_rc(&self) -> bool {
        self.label == RC_LABEL
    }

    /// Advance the counter. A bare label starts counting at 0.
    pub fn increment(&self) -> Self {
        PreRelease {
            label: self.label.clone(),
            counter: Some(self.counter.map_or(0, |n| n + 1)),
        }
    }
}

impl FromStr for PreRelease {
    type Err = CommitverError;

    /// Parse an identifier, splitting off a trailing decimal counter.
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(CommitverError::version("Empty pre-release identifier"));
        }

        if !s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(CommitverError::version(format!(
                "Invalid pre-release identifier: '{}'",
                s
            )));
        }

        let digits_at = s
            .char_indices()
            .rev()
            .take_while(|(_, c)| c.is_ascii_digit())
            .last()
            .map(|(i, _)| i);

        match digits_at {
            Some(0) => Err(CommitverError::version(format!(
                "Pre-release identifier cannot be purely numeric: '{}'",
                s
            ))),
            Some(i) => {
                let counter = s[i..].parse::<u32>().map_err(|_| {
                    CommitverError::version(format!("Invalid pre-release counter in '{}'", s))
                })?;
                Ok(PreRelease::new(&s[..i], Some(counter)))
            }
            None => Ok(PreRelease::new(s, None)),
        }
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)?;
        if let Some(n) = self.counter {
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rc_with_counter() {
        let pr: PreRelease = "rc0".parse().unwrap();
        assert_eq!(pr.label, "rc");
        assert_eq!(pr.counter, Some(0));
        assert!(pr.is_rc());
    }

    #[test]
    fn test_parse_bare_label() {
        let pr: PreRelease = "nightly".parse().unwrap();
        assert_eq!(pr.label, "nightly");
        assert_eq!(pr.counter, None);
        assert!(!pr.is_rc());
    }

    #[test]
    fn test_parse_label_with_embedded_digits() {
        // only the trailing run of digits is the counter
        let pr: PreRelease = "beta2x3".parse().unwrap();
        assert_eq!(pr.label, "beta2x");
        assert_eq!(pr.counter, Some(3));
    }

    #[test]
    fn test_parse_multi_digit_counter() {
        let pr: PreRelease = "rc12".parse().unwrap();
        assert_eq!(pr.counter, Some(12));
    }

    #[test]
    fn test_parse_invalid() {
        assert!("".parse::<PreRelease>().is_err());
        assert!("rc.0".parse::<PreRelease>().is_err());
        assert!("rc_0".parse::<PreRelease>().is_err());
        assert!("123".parse::<PreRelease>().is_err());
    }

    #[test]
    fn test_increment() {
        let pr = PreRelease::rc(0);
        assert_eq!(pr.increment(), PreRelease::rc(1));
    }

    #[test]
    fn test_increment_from_bare_label() {
        let pr = PreRelease::new("beta", None);
        assert_eq!(pr.increment().counter, Some(0));
    }

    #[test]
    fn test_display() {
        assert_eq!(PreRelease::rc(3).to_string(), "rc3");
        assert_eq!(PreRelease::new("nightly", None).to_string(), "nightly");
    }

    #[test]
    fn test_display_roundtrip() {
        for s in ["rc0", "rc10", "beta1", "nightly"] {
            let pr: PreRelease = s.parse().unwrap();
            assert_eq!(pr.to_string(), s);
        }
    }
}
