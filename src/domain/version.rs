use std::cmp::Ordering;
use std::fmt;

use crate::domain::prerelease::PreRelease;
use crate::error::{CommitverError, Result};

/// Version bump severity, ordered `None < Patch < Minor < Major`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Bump {
    None,
    Patch,
    Minor,
    Major,
}

impl Bump {
    /// Derive the bump severity that turned `base` into `candidate` by
    /// diffing numeric components. A zero delta yields `Bump::None`, which
    /// callers treat as "recompute" when comparing against a fresh bump.
    pub fn between(base: &Version, candidate: &Version) -> Bump {
        if candidate.major > base.major {
            Bump::Major
        } else if candidate.minor > base.minor {
            Bump::Minor
        } else if candidate.patch > base.patch {
            Bump::Patch
        } else {
            Bump::None
        }
    }
}

impl fmt::Display for Bump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bump::None => write!(f, "none"),
            Bump::Patch => write!(f, "patch"),
            Bump::Minor => write!(f, "minor"),
            Bump::Major => write!(f, "major"),
        }
    }
}

/// Semantic version representation with optional pre-release and build parts.
///
/// Canonical text form: `MAJOR.MINOR.PATCH[-PRE][+BUILD]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub pre_release: Option<PreRelease>,
    pub build: Option<String>,
}

impl Version {
    /// Create a plain release version.
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: None,
            build: None,
        }
    }

    /// Parse a version from its canonical text form (no tag prefix).
    pub fn parse(text: &str) -> Result<Self> {
        let (core_and_pre, build) = match text.split_once('+') {
            Some((head, build)) if !build.is_empty() => (head, Some(build.to_string())),
            Some(_) => {
                return Err(CommitverError::version(format!(
                    "Empty build metadata in '{}'",
                    text
                )))
            }
            None => (text, None),
        };

        let (core, pre_release) = match core_and_pre.split_once('-') {
            Some((core, pre)) => (core, Some(pre.parse::<PreRelease>()?)),
            None => (core_and_pre, None),
        };

        let parts: Vec<&str> = core.split('.').collect();
        if parts.len() != 3 {
            return Err(CommitverError::version(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                text
            )));
        }

        let major = parts[0]
            .parse::<u32>()
            .map_err(|_| CommitverError::version(format!("Invalid major version: {}", parts[0])))?;
        let minor = parts[1]
            .parse::<u32>()
            .map_err(|_| CommitverError::version(format!("Invalid minor version: {}", parts[1])))?;
        let patch = parts[2]
            .parse::<u32>()
            .map_err(|_| CommitverError::version(format!("Invalid patch version: {}", parts[2])))?;

        Ok(Version {
            major,
            minor,
            patch,
            pre_release,
            build,
        })
    }

    /// Apply a bump to the numeric components, dropping any pre-release
    /// or build part. `Bump::None` keeps the numbers unchanged.
    pub fn bump(&self, bump: Bump) -> Self {
        match bump {
            Bump::Major => Version::new(self.major + 1, 0, 0),
            Bump::Minor => Version::new(self.major, self.minor + 1, 0),
            Bump::Patch => Version::new(self.major, self.minor, self.patch + 1),
            Bump::None => Version::new(self.major, self.minor, self.patch),
        }
    }

    /// The numeric components only, pre-release and build stripped.
    pub fn numeric(&self) -> Self {
        Version::new(self.major, self.minor, self.patch)
    }

    /// Whether this version carries a pre-release identifier.
    pub fn is_pre_release(&self) -> bool {
        self.pre_release.is_some()
    }

    /// Return this version with the given pre-release identifier.
    pub fn with_pre_release(mut self, pre: PreRelease) -> Self {
        self.pre_release = Some(pre);
        self
    }

    /// Return this version with build metadata attached verbatim.
    pub fn with_build(mut self, build: impl Into<String>) -> Self {
        self.build = Some(build.into());
        self
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    /// Numeric components first; a pre-release sorts below the same
    /// numeric version without one. Build metadata only tie-breaks so the
    /// ordering stays consistent with equality.
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (&self.pre_release, &other.pre_release) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(b),
            })
            .then_with(|| self.build.cmp(&other.build))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(ref pre) = self.pre_release {
            write!(f, "-{}", pre)?;
        }
        if let Some(ref build) = self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v, Version::new(1, 2, 3));
    }

    #[test]
    fn test_version_parse_pre_release() {
        let v = Version::parse("1.3.0-rc0").unwrap();
        assert_eq!(v.numeric(), Version::new(1, 3, 0));
        assert_eq!(v.pre_release, Some(PreRelease::rc(0)));
        assert!(v.is_pre_release());
    }

    #[test]
    fn test_version_parse_build() {
        let v = Version::parse("1.2.3+linux-x64").unwrap();
        assert_eq!(v.build, Some("linux-x64".to_string()));
        assert_eq!(v.pre_release, None);
    }

    #[test]
    fn test_version_parse_pre_release_and_build() {
        let v = Version::parse("2.0.0-rc1+abc123").unwrap();
        assert_eq!(v.pre_release, Some(PreRelease::rc(1)));
        assert_eq!(v.build, Some("abc123".to_string()));
    }

    #[test]
    fn test_version_parse_invalid() {
        assert!(Version::parse("1.2").is_err());
        assert!(Version::parse("1.2.3.4").is_err());
        assert!(Version::parse("1.2.x").is_err());
        assert!(Version::parse("1.2.3+").is_err());
    }

    #[test]
    fn test_version_bump_major() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(Bump::Major), Version::new(2, 0, 0));
    }

    #[test]
    fn test_version_bump_minor() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(Bump::Minor), Version::new(1, 3, 0));
    }

    #[test]
    fn test_version_bump_patch() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(Bump::Patch), Version::new(1, 2, 4));
    }

    #[test]
    fn test_version_bump_none() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(Bump::None), Version::new(1, 2, 3));
    }

    #[test]
    fn test_version_bump_strips_pre_release() {
        let v = Version::parse("1.3.0-rc0").unwrap();
        assert_eq!(v.bump(Bump::Minor), Version::new(1, 4, 0));
    }

    #[test]
    fn test_version_display() {
        assert_eq!(Version::new(1, 2, 3).to_string(), "1.2.3");
        assert_eq!(
            Version::new(1, 3, 0).with_pre_release(PreRelease::rc(1)).to_string(),
            "1.3.0-rc1"
        );
        assert_eq!(
            Version::new(1, 3, 0)
                .with_pre_release(PreRelease::rc(0))
                .with_build("b42")
                .to_string(),
            "1.3.0-rc0+b42"
        );
    }

    #[test]
    fn test_bump_severity_order() {
        assert!(Bump::Major > Bump::Minor);
        assert!(Bump::Minor > Bump::Patch);
        assert!(Bump::Patch > Bump::None);
    }

    #[test]
    fn test_bump_between() {
        let base = Version::new(1, 2, 3);
        assert_eq!(Bump::between(&base, &Version::new(2, 0, 0)), Bump::Major);
        assert_eq!(Bump::between(&base, &Version::new(1, 3, 0)), Bump::Minor);
        assert_eq!(Bump::between(&base, &Version::new(1, 2, 4)), Bump::Patch);
        assert_eq!(Bump::between(&base, &Version::new(1, 2, 3)), Bump::None);
    }

    #[test]
    fn test_pre_release_has_lower_precedence() {
        let release = Version::new(1, 3, 0);
        let rc = Version::parse("1.3.0-rc0").unwrap();
        assert!(rc < release);
        assert!(Version::parse("1.3.0-rc0").unwrap() < Version::parse("1.3.0-rc1").unwrap());
        assert!(Version::new(1, 2, 9) < rc);
    }
}
