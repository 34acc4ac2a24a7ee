use crate::domain::version::Version;
use crate::error::{CommitverError, Result};

/// A version tag read from repository history.
///
/// `position` is the tag's index in ancestry order (older tags have lower
/// positions); ordering between tags is by position, never lexical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub version: Version,
    pub position: usize,
}

/// Tag naming pattern (e.g., "v{version}", "release-{version}")
#[derive(Debug, Clone)]
pub struct TagPattern {
    pub pattern: String,
}

const VERSION_RE: &str = r"(\d+\.\d+\.\d+(?:-[0-9A-Za-z-]+)?(?:\+[0-9A-Za-z.-]+)?)";

impl TagPattern {
    /// Create a new tag pattern. The pattern must contain a `{version}`
    /// placeholder.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if !pattern.contains("{version}") {
            return Err(CommitverError::tag(
                "Pattern must contain {version} placeholder",
            ));
        }
        Ok(TagPattern { pattern })
    }

    /// Format a version according to pattern.
    /// Example: pattern="v{version}", version="1.2.3-rc0" -> "v1.2.3-rc0"
    pub fn format(&self, version: &Version) -> String {
        self.pattern.replace("{version}", &version.to_string())
    }

    /// Extract the version text from a tag name, if it matches the pattern.
    pub fn extract(&self, tag: &str) -> Option<String> {
        let escaped = regex::escape(&self.pattern);
        let regex_pattern = escaped.replace(r"\{version\}", VERSION_RE);

        let re = regex::Regex::new(&format!("^{}$", regex_pattern)).ok()?;
        re.captures(tag)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Validate if a tag matches this pattern.
    pub fn matches(&self, tag: &str) -> bool {
        self.extract(tag).is_some()
    }
}

/// Ancestry-ordered tag history with the queries version determination
/// needs. Tag names that do not match the pattern or do not parse as
/// versions never enter the history; they are kept aside for reporting.
#[derive(Debug, Clone, Default)]
pub struct TagHistory {
    tags: Vec<Tag>,
    skipped: Vec<String>,
}

impl TagHistory {
    /// Build a history from tag names in ancestry order (oldest first).
    pub fn from_names<S: AsRef<str>>(names: &[S], pattern: &TagPattern) -> Self {
        let mut tags = Vec::new();
        let mut skipped = Vec::new();

        for name in names {
            let name = name.as_ref();
            match pattern.extract(name).map(|text| Version::parse(&text)) {
                Some(Ok(version)) => {
                    tags.push(Tag {
                        name: name.to_string(),
                        version,
                        position: tags.len(),
                    });
                }
                _ => skipped.push(name.to_string()),
            }
        }

        TagHistory { tags, skipped }
    }

    /// All parsed tags, oldest first.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Tag names that did not match the pattern or failed to parse.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Most recent non-prerelease tag; the base every bump starts from.
    pub fn latest_stable(&self) -> Option<&Tag> {
        self.tags
            .iter()
            .rev()
            .find(|t| !t.version.is_pre_release())
    }

    /// Most recent pre-release tag created after the given tag.
    pub fn latest_prerelease_after(&self, base: &Tag) -> Option<&Tag> {
        self.tags
            .iter()
            .rev()
            .find(|t| t.position > base.position && t.version.is_pre_release())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(names: &[&str]) -> TagHistory {
        let pattern = TagPattern::new("v{version}").unwrap();
        TagHistory::from_names(names, &pattern)
    }

    #[test]
    fn test_pattern_requires_placeholder() {
        assert!(TagPattern::new("v1.2.3").is_err());
        assert!(TagPattern::new("v{version}").is_ok());
    }

    #[test]
    fn test_pattern_format() {
        let pattern = TagPattern::new("v{version}").unwrap();
        assert_eq!(pattern.format(&Version::new(1, 2, 3)), "v1.2.3");

        let pattern = TagPattern::new("release-{version}").unwrap();
        assert_eq!(pattern.format(&Version::new(1, 2, 3)), "release-1.2.3");
    }

    #[test]
    fn test_pattern_extract() {
        let pattern = TagPattern::new("v{version}").unwrap();
        assert_eq!(pattern.extract("v1.2.3"), Some("1.2.3".to_string()));
        assert_eq!(pattern.extract("v1.3.0-rc0"), Some("1.3.0-rc0".to_string()));
        assert_eq!(
            pattern.extract("v1.3.0-rc0+b7"),
            Some("1.3.0-rc0+b7".to_string())
        );
        assert_eq!(pattern.extract("release-1.2.3"), None);
        assert_eq!(pattern.extract("v1.2"), None);
    }

    #[test]
    fn test_pattern_matches() {
        let pattern = TagPattern::new("v{version}").unwrap();
        assert!(pattern.matches("v1.2.3"));
        assert!(!pattern.matches("nightly-build"));
    }

    #[test]
    fn test_history_skips_unparseable() {
        let h = history(&["v1.0.0", "nightly", "v1.1.0"]);
        assert_eq!(h.tags().len(), 2);
        assert_eq!(h.skipped(), &["nightly".to_string()]);
        // positions stay contiguous over parsed tags
        assert_eq!(h.tags()[1].position, 1);
    }

    #[test]
    fn test_latest_stable_skips_prereleases() {
        let h = history(&["v1.0.0", "v1.2.3", "v1.3.0-rc0"]);
        let base = h.latest_stable().unwrap();
        assert_eq!(base.version, Version::new(1, 2, 3));
    }

    #[test]
    fn test_latest_prerelease_after() {
        let h = history(&["v1.2.0-rc0", "v1.2.3", "v1.3.0-rc0", "v1.3.0-rc1"]);
        let base = h.latest_stable().unwrap();
        let pre = h.latest_prerelease_after(base).unwrap();
        assert_eq!(pre.name, "v1.3.0-rc1");
    }

    #[test]
    fn test_prerelease_before_base_is_ignored() {
        let h = history(&["v1.3.0-rc0", "v1.3.0"]);
        let base = h.latest_stable().unwrap();
        assert!(h.latest_prerelease_after(base).is_none());
    }

    #[test]
    fn test_empty_history() {
        let h = history(&[]);
        assert!(h.is_empty());
        assert!(h.latest_stable().is_none());
    }

    #[test]
    fn test_ordering_is_by_position_not_lexical() {
        // v1.10.0 released after v1.9.0 even though it sorts lower lexically
        let h = history(&["v1.9.0", "v1.10.0"]);
        assert_eq!(h.latest_stable().unwrap().name, "v1.10.0");
    }
}
