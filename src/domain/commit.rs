use regex::Regex;

use crate::error::{CommitverError, Result};

/// Parsed representation of a conventional commit message.
///
/// Supported grammar (type token is case-insensitive):
/// - `type(scope,scope): description`
/// - `type(scope)!: description`
/// - `!type: description`
/// - `type: description`
/// followed by an optional body; a body line starting with
/// `BREAKING CHANGE:` marks the commit as breaking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommit {
    pub r#type: String,
    pub scopes: Vec<String>,
    pub description: String,
    pub body: Option<String>,
    pub breaking: bool,
}

impl ParsedCommit {
    /// Parse a commit message.
    ///
    /// Fails with [CommitverError::Parse] when the summary line does not
    /// match the grammar (missing `: ` separator, missing type token,
    /// malformed scope parens). Never produces a partial record.
    pub fn parse(message: &str) -> Result<Self> {
        let mut lines = message.lines();
        let summary = lines.next().unwrap_or("");

        let re = Regex::new(r"^(!?)([A-Za-z]+)(?:\(([^()]*)\))?(!?): +(.*)$")
            .map_err(|e| CommitverError::parse(e.to_string()))?;

        let captures = re.captures(summary).ok_or_else(|| {
            CommitverError::parse(format!("Not a conventional commit: '{}'", summary))
        })?;

        let leading_bang = captures.get(1).map(|m| m.as_str()) == Some("!");
        let r#type = captures
            .get(2)
            .map(|m| m.as_str().to_lowercase())
            .unwrap_or_default();
        let scopes = captures
            .get(3)
            .map(|m| {
                m.as_str()
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        let trailing_bang = captures.get(4).map(|m| m.as_str()) == Some("!");
        let description = captures
            .get(5)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        let body_text = lines.collect::<Vec<_>>().join("\n");
        let body_text = body_text.trim();
        let body = if body_text.is_empty() {
            None
        } else {
            Some(body_text.to_string())
        };

        let breaking_footer = body
            .as_deref()
            .map(|b| {
                b.lines().any(|line| {
                    line.starts_with("BREAKING CHANGE:") || line.starts_with("BREAKING-CHANGE:")
                })
            })
            .unwrap_or(false);

        Ok(ParsedCommit {
            r#type,
            scopes,
            description,
            body,
            breaking: leading_bang || trailing_bang || breaking_footer,
        })
    }
}
