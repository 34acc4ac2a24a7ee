//! Pure formatting functions for UI output.
//!
//! All display logic lives here, separated from user interaction so the
//! interactive flow in the parent module stays small.

use console::style;

use crate::analyzer::{ChangelogSection, ClassifyWarning};
use crate::boundary::BoundaryWarning;
use crate::domain::Bump;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print a boundary warning.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    println!("{} {}", style("⚠").yellow().bold(), warning);
}

/// Print per-commit classification warnings, one line each.
pub fn display_classify_warnings(warnings: &[ClassifyWarning]) {
    for warning in warnings {
        println!("{} {}", style("⚠").yellow(), warning);
    }
}

/// First line of a commit message, truncated to 60 characters on a
/// char boundary.
fn summary_line(message: &str) -> &str {
    let first = message.lines().next().unwrap_or("");
    match first.char_indices().nth(60) {
        Some((idx, _)) => &first[..idx],
        None => first,
    }
}

/// Display the commit range being analyzed.
///
/// Shows up to 10 commit summaries; the remainder is summarized as a count.
pub fn display_commit_analysis(commit_messages: &[String], since: Option<&str>) {
    match since {
        Some(tag) => println!(
            "\n{}",
            style(format!("Analyzing commits since '{}'", tag)).bold()
        ),
        None => println!("\n{}", style("Analyzing all commits").bold()),
    }
    println!(
        "{}",
        style(format!("{} commits in range:", commit_messages.len())).underlined()
    );

    for (i, message) in commit_messages.iter().take(10).enumerate() {
        println!("  {}. {}", i + 1, summary_line(message));
    }

    if commit_messages.len() > 10 {
        println!("  ... and {} more commits", commit_messages.len() - 10);
    }
}

/// Display the proposed tag change (or initial tag).
pub fn display_proposed_tag(old_tag: Option<&str>, new_tag: &str, bump: Bump) {
    match old_tag {
        Some(old) => {
            println!("\n{} (bump: {})", style("Proposed Tag Change:").bold(), bump);
            println!("  From: {}", style(old).red());
            println!("  To:   {}", style(new_tag).green());
        }
        None => {
            println!("\n{}", style("Initial Tag:").bold());
            println!("  New tag: {}", style(new_tag).green());
        }
    }
}

/// Render the changelog entry for a release as markdown.
pub fn render_changelog(version_label: &str, sections: &[ChangelogSection]) -> String {
    let mut out = format!("## {}\n", version_label);

    for section in sections {
        out.push_str(&format!("\n### {}\n", section.r#type));
        for entry in &section.entries {
            if entry.scopes.is_empty() {
                out.push_str(&format!("- {}\n", entry.description));
            } else {
                out.push_str(&format!(
                    "- **{}**: {}\n",
                    entry.scopes.join(", "),
                    entry.description
                ));
            }
        }
    }

    out
}

/// Print the rendered changelog preview.
pub fn display_changelog(version_label: &str, sections: &[ChangelogSection]) {
    println!("\n{}", style("Changelog preview:").bold());
    for line in render_changelog(version_label, sections).lines() {
        println!("  {}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::aggregate;
    use crate::domain::ParsedCommit;

    fn sections(messages: &[&str]) -> Vec<ChangelogSection> {
        let commits: Vec<ParsedCommit> = messages
            .iter()
            .map(|m| ParsedCommit::parse(m).unwrap())
            .collect();
        aggregate(&commits)
    }

    #[test]
    fn test_render_changelog_sections() {
        let rendered = render_changelog(
            "v1.3.0",
            &sections(&["feat(api): add endpoint", "fix: null handling"]),
        );

        assert!(rendered.starts_with("## v1.3.0\n"));
        assert!(rendered.contains("### feat\n- **api**: add endpoint"));
        assert!(rendered.contains("### fix\n- null handling"));
    }

    #[test]
    fn test_render_changelog_multi_scope() {
        let rendered = render_changelog("v2.0.0", &sections(&["feat(core,api): both"]));
        assert!(rendered.contains("- **core, api**: both"));
    }

    #[test]
    fn test_render_changelog_empty() {
        let rendered = render_changelog("v1.0.1", &[]);
        assert_eq!(rendered, "## v1.0.1\n");
    }

    #[test]
    fn test_summary_line_truncates_long_first_line() {
        let message = format!("{}\nbody", "a".repeat(80));
        assert_eq!(summary_line(&message), "a".repeat(60));
    }

    #[test]
    fn test_summary_line_multibyte_boundary() {
        // byte 60 falls inside a two-byte character here
        let message = format!("wip: {}", "é".repeat(80));
        let short = summary_line(&message);
        assert_eq!(short.chars().count(), 60);
        assert!(message.starts_with(short));
    }

    #[test]
    fn test_summary_line_short_message() {
        assert_eq!(summary_line("fix: ok"), "fix: ok");
    }
}
