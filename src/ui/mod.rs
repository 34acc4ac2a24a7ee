//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, Write};

use anyhow::Result;

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_changelog, display_classify_warnings,
    display_commit_analysis, display_error, display_proposed_tag, display_status, display_success,
};

/// Ask a yes/no question, defaulting to no.
///
/// # Arguments
/// * `prompt` - Question shown to the user
///
/// # Returns
/// * `Ok(true)` - User answered yes
/// * `Ok(false)` - Any other answer, including empty input
pub fn confirm_action(prompt: &str) -> Result<bool> {
    print!("\n{} (y/N): ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
