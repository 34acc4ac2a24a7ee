use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{CommitverError, Result};

/// Semantic weight a commit type carries toward version determination.
///
/// `None` means the type is known (kept for the changelog) but never
/// contributes to the bump level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpWeight {
    Major,
    Minor,
    Patch,
    None,
}

/// Represents the complete configuration for commitver.
///
/// Contains the commit type table, tag formatting pattern, and behavior options.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// Tag name pattern with a `{version}` placeholder (e.g. "v{version}").
    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,

    /// Remote used for fetch and push.
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Mapping from lowercase commit type to its semantic weight.
    /// Types absent from this table are dropped with a warning.
    #[serde(default = "default_types")]
    pub types: HashMap<String, BumpWeight>,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

/// Returns the default commit type table.
fn default_types() -> HashMap<String, BumpWeight> {
    let mut types = HashMap::new();
    types.insert("feat".to_string(), BumpWeight::Minor);
    types.insert("fix".to_string(), BumpWeight::Patch);
    types.insert("perf".to_string(), BumpWeight::Patch);
    types.insert("refactor".to_string(), BumpWeight::Patch);
    types.insert("docs".to_string(), BumpWeight::None);
    types.insert("style".to_string(), BumpWeight::None);
    types.insert("test".to_string(), BumpWeight::None);
    types.insert("chore".to_string(), BumpWeight::None);
    types.insert("build".to_string(), BumpWeight::None);
    types.insert("ci".to_string(), BumpWeight::None);
    types
}

/// Configuration for behavior customization.
///
/// Controls runtime behavior of commitver without affecting version analysis.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    /// Skip the fetch from remote before analyzing history.
    #[serde(default)]
    pub skip_fetch: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tag_pattern: default_tag_pattern(),
            remote: default_remote(),
            types: default_types(),
            behavior: BehaviorConfig::default(),
        }
    }
}

impl Config {
    /// Look up the semantic weight of a commit type (already lowercase).
    pub fn weight_of(&self, commit_type: &str) -> Option<BumpWeight> {
        self.types.get(commit_type).copied()
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `commitver.toml` in current directory
/// 3. `~/.config/.commitver.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./commitver.toml").exists() {
        fs::read_to_string("./commitver.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".commitver.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| CommitverError::config(format!("Invalid configuration: {}", e)))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_types() {
        let config = Config::default();
        assert_eq!(config.weight_of("feat"), Some(BumpWeight::Minor));
        assert_eq!(config.weight_of("fix"), Some(BumpWeight::Patch));
        assert_eq!(config.weight_of("docs"), Some(BumpWeight::None));
        assert_eq!(config.weight_of("wip"), None);
    }

    #[test]
    fn test_default_pattern_and_remote() {
        let config = Config::default();
        assert_eq!(config.tag_pattern, "v{version}");
        assert_eq!(config.remote, "origin");
        assert!(!config.behavior.skip_fetch);
    }

    #[test]
    fn test_parse_custom_types() {
        let toml_content = r#"
tag_pattern = "release-{version}"

[types]
feat = "minor"
fix = "patch"
breaking = "major"
"#;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.tag_pattern, "release-{version}");
        assert_eq!(config.weight_of("breaking"), Some(BumpWeight::Major));
        // custom table replaces the defaults entirely
        assert_eq!(config.weight_of("docs"), None);
    }

    #[test]
    fn test_parse_behavior() {
        let toml_content = r#"
[behavior]
skip_fetch = true
"#;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert!(config.behavior.skip_fetch);
        // unspecified sections fall back to defaults
        assert_eq!(config.weight_of("feat"), Some(BumpWeight::Minor));
    }

    #[test]
    fn test_invalid_weight_rejected() {
        let toml_content = r#"
[types]
feat = "gigantic"
"#;
        assert!(toml::from_str::<Config>(toml_content).is_err());
    }
}
