// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Flag defaults read from a TOML file
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    // Matching
    pub case_sensitive: Option<bool>,

    // Collisions
    pub overwrite: Option<bool>,

    // Traversal
    pub recursive: Option<bool>,
    pub directories: Option<bool>,
    pub directories_only: Option<bool>,

    // Output
    pub verbose: Option<bool>,
    pub log: Option<String>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# rename.toml - Configuration file for rename
# Command line flags override these settings. Switches can only be turned
# on from the command line, so a value set to true here cannot be turned
# off there; leave it false or comment it out instead.

# =============================================================================
# MATCHING
# =============================================================================

# Match file names case-sensitively (default: case-insensitive)
case_sensitive = false

# =============================================================================
# COLLISIONS
# =============================================================================

# (Potentially dangerous) Replace existing files of the same name without
# asking first
overwrite = false

# =============================================================================
# TRAVERSAL
# =============================================================================

# Descend into subdirectories of the target directory
recursive = false

# Rename directories as well as files
directories = false

# Rename only directories
directories_only = false

# =============================================================================
# OUTPUT
# =============================================================================

# Print every rename and a final summary
verbose = false

# Write a TSV log of every rename to this file
# log = "rename-log.tsv"
"#
        .to_string()
    }
}
