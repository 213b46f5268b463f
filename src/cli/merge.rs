// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Flags: a switch given on the command line stays on; the config file
        // can only turn on what the command line left off
        if !self.case_sensitive && config.case_sensitive.unwrap_or(false) {
            self.case_sensitive = true;
        }
        if !self.overwrite && config.overwrite.unwrap_or(false) {
            self.overwrite = true;
        }
        if !self.recursive && config.recursive.unwrap_or(false) {
            self.recursive = true;
        }
        if !self.directories && config.directories.unwrap_or(false) {
            self.directories = true;
        }
        if !self.directories_only && config.directories_only.unwrap_or(false) {
            self.directories_only = true;
        }
        if !self.verbose && config.verbose.unwrap_or(false) {
            self.verbose = true;
        }

        // Output
        if self.log.is_none() {
            self.log = config.log;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}
