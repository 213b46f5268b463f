// lib.rs - regex-rename library root

//! # regex-rename - Batch file renamer driven by anchored regular expressions
//!
//! Renames every file (and optionally directory) under a target whose name
//! matches a pattern, building the new name from a replacement template.
//!
//! ## Features
//!
//! - **Whole-name matching**: patterns are anchored at both ends
//! - **Capture templates**: `$1`, `${name}` and `$$` in the replacement
//! - **Recursive walks**: deterministic, name-sorted traversal
//! - **Collision policy**: interactive overwrite prompt, or unconditional overwrite
//! - **Rename log**: optional TSV record of every rename
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use regex_rename::prelude::*;
//!
//! let pattern = CompiledPattern::new("IMG_(\\d+)\\.jpeg", false)?;
//! let config = RenameConfig {
//!     target: Target::Directory("photos".into()),
//!     pattern,
//!     pattern_source: "IMG_(\\d+)\\.jpeg".to_string(),
//!     replacement: "photo-$1.jpg".to_string(),
//!     case_sensitive: false,
//!     overwrite: false,
//!     verbose: true,
//!     recursive: true,
//!     entry_kinds: EntryKinds::Files,
//!     log_path: None,
//! };
//!
//! let stats = Renamer::new(&config, ConsolePrompt::stdio()).run()?;
//! println!("{}", stats);
//! # Ok::<(), String>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod core;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, Config};
    pub use crate::core::{CompiledPattern, ConsolePrompt, OverwritePrompt};
    pub use crate::core::{EntryKinds, RenameConfig, RenameOutcome, RenameStats, Renamer, Target};
    pub use crate::output::RenameLog;
}

// Re-export main types at the root level for convenience
pub use cli::Args;
pub use core::{CompiledPattern, RenameConfig, RenameStats, Renamer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "regex-rename v{} - Batch file renamer driven by regular expressions",
        VERSION
    )
}
