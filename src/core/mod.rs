// mod.rs - Core logic module

pub mod pattern;
pub mod prompt;
pub mod renamer;

// Re-export main types for convenience
pub use pattern::{anchor_pattern, normalize_template, CompiledPattern};
pub use prompt::{ConsolePrompt, OverwritePrompt};
pub use renamer::{EntryKinds, RenameConfig, RenameOutcome, RenameStats, Renamer, Target};
