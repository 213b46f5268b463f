// renamer.rs - Pattern-match-and-rename loop and collision policy

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::pattern::CompiledPattern;
use crate::core::prompt::OverwritePrompt;
use crate::output::RenameLog;

/// What a run is allowed to rename
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryKinds {
    #[default]
    Files,
    FilesAndDirectories,
    Directories,
}

impl EntryKinds {
    pub fn from_flags(directories: bool, directories_only: bool) -> Self {
        if directories_only {
            EntryKinds::Directories
        } else if directories {
            EntryKinds::FilesAndDirectories
        } else {
            EntryKinds::Files
        }
    }

    pub fn includes_files(self) -> bool {
        matches!(self, EntryKinds::Files | EntryKinds::FilesAndDirectories)
    }

    pub fn includes_directories(self) -> bool {
        matches!(self, EntryKinds::Directories | EntryKinds::FilesAndDirectories)
    }

    pub fn description(self) -> &'static str {
        match self {
            EntryKinds::Files => "files",
            EntryKinds::FilesAndDirectories => "files and directories",
            EntryKinds::Directories => "directories only",
        }
    }
}

/// Root of a run, resolved during validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    File(PathBuf),
    Directory(PathBuf),
}

impl Target {
    pub fn path(&self) -> &Path {
        match self {
            Target::File(p) | Target::Directory(p) => p,
        }
    }
}

/// Validated, immutable settings for one run
#[derive(Debug, Clone)]
pub struct RenameConfig {
    pub target: Target,
    pub pattern: CompiledPattern,
    /// Pattern exactly as given on the command line
    pub pattern_source: String,
    pub replacement: String,
    pub case_sensitive: bool,
    pub overwrite: bool,
    pub verbose: bool,
    pub recursive: bool,
    pub entry_kinds: EntryKinds,
    pub log_path: Option<PathBuf>,
}

/// Result of a single rename decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameOutcome {
    Unmatched,
    Unchanged,
    Renamed,
    Overwrote,
    Skipped,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenameStats {
    pub examined: usize,
    pub matched: usize,
    pub unchanged: usize,
    pub renamed: usize,
    pub overwritten: usize,
    pub skipped: usize,
}

impl RenameStats {
    fn record(&mut self, outcome: RenameOutcome) {
        self.examined += 1;
        match outcome {
            RenameOutcome::Unmatched => return,
            RenameOutcome::Unchanged => self.unchanged += 1,
            RenameOutcome::Renamed => self.renamed += 1,
            RenameOutcome::Overwrote => self.overwritten += 1,
            RenameOutcome::Skipped => self.skipped += 1,
        }
        self.matched += 1;
    }
}

impl fmt::Display for RenameStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} examined, {} matched, {} renamed, {} overwritten, {} skipped, {} unchanged",
            self.examined, self.matched, self.renamed, self.overwritten, self.skipped, self.unchanged
        )
    }
}

struct DirListing {
    files: Vec<PathBuf>,
    /// Subdirectories with a flag telling whether they are real (descendable)
    /// directories rather than symlinks to one
    dirs: Vec<(PathBuf, bool)>,
}

/// Read a directory, splitting entries into files and subdirectories sorted by name
fn list_directory(dir: &Path) -> Result<DirListing, String> {
    let mut files = Vec::new();
    let mut dirs = Vec::new();

    let entries = fs::read_dir(dir)
        .map_err(|e| format!("Failed to read directory '{}': {}", dir.display(), e))?;
    for entry in entries {
        let entry = entry.map_err(|e| format!("Failed to read directory '{}': {}", dir.display(), e))?;
        let path = entry.path();
        let is_link = entry
            .file_type()
            .map(|t| t.is_symlink())
            .map_err(|e| format!("Failed to stat '{}': {}", path.display(), e))?;

        // Broken symlinks and special files are ignored
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => files.push(path),
            Ok(meta) if meta.is_dir() => dirs.push((path, !is_link)),
            _ => {}
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    dirs.sort_by(|a, b| a.0.file_name().cmp(&b.0.file_name()));
    Ok(DirListing { files, dirs })
}

fn check_new_name(new_name: &str, source: &Path) -> Result<(), String> {
    let invalid = new_name.is_empty()
        || new_name == "."
        || new_name == ".."
        || new_name.contains('/')
        || new_name.contains(std::path::MAIN_SEPARATOR);
    if invalid {
        return Err(format!(
            "Replacement turns '{}' into the invalid file name '{}'",
            source.display(),
            new_name
        ));
    }
    Ok(())
}

/// Destination is the source itself under a differently-cased name.
///
/// A hard-linked pair like `a.txt`/`A.txt` shares an inode but is two
/// directory entries; `rename` between them is a no-op, so it only counts
/// when the inode has a single link.
fn is_same_entry(source: &Path, destination: &Path, old_name: &str, new_name: &str) -> bool {
    old_name.to_lowercase() == new_name.to_lowercase()
        && same_file(source, destination)
        && single_link(source)
}

#[cfg(unix)]
fn same_file(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;
    match (fs::symlink_metadata(a), fs::symlink_metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(unix)]
fn single_link(path: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;
    fs::symlink_metadata(path)
        .map(|meta| meta.is_dir() || meta.nlink() == 1)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn single_link(_path: &Path) -> bool {
    true
}

fn move_entry(source: &Path, destination: &Path) -> Result<(), String> {
    fs::rename(source, destination).map_err(|e| {
        format!(
            "Failed to rename '{}' to '{}': {}",
            source.display(),
            destination.display(),
            e
        )
    })
}

/// Renames entries of a target according to a `RenameConfig`
pub struct Renamer<'a, P: OverwritePrompt> {
    config: &'a RenameConfig,
    prompt: P,
    log: Option<RenameLog>,
    stats: RenameStats,
}

impl<'a, P: OverwritePrompt> Renamer<'a, P> {
    pub fn new(config: &'a RenameConfig, prompt: P) -> Self {
        Self {
            config,
            prompt,
            log: None,
            stats: RenameStats::default(),
        }
    }

    /// Record every rename, overwrite and skip in `log`
    pub fn with_log(mut self, log: RenameLog) -> Self {
        self.log = Some(log);
        self
    }

    /// Process the whole target and return what happened
    pub fn run(mut self) -> Result<RenameStats, String> {
        let config = self.config;
        match &config.target {
            Target::File(path) => {
                if !self.is_log_file(path) {
                    self.rename_entry(path)?;
                }
            }
            Target::Directory(path) => {
                self.process_directory(path)?;
            }
        }

        if let Some(log) = self.log.take() {
            log.finish()?;
        }
        Ok(self.stats)
    }

    /// Files of `dir` first, then each subdirectory: descended into when
    /// recursive, and renamed afterwards when directories are selected
    fn process_directory(&mut self, dir: &Path) -> Result<(), String> {
        let listing = list_directory(dir)?;
        let kinds = self.config.entry_kinds;

        if kinds.includes_files() {
            for file in &listing.files {
                if self.is_log_file(file) {
                    continue;
                }
                self.rename_entry(file)?;
            }
        }

        for (subdir, descendable) in &listing.dirs {
            if self.config.recursive && *descendable {
                self.process_directory(subdir)?;
            }
            if kinds.includes_directories() {
                self.rename_entry(subdir)?;
            }
        }

        Ok(())
    }

    /// The rename log is open for the whole run and must not be renamed under itself
    fn is_log_file(&self, path: &Path) -> bool {
        match &self.log {
            Some(log) => same_file(path, log.path()),
            None => false,
        }
    }

    /// Make one rename decision for `path`
    pub fn rename_entry(&mut self, path: &Path) -> Result<RenameOutcome, String> {
        let outcome = self.decide(path)?;
        self.stats.record(outcome);
        Ok(outcome)
    }

    fn decide(&mut self, path: &Path) -> Result<RenameOutcome, String> {
        // Non-UTF-8 names cannot match a UTF-8 pattern
        let Some(old_name) = path.file_name().and_then(|n| n.to_str()) else {
            return Ok(RenameOutcome::Unmatched);
        };
        let Some(new_name) = self
            .config
            .pattern
            .substitute(old_name, &self.config.replacement)
        else {
            return Ok(RenameOutcome::Unmatched);
        };
        if new_name == old_name {
            return Ok(RenameOutcome::Unchanged);
        }
        check_new_name(&new_name, path)?;

        let destination = path.with_file_name(&new_name);
        let destination_exists = fs::symlink_metadata(&destination).is_ok();

        if !destination_exists || is_same_entry(path, &destination, old_name, &new_name) {
            move_entry(path, &destination)?;
            if self.config.verbose {
                println!("🔄 Renaming {} to {}", path.display(), new_name);
            }
            self.log_action("renamed", path, &destination)?;
            return Ok(RenameOutcome::Renamed);
        }

        let permitted = self.config.overwrite || self.prompt.confirm_overwrite(path, &new_name)?;
        if !permitted {
            if self.config.verbose {
                println!("⏭️  '{}' skipped -- '{}' exists", path.display(), new_name);
            }
            self.log_action("skipped", path, &destination)?;
            return Ok(RenameOutcome::Skipped);
        }

        self.replace_entry(path, &destination)?;
        if self.config.verbose {
            println!("♻️  '{}' overwrote '{}'", path.display(), new_name);
        }
        self.log_action("overwrote", path, &destination)?;
        Ok(RenameOutcome::Overwrote)
    }

    fn replace_entry(&self, source: &Path, destination: &Path) -> Result<(), String> {
        let meta = fs::symlink_metadata(destination)
            .map_err(|e| format!("Failed to stat '{}': {}", destination.display(), e))?;
        if meta.is_dir() {
            return Err(format!(
                "Cannot overwrite '{}': it is a directory",
                destination.display()
            ));
        }
        fs::remove_file(destination)
            .map_err(|e| format!("Failed to remove '{}': {}", destination.display(), e))?;
        move_entry(source, destination)
    }

    fn log_action(&mut self, action: &str, source: &Path, destination: &Path) -> Result<(), String> {
        match self.log.as_mut() {
            Some(log) => log.record(action, source, destination),
            None => Ok(()),
        }
    }
}
