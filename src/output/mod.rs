// mod.rs - Rename log writer

use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &Path) -> Result<(), String> {
    if let Some(parent) = file_path.parent() {
        if parent.as_os_str().is_empty() {
            return Ok(());
        }
        create_dir_all(parent)
            .map_err(|e| format!("Failed to create parent directory '{}': {}", parent.display(), e))?;
    }
    Ok(())
}

/// TSV log of every rename decision that touched the filesystem
pub struct RenameLog {
    path: PathBuf,
    writer: BufWriter<File>,
    entries: usize,
}

impl RenameLog {
    /// Create the log file and write its header
    pub fn create(file_path: &Path, command_line: &str) -> Result<Self, String> {
        ensure_parent_dir(file_path)?;
        let file = File::create(file_path)
            .map_err(|e| format!("Failed to create log file '{}': {}", file_path.display(), e))?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "# Command: {}", command_line).map_err(|e| format!("Write error: {}", e))?;
        writeln!(writer, "# Generated: {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")).map_err(|e| format!("Write error: {}", e))?;
        writeln!(writer, "# regex-rename v{}", env!("CARGO_PKG_VERSION")).map_err(|e| format!("Write error: {}", e))?;
        writeln!(writer, "action\tsource\tdestination").map_err(|e| format!("Write error: {}", e))?;

        Ok(Self {
            path: file_path.to_path_buf(),
            writer,
            entries: 0,
        })
    }

    pub fn record(&mut self, action: &str, source: &Path, destination: &Path) -> Result<(), String> {
        writeln!(
            self.writer,
            "{}\t{}\t{}",
            action,
            source.display(),
            destination.display()
        )
        .map_err(|e| format!("Write error: {}", e))?;
        self.entries += 1;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Flush buffered rows to disk
    pub fn finish(mut self) -> Result<(), String> {
        self.writer.flush().map_err(|e| format!("Flush error: {}", e))?;
        println!("📝 Rename log written to: {} ({} entries)", self.path.display(), self.entries);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_header_and_rows() {
        let tmp = TempDir::new().unwrap();
        let log_path = tmp.path().join("logs").join("rename.tsv");

        let mut log = RenameLog::create(&log_path, "rename . a b").unwrap();
        log.record("renamed", Path::new("dir/a"), Path::new("dir/b")).unwrap();
        log.record("skipped", Path::new("dir/c"), Path::new("dir/b")).unwrap();
        assert_eq!(log.entries(), 2);
        log.finish().unwrap();

        let content = std::fs::read_to_string(&log_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "# Command: rename . a b");
        assert!(lines[1].starts_with("# Generated: "));
        assert!(lines[2].starts_with("# regex-rename v"));
        assert_eq!(lines[3], "action\tsource\tdestination");
        assert_eq!(lines[4], "renamed\tdir/a\tdir/b");
        assert_eq!(lines[5], "skipped\tdir/c\tdir/b");
        assert_eq!(lines.len(), 6);
    }
}
