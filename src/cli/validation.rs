// validation.rs - Input validation utilities

use std::fs;
use std::path::PathBuf;

use crate::cli::args::Args;
use crate::core::{CompiledPattern, EntryKinds, RenameConfig, Target};

/// Validate all command line arguments.
///
/// Only reads metadata; nothing is renamed until every check has passed.
pub fn validate_args(args: &Args) -> Result<RenameConfig, String> {
    let (path, pattern_source, replacement) = match args.arguments.as_slice() {
        [path, pattern, replacement] => (path, pattern, replacement),
        [_, _, _, ..] => {
            return Err("Only three positional arguments are accepted:  <path>, <pattern>, \
                        and <replacement>"
                .to_string())
        }
        _ => {
            return Err(
                "All of the arguments <path>, <pattern>, and <replacement> are required".to_string(),
            )
        }
    };

    let target = resolve_target(path)?;
    if let Target::File(_) = target {
        if args.recursive {
            return Err("The -r switch is not permitted when renaming a single file".to_string());
        }
        if args.directories_only {
            return Err(
                "The --directories-only switch is not permitted when renaming a single file"
                    .to_string(),
            );
        }
    }

    let pattern = CompiledPattern::new(pattern_source, args.case_sensitive)?;

    Ok(RenameConfig {
        target,
        pattern,
        pattern_source: pattern_source.clone(),
        replacement: replacement.clone(),
        case_sensitive: args.case_sensitive,
        overwrite: args.overwrite,
        verbose: args.verbose,
        recursive: args.recursive,
        entry_kinds: EntryKinds::from_flags(args.directories, args.directories_only),
        log_path: args.log.as_ref().map(PathBuf::from),
    })
}

fn resolve_target(path: &str) -> Result<Target, String> {
    let meta = fs::metadata(path).map_err(|_| format!("The path '{}' doesn't exist", path))?;
    let path_buf = PathBuf::from(path);

    if meta.is_dir() {
        Ok(Target::Directory(path_buf))
    } else if meta.is_file() {
        Ok(Target::File(path_buf))
    } else {
        Err(format!("'{}' is neither a file nor a directory", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argh::FromArgs;
    use tempfile::TempDir;

    fn args(list: &[&str]) -> Args {
        Args::from_args(&["rename"], list).unwrap()
    }

    #[test]
    fn test_missing_arguments() {
        let cases: [&[&str]; 3] = [&[], &["."], &[".", "foo"]];
        for list in cases {
            let err = validate_args(&args(list)).unwrap_err();
            assert_eq!(
                err,
                "All of the arguments <path>, <pattern>, and <replacement> are required"
            );
        }
    }

    #[test]
    fn test_too_many_arguments() {
        let err = validate_args(&args(&[".", "a", "b", "c"])).unwrap_err();
        assert!(err.starts_with("Only three positional arguments are accepted"));
    }

    #[test]
    fn test_nonexistent_path() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("foo");
        let missing = missing.to_str().unwrap();

        let err = validate_args(&args(&[missing, "bar", "baz"])).unwrap_err();
        assert_eq!(err, format!("The path '{}' doesn't exist", missing));
    }

    #[test]
    fn test_invalid_pattern() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().to_str().unwrap();

        let err = validate_args(&args(&[dir, "*", "baz"])).unwrap_err();
        assert!(err.starts_with("\"*\" is not a valid regular expression ("));

        let err = validate_args(&args(&["-c", dir, "(unclosed", "baz"])).unwrap_err();
        assert!(err.starts_with("\"(unclosed\" is not a valid regular expression ("));
    }

    #[test]
    fn test_failed_validation_leaves_directory_untouched() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("foo.txt"), "content").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        let dir = tmp.path().to_str().unwrap();

        assert!(validate_args(&args(&["-y", "-r", dir, "(foo)\\.txt(", "$1.md"])).is_err());

        let mut names: Vec<String> = fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["foo.txt", "sub"]);
        assert_eq!(fs::read_to_string(tmp.path().join("foo.txt")).unwrap(), "content");
    }

    #[test]
    fn test_recursive_single_file_rejected() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("a.txt");
        fs::write(&file, "").unwrap();
        let file = file.to_str().unwrap();

        let err = validate_args(&args(&["-r", file, "a", "b"])).unwrap_err();
        assert!(err.contains("-r switch is not permitted"));

        let err = validate_args(&args(&["--directories-only", file, "a", "b"])).unwrap_err();
        assert!(err.contains("--directories-only switch is not permitted"));
    }

    #[test]
    fn test_directory_target() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().to_str().unwrap();

        let config = validate_args(&args(&[dir, "foo-([0-9]+)\\.txt", "bar-$1.txt"])).unwrap();

        assert_eq!(config.target, Target::Directory(tmp.path().to_path_buf()));
        assert_eq!(config.pattern.as_str(), "^(?:foo-([0-9]+)\\.txt)$");
        assert_eq!(config.pattern_source, "foo-([0-9]+)\\.txt");
        assert_eq!(config.replacement, "bar-$1.txt");
        assert!(!config.case_sensitive);
        assert!(!config.recursive);
        assert!(!config.overwrite);
        assert!(!config.verbose);
        assert_eq!(config.entry_kinds, EntryKinds::Files);
        assert!(config.log_path.is_none());
    }

    #[test]
    fn test_flags_carried_into_config() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().to_str().unwrap();

        let config = validate_args(&args(&[
            "-c", "-y", "-v", "-r", "-d", "--log", "out.tsv", dir, "^bar$", "baz",
        ]))
        .unwrap();

        assert!(config.case_sensitive);
        assert!(config.overwrite);
        assert!(config.verbose);
        assert!(config.recursive);
        assert_eq!(config.entry_kinds, EntryKinds::FilesAndDirectories);
        assert_eq!(config.pattern.as_str(), "^(?:^bar$)$");
        assert_eq!(config.log_path, Some(PathBuf::from("out.tsv")));
    }

    #[test]
    fn test_file_target() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("a.txt");
        fs::write(&file, "").unwrap();

        let config = validate_args(&args(&[file.to_str().unwrap(), "a\\.txt", "b.txt"])).unwrap();
        assert_eq!(config.target, Target::File(file));
    }
}
