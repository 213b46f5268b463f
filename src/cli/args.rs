// args.rs - Command line arguments definition

use argh::FromArgs;
use std::path::Path;

#[derive(FromArgs, Debug)]
/// rename - Rename files whose names match a regular expression
#[argh(
    example = "Change photo extensions everywhere below ~/Pictures:\n$ {command_name} -r ~/Pictures '(.*)\\.jpeg' '$1.jpg'",
    note = "The pattern must match the whole file name; it is always wrapped as ^(?:pattern)$. Matching is case-insensitive unless -c is given. In the replacement, $1 or $name refer to capture groups and $$ is a literal dollar sign."
)]
pub struct Args {
    /// perform a case-sensitive match (default: case-insensitive)
    #[argh(switch, short = 'c')]
    pub case_sensitive: bool,

    /// overwrite existing files of the same name without prompting (potentially dangerous)
    #[argh(switch, short = 'y')]
    pub overwrite: bool,

    /// print every rename and a final summary
    #[argh(switch, short = 'v')]
    pub verbose: bool,

    /// search subdirectories of <path> recursively
    #[argh(switch, short = 'r')]
    pub recursive: bool,

    /// rename directories as well as files
    #[argh(switch, short = 'd')]
    pub directories: bool,

    /// rename only directories
    #[argh(switch)]
    pub directories_only: bool,

    /// write a TSV log of every rename to this file
    #[argh(option)]
    pub log: Option<String>,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,

    /// path, pattern and replacement: the file to rename or the directory whose
    /// entries are renamed, the regular expression selecting the names to change,
    /// and the substitution template producing the new names
    #[argh(positional)]
    pub arguments: Vec<String>,
}

impl Args {
    /// Parse a full argument vector, program name first
    pub fn parse(argv: &[String]) -> Result<Self, argh::EarlyExit> {
        let command_name = argv
            .first()
            .and_then(|p| Path::new(p).file_stem())
            .and_then(|n| n.to_str())
            .unwrap_or("rename");
        let rest: Vec<&str> = argv.iter().skip(1).map(String::as_str).collect();
        Args::from_args(&[command_name], &rest)
    }

    pub fn path(&self) -> Option<&str> {
        self.arguments.first().map(String::as_str)
    }

    pub fn pattern(&self) -> Option<&str> {
        self.arguments.get(1).map(String::as_str)
    }

    pub fn replacement(&self) -> Option<&str> {
        self.arguments.get(2).map(String::as_str)
    }
}

/// Help text generated from the argument definitions
pub fn usage(command_name: &str) -> String {
    match Args::from_args(&[command_name], &["--help"]) {
        Err(early_exit) => early_exit.output,
        Ok(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, argh::EarlyExit> {
        Args::from_args(&["rename"], args)
    }

    #[test]
    fn test_positionals_only() {
        let args = parse(&[".", "foo-([0-9]+)\\.txt", "bar-$1.txt"]).unwrap();
        assert_eq!(args.path(), Some("."));
        assert_eq!(args.pattern(), Some("foo-([0-9]+)\\.txt"));
        assert_eq!(args.replacement(), Some("bar-$1.txt"));
        assert!(!args.case_sensitive);
        assert!(!args.overwrite);
        assert!(!args.verbose);
        assert!(!args.recursive);
        assert!(!args.directories);
        assert!(!args.directories_only);
    }

    #[test]
    fn test_short_flags() {
        let args = parse(&["-c", "-r", "-v", "-y", ".", "bar", "baz"]).unwrap();
        assert!(args.case_sensitive);
        assert!(args.recursive);
        assert!(args.verbose);
        assert!(args.overwrite);
        assert!(!args.directories);
    }

    #[test]
    fn test_directory_flags() {
        let args = parse(&["-d", ".", "bar", "baz"]).unwrap();
        assert!(args.directories);
        assert!(!args.directories_only);

        let args = parse(&["--directories-only", "--log", "out.tsv", ".", "bar", "baz"]).unwrap();
        assert!(args.directories_only);
        assert_eq!(args.log.as_deref(), Some("out.tsv"));
    }

    #[test]
    fn test_missing_positionals_parse() {
        // Counted by validation, which reports it with the usage text
        let args = parse(&["."]).unwrap();
        assert_eq!(args.path(), Some("."));
        assert!(args.pattern().is_none());
    }

    #[test]
    fn test_unknown_flag_fails() {
        let err = parse(&["-a", ".", "bar", "baz"]).err().unwrap();
        assert!(err.status.is_err());
    }

    #[test]
    fn test_extra_positionals_are_kept() {
        let args = parse(&[".", "a", "b", "c"]).unwrap();
        assert_eq!(args.arguments.len(), 4);
    }

    #[test]
    fn test_pattern_starting_with_dash() {
        let args = parse(&["--", ".", "-old(.*)", "new$1"]).unwrap();
        assert_eq!(args.pattern(), Some("-old(.*)"));
    }

    #[test]
    fn test_help_is_not_an_error() {
        let exit = parse(&["--help"]).err().unwrap();
        assert!(exit.status.is_ok());
        assert!(exit.output.contains("--case-sensitive"));
    }

    #[test]
    fn test_usage_text() {
        let text = usage("rename");
        assert!(text.starts_with("Usage: rename"));
        assert!(text.contains("--overwrite"));
        assert!(text.contains("--recursive"));
    }

    #[test]
    fn test_parse_full_argv() {
        let argv: Vec<String> = ["/usr/bin/rename", "-v", "dir", "a", "b"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let args = Args::parse(&argv).unwrap();
        assert!(args.verbose);
        assert_eq!(args.path(), Some("dir"));
    }
}
