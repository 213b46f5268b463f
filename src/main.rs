// main.rs - CLI entry point

use std::path::Path;
use std::process;

use regex_rename::cli::usage;
use regex_rename::prelude::*;

fn main() {
    let argv: Vec<String> = std::env::args().collect();
    let command_name = argv
        .first()
        .and_then(|p| Path::new(p).file_stem())
        .and_then(|s| s.to_str())
        .unwrap_or("rename")
        .to_string();

    let mut args = match Args::parse(&argv) {
        Ok(args) => args,
        Err(early_exit) => match early_exit.status {
            Ok(()) => {
                println!("{}", early_exit.output);
                process::exit(0);
            }
            Err(()) => {
                eprintln!("{}", early_exit.output);
                process::exit(1);
            }
        },
    };

    // Handle generate config first
    if args.generate_config {
        println!("{}", Config::generate_sample());
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return;
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = match args.with_config_file(&config_path) {
            Ok(merged) => merged,
            Err(e) => {
                eprintln!("❌ ERROR: {}", e);
                process::exit(1);
            }
        };
    }

    // Nothing is touched on disk unless validation succeeds
    let config = match validate_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("\n{}\n", e);
            eprintln!("{}", usage(&command_name));
            process::exit(1);
        }
    };

    if let Err(e) = run_main(&config, &argv.join(" ")) {
        eprintln!("❌ ERROR: {}", e);
        process::exit(1);
    }
}

fn run_main(config: &RenameConfig, command_line: &str) -> Result<(), String> {
    if config.verbose {
        println!("🚀 {}", regex_rename::get_info());
        println!("📂 Target: {}", config.target.path().display());
        println!(
            "🔍 Pattern: {} ({} groups, {})",
            config.pattern.as_str(),
            config.pattern.group_count(),
            if config.case_sensitive {
                "case-sensitive"
            } else {
                "case-insensitive"
            }
        );
        println!("✏️  Replacement: {}", config.replacement);
        println!(
            "🗂️  Renaming: {}{}",
            config.entry_kinds.description(),
            if config.recursive { ", recursive" } else { "" }
        );
    }

    let mut renamer = Renamer::new(config, ConsolePrompt::stdio());
    if let Some(log_path) = &config.log_path {
        renamer = renamer.with_log(RenameLog::create(log_path, command_line)?);
    }

    let stats = renamer.run()?;

    if config.verbose {
        println!("✅ Done: {}", stats);
    }
    Ok(())
}
