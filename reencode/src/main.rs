//! Rewrite project files as canonical UTF-8.
//!
//! Reads the path list from `reencode.toml` (or the built-in default list),
//! rewrites each existing file in place and prints one status line per path.
//! Per-file failures are reported, never turned into a failing exit code.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use reencode::exit_codes;
use reencode::io::config::{DEFAULT_CONFIG_FILE, ReencodeConfig, load_config, write_config};
use reencode::pass::{PassOptions, fix_encoding, fix_encoding_with};
use reencode::report::{completion_line, emit, outcome_lines, render_json};

#[derive(Parser)]
#[command(
    name = "reencode",
    version,
    about = "Rewrite a fixed list of text files as UTF-8"
)]
struct Cli {
    /// Config file with the path list, relative to the working directory.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rewrite every listed file as UTF-8.
    Run {
        /// Files to rewrite instead of the configured list.
        paths: Vec<PathBuf>,
        /// Keep a leading byte-order mark instead of dropping it.
        #[arg(long)]
        no_strip_bom: bool,
        /// Print the report as JSON instead of status lines.
        #[arg(long)]
        json: bool,
    },
    /// Print the configured path list.
    List,
    /// Write a config file holding the default path list.
    Init {
        /// Overwrite an existing config file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    reencode::logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
    std::process::exit(exit_codes::OK);
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let root = std::env::current_dir().context("resolve working directory")?;
    let config_path = root.join(&cli.config);
    match cli.command {
        Command::Run {
            paths,
            no_strip_bom,
            json,
        } => cmd_run(&root, &config_path, &paths, no_strip_bom, json),
        Command::List => cmd_list(&config_path),
        Command::Init { force } => cmd_init(&config_path, force),
    }
}

fn cmd_run(
    root: &Path,
    config_path: &Path,
    overrides: &[PathBuf],
    no_strip_bom: bool,
    json: bool,
) -> Result<()> {
    let cfg = load_config(config_path)?;
    let paths = cfg.resolve_paths(overrides);
    let mut options = PassOptions::from(&cfg);
    if no_strip_bom {
        options.strip_bom = false;
    }
    debug!(paths = paths.len(), strip_bom = options.strip_bom, "resolved run");

    if json {
        let report = fix_encoding(root, &paths, &options);
        println!("{}", render_json(&report)?);
        return Ok(());
    }

    let report = fix_encoding_with(root, &paths, &options, |outcome| {
        emit(&outcome_lines(outcome));
    });
    emit(&[completion_line(&report)]);
    Ok(())
}

fn cmd_list(config_path: &Path) -> Result<()> {
    let cfg = load_config(config_path)?;
    for path in &cfg.paths {
        println!("{}", path.display());
    }
    Ok(())
}

fn cmd_init(config_path: &Path, force: bool) -> Result<()> {
    if !force && config_path.exists() {
        println!(
            "init: {} exists (use --force to overwrite)",
            config_path.display()
        );
        return Ok(());
    }
    write_config(config_path, &ReencodeConfig::default())
        .with_context(|| format!("write {}", config_path.display()))?;
    println!("init: wrote {}", config_path.display());
    Ok(())
}
