//! taskhint CLI - classify task descriptions and list the files they mention

// Global invariants enforced:
// - Reports follow input order
// - Identical input yields byte-for-byte identical output
// - Logs go to stderr; stdout carries only the rendered report

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use taskhint_core::config;
use taskhint_core::html::render_html_report;
use taskhint_core::{analyze_tasks, render_json, render_text};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "taskhint")]
#[command(about = "Estimate task complexity and detect related files from task descriptions")]
#[command(version = env!("TASKHINT_VERSION"))]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one or more task descriptions
    Analyze {
        /// Task descriptions to analyze
        descriptions: Vec<String>,

        /// Read descriptions from a file, one per line ("-" for stdin)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Maximum related files per task (overrides config file)
        #[arg(long)]
        max_files: Option<usize>,

        /// Path to config file (default: auto-discover)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the report to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Validate or inspect a configuration file
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Validate a config file without running analysis
    Validate {
        /// Path to config file (default: auto-discover from current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Show the resolved configuration (merged defaults + config file)
    Show {
        /// Path to config file (default: auto-discover from current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Html,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Analyze {
            descriptions,
            input,
            format,
            max_files,
            config: config_path,
            output,
        } => {
            let project_root = find_project_root(&std::env::current_dir()?);
            let mut resolved = config::load_and_resolve(&project_root, config_path.as_deref())
                .context("failed to load configuration")?;

            if let Some(p) = &resolved.config_path {
                eprintln!("Using config: {}", p.display());
            }

            // CLI flags override config file values
            if let Some(max) = max_files {
                if max == 0 || max > config::MAX_RELATED_FILES_LIMIT {
                    anyhow::bail!(
                        "--max-files must be between 1 and {} (got {})",
                        config::MAX_RELATED_FILES_LIMIT,
                        max
                    );
                }
                resolved.max_related_files = max;
            }

            let mut all = descriptions;
            if let Some(input) = input {
                all.extend(read_descriptions(&input)?);
            }
            if all.is_empty() {
                anyhow::bail!("no task descriptions given (pass them as arguments or via --input)");
            }
            debug!(count = all.len(), "analyzing task descriptions");

            let insights = analyze_tasks(&all, &resolved);
            let rendered = match format {
                OutputFormat::Text => render_text(&insights),
                OutputFormat::Json => format!("{}\n", render_json(&insights)),
                OutputFormat::Html => render_html_report(&insights),
            };

            match output {
                Some(path) => {
                    write_report(&path, &rendered)?;
                    eprintln!("Report written to: {}", path.display());
                }
                None => print!("{}", rendered),
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Validate { path } => {
                let project_root = find_project_root(&std::env::current_dir()?);
                match config::load_and_resolve(&project_root, path.as_deref()) {
                    Ok(config) => {
                        if let Some(ref p) = config.config_path {
                            println!("Config valid: {}", p.display());
                        } else {
                            println!("No config file found. Using defaults.");
                        }
                    }
                    Err(e) => {
                        eprintln!("Config validation failed: {:#}", e);
                        std::process::exit(1);
                    }
                }
            }
            ConfigAction::Show { path } => {
                let project_root = find_project_root(&std::env::current_dir()?);
                let resolved = config::load_and_resolve(&project_root, path.as_deref())
                    .context("failed to load configuration")?;

                println!("Configuration:");
                if let Some(ref p) = resolved.config_path {
                    println!("  Source: {}", p.display());
                } else {
                    println!("  Source: defaults (no config file found)");
                }
                println!();
                println!("Complexity:");
                println!("  medium_length: {}", resolved.thresholds.medium_length);
                println!("  long_length: {}", resolved.thresholds.long_length);
                println!("  medium_score: {}", resolved.thresholds.medium_score);
                println!("  high_score: {}", resolved.thresholds.high_score);
                println!();
                println!("Related files:");
                println!("  max_related_files: {}", resolved.max_related_files);
            }
        },
    }

    Ok(())
}

/// Set up stderr logging; RUST_LOG wins over --verbose
fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("failed to create tracing filter")?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init()
        .context("failed to initialize tracing")?;

    Ok(())
}

/// Read task descriptions, one per non-blank line ("-" reads stdin)
fn read_descriptions(path: &Path) -> anyhow::Result<Vec<String>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read descriptions from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file: {}", path.display()))?
    };

    Ok(parse_descriptions(&content))
}

fn parse_descriptions(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Write report to file with atomic write pattern
fn write_report(path: &Path, content: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory: {}", parent.display()))?;
        }
    }

    // Atomic write (temp + rename pattern)
    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, content)
        .with_context(|| format!("failed to write temporary file: {}", temp_path.display()))?;
    std::fs::rename(&temp_path, path)
        .with_context(|| format!("failed to rename temporary file to: {}", path.display()))?;

    Ok(())
}

/// Find the project root by searching up for a `.git` directory
///
/// Falls back to `start_path` when no repository is found.
fn find_project_root(start_path: &Path) -> PathBuf {
    let mut current = start_path.to_path_buf();
    loop {
        if current.join(".git").exists() {
            return current;
        }
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => {
                debug!("no .git directory found; using working directory as project root");
                return start_path.to_path_buf();
            }
        }
    }
}
