//! Shroud CLI
//!
//! Redacts sensitive values in a JSON document while preserving its schema.
//!
//! Usage:
//! ```bash
//! # stdin to stdout
//! cat event.json | shroud
//!
//! # Files, a salt for stable tokens across runs, and a rules file
//! shroud -i event.json -o event.redacted.json --salt "$SALT" --config shroud.yaml
//!
//! # Show the patterns a config will apply
//! shroud patterns --config shroud.yaml
//! ```

mod config;
mod io;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use config::ToolConfig;
use shroud_redact::Redactor;
use tracing::{Level, debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "shroud")]
#[command(
    about = "Shroud - redact sensitive data in JSON while preserving its shape",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to configuration file (YAML or TOML)
    #[arg(short, long, value_name = "FILE", env = "SHROUD_CONFIG", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error); logs go to stderr
    #[arg(long, value_name = "LEVEL", global = true)]
    log_level: Option<String>,

    #[command(flatten)]
    redact: RedactArgs,
}

#[derive(Args)]
struct RedactArgs {
    /// Input JSON file (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    input: Option<String>,

    /// Output JSON file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// HMAC salt for stable tokens across files
    #[arg(long, value_name = "SALT")]
    salt: Option<String>,

    /// Pretty-print output with this many spaces of indentation
    #[arg(long, value_name = "N")]
    indent: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the patterns that will be applied, in order
    Patterns,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ToolConfig::from_file(io::expand_path(path))?,
        None => ToolConfig::default(),
    };

    // Merge environment variables (they override config file)
    config.merge_env();

    // CLI flags have the highest precedence
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(salt) = &cli.redact.salt {
        config.salt = Some(salt.clone());
    }

    init_tracing(&config.logging.level)?;

    if let Some(path) = &cli.config {
        debug!("Loaded configuration from {}", path);
    }

    let redactor = Redactor::new(&config.redaction, config.salt.as_deref())
        .context("Failed to build redaction rules")?;

    match cli.command {
        Some(Commands::Patterns) => print_patterns(&redactor),
        None => run_redact(&redactor, &cli.redact),
    }
}

fn run_redact(redactor: &Redactor, args: &RedactArgs) -> Result<()> {
    let text = io::read_input(args.input.as_deref())?;
    let document = io::parse_document(&text)?;

    let redacted = redactor.redact(document);

    let rendered = io::render(&redacted, args.indent)?;
    io::write_output(args.output.as_deref(), &rendered)?;

    info!(
        "Redacted {} bytes of JSON into {} bytes",
        text.len(),
        rendered.len()
    );
    Ok(())
}

fn print_patterns(redactor: &Redactor) -> Result<()> {
    println!("{:<12} {:<8} {:<10} ALLOWLIST", "NAME", "TAG", "VALIDATOR");
    for pattern in redactor.patterns() {
        let allowlist = match pattern.allow_category() {
            Some(shroud_redact::AllowCategory::Domains) => "domains",
            Some(shroud_redact::AllowCategory::Hosts) => "hosts",
            None => "-",
        };
        println!(
            "{:<12} {:<8} {:<10} {}",
            pattern.name(),
            pattern.tag(),
            pattern.validator().name(),
            allowlist
        );
    }
    Ok(())
}

fn init_tracing(level: &str) -> Result<()> {
    let log_level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    // stdout carries the redacted document
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(format!("{}", log_level)))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
