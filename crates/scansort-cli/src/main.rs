//! Command line front end: files scans once, watches a directory, or
//! classifies text without touching any file.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use commands::{classify, process, refile, watch};

/// Sort scanned documents into category folders by their content
#[derive(Parser)]
#[command(name = "scansort")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to a JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Input directory (overrides the config)
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Output directory (overrides the config)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// File the given documents, or everything in the input directory
    Process(process::ProcessArgs),

    /// Watch the input directory and file new documents as they arrive
    Watch(watch::WatchArgs),

    /// Show how a text would be classified, without moving anything
    Classify(classify::ClassifyArgs),

    /// Move an already filed document into another category
    Refile(refile::RefileArgs),
}

fn init_logging(verbose: u8) -> anyhow::Result<()> {
    // Route `log` records from dependencies (and our scanner) into tracing.
    tracing_log::LogTracer::init()?;

    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let settings = commands::Settings::resolve(&cli)?;

    match cli.command {
        Commands::Process(args) => process::run(args, &settings),
        Commands::Watch(args) => watch::run(args, &settings),
        Commands::Classify(args) => classify::run(args, &settings),
        Commands::Refile(args) => refile::run(args, &settings),
    }
}
