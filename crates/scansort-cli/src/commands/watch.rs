//! Watch command: file what is already there, then keep watching.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use tracing::{info, warn};

use scansort::DirectoryScanner;

use super::Settings;

#[derive(Args)]
pub struct WatchArgs {
    /// Do not file documents that are already in the input directory
    #[arg(long)]
    no_initial_scan: bool,
}

pub fn run(args: WatchArgs, settings: &Settings) -> anyhow::Result<()> {
    let input = &settings.config.input_directory;
    std::fs::create_dir_all(input)
        .with_context(|| format!("Failed to create input directory {}", input.display()))?;

    let pipeline = settings.pipeline()?;
    pipeline.filing().ensure_layout()?;
    let scanner = DirectoryScanner::new(input);

    let shutdown = Arc::new(AtomicBool::new(false));
    let flag = shutdown.clone();
    ctrlc::set_handler(move || {
        warn!("Interrupt received, stopping...");
        flag.store(true, Ordering::Relaxed);
    })?;

    scanner.watch(
        !args.no_initial_scan,
        |path| {
            pipeline.process_document(&path);
        },
        shutdown,
    )?;

    info!("Stopped watching {}", input.display());
    Ok(())
}
