//! Refile command: the manual category override.

use std::path::PathBuf;

use clap::Args;

use scansort::{Category, FilingEngine};

use super::Settings;

#[derive(Args)]
pub struct RefileArgs {
    /// A document inside the output directory
    path: PathBuf,

    /// Target category (Invoices, Contracts, Certificates, Other)
    category: String,
}

pub fn run(args: RefileArgs, settings: &Settings) -> anyhow::Result<()> {
    let category = Category::from_label(&args.category)
        .ok_or_else(|| anyhow::anyhow!("Unknown category: {}", args.category))?;

    let engine = FilingEngine::new(&settings.config.output_directory);
    let current = engine.category_of(&args.path);
    let decision = engine.update_category(&args.path, category)?;

    println!(
        "{} -> {} ({} -> {})",
        args.path.display(),
        decision.destination.display(),
        current,
        decision.category
    );
    Ok(())
}
