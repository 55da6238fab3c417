//! Process command: file a fixed set of documents and exit.

use std::path::PathBuf;

use clap::Args;

use scansort::{DirectoryScanner, JobResult};

use super::Settings;

#[derive(Args)]
pub struct ProcessArgs {
    /// Documents to file (default: everything in the input directory)
    files: Vec<PathBuf>,
}

pub fn run(args: ProcessArgs, settings: &Settings) -> anyhow::Result<()> {
    let pipeline = settings.pipeline()?;
    pipeline.filing().ensure_layout()?;

    let files = if args.files.is_empty() {
        DirectoryScanner::new(&settings.config.input_directory)
            .scan()?
            .into_iter()
            .map(|job| job.source_path)
            .collect()
    } else {
        args.files
    };

    let results: Vec<JobResult> = files
        .iter()
        .map(|path| pipeline.process_document(path))
        .collect();

    for result in &results {
        println!("{}", summarize(result));
    }

    let failed = results.iter().filter(|r| !r.success).count();
    if failed > 0 {
        anyhow::bail!("{} of {} documents could not be filed", failed, results.len());
    }
    Ok(())
}

fn summarize(result: &JobResult) -> String {
    let source = result.source_path.display();
    match (&result.destination, &result.error) {
        (Some(destination), _) if result.degraded => {
            format!("{} -> {} (placeholder name)", source, destination.display())
        }
        (Some(destination), _) => format!("{} -> {}", source, destination.display()),
        (None, Some(error)) => format!("{} FAILED: {}", source, error),
        (None, None) => format!("{} FAILED", source),
    }
}
