use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info, warn};
use notify::{Config as NotifyConfig, PollWatcher, RecursiveMode};
use notify_debouncer_mini::{new_debouncer_opt, Config as DebouncerConfig, DebouncedEventKind};
use walkdir::WalkDir;

use crate::error::WorkerError;
use crate::processor::DocumentFormat;
use crate::worker::job::Job;

/// Finds scans in the top level of the input directory, once or continuously.
pub struct DirectoryScanner {
    input_directory: PathBuf,
}

impl DirectoryScanner {
    pub fn new<P: AsRef<Path>>(input_directory: P) -> Self {
        Self {
            input_directory: input_directory.as_ref().to_path_buf(),
        }
    }

    pub fn input_directory(&self) -> &Path {
        &self.input_directory
    }

    /// One job per supported file, sorted by path.
    pub fn scan(&self) -> Result<Vec<Job>, WorkerError> {
        let mut paths = Vec::new();

        for entry in WalkDir::new(&self.input_directory)
            .min_depth(1)
            .max_depth(1)
        {
            let entry = entry.map_err(|e| WorkerError::ScanFailed {
                path: self.input_directory.clone(),
                source: e,
            })?;

            if entry.file_type().is_file() && is_document(entry.path()) {
                debug!("Found document: {}", entry.path().display());
                paths.push(entry.into_path());
            }
        }

        paths.sort();
        info!(
            "Scanned {} documents in {}",
            paths.len(),
            self.input_directory.display()
        );
        Ok(paths.into_iter().map(Job::new).collect())
    }

    /// Calls `callback` for each supported file that appears or changes,
    /// until `shutdown` is set.
    ///
    /// With `initial_scan`, files already present are handed to `callback`
    /// after the watcher is armed, so nothing arriving during that first
    /// batch is missed. A file may then be reported twice; callers must
    /// tolerate a path that has already been moved away.
    pub fn watch<F>(
        &self,
        initial_scan: bool,
        callback: F,
        shutdown: Arc<AtomicBool>,
    ) -> Result<(), WorkerError>
    where
        F: Fn(PathBuf),
    {
        // Polling works on network shares and bind mounts where inotify does not.
        let poll_config = NotifyConfig::default().with_poll_interval(Duration::from_secs(2));

        // Scanners write files in several chunks; wait for them to settle.
        let debouncer_config = DebouncerConfig::default()
            .with_timeout(Duration::from_millis(500))
            .with_notify_config(poll_config);

        let (tx, rx) = std::sync::mpsc::channel();

        let mut debouncer = new_debouncer_opt::<_, PollWatcher>(debouncer_config, tx)
            .map_err(|e| WorkerError::WatchError(e.to_string()))?;

        debouncer
            .watcher()
            .watch(&self.input_directory, RecursiveMode::NonRecursive)
            .map_err(|e| WorkerError::WatchError(e.to_string()))?;

        info!("Watching directory: {}", self.input_directory.display());

        if initial_scan {
            for job in self.scan()? {
                if shutdown.load(Ordering::Relaxed) {
                    break;
                }
                callback(job.source_path);
            }
        }

        while !shutdown.load(Ordering::Relaxed) {
            match rx.recv_timeout(Duration::from_millis(100)) {
                Ok(Ok(events)) => {
                    for event in events {
                        if !matches!(event.kind, DebouncedEventKind::Any) {
                            continue;
                        }
                        // Deletions and our own moves out also produce events.
                        if event.path.is_file() && is_document(&event.path) {
                            info!("New document detected: {}", event.path.display());
                            callback(event.path);
                        }
                    }
                }
                Ok(Err(e)) => {
                    warn!("Watch error: {:?}", e);
                }
                Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
                Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => {
                    error!("Watch channel disconnected");
                    return Err(WorkerError::WatchError(
                        "watch channel disconnected".to_string(),
                    ));
                }
            }
        }

        info!("Watch mode shutting down...");
        Ok(())
    }
}

/// Supported extension and not a hidden (often partially written) file.
fn is_document(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'));
    !hidden && DocumentFormat::from_path(path).is_some()
}
