use std::ffi::{OsStr, OsString};
use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use crate::document::Category;
use crate::error::StorageError;

/// Upper bound on destination names tried before giving up.
pub const MAX_COLLISION_PROBES: u32 = 10_000;

/// Where a document went. Produced once per filed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilingDecision {
    pub source_path: PathBuf,
    pub category: Category,
    pub destination: PathBuf,
}

/// Moves documents into `<output_base>/<Category>/` under collision-free names.
///
/// A destination name is claimed by creating an empty file with `create_new`
/// before the document is renamed over it, so two filers racing for the same
/// name cannot both win. Existing files are never overwritten.
#[derive(Debug, Clone)]
pub struct FilingEngine {
    output_base: PathBuf,
    probe_limit: u32,
}

impl FilingEngine {
    pub fn new<P: AsRef<Path>>(output_base: P) -> Self {
        Self {
            output_base: output_base.as_ref().to_path_buf(),
            probe_limit: MAX_COLLISION_PROBES,
        }
    }

    /// Overrides the collision probe bound.
    pub fn with_probe_limit(mut self, limit: u32) -> Self {
        self.probe_limit = limit.max(1);
        self
    }

    pub fn output_base(&self) -> &Path {
        &self.output_base
    }

    pub fn category_dir(&self, category: Category) -> PathBuf {
        self.output_base.join(category.label())
    }

    /// Creates the directory of every category.
    pub fn ensure_layout(&self) -> Result<(), StorageError> {
        for category in Category::ALL {
            ensure_directory(&self.category_dir(category))?;
        }
        Ok(())
    }

    /// Maps a filed document back to its category from its parent directory.
    /// Relative and `..` paths are resolved first when the file exists.
    pub fn category_of(&self, path: &Path) -> Category {
        let resolved = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        resolved
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|name| name.to_str())
            .and_then(Category::from_label)
            .unwrap_or(Category::Other)
    }

    /// Moves `source` into the directory of `category`, named
    /// `suggested_filename` plus the source's extension.
    pub fn file_document(
        &self,
        source: &Path,
        category: Category,
        suggested_filename: &str,
    ) -> Result<FilingDecision, StorageError> {
        check_source(source)?;

        let stem = if is_usable_name(suggested_filename) {
            OsString::from(suggested_filename.trim())
        } else {
            warn!(
                "Suggested filename {:?} is unusable, keeping original name",
                suggested_filename
            );
            source_stem(source)?
        };

        let target_dir = self.category_dir(category);
        ensure_directory(&target_dir)?;

        let destination = self.reserve(&target_dir, &stem, source.extension())?;
        move_into_reservation(source, &destination)?;

        debug!("Filed {} into {}", destination.display(), category);
        Ok(FilingDecision {
            source_path: source.to_path_buf(),
            category,
            destination,
        })
    }

    /// Moves an already filed document into another category, keeping its
    /// file name apart from a collision suffix.
    pub fn update_category(
        &self,
        current: &Path,
        new_category: Category,
    ) -> Result<FilingDecision, StorageError> {
        check_source(current)?;

        let target_dir = self.category_dir(new_category);
        ensure_directory(&target_dir)?;
        if is_inside(current, &target_dir) {
            return Ok(FilingDecision {
                source_path: current.to_path_buf(),
                category: new_category,
                destination: current.to_path_buf(),
            });
        }

        let stem = source_stem(current)?;
        let destination = self.reserve(&target_dir, &stem, current.extension())?;
        move_into_reservation(current, &destination)?;

        debug!("Refiled {} into {}", destination.display(), new_category);
        Ok(FilingDecision {
            source_path: current.to_path_buf(),
            category: new_category,
            destination,
        })
    }

    /// Claims the first free name of `stem.ext`, `stem (1).ext`, `stem (2).ext`, ...
    fn reserve(
        &self,
        directory: &Path,
        stem: &OsStr,
        extension: Option<&OsStr>,
    ) -> Result<PathBuf, StorageError> {
        for n in 0..self.probe_limit {
            let candidate = directory.join(candidate_name(stem, extension, n));
            match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&candidate)
            {
                Ok(_) => return Ok(candidate),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => {
                    return Err(StorageError::Reserve {
                        path: candidate,
                        source: e,
                    })
                }
            }
        }

        Err(StorageError::CollisionExhausted {
            directory: directory.to_path_buf(),
            filename: candidate_name(stem, extension, 0)
                .to_string_lossy()
                .into_owned(),
            attempts: self.probe_limit,
        })
    }
}

fn candidate_name(stem: &OsStr, extension: Option<&OsStr>, n: u32) -> OsString {
    let mut name = stem.to_os_string();
    if n > 0 {
        name.push(format!(" ({})", n));
    }
    if let Some(ext) = extension {
        name.push(".");
        name.push(ext);
    }
    name
}

fn is_usable_name(name: &str) -> bool {
    let name = name.trim();
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}

fn check_source(source: &Path) -> Result<(), StorageError> {
    match std::fs::metadata(source) {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(StorageError::InvalidSource(source.to_path_buf())),
        Err(_) => Err(StorageError::SourceNotFound(source.to_path_buf())),
    }
}

/// Whether `file` lives directly in `dir`, compared on resolved paths.
fn is_inside(file: &Path, dir: &Path) -> bool {
    match (std::fs::canonicalize(file), std::fs::canonicalize(dir)) {
        (Ok(file), Ok(dir)) => file.parent() == Some(dir.as_path()),
        _ => file.parent() == Some(dir),
    }
}

fn source_stem(source: &Path) -> Result<OsString, StorageError> {
    source
        .file_stem()
        .map(OsStr::to_os_string)
        .ok_or_else(|| StorageError::InvalidSource(source.to_path_buf()))
}

fn ensure_directory(path: &Path) -> Result<(), StorageError> {
    std::fs::create_dir_all(path).map_err(|e| StorageError::CreateDirectory {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Replaces the reservation at `dst` with `src`. `rename` first; when that
/// fails (e.g. across devices) the content is copied into the reservation and
/// the source removed. On failure only the reservation or our own copy is
/// deleted, never the source.
fn move_into_reservation(src: &Path, dst: &Path) -> Result<(), StorageError> {
    if std::fs::rename(src, dst).is_ok() {
        return Ok(());
    }

    let move_error = |e| StorageError::MoveFile {
        from: src.to_path_buf(),
        to: dst.to_path_buf(),
        source: e,
    };

    if let Err(e) = std::fs::copy(src, dst) {
        let _ = std::fs::remove_file(dst);
        return Err(move_error(e));
    }
    if let Err(e) = std::fs::remove_file(src) {
        let _ = std::fs::remove_file(dst);
        return Err(move_error(e));
    }
    Ok(())
}
