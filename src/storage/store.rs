//! JSON file store for the workout log and goals.

use crate::goals::Goal;
use crate::workouts::Workout;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// On-disk layout: two top-level arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default)]
    pub workouts: Vec<Workout>,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

/// A single JSON document on disk holding the full tracker state.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Create a store backed by the given file. Nothing is read until `load`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document. A missing file is an empty store.
    pub fn load(&self) -> Result<StoreDocument, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No data file yet, starting empty");
                return Ok(StoreDocument::default());
            }
            Err(e) => return Err(StoreError::Io(e)),
        };

        serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Write the document, replacing the previous file atomically.
    pub fn save(&self, document: &StoreDocument) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(document).map_err(StoreError::Serialize)?;
        write_atomic(&self.path, &bytes)?;
        tracing::debug!(
            path = %self.path.display(),
            workouts = document.workouts.len(),
            goals = document.goals.len(),
            "Saved data file"
        );
        Ok(())
    }
}

/// Write to a sibling temp file, sync it, then rename over the target.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    write_atomic_with(path, |file| {
        file.write_all(bytes)?;
        file.sync_all()
    })
}

/// Atomic replace with a caller-supplied writer. The temp file is removed on any failure.
fn write_atomic_with(
    path: &Path,
    write: impl FnOnce(&mut std::fs::File) -> std::io::Result<()>,
) -> Result<(), StoreError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("fitness_data.json");
    let tmp = parent.join(format!(".{}.tmp.{}", file_name, std::process::id()));

    let result = std::fs::File::create(&tmp)
        .and_then(|mut file| write(&mut file))
        .and_then(|()| std::fs::rename(&tmp, path));

    if let Err(e) = result {
        let _ = std::fs::remove_file(&tmp);
        return Err(StoreError::Io(e));
    }

    if let Ok(dir) = std::fs::File::open(parent) {
        let _ = dir.sync_all();
    }
    Ok(())
}

/// Store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Data file {path} is malformed: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialize error: {0}")]
    Serialize(serde_json::Error),
}
