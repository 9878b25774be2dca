//! Injectable side-effect boundary.
//!
//! Pages never touch the filesystem directly; the one side effect in
//! scope (writing a table as a CSV artifact) goes through the
//! [`Effects`] trait. [`FsEffects`] is the real implementation;
//! [`MemoryEffects`] is the fake used in tests and by the simulator.
//!
//! Artifact semantics are deliberately blunt: fixed path, full
//! overwrite on every run, never read back, last writer wins.

use std::collections::BTreeMap;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use tabular::Table;
use thiserror::Error;
use tracing::debug;

/// Errors raised while persisting an artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// The artifact path could not be created or written.
    #[error("cannot write artifact '{path}': {source}")]
    Io {
        /// The artifact path.
        path: PathBuf,
        /// The underlying IO error.
        source: io::Error,
    },
    /// The table could not be encoded as CSV.
    #[error("cannot encode artifact '{path}': {source}")]
    Encode {
        /// The artifact path.
        path: PathBuf,
        /// The underlying CSV error.
        source: csv::Error,
    },
}

/// Side effects a page may request during a run.
pub trait Effects {
    /// Serialize `table` as CSV to `path`, overwriting any previous
    /// content. Failure is fatal to the run; there is no retry.
    fn write_table_csv(&mut self, path: &Path, table: &Table) -> Result<(), ArtifactError>;
}

/// Real effects: artifacts land on the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsEffects;

impl FsEffects {
    /// Create filesystem-backed effects.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Effects for FsEffects {
    fn write_table_csv(&mut self, path: &Path, table: &Table) -> Result<(), ArtifactError> {
        let file = File::create(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        table
            .write_csv(file)
            .map_err(|source| ArtifactError::Encode {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), rows = table.n_rows(), "artifact written");
        Ok(())
    }
}

/// In-memory effects for tests: artifacts land in a map keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemoryEffects {
    artifacts: BTreeMap<PathBuf, String>,
    writes: usize,
}

impl MemoryEffects {
    /// Create empty in-memory effects.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The CSV text last written to `path`, if any.
    #[must_use]
    pub fn artifact(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.artifacts.get(path.as_ref()).map(String::as_str)
    }

    /// Total number of writes performed, across all paths.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl Effects for MemoryEffects {
    fn write_table_csv(&mut self, path: &Path, table: &Table) -> Result<(), ArtifactError> {
        self.artifacts
            .insert(path.to_path_buf(), table.to_csv_string());
        self.writes += 1;
        Ok(())
    }
}
