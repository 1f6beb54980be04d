use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the hobby statistics crates.
///
/// Row- and file-level parse problems are not represented here: those are
/// recovered locally during ingestion and surface only as diagnostics.
/// This enum covers the failures that abort a requested operation.
#[derive(Error, Debug)]
pub enum StatsError {
    /// The log directory is missing or could not be enumerated.
    #[error("Failed to read log directory {path}: {source}")]
    LogDirRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The log directory does not exist.
    #[error("Log directory not found: {0}")]
    LogDirNotFound(PathBuf),

    /// A computation needs at least one timestamp but the store has none.
    #[error("No timestamps in the series store; cannot compute {computation}")]
    EmptyStore { computation: &'static str },

    /// A gap statistic needs at least two timestamps in a series.
    #[error("Series \"{hobby}\" has fewer than 2 timestamps; gap statistics are undefined")]
    NotEnoughTimestamps { hobby: String },

    /// A mileage reduction needs at least one recorded distance.
    #[error("Series \"{hobby}\" has no recorded distances")]
    NoDistances { hobby: String },

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the hobby statistics crates.
pub type Result<T> = std::result::Result<T, StatsError>;
