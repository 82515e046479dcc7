//! Error types for gridtool.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors surfaced by gridtool commands.
#[derive(Debug, Error)]
pub enum Error {
    /// A scenario file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A scenario file is not valid RON for the expected shape.
    #[error("invalid scenario: {0}")]
    Ron(#[from] ron::error::SpannedError),

    /// Layout or placement failed.
    #[error(transparent)]
    Layout(#[from] cell_layout::Error),
}

/// Convenient result alias for gridtool.
pub type Result<T> = std::result::Result<T, Error>;
