use thiserror::Error;

/// Errors from layout and placement operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The occupancy grid could not be built or copied.
    #[error(transparent)]
    Grid(#[from] grid_occupancy::Error),

    /// Cell metrics are negative or their pixel extent does not fit in an `i32`.
    #[error("invalid cell metrics: {0}")]
    InvalidMetrics(&'static str),

    /// A child with this key is already in the layout.
    #[error("duplicate child {key}")]
    DuplicateChild {
        /// Debug rendering of the key.
        key: String,
    },

    /// No child with this key is in the layout.
    #[error("unknown child {key}")]
    UnknownChild {
        /// Debug rendering of the key.
        key: String,
    },
}

/// Convenient result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
