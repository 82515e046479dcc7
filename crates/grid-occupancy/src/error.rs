use thiserror::Error;

/// Errors raised by grid construction and grid-to-grid copies.
///
/// Ordinary misses (no vacant span, out-of-bounds regions) are reported as
/// `None`/`false` by the query methods and never surface here.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A grid dimension was zero or did not fit in an `i32`.
    #[error("invalid grid dimensions {count_x}x{count_y}")]
    InvalidDimensions {
        /// Requested column count.
        count_x: u32,
        /// Requested row count.
        count_y: u32,
    },

    /// `copy_to` was called with a destination of a different size.
    #[error("grid dimension mismatch: source {src_x}x{src_y}, destination {dst_x}x{dst_y}")]
    DimensionMismatch {
        /// Source column count.
        src_x: u32,
        /// Source row count.
        src_y: u32,
        /// Destination column count.
        dst_x: u32,
        /// Destination row count.
        dst_y: u32,
    },
}

/// Convenient result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
