#![warn(missing_docs)]

//! Occupancy bookkeeping for launcher icon grids.
//!
//! An [`OccupancyGrid`] records which cells of a fixed `count_x × count_y`
//! grid are taken, and finds the first vacant span for a new item. Which rows
//! an item may use is decided by an [`Eligibility`] policy; the launcher's
//! own policy is [`ReservedBand`], which keeps the bottom [`RESERVED_ROWS`]
//! rows for non-widget items.

mod error;
mod grid;
mod item;
mod policy;
mod span;


pub use error::{Error, Result};
pub use grid::OccupancyGrid;
pub use item::{ItemCategory, ItemType};
pub use policy::{AnyRow, Eligibility, RESERVED_ROWS, ReservedBand};
pub use span::CellSpan;
