#![warn(missing_docs)]

//! Layout and placement for launcher cell grids.
//!
//! - [`CellMetrics`]: cell size, gaps and grid dimensions of a surface.
//! - [`CellLayout`]: children with cell spans, turned into pixel frames.
//! - [`Planner`]: places items on a layout using an [`OccupancyGrid`].

mod error;
mod geom;
mod layout;
mod metrics;
mod params;
mod planner;

pub use error::{Error, Result};
pub use geom::{Point, Rect};
pub use grid_occupancy::{CellSpan, ItemCategory, ItemType, OccupancyGrid};
pub use layout::{CellLayout, ChildFrame, DropEvent, LayoutPass};
pub use metrics::CellMetrics;
pub use params::LayoutParams;
pub use planner::Planner;
