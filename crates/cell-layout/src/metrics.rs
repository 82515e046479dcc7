use serde::{Deserialize, Serialize};

use crate::{Error, OccupancyGrid, Result};

/// Pixel metrics and dimensions of a cell grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellMetrics {
    /// Width of one cell in pixels.
    pub cell_width: i32,
    /// Height of one cell in pixels.
    pub cell_height: i32,
    /// Horizontal gap between adjacent cells.
    #[serde(default)]
    pub width_gap: i32,
    /// Vertical gap between adjacent cells.
    #[serde(default)]
    pub height_gap: i32,
    /// Number of columns.
    pub count_x: u32,
    /// Number of rows.
    pub count_y: u32,
}

impl CellMetrics {
    /// Check that sizes are sane and the whole grid's pixel extent fits in an
    /// `i32`.
    pub fn validate(&self) -> Result<()> {
        if self.cell_width <= 0 || self.cell_height <= 0 {
            return Err(Error::InvalidMetrics("cell size must be positive"));
        }
        if self.width_gap < 0 || self.height_gap < 0 {
            return Err(Error::InvalidMetrics("gaps must not be negative"));
        }
        self.content_size().map(|_| ())
    }

    /// An empty occupancy grid with these dimensions.
    pub fn grid(&self) -> Result<OccupancyGrid> {
        self.validate()?;
        Ok(OccupancyGrid::new(self.count_x, self.count_y)?)
    }

    /// Total pixel size of the grid including inner gaps.
    pub fn content_size(&self) -> Result<(i32, i32)> {
        let w = extent(self.count_x, self.cell_width, self.width_gap);
        let h = extent(self.count_y, self.cell_height, self.height_gap);
        w.zip(h)
            .ok_or(Error::InvalidMetrics("grid extent overflows"))
    }
}

/// `count * size + (count - 1) * gap`, or `None` on overflow.
fn extent(count: u32, size: i32, gap: i32) -> Option<i32> {
    let n = i32::try_from(count).ok()?;
    let gaps = (n - 1).max(0).checked_mul(gap)?;
    n.checked_mul(size)?.checked_add(gaps)
}
