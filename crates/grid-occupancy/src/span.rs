use serde::{Deserialize, Serialize};

/// An item's placement on the grid: top-left cell plus extent.
///
/// Origins are signed because a negative `cell_x`/`cell_y` marks an item that
/// has not been placed yet. Spans extend right and down from the origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellSpan {
    /// Leftmost column.
    pub cell_x: i32,
    /// Topmost row.
    pub cell_y: i32,
    /// Width in columns.
    pub span_x: i32,
    /// Height in rows.
    pub span_y: i32,
}

impl CellSpan {
    /// Construct a span anchored at `(cell_x, cell_y)`.
    #[must_use]
    pub const fn new(cell_x: i32, cell_y: i32, span_x: i32, span_y: i32) -> Self {
        Self {
            cell_x,
            cell_y,
            span_x,
            span_y,
        }
    }

    /// A span of the given size that has no position yet.
    #[must_use]
    pub const fn unplaced(span_x: i32, span_y: i32) -> Self {
        Self::new(-1, -1, span_x, span_y)
    }

    /// True when the origin is a real cell rather than the unplaced sentinel.
    #[must_use]
    pub const fn is_placed(&self) -> bool {
        self.cell_x >= 0 && self.cell_y >= 0
    }

    /// True when `(x, y)` lies inside this span.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (self.cell_x..self.cell_x.saturating_add(self.span_x)).contains(&x)
            && (self.cell_y..self.cell_y.saturating_add(self.span_y)).contains(&y)
    }

    /// The same extent moved to `(cell_x, cell_y)`.
    #[must_use]
    pub const fn at(self, cell_x: i32, cell_y: i32) -> Self {
        Self::new(cell_x, cell_y, self.span_x, self.span_y)
    }
}

impl From<(i32, i32, i32, i32)> for CellSpan {
    fn from(v: (i32, i32, i32, i32)) -> Self {
        Self::new(v.0, v.1, v.2, v.3)
    }
}
