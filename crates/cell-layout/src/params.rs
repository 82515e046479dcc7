use grid_occupancy::CellSpan;

use crate::{CellMetrics, Rect};

/// Per-child placement and computed pixel frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutParams {
    /// Cell placement of the child.
    pub span: CellSpan,
    /// Child covers the whole container instead of its cells.
    pub fullscreen: bool,
    /// Child was just dropped; the next layout pass reports its drop point.
    pub dropped: bool,
    /// Computed frame, valid after [`Self::setup`] or a measure pass.
    pub frame: Rect,
}

impl LayoutParams {
    /// Params for a child at `span`.
    #[must_use]
    pub const fn new(span: CellSpan) -> Self {
        Self {
            span,
            fullscreen: false,
            dropped: false,
            frame: Rect::new(0, 0, 0, 0),
        }
    }

    /// Compute the pixel frame from the cell span.
    ///
    /// With `invert_horizontally` the column is mirrored so that column 0 lands
    /// on the right edge. Arithmetic saturates; spans inside validated metrics
    /// never reach the limits.
    pub fn setup(&mut self, m: &CellMetrics, invert_horizontally: bool) {
        let CellSpan {
            mut cell_x,
            cell_y,
            span_x,
            span_y,
        } = self.span;
        if invert_horizontally {
            let count_x = i32::try_from(m.count_x).unwrap_or(i32::MAX);
            cell_x = count_x.saturating_sub(cell_x).saturating_sub(span_x);
        }
        self.frame = Rect {
            x: origin(cell_x, m.cell_width, m.width_gap),
            y: origin(cell_y, m.cell_height, m.height_gap),
            w: length(span_x, m.cell_width, m.width_gap),
            h: length(span_y, m.cell_height, m.height_gap),
        };
    }
}

/// Pixel offset of cell `cell`: `cell * (size + gap)`.
fn origin(cell: i32, size: i32, gap: i32) -> i32 {
    cell.saturating_mul(size.saturating_add(gap))
}

/// Pixel length of `span` cells with the gaps between them.
fn length(span: i32, size: i32, gap: i32) -> i32 {
    span.saturating_mul(size)
        .saturating_add(span.saturating_sub(1).saturating_mul(gap))
}
