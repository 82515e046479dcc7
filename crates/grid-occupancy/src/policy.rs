//! Row-eligibility policies for vacant-span search.

use std::ops::Range;

use crate::ItemCategory;

/// Number of bottom rows kept for non-widget items.
pub const RESERVED_ROWS: i32 = 2;

/// Decides which rows a span may occupy on a grid with `count_y` rows.
///
/// A span of height `span_y` anchored at row `y` is eligible when
/// `y >= band.start` and `y + span_y <= band.end`.
pub trait Eligibility {
    /// Half-open band of rows available to a span.
    fn rows(&self, count_y: i32) -> Range<i32>;
}

impl<F> Eligibility for F
where
    F: Fn(i32) -> Range<i32>,
{
    fn rows(&self, count_y: i32) -> Range<i32> {
        self(count_y)
    }
}

/// Every row of the grid is eligible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnyRow;

impl Eligibility for AnyRow {
    fn rows(&self, count_y: i32) -> Range<i32> {
        0..count_y
    }
}

/// The launcher policy: widget-like items live above the bottom
/// [`RESERVED_ROWS`] rows, everything else lives inside them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReservedBand(pub ItemCategory);

impl ReservedBand {
    /// First reserved row, clamped so short grids never underflow.
    #[must_use]
    pub fn first_reserved_row(count_y: i32) -> i32 {
        (count_y - RESERVED_ROWS).max(0)
    }
}

impl Eligibility for ReservedBand {
    fn rows(&self, count_y: i32) -> Range<i32> {
        let split = Self::first_reserved_row(count_y);
        match self.0 {
            ItemCategory::WidgetLike => 0..split,
            ItemCategory::Other => split..count_y,
        }
    }
}

impl From<ItemCategory> for ReservedBand {
    fn from(c: ItemCategory) -> Self {
        Self(c)
    }
}
