use std::fmt::{Display, Formatter, Result as FmtResult};

use tracing::{debug, trace};

use crate::{CellSpan, Eligibility, Error, ItemCategory, ReservedBand, Result};

/// Occupancy map for a fixed `count_x × count_y` grid.
///
/// Cells are addressed `(x, y)` with `x` the column and `y` the row, origin at
/// the top-left. Dimensions are fixed at construction and every cell starts
/// vacant. `Clone` gives an independent snapshot for speculative placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    /// Number of columns.
    count_x: i32,
    /// Number of rows.
    count_y: i32,
    /// Column-major cell flags, indexed `x * count_y + y`.
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// Create an all-vacant grid.
    pub fn new(count_x: u32, count_y: u32) -> Result<Self> {
        let invalid = Error::InvalidDimensions { count_x, count_y };
        if count_x == 0 || count_y == 0 {
            return Err(invalid);
        }
        let cx = i32::try_from(count_x).map_err(|_| invalid)?;
        let cy = i32::try_from(count_y).map_err(|_| invalid)?;
        let area = (count_x as usize)
            .checked_mul(count_y as usize)
            .ok_or(invalid)?;
        Ok(Self {
            count_x: cx,
            count_y: cy,
            cells: vec![false; area],
        })
    }

    /// Number of columns.
    #[must_use]
    pub fn count_x(&self) -> u32 {
        self.count_x as u32
    }

    /// Number of rows.
    #[must_use]
    pub fn count_y(&self) -> u32 {
        self.count_y as u32
    }

    /// Index of an in-bounds cell.
    #[inline]
    fn idx(&self, x: i32, y: i32) -> usize {
        x as usize * self.count_y as usize + y as usize
    }

    /// Whether `(x, y)` is occupied. Cells outside the grid read as vacant.
    #[must_use]
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.cells[self.idx(x, y)]
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }

    /// True when `(x, y)` is a cell of this grid.
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        (0..self.count_x).contains(&x) && (0..self.count_y).contains(&y)
    }

    /// True when the `span_x × span_y` rectangle at `(x, y)` has a positive
    /// area and lies fully inside the grid.
    fn rect_in_bounds(&self, x: i32, y: i32, span_x: i32, span_y: i32) -> bool {
        if x < 0 || y < 0 || span_x <= 0 || span_y <= 0 {
            return false;
        }
        match (x.checked_add(span_x), y.checked_add(span_y)) {
            (Some(x2), Some(y2)) => x2 <= self.count_x && y2 <= self.count_y,
            _ => false,
        }
    }

    /// Scan an in-bounds rectangle for any occupied cell.
    fn rect_is_clear(&self, x: i32, y: i32, span_x: i32, span_y: i32) -> bool {
        (x..x + span_x).all(|i| (y..y + span_y).all(|j| !self.cells[self.idx(i, j)]))
    }

    /// True iff the rectangle lies within the grid and every cell in it is
    /// vacant. Out-of-bounds or empty rectangles are not vacant.
    #[must_use]
    pub fn is_region_vacant(&self, x: i32, y: i32, span_x: i32, span_y: i32) -> bool {
        self.rect_in_bounds(x, y, span_x, span_y) && self.rect_is_clear(x, y, span_x, span_y)
    }

    /// Like [`Self::is_region_vacant`], additionally requiring the rectangle to
    /// sit inside the rows `policy` allows.
    pub fn is_region_vacant_in<P>(
        &self,
        x: i32,
        y: i32,
        span_x: i32,
        span_y: i32,
        policy: &P,
    ) -> bool
    where
        P: Eligibility + ?Sized,
    {
        if !self.rect_in_bounds(x, y, span_x, span_y) {
            return false;
        }
        let band = policy.rows(self.count_y);
        if y < band.start || y + span_y > band.end {
            return false;
        }
        self.rect_is_clear(x, y, span_x, span_y)
    }

    /// Vacancy test under the launcher's reserved-band policy for `category`.
    #[must_use]
    pub fn is_region_vacant_for(
        &self,
        x: i32,
        y: i32,
        span_x: i32,
        span_y: i32,
        category: ItemCategory,
    ) -> bool {
        self.is_region_vacant_in(x, y, span_x, span_y, &ReservedBand(category))
    }

    /// First vacant `span_x × span_y` rectangle inside the rows `policy`
    /// allows, scanning rows top to bottom and columns left to right.
    pub fn find_vacant_cell_in<P>(&self, span_x: i32, span_y: i32, policy: &P) -> Option<(i32, i32)>
    where
        P: Eligibility + ?Sized,
    {
        if span_x <= 0 || span_y <= 0 || span_x > self.count_x {
            return None;
        }
        let band = policy.rows(self.count_y);
        let start = band.start.max(0);
        let end = band.end.min(self.count_y);
        if end < span_y {
            trace!(span_x, span_y, ?band, "find_vacant_cell: band too short");
            return None;
        }
        let found = (start..=end - span_y).find_map(|y| {
            (0..=self.count_x - span_x)
                .find(|&x| self.rect_is_clear(x, y, span_x, span_y))
                .map(|x| (x, y))
        });
        trace!(span_x, span_y, ?band, ?found, "find_vacant_cell");
        found
    }

    /// First vacant span for an item of `category` under the reserved-band
    /// policy. `None` means there is no room, which is not an error.
    #[must_use]
    pub fn find_vacant_cell(
        &self,
        span_x: i32,
        span_y: i32,
        category: ItemCategory,
    ) -> Option<(i32, i32)> {
        self.find_vacant_cell_in(span_x, span_y, &ReservedBand(category))
    }

    /// Set every cell in the rectangle to `value`, clipped to the grid.
    /// Negative origins are ignored.
    pub fn mark_cells(&mut self, cell_x: i32, cell_y: i32, span_x: i32, span_y: i32, value: bool) {
        if cell_x < 0 || cell_y < 0 {
            return;
        }
        let x_end = cell_x.saturating_add(span_x).min(self.count_x);
        let y_end = cell_y.saturating_add(span_y).min(self.count_y);
        for x in cell_x..x_end {
            for y in cell_y..y_end {
                let i = self.idx(x, y);
                self.cells[i] = value;
            }
        }
    }

    /// [`Self::mark_cells`] over an item's span.
    pub fn mark_span(&mut self, span: &CellSpan, value: bool) {
        self.mark_cells(span.cell_x, span.cell_y, span.span_x, span.span_y, value);
    }

    /// Mark the whole grid vacant.
    pub fn clear(&mut self) {
        self.mark_cells(0, 0, self.count_x, self.count_y, false);
    }

    /// Copy this grid's cells into `dest`, which must have the same
    /// dimensions. On mismatch `dest` is left untouched.
    pub fn copy_to(&self, dest: &mut Self) -> Result<()> {
        if dest.count_x != self.count_x || dest.count_y != self.count_y {
            debug!(
                src = %format!("{}x{}", self.count_x, self.count_y),
                dst = %format!("{}x{}", dest.count_x, dest.count_y),
                "copy_to: dimension mismatch"
            );
            return Err(Error::DimensionMismatch {
                src_x: self.count_x(),
                src_y: self.count_y(),
                dst_x: dest.count_x(),
                dst_y: dest.count_y(),
            });
        }
        dest.cells.copy_from_slice(&self.cells);
        Ok(())
    }
}

impl Display for OccupancyGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for y in 0..self.count_y {
            let row: String = (0..self.count_x)
                .map(|x| if self.cells[self.idx(x, y)] { '#' } else { '.' })
                .collect();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AnyRow;

    fn grid(x: u32, y: u32) -> OccupancyGrid {
        OccupancyGrid::new(x, y).unwrap()
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            OccupancyGrid::new(0, 4),
            Err(Error::InvalidDimensions {
                count_x: 0,
                count_y: 4
            })
        );
        assert!(OccupancyGrid::new(4, 0).is_err());
        assert!(OccupancyGrid::new(u32::MAX, 1).is_err());
    }

    #[test]
    fn starts_vacant() {
        let g = grid(4, 6);
        assert_eq!(g.occupied_count(), 0);
        assert!(g.is_region_vacant(0, 0, 4, 6));
    }

    #[test]
    fn widget_search_skips_occupied_origin() {
        let mut g = grid(4, 6);
        g.mark_cells(0, 0, 1, 1, true);
        assert_eq!(g.find_vacant_cell(1, 1, ItemCategory::WidgetLike), Some((1, 0)));
    }

    #[test]
    fn other_search_starts_in_band() {
        let g = grid(4, 6);
        assert_eq!(g.find_vacant_cell(4, 2, ItemCategory::Other), Some((0, 4)));
        assert_eq!(g.find_vacant_cell(1, 1, ItemCategory::Other), Some((0, 4)));
    }

    #[test]
    fn widget_search_ignores_empty_band() {
        let mut g = grid(4, 6);
        g.mark_cells(0, 0, 4, 4, true);
        assert_eq!(g.find_vacant_cell(1, 1, ItemCategory::WidgetLike), None);
        assert_eq!(g.find_vacant_cell(1, 1, ItemCategory::Other), Some((0, 4)));
    }

    #[test]
    fn other_search_does_not_fall_back() {
        let mut g = grid(4, 6);
        g.mark_cells(0, 4, 4, 2, true);
        assert_eq!(g.find_vacant_cell(1, 1, ItemCategory::Other), None);
        assert_eq!(g.find_vacant_cell(1, 1, ItemCategory::WidgetLike), Some((0, 0)));
    }

    #[test]
    fn multi_cell_search_scans_row_major() {
        let mut g = grid(4, 6);
        g.mark_cells(1, 0, 1, 1, true);
        // (0,0) and (1,0) blocked by the occupied cell; (2,0) fits 2x2.
        assert_eq!(g.find_vacant_cell(2, 2, ItemCategory::WidgetLike), Some((2, 0)));
        g.mark_cells(3, 1, 1, 1, true);
        assert_eq!(g.find_vacant_cell(2, 2, ItemCategory::WidgetLike), Some((0, 1)));
    }

    #[test]
    fn oversized_spans_never_fit() {
        let g = grid(4, 6);
        assert_eq!(g.find_vacant_cell(5, 1, ItemCategory::WidgetLike), None);
        assert_eq!(g.find_vacant_cell(1, 5, ItemCategory::WidgetLike), None);
        assert_eq!(g.find_vacant_cell(1, 3, ItemCategory::Other), None);
        assert_eq!(g.find_vacant_cell(0, 1, ItemCategory::Other), None);
        assert_eq!(g.find_vacant_cell_in(1, 6, &AnyRow), Some((0, 0)));
    }

    #[test]
    fn region_vacancy_bounds() {
        let g = grid(4, 6);
        assert!(!g.is_region_vacant(-1, 0, 1, 1));
        assert!(!g.is_region_vacant(0, -1, 1, 1));
        assert!(!g.is_region_vacant(3, 0, 2, 1));
        assert!(!g.is_region_vacant(0, 5, 1, 2));
        assert!(!g.is_region_vacant(0, 0, 0, 1));
        assert!(!g.is_region_vacant(i32::MAX, 0, 2, 1));
        assert!(g.is_region_vacant(3, 5, 1, 1));
    }

    #[test]
    fn region_vacancy_respects_band() {
        let g = grid(4, 6);
        assert!(g.is_region_vacant_for(0, 2, 1, 2, ItemCategory::WidgetLike));
        assert!(!g.is_region_vacant_for(0, 3, 1, 2, ItemCategory::WidgetLike));
        assert!(!g.is_region_vacant_for(0, 4, 1, 1, ItemCategory::WidgetLike));
        assert!(g.is_region_vacant_for(0, 4, 4, 2, ItemCategory::Other));
        assert!(g.is_region_vacant_for(2, 5, 1, 1, ItemCategory::Other));
        assert!(!g.is_region_vacant_for(0, 3, 1, 1, ItemCategory::Other));
        assert!(!g.is_region_vacant_for(0, 5, 1, 2, ItemCategory::Other));
    }

    #[test]
    fn band_check_applies_before_occupancy() {
        let mut g = grid(4, 6);
        g.mark_cells(0, 0, 1, 1, true);
        assert!(!g.is_region_vacant_for(0, 0, 1, 1, ItemCategory::WidgetLike));
        assert!(!g.is_region_vacant_for(1, 0, 1, 1, ItemCategory::Other));
        assert!(g.is_region_vacant_for(1, 0, 1, 1, ItemCategory::WidgetLike));
    }

    #[test]
    fn mark_clips_and_ignores_negative_origin() {
        let mut g = grid(3, 3);
        g.mark_cells(-1, 0, 2, 2, true);
        g.mark_cells(0, -1, 2, 2, true);
        assert_eq!(g.occupied_count(), 0);
        g.mark_cells(2, 2, 5, 5, true);
        assert_eq!(g.occupied_count(), 1);
        assert!(g.is_occupied(2, 2));
        assert!(!g.is_occupied(3, 3));
    }

    #[test]
    fn mark_span_round_trip() {
        let mut g = grid(4, 6);
        let s = CellSpan::new(1, 1, 2, 3);
        g.mark_span(&s, true);
        assert_eq!(g.occupied_count(), 6);
        assert!(!g.is_region_vacant(1, 1, 2, 3));
        assert!(g.is_region_vacant(3, 0, 1, 6));
        g.mark_span(&s, false);
        assert!(g.is_region_vacant(0, 0, 4, 6));
        g.mark_span(&CellSpan::unplaced(1, 1), true);
        assert_eq!(g.occupied_count(), 0);
    }

    #[test]
    fn clear_empties_grid() {
        let mut g = grid(4, 6);
        g.mark_cells(0, 0, 4, 6, true);
        g.clear();
        assert!(g.is_region_vacant(0, 0, 4, 6));
    }

    #[test]
    fn copy_to_is_deep() {
        let mut a = grid(4, 6);
        a.mark_cells(1, 2, 2, 2, true);
        let mut b = grid(4, 6);
        b.mark_cells(0, 0, 1, 1, true);
        a.copy_to(&mut b).unwrap();
        assert_eq!(a, b);
        b.mark_cells(3, 5, 1, 1, true);
        assert!(!a.is_occupied(3, 5));
        a.clear();
        assert!(b.is_occupied(1, 2));
    }

    #[test]
    fn copy_to_rejects_mismatch() {
        let mut a = grid(4, 6);
        a.mark_cells(0, 0, 1, 1, true);
        let mut b = grid(5, 6);
        assert_eq!(
            a.copy_to(&mut b),
            Err(Error::DimensionMismatch {
                src_x: 4,
                src_y: 6,
                dst_x: 5,
                dst_y: 6
            })
        );
        assert_eq!(b.occupied_count(), 0);
    }

    #[test]
    fn display_renders_rows() {
        let mut g = grid(3, 2);
        g.mark_cells(1, 0, 1, 2, true);
        assert_eq!(g.to_string(), ".#.\n.#.\n");
    }

    #[test]
    fn negative_band_end_finds_nothing() {
        let g = grid(4, 6);
        let below = |_: i32| i32::MIN..i32::MIN;
        assert_eq!(g.find_vacant_cell_in(1, i32::MAX, &below), None);
        assert_eq!(g.find_vacant_cell_in(1, 1, &below), None);
        let short = |_: i32| 0..-1;
        assert_eq!(g.find_vacant_cell_in(1, 2, &short), None);
    }
}
