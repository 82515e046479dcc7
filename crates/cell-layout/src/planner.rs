use std::fmt::Debug;

use grid_occupancy::{CellSpan, ItemCategory, ItemType, OccupancyGrid};
use tracing::{debug, info};

use crate::{CellLayout, CellMetrics, Error, LayoutPass, Point, Result};

/// Places items on a [`CellLayout`], keeping its [`OccupancyGrid`] in step.
///
/// A committed placement adds the child to the layout and then marks its
/// cells; removing a child unmarks them.
#[derive(Clone, Debug)]
pub struct Planner<K> {
    /// Layout receiving placed children.
    layout: CellLayout<K>,
    /// Live occupancy of the layout.
    grid: OccupancyGrid,
}

impl<K> Planner<K>
where
    K: Clone + PartialEq + Debug,
{
    /// An empty surface with the given metrics.
    pub fn new(metrics: CellMetrics) -> Result<Self> {
        Ok(Self {
            grid: metrics.grid()?,
            layout: CellLayout::new(metrics)?,
        })
    }

    /// Adopt an existing layout, rebuilding occupancy from its children.
    pub fn from_layout(layout: CellLayout<K>) -> Result<Self> {
        let grid = layout.occupancy()?;
        Ok(Self { layout, grid })
    }

    /// The layout being planned.
    pub fn layout(&self) -> &CellLayout<K> {
        &self.layout
    }

    /// Record the container size and recompute frames.
    pub fn measure(&mut self, width: i32, height: i32) {
        self.layout.measure(width, height);
    }

    /// Run a layout pass; see [`CellLayout::layout`].
    pub fn layout_pass(&mut self) -> LayoutPass<K> {
        self.layout.layout()
    }

    /// Mirror columns whenever the layout is right-to-left.
    pub fn set_invert_if_rtl(&mut self, invert: bool) {
        self.layout.set_invert_if_rtl(invert);
    }

    /// Set the locale direction.
    pub fn set_rtl(&mut self, rtl: bool) {
        self.layout.set_rtl(rtl);
    }

    /// Screen position of the container, used for drop points.
    pub fn set_screen_origin(&mut self, origin: Point) {
        self.layout.set_screen_origin(origin);
    }

    /// Show or hide a placed child.
    pub fn set_visible(&mut self, key: &K, visible: bool) -> Result<()> {
        self.layout.set_visible(key, visible)
    }

    /// Let a placed child cover the whole container.
    pub fn set_fullscreen(&mut self, key: &K, fullscreen: bool) -> Result<()> {
        self.layout.set_fullscreen(key, fullscreen)
    }

    /// Flag a placed child as dropped.
    pub fn mark_dropped(&mut self, key: &K) -> Result<()> {
        self.layout.mark_dropped(key)
    }

    /// The live occupancy grid.
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// Release the layout and grid.
    pub fn into_parts(self) -> (CellLayout<K>, OccupancyGrid) {
        (self.layout, self.grid)
    }

    /// Put `key` at the first vacant span its type allows.
    ///
    /// Returns `Ok(None)` when there is no room; the layout is unchanged.
    pub fn place(
        &mut self,
        key: K,
        item_type: ItemType,
        span_x: i32,
        span_y: i32,
    ) -> Result<Option<CellSpan>> {
        let category = item_type.category();
        let Some((x, y)) = self.grid.find_vacant_cell(span_x, span_y, category) else {
            info!(?key, ?item_type, span_x, span_y, "no vacant span");
            return Ok(None);
        };
        let span = CellSpan::new(x, y, span_x, span_y);
        self.commit(key, span)?;
        Ok(Some(span))
    }

    /// Put `key` at `(x, y)` if that region is vacant and allowed for its type.
    ///
    /// Returns `Ok(false)` without changes when it is not.
    pub fn place_at(
        &mut self,
        key: K,
        item_type: ItemType,
        x: i32,
        y: i32,
        span_x: i32,
        span_y: i32,
    ) -> Result<bool> {
        if !self
            .grid
            .is_region_vacant_for(x, y, span_x, span_y, item_type.category())
        {
            debug!(?key, x, y, span_x, span_y, "place_at: region not available");
            return Ok(false);
        }
        self.commit(key, CellSpan::new(x, y, span_x, span_y))?;
        Ok(true)
    }

    /// Add the child, then mark its cells.
    fn commit(&mut self, key: K, span: CellSpan) -> Result<()> {
        debug!(?key, ?span, "place");
        self.layout.add_child(key, span)?;
        self.grid.mark_span(&span, true);
        Ok(())
    }

    /// Where an item of `category` would go, without committing anything.
    pub fn trial(&self, span_x: i32, span_y: i32, category: ItemCategory) -> Option<CellSpan> {
        self.grid
            .find_vacant_cell(span_x, span_y, category)
            .map(|(x, y)| CellSpan::new(x, y, span_x, span_y))
    }

    /// Run `f` against a copy of the live grid and return its result.
    ///
    /// Useful for multi-step previews, e.g. during a drag, where several
    /// speculative marks are made before deciding.
    pub fn with_snapshot<R>(&self, f: impl FnOnce(&mut OccupancyGrid) -> R) -> Result<R> {
        let mut snapshot = self.layout.metrics().grid()?;
        self.grid.copy_to(&mut snapshot)?;
        Ok(f(&mut snapshot))
    }

    /// Remove a child and free its cells.
    pub fn remove(&mut self, key: &K) -> Result<CellSpan> {
        let params = self.layout.remove_child(key)?;
        self.grid.mark_span(&params.span, false);
        debug!(?key, span = ?params.span, "removed");
        Ok(params.span)
    }

    /// Move a child to `(x, y)` if the region, ignoring the child's own cells,
    /// is vacant for its type. Returns `Ok(false)` and leaves the child in place
    /// otherwise. The child keeps its flags and its position in child order.
    pub fn move_to(&mut self, key: &K, item_type: ItemType, x: i32, y: i32) -> Result<bool> {
        let old = self
            .layout
            .params(key)
            .ok_or_else(|| Error::UnknownChild {
                key: format!("{key:?}"),
            })?
            .span;
        self.grid.mark_span(&old, false);
        let fits = self
            .grid
            .is_region_vacant_for(x, y, old.span_x, old.span_y, item_type.category());
        if !fits {
            self.grid.mark_span(&old, true);
            debug!(?key, x, y, "move_to: region not available");
            return Ok(false);
        }
        let span = old.at(x, y);
        self.layout.set_span(key, span)?;
        self.grid.mark_span(&span, true);
        debug!(?key, from = ?old, to = ?span, "moved");
        Ok(true)
    }
}
