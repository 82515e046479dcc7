use std::fmt::Debug;

use grid_occupancy::{CellSpan, OccupancyGrid};
use tracing::{debug, trace};

use crate::{CellMetrics, Error, LayoutParams, Point, Rect, Result};

/// A child of the layout.
#[derive(Clone, Debug)]
struct Child<K> {
    /// Caller-supplied identity.
    key: K,
    /// Placement and computed frame.
    params: LayoutParams,
    /// Hidden children are skipped by measure and layout.
    visible: bool,
}

/// Final frame of one visible child after a layout pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChildFrame<K> {
    /// Child key.
    pub key: K,
    /// Frame in container coordinates.
    pub frame: Rect,
}

/// Drop point for a child that was flagged dropped, in screen coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropEvent<K> {
    /// Child key.
    pub key: K,
    /// Centre of the child's frame offset by the container's screen origin.
    pub at: Point,
}

/// Result of [`CellLayout::layout`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutPass<K> {
    /// Frames in child order.
    pub frames: Vec<ChildFrame<K>>,
    /// Drop points reported by this pass.
    pub drops: Vec<DropEvent<K>>,
}

/// Container positioning children on a fixed cell grid.
///
/// Children keep insertion order; lookups by cell return the first child whose
/// span covers the cell.
#[derive(Clone, Debug)]
pub struct CellLayout<K> {
    /// Grid metrics.
    metrics: CellMetrics,
    /// Children in insertion order.
    children: Vec<Child<K>>,
    /// Mirror columns when the locale is right-to-left.
    invert_if_rtl: bool,
    /// Current locale direction.
    rtl: bool,
    /// Measured container size.
    measured: (i32, i32),
    /// Container origin on screen.
    screen_origin: Point,
}

impl<K> CellLayout<K>
where
    K: Clone + PartialEq + Debug,
{
    /// Empty layout with the given metrics.
    ///
    /// Fails with [`Error::InvalidMetrics`] when the grid's pixel extent does
    /// not fit in an `i32`.
    pub fn new(metrics: CellMetrics) -> Result<Self> {
        metrics.validate()?;
        Ok(Self {
            metrics,
            children: Vec::new(),
            invert_if_rtl: false,
            rtl: false,
            measured: metrics.content_size()?,
            screen_origin: Point::default(),
        })
    }

    /// Grid metrics.
    pub fn metrics(&self) -> &CellMetrics {
        &self.metrics
    }

    /// Replace the metrics. Frames are recomputed on the next measure pass.
    pub fn set_metrics(&mut self, metrics: CellMetrics) -> Result<()> {
        metrics.validate()?;
        self.metrics = metrics;
        Ok(())
    }

    /// Mirror columns whenever the layout is right-to-left.
    pub fn set_invert_if_rtl(&mut self, invert: bool) {
        self.invert_if_rtl = invert;
    }

    /// Set the locale direction.
    pub fn set_rtl(&mut self, rtl: bool) {
        self.rtl = rtl;
    }

    /// Screen position of the container's top-left corner, used for drop points.
    pub fn set_screen_origin(&mut self, origin: Point) {
        self.screen_origin = origin;
    }

    /// True when columns are mirrored.
    pub fn invert_layout_horizontally(&self) -> bool {
        self.invert_if_rtl && self.rtl
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True when there are no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Position of the child with `key`.
    fn index_of(&self, key: &K) -> Option<usize> {
        self.children.iter().position(|c| &c.key == key)
    }

    /// Add a child at `span`.
    pub fn add_child(&mut self, key: K, span: CellSpan) -> Result<()> {
        if self.index_of(&key).is_some() {
            return Err(Error::DuplicateChild {
                key: format!("{key:?}"),
            });
        }
        trace!(?key, ?span, "add_child");
        let mut params = LayoutParams::new(span);
        params.setup(&self.metrics, self.invert_layout_horizontally());
        self.children.push(Child {
            key,
            params,
            visible: true,
        });
        Ok(())
    }

    /// Remove a child, returning its params.
    pub fn remove_child(&mut self, key: &K) -> Result<LayoutParams> {
        let idx = self.index_of(key).ok_or_else(|| Error::UnknownChild {
            key: format!("{key:?}"),
        })?;
        Ok(self.children.remove(idx).params)
    }

    /// Params of a child.
    pub fn params(&self, key: &K) -> Option<&LayoutParams> {
        self.index_of(key).map(|i| &self.children[i].params)
    }

    /// The child with `key`, or [`Error::UnknownChild`].
    fn child_mut(&mut self, key: &K) -> Result<&mut Child<K>> {
        let idx = self.index_of(key).ok_or_else(|| Error::UnknownChild {
            key: format!("{key:?}"),
        })?;
        Ok(&mut self.children[idx])
    }

    /// Show or hide a child.
    pub fn set_visible(&mut self, key: &K, visible: bool) -> Result<()> {
        self.child_mut(key)?.visible = visible;
        Ok(())
    }

    /// Let a child cover the whole container instead of its cells.
    pub fn set_fullscreen(&mut self, key: &K, fullscreen: bool) -> Result<()> {
        self.child_mut(key)?.params.fullscreen = fullscreen;
        Ok(())
    }

    /// Flag a child as dropped so the next layout pass reports its drop point.
    pub fn mark_dropped(&mut self, key: &K) -> Result<()> {
        self.child_mut(key)?.params.dropped = true;
        Ok(())
    }

    /// Move a child to `span`, keeping its flags, visibility and list position.
    pub fn set_span(&mut self, key: &K, span: CellSpan) -> Result<()> {
        let invert = self.invert_layout_horizontally();
        let metrics = self.metrics;
        let child = self.child_mut(key)?;
        trace!(?key, from = ?child.params.span, to = ?span, "set_span");
        child.params.span = span;
        if !child.params.fullscreen {
            child.params.setup(&metrics, invert);
        }
        Ok(())
    }

    /// Keys in child order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.children.iter().map(|c| &c.key)
    }

    /// The first child whose span covers cell `(x, y)`.
    pub fn child_at(&self, x: i32, y: i32) -> Option<&K> {
        self.children
            .iter()
            .find(|c| c.params.span.contains(x, y))
            .map(|c| &c.key)
    }

    /// Record the container size and recompute every visible child's frame.
    pub fn measure(&mut self, width: i32, height: i32) {
        self.measured = (width, height);
        let invert = self.invert_layout_horizontally();
        for child in self.children.iter_mut().filter(|c| c.visible) {
            if child.params.fullscreen {
                child.params.frame = Rect::new(0, 0, width, height);
            } else {
                child.params.setup(&self.metrics, invert);
            }
        }
    }

    /// Measure at the current size and collect frames and drop points.
    ///
    /// Each child's `dropped` flag is cleared once its drop point has been
    /// reported.
    pub fn layout(&mut self) -> LayoutPass<K> {
        let (w, h) = self.measured;
        self.measure(w, h);
        let origin = self.screen_origin;
        let mut pass = LayoutPass {
            frames: Vec::new(),
            drops: Vec::new(),
        };
        for child in self.children.iter_mut().filter(|c| c.visible) {
            let frame = child.params.frame;
            pass.frames.push(ChildFrame {
                key: child.key.clone(),
                frame,
            });
            if child.params.dropped {
                child.params.dropped = false;
                let at = frame.offset(origin).center();
                debug!(key = ?child.key, x = at.x, y = at.y, "drop");
                pass.drops.push(DropEvent {
                    key: child.key.clone(),
                    at,
                });
            }
        }
        pass
    }

    /// Occupancy grid rebuilt from all placed children.
    pub fn occupancy(&self) -> Result<OccupancyGrid> {
        let mut grid = self.metrics.grid()?;
        for child in &self.children {
            grid.mark_span(&child.params.span, true);
        }
        Ok(grid)
    }
}
