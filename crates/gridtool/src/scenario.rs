//! RON scenario files: grid metrics plus items to place in order.

use std::{fs, path::Path};

use cell_layout::{CellMetrics, CellSpan, ItemType, Planner};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// One item to place.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemSpec {
    /// Display name, also the layout key.
    pub name: String,
    /// Item type, which decides the eligible rows.
    pub kind: ItemType,
    /// `(span_x, span_y)`.
    pub span: (i32, i32),
    /// Fixed cell; when absent the first vacant span is used.
    #[serde(default)]
    pub at: Option<(i32, i32)>,
}

/// A whole scenario file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Scenario {
    /// Grid metrics.
    pub metrics: CellMetrics,
    /// Items in placement order.
    #[serde(default)]
    pub items: Vec<ItemSpec>,
}

/// Outcome of placing one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// Item landed at this span.
    Placed(CellSpan),
    /// No room, or the fixed cell was not available.
    Skipped,
}

impl Scenario {
    /// Parse a scenario from RON text.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(ron::from_str(text)?)
    }

    /// Read and parse a scenario file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded scenario");
        Self::parse(&text)
    }

    /// Place every item in order, returning the planner and per-item outcomes.
    pub fn run(&self) -> Result<(Planner<String>, Vec<(String, Placement)>)> {
        let mut planner = Planner::new(self.metrics)?;
        let mut outcomes = Vec::with_capacity(self.items.len());
        for item in &self.items {
            let (sx, sy) = item.span;
            let placed = match item.at {
                Some((x, y)) => planner
                    .place_at(item.name.clone(), item.kind, x, y, sx, sy)?
                    .then(|| CellSpan::new(x, y, sx, sy)),
                None => planner.place(item.name.clone(), item.kind, sx, sy)?,
            };
            let outcome = match placed {
                Some(span) => Placement::Placed(span),
                None => {
                    warn!(name = %item.name, kind = ?item.kind, "item skipped");
                    Placement::Skipped
                }
            };
            outcomes.push((item.name.clone(), outcome));
        }
        Ok((planner, outcomes))
    }
}
