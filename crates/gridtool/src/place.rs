//! `place` subcommand: run a scenario and print what landed where.

use std::fmt::Write as _;

use cell_layout::{LayoutPass, OccupancyGrid};
use tracing::info;

use crate::{
    cli::PlaceArgs,
    error::Result,
    scenario::{Placement, Scenario},
};

/// Run the `place` subcommand.
pub fn run(args: &PlaceArgs) -> Result<()> {
    let scenario = Scenario::load(&args.scenario)?;
    let (mut planner, outcomes) = scenario.run()?;
    planner.set_invert_if_rtl(true);
    planner.set_rtl(args.rtl);
    let pass = planner.layout_pass();
    let placed = outcomes
        .iter()
        .filter(|(_, p)| matches!(p, Placement::Placed(_)))
        .count();
    info!(placed, total = outcomes.len(), "scenario placed");
    print!("{}", render(planner.grid(), &outcomes, &pass));
    Ok(())
}

/// Grid picture followed by one line per item.
fn render(
    grid: &OccupancyGrid,
    outcomes: &[(String, Placement)],
    pass: &LayoutPass<String>,
) -> String {
    let mut out = grid.to_string();
    out.push('\n');
    for (name, outcome) in outcomes {
        match outcome {
            Placement::Placed(span) => {
                let frame = pass
                    .frames
                    .iter()
                    .find(|f| &f.key == name)
                    .map(|f| f.frame)
                    .unwrap_or_default();
                let _ignored = writeln!(
                    out,
                    "{name}: cell ({}, {}) span {}x{} frame {}x{}+{}+{}",
                    span.cell_x,
                    span.cell_y,
                    span.span_x,
                    span.span_y,
                    frame.w,
                    frame.h,
                    frame.x,
                    frame.y
                );
            }
            Placement::Skipped => {
                let _ignored = writeln!(out, "{name}: skipped (no room)");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use cell_layout::{CellMetrics, CellSpan, ItemType, Planner};

    use super::*;

    #[test]
    fn render_lists_items() {
        let metrics = CellMetrics {
            cell_width: 10,
            cell_height: 20,
            width_gap: 0,
            height_gap: 0,
            count_x: 3,
            count_y: 3,
        };
        let mut planner = Planner::new(metrics).unwrap();
        planner
            .place("w".to_string(), ItemType::AppWidget, 2, 1)
            .unwrap();
        let outcomes = vec![
            (
                "w".to_string(),
                Placement::Placed(CellSpan::new(0, 0, 2, 1)),
            ),
            ("x".to_string(), Placement::Skipped),
        ];
        let pass = planner.layout_pass();
        let text = render(planner.grid(), &outcomes, &pass);
        assert_eq!(
            text,
            "##.\n...\n...\n\nw: cell (0, 0) span 2x1 frame 20x20+0+0\nx: skipped (no room)\n"
        );
    }
}
