//! `probe` subcommand: where would one more item go?

use grid_occupancy::ItemCategory;

use crate::{cli::ProbeArgs, error::Result, scenario::Scenario};

/// Run the `probe` subcommand.
pub fn run(args: &ProbeArgs) -> Result<()> {
    let scenario = Scenario::load(&args.scenario)?;
    println!("{}", probe(&scenario, args.span, args.category.into())?);
    Ok(())
}

/// Place the scenario, then describe the first vacant span for the probe.
fn probe(scenario: &Scenario, span: (i32, i32), category: ItemCategory) -> Result<String> {
    let (planner, _) = scenario.run()?;
    let (sx, sy) = span;
    Ok(match planner.trial(sx, sy, category) {
        Some(s) => format!("{sx}x{sy} {category}: ({}, {})", s.cell_x, s.cell_y),
        None => format!("{sx}x{sy} {category}: no vacant span"),
    })
}
