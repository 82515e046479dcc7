//! Command-line interface definitions for gridtool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use grid_occupancy::ItemCategory;
use logging::LogArgs;

/// Command-line interface for the `gridtool` binary.
#[derive(Parser, Debug)]
#[command(
    name = "gridtool",
    about = "Place launcher items on a cell grid and inspect the result",
    version
)]
pub struct Cli {
    /// Logging controls shared across workspace binaries.
    #[command(flatten)]
    pub log: LogArgs,

    /// Which command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Place every item of a scenario and print the grid and frames.
    Place(PlaceArgs),
    /// Place a scenario, then report where one more item would go.
    Probe(ProbeArgs),
}

/// Arguments for the `place` subcommand.
#[derive(Args, Debug, Clone)]
pub struct PlaceArgs {
    /// Scenario file in RON syntax.
    #[arg(value_name = "SCENARIO")]
    pub scenario: PathBuf,

    /// Mirror columns as for a right-to-left locale.
    #[arg(long)]
    pub rtl: bool,
}

/// Arguments for the `probe` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ProbeArgs {
    /// Scenario file in RON syntax.
    #[arg(value_name = "SCENARIO")]
    pub scenario: PathBuf,

    /// Span of the probed item as `WxH`, e.g. `2x1`.
    #[arg(long, default_value = "1x1", value_parser = parse_span)]
    pub span: (i32, i32),

    /// Row band to search.
    #[arg(long, value_enum, default_value_t = CategoryArg::Widget)]
    pub category: CategoryArg,
}

/// Item category as spelled on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryArg {
    /// Widgets and shortcuts, above the reserved rows.
    Widget,
    /// Everything else, inside the reserved rows.
    Other,
}

impl From<CategoryArg> for ItemCategory {
    fn from(c: CategoryArg) -> Self {
        match c {
            CategoryArg::Widget => Self::WidgetLike,
            CategoryArg::Other => Self::Other,
        }
    }
}

/// Parse `WxH` into a positive span.
pub fn parse_span(s: &str) -> Result<(i32, i32), String> {
    let bad = || format!("span '{s}' is not of the form WxH");
    let (w, h) = s.split_once(['x', 'X']).ok_or_else(bad)?;
    let w: i32 = w.trim().parse().map_err(|_| bad())?;
    let h: i32 = h.trim().parse().map_err(|_| bad())?;
    if w <= 0 || h <= 0 {
        return Err(format!("span '{s}' must be positive"));
    }
    Ok((w, h))
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_span_forms() {
        assert_eq!(parse_span("2x1").unwrap(), (2, 1));
        assert_eq!(parse_span("3X4").unwrap(), (3, 4));
        assert!(parse_span("0x1").is_err());
        assert!(parse_span("2").is_err());
        assert!(parse_span("ax1").is_err());
    }

    #[test]
    fn probe_args_parse() {
        let cli = Cli::try_parse_from([
            "gridtool",
            "--debug",
            "probe",
            "home.ron",
            "--span",
            "2x2",
            "--category",
            "other",
        ])
        .unwrap();
        assert!(cli.log.debug);
        match cli.command {
            Commands::Probe(p) => {
                assert_eq!(p.span, (2, 2));
                assert_eq!(p.category, CategoryArg::Other);
            }
            Commands::Place(_) => panic!("expected probe"),
        }
    }
}
