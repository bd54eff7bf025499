use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::error::Error;

use clap::{Args, ValueEnum};
use glitch_core::{marks, Placement};
use serde::Serialize;

#[derive(Args, Debug)]
pub struct MarksArgs {
    /// Only dump one table.
    #[arg(long, value_enum)]
    pub placement: Option<PlacementArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PlacementArg {
    Top,
    Middle,
    Bottom,
}

impl From<PlacementArg> for Placement {
    fn from(arg: PlacementArg) -> Self {
        match arg {
            PlacementArg::Top => Placement::Top,
            PlacementArg::Middle => Placement::Middle,
            PlacementArg::Bottom => Placement::Bottom,
        }
    }
}

#[derive(Debug, Serialize)]
struct TableReport {
    count: usize,
    distinct: usize,
    code_points: Vec<String>,
}

pub fn run(args: &MarksArgs) -> Result<(), Box<dyn Error>> {
    let placements = match args.placement {
        Some(arg) => vec![Placement::from(arg)],
        None => Placement::ALL.to_vec(),
    };
    let report: BTreeMap<Placement, TableReport> = placements
        .into_iter()
        .map(|placement| (placement, table_report(placement)))
        .collect();
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn table_report(placement: Placement) -> TableReport {
    let table = marks().for_placement(placement);
    TableReport {
        count: table.len(),
        distinct: table.iter().collect::<BTreeSet<_>>().len(),
        code_points: table
            .iter()
            .map(|ch| format!("U+{:04X}", *ch as u32))
            .collect(),
    }
}
