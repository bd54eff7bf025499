use std::error::Error;

use clap::Args;
use glitch_core::{marks, GlitchConfig};
use serde::Serialize;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit table sizes and encoder defaults as JSON.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: &'static str,
    top_marks: usize,
    middle_marks: usize,
    bottom_marks: usize,
    defaults: GlitchConfig,
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.long {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let tables = marks();
    let info = VersionInfo {
        version: env!("CARGO_PKG_VERSION"),
        top_marks: tables.top().len(),
        middle_marks: tables.middle().len(),
        bottom_marks: tables.bottom().len(),
        defaults: GlitchConfig::default(),
    };
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
