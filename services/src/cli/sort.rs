#![allow(clippy::print_stdout)] // okay in CLI

use crate::canonicalization::{axes_from_directions, canonicalize, read_axis_input, to_json};
use crate::config::{self, get_config_element};
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Brings axes into canonical order
#[derive(Debug, Parser)]
#[command(group(ArgGroup::new("axes").required(true).args(["directions", "input"])))]
pub struct SortAxes {
    /// Axis directions, e.g. `north` or `"South along 90°E"`
    #[arg(long = "direction", short = 'd', num_args = 1..)]
    directions: Vec<String>,

    /// JSON file with a coordinate system, an array of axes or an array of directions
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,
}

/// Outputs the axes in canonical order as JSON to `STDOUT`
pub fn sort_axes(params: SortAxes) -> Result<(), anyhow::Error> {
    let output: config::Output = get_config_element()?;

    let axes = match params.input {
        Some(path) => read_axis_input(&path)?.into_axes(),
        None => axes_from_directions(&params.directions),
    };

    let report = canonicalize(axes)?;

    println!("{}", to_json(&report, output.pretty)?);

    Ok(())
}
