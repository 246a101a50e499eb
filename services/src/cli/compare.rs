#![allow(clippy::print_stdout)] // okay in CLI

use crate::canonicalization::{compare, to_json};
use crate::config::{self, get_config_element};
use clap::Parser;
use geoaxis_datatypes::axis::AxisDirection;

/// Compares two axis directions
#[derive(Debug, Parser)]
pub struct CompareDirections {
    /// The first direction
    first: String,

    /// The second direction
    second: String,
}

/// Outputs the ordering of two directions as JSON to `STDOUT`
pub fn compare_directions(params: CompareDirections) -> Result<(), anyhow::Error> {
    let output: config::Output = get_config_element()?;

    let report = compare(
        AxisDirection::from(params.first.as_str()),
        AxisDirection::from(params.second.as_str()),
    );

    println!("{}", to_json(&report, output.pretty)?);

    Ok(())
}
