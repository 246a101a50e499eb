use crate::error::{self, Result};
use geoaxis_datatypes::axis::{
    AxisDirection, CoordinateSystemAxis, SortedAxes, compare_axes, compass_angle, sort_axes,
};
use geoaxis_datatypes::coordinate_system::CoordinateSystem;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use std::cmp::Ordering;
use std::path::Path;

/// The accepted shapes of axis input files.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AxisInput {
    CoordinateSystem(CoordinateSystem),
    Axes(Vec<CoordinateSystemAxis>),
    Directions(Vec<AxisDirection>),
}

impl AxisInput {
    pub fn into_axes(self) -> Vec<CoordinateSystemAxis> {
        match self {
            AxisInput::CoordinateSystem(coordinate_system) => coordinate_system.axes().to_vec(),
            AxisInput::Axes(axes) => axes,
            AxisInput::Directions(directions) => directions
                .into_iter()
                .map(CoordinateSystemAxis::from_direction)
                .collect(),
        }
    }
}

pub fn read_axis_input(path: &Path) -> Result<AxisInput> {
    let content = std::fs::read_to_string(path).context(error::IoSnafu { path })?;

    serde_json::from_str(&content).context(error::SerdeJsonSnafu)
}

pub fn axes_from_directions<S: AsRef<str>>(directions: &[S]) -> Vec<CoordinateSystemAxis> {
    directions
        .iter()
        .map(|direction| CoordinateSystemAxis::from_direction(direction.as_ref().into()))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortReport {
    pub axes: Vec<CoordinateSystemAxis>,
    pub changed: bool,
    pub source_indices: Vec<usize>,
}

pub fn canonicalize(axes: Vec<CoordinateSystemAxis>) -> Result<SortReport> {
    let SortedAxes {
        axes,
        source_indices,
        changed,
    } = sort_axes(axes)?;

    tracing::info!(?source_indices, changed, "sorted axes");

    Ok(SortReport {
        axes,
        changed,
        source_indices,
    })
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisOrdering {
    Less,
    Equal,
    Greater,
}

impl From<Ordering> for AxisOrdering {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => AxisOrdering::Less,
            Ordering::Equal => AxisOrdering::Equal,
            Ordering::Greater => AxisOrdering::Greater,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub first: AxisDirection,
    pub second: AxisDirection,
    pub ordering: AxisOrdering,
    /// Rotation from the first to the second direction in sixteenths of a turn
    pub compass_angle: Option<i32>,
}

pub fn compare(first: AxisDirection, second: AxisDirection) -> ComparisonReport {
    ComparisonReport {
        ordering: compare_axes(&first, &second).into(),
        compass_angle: compass_angle(&first, &second),
        first,
        second,
    }
}

pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context(error::SerdeJsonSnafu)
}
