use crate::axis::{
    AxisDirection, CoordinateSystemAxis, DirectionAlongMeridian, MeridianBase, SortedAxes,
    apply_permutation, is_canonical, sort_axes,
};
use crate::error::DimensionMismatchSnafu;
use crate::util::Result;
use serde::{Deserialize, Serialize};
use snafu::ensure;

/// A named sequence of axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinateSystem {
    name: String,
    axes: Vec<CoordinateSystemAxis>,
}

impl CoordinateSystem {
    pub fn new(name: impl Into<String>, axes: Vec<CoordinateSystemAxis>) -> Self {
        Self {
            name: name.into(),
            axes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn axes(&self) -> &[CoordinateSystemAxis] {
        &self.axes
    }

    pub fn dimension(&self) -> usize {
        self.axes.len()
    }

    /// Creates a copy of this coordinate system with its axes in canonical order.
    pub fn standard(&self) -> Result<StandardCoordinateSystem> {
        let SortedAxes {
            axes,
            source_indices,
            changed,
        } = sort_axes(self.axes.clone())?;

        Ok(StandardCoordinateSystem {
            coordinate_system: Self::new(self.name.clone(), axes),
            source_indices,
            changed,
        })
    }

    pub fn is_standard(&self) -> Result<bool> {
        is_canonical(&self.axes)
    }

    /// Latitude and longitude in degrees.
    pub fn geographic_2d() -> Self {
        Self::new(
            "Ellipsoidal 2D",
            vec![
                CoordinateSystemAxis::new("Geodetic latitude", "Lat", AxisDirection::North)
                    .with_unit("degree"),
                CoordinateSystemAxis::new("Geodetic longitude", "Lon", AxisDirection::East)
                    .with_unit("degree"),
            ],
        )
    }

    /// Latitude and longitude in degrees and ellipsoidal height in metres.
    pub fn geographic_3d() -> Self {
        let mut axes = Self::geographic_2d().axes;
        axes.push(
            CoordinateSystemAxis::new("Ellipsoidal height", "h", AxisDirection::Up)
                .with_unit("metre"),
        );

        Self::new("Ellipsoidal 3D", axes)
    }

    /// Easting and northing in metres.
    pub fn projected_2d() -> Self {
        Self::new(
            "Cartesian 2D",
            vec![
                CoordinateSystemAxis::new("Easting", "E", AxisDirection::East).with_unit("metre"),
                CoordinateSystemAxis::new("Northing", "N", AxisDirection::North)
                    .with_unit("metre"),
            ],
        )
    }

    /// The axes of the universal polar stereographic projection for the north pole.
    pub fn polar_stereographic_north() -> Self {
        let along = |meridian| {
            DirectionAlongMeridian::new(MeridianBase::South, meridian)
                .map_or(AxisDirection::Other, AxisDirection::AlongMeridian)
        };

        Self::new(
            "Cartesian 2D for UPS north",
            vec![
                CoordinateSystemAxis::new("Easting", "E", along(90.)).with_unit("metre"),
                CoordinateSystemAxis::new("Northing", "N", along(180.)).with_unit("metre"),
            ],
        )
    }

    /// Time in days.
    pub fn temporal() -> Self {
        Self::new(
            "Temporal",
            vec![CoordinateSystemAxis::new("Time", "t", AxisDirection::Future).with_unit("day")],
        )
    }
}

/// A coordinate system in canonical axis order together with the reordering
/// that led there.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardCoordinateSystem {
    coordinate_system: CoordinateSystem,
    source_indices: Vec<usize>,
    changed: bool,
}

impl StandardCoordinateSystem {
    pub fn coordinate_system(&self) -> &CoordinateSystem {
        &self.coordinate_system
    }

    pub fn into_coordinate_system(self) -> CoordinateSystem {
        self.coordinate_system
    }

    /// For every standard axis, its position in the source coordinate system.
    pub fn source_indices(&self) -> &[usize] {
        &self.source_indices
    }

    pub fn changed(&self) -> bool {
        self.changed
    }

    /// Moves the ordinates of a coordinate given in the source axis order into
    /// the standard axis order.
    pub fn reorder_coordinate(&self, coordinate: &[f64]) -> Result<Vec<f64>> {
        ensure!(
            coordinate.len() == self.source_indices.len(),
            DimensionMismatchSnafu {
                expected: self.source_indices.len(),
                found: coordinate.len(),
            }
        );

        apply_permutation(coordinate.to_vec(), &self.source_indices)
    }
}
