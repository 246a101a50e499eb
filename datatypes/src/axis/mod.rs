mod canonical;
mod compass;
mod direction;
mod meridian;

pub use canonical::{
    SortedAxes, apply_permutation, canonical_permutation, compare_axes, is_canonical, sort_axes,
    sort_axes_in_place,
};
pub use compass::{COMPASS_DIRECTION_COUNT, compass_angle, compass_angle_degrees};
pub use direction::AxisDirection;
pub use meridian::{DirectionAlongMeridian, MeridianBase};

use serde::{Deserialize, Serialize};

/// Anything that has an axis direction can be brought into canonical order.
pub trait HasAxisDirection {
    /// The direction of the axis, `None` if it is unknown.
    fn axis_direction(&self) -> Option<&AxisDirection>;
}

impl HasAxisDirection for AxisDirection {
    fn axis_direction(&self) -> Option<&AxisDirection> {
        Some(self)
    }
}

impl HasAxisDirection for Option<AxisDirection> {
    fn axis_direction(&self) -> Option<&AxisDirection> {
        self.as_ref()
    }
}

impl<T: HasAxisDirection + ?Sized> HasAxisDirection for &T {
    fn axis_direction(&self) -> Option<&AxisDirection> {
        (**self).axis_direction()
    }
}

/// One dimension of a coordinate system.
///
/// Only the direction takes part in ordering; name, abbreviation and unit are carried along.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinateSystemAxis {
    name: String,
    #[serde(default)]
    abbreviation: String,
    #[serde(default)]
    direction: Option<AxisDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    unit: Option<String>,
}

impl CoordinateSystemAxis {
    pub fn new(
        name: impl Into<String>,
        abbreviation: impl Into<String>,
        direction: impl Into<Option<AxisDirection>>,
    ) -> Self {
        Self {
            name: name.into(),
            abbreviation: abbreviation.into(),
            direction: direction.into(),
            unit: None,
        }
    }

    /// An axis that is named after its direction.
    pub fn from_direction(direction: AxisDirection) -> Self {
        Self::new(direction.to_string(), String::new(), direction)
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    pub fn direction(&self) -> Option<&AxisDirection> {
        self.direction.as_ref()
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }
}

impl HasAxisDirection for CoordinateSystemAxis {
    fn axis_direction(&self) -> Option<&AxisDirection> {
        self.direction.as_ref()
    }
}
