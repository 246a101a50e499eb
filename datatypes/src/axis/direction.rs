use crate::axis::meridian::{DirectionAlongMeridian, MeridianBase};
use serde::de::Visitor;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt::Formatter;
use std::str::FromStr;

/// The direction of a coordinate system axis.
///
/// Besides the fixed set of ISO 19111 directions there are two open variants:
/// directions along a meridian (used by polar projections) and any other named
/// direction this crate does not know about.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisDirection {
    Other,
    North,
    NorthNorthEast,
    NorthEast,
    EastNorthEast,
    East,
    EastSouthEast,
    SouthEast,
    SouthSouthEast,
    South,
    SouthSouthWest,
    SouthWest,
    WestSouthWest,
    West,
    WestNorthWest,
    NorthWest,
    NorthNorthWest,
    Up,
    Down,
    GeocentricX,
    GeocentricY,
    GeocentricZ,
    Future,
    Past,
    ColumnPositive,
    ColumnNegative,
    RowPositive,
    RowNegative,
    DisplayRight,
    DisplayLeft,
    DisplayUp,
    DisplayDown,
    AlongMeridian(DirectionAlongMeridian),
    Custom(String),
}

/// The compass points in clockwise order, starting at north.
static COMPASS_POINTS: [AxisDirection; 16] = [
    AxisDirection::North,
    AxisDirection::NorthNorthEast,
    AxisDirection::NorthEast,
    AxisDirection::EastNorthEast,
    AxisDirection::East,
    AxisDirection::EastSouthEast,
    AxisDirection::SouthEast,
    AxisDirection::SouthSouthEast,
    AxisDirection::South,
    AxisDirection::SouthSouthWest,
    AxisDirection::SouthWest,
    AxisDirection::WestSouthWest,
    AxisDirection::West,
    AxisDirection::WestNorthWest,
    AxisDirection::NorthWest,
    AxisDirection::NorthNorthWest,
];

impl AxisDirection {
    /// The position of this direction on the 16-point compass rose, clockwise from north.
    /// `None` for everything that is not a compass point.
    pub fn compass_index(&self) -> Option<usize> {
        Some(match self {
            Self::North => 0,
            Self::NorthNorthEast => 1,
            Self::NorthEast => 2,
            Self::EastNorthEast => 3,
            Self::East => 4,
            Self::EastSouthEast => 5,
            Self::SouthEast => 6,
            Self::SouthSouthEast => 7,
            Self::South => 8,
            Self::SouthSouthWest => 9,
            Self::SouthWest => 10,
            Self::WestSouthWest => 11,
            Self::West => 12,
            Self::WestNorthWest => 13,
            Self::NorthWest => 14,
            Self::NorthNorthWest => 15,
            _ => return None,
        })
    }

    pub fn from_compass_index(index: usize) -> Option<Self> {
        COMPASS_POINTS.get(index).cloned()
    }

    pub fn is_compass(&self) -> bool {
        self.compass_index().is_some()
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    pub fn is_temporal(&self) -> bool {
        matches!(self, Self::Future | Self::Past)
    }

    pub fn is_grid(&self) -> bool {
        matches!(
            self,
            Self::ColumnPositive | Self::ColumnNegative | Self::RowPositive | Self::RowNegative
        )
    }

    pub fn is_display(&self) -> bool {
        matches!(
            self,
            Self::DisplayRight | Self::DisplayLeft | Self::DisplayUp | Self::DisplayDown
        )
    }

    /// The meridian this direction points along, if any.
    ///
    /// Custom directions are parsed again, so that a custom name like
    /// `"South along 90°E"` still yields its meridian.
    pub fn meridian(&self) -> Option<DirectionAlongMeridian> {
        match self {
            Self::AlongMeridian(meridian) => Some(*meridian),
            Self::Custom(name) => DirectionAlongMeridian::parse(name),
            _ => None,
        }
    }

    /// The direction pointing the other way, if there is one.
    pub fn opposite(&self) -> Option<Self> {
        if let Some(index) = self.compass_index() {
            return Self::from_compass_index(
                (index + COMPASS_POINTS.len() / 2) % COMPASS_POINTS.len(),
            );
        }

        Some(match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Future => Self::Past,
            Self::Past => Self::Future,
            Self::ColumnPositive => Self::ColumnNegative,
            Self::ColumnNegative => Self::ColumnPositive,
            Self::RowPositive => Self::RowNegative,
            Self::RowNegative => Self::RowPositive,
            Self::DisplayRight => Self::DisplayLeft,
            Self::DisplayLeft => Self::DisplayRight,
            Self::DisplayUp => Self::DisplayDown,
            Self::DisplayDown => Self::DisplayUp,
            Self::AlongMeridian(meridian) => Self::AlongMeridian(meridian.opposite()),
            _ => return None,
        })
    }

    /// The positive counterpart of this direction, e.g. `North` for `South` and `Up` for `Down`.
    /// Directions without an opposite are returned unchanged.
    pub fn absolute(&self) -> Self {
        let is_negative = match self {
            Self::Down
            | Self::Past
            | Self::ColumnNegative
            | Self::RowNegative
            | Self::DisplayLeft
            | Self::DisplayDown => true,
            Self::AlongMeridian(meridian) => meridian.base() == MeridianBase::South,
            _ => self
                .compass_index()
                .is_some_and(|index| index >= COMPASS_POINTS.len() / 2),
        };

        if is_negative {
            self.opposite().unwrap_or_else(|| self.clone())
        } else {
            self.clone()
        }
    }

    fn iso_name(&self) -> Option<&'static str> {
        Some(match self {
            Self::Other => "other",
            Self::North => "north",
            Self::NorthNorthEast => "northNorthEast",
            Self::NorthEast => "northEast",
            Self::EastNorthEast => "eastNorthEast",
            Self::East => "east",
            Self::EastSouthEast => "eastSouthEast",
            Self::SouthEast => "southEast",
            Self::SouthSouthEast => "southSouthEast",
            Self::South => "south",
            Self::SouthSouthWest => "southSouthWest",
            Self::SouthWest => "southWest",
            Self::WestSouthWest => "westSouthWest",
            Self::West => "west",
            Self::WestNorthWest => "westNorthWest",
            Self::NorthWest => "northWest",
            Self::NorthNorthWest => "northNorthWest",
            Self::Up => "up",
            Self::Down => "down",
            Self::GeocentricX => "geocentricX",
            Self::GeocentricY => "geocentricY",
            Self::GeocentricZ => "geocentricZ",
            Self::Future => "future",
            Self::Past => "past",
            Self::ColumnPositive => "columnPositive",
            Self::ColumnNegative => "columnNegative",
            Self::RowPositive => "rowPositive",
            Self::RowNegative => "rowNegative",
            Self::DisplayRight => "displayRight",
            Self::DisplayLeft => "displayLeft",
            Self::DisplayUp => "displayUp",
            Self::DisplayDown => "displayDown",
            Self::AlongMeridian(_) | Self::Custom(_) => return None,
        })
    }

    /// Looks up a fixed direction by its name, ignoring case and word separators.
    fn from_iso_name(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        Some(match key.as_str() {
            "other" => Self::Other,
            "north" => Self::North,
            "northnortheast" => Self::NorthNorthEast,
            "northeast" => Self::NorthEast,
            "eastnortheast" => Self::EastNorthEast,
            "east" => Self::East,
            "eastsoutheast" => Self::EastSouthEast,
            "southeast" => Self::SouthEast,
            "southsoutheast" => Self::SouthSouthEast,
            "south" => Self::South,
            "southsouthwest" => Self::SouthSouthWest,
            "southwest" => Self::SouthWest,
            "westsouthwest" => Self::WestSouthWest,
            "west" => Self::West,
            "westnorthwest" => Self::WestNorthWest,
            "northwest" => Self::NorthWest,
            "northnorthwest" => Self::NorthNorthWest,
            "up" => Self::Up,
            "down" => Self::Down,
            "geocentricx" => Self::GeocentricX,
            "geocentricy" => Self::GeocentricY,
            "geocentricz" => Self::GeocentricZ,
            "future" => Self::Future,
            "past" => Self::Past,
            "columnpositive" => Self::ColumnPositive,
            "columnnegative" => Self::ColumnNegative,
            "rowpositive" => Self::RowPositive,
            "rownegative" => Self::RowNegative,
            "displayright" => Self::DisplayRight,
            "displayleft" => Self::DisplayLeft,
            "displayup" => Self::DisplayUp,
            "displaydown" => Self::DisplayDown,
            _ => return None,
        })
    }
}

impl From<&str> for AxisDirection {
    fn from(name: &str) -> Self {
        let name = name.trim();

        if let Some(direction) = Self::from_iso_name(name) {
            return direction;
        }

        if let Some(meridian) = DirectionAlongMeridian::parse(name) {
            return Self::AlongMeridian(meridian);
        }

        if name.to_ascii_lowercase().contains(" along ") {
            tracing::warn!(
                direction = name,
                "unable to parse direction along meridian, treating it as a custom direction"
            );
        }

        Self::Custom(name.to_string())
    }
}

impl From<DirectionAlongMeridian> for AxisDirection {
    fn from(meridian: DirectionAlongMeridian) -> Self {
        Self::AlongMeridian(meridian)
    }
}

impl FromStr for AxisDirection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}

impl std::fmt::Display for AxisDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlongMeridian(meridian) => write!(f, "{meridian}"),
            Self::Custom(name) => f.write_str(name),
            _ => f.write_str(self.iso_name().unwrap_or_default()),
        }
    }
}

impl Serialize for AxisDirection {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Helper struct for deserializing an `AxisDirection`
struct AxisDirectionDeserializeVisitor;

impl Visitor<'_> for AxisDirectionDeserializeVisitor {
    type Value = AxisDirection;

    fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
        formatter.write_str("an axis direction like `north` or `South along 90°E`")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(v.into())
    }
}

impl<'de> Deserialize<'de> for AxisDirection {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(AxisDirectionDeserializeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display() {
        assert_eq!(AxisDirection::North.to_string(), "north");
        assert_eq!(AxisDirection::NorthNorthEast.to_string(), "northNorthEast");
        assert_eq!(AxisDirection::GeocentricX.to_string(), "geocentricX");
        assert_eq!(AxisDirection::DisplayDown.to_string(), "displayDown");
        assert_eq!(
            AxisDirection::Custom("toward the sea".to_string()).to_string(),
            "toward the sea"
        );
        assert_eq!(
            AxisDirection::from("South along 90°E").to_string(),
            "South along 90°E"
        );
    }

    #[test]
    fn it_parses_names_in_different_spellings() {
        for name in ["northEast", "NORTH_EAST", "north-east", "North East", " northeast "] {
            assert_eq!(AxisDirection::from(name), AxisDirection::NorthEast, "{name}");
        }

        assert_eq!(AxisDirection::from("UP"), AxisDirection::Up);
        assert_eq!(
            AxisDirection::from("column_positive"),
            AxisDirection::ColumnPositive
        );
        assert_eq!("past".parse::<AxisDirection>(), Ok(AxisDirection::Past));
    }

    #[test]
    fn it_parses_directions_along_meridians() {
        let direction = AxisDirection::from("North along 130°W");

        let AxisDirection::AlongMeridian(meridian) = &direction else {
            panic!("expected a direction along a meridian, got {direction:?}");
        };
        assert_eq!(meridian.base(), MeridianBase::North);
        assert!(float_cmp::approx_eq!(f64, meridian.meridian(), -130.));
    }

    #[test]
    fn it_keeps_unknown_names_as_custom_directions() {
        assert_eq!(
            AxisDirection::from("South along the coast"),
            AxisDirection::Custom("South along the coast".to_string())
        );
        assert_eq!(
            AxisDirection::from("  sideways "),
            AxisDirection::Custom("sideways".to_string())
        );
        assert_eq!(AxisDirection::from("sideways").meridian(), None);
    }

    #[test]
    fn it_round_trips_every_fixed_direction_through_its_name() {
        let fixed = [
            AxisDirection::Other,
            AxisDirection::Up,
            AxisDirection::Down,
            AxisDirection::GeocentricX,
            AxisDirection::GeocentricY,
            AxisDirection::GeocentricZ,
            AxisDirection::Future,
            AxisDirection::Past,
            AxisDirection::ColumnPositive,
            AxisDirection::ColumnNegative,
            AxisDirection::RowPositive,
            AxisDirection::RowNegative,
            AxisDirection::DisplayRight,
            AxisDirection::DisplayLeft,
            AxisDirection::DisplayUp,
            AxisDirection::DisplayDown,
        ];

        for direction in fixed.iter().chain(COMPASS_POINTS.iter()) {
            assert_eq!(&AxisDirection::from(direction.to_string().as_str()), direction);
        }
    }

    #[test]
    fn compass_indices() {
        assert_eq!(AxisDirection::North.compass_index(), Some(0));
        assert_eq!(AxisDirection::East.compass_index(), Some(4));
        assert_eq!(AxisDirection::South.compass_index(), Some(8));
        assert_eq!(AxisDirection::West.compass_index(), Some(12));
        assert_eq!(AxisDirection::NorthNorthWest.compass_index(), Some(15));
        assert_eq!(AxisDirection::Up.compass_index(), None);
        assert_eq!(AxisDirection::from("South along 90°E").compass_index(), None);

        for (index, direction) in COMPASS_POINTS.iter().enumerate() {
            assert_eq!(direction.compass_index(), Some(index));
            assert_eq!(AxisDirection::from_compass_index(index).as_ref(), Some(direction));
        }
        assert_eq!(AxisDirection::from_compass_index(16), None);
    }

    #[test]
    fn opposites() {
        assert_eq!(AxisDirection::North.opposite(), Some(AxisDirection::South));
        assert_eq!(AxisDirection::West.opposite(), Some(AxisDirection::East));
        assert_eq!(
            AxisDirection::NorthNorthEast.opposite(),
            Some(AxisDirection::SouthSouthWest)
        );
        assert_eq!(AxisDirection::Up.opposite(), Some(AxisDirection::Down));
        assert_eq!(AxisDirection::Past.opposite(), Some(AxisDirection::Future));
        assert_eq!(
            AxisDirection::from("North along 90°E").opposite(),
            Some(AxisDirection::from("South along 90°E"))
        );
        assert_eq!(AxisDirection::GeocentricX.opposite(), None);
        assert_eq!(AxisDirection::Other.opposite(), None);
    }

    #[test]
    fn absolute_directions() {
        assert_eq!(AxisDirection::South.absolute(), AxisDirection::North);
        assert_eq!(AxisDirection::West.absolute(), AxisDirection::East);
        assert_eq!(AxisDirection::East.absolute(), AxisDirection::East);
        assert_eq!(AxisDirection::Down.absolute(), AxisDirection::Up);
        assert_eq!(AxisDirection::Past.absolute(), AxisDirection::Future);
        assert_eq!(
            AxisDirection::DisplayLeft.absolute(),
            AxisDirection::DisplayRight
        );
        assert_eq!(
            AxisDirection::from("South along 180°E").absolute(),
            AxisDirection::from("North along 180°E")
        );
        assert_eq!(
            AxisDirection::GeocentricZ.absolute(),
            AxisDirection::GeocentricZ
        );
    }

    #[test]
    fn categories() {
        assert!(AxisDirection::SouthWest.is_compass());
        assert!(!AxisDirection::Up.is_compass());
        assert!(AxisDirection::Down.is_vertical());
        assert!(AxisDirection::Future.is_temporal());
        assert!(AxisDirection::RowNegative.is_grid());
        assert!(AxisDirection::DisplayUp.is_display());
        assert!(!AxisDirection::DisplayUp.is_vertical());
    }

    #[test]
    fn serde_json() {
        assert_eq!(
            serde_json::to_string(&AxisDirection::NorthEast).unwrap(),
            "\"northEast\""
        );
        assert_eq!(
            serde_json::to_string(&AxisDirection::from("South along 45°W")).unwrap(),
            "\"South along 45°W\""
        );

        assert_eq!(
            serde_json::from_str::<AxisDirection>("\"EAST\"").unwrap(),
            AxisDirection::East
        );
        assert_eq!(
            serde_json::from_str::<AxisDirection>("\"North along 0°\"").unwrap(),
            AxisDirection::from("North along 0°")
        );
        assert!(serde_json::from_str::<AxisDirection>("42").is_err());
    }
}
