use crate::util::helpers::normalize_longitude;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{Display, EnumString};

/// The compass direction a meridian-relative axis points to.
#[derive(
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
)]
#[strum(ascii_case_insensitive)]
pub enum MeridianBase {
    North,
    South,
}

impl MeridianBase {
    pub fn opposite(self) -> Self {
        match self {
            MeridianBase::North => MeridianBase::South,
            MeridianBase::South => MeridianBase::North,
        }
    }
}

/// A direction like "South along 90°E", as used by the axes of polar stereographic projections.
///
/// The meridian is stored in degrees, east positive, within `(-180, 180]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DirectionAlongMeridian {
    base: MeridianBase,
    meridian: f64,
}

impl DirectionAlongMeridian {
    /// Creates a new direction, normalizing the meridian.
    /// Returns `None` if the meridian is not a finite number.
    pub fn new(base: MeridianBase, meridian: f64) -> Option<Self> {
        Some(Self {
            base,
            meridian: normalize_longitude(meridian)?,
        })
    }

    pub fn base(&self) -> MeridianBase {
        self.base
    }

    pub fn meridian(&self) -> f64 {
        self.meridian
    }

    #[must_use]
    pub fn opposite(&self) -> Self {
        Self {
            base: self.base.opposite(),
            meridian: self.meridian,
        }
    }

    /// Parses descriptions of the form `<north|south> along <degrees> [°|deg] [E|W]`.
    ///
    /// Anything else, including malformed numbers and unknown hemispheres, yields `None`.
    pub fn parse(description: &str) -> Option<Self> {
        let (base, rest) = description.trim().split_once(char::is_whitespace)?;
        let base: MeridianBase = base.parse().ok()?;

        let (along, rest) = rest.trim_start().split_once(char::is_whitespace)?;
        if !along.eq_ignore_ascii_case("along") {
            return None;
        }

        let rest = rest.trim();
        let number_end = rest
            .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+')))
            .unwrap_or(rest.len());
        let (number, hemisphere) = rest.split_at(number_end);
        let degrees: f64 = number.parse().ok()?;

        let hemisphere = strip_degree_unit(hemisphere.trim_start()).trim();
        let sign = if hemisphere.is_empty()
            || hemisphere.eq_ignore_ascii_case("e")
            || hemisphere.eq_ignore_ascii_case("east")
        {
            1.
        } else if hemisphere.eq_ignore_ascii_case("w") || hemisphere.eq_ignore_ascii_case("west") {
            -1.
        } else {
            return None;
        };

        Self::new(base, sign * degrees)
    }

    /// Orders by ascending meridian, then north before south.
    pub fn compare(&self, other: &Self) -> Ordering {
        let by_meridian = if float_cmp::approx_eq!(f64, self.meridian, other.meridian) {
            Ordering::Equal
        } else {
            self.meridian.total_cmp(&other.meridian)
        };

        by_meridian.then_with(|| self.base.cmp(&other.base))
    }
}

fn strip_degree_unit(s: &str) -> &str {
    if let Some(stripped) = s.strip_prefix('°') {
        return stripped;
    }

    for unit in ["degrees", "degree", "deg"] {
        if let Some(prefix) = s.get(..unit.len()) {
            if prefix.eq_ignore_ascii_case(unit) {
                return &s[unit.len()..];
            }
        }
    }

    s
}

impl std::fmt::Display for DirectionAlongMeridian {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.meridian > 0. {
            write!(f, "{} along {}°E", self.base, self.meridian)
        } else if self.meridian < 0. {
            write!(f, "{} along {}°W", self.base, -self.meridian)
        } else {
            write!(f, "{} along 0°", self.base)
        }
    }
}
