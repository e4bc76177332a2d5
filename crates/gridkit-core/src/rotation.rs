//! Item rotation
//!
//! Items rotate in quarter turns but only two orientations are distinct for
//! a rectangle: upright (0°) and quarter-turned (90°). Rotating swaps the
//! effective width and height; the stored footprint is never modified.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Orientation of a placed item
///
/// Serializes as the numeric degree value (`0` or `90`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Rotation {
    /// Upright (0°): effective dimensions match the stored footprint
    Deg0,
    /// Quarter turn (90°): effective width and height are swapped
    Deg90,
}

impl Rotation {
    /// Returns the rotation after one more quarter turn.
    ///
    /// Equivalent to `(degrees + 90) mod 180`: 0° and 90° alternate.
    pub fn toggled(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg90,
            Self::Deg90 => Self::Deg0,
        }
    }

    /// True when this orientation swaps the effective width and height.
    pub fn swaps_axes(self) -> bool {
        matches!(self, Self::Deg90)
    }

    /// The rotation angle in degrees.
    pub fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
        }
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::Deg0
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

impl FromStr for Rotation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_end_matches('°') {
            "0" => Ok(Self::Deg0),
            "90" => Ok(Self::Deg90),
            _ => Err(format!("Unknown rotation: {}", s)),
        }
    }
}

impl TryFrom<u16> for Rotation {
    type Error = String;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Self::Deg0),
            90 => Ok(Self::Deg90),
            _ => Err(format!("Unsupported rotation angle: {}", degrees)),
        }
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}
