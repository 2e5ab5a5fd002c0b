use crate::detect::{ZONE_LEFT_BOUNDARY, ZONE_RIGHT_BOUNDARY};
use std::fmt::{Display, Formatter};

/// One of three equal horizontal thirds of the camera frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    Left,
    Center,
    Right,
}

impl Display for Zone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::Left => write!(f, "left"),
            Zone::Center => write!(f, "center"),
            Zone::Right => write!(f, "right"),
        }
    }
}

impl Zone {
    /// Assigns a zone from the horizontal fraction of a box center.
    /// Boundary semantics: `f < 0.33` is left, `0.33 <= f < 0.67` is
    /// center, `f >= 0.67` is right.
    pub fn from_center_fraction(fraction: f32) -> Zone {
        if fraction < ZONE_LEFT_BOUNDARY {
            Zone::Left
        } else if fraction < ZONE_RIGHT_BOUNDARY {
            Zone::Center
        } else {
            Zone::Right
        }
    }

    /// Spoken bearing used when naming an obstacle in a danger alert.
    pub fn bearing(&self) -> &'static str {
        match self {
            Zone::Left => "to your left",
            Zone::Center => "ahead",
            Zone::Right => "to your right",
        }
    }
}
