use crate::detect::{
    DIST_CLOSE, DIST_FAR, DIST_MEDIUM, DIST_VERY_CLOSE, DIST_VERY_FAR, SIZE_CLOSE, SIZE_FAR,
    SIZE_MEDIUM, SIZE_VERY_CLOSE,
};
use std::fmt::{Display, Formatter};

/// Coarse distance estimate derived from apparent bounding-box size.
/// Five fixed bands; a bigger box reads as a closer object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistanceBand {
    VeryClose,
    Close,
    Medium,
    Far,
    VeryFar,
}

impl Display for DistanceBand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DistanceBand::VeryClose => write!(f, "very close"),
            DistanceBand::Close => write!(f, "close"),
            DistanceBand::Medium => write!(f, "medium distance"),
            DistanceBand::Far => write!(f, "far"),
            DistanceBand::VeryFar => write!(f, "very far"),
        }
    }
}

impl DistanceBand {
    /// Estimates the band from a box's size relative to the frame.
    ///
    /// Thresholds the average of relative width and height against
    /// {0.4, 0.2, 0.1, 0.05}, inclusive at each edge, so a box filling
    /// exactly 40% of the frame already counts as the nearest band.
    pub fn estimate(relative_width: f32, relative_height: f32) -> Self {
        let avg_size = (relative_width + relative_height) / 2.0;
        if avg_size >= SIZE_VERY_CLOSE {
            DistanceBand::VeryClose
        } else if avg_size >= SIZE_CLOSE {
            DistanceBand::Close
        } else if avg_size >= SIZE_MEDIUM {
            DistanceBand::Medium
        } else if avg_size >= SIZE_FAR {
            DistanceBand::Far
        } else {
            DistanceBand::VeryFar
        }
    }

    /// Representative distance in arbitrary walking units, the value the
    /// planner's clearance thresholds compare against.
    pub fn approx_distance(&self) -> f32 {
        match self {
            DistanceBand::VeryClose => DIST_VERY_CLOSE,
            DistanceBand::Close => DIST_CLOSE,
            DistanceBand::Medium => DIST_MEDIUM,
            DistanceBand::Far => DIST_FAR,
            DistanceBand::VeryFar => DIST_VERY_FAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_boxes_map_to_nearest_band() {
        // Relative size of 0.4 or more always lands in the nearest band.
        assert_eq!(DistanceBand::estimate(0.4, 0.4), DistanceBand::VeryClose);
        assert_eq!(DistanceBand::estimate(0.9, 0.7), DistanceBand::VeryClose);
        assert_eq!(
            DistanceBand::estimate(0.4, 0.4).approx_distance(),
            0.5
        );
    }

    #[test]
    fn bands_step_down_with_size() {
        assert_eq!(DistanceBand::estimate(0.3, 0.1), DistanceBand::Close);
        assert_eq!(DistanceBand::estimate(0.1, 0.1), DistanceBand::Medium);
        assert_eq!(DistanceBand::estimate(0.05, 0.05), DistanceBand::Far);
        assert_eq!(DistanceBand::estimate(0.01, 0.01), DistanceBand::VeryFar);
    }

    #[test]
    fn mixed_dimensions_use_the_average() {
        // (0.5 + 0.1) / 2 = 0.3 -> close band.
        assert_eq!(DistanceBand::estimate(0.5, 0.1), DistanceBand::Close);
    }

    #[test]
    fn representative_distances_are_ordered() {
        let bands = [
            DistanceBand::VeryClose,
            DistanceBand::Close,
            DistanceBand::Medium,
            DistanceBand::Far,
            DistanceBand::VeryFar,
        ];
        for pair in bands.windows(2) {
            assert!(pair[0].approx_distance() < pair[1].approx_distance());
        }
    }
}
