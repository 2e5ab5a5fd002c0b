use crate::config::PlannerConfig;
use crate::detect::analysis::spatial::{ZoneBuckets, ZonedDetection};
use crate::detect::property::decision::{ConfidenceLabel, Direction, PathDecision, PathWidth};

/// Decides, once per frame, whether the forward path is clear and where
/// to go if it is not. Works purely from the current frame's zone
/// buckets.
pub struct PathPlanner {
    config: PlannerConfig,
}

impl PathPlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Decision rule:
    /// 1. Center zone free of anything closer than the clearance
    ///    threshold: path is clear, go straight.
    /// 2. Otherwise pick the free side; with both free, the side holding
    ///    fewer objects wins and a tie goes left. Neither free: stop.
    pub fn plan(&self, zones: &ZoneBuckets, near_count: usize) -> PathDecision {
        let confidence = self.confidence(zones, near_count);
        let blocked =
            |objects: &[ZonedDetection]| objects.iter().any(|z| z.distance < self.config.near_clearance);

        if !blocked(&zones.center) {
            return PathDecision {
                clear: true,
                direction: Direction::Straight,
                width: PathWidth::Wide,
                confidence,
            };
        }

        let left_clear = !blocked(&zones.left);
        let right_clear = !blocked(&zones.right);

        let (direction, width) = match (left_clear, right_clear) {
            (true, false) => (Direction::Left, PathWidth::Narrow),
            (false, true) => (Direction::Right, PathWidth::Narrow),
            (true, true) => {
                // Fewer objects wins; the tie deliberately goes left so
                // repeated identical frames never flip the advice.
                if zones.left.len() <= zones.right.len() {
                    (Direction::Left, PathWidth::Medium)
                } else {
                    (Direction::Right, PathWidth::Medium)
                }
            }
            (false, false) => (Direction::Stop, PathWidth::Blocked),
        };

        PathDecision {
            clear: false,
            direction,
            width,
            confidence,
        }
    }

    /// Clutter degrades confidence: too many near objects means the scene
    /// is hard to read, too many objects overall means it is busy.
    fn confidence(&self, zones: &ZoneBuckets, near_count: usize) -> ConfidenceLabel {
        if near_count > self.config.low_confidence_near {
            ConfidenceLabel::Low
        } else if zones.total() > self.config.medium_confidence_total {
            ConfidenceLabel::Medium
        } else {
            ConfidenceLabel::High
        }
    }
}
