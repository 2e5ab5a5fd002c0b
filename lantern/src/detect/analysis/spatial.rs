use crate::config::{PlannerConfig, WallConfig};
use crate::detect::analysis::planner::PathPlanner;
use crate::detect::property::decision::PathDecision;
use crate::detect::property::distance::DistanceBand;
use crate::detect::property::zone::Zone;
use crate::detect::{
    BARRIER_CENTER_MAX, BARRIER_CENTER_MIN, EMPTY_FRAME_WALL_CONFIDENCE, EMPTY_FRAME_WALL_MARGIN,
};
use lantern_feedback::panel::Urgency;
use lantern_vision::{BoundingBox, Detection};
use log::error;

/// A detection after zoning and distance estimation.
#[derive(Debug, Clone)]
pub struct ZonedDetection {
    pub detection: Detection,
    pub zone: Zone,
    pub band: DistanceBand,
    pub distance: f32,
    /// True for wall/barrier hypotheses the analyzer synthesized itself.
    pub synthetic: bool,
}

/// Detections split into the three horizontal thirds.
#[derive(Debug, Clone, Default)]
pub struct ZoneBuckets {
    pub left: Vec<ZonedDetection>,
    pub center: Vec<ZonedDetection>,
    pub right: Vec<ZonedDetection>,
}

impl ZoneBuckets {
    pub fn total(&self) -> usize {
        self.left.len() + self.center.len() + self.right.len()
    }

    fn bucket_mut(&mut self, zone: Zone) -> &mut Vec<ZonedDetection> {
        match zone {
            Zone::Left => &mut self.left,
            Zone::Center => &mut self.center,
            Zone::Right => &mut self.right,
        }
    }
}

/// Everything the dispatcher needs to know about one frame. Derived from
/// the current frame's detections alone.
#[derive(Debug, Clone)]
pub struct SpatialAnalysis {
    pub zones: ZoneBuckets,
    pub near: Vec<ZonedDetection>,
    pub medium: Vec<ZonedDetection>,
    pub far: Vec<ZonedDetection>,
    /// Closer than the danger distance, nearest first.
    pub critical: Vec<ZonedDetection>,
    pub has_walls: bool,
    pub decision: PathDecision,
    pub frame_width: u32,
    pub frame_height: u32,
}

impl SpatialAnalysis {
    /// Danger when anything is critically close; safe when the planner
    /// found the center clear; caution otherwise.
    pub fn urgency(&self) -> Urgency {
        if !self.critical.is_empty() {
            Urgency::Danger
        } else if self.decision.clear {
            Urgency::Safe
        } else {
            Urgency::Caution
        }
    }

    pub fn nearest_critical(&self) -> Option<&ZonedDetection> {
        self.critical.first()
    }

    /// Obstacles worth steering around: everything near or medium.
    pub fn obstacle_count(&self) -> usize {
        self.near.len() + self.medium.len()
    }

    fn empty(frame_width: u32, frame_height: u32, decision: PathDecision) -> Self {
        Self {
            zones: ZoneBuckets::default(),
            near: Vec::new(),
            medium: Vec::new(),
            far: Vec::new(),
            critical: Vec::new(),
            has_walls: false,
            decision,
            frame_width,
            frame_height,
        }
    }
}

/// Partitions detections into zones and distance bands and runs the path
/// planner. Stateless across frames by design; any smoothing would have
/// to live elsewhere.
pub struct SpatialAnalyzer {
    planner: PathPlanner,
    planner_config: PlannerConfig,
    walls: WallConfig,
}

impl SpatialAnalyzer {
    pub fn new(planner_config: PlannerConfig, walls: WallConfig) -> Self {
        Self {
            planner: PathPlanner::new(planner_config.clone()),
            planner_config,
            walls,
        }
    }

    pub fn analyze(
        &self,
        detections: &[Detection],
        frame_width: u32,
        frame_height: u32,
    ) -> SpatialAnalysis {
        if frame_width == 0 || frame_height == 0 {
            error!("Frame dimensions cannot be zero for spatial analysis.");
            let decision = self.planner.plan(&ZoneBuckets::default(), 0);
            return SpatialAnalysis::empty(frame_width, frame_height, decision);
        }

        let mut all: Vec<(Detection, bool)> = detections
            .iter()
            .cloned()
            .map(|detection| (detection, false))
            .collect();
        if self.walls.infer {
            for wall in self.infer_walls(detections, frame_width, frame_height) {
                all.push((wall, true));
            }
        }

        let mut zones = ZoneBuckets::default();
        let mut near = Vec::new();
        let mut medium = Vec::new();
        let mut far = Vec::new();
        let mut critical = Vec::new();
        let mut has_walls = false;

        for (detection, synthetic) in all {
            let bbox = detection.bbox;
            let zone = Zone::from_center_fraction(bbox.center_fraction(frame_width));
            let band = DistanceBand::estimate(
                bbox.relative_width(frame_width),
                bbox.relative_height(frame_height),
            );
            let distance = band.approx_distance();
            let zoned = ZonedDetection {
                detection,
                zone,
                band,
                distance,
                synthetic,
            };

            has_walls |= synthetic;
            if distance < self.planner_config.near_clearance {
                near.push(zoned.clone());
            } else if distance < self.planner_config.medium_range {
                medium.push(zoned.clone());
            } else {
                far.push(zoned.clone());
            }
            if distance < self.planner_config.danger_distance {
                critical.push(zoned.clone());
            }
            zones.bucket_mut(zone).push(zoned);
        }

        // Nearest critical obstacle first. Real detections outrank
        // synthesized hypotheses at equal distance, and the label breaks
        // any remaining tie so the ordering is stable frame to frame.
        critical.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then_with(|| a.synthetic.cmp(&b.synthetic))
                .then_with(|| a.detection.label.cmp(&b.detection.label))
        });

        let decision = self.planner.plan(&zones, near.len());

        SpatialAnalysis {
            zones,
            near,
            medium,
            far,
            critical,
            has_walls,
            decision,
            frame_width,
            frame_height,
        }
    }

    /// Hypothesizes walls and barriers the detector cannot name: very
    /// wide flat boxes read as walls, large centered boxes as barriers.
    /// With the empty-frame hint enabled, a frame with no detections at
    /// all yields exactly one low-confidence wall covering the central
    /// 80% of the frame.
    fn infer_walls(
        &self,
        detections: &[Detection],
        frame_width: u32,
        frame_height: u32,
    ) -> Vec<Detection> {
        let mut walls = Vec::new();

        for detection in detections {
            let bbox = detection.bbox;
            let relative_width = bbox.relative_width(frame_width);
            let relative_height = bbox.relative_height(frame_height);

            if relative_width > self.walls.min_relative_width
                && bbox.aspect_ratio() > self.walls.min_aspect_ratio
                && relative_height < self.walls.max_relative_height
            {
                walls.push(Detection::new("wall", detection.confidence, bbox));
            }

            if relative_width > self.walls.barrier_relative_width
                && relative_height > self.walls.barrier_relative_height
            {
                let center = bbox.center_fraction(frame_width);
                if center > BARRIER_CENTER_MIN && center < BARRIER_CENTER_MAX {
                    walls.push(Detection::new("barrier", detection.confidence, bbox));
                }
            }
        }

        if detections.is_empty() && self.walls.empty_frame_hint {
            let width = frame_width as f32;
            let height = frame_height as f32;
            walls.push(Detection::new(
                "potential wall",
                EMPTY_FRAME_WALL_CONFIDENCE,
                BoundingBox {
                    x: width * EMPTY_FRAME_WALL_MARGIN,
                    y: height * EMPTY_FRAME_WALL_MARGIN,
                    width: width * (1.0 - 2.0 * EMPTY_FRAME_WALL_MARGIN),
                    height: height * (1.0 - 2.0 * EMPTY_FRAME_WALL_MARGIN),
                },
            ));
        }

        walls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PlannerConfig, WallConfig};

    fn detection(label: &str, x: f32, width: f32, height: f32) -> Detection {
        Detection::new(
            label,
            0.9,
            BoundingBox {
                x,
                y: 100.0,
                width,
                height,
            },
        )
    }

    fn analyzer() -> SpatialAnalyzer {
        SpatialAnalyzer::new(PlannerConfig::default(), WallConfig::default())
    }

    #[test]
    fn detections_land_in_their_thirds() {
        // Centers at 10%, 50% and 90% of a 640-wide frame.
        let detections = vec![
            detection("person", 44.0, 40.0, 40.0),
            detection("chair", 300.0, 40.0, 40.0),
            detection("bench", 556.0, 40.0, 40.0),
        ];
        let analysis = analyzer().analyze(&detections, 640, 480);
        assert_eq!(analysis.zones.left.len(), 1);
        assert_eq!(analysis.zones.center.len(), 1);
        assert_eq!(analysis.zones.right.len(), 1);
    }

    #[test]
    fn bands_bucket_by_estimated_distance() {
        let detections = vec![
            // avg relative size 0.4 -> distance 0.5, near and critical,
            // yet too narrow to double as a barrier hypothesis
            detection("car", 100.0, 256.0, 192.0),
            // avg ~0.125 -> distance 3, medium
            detection("person", 300.0, 100.0, 50.0),
            // tiny -> distance 8, far
            detection("bird", 500.0, 10.0, 10.0),
        ];
        let analysis = analyzer().analyze(&detections, 640, 480);
        assert_eq!(analysis.near.len(), 1);
        assert_eq!(analysis.medium.len(), 1);
        assert_eq!(analysis.far.len(), 1);
        assert_eq!(analysis.critical.len(), 1);
        assert_eq!(analysis.critical[0].detection.label, "car");
    }

    #[test]
    fn wide_flat_box_spawns_a_wall_hypothesis() {
        // 500/640 wide, aspect 5.0, short: reads as a wall.
        let detections = vec![detection("couch", 50.0, 500.0, 100.0)];
        let analysis = analyzer().analyze(&detections, 640, 480);
        assert!(analysis.has_walls);
        assert!(analysis
            .zones
            .center
            .iter()
            .any(|z| z.synthetic && z.detection.label == "wall"));
    }

    #[test]
    fn large_centered_box_spawns_a_barrier() {
        // 300/640 wide, 300/480 tall, centered.
        let detections = vec![detection("couch", 170.0, 300.0, 300.0)];
        let analysis = analyzer().analyze(&detections, 640, 480);
        assert!(analysis.has_walls);
        assert!(analysis
            .zones
            .center
            .iter()
            .any(|z| z.synthetic && z.detection.label == "barrier"));
    }

    #[test]
    fn empty_frame_fabricates_nothing_by_default() {
        let analysis = analyzer().analyze(&[], 640, 480);
        assert!(!analysis.has_walls);
        assert_eq!(analysis.zones.total(), 0);
        assert!(analysis.decision.clear);
    }

    #[test]
    fn empty_frame_hint_yields_one_deterministic_hypothesis() {
        let walls = WallConfig {
            empty_frame_hint: true,
            ..WallConfig::default()
        };
        let analyzer = SpatialAnalyzer::new(PlannerConfig::default(), walls);

        let first = analyzer.analyze(&[], 640, 480);
        let second = analyzer.analyze(&[], 640, 480);
        assert_eq!(first.zones.total(), 1);
        assert_eq!(second.zones.total(), 1);
        let wall = &first.zones.center[0];
        assert_eq!(wall.detection.label, "potential wall");
        assert_eq!(wall.detection.bbox, second.zones.center[0].detection.bbox);
        // The hypothesis box fills most of the frame, so it reads as
        // critically close. That is why the hint defaults to off.
        assert_eq!(first.urgency(), Urgency::Danger);
    }

    #[test]
    fn critical_obstacle_forces_danger() {
        let detections = vec![detection("car", 160.0, 320.0, 240.0)];
        let analysis = analyzer().analyze(&detections, 640, 480);
        assert_eq!(analysis.urgency(), Urgency::Danger);
        assert_eq!(analysis.nearest_critical().unwrap().detection.label, "car");
    }

    #[test]
    fn clear_center_reads_safe_even_with_side_clutter() {
        let detections = vec![
            detection("person", 10.0, 150.0, 150.0), // left, near
            detection("bench", 580.0, 40.0, 40.0),   // right, far
        ];
        let analysis = analyzer().analyze(&detections, 640, 480);
        assert_eq!(analysis.urgency(), Urgency::Safe);
        assert!(analysis.decision.clear);
    }
}
