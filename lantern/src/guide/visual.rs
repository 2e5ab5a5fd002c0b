use crate::detect::analysis::spatial::SpatialAnalysis;
use crate::detect::property::decision::Direction;
use lantern_feedback::panel::{OverlayBox, Viewport, ZoneReadout};
use lantern_vision::classes::classify;
use lantern_vision::Detection;

/// Panel arrow for the current direction.
pub fn indicator(direction: Direction) -> &'static str {
    match direction {
        Direction::Left => "← LEFT",
        Direction::Right => "RIGHT →",
        Direction::Straight => "↑ STRAIGHT",
        Direction::Stop => "✕ STOP",
    }
}

pub fn zone_readout(analysis: &SpatialAnalysis) -> ZoneReadout {
    ZoneReadout {
        left: analysis.zones.left.len(),
        center: analysis.zones.center.len(),
        right: analysis.zones.right.len(),
        confidence: analysis.decision.confidence.as_str(),
    }
}

/// Classifies each detection and scales its box into the viewport.
/// Critical objects come back emphasized so the panel can thicken them.
pub fn build_overlays(
    detections: &[Detection],
    frame_width: u32,
    frame_height: u32,
    viewport: &Viewport,
) -> Vec<OverlayBox> {
    detections
        .iter()
        .map(|detection| {
            let class = classify(detection, frame_width);
            let bbox = detection.bbox;
            let (x, y, width, height) = viewport.scale_rect(
                frame_width,
                frame_height,
                bbox.x,
                bbox.y,
                bbox.width,
                bbox.height,
            );
            OverlayBox {
                x,
                y,
                width,
                height,
                color: class.color.to_string(),
                label: class.show_label.then(|| class.display_name.clone()),
                emphasized: class.is_critical,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lantern_vision::BoundingBox;

    #[test]
    fn indicators_cover_every_direction() {
        assert_eq!(indicator(Direction::Left), "← LEFT");
        assert_eq!(indicator(Direction::Stop), "✕ STOP");
    }

    #[test]
    fn overlays_scale_and_label() {
        let detections = vec![Detection::new(
            "car",
            0.9,
            BoundingBox {
                x: 160.0,
                y: 120.0,
                width: 320.0,
                height: 240.0,
            },
        )];
        let viewport = Viewport {
            width: 320.0,
            height: 240.0,
        };
        let boxes = build_overlays(&detections, 640, 480, &viewport);
        assert_eq!(boxes.len(), 1);
        assert_eq!(boxes[0].x, 80.0);
        assert_eq!(boxes[0].width, 160.0);
        assert_eq!(boxes[0].label.as_deref(), Some("Vehicle"));
        assert!(boxes[0].emphasized);
    }

    #[test]
    fn unlabeled_classes_stay_unlabeled() {
        let detections = vec![Detection::new(
            "chair",
            0.9,
            BoundingBox {
                x: 0.0,
                y: 0.0,
                width: 60.0,
                height: 60.0,
            },
        )];
        let viewport = Viewport {
            width: 640.0,
            height: 480.0,
        };
        let boxes = build_overlays(&detections, 640, 480, &viewport);
        assert_eq!(boxes[0].label, None);
        assert!(!boxes[0].emphasized);
    }
}
