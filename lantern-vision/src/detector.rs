use anyhow::Result;
use log::error;
use serde::{Deserialize, Serialize};

/// One frame pulled from the camera. The pixel payload may be empty for
/// detectors that replay pre-recorded results instead of reading pixels.
#[derive(Debug, Clone)]
pub struct Frame {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Monotonic capture time in milliseconds since the stream started.
    pub timestamp_ms: f64,
}

/// Axis-aligned box in frame pixel coordinates, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Horizontal position of the box center as a fraction of frame width,
    /// in [0.0, 1.0]. Used for zone assignment and spoken bearings.
    pub fn center_fraction(&self, frame_width: u32) -> f32 {
        if frame_width == 0 {
            error!("Frame width cannot be zero for center fraction calculation.");
            return 0.5;
        }
        let (center_x, _) = self.center();
        (center_x / frame_width as f32).clamp(0.0, 1.0)
    }

    pub fn relative_width(&self, frame_width: u32) -> f32 {
        if frame_width == 0 {
            error!("Frame width cannot be zero for relative size calculation.");
            return 0.0;
        }
        self.width / frame_width as f32
    }

    pub fn relative_height(&self, frame_height: u32) -> f32 {
        if frame_height == 0 {
            error!("Frame height cannot be zero for relative size calculation.");
            return 0.0;
        }
        self.height / frame_height as f32
    }

    /// Width over height. Wide, flat boxes (ratio well above 1) are the
    /// signature of walls and barriers seen head-on.
    pub fn aspect_ratio(&self) -> f32 {
        if self.height <= 0.0 {
            return 0.0;
        }
        self.width / self.height
    }
}

/// A labeled detection as produced by the external object detector.
/// Immutable for the duration of one frame's processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub label: String,
    /// Detector confidence score in [0.0, 1.0].
    pub confidence: f32,
    pub bbox: BoundingBox,
}

impl Detection {
    pub fn new(label: impl Into<String>, confidence: f32, bbox: BoundingBox) -> Self {
        Self {
            label: label.into(),
            confidence,
            bbox,
        }
    }
}

/// The consumed detector boundary. Implementations wrap whatever model or
/// service actually produces boxes; the navigation core only ever sees
/// this trait. The timestamp supports video-mode detectors that track
/// state across frames.
pub trait FrameDetector {
    fn detect(&mut self, frame: &Frame, timestamp_ms: f64) -> Result<Vec<Detection>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_fraction_is_clamped_and_centered() {
        let bbox = BoundingBox {
            x: 300.0,
            y: 100.0,
            width: 40.0,
            height: 80.0,
        };
        assert_eq!(bbox.center(), (320.0, 140.0));
        assert!((bbox.center_fraction(640) - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn zero_frame_width_degrades_to_midpoint() {
        let bbox = BoundingBox {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
        };
        assert_eq!(bbox.center_fraction(0), 0.5);
        assert_eq!(bbox.relative_width(0), 0.0);
    }

    #[test]
    fn aspect_ratio_of_flat_box() {
        let bbox = BoundingBox {
            x: 0.0,
            y: 0.0,
            width: 400.0,
            height: 100.0,
        };
        assert!((bbox.aspect_ratio() - 4.0).abs() < f32::EPSILON);
    }
}
