use crate::detector::{Detection, Frame, FrameDetector};
use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;

/// Detections for one frame of a replay script.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplayFrame {
    #[serde(default)]
    pub detections: Vec<Detection>,
}

/// A scripted sequence of detection frames, loadable from YAML. Used to
/// drive the assistant headlessly and to make integration tests
/// deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplayScript {
    pub frames: Vec<ReplayFrame>,
    /// Loop back to the first frame when the script ends. When false, the
    /// detector reports empty frames after the last scripted one.
    #[serde(default)]
    pub repeat: bool,
}

impl ReplayScript {
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read replay script {}", path))?;
        let script: ReplayScript = serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse replay script {}", path))?;
        Ok(script)
    }
}

/// A deterministic `FrameDetector` that ignores pixels and replays the
/// script one frame per call.
pub struct ReplayDetector {
    script: ReplayScript,
    cursor: usize,
}

impl ReplayDetector {
    pub fn new(script: ReplayScript) -> Self {
        Self { script, cursor: 0 }
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let script = ReplayScript::load(path)?;
        info!(
            "Loaded replay script {} ({} frames, repeat: {})",
            path,
            script.frames.len(),
            script.repeat
        );
        Ok(Self::new(script))
    }
}

impl FrameDetector for ReplayDetector {
    fn detect(&mut self, _frame: &Frame, _timestamp_ms: f64) -> Result<Vec<Detection>> {
        if self.cursor >= self.script.frames.len() {
            if !self.script.repeat || self.script.frames.is_empty() {
                return Ok(Vec::new());
            }
            self.cursor = 0;
        }
        let detections = self.script.frames[self.cursor].detections.clone();
        self.cursor += 1;
        Ok(detections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::BoundingBox;

    fn blank_frame() -> Frame {
        Frame {
            data: Vec::new(),
            width: 640,
            height: 480,
            timestamp_ms: 0.0,
        }
    }

    #[test]
    fn parses_yaml_script() {
        let yaml = r#"
frames:
  - detections:
      - label: person
        confidence: 0.82
        bbox: { x: 10.0, y: 20.0, width: 120.0, height: 240.0 }
  - detections: []
repeat: true
"#;
        let script: ReplayScript = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(script.frames.len(), 2);
        assert!(script.repeat);
        assert_eq!(script.frames[0].detections[0].label, "person");
    }

    #[test]
    fn replays_frames_in_order_then_goes_quiet() {
        let script = ReplayScript {
            frames: vec![
                ReplayFrame {
                    detections: vec![Detection::new(
                        "car",
                        0.9,
                        BoundingBox {
                            x: 0.0,
                            y: 0.0,
                            width: 50.0,
                            height: 50.0,
                        },
                    )],
                },
                ReplayFrame::default(),
            ],
            repeat: false,
        };
        let mut detector = ReplayDetector::new(script);
        let frame = blank_frame();
        assert_eq!(detector.detect(&frame, 0.0).unwrap().len(), 1);
        assert_eq!(detector.detect(&frame, 100.0).unwrap().len(), 0);
        // Past the end without repeat: empty, deterministically.
        assert_eq!(detector.detect(&frame, 200.0).unwrap().len(), 0);
    }

    #[test]
    fn repeat_wraps_back_to_first_frame() {
        let script = ReplayScript {
            frames: vec![ReplayFrame {
                detections: vec![Detection::new(
                    "person",
                    0.8,
                    BoundingBox {
                        x: 0.0,
                        y: 0.0,
                        width: 10.0,
                        height: 10.0,
                    },
                )],
            }],
            repeat: true,
        };
        let mut detector = ReplayDetector::new(script);
        let frame = blank_frame();
        for _ in 0..3 {
            assert_eq!(detector.detect(&frame, 0.0).unwrap().len(), 1);
        }
    }
}
