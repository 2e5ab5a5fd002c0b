use crate::detector::Frame;
use anyhow::{anyhow, Context, Result};
use log::{info, warn};
use std::time::Instant;

/// Requested camera orientation. `Any` is the bare fallback constraint
/// used when both facing-specific requests are refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Environment,
    User,
    Any,
}

/// One constraint set handed to the platform camera. Requests are tried
/// in ladder order, loosest last.
#[derive(Debug, Clone, Copy)]
pub struct CameraRequest {
    pub width: u32,
    pub height: u32,
    pub facing: Facing,
}

impl CameraRequest {
    /// The standard relaxation ladder: rear camera at the requested
    /// resolution, then the front camera, then anything at all.
    pub fn ladder(width: u32, height: u32) -> [CameraRequest; 3] {
        [
            CameraRequest {
                width,
                height,
                facing: Facing::Environment,
            },
            CameraRequest {
                width,
                height,
                facing: Facing::User,
            },
            CameraRequest {
                width,
                height,
                facing: Facing::Any,
            },
        ]
    }
}

/// The consumed camera boundary: a live source of frames.
pub trait FrameSource {
    fn next_frame(&mut self) -> Result<Frame>;
}

/// Tries each constraint set in order and returns the first source that
/// opens. Only after the whole ladder fails does the error surface, worded
/// as a permission request since denied access is the common cause.
pub fn open_with_fallback<S, F>(requests: &[CameraRequest], mut open: F) -> Result<S>
where
    F: FnMut(&CameraRequest) -> Result<S>,
{
    let mut last_error = None;
    for request in requests {
        match open(request) {
            Ok(source) => {
                info!("Camera opened with {:?}", request);
                return Ok(source);
            }
            Err(err) => {
                warn!("Camera request {:?} failed: {:#}", request, err);
                last_error = Some(err);
            }
        }
    }
    Err(last_error.unwrap_or_else(|| anyhow!("no camera constraint sets provided")))
        .context("Camera access denied. Please allow camera permissions to use the assistant.")
}

/// Frame source with no pixel payload, for detectors that do not read
/// pixels (replayed detections, remote services). Timestamps are real so
/// throttling behaves as it would against live video.
pub struct HeadlessCamera {
    width: u32,
    height: u32,
    started: Instant,
}

impl HeadlessCamera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            started: Instant::now(),
        }
    }
}

impl FrameSource for HeadlessCamera {
    fn next_frame(&mut self) -> Result<Frame> {
        Ok(Frame {
            data: Vec::new(),
            width: self.width,
            height: self.height,
            timestamp_ms: self.started.elapsed().as_secs_f64() * 1000.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_skips_failing_constraint_sets() {
        let ladder = CameraRequest::ladder(640, 480);
        let opened = open_with_fallback(&ladder, |request| {
            if request.facing == Facing::Environment {
                Err(anyhow!("environment camera unavailable"))
            } else {
                Ok(request.facing)
            }
        })
        .unwrap();
        assert_eq!(opened, Facing::User);
    }

    #[test]
    fn exhausted_ladder_surfaces_permission_error() {
        let ladder = CameraRequest::ladder(640, 480);
        let result: Result<()> = open_with_fallback(&ladder, |_| Err(anyhow!("denied")));
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("camera permissions"));
    }

    #[test]
    fn headless_camera_reports_requested_dimensions() {
        let mut camera = HeadlessCamera::new(640, 480);
        let frame = camera.next_frame().unwrap();
        assert_eq!((frame.width, frame.height), (640, 480));
        assert!(frame.data.is_empty());
    }
}
