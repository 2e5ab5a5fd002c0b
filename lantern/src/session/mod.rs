use crate::config::NavigatorConfig;
use crate::detect::analysis::spatial::SpatialAnalyzer;
use crate::guide::visual::build_overlays;
use crate::guide::GuidanceDispatcher;
use anyhow::Result;
use lantern_feedback::panel::Viewport;
use lantern_vision::camera::FrameSource;
use lantern_vision::FrameDetector;
use log::{info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Handle for stopping a running session from another task.
#[derive(Clone)]
pub struct SessionHandle {
    running: Arc<AtomicBool>,
}

impl SessionHandle {
    pub fn stop(&self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

/// The frame loop: pull a frame, detect, analyze, dispatch guidance.
/// Each tick is independent; a failing frame or detector call is logged
/// and the loop moves on to the next tick.
pub struct NavigationSession {
    camera: Box<dyn FrameSource>,
    detector: Box<dyn FrameDetector>,
    analyzer: SpatialAnalyzer,
    dispatcher: GuidanceDispatcher,
    viewport: Viewport,
    interval: Duration,
    running: Arc<AtomicBool>,
}

impl NavigationSession {
    pub fn new(
        config: &NavigatorConfig,
        camera: Box<dyn FrameSource>,
        detector: Box<dyn FrameDetector>,
        dispatcher: GuidanceDispatcher,
    ) -> Self {
        Self {
            camera,
            detector,
            analyzer: SpatialAnalyzer::new(config.planner.clone(), config.walls.clone()),
            dispatcher,
            viewport: Viewport {
                width: config.display.width,
                height: config.display.height,
            },
            interval: Duration::from_millis(config.session.interval_ms),
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            running: self.running.clone(),
        }
    }

    pub async fn run(mut self) {
        self.dispatcher.set_status("Navigation active");
        info!("Navigation session started at {:?} cadence", self.interval);

        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        while self.running.load(Ordering::Relaxed) {
            ticker.tick().await;
            if let Err(err) = self.step(Instant::now()) {
                warn!("Frame skipped: {:#}", err);
            }
        }

        self.dispatcher.set_status("Navigation stopped");
        info!("Navigation session stopped");
    }

    /// One tick of the loop, visible for tests.
    pub fn step(&mut self, now: Instant) -> Result<()> {
        let frame = self.camera.next_frame()?;
        let detections = self.detector.detect(&frame, frame.timestamp_ms)?;

        let overlays = build_overlays(&detections, frame.width, frame.height, &self.viewport);
        self.dispatcher.draw_overlays(&overlays);

        let analysis = self.analyzer.analyze(&detections, frame.width, frame.height);
        self.dispatcher.dispatch(&analysis, now);
        Ok(())
    }
}
