#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
use lantern::config::NavigatorConfig;
use lantern::guide::GuidanceDispatcher;
use lantern::session::NavigationSession;
use lantern_feedback::haptic::LogHaptics;
use lantern_feedback::panel::ConsolePanel;
use lantern_feedback::speech::ConsoleSpeech;
use lantern_vision::camera::{open_with_fallback, CameraRequest, HeadlessCamera};
use lantern_vision::replay::{ReplayDetector, ReplayFrame, ReplayScript};
use lantern_vision::{BoundingBox, Detection, FrameDetector};
use log::info;
use tracing_subscriber::filter::LevelFilter;

fn log_init(level: &str) {
    let level: LevelFilter = level.parse().unwrap_or(LevelFilter::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();
}

/// Small scripted scene used when no replay script is configured: a clear
/// stretch, a person drifting in from the left, then a car dead ahead.
fn demo_script() -> ReplayScript {
    let person = |x| {
        Detection::new(
            "person",
            0.85,
            BoundingBox {
                x,
                y: 180.0,
                width: 90.0,
                height: 200.0,
            },
        )
    };
    let car = Detection::new(
        "car",
        0.93,
        BoundingBox {
            x: 140.0,
            y: 120.0,
            width: 360.0,
            height: 280.0,
        },
    );

    ReplayScript {
        frames: vec![
            ReplayFrame::default(),
            ReplayFrame::default(),
            ReplayFrame {
                detections: vec![person(20.0)],
            },
            ReplayFrame {
                detections: vec![person(120.0)],
            },
            ReplayFrame {
                detections: vec![person(240.0)],
            },
            ReplayFrame {
                detections: vec![car.clone()],
            },
            ReplayFrame {
                detections: vec![car],
            },
            ReplayFrame::default(),
        ],
        repeat: true,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config_path = std::env::args().nth(1).unwrap_or_else(|| "lantern.yaml".to_string());
    let config = NavigatorConfig::load_or_default(&config_path);
    log_init(&config.logging.level);

    let detector: Box<dyn FrameDetector> = match &config.replay.script {
        Some(path) => Box::new(ReplayDetector::from_file(path)?),
        None => {
            info!("No replay script configured, running the built-in demo scene");
            Box::new(ReplayDetector::new(demo_script()))
        }
    };

    let ladder = CameraRequest::ladder(config.session.frame_width, config.session.frame_height);
    let camera = open_with_fallback(&ladder, |request| {
        Ok(HeadlessCamera::new(request.width, request.height))
    })?;

    let dispatcher = GuidanceDispatcher::new(
        &config.guidance,
        Box::new(ConsoleSpeech),
        Box::new(LogHaptics),
        Box::new(ConsolePanel::new()),
    );

    let session = NavigationSession::new(&config, Box::new(camera), detector, dispatcher);
    let handle = session.handle();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutting down");
            handle.stop();
        }
    });

    session.run().await;
    Ok(())
}
