use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;

/// Top-level configuration, loaded from YAML with per-section defaults.
/// Every tuning value anyone has ever wanted to vary in the field is a
/// field here rather than a constant in the logic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    pub session: SessionConfig,
    pub planner: PlannerConfig,
    pub walls: WallConfig,
    pub guidance: GuidanceConfig,
    pub display: DisplayConfig,
    pub replay: ReplayConfig,
    pub logging: LoggingConfig,
}

impl NavigatorConfig {
    pub fn load(path: &str) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("failed to read config {}", path))?;
        let config: NavigatorConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse config {}", path))?;
        Ok(config)
    }

    /// Missing or broken config is not fatal; the defaults are a working
    /// tuning.
    pub fn load_or_default(path: &str) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                info!("Using default configuration: {:#}", err);
                Self::default()
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Polling cadence in milliseconds. 100 ms (10 FPS) keeps mobile-class
    /// detectors comfortable.
    pub interval_ms: u64,
    pub frame_width: u32,
    pub frame_height: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            interval_ms: 100,
            frame_width: 640,
            frame_height: 480,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// A zone counts as blocked when it holds an object closer than this.
    pub near_clearance: f32,
    /// Upper edge of the medium distance band.
    pub medium_range: f32,
    /// Anything closer than this forces a danger alert for the frame.
    pub danger_distance: f32,
    /// More near objects than this drops decision confidence to low.
    pub low_confidence_near: usize,
    /// More total objects than this drops decision confidence to medium.
    pub medium_confidence_total: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            near_clearance: 2.0,
            medium_range: 5.0,
            danger_distance: 1.5,
            low_confidence_near: 2,
            medium_confidence_total: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WallConfig {
    /// Synthesize wall/barrier hypotheses from unusually wide detections.
    pub infer: bool,
    /// On a completely empty frame, emit a single low-confidence
    /// "potential wall" hypothesis. Off by default: it forces a danger
    /// alert on every empty scene.
    pub empty_frame_hint: bool,
    /// A wall candidate must span at least this fraction of frame width...
    pub min_relative_width: f32,
    /// ...be at least this many times wider than tall...
    pub min_aspect_ratio: f32,
    /// ...and not fill the frame vertically.
    pub max_relative_height: f32,
    /// A barrier candidate fills this much of the frame in both axes.
    pub barrier_relative_width: f32,
    pub barrier_relative_height: f32,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            infer: true,
            empty_frame_hint: false,
            min_relative_width: 0.6,
            min_aspect_ratio: 2.0,
            max_relative_height: 0.8,
            barrier_relative_width: 0.4,
            barrier_relative_height: 0.3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GuidanceConfig {
    /// Minimum gap between danger utterances.
    pub alert_interval_ms: u64,
    /// Minimum gap between directional utterances.
    pub direction_interval_ms: u64,
    /// "Go straight" additionally waits this long since the last
    /// directional utterance.
    pub straight_interval_ms: u64,
    /// Consecutive "Go straight" utterances before going silent.
    pub max_straight_repeats: u32,
}

impl Default for GuidanceConfig {
    fn default() -> Self {
        Self {
            alert_interval_ms: 3000,
            direction_interval_ms: 3000,
            straight_interval_ms: 5000,
            max_straight_repeats: 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    /// Path to a YAML replay script; when unset the binary runs a small
    /// built-in demo scene.
    pub script: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
