use anyhow::Result;
use log::info;

/// Vibration vocabulary: alternating on/off durations in milliseconds,
/// one fixed pattern per guidance outcome.
pub mod patterns {
    pub const TURN_LEFT: &[u64] = &[100, 50, 100];
    pub const TURN_RIGHT: &[u64] = &[50, 100, 50];
    pub const STRAIGHT: &[u64] = &[200];
    /// Quiet cadence tick while "go straight" speech is suppressed.
    pub const STRAIGHT_TICK: &[u64] = &[50];
    pub const STOP: &[u64] = &[200, 100, 200, 100, 200];
    pub const DANGER: &[u64] = &[200, 100, 200];
    pub const CAUTION: &[u64] = &[100];
}

/// The produced haptic boundary.
pub trait HapticActuator {
    fn vibrate(&mut self, pattern: &[u64]) -> Result<()>;
}

/// Headless actuator that logs patterns instead of vibrating.
pub struct LogHaptics;

impl HapticActuator for LogHaptics {
    fn vibrate(&mut self, pattern: &[u64]) -> Result<()> {
        info!("[haptic] {:?}", pattern);
        Ok(())
    }
}
