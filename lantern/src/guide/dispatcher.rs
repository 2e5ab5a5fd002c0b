use crate::config::GuidanceConfig;
use crate::detect::analysis::message::{
    danger_sentence, panel_text, utterance_text, CAUTION_FALLBACK_TEXT, CLEAR_TEXT, WALL_TEXT,
};
use crate::detect::analysis::spatial::SpatialAnalysis;
use crate::detect::property::decision::Direction;
use crate::guide::visual::{indicator, zone_readout};
use lantern_feedback::haptic::{patterns, HapticActuator};
use lantern_feedback::panel::{GuidancePanel, OverlayBox, Urgency};
use lantern_feedback::speech::{SpeechSynth, Utterance};
use log::warn;
use std::time::{Duration, Instant};

/// Throttle state for the audio/haptic channels. Lives for the process,
/// reset on restart; the visual channel is deliberately unthrottled.
#[derive(Debug, Default)]
pub struct GuidanceState {
    last_alert: Option<Instant>,
    last_direction: Option<Instant>,
    last_spoken: Option<String>,
    straight_streak: u32,
}

impl GuidanceState {
    fn alert_elapsed(&self, now: Instant, window: Duration) -> bool {
        self.last_alert
            .map_or(true, |at| now.duration_since(at) > window)
    }

    fn direction_elapsed(&self, now: Instant, window: Duration) -> bool {
        self.last_direction
            .map_or(true, |at| now.duration_since(at) > window)
    }

    fn spoke(&self, message: &str) -> bool {
        self.last_spoken.as_deref() == Some(message)
    }
}

/// Converts one frame's analysis into speech, haptics, and panel updates.
/// The caller injects `now` so every throttling decision is testable
/// without touching the wall clock.
pub struct GuidanceDispatcher {
    speech: Box<dyn SpeechSynth>,
    haptics: Box<dyn HapticActuator>,
    panel: Box<dyn GuidancePanel>,
    alert_interval: Duration,
    direction_interval: Duration,
    straight_interval: Duration,
    max_straight_repeats: u32,
    state: GuidanceState,
}

impl GuidanceDispatcher {
    pub fn new(
        config: &GuidanceConfig,
        speech: Box<dyn SpeechSynth>,
        haptics: Box<dyn HapticActuator>,
        panel: Box<dyn GuidancePanel>,
    ) -> Self {
        Self {
            speech,
            haptics,
            panel,
            alert_interval: Duration::from_millis(config.alert_interval_ms),
            direction_interval: Duration::from_millis(config.direction_interval_ms),
            straight_interval: Duration::from_millis(config.straight_interval_ms),
            max_straight_repeats: config.max_straight_repeats,
            state: GuidanceState::default(),
        }
    }

    pub fn set_status(&mut self, status: &str) {
        self.panel.set_status(status);
    }

    pub fn draw_overlays(&mut self, boxes: &[OverlayBox]) {
        self.panel.draw_overlays(boxes);
    }

    pub fn dispatch(&mut self, analysis: &SpatialAnalysis, now: Instant) {
        match analysis.urgency() {
            Urgency::Safe => {
                self.panel.set_guidance(CLEAR_TEXT, Urgency::Safe);
                self.directional(Direction::Straight, now);
            }
            Urgency::Danger => {
                if let Some(closest) = analysis.nearest_critical() {
                    let message = danger_sentence(closest, analysis.frame_width);
                    self.panel.set_guidance(&message, Urgency::Danger);
                    self.danger_alert(&message, now);
                }
                self.state.straight_streak = 0;
            }
            Urgency::Caution => {
                if analysis.obstacle_count() > 0 {
                    self.panel
                        .set_guidance(panel_text(analysis.decision.direction), Urgency::Caution);
                    self.directional(analysis.decision.direction, now);
                } else if analysis.has_walls {
                    self.panel.set_guidance(WALL_TEXT, Urgency::Caution);
                    self.directional(Direction::Stop, now);
                } else {
                    self.panel
                        .set_guidance(CAUTION_FALLBACK_TEXT, Urgency::Caution);
                    self.directional(analysis.decision.direction, now);
                }
            }
        }

        self.panel.set_zone_readout(&zone_readout(analysis));
    }

    /// Danger alerts preempt everything but repeat at most once per alert
    /// window; the haptic double pulse rides the same window.
    fn danger_alert(&mut self, message: &str, now: Instant) {
        if !self.state.alert_elapsed(now, self.alert_interval) {
            return;
        }
        self.vibrate(patterns::DANGER);
        self.say(Utterance::new(message).with_pitch(1.2));
        self.state.last_alert = Some(now);
    }

    /// Routine directional guidance. Left/right/stop speak whenever the
    /// direction window has elapsed; straight is quieter: it repeats only
    /// when the message changed or the longer straight window has passed,
    /// and after enough consecutive repeats it goes silent entirely,
    /// leaving only a faint cadence tick.
    fn directional(&mut self, direction: Direction, now: Instant) {
        self.panel.set_direction(indicator(direction));

        match direction {
            Direction::Straight => {
                let text = utterance_text(direction);
                let fresh = !self.state.spoke(text)
                    || self.state.direction_elapsed(now, self.straight_interval);
                let mut speak = false;
                if fresh {
                    self.state.straight_streak += 1;
                    speak = self.state.straight_streak <= self.max_straight_repeats;
                }
                if speak {
                    self.vibrate(patterns::STRAIGHT);
                    if self.state.direction_elapsed(now, self.direction_interval) {
                        self.say_direction(text, now);
                    }
                } else {
                    self.vibrate(patterns::STRAIGHT_TICK);
                }
            }
            Direction::Left | Direction::Right | Direction::Stop => {
                self.state.straight_streak = 0;
                let pattern = match direction {
                    Direction::Left => patterns::TURN_LEFT,
                    Direction::Right => patterns::TURN_RIGHT,
                    _ => patterns::STOP,
                };
                self.vibrate(pattern);
                if self.state.direction_elapsed(now, self.direction_interval) {
                    self.say_direction(utterance_text(direction), now);
                }
            }
        }
    }

    fn say_direction(&mut self, text: &'static str, now: Instant) {
        self.say(Utterance::new(text));
        self.state.last_spoken = Some(text.to_string());
        self.state.last_direction = Some(now);
    }

    /// Cancel-then-speak keeps at most one utterance in flight. Speech
    /// failure is logged and ignored; guidance must not stop the loop.
    fn say(&mut self, utterance: Utterance) {
        self.speech.cancel();
        if let Err(err) = self.speech.speak(&utterance) {
            warn!("Speech synthesis failed: {:#}", err);
        }
    }

    fn vibrate(&mut self, pattern: &[u64]) {
        if let Err(err) = self.haptics.vibrate(pattern) {
            warn!("Vibration failed: {:#}", err);
        }
    }
}
