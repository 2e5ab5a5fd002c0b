use anyhow::Result;
use log::info;

/// A short spoken phrase with synthesizer parameters. Defaults match the
/// assistant's house voice: slightly hurried, slightly quiet.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Utterance {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rate: 1.1,
            pitch: 1.0,
            volume: 0.8,
        }
    }

    /// Raised pitch marks danger alerts apart from routine guidance.
    pub fn with_pitch(mut self, pitch: f32) -> Self {
        self.pitch = pitch;
        self
    }
}

/// The produced speech boundary. `cancel` drops any in-flight utterance;
/// callers cancel before speaking so at most one utterance is ever
/// pending.
pub trait SpeechSynth {
    fn speak(&mut self, utterance: &Utterance) -> Result<()>;
    fn cancel(&mut self);
}

/// Headless synthesizer that logs utterances instead of producing audio.
pub struct ConsoleSpeech;

impl SpeechSynth for ConsoleSpeech {
    fn speak(&mut self, utterance: &Utterance) -> Result<()> {
        info!(
            "[speech] \"{}\" (rate {}, pitch {})",
            utterance.text, utterance.rate, utterance.pitch
        );
        Ok(())
    }

    fn cancel(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utterance_defaults_and_pitch_override() {
        let plain = Utterance::new("Turn left");
        assert_eq!(plain.pitch, 1.0);
        assert_eq!(plain.rate, 1.1);
        let alarmed = Utterance::new("Stop! car ahead").with_pitch(1.2);
        assert_eq!(alarmed.pitch, 1.2);
    }
}
