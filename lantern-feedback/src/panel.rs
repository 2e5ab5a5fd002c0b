use log::{debug, error, info};
use std::fmt::{Display, Formatter};

/// Urgency badge shown next to the guidance text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Urgency {
    Safe,
    Caution,
    Danger,
}

impl Display for Urgency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Urgency::Safe => write!(f, "SAFE"),
            Urgency::Caution => write!(f, "CAUTION"),
            Urgency::Danger => write!(f, "DANGER"),
        }
    }
}

/// Per-zone obstacle counts plus the frame's confidence label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneReadout {
    pub left: usize,
    pub center: usize,
    pub right: usize,
    pub confidence: &'static str,
}

impl Display for ZoneReadout {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "L({}) C({}) R({}) {}",
            self.left, self.center, self.right, self.confidence
        )
    }
}

/// One overlay rectangle in display coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: String,
    /// Shown above the box for navigation-relevant classes only.
    pub label: Option<String>,
    /// Critical objects get the heavier border.
    pub emphasized: bool,
}

/// Display surface dimensions; scales frame-space rectangles into
/// display space.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Maps a frame-space rectangle to display coordinates.
    pub fn scale_rect(
        &self,
        frame_width: u32,
        frame_height: u32,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> (f32, f32, f32, f32) {
        if frame_width == 0 || frame_height == 0 {
            error!("Frame dimensions cannot be zero for overlay scaling.");
            return (0.0, 0.0, 0.0, 0.0);
        }
        let scale_x = self.width / frame_width as f32;
        let scale_y = self.height / frame_height as f32;
        (x * scale_x, y * scale_y, width * scale_x, height * scale_y)
    }
}

/// The produced UI boundary: guidance text, urgency badge, directional
/// indicator, zone readout, overlay boxes, and a status line. Updated
/// every frame, unthrottled; the latest frame's decision always wins.
pub trait GuidancePanel {
    fn set_status(&mut self, status: &str);
    fn set_guidance(&mut self, text: &str, urgency: Urgency);
    fn set_direction(&mut self, indicator: &str);
    fn set_zone_readout(&mut self, readout: &ZoneReadout);
    fn draw_overlays(&mut self, boxes: &[OverlayBox]);
}

/// Headless panel that logs guidance changes. Repeats of the same text
/// are dropped so a 10 Hz loop does not flood the log.
#[derive(Default)]
pub struct ConsolePanel {
    last_guidance: String,
    last_direction: String,
}

impl ConsolePanel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GuidancePanel for ConsolePanel {
    fn set_status(&mut self, status: &str) {
        info!("[status] {}", status);
    }

    fn set_guidance(&mut self, text: &str, urgency: Urgency) {
        if text != self.last_guidance {
            info!("[{}] {}", urgency, text);
            self.last_guidance = text.to_string();
        }
    }

    fn set_direction(&mut self, indicator: &str) {
        if indicator != self.last_direction {
            info!("[direction] {}", indicator);
            self.last_direction = indicator.to_string();
        }
    }

    fn set_zone_readout(&mut self, readout: &ZoneReadout) {
        debug!("[zones] {}", readout);
    }

    fn draw_overlays(&mut self, boxes: &[OverlayBox]) {
        debug!("[overlay] {} boxes", boxes.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_scales_frame_rect_to_display() {
        let viewport = Viewport {
            width: 320.0,
            height: 240.0,
        };
        let (x, y, w, h) = viewport.scale_rect(640, 480, 100.0, 200.0, 50.0, 80.0);
        assert_eq!((x, y, w, h), (50.0, 100.0, 25.0, 40.0));
    }

    #[test]
    fn zero_frame_dimensions_scale_to_nothing() {
        let viewport = Viewport {
            width: 320.0,
            height: 240.0,
        };
        assert_eq!(
            viewport.scale_rect(0, 480, 1.0, 1.0, 1.0, 1.0),
            (0.0, 0.0, 0.0, 0.0)
        );
    }

    #[test]
    fn badge_text_matches_urgency() {
        assert_eq!(Urgency::Danger.to_string(), "DANGER");
        assert_eq!(Urgency::Safe.to_string(), "SAFE");
    }
}
