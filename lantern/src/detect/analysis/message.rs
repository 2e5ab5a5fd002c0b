use crate::detect::analysis::spatial::ZonedDetection;
use crate::detect::property::decision::Direction;
use crate::detect::property::zone::Zone;

pub const CLEAR_TEXT: &str = "Path clear. Continue straight.";
pub const WALL_TEXT: &str = "Wall detected. Find alternative route.";
pub const CAUTION_FALLBACK_TEXT: &str = "Proceed with caution.";

/// Panel phrasing for each planner outcome.
pub fn panel_text(direction: Direction) -> &'static str {
    match direction {
        Direction::Left => "Obstacle ahead. Turn left.",
        Direction::Right => "Obstacle ahead. Turn right.",
        Direction::Stop => "Path blocked. Find alternative route.",
        Direction::Straight => CAUTION_FALLBACK_TEXT,
    }
}

/// The short spoken form of the same outcome.
pub fn utterance_text(direction: Direction) -> &'static str {
    match direction {
        Direction::Left => "Turn left",
        Direction::Right => "Turn right",
        Direction::Stop => "Stop",
        Direction::Straight => "Go straight",
    }
}

/// The danger sentence names the obstacle and where it is, by the
/// horizontal third its box center falls into.
pub fn danger_sentence(obstacle: &ZonedDetection, frame_width: u32) -> String {
    let bearing =
        Zone::from_center_fraction(obstacle.detection.bbox.center_fraction(frame_width)).bearing();
    format!("Stop! {} {}", obstacle.detection.label, bearing)
}
