use std::fmt::{Display, Formatter};

/// The planner's per-frame recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Straight,
    Left,
    Right,
    Stop,
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Straight => write!(f, "straight"),
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Stop => write!(f, "stop"),
        }
    }
}

/// How much walkable room the recommended path leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathWidth {
    Wide,
    Medium,
    Narrow,
    Blocked,
}

/// Confidence in the frame's decision, degraded by scene clutter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfidenceLabel {
    Low,
    Medium,
    High,
}

impl ConfidenceLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLabel::Low => "LOW",
            ConfidenceLabel::Medium => "MEDIUM",
            ConfidenceLabel::High => "HIGH",
        }
    }
}

impl Display for ConfidenceLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recomputed every frame from the current detections alone; no history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathDecision {
    pub clear: bool,
    pub direction: Direction,
    pub width: PathWidth,
    pub confidence: ConfidenceLabel,
}
