pub mod camera;
pub mod classes;
pub mod detector;
pub mod replay;

pub use detector::{BoundingBox, Detection, Frame, FrameDetector};
