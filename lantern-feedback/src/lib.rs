pub mod haptic;
pub mod panel;
pub mod speech;
