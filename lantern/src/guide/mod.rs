pub mod dispatcher;
pub mod visual;

pub use dispatcher::{GuidanceDispatcher, GuidanceState};
