pub mod message;
pub mod planner;
pub mod spatial;
