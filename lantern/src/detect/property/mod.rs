pub mod decision;
pub mod distance;
pub mod zone;
