pub mod config;
pub mod detect;
pub mod guide;
pub mod session;
