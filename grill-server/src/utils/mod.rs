//! Utility Module

pub mod json;
pub mod logger;

pub use json::JsonBody;
pub use logger::init_logger;
