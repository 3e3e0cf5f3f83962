//! Core data models for the application
//!
//! The primary data structures used throughout the application, separated
//! from the logic that operates on them.

mod app_state;
mod platform;
mod request;

pub use app_state::AppState;
pub use platform::Platform;
pub use request::{ConversionRequest, ConversionResult};
