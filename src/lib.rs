pub mod constants;
pub mod converter;
pub mod interfaces;
pub mod models;
pub mod settings;
pub mod utils;

#[cfg(feature = "web-api")]
pub mod web_handlers;

// Re-export the main request/response types for easier access
pub use models::{ConversionRequest, ConversionResult, Platform};
pub use settings::Settings;
