use serde::{Deserialize, Serialize};

use super::Platform;

/// Body of a batch conversion request.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversionRequest {
    /// Raw links to convert, one result produced per entry.
    pub links: Vec<String>,
    /// Platform name, validated against [`Platform::from_str`].
    pub platform: String,
    /// Wrap taobao results as universal links; ignored for other platforms.
    #[serde(rename = "useUniversalLink", default)]
    pub use_universal_link: bool,
}

/// One converted link, at the same position as its input.
///
/// `success` is true exactly when `converted` is non-empty; a failed result
/// carries an error tag instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub converted: String,
    pub platform: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConversionResult {
    pub fn ok(converted: String, platform: Platform) -> Self {
        ConversionResult {
            converted,
            platform: platform.as_str().to_string(),
            success: true,
            error: None,
        }
    }

    pub fn failed(platform: Platform, error: &str) -> Self {
        ConversionResult {
            converted: String::new(),
            platform: platform.as_str().to_string(),
            success: false,
            error: Some(error.to_string()),
        }
    }
}
