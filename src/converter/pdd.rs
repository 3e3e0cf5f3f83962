//! Pinduoduo conversion: path extraction into the pinduoduo scheme.

use url::Url;

use super::Outcome;

/// Rewrite a web link onto the Pinduoduo package scheme, keeping only the
/// URL path. A link that does not parse as a URL degrades to embedding the
/// raw input after a slash instead of failing.
pub fn convert(link: &str) -> Outcome {
    match Url::parse(link) {
        Ok(parsed) => Outcome::Converted(format!(
            "pinduoduo://com.xunmeng.pinduoduo{}",
            parsed.path()
        )),
        Err(_) => Outcome::Fallback(format!("pinduoduo://com.xunmeng.pinduoduo/{}", link)),
    }
}
