//! Meituan conversion: a pure web wrap.

use super::Outcome;
use crate::utils::url::url_encode;

/// Wrap any web URL into the Meituan in-app browser scheme. Never fails.
pub fn convert(link: &str) -> Outcome {
    Outcome::Converted(format!(
        "imeituan://www.meituan.com/web?url={}",
        url_encode(link)
    ))
}
