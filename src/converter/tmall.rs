//! Tmall conversion: a pure appLink wrap.

use super::Outcome;
use crate::utils::url::url_encode;

/// Wrap any web URL into the Tmall app-link scheme. Never fails.
pub fn convert(link: &str) -> Outcome {
    Outcome::Converted(format!(
        "tmall://page.tm/appLink?h5Url={}",
        url_encode(link)
    ))
}
