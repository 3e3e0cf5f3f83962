//! Xianyu conversion: a pure onepiece wrap.

use super::Outcome;
use crate::utils::url::url_encode;

/// Wrap any web URL into the Xianyu (fleamarket) navigation scheme. Never
/// fails.
pub fn convert(link: &str) -> Outcome {
    Outcome::Converted(format!(
        "fleamarket://2.taobao.com/onepiece?source=auto&action=ali.open.nav&module=h5&bootimage=0&h5Url={}",
        url_encode(link)
    ))
}
