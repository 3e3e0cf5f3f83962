//! Per-platform deep-link construction.
//!
//! One module per platform. Taobao and alipay resolve short links over the
//! network first; the remaining five are pure string transforms.

pub mod alipay;
pub mod jd;
pub mod meituan;
pub mod pdd;
pub mod taobao;
pub mod tmall;
pub mod xianyu;

use std::sync::Arc;

use thiserror::Error;

use crate::models::Platform;
use crate::utils::http::LinkFetcher;
use crate::utils::nonce::NonceSource;

/// Successful conversion outcome.
///
/// `Fallback` marks a degraded best-effort deep link (scrape miss, URL parse
/// failure, redirect target without a scheme payload). Callers report it as
/// success, but it stays distinct from a fully resolved conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Converted(String),
    Fallback(String),
}

impl Outcome {
    /// The produced deep-link string, whichever way it was reached.
    pub fn into_link(self) -> String {
        match self {
            Outcome::Converted(link) | Outcome::Fallback(link) => link,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("network error: {0}")]
    Network(String),
}

/// Capabilities shared by every conversion: the outbound fetcher used to
/// resolve short links and the clock/randomness source behind generated
/// nonces. Both are injected so tests can pin exact output.
#[derive(Clone)]
pub struct ConvertContext {
    pub fetcher: Arc<dyn LinkFetcher>,
    pub nonce: Arc<dyn NonceSource>,
}

/// Convert a single link into the platform's deep-link form.
///
/// Dispatches exhaustively on [`Platform`]. Only the taobao and alipay rules
/// can return an error, and only for a failed short-link fetch; every other
/// rule produces a result for any input string.
pub async fn convert_link(
    link: &str,
    platform: Platform,
    use_universal_link: bool,
    ctx: &ConvertContext,
) -> Result<Outcome, ConvertError> {
    match platform {
        Platform::Taobao => taobao::convert(link, use_universal_link, ctx).await,
        Platform::Alipay => alipay::convert(link, ctx).await,
        Platform::Tmall => Ok(tmall::convert(link)),
        Platform::Jd => Ok(jd::convert(link)),
        Platform::Pdd => Ok(pdd::convert(link)),
        Platform::Meituan => Ok(meituan::convert(link)),
        Platform::Xianyu => Ok(xianyu::convert(link)),
    }
}
