//! Alipay conversion: redirect-chain resolution and the startapp scheme.

use log::warn;

use super::{ConvertContext, ConvertError, Outcome};
use crate::constants::hosts::ALIPAY_SHORT_PREFIXES;
use crate::utils::nonce::launch_key;
use crate::utils::url::{url_decode, url_encode};

/// Convert an alipay link.
///
/// Short links are resolved by following the redirect chain; the final URL's
/// `scheme=` parameter carries the actual deep link. A chain that ends
/// without one falls back to the original link. Every produced link gets a
/// request-scoped `launchKey` suffix.
pub async fn convert(link: &str, ctx: &ConvertContext) -> Result<Outcome, ConvertError> {
    let key = launch_key(ctx.nonce.as_ref());

    if ALIPAY_SHORT_PREFIXES
        .iter()
        .any(|prefix| link.starts_with(prefix))
    {
        let page = ctx.fetcher.fetch(link).await.map_err(|e| {
            warn!("alipay short link fetch failed for {}: {}", link, e);
            ConvertError::Network(e)
        })?;
        return Ok(match extract_scheme(&page.final_url) {
            Some(scheme) => Outcome::Converted(format!("{}&launchKey={}", scheme, key)),
            None => Outcome::Fallback(format!("{}&launchKey={}", link, key)),
        });
    }

    Ok(Outcome::Converted(format!(
        "alipays://platformapi/startapp?appId=20000067&url={}&launchKey={}",
        url_encode(link),
        key
    )))
}

/// Percent-decoded remainder of the resolved URL after the first `scheme=`.
fn extract_scheme(final_url: &str) -> Option<String> {
    final_url
        .split_once("scheme=")
        .map(|(_, rest)| url_decode(rest))
}
