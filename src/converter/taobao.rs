//! Taobao conversion: short-link resolution plus the composite tbopen URI.

use std::sync::LazyLock;

use log::warn;
use regex::Regex;

use super::{ConvertContext, ConvertError, Outcome};
use crate::constants::hosts::{
    TAOBAO_PAGES_FAST_PREFIX, TAOBAO_SHORT_PREFIX, TAOBAO_UNIVERSAL_PREFIX,
};
use crate::utils::nonce::{slk_sid, NonceSource};
use crate::utils::url::url_encode;

/// First `var url = '...'` assignment in the redirector page, single or
/// double quoted.
static VAR_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"var\s+url\s*=\s*['"]([^'"]+)['"]"#).unwrap());

/// Convert a taobao link.
///
/// `m.tb.cn` short links are fetched and the embedded target scraped out of
/// the HTML; a fetch failure is an error, a scrape miss hands the original
/// link back untouched. `pages-fast` links skip the fetch and go straight
/// into the composite URI. Everything else gets the minimal h5Url wrap.
pub async fn convert(
    link: &str,
    use_universal_link: bool,
    ctx: &ConvertContext,
) -> Result<Outcome, ConvertError> {
    if link.starts_with(TAOBAO_SHORT_PREFIX) {
        let page = ctx.fetcher.fetch(link).await.map_err(|e| {
            warn!("taobao short link fetch failed for {}: {}", link, e);
            ConvertError::Network(e)
        })?;
        let target = match extract_embedded_url(&page.body) {
            Some(target) => target,
            // Redirector page without the inline payload; no universal-link
            // wrapping on this path.
            None => return Ok(Outcome::Fallback(link.to_string())),
        };
        let uri = build_open_uri(&target, extract_tk(link), ctx.nonce.as_ref());
        return Ok(Outcome::Converted(wrap(uri, use_universal_link)));
    }

    if link.starts_with(TAOBAO_PAGES_FAST_PREFIX) {
        let uri = build_open_uri(link, extract_tk(link), ctx.nonce.as_ref());
        return Ok(Outcome::Converted(wrap(uri, use_universal_link)));
    }

    let uri = format!(
        "tbopen://m.taobao.com/tbopen/index.html?h5Url={}",
        url_encode(link)
    );
    Ok(Outcome::Converted(wrap(uri, use_universal_link)))
}

/// Pull the inline `var url = '...'` target out of the redirector HTML.
fn extract_embedded_url(html: &str) -> Option<String> {
    VAR_URL_RE
        .captures(html)
        .map(|captures| captures[1].to_string())
}

/// Affiliate token: everything after the literal `?tk=`, empty when absent.
fn extract_tk(link: &str) -> &str {
    link.split_once("?tk=").map(|(_, tk)| tk).unwrap_or("")
}

/// Composite tbopen URI carrying the resolved target, the affiliate token
/// and a fresh session nonce. The `%26`/`%3D` separators keep the token and
/// app-routing fields inside the encoded h5Url value; `slk_t` is a second
/// clock read.
fn build_open_uri(target: &str, tk: &str, nonce: &dyn NonceSource) -> String {
    let sid = slk_sid(nonce);
    format!(
        "tbopen://m.taobao.com/tbopen/index.html?h5Url={}%26tk%3D{}%26app%3Dchrome%26slk_gid%3Dgid_er_sidebar_0&action=ali.open.nav&module=h5&bootImage=0&slk_sid={}&slk_t={}&slk_gid=gid_er_sidebar_0&afcPromotionOpen=false&bc_fl_src=h5_huanduan&source=slk_dp",
        url_encode(target),
        tk,
        sid,
        nonce.now_millis()
    )
}

fn wrap(uri: String, use_universal_link: bool) -> String {
    if use_universal_link {
        format!("{}{}", TAOBAO_UNIVERSAL_PREFIX, url_encode(&uri))
    } else {
        uri
    }
}
