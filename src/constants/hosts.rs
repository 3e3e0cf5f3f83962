//! Host prefixes shared between the platform converters.

/// Taobao short-link redirector; resolving it requires a network fetch.
pub const TAOBAO_SHORT_PREFIX: &str = "https://m.tb.cn";

/// Taobao mobile host that already carries the final payload in the link itself.
pub const TAOBAO_PAGES_FAST_PREFIX: &str = "https://pages-fast.m.taobao.com";

/// Universal-link wrapper host for Taobao deep links.
pub const TAOBAO_UNIVERSAL_PREFIX: &str = "https://ace.tb.cn/t?smburl=";

/// Alipay short-link redirectors, resolved by following the redirect chain.
pub const ALIPAY_SHORT_PREFIXES: [&str; 2] = ["https://ur.alipay.com", "https://qr.alipay.com"];
