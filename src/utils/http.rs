//! Outbound HTTP used to resolve short links before rewriting them.

use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::{redirect, Client, Proxy, StatusCode};

/// Default timeout for HTTP requests in seconds
const DEFAULT_TIMEOUT: u64 = 15;

/// Default cap on followed redirects
const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Explicit knobs for the outbound client; nothing is left to library
/// defaults so that the redirect cap and timeout stay visible configuration.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub timeout: Duration,
    pub max_redirects: usize,
    /// Optional proxy string (e.g., "http://127.0.0.1:8080")
    pub proxy: Option<String>,
}

impl Default for HttpOptions {
    fn default() -> Self {
        HttpOptions {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            proxy: None,
        }
    }
}

/// Result of resolving a link: the URL the redirect chain ended on and the
/// response body as text. Lives only for the duration of one conversion.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub final_url: String,
    pub body: String,
}

/// Fetch capability injected into the converters that resolve short links.
///
/// Production code uses [`HttpFetcher`]; tests substitute canned pages and
/// failures without touching the network.
pub trait LinkFetcher: Send + Sync {
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<FetchedPage, String>>;
}

/// reqwest-backed implementation of [`LinkFetcher`].
pub struct HttpFetcher {
    options: HttpOptions,
}

impl HttpFetcher {
    pub fn new(options: HttpOptions) -> Self {
        HttpFetcher { options }
    }
}

impl LinkFetcher for HttpFetcher {
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<FetchedPage, String>> {
        Box::pin(web_get_async(url, &self.options))
    }
}

/// Makes an HTTP GET request to the specified URL
///
/// # Arguments
/// * `url` - The URL to request
/// * `options` - Timeout, redirect cap and optional proxy
///
/// # Returns
/// * `Ok(FetchedPage)` - The final URL and the response body as text
/// * `Err(String)` - Error message if the request failed
pub async fn web_get_async(url: &str, options: &HttpOptions) -> Result<FetchedPage, String> {
    let mut client_builder = Client::builder()
        .timeout(options.timeout)
        .redirect(redirect::Policy::limited(options.max_redirects))
        .user_agent("deeplinker");

    if let Some(proxy) = &options.proxy {
        if !proxy.is_empty() {
            match Proxy::all(proxy) {
                Ok(proxy) => {
                    client_builder = client_builder.proxy(proxy);
                }
                Err(e) => {
                    return Err(format!("Failed to set proxy: {}", e));
                }
            }
        }
    }

    let client = match client_builder.build() {
        Ok(client) => client,
        Err(e) => {
            return Err(format!("Failed to build HTTP client: {}", e));
        }
    };

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            return Err(format!("Failed to send request: {}", e));
        }
    };

    // The URL after redirect following; the alipay rule inspects this.
    let final_url = response.url().to_string();

    if response.status() != StatusCode::OK {
        return Err(format!("HTTP error: {}", response.status()));
    }

    match response.text().await {
        Ok(body) => Ok(FetchedPage { final_url, body }),
        Err(e) => Err(format!("Failed to read response body: {}", e)),
    }
}
