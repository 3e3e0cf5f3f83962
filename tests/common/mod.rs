//! Shared fixtures: a pinned nonce source and a canned-response fetcher.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::BoxFuture;

use deeplinker::converter::ConvertContext;
use deeplinker::utils::http::{FetchedPage, LinkFetcher};
use deeplinker::utils::nonce::NonceSource;

pub const FIXED_MILLIS: u64 = 1700000000000;
pub const FIXED_UUID: &str = "0a1b2c3d-0000-4000-8000-feedfacecafe";

pub struct FixedNonce;

impl NonceSource for FixedNonce {
    fn now_millis(&self) -> u64 {
        FIXED_MILLIS
    }
    fn rand_bits(&self) -> u32 {
        0x00abcdef
    }
    fn uuid(&self) -> String {
        FIXED_UUID.to_string()
    }
}

#[derive(Default)]
pub struct StubFetcher {
    pages: HashMap<String, Result<FetchedPage, String>>,
}

impl StubFetcher {
    pub fn with_page(mut self, url: &str, final_url: &str, body: &str) -> Self {
        self.pages.insert(
            url.to_string(),
            Ok(FetchedPage {
                final_url: final_url.to_string(),
                body: body.to_string(),
            }),
        );
        self
    }

    pub fn with_failure(mut self, url: &str, error: &str) -> Self {
        self.pages.insert(url.to_string(), Err(error.to_string()));
        self
    }
}

impl LinkFetcher for StubFetcher {
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<FetchedPage, String>> {
        let result = self
            .pages
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(format!("no response configured for {}", url)));
        Box::pin(async move { result })
    }
}

pub fn context(fetcher: StubFetcher) -> ConvertContext {
    ConvertContext {
        fetcher: Arc::new(fetcher),
        nonce: Arc::new(FixedNonce),
    }
}
