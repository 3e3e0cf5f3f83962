use std::sync::Arc;
use std::time::Duration;

use crate::converter::ConvertContext;
use crate::settings::Settings;
use crate::utils::http::{HttpFetcher, HttpOptions};
use crate::utils::nonce::SystemNonce;

/// Shared state handed to the web handlers: the conversion capabilities
/// built once from the current settings.
pub struct AppState {
    pub context: ConvertContext,
}

impl AppState {
    pub fn new() -> Self {
        let settings = Settings::current();
        let options = HttpOptions {
            timeout: Duration::from_secs(settings.http_timeout_secs),
            max_redirects: settings.http_max_redirects,
            proxy: settings.proxy.clone(),
        };
        AppState {
            context: ConvertContext {
                fetcher: Arc::new(HttpFetcher::new(options)),
                nonce: Arc::new(SystemNonce),
            },
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
