//! Batch orchestration: request validation, per-link failure isolation and
//! ordered bounded fan-out over the conversion engine.

use futures::stream::{self, StreamExt};
use log::{debug, warn};
use thiserror::Error;

use crate::converter::{convert_link, ConvertContext};
use crate::models::{ConversionResult, Platform};

/// Error tag attached to every failed per-link result. The detailed cause
/// stays in the log, never in the response.
pub const GENERIC_FAILURE: &str = "conversion failed";

/// Request-level rejection, raised before any conversion is attempted.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BatchError {
    #[error("no links provided")]
    EmptyLinks,
    #[error("invalid platform: {0}")]
    InvalidPlatform(String),
}

/// Convert every link in the batch, producing one result per input link in
/// input order.
///
/// Validation failures reject the whole request; anything that goes wrong
/// for a single link afterwards is confined to that link's result and never
/// aborts its siblings. Links run concurrently up to `max_concurrency`, with
/// results collected in input order.
pub async fn process_batch(
    links: &[String],
    platform_str: &str,
    use_universal_link: bool,
    max_concurrency: usize,
    ctx: &ConvertContext,
) -> Result<Vec<ConversionResult>, BatchError> {
    // An empty list and a list of blank-only entries are both "no links".
    if links.iter().all(|link| link.trim().is_empty()) {
        debug!("rejecting batch without usable links");
        return Err(BatchError::EmptyLinks);
    }
    let platform = match Platform::from_str(platform_str) {
        Some(platform) => platform,
        None => {
            debug!("rejecting batch for unknown platform {:?}", platform_str);
            return Err(BatchError::InvalidPlatform(platform_str.to_string()));
        }
    };

    let results = stream::iter(links.iter().map(|link| link.trim()))
        .map(|link| async move {
            match convert_link(link, platform, use_universal_link, ctx).await {
                Ok(outcome) => ConversionResult::ok(outcome.into_link(), platform),
                Err(e) => {
                    warn!("conversion failed for {}: {}", link, e);
                    ConversionResult::failed(platform, GENERIC_FAILURE)
                }
            }
        })
        .buffered(max_concurrency.max(1))
        .collect::<Vec<_>>()
        .await;

    Ok(results)
}
