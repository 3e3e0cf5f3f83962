use std::sync::Arc;

use actix_web::{web, HttpResponse};
use log::debug;
use serde_json::json;

use crate::interfaces::batch::process_batch;
use crate::models::{AppState, ConversionRequest};
use crate::settings::Settings;

/// Handler for batch link conversion
pub async fn convert_handler(
    body: web::Json<ConversionRequest>,
    app_state: web::Data<Arc<AppState>>,
) -> HttpResponse {
    debug!(
        "Received conversion request: platform={}, {} links",
        body.platform,
        body.links.len()
    );
    let max_concurrency = Settings::current().max_concurrent_conversions;

    match process_batch(
        &body.links,
        &body.platform,
        body.use_universal_link,
        max_concurrency,
        &app_state.context,
    )
    .await
    {
        Ok(results) => HttpResponse::Ok().json(json!({ "results": results })),
        Err(e) => HttpResponse::BadRequest().json(json!({ "error": e.to_string() })),
    }
}

/// Register the API endpoints with Actix Web
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/convert", web::post().to(convert_handler));
}
