// HTTP surface — a single JSON endpoint over the batch pipeline.
//
// GET /?urls=u1,u2,... fans the listed articles out to the processing
// pipeline and returns one JSON entry per URL, in completion order. The
// URL-count cap lives here in the transport layer; the pipeline itself
// accepts any batch size.

use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::Config;
use crate::lexicon::Lexicons;
use crate::morph::Morph;
use crate::pipeline::batch;
use crate::sanitize::Sanitizer;

/// Most URLs accepted in one request.
const MAX_URLS_PER_REQUEST: usize = 10;

/// Shared application state threaded through all handlers. Everything in
/// it is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub lexicons: Arc<Lexicons>,
    pub morph: Arc<dyn Morph>,
    pub sanitizer: Arc<dyn Sanitizer>,
}

#[derive(Deserialize)]
struct ArticlesQuery {
    urls: Option<String>,
}

/// Start the endpoint and block until it exits.
pub async fn run_server(state: AppState, bind: &str, port: u16) -> Result<()> {
    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("Jaundice endpoint listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(process_articles))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / — analyze a comma-separated list of article URLs.
async fn process_articles(
    State(state): State<AppState>,
    Query(query): Query<ArticlesQuery>,
) -> (StatusCode, Json<Value>) {
    let urls: Vec<String> = query
        .urls
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect();

    if urls.is_empty() {
        return (StatusCode::OK, Json(json!({ "error": "Empty url parameter" })));
    }

    if urls.len() > MAX_URLS_PER_REQUEST {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": format!(
                    "too many urls in request, should be {MAX_URLS_PER_REQUEST} or less"
                )
            })),
        );
    }

    match batch::process_batch(
        state.sanitizer.as_ref(),
        state.morph.as_ref(),
        &state.lexicons,
        &urls,
        state.config.process_timeout,
    )
    .await
    {
        Ok(results) => (StatusCode::OK, Json(json!({ "results": results }))),
        Err(err) => {
            error!(error = %err, "Batch processing failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "internal processing failure" })),
            )
        }
    }
}
