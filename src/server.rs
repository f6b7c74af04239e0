use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::{
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::{SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;

use crate::api::{ApiAnalyzeRequest, ApiAnalyzeResponse};
use post_optimizer::config::EngineConfig;
use post_optimizer::knowledge::{ENGAGEMENT_ACTIONS, PIPELINE_STAGES};
use post_optimizer::optimize_with_config;

#[derive(Clone)]
struct AppState {
    config: Arc<EngineConfig>,
}

static REQUEST_COUNTER: AtomicUsize = AtomicUsize::new(0);

pub async fn serve(args: crate::ServeArgs, config: EngineConfig) -> Result<(), String> {
    let state = AppState {
        config: Arc::new(config),
    };

    let web_root = args.web_root;
    let index_path = format!("{}/index.html", web_root.trim_end_matches('/'));
    let static_service = ServeDir::new(web_root).not_found_service(ServeFile::new(index_path));

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/analyze", post(analyze_handler))
        .route("/api/pipeline", get(pipeline_handler))
        .nest_service("/", static_service)
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    info!(%addr, "listening");
    axum::serve(tokio::net::TcpListener::bind(addr).await.map_err(|err| {
        format!("failed to bind server: {}", err)
    })?, app)
    .await
    .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiAnalyzeRequest>,
) -> Result<Json<ApiAnalyzeResponse>, (StatusCode, String)> {
    let request_id = request
        .request_id
        .clone()
        .unwrap_or_else(generate_request_id);
    let (text, options) = request
        .into_parts()
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;

    let report = optimize_with_config(&text, &options, &state.config);
    info!(
        request_id = %request_id,
        overall = report.analysis.scores.overall,
        warnings = report.analysis.warnings.len(),
        "analysis complete"
    );

    Ok(Json(ApiAnalyzeResponse::new(request_id, report)))
}

async fn pipeline_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "stages": PIPELINE_STAGES,
        "actions": ENGAGEMENT_ACTIONS,
    }))
}

fn generate_request_id() -> String {
    let counter = REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("req-{}-{}", now_ms(), counter)
}

fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis())
        .unwrap_or(0)
}
