use crate::config::AppConfig;
use crate::core::pipeline::AtisPipeline;
use crate::core::present;
use crate::core::source::HttpAtisSource;
use crate::domain::ports::AtisSource;
use crate::utils::error::AtisError;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

/// Shared, immutable per-process state. Built once at startup; requests
/// only ever read it.
pub struct AppState<S: AtisSource> {
    pub pipeline: AtisPipeline<S>,
}

/// Build the axum Router with both endpoints.
pub fn router<S: AtisSource + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/atis/text", get(atis_text))
        .with_state(state)
}

/// Start the HTTP server and serve until the process is stopped.
pub async fn start(config: &AppConfig) -> anyhow::Result<()> {
    let source = HttpAtisSource::new(
        config.atis_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )?;
    let pipeline = AtisPipeline::new(source)?;
    let state = Arc::new(AppState { pipeline });

    let ip: IpAddr = config.listen_addr.parse()?;
    let addr = SocketAddr::new(ip, config.port);
    tracing::info!("ATIS service listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn home() -> Html<&'static str> {
    Html("<h1>EGCB ATIS retriever</h1><p>Use /atis/text to retrieve textual atis</p>")
}

/// Every handled outcome is a 200 with an explanatory body, preserving
/// the behavior consumers of the original service expect.
async fn atis_text<S: AtisSource>(State(state): State<Arc<AppState<S>>>) -> Html<String> {
    match state.pipeline.run().await {
        Ok(snapshot) => Html(present::render_atis(&snapshot)),
        Err(AtisError::UpstreamUnavailable { status }) => {
            tracing::warn!("Upstream returned HTTP {}, no ATIS data", status);
            Html("No data available.".to_string())
        }
        Err(e) => {
            tracing::error!("ATIS request failed: {}", e);
            Html(format!("Error: {}.", e))
        }
    }
}
