//! MCP server initialization for stdio and Streamable HTTP transports.
//!
//! Provides [`serve_stdio`] and [`serve_http`] entry points that load the
//! catalog once and wire it into the MCP tool handler.

use crate::catalog::Catalog;
use crate::config::NaengmyeonConfig;
use crate::tools::NaengmyeonTools;
use anyhow::{Context, Result};
use axum::routing::get;
use axum::Json;
use rmcp::ServiceExt;
use std::sync::Arc;

const SERVICE_NAME: &str = "naengmyeon-mcp";

/// Load the catalog from the configured data directory. Any decode or
/// validation failure stops startup.
pub fn load_catalog(config: &NaengmyeonConfig) -> Result<Arc<Catalog>> {
    let data_dir = config.resolved_data_dir();
    let catalog = Catalog::load(&data_dir)
        .with_context(|| format!("failed to load catalog from {}", data_dir.display()))?;
    Ok(Arc::new(catalog))
}

/// Start the MCP server over stdio transport.
pub async fn serve_stdio(config: NaengmyeonConfig) -> Result<()> {
    tracing::info!("starting naengmyeon MCP server on stdio");

    let catalog = load_catalog(&config)?;

    let tools = NaengmyeonTools::new(catalog);
    let transport = rmcp::transport::stdio();

    let server = tools.serve(transport).await?;
    tracing::info!("MCP server running — waiting for client");

    server.waiting().await?;
    tracing::info!("MCP server shut down");

    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "endpoints": {
            "streamable_http": "/mcp",
            "health": "/health"
        }
    }))
}

/// Build the HTTP router: Streamable HTTP MCP under `/mcp`, health on `/`
/// and `/health`. Sessions are tracked by rmcp's local session manager.
pub fn http_router(catalog: Arc<Catalog>) -> axum::Router {
    let service = rmcp::transport::streamable_http_server::StreamableHttpService::new(
        move || Ok(NaengmyeonTools::new(catalog.clone())),
        rmcp::transport::streamable_http_server::session::local::LocalSessionManager::default()
            .into(),
        Default::default(),
    );

    axum::Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .nest_service("/mcp", service)
}

/// Start the MCP server over Streamable HTTP transport.
pub async fn serve_http(config: NaengmyeonConfig) -> Result<()> {
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);

    tracing::info!(addr = %bind_addr, "starting naengmyeon MCP server on HTTP");

    let catalog = load_catalog(&config)?;
    let router = http_router(catalog);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "MCP server listening at http://{bind_addr}/mcp");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("shutting down HTTP server");
        })
        .await?;

    Ok(())
}
