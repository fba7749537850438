//! HTTP server facade for fieldcraft with Axum, error handling, and OpenAPI support.

use anyhow::Context;
use axum::{routing::get, Router};

use fieldcraft_kernel::{InitCtx, ModuleRegistry};

pub mod error;
pub mod response;
pub mod router;

use router::RouterBuilder;

/// Start the HTTP server with the given module registry
pub async fn start_server(registry: &ModuleRegistry, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
    let server = &ctx.settings.server;

    tracing::info!("starting HTTP server on {}:{}", server.host, server.port);

    let app = build_router(registry, ctx).context("failed to build HTTP router")?;

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", server.host, server.port))
        .await
        .context("failed to bind to address")?;

    tracing::info!(
        "HTTP server listening on http://{}:{}",
        server.host,
        server.port
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    Ok(())
}

/// Build the main HTTP router with all module routes merged at the root.
///
/// Routes are collected before the middleware layers so that tracing,
/// CORS headers, request ids, and timeouts apply to every module route.
pub fn build_router(registry: &ModuleRegistry, ctx: &InitCtx<'_>) -> anyhow::Result<Router> {
    let mut router_builder = RouterBuilder::new();

    router_builder = router_builder.route("/healthz", get(health_check));

    for module in registry.modules() {
        tracing::info!(module = module.name(), "merging module routes at /");
        router_builder = router_builder.merge_module(module.routes(ctx));
    }

    router_builder = router_builder.with_openapi(registry);

    // Global middlewares wrap everything merged above.
    router_builder = router_builder
        .with_timeout(ctx.settings.server.request_timeout_ms)
        .with_request_id()
        .with_cors()
        .with_tracing();

    Ok(router_builder.build())
}

/// Resolves when the process receives ctrl-c; in-flight requests drain
/// before the server exits.
async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to install ctrl-c handler");
    }
    tracing::info!("shutdown signal received");
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "ok"
}
