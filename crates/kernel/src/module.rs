use async_trait::async_trait;
use axum::Router;
use fieldcraft_store::StoreHandle;

/// Context provided to modules during initialization and route construction.
pub struct InitCtx<'a> {
    pub settings: &'a crate::settings::Settings,
    pub store: &'a StoreHandle,
}

/// Core trait all fieldcraft modules implement.
#[async_trait]
pub trait Module: Send + Sync {
    /// Unique name for this module
    fn name(&self) -> &'static str;

    /// Initialize the module with the provided context.
    /// Called during application startup before the server binds.
    async fn init(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Return the Axum router for this module's routes.
    /// Module routers are merged at the root path; the public surface is
    /// root-anchored, so there is no per-module prefix.
    fn routes(&self, _ctx: &InitCtx<'_>) -> Router {
        Router::new()
    }

    /// Return OpenAPI specification fragment for this module as JSON.
    /// Will be merged with other modules' specs.
    fn openapi(&self) -> Option<serde_json::Value> {
        None
    }

    /// Start background tasks for this module.
    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Stop the module and clean up resources.
    /// Called during application shutdown.
    async fn stop(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
