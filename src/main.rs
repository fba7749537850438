use std::sync::Arc;

use anyhow::Context;
use fieldcraft_app::modules;
use fieldcraft_kernel::settings::Settings;
use fieldcraft_kernel::{InitCtx, ModuleRegistry};
use fieldcraft_store::{RestStore, StoreHandle};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::try_init().ok();

    let settings = Settings::load().with_context(|| "failed to load fieldcraft settings")?;

    tracing::info!(
        env = ?settings.environment,
        store = %settings.store.url,
        "fieldcraft bootstrap starting"
    );

    // One credential-bearing store handle, shared read-only across all
    // request handlers.
    let store: StoreHandle = Arc::new(
        RestStore::new(
            settings.store.url.as_str(),
            settings.store.service_role_key.as_str(),
        )
        .context("failed to construct store client")?,
    );

    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry);

    let ctx = InitCtx {
        settings: &settings,
        store: &store,
    };

    registry.init_all(&ctx).await?;
    registry.start_all(&ctx).await?;

    fieldcraft_http::start_server(&registry, &ctx).await?;

    registry.stop_all().await?;

    tracing::info!("fieldcraft shut down");
    Ok(())
}
