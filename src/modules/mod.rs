pub mod suggestions;
pub mod videos;

use fieldcraft_kernel::ModuleRegistry;

/// Register all application modules with the registry
pub fn register_all(registry: &mut ModuleRegistry) {
    registry.register(videos::create_module());
    registry.register(suggestions::create_module());
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use fieldcraft_kernel::settings::Settings;
    use fieldcraft_kernel::InitCtx;
    use fieldcraft_store::{MemoryStore, StoreHandle};
    use std::sync::Arc;
    use tower::ServiceExt;

    #[test]
    fn both_modules_register() {
        let mut registry = ModuleRegistry::new();
        register_all(&mut registry);

        assert!(registry.get_module("videos").is_some());
        assert!(registry.get_module("suggestions").is_some());
    }

    #[tokio::test]
    async fn full_router_serves_the_catalog_at_the_root() {
        let mut registry = ModuleRegistry::new();
        register_all(&mut registry);

        let settings = Settings::default();
        let store: StoreHandle = Arc::new(MemoryStore::new());
        let ctx = InitCtx {
            settings: &settings,
            store: &store,
        };
        let router = fieldcraft_http::build_router(&registry, &ctx).unwrap();

        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS],
            "POST, GET, OPTIONS, PUT, DELETE"
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"videos": []}));
    }

    #[tokio::test]
    async fn suggestion_routes_reach_their_module_through_the_full_router() {
        let mut registry = ModuleRegistry::new();
        register_all(&mut registry);

        let settings = Settings::default();
        let memory = Arc::new(MemoryStore::new());
        memory.seed(
            "improvement_suggestions",
            vec![serde_json::json!({"id": 42, "status": "pending"})],
        );
        let store: StoreHandle = memory.clone();
        let ctx = InitCtx {
            settings: &settings,
            store: &store,
        };
        let router = fieldcraft_http::build_router(&registry, &ctx).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/approve/42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            memory.rows("improvement_suggestions")[0]["status"],
            "approved"
        );
    }
}
