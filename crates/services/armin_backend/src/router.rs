use armin_common::handlers::root_handler;
use armin_config::CorsConfig;
use armin_contact::ContactState;
use axum::{routing::get, Router};
use http::HeaderValue;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::app_state::AppState;

/// Build the full application router.
///
/// Everything is served under `/api`; with the `openapi` feature Swagger UI
/// is mounted at `/api/docs`.
pub fn build_router(state: &AppState) -> Router {
    let contact_state = Arc::new(ContactState::from_services(
        state.service_factory.as_ref(),
        &state.config,
    ));

    let api_router = armin_common::routes()
        .merge(armin_catalog::routes::<()>())
        .merge(armin_contact::routes(contact_state));

    #[allow(unused_mut)] // mutated only with the openapi feature
    let mut app = Router::new()
        .route("/api/", get(root_handler))
        .nest("/api", api_router);

    #[cfg(feature = "openapi")]
    {
        app = app.merge(swagger_ui());
    }

    app.layer(cors_layer(&state.config.cors))
        .layer(TraceLayer::new_for_http())
}

/// CORS policy from configuration.
///
/// A wildcard allows any origin without credentials. An explicit list allows
/// credentials and mirrors the requested method and headers.
pub fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    if cors.allows_any_origin() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.trim().parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {:?}", origin);
                None
            }
        })
        .collect();
    info!("CORS restricted to {} origin(s)", origins.len());

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

#[cfg(feature = "openapi")]
fn swagger_ui() -> utoipa_swagger_ui::SwaggerUi {
    use armin_catalog::openapi::CatalogApiDoc;
    use armin_contact::openapi::ContactApiDoc;
    use utoipa::OpenApi;
    use utoipa_swagger_ui::SwaggerUi;

    #[derive(OpenApi)]
    #[openapi(
        info(
            title = "Armin Shopfitting API",
            version = "0.1.0",
            description = "Portfolio, testimonials and contact intake for the Armin Shopfitting website"
        ),
        paths(armin_common::handlers::root_handler),
        components(schemas(armin_common::models::RootMessage)),
        tags((name = "Armin", description = "Core service endpoints")),
        servers((url = "/api", description = "Main API Prefix")),
    )]
    struct ApiDoc;

    let mut openapi_doc = ApiDoc::openapi();
    openapi_doc.merge(CatalogApiDoc::openapi());
    openapi_doc.merge(ContactApiDoc::openapi());
    info!("📖 Adding Swagger UI at /api/docs");

    SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc)
}
