use std::time::Duration;

use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::timeout::TimeoutLayer;

use crate::{
    handlers::{company_handlers, health_handlers},
    middleware::{logging, require_auth},
    AppState,
};

/// Build the application router.
///
/// Health endpoints and company reads are public; every mutating company
/// route sits behind the bearer token middleware.
pub fn create_router(app_state: AppState) -> Router {
    let require_auth_layer =
        axum::middleware::from_fn_with_state(app_state.clone(), require_auth);

    let health_routes = Router::new()
        .route("/health", get(health_handlers::health_check))
        .route("/health/live", get(health_handlers::liveness_check));

    // The :id route mixes a public GET with protected PATCH/DELETE, so the
    // auth layer is attached per method rather than per path.
    let company_routes = Router::new()
        .route(
            "/v1/company",
            post(company_handlers::create_company).route_layer(require_auth_layer.clone()),
        )
        .route(
            "/v1/company/:id",
            get(company_handlers::get_company).merge(
                patch(company_handlers::update_company)
                    .delete(company_handlers::delete_company)
                    .route_layer(require_auth_layer),
            ),
        );

    let request_timeout = Duration::from_secs(app_state.settings.http_server_timeout_seconds);

    Router::new()
        .merge(health_routes)
        .merge(company_routes)
        .with_state(app_state)
        .layer(axum::middleware::from_fn(logging::request_logging_middleware))
        .layer(logging::create_logging_layer())
        .layer(TimeoutLayer::new(request_timeout))
}
