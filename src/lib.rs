pub mod config;
pub mod domain;
pub mod global;
pub mod shutdown;
pub mod state;
pub mod utils;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        domain::term::handler::generate_term,
        domain::health::handler::health_check,
    ),
    components(
        schemas(
            domain::term::dto::TermRequest,
            domain::term::dto::TermResponse,
            domain::health::dto::HealthStatus,
            domain::health::dto::HealthState,
            domain::health::dto::HealthChecks,
            domain::health::dto::CheckResult,
            utils::response::ErrorResponse,
        )
    ),
    tags(
        (name = "Term", description = "Term of the day API"),
        (name = "Health", description = "Health check API")
    )
)]
pub struct ApiDoc;

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(domain::health::health_check))
        .route("/v1/generate-term", post(domain::term::generate_term))
        .layer(middleware::from_fn(global::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
