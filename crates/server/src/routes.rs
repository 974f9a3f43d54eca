use axum::middleware;
use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

pub mod addresses;
pub mod auth;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: public queries, the open delete
/// mutation, and the token-gated create/update mutations.
pub fn build_router(cors: CorsLayer, state: auth::ServerState) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/address/getAddresses", get(addresses::list))
        .route("/address/getAddressById", get(addresses::get_by_id))
        .route("/address/deleteAddress", post(addresses::delete));

    // Mutations behind the auth gate
    let protected = Router::new()
        .route("/address/createAddress", post(addresses::create))
        .route("/address/updateAddress", post(addresses::update))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_bearer_token,
        ));

    public
        .merge(protected)
        .merge(SwaggerUi::new("/docs").url(
            "/api-docs/openapi.json",
            crate::openapi::ApiDoc::openapi(),
        ))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
