//! Router wiring. Checker sequences live in the handlers; this file only maps
//! verbs and paths.

use crate::handlers::{developers, projects};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/developers", post(developers::create).get(developers::list))
        .route(
            "/developers/:id",
            get(developers::read)
                .patch(developers::update)
                .delete(developers::delete),
        )
        .route(
            "/developers/:id/infos",
            post(developers::create_info).patch(developers::update_info),
        )
        .route("/projects", post(projects::create).get(projects::list))
        .route(
            "/projects/:id",
            get(projects::read)
                .patch(projects::update)
                .delete(projects::delete),
        )
        .route("/projects/:id/technologies", post(projects::link_technology))
        .route(
            "/projects/:id/technologies/:name",
            delete(projects::unlink_technology),
        )
        .with_state(state)
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /health, GET /version. No state.
pub fn common_routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
}
