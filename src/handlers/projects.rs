//! Project and technology-link endpoints.

use crate::error::AppError;
use crate::model::{LinkTechnology, NewProject, ProjectPatch};
use crate::service::{checks, LinkService, ProjectService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

/// The parent developer is addressed by the body's `developerId`: the project
/// does not exist yet, so there is no path to carry it.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewProject>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let store = state.store.as_ref();
    checks::developer_must_exist(store, body.developer_id).await?;
    let row = ProjectService::create(store, &body).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let rows = ProjectService::list(state.store.as_ref()).await?;
    Ok(Json(rows))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Value>>, AppError> {
    let store = state.store.as_ref();
    checks::project_must_exist(store, id).await?;
    let rows = ProjectService::read_with_technologies(store, id).await?;
    Ok(Json(rows))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<ProjectPatch>,
) -> Result<Json<Value>, AppError> {
    let store = state.store.as_ref();
    checks::project_must_exist(store, id).await?;
    if let Some(developer_id) = patch.developer_id {
        checks::developer_must_exist(store, developer_id).await?;
    }
    let row = ProjectService::update(store, id, &patch).await?;
    Ok(Json(row))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let store = state.store.as_ref();
    checks::project_must_exist(store, id).await?;
    ProjectService::delete(store, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn link_technology(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<LinkTechnology>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let store = state.store.as_ref();
    checks::project_must_exist(store, id).await?;
    checks::technology_must_be_supported(&body.name)?;
    let row = LinkService::link(store, id, &body.name).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

pub async fn unlink_technology(
    State(state): State<AppState>,
    Path((id, name)): Path<(i64, String)>,
) -> Result<StatusCode, AppError> {
    let store = state.store.as_ref();
    checks::project_must_exist(store, id).await?;
    checks::technology_must_be_supported(&name)?;
    LinkService::unlink(store, state.unlink_policy, id, &name).await?;
    Ok(StatusCode::NO_CONTENT)
}
