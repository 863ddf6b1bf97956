//! Developer endpoints. Each handler names its checker sequence explicitly;
//! ids come from the path and are never writable through the body.

use crate::error::AppError;
use crate::model::{DeveloperInfoPatch, DeveloperPatch, NewDeveloper, NewDeveloperInfo};
use crate::service::{checks, DeveloperService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewDeveloper>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let store = state.store.as_ref();
    checks::email_must_be_unique(store, &body.email, None).await?;
    let row = DeveloperService::create(store, &body).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let rows = DeveloperService::list(state.store.as_ref()).await?;
    Ok(Json(rows))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let store = state.store.as_ref();
    checks::developer_must_exist(store, id).await?;
    let row = DeveloperService::read(store, id).await?;
    Ok(Json(row))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<DeveloperPatch>,
) -> Result<Json<Value>, AppError> {
    let store = state.store.as_ref();
    checks::developer_must_exist(store, id).await?;
    if let Some(email) = &patch.email {
        checks::email_must_be_unique(store, email, Some(id)).await?;
    }
    let row = DeveloperService::update(store, id, &patch).await?;
    Ok(Json(row))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let store = state.store.as_ref();
    checks::developer_must_exist(store, id).await?;
    DeveloperService::delete(store, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn create_info(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<NewDeveloperInfo>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let store = state.store.as_ref();
    checks::developer_must_exist(store, id).await?;
    checks::developer_info_must_not_exist(store, id).await?;
    checks::preferred_os_must_be_valid(&body.preferred_os)?;
    let row = DeveloperService::create_info(store, id, &body).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

pub async fn update_info(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<DeveloperInfoPatch>,
) -> Result<Json<Value>, AppError> {
    let store = state.store.as_ref();
    checks::developer_must_exist(store, id).await?;
    if let Some(os) = &patch.preferred_os {
        checks::preferred_os_must_be_valid(os)?;
    }
    let row = DeveloperService::update_info(store, id, &patch).await?;
    Ok(Json(row))
}
