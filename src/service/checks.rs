//! Pre-mutation integrity checkers.
//!
//! Each checker performs one lookup (or a pure membership test) and either
//! halts with a typed error or returns. Lookups that succeed hand the row back
//! so callers don't have to repeat the query. No checker mutates.

use crate::error::AppError;
use crate::model::{OS_OPTIONS, SUPPORTED_TECHNOLOGIES};
use crate::store::Store;
use serde_json::{json, Value};

/// Referenced developer must exist. The id comes from the path, or from the
/// body's `developerId` when the developer is the parent of the entity being
/// created; either way the caller names the source explicitly.
pub async fn developer_must_exist(store: &dyn Store, id: i64) -> Result<Value, AppError> {
    let row = store
        .fetch_optional(r#"SELECT * FROM developers WHERE "id" = $1"#, &[json!(id)])
        .await?;
    row.ok_or_else(|| AppError::NotFound("Developer not found.".into()))
}

/// One-to-one invariant: the developer must not already have an info row.
pub async fn developer_info_must_not_exist(
    store: &dyn Store,
    developer_id: i64,
) -> Result<(), AppError> {
    let row = store
        .fetch_optional(
            r#"SELECT * FROM developer_infos WHERE "developerId" = $1"#,
            &[json!(developer_id)],
        )
        .await?;
    match row {
        Some(_) => Err(AppError::Conflict("Developer info already exists.".into())),
        None => Ok(()),
    }
}

/// No other developer may hold this email. On update, the row being updated
/// is excluded so an unchanged email is not a conflict.
pub async fn email_must_be_unique(
    store: &dyn Store,
    email: &str,
    exclude_id: Option<i64>,
) -> Result<(), AppError> {
    let row = match exclude_id {
        Some(id) => {
            store
                .fetch_optional(
                    r#"SELECT * FROM developers WHERE "email" = $1 AND "id" <> $2"#,
                    &[json!(email), json!(id)],
                )
                .await?
        }
        None => {
            store
                .fetch_optional(
                    r#"SELECT * FROM developers WHERE "email" = $1"#,
                    &[json!(email)],
                )
                .await?
        }
    };
    match row {
        Some(_) => Err(AppError::Conflict("Email already exists".into())),
        None => Ok(()),
    }
}

pub fn preferred_os_must_be_valid(value: &str) -> Result<(), AppError> {
    if OS_OPTIONS.contains(&value) {
        return Ok(());
    }
    Err(AppError::Validation {
        message: "Invalid OS option.".into(),
        options: OS_OPTIONS,
    })
}

pub async fn project_must_exist(store: &dyn Store, id: i64) -> Result<Value, AppError> {
    let row = store
        .fetch_optional(r#"SELECT * FROM projects WHERE "id" = $1"#, &[json!(id)])
        .await?;
    row.ok_or_else(|| AppError::NotFound("Project not found.".into()))
}

pub fn technology_must_be_supported(name: &str) -> Result<(), AppError> {
    if SUPPORTED_TECHNOLOGIES.contains(&name) {
        return Ok(());
    }
    Err(AppError::Validation {
        message: "Technology not supported.".into(),
        options: SUPPORTED_TECHNOLOGIES,
    })
}

/// Duplicate-relationship guard, run immediately before inserting a link.
pub async fn association_must_not_exist(
    store: &dyn Store,
    project_id: i64,
    technology_id: i64,
) -> Result<(), AppError> {
    let row = store
        .fetch_optional(
            r#"SELECT * FROM projects_technologies WHERE "projectId" = $1 AND "technologyId" = $2"#,
            &[json!(project_id), json!(technology_id)],
        )
        .await?;
    match row {
        Some(_) => Err(AppError::Conflict(
            "Technology already linked to this project.".into(),
        )),
        None => Ok(()),
    }
}
