//! Association resolver: the technology <-> project linking state machine.
//!
//! A link request moves through `Unknown` -> `KnownNotLinked` -> `Linked`.
//! The technology row is reference data, created on first use; when both the
//! technology and the link must be created, a single CTE statement inserts
//! them together so a partial failure cannot leave an orphaned technology.

use crate::config::UnlinkPolicy;
use crate::error::AppError;
use crate::model::PROJECTS_TECHNOLOGIES;
use crate::service::checks;
use crate::sql;
use crate::store::Store;
use serde_json::{json, Value};

enum LinkState {
    /// No technology row with this name yet.
    Unknown,
    /// Technology row exists but is not linked to this project.
    KnownNotLinked(i64),
    /// The (project, technology) pair already exists.
    Linked,
}

const ENRICHED_LINK_SQL: &str = r#"
    SELECT
        tec."id" AS "technologyId",
        tec."name" AS "technologyName",
        pro."id" AS "projectId",
        pro."name" AS "projectName",
        pro."description" AS "projectDescription",
        pro."estimatedTime" AS "projectEstimatedTime",
        pro."repository" AS "projectRepository",
        pro."startDate" AS "projectStartDate",
        pro."endDate" AS "projectEndDate"
    FROM technologies tec
    JOIN projects_technologies pt ON pt."technologyId" = tec."id"
    JOIN projects pro ON pro."id" = pt."projectId"
    WHERE tec."name" = $1 AND pro."id" = $2
"#;

const INSERT_BOTH_SQL: &str = r#"
    WITH inserted_tec AS (
        INSERT INTO technologies ("name") VALUES ($1) RETURNING *
    )
    INSERT INTO projects_technologies ("addedIn", "technologyId", "projectId")
    VALUES ($2::timestamptz, (SELECT "id" FROM inserted_tec), $3)
    RETURNING *
"#;

pub struct LinkService;

impl LinkService {
    async fn state(
        store: &dyn Store,
        project_id: i64,
        name: &str,
    ) -> Result<LinkState, AppError> {
        let row = store
            .fetch_optional(
                r#"
                SELECT
                    tec."id" AS "technologyId",
                    pt."projectId" AS "linkedProjectId"
                FROM technologies tec
                LEFT JOIN projects_technologies pt
                    ON pt."technologyId" = tec."id" AND pt."projectId" = $2
                WHERE tec."name" = $1
                "#,
                &[json!(name), json!(project_id)],
            )
            .await?;
        Ok(match row {
            None => LinkState::Unknown,
            Some(row) => {
                if row.get("linkedProjectId").is_some_and(|v| !v.is_null()) {
                    LinkState::Linked
                } else {
                    let technology_id = row
                        .get("technologyId")
                        .and_then(Value::as_i64)
                        .ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
                    LinkState::KnownNotLinked(technology_id)
                }
            }
        })
    }

    /// Link a supported technology to a project. Terminal state is `Linked`
    /// or an early failure; a duplicate pair is a conflict.
    pub async fn link(store: &dyn Store, project_id: i64, name: &str) -> Result<Value, AppError> {
        match Self::state(store, project_id, name).await? {
            LinkState::Linked => {
                return Err(AppError::Conflict(
                    "Technology already linked to this project.".into(),
                ));
            }
            LinkState::KnownNotLinked(technology_id) => {
                checks::association_must_not_exist(store, project_id, technology_id).await?;
                let added_in = chrono::Utc::now().to_rfc3339();
                let q = sql::insert(
                    &PROJECTS_TECHNOLOGIES,
                    &[
                        ("addedIn", json!(added_in)),
                        ("technologyId", json!(technology_id)),
                        ("projectId", json!(project_id)),
                    ],
                )?;
                store
                    .fetch_optional(&q.sql, &q.params)
                    .await?
                    .ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
            }
            LinkState::Unknown => {
                let added_in = chrono::Utc::now().to_rfc3339();
                store
                    .fetch_optional(
                        INSERT_BOTH_SQL,
                        &[json!(name), json!(added_in), json!(project_id)],
                    )
                    .await?
                    .ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
            }
        }
        store
            .fetch_optional(ENRICHED_LINK_SQL, &[json!(name), json!(project_id)])
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }

    /// Remove a technology from a project. Unconditional: succeeds whether or
    /// not the pair was linked.
    pub async fn unlink(
        store: &dyn Store,
        policy: UnlinkPolicy,
        project_id: i64,
        name: &str,
    ) -> Result<(), AppError> {
        match policy {
            UnlinkPolicy::AssociationOnly => {
                store
                    .execute(
                        r#"
                        DELETE FROM projects_technologies
                        WHERE "projectId" = $1
                          AND "technologyId" =
                              (SELECT "id" FROM technologies WHERE "name" = $2)
                        "#,
                        &[json!(project_id), json!(name)],
                    )
                    .await?;
            }
            UnlinkPolicy::DropTechnology => {
                store
                    .execute(
                        r#"
                        DELETE FROM technologies
                        USING projects_technologies
                        WHERE "projectId" = $1
                          AND technologies."id" = projects_technologies."technologyId"
                          AND technologies."name" = $2
                        "#,
                        &[json!(project_id), json!(name)],
                    )
                    .await?;
            }
        }
        Ok(())
    }
}
