//! Project mutators and the technology-spanning read.

use crate::error::AppError;
use crate::model::{NewProject, ProjectPatch, PROJECTS};
use crate::sql;
use crate::store::Store;
use serde_json::{json, Value};

pub struct ProjectService;

impl ProjectService {
    pub async fn create(store: &dyn Store, body: &NewProject) -> Result<Value, AppError> {
        let q = sql::insert(&PROJECTS, &body.attributes())?;
        store
            .fetch_optional(&q.sql, &q.params)
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }

    pub async fn list(store: &dyn Store) -> Result<Vec<Value>, AppError> {
        let sql = r#"
            SELECT
                pro."id" AS "projectId",
                pro."name" AS "projectName",
                pro."description" AS "projectDescription",
                pro."estimatedTime" AS "projectEstimatedTime",
                pro."repository" AS "projectRepository",
                pro."startDate" AS "projectStartDate",
                pro."endDate" AS "projectEndDate",
                pro."developerId" AS "projectDeveloperId",
                tec."id" AS "technologyId",
                tec."name" AS "technologyName"
            FROM projects pro
            LEFT JOIN projects_technologies pt ON pt."projectId" = pro."id"
            LEFT JOIN technologies tec ON tec."id" = pt."technologyId"
            ORDER BY pro."id", tec."id"
        "#;
        store.fetch_all(sql, &[]).await
    }

    /// One row per linked technology; a project without technologies yields a
    /// single row whose technology columns are null.
    pub async fn read_with_technologies(
        store: &dyn Store,
        id: i64,
    ) -> Result<Vec<Value>, AppError> {
        let sql = r#"
            SELECT
                pro."id" AS "projectId",
                pro."name" AS "projectName",
                pro."description" AS "projectDescription",
                pro."estimatedTime" AS "projectEstimatedTime",
                pro."repository" AS "projectRepository",
                pro."startDate" AS "projectStartDate",
                pro."endDate" AS "projectEndDate",
                pro."developerId" AS "projectDeveloperId",
                tec."id" AS "technologyId",
                tec."name" AS "technologyName"
            FROM projects pro
            LEFT JOIN projects_technologies pt ON pt."projectId" = pro."id"
            LEFT JOIN technologies tec ON tec."id" = pt."technologyId"
            WHERE pro."id" = $1
            ORDER BY tec."id"
        "#;
        store.fetch_all(sql, &[json!(id)]).await
    }

    pub async fn update(
        store: &dyn Store,
        id: i64,
        patch: &ProjectPatch,
    ) -> Result<Value, AppError> {
        let q = sql::update(&PROJECTS, "id", json!(id), &patch.attributes())?;
        store
            .fetch_optional(&q.sql, &q.params)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found.".into()))
    }

    pub async fn delete(store: &dyn Store, id: i64) -> Result<(), AppError> {
        store
            .execute(r#"DELETE FROM projects WHERE "id" = $1"#, &[json!(id)])
            .await?;
        Ok(())
    }
}
