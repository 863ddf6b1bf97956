//! Developer and DeveloperInfo mutators and reads.
//!
//! Mutations go through the statement builder; reads spanning the info
//! relation use one left join and keep the row when no info exists.

use crate::error::AppError;
use crate::model::{
    DeveloperInfoPatch, DeveloperPatch, NewDeveloper, NewDeveloperInfo, DEVELOPERS,
    DEVELOPER_INFOS,
};
use crate::sql;
use crate::store::Store;
use serde_json::{json, Value};

const READ_COLUMNS: &str = r#"
    dev."id" AS "developerId",
    dev."name" AS "developerName",
    dev."email" AS "developerEmail",
    di."developerSince" AS "developerInfoDeveloperSince",
    di."preferredOS" AS "developerInfoPreferredOS"
"#;

pub struct DeveloperService;

impl DeveloperService {
    pub async fn create(store: &dyn Store, body: &NewDeveloper) -> Result<Value, AppError> {
        let q = sql::insert(&DEVELOPERS, &body.attributes())?;
        store
            .fetch_optional(&q.sql, &q.params)
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }

    pub async fn list(store: &dyn Store) -> Result<Vec<Value>, AppError> {
        let sql = format!(
            r#"SELECT {} FROM developers dev
               LEFT JOIN developer_infos di ON di."developerId" = dev."id"
               ORDER BY dev."id""#,
            READ_COLUMNS
        );
        store.fetch_all(&sql, &[]).await
    }

    pub async fn read(store: &dyn Store, id: i64) -> Result<Value, AppError> {
        let sql = format!(
            r#"SELECT {} FROM developers dev
               LEFT JOIN developer_infos di ON di."developerId" = dev."id"
               WHERE dev."id" = $1"#,
            READ_COLUMNS
        );
        store
            .fetch_optional(&sql, &[json!(id)])
            .await?
            .ok_or_else(|| AppError::NotFound("Developer not found.".into()))
    }

    pub async fn update(
        store: &dyn Store,
        id: i64,
        patch: &DeveloperPatch,
    ) -> Result<Value, AppError> {
        let q = sql::update(&DEVELOPERS, "id", json!(id), &patch.attributes())?;
        store
            .fetch_optional(&q.sql, &q.params)
            .await?
            .ok_or_else(|| AppError::NotFound("Developer not found.".into()))
    }

    pub async fn delete(store: &dyn Store, id: i64) -> Result<(), AppError> {
        store
            .execute(r#"DELETE FROM developers WHERE "id" = $1"#, &[json!(id)])
            .await?;
        Ok(())
    }

    /// The owning developer id comes from the route; it is appended here, not
    /// taken from the body.
    pub async fn create_info(
        store: &dyn Store,
        developer_id: i64,
        body: &NewDeveloperInfo,
    ) -> Result<Value, AppError> {
        let mut attrs = body.attributes();
        attrs.push(("developerId", json!(developer_id)));
        let q = sql::insert(&DEVELOPER_INFOS, &attrs)?;
        store
            .fetch_optional(&q.sql, &q.params)
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }

    /// Keyed by `developerId`: the info row has its own id, but the route
    /// addresses it through its owner.
    pub async fn update_info(
        store: &dyn Store,
        developer_id: i64,
        patch: &DeveloperInfoPatch,
    ) -> Result<Value, AppError> {
        let q = sql::update(
            &DEVELOPER_INFOS,
            "developerId",
            json!(developer_id),
            &patch.attributes(),
        )?;
        store
            .fetch_optional(&q.sql, &q.params)
            .await?
            .ok_or_else(|| AppError::NotFound("Developer info not found.".into()))
    }
}
