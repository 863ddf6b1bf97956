//! Idempotent schema bootstrap. Run once at startup.
//!
//! The UNIQUE constraints on email, (developerId) and (projectId,
//! technologyId) back up the pre-mutation checkers: a check-then-insert
//! sequence is two statements, so a concurrent duplicate surfaces here as a
//! constraint violation instead of a second row.

use crate::error::AppError;
use sqlx::PgPool;

const TABLE_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS developers (
        "id" SERIAL PRIMARY KEY,
        "name" VARCHAR(50) NOT NULL,
        "email" VARCHAR(50) NOT NULL UNIQUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS developer_infos (
        "id" SERIAL PRIMARY KEY,
        "developerSince" DATE NOT NULL,
        "preferredOS" VARCHAR(10) NOT NULL
            CHECK ("preferredOS" IN ('Windows', 'Linux', 'MacOS')),
        "developerId" INTEGER NOT NULL UNIQUE
            REFERENCES developers ("id") ON DELETE CASCADE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS projects (
        "id" SERIAL PRIMARY KEY,
        "name" VARCHAR(50) NOT NULL,
        "description" TEXT NOT NULL,
        "estimatedTime" VARCHAR(20) NOT NULL,
        "repository" VARCHAR(120) NOT NULL,
        "startDate" DATE NOT NULL,
        "endDate" DATE,
        "developerId" INTEGER NOT NULL
            REFERENCES developers ("id") ON DELETE CASCADE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS technologies (
        "id" SERIAL PRIMARY KEY,
        "name" VARCHAR(30) NOT NULL UNIQUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS projects_technologies (
        "id" SERIAL PRIMARY KEY,
        "addedIn" TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        "technologyId" INTEGER NOT NULL
            REFERENCES technologies ("id") ON DELETE CASCADE,
        "projectId" INTEGER NOT NULL
            REFERENCES projects ("id") ON DELETE CASCADE,
        UNIQUE ("projectId", "technologyId")
    )
    "#,
];

pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    for ddl in TABLE_DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
