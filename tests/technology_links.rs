mod common;

use axum::http::StatusCode;
use common::{app, app_with_policy, request, FakeStore};
use devhub::UnlinkPolicy;
use serde_json::{json, Value};

fn project_row() -> Value {
    json!({"id": 1, "name": "Portfolio", "developerId": 1})
}

fn enriched_link() -> Value {
    json!({
        "technologyId": 3,
        "technologyName": "React",
        "projectId": 1,
        "projectName": "Portfolio",
        "projectDescription": "Personal site",
        "projectEstimatedTime": "2 weeks",
        "projectRepository": "https://github.com/ana/portfolio",
        "projectStartDate": "2023-10-02",
        "projectEndDate": null
    })
}

#[tokio::test]
async fn unsupported_technology_reports_the_vocabulary() {
    let store = FakeStore::scripted(vec![vec![project_row()]]);
    let (status, body) = request(
        app(store.clone()),
        "POST",
        "/projects/1/technologies",
        Some(json!({"name": "Unsupported"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Technology not supported.");
    assert_eq!(
        body["options"],
        json!([
            "JavaScript",
            "Python",
            "React",
            "Express.js",
            "HTML",
            "CSS",
            "Django",
            "PostgreSQL",
            "MongoDB"
        ])
    );
    // vocabulary is static: only the project lookup hit the store
    assert_eq!(store.statement_count(), 1);
}

#[tokio::test]
async fn linking_an_unknown_technology_creates_both_rows_in_one_statement() {
    let link_row = json!({"id": 9, "addedIn": "2023-10-02T00:00:00Z", "technologyId": 3, "projectId": 1});
    let store = FakeStore::scripted(vec![
        vec![project_row()], // project exists
        vec![],              // state lookup: technology unknown
        vec![link_row],      // CTE insert
        vec![enriched_link()],
    ]);
    let (status, body) = request(
        app(store.clone()),
        "POST",
        "/projects/1/technologies",
        Some(json!({"name": "React"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, enriched_link());
    let sql = store.recorded_sql();
    assert!(sql[2].contains("WITH inserted_tec"), "sql: {}", sql[2]);
    assert!(sql[2].contains("INSERT INTO projects_technologies"), "sql: {}", sql[2]);
}

#[tokio::test]
async fn linking_a_known_technology_inserts_only_the_association() {
    let state_row = json!({"technologyId": 3, "linkedProjectId": null});
    let link_row = json!({"id": 9, "addedIn": "2023-10-02T00:00:00Z", "technologyId": 3, "projectId": 1});
    let store = FakeStore::scripted(vec![
        vec![project_row()],
        vec![state_row], // known, not linked
        vec![],          // association guard
        vec![link_row],
        vec![enriched_link()],
    ]);
    let (status, body) = request(
        app(store.clone()),
        "POST",
        "/projects/1/technologies",
        Some(json!({"name": "React"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["technologyName"], "React");
    let sql = store.recorded_sql();
    assert_eq!(
        sql[3],
        "INSERT INTO \"projects_technologies\" (\"addedIn\", \"technologyId\", \"projectId\") \
         VALUES ($1::timestamptz, $2, $3) RETURNING *"
    );
    assert!(
        !sql.iter().any(|s| s.contains("INSERT INTO technologies")),
        "existing technology must not be re-inserted"
    );
}

#[tokio::test]
async fn linking_twice_conflicts_without_a_duplicate_row() {
    let state_row = json!({"technologyId": 3, "linkedProjectId": 1});
    let store = FakeStore::scripted(vec![vec![project_row()], vec![state_row]]);
    let (status, body) = request(
        app(store.clone()),
        "POST",
        "/projects/1/technologies",
        Some(json!({"name": "React"})),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Technology already linked to this project.");
    assert!(
        !store.recorded_sql().iter().any(|s| s.contains("INSERT")),
        "no insert may run for a duplicate pair"
    );
}

#[tokio::test]
async fn link_to_missing_project_is_not_found_before_vocabulary_check() {
    let store = FakeStore::scripted(vec![vec![]]);
    let (status, body) = request(
        app(store),
        "POST",
        "/projects/9/technologies",
        Some(json!({"name": "React"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Project not found.");
}

#[tokio::test]
async fn unlink_removes_only_the_association_by_default() {
    let store = FakeStore::scripted(vec![vec![project_row()], vec![]]);
    let (status, body) = request(
        app(store.clone()),
        "DELETE",
        "/projects/1/technologies/React",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());
    let sql = &store.recorded_sql()[1];
    assert!(sql.contains("DELETE FROM projects_technologies"), "sql: {}", sql);
    assert!(!sql.contains("DELETE FROM technologies"), "sql: {}", sql);
    assert_eq!(store.recorded_params(1), vec![json!(1), json!("React")]);
}

#[tokio::test]
async fn unlink_can_drop_the_shared_technology_row_by_policy() {
    let store = FakeStore::scripted(vec![vec![project_row()], vec![]]);
    let (status, _) = request(
        app_with_policy(store.clone(), UnlinkPolicy::DropTechnology),
        "DELETE",
        "/projects/1/technologies/React",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    let sql = &store.recorded_sql()[1];
    assert!(sql.contains("DELETE FROM technologies"), "sql: {}", sql);
    assert!(sql.contains("USING projects_technologies"), "sql: {}", sql);
}

#[tokio::test]
async fn unlink_of_unsupported_name_reports_the_vocabulary() {
    let store = FakeStore::scripted(vec![vec![project_row()]]);
    let (status, body) = request(
        app(store.clone()),
        "DELETE",
        "/projects/1/technologies/Cobol",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Technology not supported.");
    assert_eq!(body["options"].as_array().unwrap().len(), 9);
    assert_eq!(store.statement_count(), 1);
}
