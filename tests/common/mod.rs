//! Shared test harness: a scripted in-memory store and request helpers.
#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use devhub::error::AppError;
use devhub::{api_routes, AppState, Store, UnlinkPolicy};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Store fake fed with a script of result sets, one per statement, in the
/// order the handler issues them. Every statement is recorded for assertions
/// on SQL shape and parameter order.
pub struct FakeStore {
    results: Mutex<VecDeque<Vec<Value>>>,
    statements: Mutex<Vec<(String, Vec<Value>)>>,
}

impl FakeStore {
    pub fn scripted(results: Vec<Vec<Value>>) -> Arc<Self> {
        Arc::new(FakeStore {
            results: Mutex::new(results.into()),
            statements: Mutex::new(Vec::new()),
        })
    }

    fn record(&self, sql: &str, params: &[Value]) -> Option<Vec<Value>> {
        self.statements
            .lock()
            .unwrap()
            .push((sql.to_string(), params.to_vec()));
        self.results.lock().unwrap().pop_front()
    }

    pub fn recorded_sql(&self) -> Vec<String> {
        self.statements
            .lock()
            .unwrap()
            .iter()
            .map(|(sql, _)| sql.clone())
            .collect()
    }

    pub fn recorded_params(&self, index: usize) -> Vec<Value> {
        self.statements.lock().unwrap()[index].1.clone()
    }

    pub fn statement_count(&self) -> usize {
        self.statements.lock().unwrap().len()
    }
}

#[async_trait]
impl Store for FakeStore {
    async fn fetch_optional(
        &self,
        sql: &str,
        params: &[Value],
    ) -> Result<Option<Value>, AppError> {
        Ok(self
            .record(sql, params)
            .and_then(|rows| rows.first().cloned()))
    }

    async fn fetch_all(&self, sql: &str, params: &[Value]) -> Result<Vec<Value>, AppError> {
        Ok(self.record(sql, params).unwrap_or_default())
    }

    async fn execute(&self, sql: &str, params: &[Value]) -> Result<u64, AppError> {
        Ok(self.record(sql, params).map(|rows| rows.len() as u64).unwrap_or(0))
    }
}

pub fn app(store: Arc<FakeStore>) -> Router {
    app_with_policy(store, UnlinkPolicy::AssociationOnly)
}

pub fn app_with_policy(store: Arc<FakeStore>, unlink_policy: UnlinkPolicy) -> Router {
    api_routes(AppState {
        store,
        unlink_policy,
    })
}

pub async fn request(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(v.to_string()))
            .expect("failed to build request"),
        None => builder.body(Body::empty()).expect("failed to build request"),
    };
    let resp = app.oneshot(req).await.expect("request failed");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body is not JSON")
    };
    (status, json)
}
