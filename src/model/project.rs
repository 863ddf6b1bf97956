//! Project request types.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub estimated_time: String,
    pub repository: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    /// The owning developer comes from the creation payload, not the route;
    /// its existence is checked before the insert.
    pub developer_id: i64,
}

impl NewProject {
    pub fn attributes(&self) -> Vec<(&'static str, Value)> {
        let mut attrs = vec![
            ("name", Value::String(self.name.clone())),
            ("description", Value::String(self.description.clone())),
            ("estimatedTime", Value::String(self.estimated_time.clone())),
            ("repository", Value::String(self.repository.clone())),
            ("startDate", Value::String(self.start_date.to_string())),
        ];
        if let Some(end) = &self.end_date {
            attrs.push(("endDate", Value::String(end.to_string())));
        }
        attrs.push(("developerId", Value::Number(self.developer_id.into())));
        attrs
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub estimated_time: Option<String>,
    pub repository: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Re-homing a project is allowed; the new owner must exist.
    pub developer_id: Option<i64>,
}

impl ProjectPatch {
    pub fn attributes(&self) -> Vec<(&'static str, Value)> {
        let mut attrs = Vec::new();
        if let Some(name) = &self.name {
            attrs.push(("name", Value::String(name.clone())));
        }
        if let Some(description) = &self.description {
            attrs.push(("description", Value::String(description.clone())));
        }
        if let Some(estimated) = &self.estimated_time {
            attrs.push(("estimatedTime", Value::String(estimated.clone())));
        }
        if let Some(repository) = &self.repository {
            attrs.push(("repository", Value::String(repository.clone())));
        }
        if let Some(start) = &self.start_date {
            attrs.push(("startDate", Value::String(start.to_string())));
        }
        if let Some(end) = &self.end_date {
            attrs.push(("endDate", Value::String(end.to_string())));
        }
        if let Some(developer_id) = self.developer_id {
            attrs.push(("developerId", Value::Number(developer_id.into())));
        }
        attrs
    }
}
