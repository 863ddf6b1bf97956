//! Developer and DeveloperInfo request types.
//!
//! Each type exposes its writable columns as an ordered (column, value) list
//! for the statement builder. Primary keys and route-supplied foreign keys are
//! not representable here; owners are attached by the caller where the
//! operation requires them.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

pub const OS_OPTIONS: &[&str] = &["Windows", "Linux", "MacOS"];

#[derive(Debug, Deserialize)]
pub struct NewDeveloper {
    pub name: String,
    pub email: String,
}

impl NewDeveloper {
    pub fn attributes(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("name", Value::String(self.name.clone())),
            ("email", Value::String(self.email.clone())),
        ]
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DeveloperPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl DeveloperPatch {
    /// Only the fields present in the request; may be empty.
    pub fn attributes(&self) -> Vec<(&'static str, Value)> {
        let mut attrs = Vec::new();
        if let Some(name) = &self.name {
            attrs.push(("name", Value::String(name.clone())));
        }
        if let Some(email) = &self.email {
            attrs.push(("email", Value::String(email.clone())));
        }
        attrs
    }
}

/// `preferredOS` stays a plain string here so the vocabulary checker can
/// answer with the accepted options instead of a deserialization failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDeveloperInfo {
    pub developer_since: NaiveDate,
    #[serde(rename = "preferredOS")]
    pub preferred_os: String,
}

impl NewDeveloperInfo {
    pub fn attributes(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("developerSince", Value::String(self.developer_since.to_string())),
            ("preferredOS", Value::String(self.preferred_os.clone())),
        ]
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperInfoPatch {
    pub developer_since: Option<NaiveDate>,
    #[serde(rename = "preferredOS")]
    pub preferred_os: Option<String>,
}

impl DeveloperInfoPatch {
    pub fn attributes(&self) -> Vec<(&'static str, Value)> {
        let mut attrs = Vec::new();
        if let Some(since) = &self.developer_since {
            attrs.push(("developerSince", Value::String(since.to_string())));
        }
        if let Some(os) = &self.preferred_os {
            attrs.push(("preferredOS", Value::String(os.clone())));
        }
        attrs
    }
}
