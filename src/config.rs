//! Environment-driven configuration, parsed once at startup.

use crate::error::ConfigError;
use std::str::FromStr;

/// What DELETE /projects/:id/technologies/:name removes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnlinkPolicy {
    /// Remove only the association row; the shared technology row stays.
    #[default]
    AssociationOnly,
    /// Also remove the shared `technologies` row, affecting every project
    /// that references it.
    DropTechnology,
}

impl FromStr for UnlinkPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "association" => Ok(UnlinkPolicy::AssociationOnly),
            "technology" => Ok(UnlinkPolicy::DropTechnology),
            other => Err(format!(
                "unknown policy '{}', expected 'association' or 'technology'",
                other
            )),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
    pub unlink_policy: UnlinkPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
        let max_connections = match std::env::var("MAX_CONNECTIONS") {
            Ok(v) => v.parse().map_err(|e| ConfigError::InvalidVar {
                var: "MAX_CONNECTIONS",
                reason: format!("{}", e),
            })?,
            Err(_) => 5,
        };
        let unlink_policy = match std::env::var("UNLINK_POLICY") {
            Ok(v) => v.parse().map_err(|reason| ConfigError::InvalidVar {
                var: "UNLINK_POLICY",
                reason,
            })?,
            Err(_) => UnlinkPolicy::default(),
        };
        Ok(Config {
            database_url,
            bind_addr,
            max_connections,
            unlink_policy,
        })
    }
}
