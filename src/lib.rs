//! devhub: REST backend for developers, projects and technologies.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod schema;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{Config, UnlinkPolicy};
pub use error::{AppError, ConfigError};
pub use routes::{api_routes, common_routes};
pub use schema::ensure_schema;
pub use state::AppState;
pub use store::{PgStore, Store};
