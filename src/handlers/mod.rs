//! HTTP handlers: typed extraction, checker wiring, status codes.

pub mod developers;
pub mod projects;
