//! Domain model: request types with explicit ordered attribute lists, table
//! specs for the statement builder, and the closed vocabularies.

pub mod developer;
pub mod project;
pub mod technology;

pub use developer::{DeveloperInfoPatch, DeveloperPatch, NewDeveloper, NewDeveloperInfo, OS_OPTIONS};
pub use project::{NewProject, ProjectPatch};
pub use technology::{LinkTechnology, SUPPORTED_TECHNOLOGIES};

use crate::sql::TableSpec;

pub const DEVELOPERS: TableSpec = TableSpec::new("developers", &[]);
pub const DEVELOPER_INFOS: TableSpec =
    TableSpec::new("developer_infos", &[("developerSince", "date")]);
pub const PROJECTS: TableSpec =
    TableSpec::new("projects", &[("startDate", "date"), ("endDate", "date")]);
pub const PROJECTS_TECHNOLOGIES: TableSpec =
    TableSpec::new("projects_technologies", &[("addedIn", "timestamptz")]);
