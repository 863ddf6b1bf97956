//! Integrity checkers, entity mutators and the association resolver.

pub mod checks;
pub mod developers;
pub mod links;
pub mod projects;

pub use developers::DeveloperService;
pub use links::LinkService;
pub use projects::ProjectService;
