//! Technology vocabulary and link request type.

use serde::Deserialize;

/// The fixed supported vocabulary. Rows in the `technologies` table are
/// reference data created on first use; membership is decided here, not by
/// what happens to be in the table.
pub const SUPPORTED_TECHNOLOGIES: &[&str] = &[
    "JavaScript",
    "Python",
    "React",
    "Express.js",
    "HTML",
    "CSS",
    "Django",
    "PostgreSQL",
    "MongoDB",
];

#[derive(Debug, Deserialize)]
pub struct LinkTechnology {
    pub name: String,
}
