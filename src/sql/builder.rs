//! Builds parameterized INSERT and UPDATE statements from an ordered list of
//! (column, value) pairs supplied by the caller.
//!
//! Protected fields (primary keys, route-supplied foreign keys) are never part
//! of the attribute list, so the builder has no stripping logic: what it is
//! given is exactly what it writes.

use crate::error::AppError;
use serde_json::Value;

/// Static description of a mutable table: its name and the SQL casts needed
/// for columns whose values are bound as text (dates, timestamps).
pub struct TableSpec {
    pub name: &'static str,
    casts: &'static [(&'static str, &'static str)],
}

impl TableSpec {
    pub const fn new(name: &'static str, casts: &'static [(&'static str, &'static str)]) -> Self {
        TableSpec { name, casts }
    }

    fn cast_for(&self, column: &str) -> Option<&'static str> {
        self.casts
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, t)| *t)
    }
}

/// Quote identifier for PostgreSQL.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<Value>,
}

impl QueryBuf {
    fn empty() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: Value) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

fn require_attrs(attrs: &[(&str, Value)]) -> Result<(), AppError> {
    if attrs.is_empty() {
        return Err(AppError::MalformedRequest(
            "Request body must include at least one updatable field.".into(),
        ));
    }
    Ok(())
}

/// INSERT INTO <table> (<cols>) VALUES ($1, ...) RETURNING *.
/// Columns appear in the order given; an empty list is rejected rather than
/// silently executed.
pub fn insert(table: &TableSpec, attrs: &[(&str, Value)]) -> Result<QueryBuf, AppError> {
    require_attrs(attrs)?;
    let mut q = QueryBuf::empty();
    let mut cols = Vec::with_capacity(attrs.len());
    let mut placeholders = Vec::with_capacity(attrs.len());
    for (name, value) in attrs {
        let n = q.push_param(value.clone());
        let ph = match table.cast_for(name) {
            Some(t) => format!("${}::{}", n, t),
            None => format!("${}", n),
        };
        cols.push(quoted(name));
        placeholders.push(ph);
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
        quoted(table.name),
        cols.join(", "),
        placeholders.join(", ")
    );
    Ok(q)
}

/// UPDATE <table> SET (<cols>) = ROW($1, ...) WHERE <key-col> = $n RETURNING *.
/// A non-matching key yields zero rows; callers treat that as "not found".
pub fn update(
    table: &TableSpec,
    key_column: &str,
    key: Value,
    attrs: &[(&str, Value)],
) -> Result<QueryBuf, AppError> {
    require_attrs(attrs)?;
    let mut q = QueryBuf::empty();
    let mut cols = Vec::with_capacity(attrs.len());
    let mut placeholders = Vec::with_capacity(attrs.len());
    for (name, value) in attrs {
        let n = q.push_param(value.clone());
        let ph = match table.cast_for(name) {
            Some(t) => format!("${}::{}", n, t),
            None => format!("${}", n),
        };
        cols.push(quoted(name));
        placeholders.push(ph);
    }
    let key_param = q.push_param(key);
    q.sql = format!(
        "UPDATE {} SET ({}) = ROW({}) WHERE {} = ${} RETURNING *",
        quoted(table.name),
        cols.join(", "),
        placeholders.join(", "),
        quoted(key_column),
        key_param
    );
    Ok(q)
}
