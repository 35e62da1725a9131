//! `tracing` events for rendered statements.
//!
//! Enable via the crate feature: `sqlkit = { features = ["tracing"] }` (on by
//! default).

use crate::builder::StatementKind;
use crate::dialect::Dialect;
use crate::error::SqlError;

/// Longest SQL text (in bytes) written into a single event.
const MAX_SQL_LENGTH: usize = 200;

fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

fn display_sql(sql: &str) -> String {
    let shown = truncate_sql_bytes(sql, MAX_SQL_LENGTH);
    if shown.len() < sql.len() {
        format!("{shown}...")
    } else {
        sql.to_string()
    }
}

pub(crate) fn rendered(
    kind: StatementKind,
    dialect: Option<Dialect>,
    sql: &str,
    param_count: usize,
) {
    tracing::debug!(
        target: "sqlkit.sql",
        kind = ?kind,
        dialect = dialect.map(Dialect::as_str).unwrap_or("-"),
        param_count,
        sql = %display_sql(sql),
        "rendered statement"
    );
}

pub(crate) fn failed(kind: StatementKind, dialect: Option<Dialect>, error: &SqlError) {
    tracing::debug!(
        target: "sqlkit.sql",
        kind = ?kind,
        dialect = dialect.map(Dialect::as_str).unwrap_or("-"),
        error = %error,
        "statement rejected"
    );
}
