//! SQL dialects and the per-dialect rendering choices.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SqlError;

/// A supported SQL dialect.
///
/// Tags are parsed case-insensitively (`"MySQL"`, `" postgres "`), and the
/// type (de)serializes as its lowercase tag so it can live in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Dialect {
    Postgres,
    Sqlite,
    Mysql,
    Mssql,
    Oracle,
}

/// How a dialect expresses offset/limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationStyle {
    /// `LIMIT n [OFFSET o]`
    LimitOffset,
    /// Derived table filtered on the `ROWNUM` pseudo-column.
    RowNum,
    /// `TOP n` plus a `ROW_NUMBER()` window filtered in a derived table.
    TopRowNumber,
}

impl Dialect {
    pub const ALL: [Dialect; 5] = [
        Dialect::Postgres,
        Dialect::Sqlite,
        Dialect::Mysql,
        Dialect::Mssql,
        Dialect::Oracle,
    ];

    /// Canonical lowercase tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::Sqlite => "sqlite3",
            Dialect::Mysql => "mysql",
            Dialect::Mssql => "mssql",
            Dialect::Oracle => "oracle",
        }
    }

    pub fn pagination_style(self) -> PaginationStyle {
        match self {
            Dialect::Postgres | Dialect::Sqlite | Dialect::Mysql => PaginationStyle::LimitOffset,
            Dialect::Oracle => PaginationStyle::RowNum,
            Dialect::Mssql => PaginationStyle::TopRowNumber,
        }
    }

    /// Placeholder prefix used by [`crate::Builder::to_sql`], if the dialect
    /// does not accept plain `?`.
    pub fn placeholder_prefix(self) -> Option<&'static str> {
        match self {
            Dialect::Postgres => Some("$"),
            Dialect::Mssql => Some("@p"),
            Dialect::Oracle => Some(":p"),
            Dialect::Sqlite | Dialect::Mysql => None,
        }
    }

    /// Whether arguments are passed by name (`p1`, `p2`, ...) rather than position.
    pub fn uses_named_args(self) -> bool {
        matches!(self, Dialect::Mssql | Dialect::Oracle)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = SqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" => Ok(Dialect::Postgres),
            "sqlite3" | "sqlite" => Ok(Dialect::Sqlite),
            "mysql" => Ok(Dialect::Mysql),
            "mssql" => Ok(Dialect::Mssql),
            "oracle" => Ok(Dialect::Oracle),
            _ => Err(SqlError::UnsupportedDialect(s.to_string())),
        }
    }
}

impl TryFrom<String> for Dialect {
    type Error = SqlError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Dialect> for String {
    fn from(dialect: Dialect) -> Self {
        dialect.as_str().to_string()
    }
}
