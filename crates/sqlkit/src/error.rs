//! Error types for sqlkit

use thiserror::Error;

/// Result type alias for statement building and rendering.
pub type SqlResult<T> = Result<T, SqlError>;

/// Errors raised while validating or rendering a statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlError {
    /// The builder has no statement kind (nothing to render).
    #[error("Not supported SQL type")]
    UnsupportedType,

    /// A `?` placeholder had no argument left to inline.
    #[error("Need more sql arguments")]
    NeedMoreArguments,

    /// SELECT / UPDATE / DELETE without a source table, or INSERT without a target.
    #[error("No table indicated")]
    NoTableName,

    /// UPDATE without any assignment.
    #[error("No column(s) to update")]
    NoColumnToUpdate,

    /// INSERT without values and without a SELECT source.
    #[error("No column(s) to insert")]
    NoColumnToInsert,

    /// Unknown dialect tag.
    #[error("Not supported dialect type: {0}")]
    UnsupportedDialect(String),

    /// A set-operation host carries WHERE / ORDER BY / GROUP BY / HAVING / LIMIT.
    #[error("Unexpected conditional fields in UNION query")]
    UnexpectedUnionConditions,

    /// A set-operation member is not a SELECT.
    #[error("Unexpected members in UNION query")]
    UnsupportedUnionMembers,

    /// A sub-query source is neither a SELECT nor a set operation.
    #[error("Unexpected sub-query in SELECT query")]
    UnexpectedSubQuery,

    /// Pagination requested without a dialect.
    #[error("Dialect is not setup yet, try to use `dialect(..)` first")]
    DialectNotSetUp,

    /// Offset is negative or limit is not positive.
    #[error("Offset or limit is not correct")]
    InvalidLimitation,

    /// A filtered statement reads from a sub-query without an alias.
    #[error("Every derived table must have its own alias")]
    UnnamedDerivedTable,

    /// Composed statements declare different dialects.
    #[error("Inconsistent dialect in same builder")]
    InconsistentDialect,

    /// A value shape that cannot appear in this position (e.g. a list in `<`).
    #[error("Unsupported value for column '{0}'")]
    UnsupportedValue(String),

    /// The underlying text sink failed.
    #[error("Write error: {0}")]
    Write(#[from] std::fmt::Error),
}

impl SqlError {
    /// Create an unsupported value error for a specific column
    pub fn unsupported_value(column: impl Into<String>) -> Self {
        Self::UnsupportedValue(column.into())
    }

    /// Check if this error was raised by dialect handling.
    pub fn is_dialect_error(&self) -> bool {
        matches!(
            self,
            SqlError::UnsupportedDialect(_)
                | SqlError::DialectNotSetUp
                | SqlError::InconsistentDialect
        )
    }
}
