//! Rendering entry points shared by conditions and statements.

use crate::error::SqlResult;
use crate::param::Param;

/// Anything that renders to SQL: a [`crate::Cond`] (or one of its node
/// types) or a [`crate::Builder`].
pub trait BuildSql {
    /// Parameterized form: text plus the arguments of its placeholders.
    fn to_sql(&self) -> SqlResult<(String, Vec<Param>)>;

    /// Literal-inlined form, for logging and debugging.
    fn to_bound_sql(&self) -> SqlResult<String>;
}

/// Render a condition or a statement in parameterized form.
pub fn to_sql<S: BuildSql + ?Sized>(source: &S) -> SqlResult<(String, Vec<Param>)> {
    source.to_sql()
}

/// Render a condition or a statement with its arguments inlined.
pub fn to_bound_sql<S: BuildSql + ?Sized>(source: &S) -> SqlResult<String> {
    source.to_bound_sql()
}
