//! Text accumulator paired with the argument sink.

use std::fmt;

use crate::convert::convert_to_bound_sql;
use crate::dialect::Dialect;
use crate::error::{SqlError, SqlResult};
use crate::param::{Param, ParamList};

/// Accumulates rendered SQL text and the arguments bound to its `?`
/// placeholders.
///
/// Text goes through [`fmt::Write`], so renderers use `write!`. The writer
/// also carries the dialect in effect for the statement being rendered, which
/// nested statements without a dialect of their own inherit, and the first
/// concrete dialect any statement rendered into it declared.
#[derive(Debug, Default)]
pub struct Writer {
    sql: String,
    args: ParamList,
    dialect: Option<Dialect>,
    pinned: Option<Dialect>,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one argument.
    pub fn append(&mut self, value: impl Into<Param>) {
        self.args.push(value);
    }

    /// Append arguments in order.
    pub fn append_all(&mut self, values: impl IntoIterator<Item = Param>) {
        self.args.extend_params(values);
    }

    /// Move another writer's text and arguments onto the end of this one.
    pub fn extend(&mut self, other: Writer) {
        self.sql.push_str(&other.sql);
        self.args.extend(other.args);
    }

    pub fn as_str(&self) -> &str {
        &self.sql
    }

    pub fn args(&self) -> &ParamList {
        &self.args
    }

    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    /// Dialect in effect for the statement currently rendering.
    pub fn dialect(&self) -> Option<Dialect> {
        self.dialect
    }

    /// Replace the effective dialect, returning the previous one.
    pub(crate) fn swap_dialect(&mut self, dialect: Option<Dialect>) -> Option<Dialect> {
        std::mem::replace(&mut self.dialect, dialect)
    }

    /// Record a statement's own dialect. Every statement sharing this writer
    /// must declare the same one, siblings under an unset host included.
    pub(crate) fn pin_dialect(&mut self, dialect: Dialect) -> SqlResult<()> {
        match self.pinned {
            Some(pinned) if pinned != dialect => Err(SqlError::InconsistentDialect),
            _ => {
                self.pinned = Some(dialect);
                Ok(())
            }
        }
    }

    /// Parameterized form: text with `?` placeholders plus arguments.
    pub fn into_parts(self) -> (String, Vec<Param>) {
        (self.sql, self.args.into_vec())
    }

    /// Literal-inlined form of the accumulated text.
    pub fn to_bound_sql(&self) -> SqlResult<String> {
        convert_to_bound_sql(&self.sql, self.args.as_slice())
    }
}

impl fmt::Write for Writer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.sql.push_str(s);
        Ok(())
    }
}
