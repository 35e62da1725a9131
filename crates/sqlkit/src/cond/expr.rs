use std::fmt::Write as _;

use crate::cond::Cond;
use crate::error::SqlResult;
use crate::param::Param;
use crate::writer::Writer;

/// A raw SQL fragment with its own `?` arguments.
///
/// The text is emitted verbatim; it is the caller's job to keep it safe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expr {
    sql: String,
    args: Vec<Param>,
}

impl Expr {
    /// Create an expression with arguments for its `?` placeholders.
    pub fn new(sql: impl Into<String>, args: impl IntoIterator<Item = impl Into<Param>>) -> Self {
        Self {
            sql: sql.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an expression without arguments.
    pub fn raw(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument (useful for mixed argument types).
    pub fn arg(mut self, value: impl Into<Param>) -> Self {
        self.args.push(value.into());
        self
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn args(&self) -> &[Param] {
        &self.args
    }

    pub fn is_valid(&self) -> bool {
        !self.sql.is_empty()
    }

    pub fn write_to(&self, w: &mut Writer) -> SqlResult<()> {
        w.write_str(&self.sql)?;
        w.append_all(self.args.iter().cloned());
        Ok(())
    }

    pub fn and(self, other: impl Into<Cond>) -> Cond {
        Cond::from(self).and(other)
    }

    pub fn or(self, other: impl Into<Cond>) -> Cond {
        Cond::from(self).or(other)
    }
}
