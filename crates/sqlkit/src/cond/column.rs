//! Single-column predicates: BETWEEN, LIKE and the null tests.

use std::fmt::Write as _;

use crate::cond::{Cond, Expr};
use crate::error::SqlResult;
use crate::param::{Param, impl_scalar_from};
use crate::writer::Writer;

/// One end of a BETWEEN range.
#[derive(Debug, Clone)]
pub enum Bound {
    Param(Param),
    /// Inlined without parentheses.
    Expr(Expr),
}

impl_scalar_from!(Bound, Bound::Param);

impl From<Param> for Bound {
    fn from(param: Param) -> Self {
        Bound::Param(param)
    }
}

impl From<Expr> for Bound {
    fn from(expr: Expr) -> Self {
        Bound::Expr(expr)
    }
}

impl Bound {
    fn write_to(&self, w: &mut Writer) -> SqlResult<()> {
        match self {
            Bound::Param(p) => {
                w.write_char('?')?;
                w.append(p.clone());
                Ok(())
            }
            Bound::Expr(expr) => expr.write_to(w),
        }
    }
}

/// `col BETWEEN ? AND ?`
#[derive(Debug, Clone)]
pub struct Between {
    column: String,
    low: Bound,
    high: Bound,
}

impl Between {
    pub fn new(column: impl Into<String>, low: impl Into<Bound>, high: impl Into<Bound>) -> Self {
        Self {
            column: column.into(),
            low: low.into(),
            high: high.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.column.is_empty()
    }

    pub fn write_to(&self, w: &mut Writer) -> SqlResult<()> {
        write!(w, "{} BETWEEN ", self.column)?;
        self.low.write_to(w)?;
        w.write_str(" AND ")?;
        self.high.write_to(w)
    }
}

/// `col LIKE ?`, with the pattern wrapped in `%...%` unless it already starts
/// or ends with `%`.
#[derive(Debug, Clone)]
pub struct Like {
    column: String,
    pattern: String,
}

impl Like {
    pub fn new(column: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            pattern: pattern.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.column.is_empty() && !self.pattern.is_empty()
    }

    /// The pattern actually bound.
    pub fn bound_pattern(&self) -> String {
        if self.pattern.starts_with('%') || self.pattern.ends_with('%') {
            self.pattern.clone()
        } else {
            format!("%{}%", self.pattern)
        }
    }

    pub fn write_to(&self, w: &mut Writer) -> SqlResult<()> {
        write!(w, "{} LIKE ?", self.column)?;
        w.append(self.bound_pattern());
        Ok(())
    }
}

/// `col IS NULL`
#[derive(Debug, Clone)]
pub struct IsNull(String);

/// `col IS NOT NULL`
#[derive(Debug, Clone)]
pub struct NotNull(String);

impl IsNull {
    pub fn new(column: impl Into<String>) -> Self {
        Self(column.into())
    }

    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn write_to(&self, w: &mut Writer) -> SqlResult<()> {
        write!(w, "{} IS NULL", self.0)?;
        Ok(())
    }
}

impl NotNull {
    pub fn new(column: impl Into<String>) -> Self {
        Self(column.into())
    }

    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn write_to(&self, w: &mut Writer) -> SqlResult<()> {
        write!(w, "{} IS NOT NULL", self.0)?;
        Ok(())
    }
}

impl From<Between> for Cond {
    fn from(cond: Between) -> Self {
        Cond::Between(cond)
    }
}

impl From<Like> for Cond {
    fn from(cond: Like) -> Self {
        Cond::Like(cond)
    }
}

impl From<IsNull> for Cond {
    fn from(cond: IsNull) -> Self {
        Cond::IsNull(cond)
    }
}

impl From<NotNull> for Cond {
    fn from(cond: NotNull) -> Self {
        Cond::NotNull(cond)
    }
}
