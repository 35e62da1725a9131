//! Operands of key/value conditions and assignments.

use crate::builder::Builder;
use crate::cond::Expr;
use crate::param::{Param, impl_scalar_from};

/// Increment a column in an UPDATE: `col=col+?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Incr(pub i64);

/// Decrement a column in an UPDATE: `col=col-?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decr(pub i64);

/// The right-hand side of an entry in [`crate::Eq`], [`crate::Lt`], etc.
#[derive(Debug, Clone)]
pub enum Value {
    /// A single bound argument (`Null` included).
    Param(Param),
    /// A list; renders as `IN` / `NOT IN` membership.
    List(Vec<Param>),
    /// Raw SQL, parenthesized.
    Expr(Expr),
    /// A nested statement, parenthesized.
    Statement(Box<Builder>),
    Incr(i64),
    Decr(i64),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Param(p) if p.is_null())
    }
}

impl_scalar_from!(Value, Value::Param);

impl From<Param> for Value {
    fn from(param: Param) -> Self {
        Value::Param(param)
    }
}

impl<T: Into<Param>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        Value::Param(Param::from(value))
    }
}

impl<T: Into<Param>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Param>, const N: usize> From<[T; N]> for Value {
    fn from(values: [T; N]) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Param> + Clone> From<&[T]> for Value {
    fn from(values: &[T]) -> Self {
        Value::List(values.iter().cloned().map(Into::into).collect())
    }
}

impl From<Expr> for Value {
    fn from(expr: Expr) -> Self {
        Value::Expr(expr)
    }
}

impl From<Builder> for Value {
    fn from(builder: Builder) -> Self {
        Value::Statement(Box::new(builder))
    }
}

impl From<Incr> for Value {
    fn from(Incr(n): Incr) -> Self {
        Value::Incr(n)
    }
}

impl From<Decr> for Value {
    fn from(Decr(n): Decr) -> Self {
        Value::Decr(n)
    }
}
