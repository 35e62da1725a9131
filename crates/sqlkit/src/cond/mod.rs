//! Condition expressions for WHERE / HAVING / JOIN ... ON.
//!
//! [`Cond`] is a closed set of predicate kinds. Every node knows whether it
//! carries a usable predicate ([`Cond::is_valid`]) and renders itself into a
//! [`Writer`] as text with `?` placeholders plus arguments.
//!
//! ```
//! use sqlkit::{Lt, eq, in_list, or};
//!
//! let cond = eq! { "b" => 2, "a" => 1 }.and(or([
//!     Lt::new().with("c", 3).into(),
//!     in_list("d", [4, 5]),
//! ]));
//! let (sql, args) = cond.to_sql().unwrap();
//! assert_eq!(sql, "a=? AND b=? AND (c<? OR d IN (?,?))");
//! assert_eq!(args.len(), 5);
//! ```

mod column;
mod expr;
mod in_list;
mod map;
mod value;


use std::fmt::Write as _;

pub use column::{Between, Bound, IsNull, Like, NotNull};
pub use expr::Expr;
pub use in_list::{In, InSource, NotIn};
pub use map::{Eq, Gt, Gte, Lt, Lte, Neq};
pub use value::{Decr, Incr, Value};

use crate::convert::convert_to_bound_sql;
use crate::error::SqlResult;
use crate::param::Param;
use crate::traits::BuildSql;
use crate::writer::Writer;

/// A condition node.
#[derive(Debug, Clone)]
pub enum Cond {
    Eq(Eq),
    Neq(Neq),
    Lt(Lt),
    Lte(Lte),
    Gt(Gt),
    Gte(Gte),
    Between(Between),
    Like(Like),
    In(In),
    NotIn(NotIn),
    IsNull(IsNull),
    NotNull(NotNull),
    /// Parenthesizes `And`, `Or` and any key/value map with more than one
    /// entry, comparison maps (`Lt`, `Lte`, `Gt`, `Gte`) included.
    Not(Box<Cond>),
    And(Vec<Cond>),
    Or(Vec<Cond>),
    Expr(Expr),
    /// Only the branch selected by `condition` renders.
    If {
        condition: bool,
        then: Box<Cond>,
        otherwise: Option<Box<Cond>>,
    },
}

impl Default for Cond {
    /// The empty conjunction; not valid, renders nothing.
    fn default() -> Self {
        Cond::And(Vec::new())
    }
}

impl Cond {
    /// Whether this node carries a usable predicate.
    pub fn is_valid(&self) -> bool {
        match self {
            Cond::Eq(c) => c.is_valid(),
            Cond::Neq(c) => c.is_valid(),
            Cond::Lt(c) => c.is_valid(),
            Cond::Lte(c) => c.is_valid(),
            Cond::Gt(c) => c.is_valid(),
            Cond::Gte(c) => c.is_valid(),
            Cond::Between(c) => c.is_valid(),
            Cond::Like(c) => c.is_valid(),
            Cond::In(c) => c.is_valid(),
            Cond::NotIn(c) => c.is_valid(),
            Cond::IsNull(c) => c.is_valid(),
            Cond::NotNull(c) => c.is_valid(),
            Cond::Not(c) => c.is_valid(),
            Cond::And(conds) | Cond::Or(conds) => conds.iter().any(Cond::is_valid),
            Cond::Expr(e) => e.is_valid(),
            Cond::If { .. } => self.resolved().is_some_and(Cond::is_valid),
        }
    }

    /// Look through `If` nodes to the branch that will render.
    ///
    /// Returns `None` for a conditional whose selected branch is absent.
    pub fn resolved(&self) -> Option<&Cond> {
        match self {
            Cond::If {
                condition,
                then,
                otherwise,
            } => {
                if *condition {
                    then.resolved()
                } else {
                    otherwise.as_deref().and_then(Cond::resolved)
                }
            }
            other => Some(other),
        }
    }

    /// `self AND other`, dropping whichever side is invalid.
    pub fn and(self, other: impl Into<Cond>) -> Cond {
        and([self, other.into()])
    }

    /// `self OR other`, dropping whichever side is invalid.
    pub fn or(self, other: impl Into<Cond>) -> Cond {
        or([self, other.into()])
    }

    /// Text with `?` placeholders plus arguments. An invalid condition
    /// renders as empty text without arguments.
    pub fn to_sql(&self) -> SqlResult<(String, Vec<Param>)> {
        if !self.is_valid() {
            return Ok((String::new(), Vec::new()));
        }
        let mut w = Writer::new();
        self.write_to(&mut w)?;
        Ok(w.into_parts())
    }

    pub fn to_bound_sql(&self) -> SqlResult<String> {
        let (sql, args) = self.to_sql()?;
        convert_to_bound_sql(&sql, &args)
    }

    pub fn write_to(&self, w: &mut Writer) -> SqlResult<()> {
        match self {
            Cond::Eq(c) => c.write_to(w),
            Cond::Neq(c) => c.write_to(w),
            Cond::Lt(c) => c.write_to(w),
            Cond::Lte(c) => c.write_to(w),
            Cond::Gt(c) => c.write_to(w),
            Cond::Gte(c) => c.write_to(w),
            Cond::Between(c) => c.write_to(w),
            Cond::Like(c) => c.write_to(w),
            Cond::In(c) => c.write_to(w),
            Cond::NotIn(c) => c.write_to(w),
            Cond::IsNull(c) => c.write_to(w),
            Cond::NotNull(c) => c.write_to(w),
            Cond::Expr(e) => e.write_to(w),
            Cond::Not(inner) => {
                w.write_str("NOT ")?;
                match inner.resolved() {
                    Some(target) if target.is_multi_entry_map() || target.is_composite() => {
                        write_parenthesized(target, w)
                    }
                    Some(target) => target.write_to(w),
                    None => Ok(()),
                }
            }
            Cond::And(conds) => write_joined(conds, w, " AND ", |c| {
                matches!(c, Cond::Or(_) | Cond::Expr(_))
            }),
            Cond::Or(conds) => write_joined(conds, w, " OR ", |c| {
                matches!(c, Cond::And(_) | Cond::Expr(_)) || c.is_multi_entry_set()
            }),
            Cond::If { .. } => match self.resolved() {
                Some(target) => target.write_to(w),
                None => Ok(()),
            },
        }
    }

    fn is_composite(&self) -> bool {
        matches!(self, Cond::And(_) | Cond::Or(_))
    }

    /// `Eq` / `Neq` with more than one entry.
    fn is_multi_entry_set(&self) -> bool {
        match self {
            Cond::Eq(m) => m.len() > 1,
            Cond::Neq(m) => m.len() > 1,
            _ => false,
        }
    }

    /// Any key/value map with more than one entry.
    fn is_multi_entry_map(&self) -> bool {
        match self {
            Cond::Lt(m) => m.len() > 1,
            Cond::Lte(m) => m.len() > 1,
            Cond::Gt(m) => m.len() > 1,
            Cond::Gte(m) => m.len() > 1,
            other => other.is_multi_entry_set(),
        }
    }
}

fn write_parenthesized(cond: &Cond, w: &mut Writer) -> SqlResult<()> {
    w.write_char('(')?;
    cond.write_to(w)?;
    w.write_char(')')?;
    Ok(())
}

fn write_joined(
    conds: &[Cond],
    w: &mut Writer,
    sep: &str,
    needs_parens: impl Fn(&Cond) -> bool,
) -> SqlResult<()> {
    let members = conds
        .iter()
        .filter(|c| c.is_valid())
        .filter_map(Cond::resolved);
    for (i, cond) in members.enumerate() {
        if i > 0 {
            w.write_str(sep)?;
        }
        if needs_parens(cond) {
            write_parenthesized(cond, w)?;
        } else {
            cond.write_to(w)?;
        }
    }
    Ok(())
}

impl std::ops::Not for Cond {
    type Output = Cond;

    fn not(self) -> Cond {
        Cond::Not(Box::new(self))
    }
}

impl From<Expr> for Cond {
    fn from(expr: Expr) -> Self {
        Cond::Expr(expr)
    }
}

impl From<&str> for Cond {
    /// Raw SQL, e.g. a join's `ON` clause.
    fn from(sql: &str) -> Self {
        Cond::Expr(Expr::raw(sql))
    }
}

impl From<String> for Cond {
    fn from(sql: String) -> Self {
        Cond::Expr(Expr::raw(sql))
    }
}

impl BuildSql for Cond {
    fn to_sql(&self) -> SqlResult<(String, Vec<Param>)> {
        Cond::to_sql(self)
    }

    fn to_bound_sql(&self) -> SqlResult<String> {
        Cond::to_bound_sql(self)
    }
}

macro_rules! impl_build_sql_via_cond {
    ($($ty:ty),* $(,)?) => {
        $(
            impl BuildSql for $ty {
                fn to_sql(&self) -> SqlResult<(String, Vec<Param>)> {
                    Cond::from(self.clone()).to_sql()
                }

                fn to_bound_sql(&self) -> SqlResult<String> {
                    Cond::from(self.clone()).to_bound_sql()
                }
            }
        )*
    };
}

impl_build_sql_via_cond!(
    Eq, Neq, Lt, Lte, Gt, Gte, Between, Like, In, NotIn, IsNull, NotNull, Expr,
);

// ====== constructors ======

/// Conjunction of the valid members; a single survivor is returned as is.
pub fn and(conds: impl IntoIterator<Item = Cond>) -> Cond {
    let mut valid: Vec<Cond> = conds.into_iter().filter(Cond::is_valid).collect();
    if valid.len() == 1 {
        if let Some(only) = valid.pop() {
            return only;
        }
    }
    Cond::And(valid)
}

/// Disjunction of the valid members; a single survivor is returned as is.
pub fn or(conds: impl IntoIterator<Item = Cond>) -> Cond {
    let mut valid: Vec<Cond> = conds.into_iter().filter(Cond::is_valid).collect();
    if valid.len() == 1 {
        if let Some(only) = valid.pop() {
            return only;
        }
    }
    Cond::Or(valid)
}

pub fn not(cond: impl Into<Cond>) -> Cond {
    Cond::Not(Box::new(cond.into()))
}

/// `then` when `condition` holds, otherwise nothing.
pub fn when(condition: bool, then: impl Into<Cond>) -> Cond {
    Cond::If {
        condition,
        then: Box::new(then.into()),
        otherwise: None,
    }
}

/// `then` when `condition` holds, otherwise `otherwise`.
pub fn when_else(condition: bool, then: impl Into<Cond>, otherwise: impl Into<Cond>) -> Cond {
    Cond::If {
        condition,
        then: Box::new(then.into()),
        otherwise: Some(Box::new(otherwise.into())),
    }
}

pub fn expr(sql: impl Into<String>, args: impl IntoIterator<Item = impl Into<Param>>) -> Cond {
    Cond::Expr(Expr::new(sql, args))
}

pub fn in_list(column: impl Into<String>, source: impl Into<InSource>) -> Cond {
    Cond::In(In::new(column, source))
}

pub fn not_in(column: impl Into<String>, source: impl Into<InSource>) -> Cond {
    Cond::NotIn(NotIn::new(column, source))
}

pub fn like(column: impl Into<String>, pattern: impl Into<String>) -> Cond {
    Cond::Like(Like::new(column, pattern))
}

pub fn between(column: impl Into<String>, low: impl Into<Bound>, high: impl Into<Bound>) -> Cond {
    Cond::Between(Between::new(column, low, high))
}

pub fn is_null(column: impl Into<String>) -> Cond {
    Cond::IsNull(IsNull::new(column))
}

pub fn not_null(column: impl Into<String>) -> Cond {
    Cond::NotNull(NotNull::new(column))
}
