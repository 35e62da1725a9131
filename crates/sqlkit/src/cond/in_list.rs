use std::fmt::Write as _;

use crate::builder::Builder;
use crate::cond::{Cond, Expr};
use crate::error::SqlResult;
use crate::param::Param;
use crate::writer::Writer;

/// What a membership test compares against.
#[derive(Debug, Clone)]
pub enum InSource {
    List(Vec<Param>),
    Expr(Expr),
    Statement(Box<Builder>),
}

impl<T: Into<Param>> From<Vec<T>> for InSource {
    fn from(values: Vec<T>) -> Self {
        InSource::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Param>, const N: usize> From<[T; N]> for InSource {
    fn from(values: [T; N]) -> Self {
        InSource::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Param> + Clone> From<&[T]> for InSource {
    fn from(values: &[T]) -> Self {
        InSource::List(values.iter().cloned().map(Into::into).collect())
    }
}

impl From<Expr> for InSource {
    fn from(expr: Expr) -> Self {
        InSource::Expr(expr)
    }
}

impl From<Builder> for InSource {
    fn from(builder: Builder) -> Self {
        InSource::Statement(Box::new(builder))
    }
}

/// `col IN (...)`. An empty list renders the contradiction `0=1`.
#[derive(Debug, Clone)]
pub struct In {
    column: String,
    source: InSource,
}

/// `col NOT IN (...)`. An empty list renders the tautology `0=0`.
#[derive(Debug, Clone)]
pub struct NotIn {
    column: String,
    source: InSource,
}

impl In {
    pub fn new(column: impl Into<String>, source: impl Into<InSource>) -> Self {
        Self {
            column: column.into(),
            source: source.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.column.is_empty()
    }

    pub fn write_to(&self, w: &mut Writer) -> SqlResult<()> {
        write_membership(w, &self.column, &self.source, false)
    }
}

impl NotIn {
    pub fn new(column: impl Into<String>, source: impl Into<InSource>) -> Self {
        Self {
            column: column.into(),
            source: source.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.column.is_empty()
    }

    pub fn write_to(&self, w: &mut Writer) -> SqlResult<()> {
        write_membership(w, &self.column, &self.source, true)
    }
}

impl From<In> for Cond {
    fn from(cond: In) -> Self {
        Cond::In(cond)
    }
}

impl From<NotIn> for Cond {
    fn from(cond: NotIn) -> Self {
        Cond::NotIn(cond)
    }
}

fn write_membership(
    w: &mut Writer,
    column: &str,
    source: &InSource,
    negated: bool,
) -> SqlResult<()> {
    let keyword = if negated { "NOT IN" } else { "IN" };
    match source {
        InSource::List(items) => write_list(w, column, items, negated),
        InSource::Expr(expr) => {
            write!(w, "{column} {keyword} (")?;
            expr.write_to(w)?;
            w.write_char(')')?;
            Ok(())
        }
        InSource::Statement(builder) => {
            write!(w, "{column} {keyword} (")?;
            builder.write_to(w)?;
            w.write_char(')')?;
            Ok(())
        }
    }
}

pub(crate) fn write_list(
    w: &mut Writer,
    column: &str,
    items: &[Param],
    negated: bool,
) -> SqlResult<()> {
    if items.is_empty() {
        w.write_str(if negated { "0=0" } else { "0=1" })?;
        return Ok(());
    }

    let keyword = if negated { "NOT IN" } else { "IN" };
    write!(w, "{column} {keyword} (")?;
    for i in 0..items.len() {
        if i > 0 {
            w.write_char(',')?;
        }
        w.write_char('?')?;
    }
    w.write_char(')')?;
    w.append_all(items.iter().cloned());
    Ok(())
}
