use std::fmt::Write as _;

use super::Builder;
use crate::cond::{Eq, Expr};
use crate::error::{SqlError, SqlResult};
use crate::writer::Writer;

/// One item of an UPDATE's SET list.
#[derive(Debug, Clone)]
pub enum Assignment {
    /// `col=?` pairs (and `col=col+?`, `col=(expr)`, ...).
    Set(Eq),
    /// Raw SQL such as `c = c + 1`.
    Expr(Expr),
}

impl Assignment {
    pub fn is_valid(&self) -> bool {
        match self {
            Assignment::Set(eq) => eq.is_valid(),
            Assignment::Expr(expr) => expr.is_valid(),
        }
    }
}

impl From<Eq> for Assignment {
    fn from(eq: Eq) -> Self {
        Assignment::Set(eq)
    }
}

impl From<Expr> for Assignment {
    fn from(expr: Expr) -> Self {
        Assignment::Expr(expr)
    }
}

impl Builder {
    pub(super) fn write_update(&self, w: &mut Writer) -> SqlResult<()> {
        if self.from.is_empty() {
            return Err(SqlError::NoTableName);
        }
        if self.assignments.is_empty() {
            return Err(SqlError::NoColumnToUpdate);
        }

        write!(w, "UPDATE {} SET ", self.from)?;
        for (i, assignment) in self.assignments.iter().enumerate() {
            if i > 0 {
                w.write_char(',')?;
            }
            match assignment {
                Assignment::Set(eq) => eq.write_with(w, ",")?,
                Assignment::Expr(expr) => expr.write_to(w)?,
            }
        }

        if self.cond.is_valid() {
            w.write_str(" WHERE ")?;
            self.cond.write_to(w)?;
        }
        Ok(())
    }
}
