use std::fmt::Write as _;

use super::{Builder, StatementKind, limit};
use crate::error::{SqlError, SqlResult};
use crate::writer::Writer;

impl Builder {
    pub(super) fn write_select(&self, w: &mut Writer) -> SqlResult<()> {
        if self.from.is_empty() && !self.nested {
            return Err(SqlError::NoTableName);
        }
        if let Some(page) = self.pagination.get() {
            return limit::write_paginated(self, page, w);
        }

        w.write_str("SELECT ")?;
        self.write_projection(w)?;
        self.write_source(w)?;

        for join in &self.joins {
            join.write_to(w)?;
        }

        if self.cond.is_valid() {
            w.write_str(" WHERE ")?;
            self.cond.write_to(w)?;
        }
        if !self.group_by.is_empty() {
            write!(w, " GROUP BY {}", self.group_by)?;
        }
        if !self.having.is_empty() {
            write!(w, " HAVING {}", self.having)?;
        }
        if !self.order_by.is_empty() {
            write!(w, " ORDER BY {}", self.order_by)?;
        }
        Ok(())
    }

    /// Selected columns, `*` when none were given.
    pub(super) fn projection(&self) -> Vec<String> {
        if self.columns.is_empty() {
            vec!["*".to_string()]
        } else {
            self.columns.clone()
        }
    }

    fn write_projection(&self, w: &mut Writer) -> SqlResult<()> {
        if self.columns.is_empty() {
            w.write_char('*')?;
        } else {
            w.write_str(&self.columns.join(","))?;
        }
        Ok(())
    }

    fn write_source(&self, w: &mut Writer) -> SqlResult<()> {
        let Some(sub) = &self.sub_query else {
            write!(w, " FROM {}", self.from)?;
            return Ok(());
        };

        if self.cond.is_valid() && self.from.is_empty() {
            return Err(SqlError::UnnamedDerivedTable);
        }
        if !matches!(
            sub.kind,
            StatementKind::Select | StatementKind::SetOperation
        ) {
            return Err(SqlError::UnexpectedSubQuery);
        }

        w.write_str(" FROM (")?;
        sub.write_to(w)?;
        w.write_char(')')?;
        if !self.from.is_empty() {
            write!(w, " {}", self.from)?;
        }
        Ok(())
    }
}
