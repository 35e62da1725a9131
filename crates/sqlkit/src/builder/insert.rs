use std::fmt::Write as _;

use super::{Builder, StatementKind};
use crate::cond::Value;
use crate::error::{SqlError, SqlResult};
use crate::writer::Writer;

impl Builder {
    pub(super) fn write_insert(&self, w: &mut Writer) -> SqlResult<()> {
        if self.into.is_empty() {
            return Err(SqlError::NoTableName);
        }

        let from_select = !self.from.is_empty() || self.sub_query.is_some();
        if self.insert_values.is_empty() && !from_select {
            return Err(SqlError::NoColumnToInsert);
        }

        if from_select {
            return self.write_insert_select(w);
        }

        let columns: Vec<&str> = self
            .insert_values
            .iter()
            .map(|(column, _)| column.as_str())
            .collect();
        write!(w, "INSERT INTO {} ({}) Values (", self.into, columns.join(","))?;

        for (i, (column, value)) in self.insert_values.iter().enumerate() {
            if i > 0 {
                w.write_char(',')?;
            }
            match value {
                Value::Param(p) if p.is_null() => w.write_str("null")?,
                Value::Param(p) => {
                    w.write_char('?')?;
                    w.append(p.clone());
                }
                Value::Expr(expr) => {
                    w.write_char('(')?;
                    expr.write_to(w)?;
                    w.write_char(')')?;
                }
                Value::Statement(builder) => {
                    w.write_char('(')?;
                    builder.write_to(w)?;
                    w.write_char(')')?;
                }
                Value::List(_) | Value::Incr(_) | Value::Decr(_) => {
                    return Err(SqlError::unsupported_value(column.as_str()));
                }
            }
        }
        w.write_char(')')?;
        Ok(())
    }

    /// `INSERT INTO t [(cols)] SELECT ...`; the SELECT part is this builder's
    /// projection, source and clauses.
    fn write_insert_select(&self, w: &mut Writer) -> SqlResult<()> {
        write!(w, "INSERT INTO {}", self.into)?;
        if !self.insert_columns.is_empty() {
            write!(w, " ({})", self.insert_columns.join(","))?;
        }
        w.write_char(' ')?;

        let source = Builder {
            kind: StatementKind::Select,
            insert_values: Vec::new(),
            insert_columns: Vec::new(),
            ..self.clone()
        };
        source.write_to(w)
    }
}
