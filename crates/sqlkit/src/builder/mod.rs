//! The statement builder.
//!
//! A [`Builder`] describes one SELECT, INSERT, UPDATE, DELETE or set
//! operation. Methods take and return `self`; the last statement-defining
//! call (`select`, `insert`, `update`, `delete`, `union`, ...) decides the
//! kind, except that `select` on an INSERT builder supplies the rows of an
//! `INSERT ... SELECT`.
//!
//! ```
//! use sqlkit::{Param, eq, select};
//!
//! let (sql, args) = select(&["c", "d"])
//!     .from("table1")
//!     .and_where(eq! { "a" => 1 })
//!     .to_sql()
//!     .unwrap();
//! assert_eq!(sql, "SELECT c,d FROM table1 WHERE a=?");
//! assert_eq!(args, vec![Param::Int(1)]);
//! ```

mod delete;
mod insert;
mod join;
mod limit;
mod select;
mod set_op;
mod update;

#[cfg(test)]
mod tests;

use std::cell::Cell;

pub use join::{Join, JoinKind, JoinSource};
pub use limit::Pagination;
pub use set_op::{SetOperator, SetQuantifier};
pub use update::Assignment;

use crate::cond::{Cond, Eq, Value};
use crate::convert::convert_placeholder;
use crate::dialect::Dialect;
use crate::error::{SqlError, SqlResult};
use crate::param::Param;
use crate::traits::BuildSql;
use crate::writer::Writer;

use set_op::SetMember;

/// What a [`Builder`] renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatementKind {
    /// Nothing configured yet (a bare `dialect(..)` builder).
    #[default]
    Condition,
    Select,
    Insert,
    Update,
    Delete,
    SetOperation,
}

/// Builder for a single SQL statement.
#[derive(Debug, Clone, Default)]
pub struct Builder {
    kind: StatementKind,
    dialect: Option<Dialect>,

    columns: Vec<String>,
    from: String,
    sub_query: Option<Box<Builder>>,
    nested: bool,
    joins: Vec<Join>,
    cond: Cond,
    group_by: String,
    having: String,
    order_by: String,
    // Detached while the pagination rewriter renders this builder.
    pagination: Cell<Option<Pagination>>,

    into: String,
    insert_values: Vec<(String, Value)>,
    insert_columns: Vec<String>,

    assignments: Vec<Assignment>,

    members: Vec<SetMember>,
}

// ====== constructors ======

/// Start a SELECT. An empty column list selects `*`.
pub fn select(columns: &[&str]) -> Builder {
    Builder::new().select(columns)
}

/// Start an INSERT of column/value pairs.
pub fn insert(values: impl Into<Eq>) -> Builder {
    Builder::new().insert(values)
}

/// Start an `INSERT INTO t (columns) SELECT ...`.
pub fn insert_columns(columns: &[&str]) -> Builder {
    Builder::new().insert_columns(columns)
}

/// Start an UPDATE with one assignment; chain `.update(..)` for more.
pub fn update(assignment: impl Into<Assignment>) -> Builder {
    Builder::new().update(assignment)
}

/// Start a DELETE filtered by `cond`.
pub fn delete(cond: impl Into<Cond>) -> Builder {
    Builder::new().delete(cond)
}

/// A builder bound to `dialect`.
pub fn dialect(dialect: Dialect) -> Builder {
    Builder::new().with_dialect(dialect)
}

pub fn mysql() -> Builder {
    dialect(Dialect::Mysql)
}

pub fn postgres() -> Builder {
    dialect(Dialect::Postgres)
}

pub fn sqlite() -> Builder {
    dialect(Dialect::Sqlite)
}

pub fn mssql() -> Builder {
    dialect(Dialect::Mssql)
}

pub fn oracle() -> Builder {
    dialect(Dialect::Oracle)
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = Some(dialect);
        self
    }

    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    pub fn dialect(&self) -> Option<Dialect> {
        self.dialect
    }

    pub fn pagination(&self) -> Option<Pagination> {
        self.pagination.get()
    }

    pub fn cond(&self) -> &Cond {
        &self.cond
    }

    // ====== statement kinds ======

    /// Set the projection and make this a SELECT.
    ///
    /// On an INSERT builder the statement stays an INSERT and the projection
    /// belongs to its `INSERT ... SELECT` source.
    pub fn select(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|c| c.to_string()).collect();
        if self.kind != StatementKind::Insert {
            self.kind = StatementKind::Select;
        }
        self
    }

    /// Add column/value pairs to an INSERT. Columns render sorted. Once a
    /// SELECT source is set with `from` or `from_sub`, the values are ignored.
    pub fn insert(mut self, values: impl Into<Eq>) -> Self {
        let values: Eq = values.into();
        self.insert_values.extend(
            values
                .iter()
                .map(|(column, value)| (column.to_string(), value.clone())),
        );
        self.insert_values.sort_by(|a, b| a.0.cmp(&b.0));
        self.kind = StatementKind::Insert;
        self
    }

    /// Target columns of an `INSERT ... SELECT`.
    pub fn insert_columns(mut self, columns: &[&str]) -> Self {
        self.insert_columns = columns.iter().map(|c| c.to_string()).collect();
        self.kind = StatementKind::Insert;
        self
    }

    /// Add an assignment to an UPDATE. Invalid assignments are dropped.
    pub fn update(mut self, assignment: impl Into<Assignment>) -> Self {
        let assignment = assignment.into();
        if assignment.is_valid() {
            self.assignments.push(assignment);
        }
        self.kind = StatementKind::Update;
        self
    }

    /// Make this a DELETE, AND-ing `cond` into the filter.
    pub fn delete(mut self, cond: impl Into<Cond>) -> Self {
        self.cond = std::mem::take(&mut self.cond).and(cond);
        self.kind = StatementKind::Delete;
        self
    }

    // ====== sources ======

    /// Source (SELECT / DELETE / UPDATE) table. On an INSERT it turns the
    /// statement into `INSERT ... SELECT`, taking precedence over values.
    pub fn from(mut self, table: impl Into<String>) -> Self {
        self.from = table.into();
        self.sub_query = None;
        self.nested = false;
        self
    }

    /// Source table with an alias: `FROM table alias`.
    pub fn from_as(self, table: &str, alias: &str) -> Self {
        self.from(format!("{table} {alias}"))
    }

    /// Read from a derived table named `alias`.
    pub fn from_sub(mut self, sub: Builder, alias: impl Into<String>) -> Self {
        self.sub_query = Some(Box::new(sub));
        self.from = alias.into();
        self.nested = false;
        self
    }

    /// Read from a derived table without an alias.
    ///
    /// Rendering fails with [`SqlError::UnnamedDerivedTable`] if this
    /// statement also has a WHERE condition.
    pub fn from_nested(mut self, sub: Builder) -> Self {
        self.sub_query = Some(Box::new(sub));
        self.from.clear();
        self.nested = true;
        self
    }

    /// INSERT target table.
    pub fn into_table(mut self, table: impl Into<String>) -> Self {
        self.into = table.into();
        self
    }

    // ====== filtering and shaping ======

    /// AND `cond` into the WHERE condition.
    pub fn and_where(mut self, cond: impl Into<Cond>) -> Self {
        self.cond = std::mem::take(&mut self.cond).and(cond);
        self
    }

    /// OR `cond` into the WHERE condition.
    pub fn or_where(mut self, cond: impl Into<Cond>) -> Self {
        self.cond = std::mem::take(&mut self.cond).or(cond);
        self
    }

    pub fn group_by(mut self, group_by: impl Into<String>) -> Self {
        self.group_by = group_by.into();
        self
    }

    pub fn having(mut self, having: impl Into<String>) -> Self {
        self.having = having.into();
        self
    }

    pub fn order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = order_by.into();
        self
    }

    /// First `limit` rows.
    pub fn limit(self, limit: i64) -> Self {
        self.limit_offset(limit, 0)
    }

    /// `limit` rows after skipping `offset`. Validated at render time.
    pub fn limit_offset(self, limit: i64, offset: i64) -> Self {
        self.pagination.set(Some(Pagination { limit, offset }));
        self
    }

    // ====== rendering ======

    /// Text with dialect placeholders (`?`, `$n`, `@pn`, `:pn`) and the
    /// arguments, named `pn` for MSSQL and Oracle.
    pub fn to_sql(&self) -> SqlResult<(String, Vec<Param>)> {
        let result = self.render().map(|w| self.finish(w));
        self.trace(result.as_ref().map(|(sql, args)| (sql.as_str(), args.len())));
        result
    }

    /// The statement with every argument inlined as a literal.
    pub fn to_bound_sql(&self) -> SqlResult<String> {
        let result = self.render().and_then(|w| inline(&w));
        self.trace(result.as_ref().map(|(sql, n)| (sql.as_str(), *n)));
        result.map(|(sql, _)| sql)
    }

    /// Render into `w`, inheriting the writer's dialect when this builder has
    /// none.
    pub fn write_to(&self, w: &mut Writer) -> SqlResult<()> {
        let outer = w.dialect();
        if let Some(own) = self.dialect {
            if outer.is_some_and(|outer| outer != own) {
                return Err(SqlError::InconsistentDialect);
            }
            w.pin_dialect(own)?;
        }

        let previous = w.swap_dialect(self.dialect.or(outer));
        let result = match self.kind {
            StatementKind::Condition => Err(SqlError::UnsupportedType),
            StatementKind::Select => self.write_select(w),
            StatementKind::Insert => self.write_insert(w),
            StatementKind::Update => self.write_update(w),
            StatementKind::Delete => self.write_delete(w),
            StatementKind::SetOperation => self.write_set_operation(w),
        };
        w.swap_dialect(previous);
        result
    }

    /// Render a SELECT or set operation with an explicit page, ignoring any
    /// stored pagination. This is how a set operation gets paginated.
    pub fn to_sql_paginated(&self, limit: i64, offset: i64) -> SqlResult<(String, Vec<Param>)> {
        let result = self
            .render_paginated(Pagination { limit, offset })
            .map(|w| self.finish(w));
        self.trace(result.as_ref().map(|(sql, args)| (sql.as_str(), args.len())));
        result
    }

    /// Literal-inlined counterpart of [`Builder::to_sql_paginated`].
    pub fn to_bound_sql_paginated(&self, limit: i64, offset: i64) -> SqlResult<String> {
        let result = self
            .render_paginated(Pagination { limit, offset })
            .and_then(|w| inline(&w));
        self.trace(result.as_ref().map(|(sql, n)| (sql.as_str(), *n)));
        result.map(|(sql, _)| sql)
    }

    fn render_paginated(&self, page: Pagination) -> SqlResult<Writer> {
        if !matches!(
            self.kind,
            StatementKind::Select | StatementKind::SetOperation
        ) {
            return Err(SqlError::UnsupportedType);
        }
        let mut w = Writer::new();
        w.swap_dialect(self.dialect);
        limit::write_paginated(self, page, &mut w)?;
        Ok(w)
    }

    fn render(&self) -> SqlResult<Writer> {
        let mut w = Writer::new();
        self.write_to(&mut w)?;
        Ok(w)
    }

    /// Rewrite placeholders and arguments for this builder's dialect.
    fn finish(&self, w: Writer) -> (String, Vec<Param>) {
        let (sql, args) = w.into_parts();
        let args: Vec<Param> = args.into_iter().map(Param::into_unnamed).collect();

        let Some(dialect) = self.dialect else {
            return (sql, args);
        };
        let Some(prefix) = dialect.placeholder_prefix() else {
            return (sql, args);
        };

        let sql = convert_placeholder(&sql, prefix);
        if !dialect.uses_named_args() {
            return (sql, args);
        }
        let args = args
            .into_iter()
            .enumerate()
            .map(|(i, arg)| Param::named(format!("p{}", i + 1), arg))
            .collect();
        (sql, args)
    }

    #[cfg(feature = "tracing")]
    fn trace(&self, outcome: Result<(&str, usize), &SqlError>) {
        match outcome {
            Ok((sql, param_count)) => {
                crate::trace::rendered(self.kind, self.dialect, sql, param_count)
            }
            Err(error) => crate::trace::failed(self.kind, self.dialect, error),
        }
    }

    #[cfg(not(feature = "tracing"))]
    fn trace(&self, _outcome: Result<(&str, usize), &SqlError>) {}
}

/// Inlined text and the number of arguments that went into it.
fn inline(w: &Writer) -> SqlResult<(String, usize)> {
    Ok((w.to_bound_sql()?, w.args().len()))
}

impl BuildSql for Builder {
    fn to_sql(&self) -> SqlResult<(String, Vec<Param>)> {
        Builder::to_sql(self)
    }

    fn to_bound_sql(&self) -> SqlResult<String> {
        Builder::to_bound_sql(self)
    }
}
