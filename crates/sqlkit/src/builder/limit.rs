//! Per-dialect pagination.
//!
//! MySQL, Postgres and SQLite append `LIMIT n [OFFSET o]`. Oracle and MSSQL
//! have no such clause, so the statement is wrapped in derived tables that
//! number the rows (`ROWNUM`, `ROW_NUMBER()`) and filter on that number.

use std::cell::Cell;
use std::fmt::Write as _;

use super::{Builder, StatementKind};
use crate::cond::{Gt, Lte};
use crate::dialect::{Dialect, PaginationStyle};
use crate::error::{SqlError, SqlResult};
use crate::writer::Writer;

const ROW_NUMBER: &str = "ROW_NUMBER() OVER (ORDER BY (SELECT 1)) AS RN";

/// Offset/limit of a SELECT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
}

impl Pagination {
    pub fn validate(&self) -> SqlResult<()> {
        if self.offset < 0 || self.limit <= 0 {
            return Err(SqlError::InvalidLimitation);
        }
        Ok(())
    }

    /// Position of the last row on the page (`offset + limit`), as the
    /// row-numbering dialects filter on it.
    pub fn end(&self) -> SqlResult<i64> {
        self.validate()?;
        self.offset
            .checked_add(self.limit)
            .ok_or(SqlError::InvalidLimitation)
    }
}

/// Takes the pagination out of a builder and puts it back on drop, so the
/// host renders unpaginated inside its own wrapper.
struct DetachedPagination<'a> {
    slot: &'a Cell<Option<Pagination>>,
    saved: Option<Pagination>,
}

impl<'a> DetachedPagination<'a> {
    fn new(slot: &'a Cell<Option<Pagination>>) -> Self {
        Self {
            saved: slot.take(),
            slot,
        }
    }
}

impl Drop for DetachedPagination<'_> {
    fn drop(&mut self) {
        self.slot.set(self.saved);
    }
}

/// Render `host` restricted to `page`, using the writer's dialect.
pub(super) fn write_paginated(host: &Builder, page: Pagination, w: &mut Writer) -> SqlResult<()> {
    let dialect = w.dialect().ok_or(SqlError::DialectNotSetUp)?;
    page.validate()?;

    let _detached = DetachedPagination::new(&host.pagination);
    match dialect.pagination_style() {
        PaginationStyle::LimitOffset => {
            host.write_to(w)?;
            if page.offset == 0 {
                write!(w, " LIMIT {}", page.limit)?;
            } else {
                write!(w, " LIMIT {} OFFSET {}", page.limit, page.offset)?;
            }
            Ok(())
        }
        PaginationStyle::RowNum => {
            row_num_window(host, page, page.end()?, dialect).write_to(w)
        }
        PaginationStyle::TopRowNumber => {
            top_window(host, page, page.end()?, dialect).write_to(w)
        }
    }
}

fn wrapper(dialect: Dialect, columns: &[String]) -> Builder {
    let columns: Vec<&str> = columns.iter().map(String::as_str).collect();
    Builder::new().with_dialect(dialect).select(&columns)
}

/// Oracle:
/// `SELECT cols FROM (SELECT cols,ROWNUM RN FROM ...) at WHERE at.RN<=?`, with
/// a second derived table filtering `RN>offset` when there is an offset.
fn row_num_window(host: &Builder, page: Pagination, end: i64, dialect: Dialect) -> Builder {
    let projection = host.projection();

    let ranked = if host.kind == StatementKind::SetOperation {
        Builder::new()
            .with_dialect(dialect)
            .select(&["at.*", "ROWNUM RN"])
            .from_sub(host.clone(), "at")
    } else {
        let mut ranked = host.clone();
        ranked.columns = projection.clone();
        ranked.columns.push("ROWNUM RN".to_string());
        ranked
    };

    if page.offset == 0 {
        return wrapper(dialect, &projection)
            .from_sub(ranked, "at")
            .and_where(Lte::new().with("at.RN", page.limit));
    }

    let window = Builder::new()
        .with_dialect(dialect)
        .select(&["*"])
        .from_sub(ranked, "at")
        .and_where(Lte::new().with("at.RN", end));
    wrapper(dialect, &projection)
        .from_sub(window, "att")
        .and_where(Gt::new().with("att.RN", page.offset))
}

/// MSSQL:
/// `SELECT cols FROM (SELECT TOP n cols,ROW_NUMBER() ... AS RN FROM ...) at`,
/// filtered on `at.RN>offset` when there is an offset.
fn top_window(host: &Builder, page: Pagination, end: i64, dialect: Dialect) -> Builder {
    let projection = host.projection();

    let ranked = if host.kind == StatementKind::SetOperation {
        let top = format!("TOP {end} *");
        Builder::new()
            .with_dialect(dialect)
            .select(&[top.as_str(), ROW_NUMBER])
            .from_sub(host.clone(), "at")
    } else {
        let mut ranked = host.clone();
        ranked.columns = projection.clone();
        if let Some(first) = ranked.columns.first_mut() {
            *first = format!("TOP {end} {first}");
        }
        ranked.columns.push(ROW_NUMBER.to_string());
        ranked
    };

    let outer = wrapper(dialect, &projection).from_sub(ranked, "at");
    if page.offset > 0 {
        outer.and_where(Gt::new().with("at.RN", page.offset))
    } else {
        outer
    }
}
