//! # sqlkit
//!
//! A composable SQL statement builder for MySQL, Postgres, SQLite, MSSQL and
//! Oracle.
//!
//! ## Features
//!
//! - **Typed conditions**: `Eq`, `Neq`, `Lt`, `In`, `Like`, `Between`, `Not`,
//!   `And`, `Or`, raw `Expr` and conditional branches, all composable
//! - **Deterministic output**: key/value conditions render sorted by column
//! - **Two renderings**: text with placeholders plus arguments, or literal-inlined
//!   "bound" SQL for logs
//! - **Dialect placeholders**: `?`, `$n`, `@pn`, `:pn`
//! - **Pagination everywhere**: `LIMIT/OFFSET`, or `ROWNUM` / `ROW_NUMBER()`
//!   derived tables where the dialect has no `LIMIT`
//!
//! ## Example
//!
//! ```
//! use sqlkit::{Incr, eq, lt, postgres, update};
//!
//! let (sql, args) = postgres()
//!     .select(&["id", "name"])
//!     .from("users")
//!     .and_where(eq! { "status" => "active" }.and(lt! { "age" => 30 }))
//!     .order_by("id")
//!     .limit_offset(10, 20)
//!     .to_sql()
//!     .unwrap();
//! assert_eq!(
//!     sql,
//!     "SELECT id,name FROM users WHERE status=$1 AND age<$2 ORDER BY id LIMIT 10 OFFSET 20"
//! );
//! assert_eq!(args.len(), 2);
//!
//! let bound = update(eq! { "visits" => Incr(1) })
//!     .from("users")
//!     .and_where(eq! { "id" => 7 })
//!     .to_bound_sql()
//!     .unwrap();
//! assert_eq!(bound, "UPDATE users SET visits=visits+1 WHERE id=7");
//! ```

#[macro_use]
mod macros;

pub mod builder;
pub mod cond;
pub mod convert;
pub mod dialect;
pub mod error;
pub mod param;
pub mod traits;
pub mod writer;

#[cfg(feature = "postgres")]
mod postgres;
#[cfg(feature = "tracing")]
mod trace;

pub use builder::{
    Assignment, Builder, Join, JoinKind, JoinSource, Pagination, SetOperator, SetQuantifier,
    StatementKind, delete, dialect, insert, insert_columns, mssql, mysql, oracle, postgres,
    select, sqlite, update,
};
pub use cond::{
    Between, Bound, Cond, Decr, Eq, Expr, Gt, Gte, In, InSource, Incr, IsNull, Like, Lt, Lte, Neq,
    NotIn, NotNull, Value, and, between, expr, in_list, is_null, like, not, not_in, not_null, or,
    when, when_else,
};
pub use convert::{convert_placeholder, convert_to_bound_sql};
pub use dialect::{Dialect, PaginationStyle};
pub use error::{SqlError, SqlResult};
pub use param::{Param, ParamList};
pub use traits::{BuildSql, to_bound_sql, to_sql};
pub use writer::Writer;
