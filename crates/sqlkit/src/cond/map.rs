//! Column → value conditions: `Eq`, `Neq`, `Lt`, `Lte`, `Gt`, `Gte`.
//!
//! Entries are kept in a `BTreeMap`, so rendering is sorted by column and does
//! not depend on insertion order.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::cond::Cond;
use crate::cond::in_list::write_list;
use crate::cond::value::Value;
use crate::error::{SqlError, SqlResult};
use crate::writer::Writer;

macro_rules! column_map {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name(BTreeMap<String, Value>);

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            /// Add (or replace) an entry.
            pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
                self.0.insert(column.into(), value.into());
                self
            }

            pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
                self.0.insert(column.into(), value.into())
            }

            pub fn get(&self, column: &str) -> Option<&Value> {
                self.0.get(column)
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn is_valid(&self) -> bool {
                !self.0.is_empty()
            }

            /// Entries in column order.
            pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
                self.0.iter().map(|(k, v)| (k.as_str(), v))
            }

            pub fn and(self, other: impl Into<Cond>) -> Cond {
                Cond::from(self).and(other)
            }

            pub fn or(self, other: impl Into<Cond>) -> Cond {
                Cond::from(self).or(other)
            }
        }

        impl From<$name> for Cond {
            fn from(map: $name) -> Self {
                Cond::$name(map)
            }
        }

        impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for $name {
            fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
                Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
            }
        }

        impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for $name {
            fn from(entries: [(K, V); N]) -> Self {
                entries.into_iter().collect()
            }
        }
    };
}

column_map!(
    /// `col=?` for every entry, joined with `AND`.
    ///
    /// Lists become `IN`, `Incr`/`Decr` become `col=col+?` / `col=col-?` and
    /// `Null` becomes `col=null`. The same entries render UPDATE assignments
    /// when joined with `,`.
    Eq
);
column_map!(
    /// `col<>?` for every entry; lists become `NOT IN`.
    Neq
);
column_map!(
    /// `col<?`
    Lt
);
column_map!(
    /// `col<=?`
    Lte
);
column_map!(
    /// `col>?`
    Gt
);
column_map!(
    /// `col>=?`
    Gte
);

impl Eq {
    pub fn write_to(&self, w: &mut Writer) -> SqlResult<()> {
        self.write_with(w, " AND ")
    }

    /// Render the entries joined by `sep` (`,` inside `UPDATE ... SET`).
    pub fn write_with(&self, w: &mut Writer, sep: &str) -> SqlResult<()> {
        for (i, (col, value)) in self.0.iter().enumerate() {
            if i > 0 {
                w.write_str(sep)?;
            }
            match value {
                Value::List(items) => write_list(w, col, items, false)?,
                Value::Expr(expr) => {
                    write!(w, "{col}=(")?;
                    expr.write_to(w)?;
                    w.write_char(')')?;
                }
                Value::Statement(builder) => {
                    write!(w, "{col}=(")?;
                    builder.write_to(w)?;
                    w.write_char(')')?;
                }
                Value::Incr(n) => {
                    write!(w, "{col}={col}+?")?;
                    w.append(*n);
                }
                Value::Decr(n) => {
                    write!(w, "{col}={col}-?")?;
                    w.append(*n);
                }
                Value::Param(p) if p.is_null() => write!(w, "{col}=null")?,
                Value::Param(p) => {
                    write!(w, "{col}=?")?;
                    w.append(p.clone());
                }
            }
        }
        Ok(())
    }
}

impl Neq {
    pub fn write_to(&self, w: &mut Writer) -> SqlResult<()> {
        write_comparison(&self.0, w, "<>", ListForm::NotIn)
    }
}

impl Lt {
    pub fn write_to(&self, w: &mut Writer) -> SqlResult<()> {
        write_comparison(&self.0, w, "<", ListForm::Reject)
    }
}

impl Lte {
    pub fn write_to(&self, w: &mut Writer) -> SqlResult<()> {
        write_comparison(&self.0, w, "<=", ListForm::Reject)
    }
}

impl Gt {
    pub fn write_to(&self, w: &mut Writer) -> SqlResult<()> {
        write_comparison(&self.0, w, ">", ListForm::Reject)
    }
}

impl Gte {
    pub fn write_to(&self, w: &mut Writer) -> SqlResult<()> {
        write_comparison(&self.0, w, ">=", ListForm::Reject)
    }
}

#[derive(Clone, Copy)]
enum ListForm {
    NotIn,
    Reject,
}

fn write_comparison(
    entries: &BTreeMap<String, Value>,
    w: &mut Writer,
    op: &str,
    lists: ListForm,
) -> SqlResult<()> {
    for (i, (col, value)) in entries.iter().enumerate() {
        if i > 0 {
            w.write_str(" AND ")?;
        }
        match value {
            Value::List(items) => match lists {
                ListForm::NotIn => write_list(w, col, items, true)?,
                ListForm::Reject => return Err(SqlError::unsupported_value(col.as_str())),
            },
            Value::Expr(expr) => {
                write!(w, "{col}{op}(")?;
                expr.write_to(w)?;
                w.write_char(')')?;
            }
            Value::Statement(builder) => {
                write!(w, "{col}{op}(")?;
                builder.write_to(w)?;
                w.write_char(')')?;
            }
            Value::Incr(n) | Value::Decr(n) => {
                write!(w, "{col}{op}?")?;
                w.append(*n);
            }
            Value::Param(p) => {
                write!(w, "{col}{op}?")?;
                w.append(p.clone());
            }
        }
    }
    Ok(())
}
