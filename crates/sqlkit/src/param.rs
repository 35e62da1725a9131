//! Bound argument values and the ordered argument sink.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use uuid::Uuid;

/// A single argument bound to a `?` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    TimestampTz(DateTime<Utc>),
    Uuid(Uuid),
    Json(serde_json::Value),
    /// An argument passed by name, as MSSQL (`@p1`) and Oracle (`:p1`) expect.
    Named { name: String, value: Box<Param> },
}

impl Param {
    /// Wrap a value as a named argument.
    pub fn named(name: impl Into<String>, value: impl Into<Param>) -> Self {
        Param::Named {
            name: name.into(),
            value: Box::new(value.into()),
        }
    }

    /// Strip any `Named` wrappers.
    pub fn into_unnamed(self) -> Param {
        match self {
            Param::Named { value, .. } => value.into_unnamed(),
            other => other,
        }
    }

    /// Borrowing counterpart of [`Param::into_unnamed`].
    pub fn unnamed(&self) -> &Param {
        match self {
            Param::Named { value, .. } => value.unnamed(),
            other => other,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self.unnamed(), Param::Null)
    }

    /// Append this value as an SQL literal.
    ///
    /// Numbers and booleans are written verbatim, `Null` as `null`, everything
    /// else single-quoted with embedded quotes doubled. LIKE wildcards are left
    /// untouched.
    pub fn write_literal(&self, out: &mut String) {
        match self {
            Param::Null => out.push_str("null"),
            Param::Bool(v) => out.push_str(if *v { "true" } else { "false" }),
            Param::Int(v) => out.push_str(&v.to_string()),
            Param::UInt(v) => out.push_str(&v.to_string()),
            Param::Float(v) => out.push_str(&v.to_string()),
            Param::Text(v) => push_quoted(out, v),
            Param::Date(v) => push_quoted(out, &v.format("%Y-%m-%d").to_string()),
            Param::Timestamp(v) => {
                push_quoted(out, &v.format("%Y-%m-%d %H:%M:%S%.f").to_string())
            }
            Param::TimestampTz(v) => {
                push_quoted(out, &v.format("%Y-%m-%d %H:%M:%S%.f%:z").to_string())
            }
            Param::Uuid(v) => push_quoted(out, &v.to_string()),
            Param::Json(v) => push_quoted(out, &v.to_string()),
            Param::Named { value, .. } => value.write_literal(out),
        }
    }
}

fn push_quoted(out: &mut String, text: &str) {
    out.push('\'');
    for ch in text.chars() {
        if ch == '\'' {
            out.push('\'');
        }
        out.push(ch);
    }
    out.push('\'');
}

/// Implements `From<$ty> for $target` for scalar Rust types.
///
/// Shared with `Value` and the BETWEEN bound so every operand position accepts
/// the same plain Rust values.
macro_rules! impl_scalar_from {
    ($target:ty, $wrap:expr) => {
        impl_scalar_from!(@one $target, $wrap, i8, |v| $crate::Param::Int(i64::from(v)));
        impl_scalar_from!(@one $target, $wrap, i16, |v| $crate::Param::Int(i64::from(v)));
        impl_scalar_from!(@one $target, $wrap, i32, |v| $crate::Param::Int(i64::from(v)));
        impl_scalar_from!(@one $target, $wrap, i64, $crate::Param::Int);
        impl_scalar_from!(@one $target, $wrap, isize, |v| $crate::Param::Int(v as i64));
        impl_scalar_from!(@one $target, $wrap, u8, |v| $crate::Param::UInt(u64::from(v)));
        impl_scalar_from!(@one $target, $wrap, u16, |v| $crate::Param::UInt(u64::from(v)));
        impl_scalar_from!(@one $target, $wrap, u32, |v| $crate::Param::UInt(u64::from(v)));
        impl_scalar_from!(@one $target, $wrap, u64, $crate::Param::UInt);
        impl_scalar_from!(@one $target, $wrap, usize, |v| $crate::Param::UInt(v as u64));
        impl_scalar_from!(@one $target, $wrap, f32, |v| $crate::Param::Float(f64::from(v)));
        impl_scalar_from!(@one $target, $wrap, f64, $crate::Param::Float);
        impl_scalar_from!(@one $target, $wrap, bool, $crate::Param::Bool);
        impl_scalar_from!(@one $target, $wrap, String, $crate::Param::Text);
        impl_scalar_from!(@one $target, $wrap, &str, |v: &str| $crate::Param::Text(v.to_string()));
        impl_scalar_from!(@one $target, $wrap, &String, |v: &String| $crate::Param::Text(v.clone()));
        impl_scalar_from!(@one $target, $wrap, chrono::NaiveDate, $crate::Param::Date);
        impl_scalar_from!(@one $target, $wrap, chrono::NaiveDateTime, $crate::Param::Timestamp);
        impl_scalar_from!(@one $target, $wrap, chrono::DateTime<chrono::Utc>, $crate::Param::TimestampTz);
        impl_scalar_from!(@one $target, $wrap, uuid::Uuid, $crate::Param::Uuid);
        impl_scalar_from!(@one $target, $wrap, serde_json::Value, $crate::Param::Json);
    };
    (@one $target:ty, $wrap:expr, $ty:ty, $to_param:expr) => {
        impl From<$ty> for $target {
            #[allow(clippy::redundant_closure_call)]
            fn from(value: $ty) -> Self {
                let param: $crate::Param = ($to_param)(value);
                ($wrap)(param)
            }
        }
    };
}

pub(crate) use impl_scalar_from;

impl_scalar_from!(Param, |p: Param| p);

impl<T: Into<Param>> From<Option<T>> for Param {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Param::Null,
        }
    }
}

/// Ordered, append-only list of arguments.
///
/// After a statement renders, its length equals the number of `?`
/// placeholders in the text and the order matches emission order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParamList {
    params: Vec<Param>,
}

impl ParamList {
    /// Create a new empty parameter list.
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Add a value and return its 1-based index.
    pub fn push(&mut self, value: impl Into<Param>) -> usize {
        self.push_param(value.into())
    }

    /// Add a pre-built Param and return its 1-based index.
    pub fn push_param(&mut self, param: Param) -> usize {
        self.params.push(param);
        self.params.len()
    }

    /// Get the current parameter count.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn as_slice(&self) -> &[Param] {
        &self.params
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Param> {
        self.params.iter()
    }

    /// Extend this list with another list's parameters.
    pub fn extend(&mut self, other: ParamList) {
        self.params.extend(other.params);
    }

    /// Extend this list with parameters from an iterator.
    pub fn extend_params(&mut self, params: impl IntoIterator<Item = Param>) {
        self.params.extend(params);
    }

    pub fn into_vec(self) -> Vec<Param> {
        self.params
    }
}

impl From<Vec<Param>> for ParamList {
    fn from(params: Vec<Param>) -> Self {
        Self { params }
    }
}

impl IntoIterator for ParamList {
    type Item = Param;
    type IntoIter = std::vec::IntoIter<Param>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.into_iter()
    }
}
