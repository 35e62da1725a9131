//! Literal-style constructors for conditions.

/// Build an [`Eq`](crate::Eq) from `column => value` pairs.
///
/// ```
/// let cond = sqlkit::eq! { "a" => 1, "b" => "x" };
/// assert_eq!(cond.len(), 2);
/// ```
#[macro_export]
macro_rules! eq {
    ($($col:expr => $val:expr),* $(,)?) => {
        $crate::Eq::new()$(.with($col, $val))*
    };
}

/// Build a [`Neq`](crate::Neq) from `column => value` pairs.
#[macro_export]
macro_rules! neq {
    ($($col:expr => $val:expr),* $(,)?) => {
        $crate::Neq::new()$(.with($col, $val))*
    };
}

/// Build an [`Lt`](crate::Lt) from `column => value` pairs.
#[macro_export]
macro_rules! lt {
    ($($col:expr => $val:expr),* $(,)?) => {
        $crate::Lt::new()$(.with($col, $val))*
    };
}

/// Build an [`Lte`](crate::Lte) from `column => value` pairs.
#[macro_export]
macro_rules! lte {
    ($($col:expr => $val:expr),* $(,)?) => {
        $crate::Lte::new()$(.with($col, $val))*
    };
}

/// Build a [`Gt`](crate::Gt) from `column => value` pairs.
#[macro_export]
macro_rules! gt {
    ($($col:expr => $val:expr),* $(,)?) => {
        $crate::Gt::new()$(.with($col, $val))*
    };
}

/// Build a [`Gte`](crate::Gte) from `column => value` pairs.
#[macro_export]
macro_rules! gte {
    ($($col:expr => $val:expr),* $(,)?) => {
        $crate::Gte::new()$(.with($col, $val))*
    };
}

/// Conjunction of heterogeneous conditions; invalid members are dropped.
///
/// ```
/// use sqlkit::{and, eq, like};
///
/// let cond = and![eq! { "a" => 1 }, like("name", "cat")];
/// assert_eq!(cond.to_bound_sql().unwrap(), "a=1 AND name LIKE '%cat%'");
/// ```
#[macro_export]
macro_rules! and {
    ($($cond:expr),* $(,)?) => {
        $crate::and([$($crate::Cond::from($cond)),*])
    };
}

/// Disjunction of heterogeneous conditions; invalid members are dropped.
#[macro_export]
macro_rules! or {
    ($($cond:expr),* $(,)?) => {
        $crate::or([$($crate::Cond::from($cond)),*])
    };
}
