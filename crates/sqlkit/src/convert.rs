//! Placeholder rewriting and literal inlining.

use crate::error::{SqlError, SqlResult};
use crate::param::Param;

/// Replace every `?` outside single-quoted literals with `prefix` followed by
/// its 1-based index.
///
/// A quote preceded by a backslash does not open or close a literal.
///
/// ```
/// assert_eq!(
///     sqlkit::convert_placeholder("a=? AND b='?' AND c=?", "$"),
///     "a=$1 AND b='?' AND c=$2"
/// );
/// ```
pub fn convert_placeholder(sql: &str, prefix: &str) -> String {
    let mut out = String::with_capacity(sql.len() + sql.len() / 4);
    let mut in_literal = false;
    let mut index = 0usize;
    let mut prev: Option<char> = None;

    for ch in sql.chars() {
        match ch {
            '\'' if prev != Some('\\') => {
                in_literal = !in_literal;
                out.push(ch);
            }
            '?' if !in_literal => {
                index += 1;
                out.push_str(prefix);
                out.push_str(&index.to_string());
            }
            _ => out.push(ch),
        }
        prev = Some(ch);
    }
    out
}

/// Inline `args` into the `?` placeholders of `sql`.
///
/// Named arguments are unwrapped. Surplus arguments are ignored; running out
/// of arguments fails with [`SqlError::NeedMoreArguments`].
pub fn convert_to_bound_sql(sql: &str, args: &[Param]) -> SqlResult<String> {
    let mut out = String::with_capacity(sql.len() + args.len() * 8);
    let mut args = args.iter();

    for ch in sql.chars() {
        if ch == '?' {
            let arg = args.next().ok_or(SqlError::NeedMoreArguments)?;
            arg.write_literal(&mut out);
        } else {
            out.push(ch);
        }
    }
    Ok(out)
}
