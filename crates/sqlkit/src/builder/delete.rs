use std::fmt::Write as _;

use super::Builder;
use crate::error::{SqlError, SqlResult};
use crate::writer::Writer;

impl Builder {
    /// `DELETE FROM t [WHERE ...]`
    pub(super) fn write_delete(&self, w: &mut Writer) -> SqlResult<()> {
        if self.from.is_empty() {
            return Err(SqlError::NoTableName);
        }

        write!(w, "DELETE FROM {}", self.from)?;
        if self.cond.is_valid() {
            w.write_str(" WHERE ")?;
            self.cond.write_to(w)?;
        }
        Ok(())
    }
}
