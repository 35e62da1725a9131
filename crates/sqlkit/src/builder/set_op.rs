use std::fmt::{self, Write as _};

use super::{Builder, StatementKind};
use crate::error::{SqlError, SqlResult};
use crate::writer::Writer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOperator {
    Union,
    Intersect,
    Except,
}

impl SetOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            SetOperator::Union => "UNION",
            SetOperator::Intersect => "INTERSECT",
            SetOperator::Except => "EXCEPT",
        }
    }
}

/// Duplicate handling of a set operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetQuantifier {
    All,
    Distinct,
}

impl SetQuantifier {
    pub fn as_str(self) -> &'static str {
        match self {
            SetQuantifier::All => "ALL",
            SetQuantifier::Distinct => "DISTINCT",
        }
    }
}

impl fmt::Display for SetOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SetQuantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A member statement and the operator joining it to the previous member.
/// The first member's operator is never rendered.
#[derive(Debug, Clone)]
pub(super) struct SetMember {
    operator: SetOperator,
    quantifier: Option<SetQuantifier>,
    builder: Builder,
}

impl Builder {
    /// Combine with `member` under `operator`.
    ///
    /// A builder that is not yet a set operation becomes the first member of
    /// a new host that takes over its dialect and projection. A member without
    /// a dialect takes the host's.
    pub fn set_operation(
        self,
        operator: SetOperator,
        quantifier: Option<SetQuantifier>,
        mut member: Builder,
    ) -> Builder {
        let mut host = if self.kind == StatementKind::SetOperation {
            self
        } else {
            let mut host = Builder {
                kind: StatementKind::SetOperation,
                dialect: self.dialect,
                columns: self.columns.clone(),
                ..Builder::default()
            };
            host.members.push(SetMember {
                operator,
                quantifier,
                builder: self,
            });
            host
        };

        if member.dialect.is_none() {
            member.dialect = host.dialect;
        }
        host.members.push(SetMember {
            operator,
            quantifier,
            builder: member,
        });
        host
    }

    pub fn union(self, member: Builder) -> Builder {
        self.set_operation(SetOperator::Union, None, member)
    }

    pub fn union_all(self, member: Builder) -> Builder {
        self.set_operation(SetOperator::Union, Some(SetQuantifier::All), member)
    }

    pub fn union_distinct(self, member: Builder) -> Builder {
        self.set_operation(SetOperator::Union, Some(SetQuantifier::Distinct), member)
    }

    pub fn intersect(self, member: Builder) -> Builder {
        self.set_operation(SetOperator::Intersect, None, member)
    }

    pub fn intersect_all(self, member: Builder) -> Builder {
        self.set_operation(SetOperator::Intersect, Some(SetQuantifier::All), member)
    }

    pub fn intersect_distinct(self, member: Builder) -> Builder {
        self.set_operation(
            SetOperator::Intersect,
            Some(SetQuantifier::Distinct),
            member,
        )
    }

    pub fn except(self, member: Builder) -> Builder {
        self.set_operation(SetOperator::Except, None, member)
    }

    pub fn except_all(self, member: Builder) -> Builder {
        self.set_operation(SetOperator::Except, Some(SetQuantifier::All), member)
    }

    pub fn except_distinct(self, member: Builder) -> Builder {
        self.set_operation(SetOperator::Except, Some(SetQuantifier::Distinct), member)
    }

    pub(super) fn write_set_operation(&self, w: &mut Writer) -> SqlResult<()> {
        if self.pagination.get().is_some()
            || self.cond.is_valid()
            || !self.order_by.is_empty()
            || !self.having.is_empty()
            || !self.group_by.is_empty()
        {
            return Err(SqlError::UnexpectedUnionConditions);
        }

        if let [only] = self.members.as_slice() {
            only.check_kind()?;
            return only.builder.write_to(w);
        }

        for (i, member) in self.members.iter().enumerate() {
            member.check_kind()?;
            if i > 0 {
                write!(w, " {}", member.operator)?;
                if let Some(quantifier) = member.quantifier {
                    write!(w, " {quantifier}")?;
                }
                w.write_char(' ')?;
            }
            w.write_char('(')?;
            member.builder.write_to(w)?;
            w.write_char(')')?;
        }
        Ok(())
    }
}

impl SetMember {
    fn check_kind(&self) -> SqlResult<()> {
        if self.builder.kind == StatementKind::Select {
            Ok(())
        } else {
            Err(SqlError::UnsupportedUnionMembers)
        }
    }
}
