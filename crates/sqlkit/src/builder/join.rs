use std::fmt::{self, Write as _};

use super::Builder;
use crate::cond::Cond;
use crate::error::SqlResult;
use crate::writer::Writer;

/// Join type keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

impl JoinKind {
    pub fn as_str(self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER",
            JoinKind::Left => "LEFT",
            JoinKind::Right => "RIGHT",
            JoinKind::Full => "FULL",
            JoinKind::Cross => "CROSS",
        }
    }
}

impl fmt::Display for JoinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What gets joined: a table expression or a nested SELECT.
#[derive(Debug, Clone)]
pub enum JoinSource {
    Table(String),
    Query {
        builder: Box<Builder>,
        alias: Option<String>,
    },
}

impl JoinSource {
    /// A nested statement joined as `(...) alias`.
    pub fn aliased(builder: Builder, alias: impl Into<String>) -> Self {
        JoinSource::Query {
            builder: Box::new(builder),
            alias: Some(alias.into()),
        }
    }
}

impl From<&str> for JoinSource {
    fn from(table: &str) -> Self {
        JoinSource::Table(table.to_string())
    }
}

impl From<String> for JoinSource {
    fn from(table: String) -> Self {
        JoinSource::Table(table)
    }
}

impl From<Builder> for JoinSource {
    fn from(builder: Builder) -> Self {
        JoinSource::Query {
            builder: Box::new(builder),
            alias: None,
        }
    }
}

/// One `KIND JOIN source ON cond` clause.
#[derive(Debug, Clone)]
pub struct Join {
    kind: JoinKind,
    source: JoinSource,
    on: Cond,
}

impl Join {
    pub fn new(kind: JoinKind, source: impl Into<JoinSource>, on: impl Into<Cond>) -> Self {
        Self {
            kind,
            source: source.into(),
            on: on.into(),
        }
    }

    pub fn kind(&self) -> JoinKind {
        self.kind
    }

    /// ` KIND JOIN source ON cond`; the `ON` part is omitted for an invalid
    /// condition.
    pub(super) fn write_to(&self, w: &mut Writer) -> SqlResult<()> {
        match &self.source {
            JoinSource::Table(table) => write!(w, " {} JOIN {}", self.kind, table)?,
            JoinSource::Query { builder, alias } => {
                write!(w, " {} JOIN (", self.kind)?;
                builder.write_to(w)?;
                w.write_char(')')?;
                if let Some(alias) = alias {
                    write!(w, " {alias}")?;
                }
            }
        }

        if self.on.is_valid() {
            w.write_str(" ON ")?;
            self.on.write_to(w)?;
        }
        Ok(())
    }
}

impl Builder {
    /// Add a join. A `&str` condition is taken as raw SQL.
    pub fn join(
        mut self,
        kind: JoinKind,
        source: impl Into<JoinSource>,
        on: impl Into<Cond>,
    ) -> Self {
        self.joins.push(Join::new(kind, source, on));
        self
    }

    pub fn inner_join(self, source: impl Into<JoinSource>, on: impl Into<Cond>) -> Self {
        self.join(JoinKind::Inner, source, on)
    }

    pub fn left_join(self, source: impl Into<JoinSource>, on: impl Into<Cond>) -> Self {
        self.join(JoinKind::Left, source, on)
    }

    pub fn right_join(self, source: impl Into<JoinSource>, on: impl Into<Cond>) -> Self {
        self.join(JoinKind::Right, source, on)
    }

    pub fn full_join(self, source: impl Into<JoinSource>, on: impl Into<Cond>) -> Self {
        self.join(JoinKind::Full, source, on)
    }

    pub fn cross_join(self, source: impl Into<JoinSource>, on: impl Into<Cond>) -> Self {
        self.join(JoinKind::Cross, source, on)
    }

    pub fn joins(&self) -> &[Join] {
        &self.joins
    }
}
