//! tokio-postgres binding for [`Param`].
//!
//! With the `postgres` feature, a statement rendered for
//! [`Dialect::Postgres`](crate::Dialect::Postgres) can be executed directly:
//!
//! ```ignore
//! let (sql, args) = sqlkit::postgres().select(&["id"]).from("users")
//!     .and_where(sqlkit::eq! { "status" => "active" })
//!     .to_sql()?;
//! let params = sqlkit::ParamList::from(args);
//! let rows = client.query(&sql, &params.as_refs()).await?;
//! ```

use std::error::Error;

use bytes::BytesMut;
use tokio_postgres::types::{IsNull, ToSql, Type};

use crate::param::{Param, ParamList};

impl ToSql for Param {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        match self {
            Param::Null => Ok(IsNull::Yes),
            Param::Bool(v) => v.to_sql_checked(ty, out),
            Param::Int(v) => int_to_sql(*v, ty, out),
            Param::UInt(v) => int_to_sql(i64::try_from(*v)?, ty, out),
            Param::Float(v) => {
                if *ty == Type::FLOAT4 {
                    (*v as f32).to_sql_checked(ty, out)
                } else {
                    v.to_sql_checked(ty, out)
                }
            }
            Param::Text(v) => v.to_sql_checked(ty, out),
            Param::Date(v) => v.to_sql_checked(ty, out),
            Param::Timestamp(v) => v.to_sql_checked(ty, out),
            Param::TimestampTz(v) => v.to_sql_checked(ty, out),
            Param::Uuid(v) => v.to_sql_checked(ty, out),
            Param::Json(v) => v.to_sql_checked(ty, out),
            Param::Named { value, .. } => (**value).to_sql_checked(ty, out),
        }
    }

    // Variants check the column type against their own encoder.
    fn accepts(_ty: &Type) -> bool {
        true
    }

    tokio_postgres::types::to_sql_checked!();
}

fn int_to_sql(
    value: i64,
    ty: &Type,
    out: &mut BytesMut,
) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
    match *ty {
        Type::INT2 => i16::try_from(value)?.to_sql_checked(ty, out),
        Type::INT4 => i32::try_from(value)?.to_sql_checked(ty, out),
        _ => value.to_sql_checked(ty, out),
    }
}

impl ParamList {
    /// Get all parameters as references for tokio-postgres.
    pub fn as_refs(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.iter().map(|p| p as &(dyn ToSql + Sync)).collect()
    }
}
