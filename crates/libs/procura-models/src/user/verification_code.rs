//! Password-reset verification code records.
//!
//! One email accumulates many rows over time; only the newest row (highest
//! id) is ever consulted during validation, so older rows are inert without
//! being deleted.

use crate::prelude::*;
use crate::{db::connection::DbConnection, schema::verification_codes::dsl::*};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// A persisted verification code bound to an email address.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::verification_codes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct VerificationCode {
    pub id: i32,
    pub email: String,
    pub code: i32,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Data for persisting a freshly generated code.
#[derive(Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::verification_codes)]
pub struct NewVerificationCode {
    pub email: String,
    pub code: i32,
    pub expires_at: DateTime<Utc>,
}

impl NewVerificationCode {
    pub fn save(self, connection: &DbConnection) -> Result<VerificationCode> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::insert_into(verification_codes)
            .values(self)
            .returning(VerificationCode::as_returning())
            .get_result(conn)?)
    }
}

impl VerificationCode {
    /// Fetches the live code for an email: the most recently inserted row.
    pub fn latest_for_email(target: &str, connection: &DbConnection) -> Result<Option<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(verification_codes
            .filter(email.eq(target))
            .order(id.desc())
            .select(VerificationCode::as_select())
            .first(conn)
            .optional()?)
    }
}
