//! Country reference data.

use crate::prelude::*;
use crate::{db::connection::DbConnection, schema::countries::dsl::*};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::countries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Country {
    pub fn fetch_by_id(target: i32, connection: &DbConnection) -> Result<Option<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(countries
            .filter(id.eq(target))
            .select(Country::as_select())
            .first(conn)
            .optional()?)
    }
}
