//! Address model.

use crate::geo::country::Country;
use crate::prelude::*;
use crate::{db::connection::DbConnection, schema::addresses::dsl::*};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::addresses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: i32,
    pub district: Option<String>,
    pub country_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, AsChangeset, PartialEq, Debug, Clone, Deserialize)]
#[diesel(table_name = crate::schema::addresses)]
#[serde(rename_all = "camelCase")]
pub struct NewAddress {
    pub district: Option<String>,
    pub country_id: i32,
}

impl NewAddress {
    pub fn save(self, connection: &DbConnection) -> Result<Address> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::insert_into(addresses)
            .values(self)
            .returning(Address::as_returning())
            .get_result(conn)?)
    }
}

impl Address {
    pub fn fetch_all(connection: &DbConnection) -> Result<Vec<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(addresses.select(Address::as_select()).load(conn)?)
    }

    pub fn fetch_by_id(target: i32, connection: &DbConnection) -> Result<Option<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(addresses
            .filter(id.eq(target))
            .select(Address::as_select())
            .first(conn)
            .optional()?)
    }

    /// Fetches an address together with its country.
    pub fn fetch_with_country(
        target: i32,
        connection: &DbConnection,
    ) -> Result<Option<(Self, Country)>> {
        let conn = &mut connection.pool.get()?;

        Ok(addresses
            .inner_join(crate::schema::countries::table)
            .filter(id.eq(target))
            .select((Address::as_select(), Country::as_select()))
            .first(conn)
            .optional()?)
    }

    pub fn update(target: i32, values: &NewAddress, connection: &DbConnection) -> Result<Option<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::update(addresses.filter(id.eq(target)))
            .set(values)
            .returning(Address::as_returning())
            .get_result(conn)
            .optional()?)
    }

    pub fn delete(target: i32, connection: &DbConnection) -> Result<usize> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::delete(addresses.filter(id.eq(target))).execute(conn)?)
    }
}
