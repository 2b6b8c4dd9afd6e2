//! Service category model.

use crate::prelude::*;
use crate::{db::connection::DbConnection, schema::categories::dsl::*};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i32,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, AsChangeset, PartialEq, Debug, Clone, Deserialize)]
#[diesel(table_name = crate::schema::categories)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: Option<String>,
}

impl NewCategory {
    pub fn save(self, connection: &DbConnection) -> Result<Category> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::insert_into(categories)
            .values(self)
            .returning(Category::as_returning())
            .get_result(conn)?)
    }
}

impl Category {
    pub fn fetch_all(connection: &DbConnection) -> Result<Vec<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(categories.select(Category::as_select()).load(conn)?)
    }

    pub fn fetch_by_id(target: i32, connection: &DbConnection) -> Result<Option<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(categories
            .filter(id.eq(target))
            .select(Category::as_select())
            .first(conn)
            .optional()?)
    }

    pub fn fetch_by_name(target: &str, connection: &DbConnection) -> Result<Option<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(categories
            .filter(name.eq(target))
            .select(Category::as_select())
            .first(conn)
            .optional()?)
    }

    pub fn update(
        target: i32,
        values: &NewCategory,
        connection: &DbConnection,
    ) -> Result<Option<Self>> {
        // An absent name would form an empty changeset, which diesel rejects.
        if values.name.is_none() {
            return Self::fetch_by_id(target, connection);
        }
        let conn = &mut connection.pool.get()?;

        Ok(diesel::update(categories.filter(id.eq(target)))
            .set(values)
            .returning(Category::as_returning())
            .get_result(conn)
            .optional()?)
    }

    pub fn delete(target: i32, connection: &DbConnection) -> Result<usize> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::delete(categories.filter(id.eq(target))).execute(conn)?)
    }
}
