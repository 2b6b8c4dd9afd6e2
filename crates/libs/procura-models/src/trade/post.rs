//! Seller post model (a product listing published by a seller).

use crate::prelude::*;
use crate::{db::connection::DbConnection, schema::posts::dsl::*};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i32,
    pub seller_id: Option<i32>,
    pub product_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, AsChangeset, PartialEq, Debug, Clone, Default, Deserialize)]
#[diesel(table_name = crate::schema::posts)]
#[serde(rename_all = "camelCase")]
pub struct PostChange {
    pub seller_id: Option<i32>,
    pub product_id: Option<i32>,
}

impl PostChange {
    /// True when no field is present; diesel rejects empty changesets.
    pub fn is_empty(&self) -> bool {
        self.seller_id.is_none() && self.product_id.is_none()
    }

    pub fn save(self, connection: &DbConnection) -> Result<Post> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::insert_into(posts)
            .values(self)
            .returning(Post::as_returning())
            .get_result(conn)?)
    }
}

impl Post {
    pub fn fetch_by_id(target: i32, connection: &DbConnection) -> Result<Option<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(posts
            .filter(id.eq(target))
            .select(Post::as_select())
            .first(conn)
            .optional()?)
    }

    pub fn fetch_by_product(target: i32, connection: &DbConnection) -> Result<Vec<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(posts
            .filter(product_id.eq(target))
            .select(Post::as_select())
            .load(conn)?)
    }

    pub fn fetch_by_seller(target: i32, connection: &DbConnection) -> Result<Vec<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(posts
            .filter(seller_id.eq(target))
            .select(Post::as_select())
            .load(conn)?)
    }

    pub fn update(
        target: i32,
        values: &PostChange,
        connection: &DbConnection,
    ) -> Result<Option<Self>> {
        if values.is_empty() {
            return Self::fetch_by_id(target, connection);
        }
        let conn = &mut connection.pool.get()?;

        Ok(diesel::update(posts.filter(id.eq(target)))
            .set(values)
            .returning(Post::as_returning())
            .get_result(conn)
            .optional()?)
    }

    pub fn delete(target: i32, connection: &DbConnection) -> Result<usize> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::delete(posts.filter(id.eq(target))).execute(conn)?)
    }
}
