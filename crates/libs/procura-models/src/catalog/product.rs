//! Product model.

use crate::prelude::*;
use crate::{db::connection::DbConnection, schema::products::dsl::*};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub quantity: Option<i32>,
    pub unit_price: Option<f64>,
    pub units_in_stock: Option<i32>,
    pub units_on_order: Option<i32>,
    pub picture: Option<String>,
    pub category_id: i32,
    pub disabled: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, PartialEq, Debug, Clone, Deserialize)]
#[diesel(table_name = crate::schema::products)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub quantity: Option<i32>,
    pub unit_price: Option<f64>,
    pub units_in_stock: Option<i32>,
    pub units_on_order: Option<i32>,
    pub picture: Option<String>,
    pub category_id: i32,
}

impl NewProduct {
    pub fn save(self, connection: &DbConnection) -> Result<Product> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::insert_into(products)
            .values(self)
            .returning(Product::as_returning())
            .get_result(conn)?)
    }
}

impl Product {
    pub fn fetch_by_id(target: i32, connection: &DbConnection) -> Result<Option<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(products
            .filter(id.eq(target))
            .select(Product::as_select())
            .first(conn)
            .optional()?)
    }

    pub fn fetch_by_category(target: i32, connection: &DbConnection) -> Result<Vec<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(products
            .filter(category_id.eq(target))
            .select(Product::as_select())
            .load(conn)?)
    }

    /// Products a seller has published, through their posts.
    pub fn fetch_by_seller(target: i32, connection: &DbConnection) -> Result<Vec<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(products
            .inner_join(crate::schema::posts::table)
            .filter(crate::schema::posts::seller_id.eq(target))
            .select(Product::as_select())
            .load(conn)?)
    }
}
