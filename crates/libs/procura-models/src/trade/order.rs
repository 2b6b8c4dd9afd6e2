//! Order model.

use crate::prelude::*;
use crate::{db::connection::DbConnection, schema::orders::dsl::*};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i32,
    pub item_quantity: Option<String>,
    pub invoice_amount: Option<f64>,
    pub transact_status: Option<String>,
    pub payment_date: Option<DateTime<Utc>>,
    pub buyer_id: Option<i32>,
    pub product_id: Option<i32>,
    pub order_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Insert and merge-patch payload for orders.
#[derive(Insertable, AsChangeset, PartialEq, Debug, Clone, Default, Deserialize)]
#[diesel(table_name = crate::schema::orders)]
#[serde(rename_all = "camelCase")]
pub struct OrderChange {
    pub item_quantity: Option<String>,
    pub invoice_amount: Option<f64>,
    pub transact_status: Option<String>,
    pub payment_date: Option<DateTime<Utc>>,
    pub buyer_id: Option<i32>,
    pub product_id: Option<i32>,
}

impl OrderChange {
    /// True when no field is present; diesel rejects empty changesets.
    pub fn is_empty(&self) -> bool {
        self.item_quantity.is_none()
            && self.invoice_amount.is_none()
            && self.transact_status.is_none()
            && self.payment_date.is_none()
            && self.buyer_id.is_none()
            && self.product_id.is_none()
    }

    pub fn save(self, connection: &DbConnection) -> Result<Order> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::insert_into(orders)
            .values(self)
            .returning(Order::as_returning())
            .get_result(conn)?)
    }
}

impl Order {
    pub fn fetch_by_id(target: i32, connection: &DbConnection) -> Result<Option<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(orders
            .filter(id.eq(target))
            .select(Order::as_select())
            .first(conn)
            .optional()?)
    }

    pub fn fetch_by_buyer(target: i32, connection: &DbConnection) -> Result<Vec<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(orders
            .filter(buyer_id.eq(target))
            .select(Order::as_select())
            .load(conn)?)
    }

    pub fn update(
        target: i32,
        values: &OrderChange,
        connection: &DbConnection,
    ) -> Result<Option<Self>> {
        if values.is_empty() {
            return Self::fetch_by_id(target, connection);
        }
        let conn = &mut connection.pool.get()?;

        Ok(diesel::update(orders.filter(id.eq(target)))
            .set(values)
            .returning(Order::as_returning())
            .get_result(conn)
            .optional()?)
    }

    pub fn delete(target: i32, connection: &DbConnection) -> Result<usize> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::delete(orders.filter(id.eq(target))).execute(conn)?)
    }
}
