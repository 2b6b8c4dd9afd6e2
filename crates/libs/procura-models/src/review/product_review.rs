//! Product review model.

use crate::prelude::*;
use crate::{db::connection::DbConnection, schema::product_reviews::dsl::*};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::product_reviews)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct ProductReview {
    pub id: i32,
    pub product_id: Option<i32>,
    pub customer_id: Option<i32>,
    pub customer_review: Option<i32>,
    pub rating: Option<i32>,
    pub has_rating: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, PartialEq, Debug, Clone, Deserialize)]
#[diesel(table_name = crate::schema::product_reviews)]
#[serde(rename_all = "camelCase")]
pub struct NewProductReview {
    pub product_id: Option<i32>,
    pub customer_id: Option<i32>,
    pub customer_review: Option<i32>,
    pub rating: Option<i32>,
}

impl NewProductReview {
    pub fn save(self, connection: &DbConnection) -> Result<ProductReview> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::insert_into(product_reviews)
            .values(self)
            .returning(ProductReview::as_returning())
            .get_result(conn)?)
    }
}

impl ProductReview {
    pub fn fetch_by_product(target: i32, connection: &DbConnection) -> Result<Vec<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(product_reviews
            .filter(product_id.eq(target))
            .select(ProductReview::as_select())
            .load(conn)?)
    }
}
