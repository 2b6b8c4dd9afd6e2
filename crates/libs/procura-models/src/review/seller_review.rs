//! Seller review model.

use crate::prelude::*;
use crate::{db::connection::DbConnection, schema::seller_reviews::dsl::*};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::seller_reviews)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct SellerReview {
    pub id: i32,
    pub seller_id: Option<i32>,
    pub customer_review: Option<String>,
    pub customer_id: Option<i32>,
    pub rating: Option<i32>,
    pub has_rating: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, PartialEq, Debug, Clone, Deserialize)]
#[diesel(table_name = crate::schema::seller_reviews)]
#[serde(rename_all = "camelCase")]
pub struct NewSellerReview {
    pub seller_id: Option<i32>,
    pub customer_review: Option<String>,
    pub customer_id: Option<i32>,
    pub rating: Option<i32>,
    pub has_rating: bool,
}

impl NewSellerReview {
    pub fn save(self, connection: &DbConnection) -> Result<SellerReview> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::insert_into(seller_reviews)
            .values(self)
            .returning(SellerReview::as_returning())
            .get_result(conn)?)
    }
}

impl SellerReview {
    pub fn fetch_all(connection: &DbConnection) -> Result<Vec<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(seller_reviews.select(SellerReview::as_select()).load(conn)?)
    }

    pub fn fetch_by_seller(target: i32, connection: &DbConnection) -> Result<Vec<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(seller_reviews
            .filter(seller_id.eq(target))
            .select(SellerReview::as_select())
            .load(conn)?)
    }

    pub fn fetch_by_customer(target: i32, connection: &DbConnection) -> Result<Vec<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(seller_reviews
            .filter(customer_id.eq(target))
            .select(SellerReview::as_select())
            .load(conn)?)
    }

    /// The review a given customer left for a given seller, if any.
    pub fn fetch_pair(
        seller: i32,
        customer: i32,
        connection: &DbConnection,
    ) -> Result<Option<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(seller_reviews
            .filter(seller_id.eq(seller))
            .filter(customer_id.eq(customer))
            .select(SellerReview::as_select())
            .first(conn)
            .optional()?)
    }

    pub fn update_feedback(
        target: i32,
        review_text: &str,
        new_rating: i32,
        connection: &DbConnection,
    ) -> Result<Option<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::update(seller_reviews.filter(id.eq(target)))
            .set((customer_review.eq(review_text), rating.eq(new_rating)))
            .returning(SellerReview::as_returning())
            .get_result(conn)
            .optional()?)
    }

    pub fn delete(target: i32, connection: &DbConnection) -> Result<usize> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::delete(seller_reviews.filter(id.eq(target))).execute(conn)?)
    }
}
