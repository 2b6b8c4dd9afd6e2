//! Seller and product review handlers.

use std::collections::HashSet;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use procura_models::{
    catalog::category::Category,
    db::connection::DbConnection,
    geo::address::Address,
    review::{
        product_review::{NewProductReview, ProductReview},
        seller_review::{NewSellerReview, SellerReview},
    },
    user::user::User,
};
use procura_web::prelude::{Error as WebError, Result as WebResult};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// A review participant with their joined category and address detail.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyDetail {
    #[serde(flatten)]
    pub user: User,
    pub category: Option<String>,
    pub country: Option<String>,
    pub district: Option<String>,
}

/// A seller review joined with both participants.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerReviewDetail {
    #[serde(flatten)]
    pub review: SellerReview,
    pub seller: Option<PartyDetail>,
    pub customer: Option<PartyDetail>,
}

/// A page of detailed reviews plus the count of distinct reviewers.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerReviewListing {
    pub reviews: Vec<SellerReviewDetail>,
    pub total_customers: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerReviewFilter {
    pub seller_id: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerReviewFilter {
    pub customer_id: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSellerReviewRequest {
    pub seller_id: Option<i32>,
    pub customer_review: Option<String>,
    pub customer_id: Option<i32>,
    pub rating: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerReviewUpdate {
    pub customer_review: String,
    pub rating: i32,
}

/// Resolves a participant id into their profile plus category, country, and
/// district names. Missing links degrade to `None` rather than failing the
/// whole listing.
fn party(target: Option<i32>, db: &DbConnection) -> WebResult<Option<PartyDetail>> {
    let Some(user_id) = target else {
        return Ok(None);
    };
    let Some(user) = User::fetch_by_id(user_id, db)? else {
        return Ok(None);
    };

    let category = match user.category_id {
        Some(category_id) => Category::fetch_by_id(category_id, db)?.and_then(|c| c.name),
        None => None,
    };
    let (country, district) = match user.address_id {
        Some(address_id) => match Address::fetch_with_country(address_id, db)? {
            Some((address, country)) => (Some(country.name), address.district),
            None => (None, None),
        },
        None => (None, None),
    };

    Ok(Some(PartyDetail {
        user,
        category,
        country,
        district,
    }))
}

/// Joins a batch of reviews with both participants.
pub(super) fn detail_reviews(
    reviews: Vec<SellerReview>,
    db: &DbConnection,
) -> WebResult<Vec<SellerReviewDetail>> {
    reviews
        .into_iter()
        .map(|review| {
            Ok(SellerReviewDetail {
                seller: party(review.seller_id, db)?,
                customer: party(review.customer_id, db)?,
                review,
            })
        })
        .collect()
}

/// The detailed reviews a seller has received.
pub(super) fn reviews_received(seller: i32, db: &DbConnection) -> WebResult<Vec<SellerReviewDetail>> {
    detail_reviews(SellerReview::fetch_by_seller(seller, db)?, db)
}

fn listing(reviews: Vec<SellerReviewDetail>) -> SellerReviewListing {
    let total_customers = reviews
        .iter()
        .filter_map(|detail| detail.review.customer_id)
        .collect::<HashSet<_>>()
        .len();
    SellerReviewListing {
        reviews,
        total_customers,
    }
}

pub async fn list_seller_reviews(
    State(state): State<AppState>,
    Query(filter): Query<SellerReviewFilter>,
) -> WebResult<Json<SellerReviewListing>> {
    let reviews = match filter.seller_id {
        Some(seller) => SellerReview::fetch_by_seller(seller, &state.db)?,
        None => SellerReview::fetch_all(&state.db)?,
    };
    Ok(Json(listing(detail_reviews(reviews, &state.db)?)))
}

pub async fn list_customer_reviews(
    State(state): State<AppState>,
    Query(filter): Query<CustomerReviewFilter>,
) -> WebResult<Json<SellerReviewListing>> {
    let reviews = match filter.customer_id {
        Some(customer) => SellerReview::fetch_by_customer(customer, &state.db)?,
        None => SellerReview::fetch_all(&state.db)?,
    };
    Ok(Json(listing(detail_reviews(reviews, &state.db)?)))
}

/// One rating per seller/customer pair; a second attempt is rejected.
pub async fn add_seller_review(
    State(state): State<AppState>,
    Json(payload): Json<NewSellerReviewRequest>,
) -> WebResult<(StatusCode, Json<SellerReview>)> {
    if let (Some(seller), Some(customer)) = (payload.seller_id, payload.customer_id) {
        if let Some(existing) = SellerReview::fetch_pair(seller, customer, &state.db)? {
            if existing.has_rating {
                return Err(WebError::AlreadyReviewed);
            }
        }
    }

    let review = NewSellerReview {
        seller_id: payload.seller_id,
        customer_review: payload.customer_review,
        customer_id: payload.customer_id,
        rating: payload.rating,
        has_rating: true,
    }
    .save(&state.db)?;

    Ok((StatusCode::CREATED, Json(review)))
}

pub async fn update_seller_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SellerReviewUpdate>,
) -> WebResult<Json<SellerReview>> {
    let review =
        SellerReview::update_feedback(id, &payload.customer_review, payload.rating, &state.db)?
            .ok_or(WebError::NotFound("Seller review"))?;
    Ok(Json(review))
}

pub async fn remove_seller_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> WebResult<StatusCode> {
    if SellerReview::delete(id, &state.db)? == 0 {
        return Err(WebError::NotFound("Seller review"));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_product_review(
    State(state): State<AppState>,
    Json(payload): Json<NewProductReview>,
) -> WebResult<(StatusCode, Json<ProductReview>)> {
    Ok((StatusCode::CREATED, Json(payload.save(&state.db)?)))
}

pub async fn product_reviews_by_product(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> WebResult<Json<Vec<ProductReview>>> {
    Ok(Json(ProductReview::fetch_by_product(product_id, &state.db)?))
}
