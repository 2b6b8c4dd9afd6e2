pub mod product_review;
pub mod seller_review;
