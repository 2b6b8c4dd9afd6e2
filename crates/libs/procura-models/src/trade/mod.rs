pub mod order;
pub mod post;
