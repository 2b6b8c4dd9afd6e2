pub mod user;
pub mod verification_code;
