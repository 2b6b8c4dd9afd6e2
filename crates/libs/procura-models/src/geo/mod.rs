pub mod address;
pub mod country;
