pub mod article;
pub mod currency;
pub mod errors;
