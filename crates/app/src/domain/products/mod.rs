//! Products

pub mod catalog;
pub mod errors;
pub mod models;

pub use catalog::*;
pub use errors::CatalogError;
