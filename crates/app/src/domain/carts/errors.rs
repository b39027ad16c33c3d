//! Carts service errors.

use thiserror::Error;

use crate::domain::products::errors::CatalogError;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("product not found")]
    ProductNotFound,

    #[error("cart not found")]
    CartNotFound,

    #[error("product not found in cart")]
    ProductNotInCart,

    #[error("quantity must be a positive integer")]
    InvalidQuantity,

    #[error("storage error")]
    Store(#[source] sqlx::Error),

    #[error("catalog error")]
    Catalog(#[source] CatalogError),
}

impl From<sqlx::Error> for CartsServiceError {
    fn from(error: sqlx::Error) -> Self {
        if matches!(error, sqlx::Error::RowNotFound) {
            return Self::CartNotFound;
        }

        Self::Store(error)
    }
}

impl From<CatalogError> for CartsServiceError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::NotFound => Self::ProductNotFound,
            other => Self::Catalog(other),
        }
    }
}
