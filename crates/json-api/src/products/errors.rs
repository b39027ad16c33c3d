//! Errors

use salvo::http::StatusError;
use tracing::error;

use trolley_app::domain::products::CatalogError;

pub(crate) fn into_status_error(error: CatalogError) -> StatusError {
    match error {
        CatalogError::AlreadyExists => StatusError::conflict().brief("Product already exists"),
        CatalogError::NotFound => StatusError::not_found().brief("Product not found"),
        CatalogError::InvalidData | CatalogError::InvalidPrice(_) => {
            StatusError::bad_request().brief("Invalid product payload")
        }
        CatalogError::Sql(source) => {
            error!("product storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
