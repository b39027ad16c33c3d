//! Add Product Handler

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use trolley_app::domain::carts::models::AddProduct;

use crate::{carts::errors::into_status_error, carts::get::CartViewResponse, state::State};

/// Add Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddProductRequest {
    /// The user whose cart receives the product
    #[serde(rename = "userId")]
    pub user_id: String,

    /// The product to add
    #[serde(rename = "productId")]
    pub product_id: Uuid,

    /// Number of units to add
    pub quantity: u32,
}

impl From<AddProductRequest> for AddProduct {
    fn from(request: AddProductRequest) -> Self {
        AddProduct {
            user_id: request.user_id,
            product_uuid: request.product_id.into(),
            quantity: request.quantity,
        }
    }
}

/// Add Product Handler
///
/// Adds a product to the user's cart, creating the cart on first use and
/// merging quantities when the product is already present.
#[endpoint(
    tags("carts"),
    summary = "Add Product to Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Product added to cart"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AddProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartViewResponse>, StatusError> {
    let state = State::from_depot(depot)?;

    let request = json.into_inner();
    let user_id = request.user_id.clone();

    let view = state
        .app
        .carts
        .add_product(request.into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/cart/{user_id}"), true)
        .map_err(|header_error| {
            error!("failed to set location header: {header_error}");

            StatusError::internal_server_error()
        })?
        .status_code(StatusCode::CREATED);

    Ok(Json(view.into()))
}
