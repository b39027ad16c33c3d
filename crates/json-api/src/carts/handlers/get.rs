//! Get Cart Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use trolley_app::domain::carts::models::{CartView, CartViewItem};

use crate::{carts::errors::into_status_error, products::get::ProductResponse, state::State};

/// Cart View Response
///
/// Wire shape: `{ "cartId": ..., "products": [{ "productId": <resolved
/// product or null>, "quantity": ... }] }`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartViewResponse {
    /// The unique identifier of the cart
    #[serde(rename = "cartId")]
    pub cart_id: Uuid,

    /// The cart's line items with resolved product details
    pub products: Vec<CartLineResponse>,
}

/// One resolved line of a cart
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineResponse {
    /// The resolved product, or null when it no longer exists
    #[serde(rename = "productId")]
    pub product: Option<ProductResponse>,

    /// Number of units of the product
    pub quantity: u32,
}

impl From<CartView> for CartViewResponse {
    fn from(view: CartView) -> Self {
        Self {
            cart_id: view.cart_uuid.into_uuid(),
            products: view.items.into_iter().map(CartLineResponse::from).collect(),
        }
    }
}

impl From<CartViewItem> for CartLineResponse {
    fn from(item: CartViewItem) -> Self {
        Self {
            product: item.product.map(ProductResponse::from),
            quantity: item.quantity,
        }
    }
}

/// Get Cart Handler
///
/// Returns a user's cart with product details resolved.
#[endpoint(
    tags("carts"),
    summary = "Get Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart found"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CartViewResponse>, StatusError> {
    let state = State::from_depot(depot)?;

    let view = state
        .app
        .carts
        .get_cart(&user.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(view.into()))
}
