//! Update Quantity Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{carts::errors::into_status_error, carts::get::CartViewResponse, state::State};

/// Update Quantity Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateQuantityRequest {
    /// The new number of units for the product
    pub quantity: u32,
}

/// Update Quantity Handler
///
/// Overwrites the quantity of a product already in the cart.
#[endpoint(
    tags("carts"),
    summary = "Update Product Quantity",
    responses(
        (status_code = StatusCode::OK, description = "Quantity updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart or product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    product: PathParam<Uuid>,
    json: JsonBody<UpdateQuantityRequest>,
    depot: &mut Depot,
) -> Result<Json<CartViewResponse>, StatusError> {
    let state = State::from_depot(depot)?;

    let view = state
        .app
        .carts
        .update_quantity(
            cart.into_inner().into(),
            product.into_inner().into(),
            json.into_inner().quantity,
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(view.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use trolley_app::domain::carts::{CartsServiceError, MockCartsService, models::CartUuid};
    use trolley_app::domain::products::models::ProductUuid;

    use crate::test_helpers::{carts_service, make_view};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("cart/{cart}/{product}").put(handler))
    }

    #[tokio::test]
    async fn test_update_quantity_returns_200() -> TestResult {
        let cart_uuid = CartUuid::new();
        let product = ProductUuid::new();
        let view = make_view(cart_uuid);

        let mut carts = MockCartsService::new();

        carts
            .expect_update_quantity()
            .once()
            .withf(move |cart, item, quantity| {
                *cart == cart_uuid && *item == product && *quantity == 7
            })
            .return_once(move |_, _, _| Ok(view));

        carts.expect_get_cart().never();
        carts.expect_add_product().never();
        carts.expect_remove_product().never();

        let url = format!(
            "http://example.com/cart/{}/{}",
            cart_uuid.into_uuid(),
            product.into_uuid()
        );

        let mut res = TestClient::put(url)
            .json(&json!({ "quantity": 7 }))
            .send(&make_service(carts))
            .await;

        let body: CartViewResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.cart_id, cart_uuid.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_update_unknown_cart_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_update_quantity()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::CartNotFound));

        carts.expect_get_cart().never();
        carts.expect_add_product().never();
        carts.expect_remove_product().never();

        let url = format!(
            "http://example.com/cart/{}/{}",
            CartUuid::new().into_uuid(),
            ProductUuid::new().into_uuid()
        );

        let res = TestClient::put(url)
            .json(&json!({ "quantity": 3 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_not_in_cart_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_update_quantity()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::ProductNotInCart));

        carts.expect_get_cart().never();
        carts.expect_add_product().never();
        carts.expect_remove_product().never();

        let url = format!(
            "http://example.com/cart/{}/{}",
            CartUuid::new().into_uuid(),
            ProductUuid::new().into_uuid()
        );

        let res = TestClient::put(url)
            .json(&json!({ "quantity": 3 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_zero_quantity_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_update_quantity()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::InvalidQuantity));

        carts.expect_get_cart().never();
        carts.expect_add_product().never();
        carts.expect_remove_product().never();

        let url = format!(
            "http://example.com/cart/{}/{}",
            CartUuid::new().into_uuid(),
            ProductUuid::new().into_uuid()
        );

        let res = TestClient::put(url)
            .json(&json!({ "quantity": 0 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_invalid_cart_uuid_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_update_quantity().never();
        carts.expect_get_cart().never();
        carts.expect_add_product().never();
        carts.expect_remove_product().never();

        let url = format!(
            "http://example.com/cart/not-a-uuid/{}",
            ProductUuid::new().into_uuid()
        );

        let res = TestClient::put(url)
            .json(&json!({ "quantity": 3 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
