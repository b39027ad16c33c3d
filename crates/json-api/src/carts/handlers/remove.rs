//! Remove Product Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{carts::errors::into_status_error, carts::get::CartViewResponse, state::State};

/// Remove Product Handler
///
/// Removes a product from the cart. Removing a product with no line item
/// leaves the cart unchanged and still succeeds.
#[endpoint(
    tags("carts"),
    summary = "Remove Product from Cart",
    responses(
        (status_code = StatusCode::OK, description = "Product removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartViewResponse>, StatusError> {
    let state = State::from_depot(depot)?;

    let view = state
        .app
        .carts
        .remove_product(cart.into_inner().into(), product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(view.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use trolley_app::domain::carts::{CartsServiceError, MockCartsService, models::CartUuid};
    use trolley_app::domain::products::models::ProductUuid;

    use crate::test_helpers::{carts_service, make_view};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(
            carts,
            Router::with_path("cart/{cart}/{product}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_remove_product_returns_200() -> TestResult {
        let cart_uuid = CartUuid::new();
        let product = ProductUuid::new();
        let view = make_view(cart_uuid);

        let mut carts = MockCartsService::new();

        carts
            .expect_remove_product()
            .once()
            .withf(move |cart, item| *cart == cart_uuid && *item == product)
            .return_once(move |_, _| Ok(view));

        carts.expect_get_cart().never();
        carts.expect_add_product().never();
        carts.expect_update_quantity().never();

        let url = format!(
            "http://example.com/cart/{}/{}",
            cart_uuid.into_uuid(),
            product.into_uuid()
        );

        let mut res = TestClient::delete(url).send(&make_service(carts)).await;

        let body: CartViewResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.cart_id, cart_uuid.into_uuid());
        assert!(body.products.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_unknown_cart_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_product()
            .once()
            .return_once(|_, _| Err(CartsServiceError::CartNotFound));

        carts.expect_get_cart().never();
        carts.expect_add_product().never();
        carts.expect_update_quantity().never();

        let url = format!(
            "http://example.com/cart/{}/{}",
            CartUuid::new().into_uuid(),
            ProductUuid::new().into_uuid()
        );

        let res = TestClient::delete(url).send(&make_service(carts)).await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_invalid_product_uuid_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_remove_product().never();
        carts.expect_get_cart().never();
        carts.expect_add_product().never();
        carts.expect_update_quantity().never();

        let url = format!(
            "http://example.com/cart/{}/not-a-uuid",
            CartUuid::new().into_uuid()
        );

        let res = TestClient::delete(url).send(&make_service(carts)).await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
