//! Product Index Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    products::errors::into_status_error, products::get::ProductResponse, state::State,
};

/// Products Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// The list of products
    pub products: Vec<ProductResponse>,
}

/// Product Index Handler
///
/// Returns a list of products.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProductsResponse>, StatusError> {
    let state = State::from_depot(depot)?;

    let products = state
        .app
        .products
        .list_products()
        .await
        .map_err(into_status_error)?;

    Ok(Json(ProductsResponse {
        products: products.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use trolley_app::domain::products::{MockProductCatalog, models::ProductUuid};

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(catalog: MockProductCatalog) -> Service {
        products_service(catalog, Router::with_path("products").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_empty_list() -> TestResult {
        let mut catalog = MockProductCatalog::new();

        catalog
            .expect_list_products()
            .once()
            .return_once(|| Ok(vec![]));

        catalog.expect_get_product().never();
        catalog.expect_create_product().never();
        catalog.expect_delete_product().never();

        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service(catalog))
            .await;

        let response: ProductsResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(response.products.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_products() -> TestResult {
        let first = make_product(ProductUuid::new(), "widget", 10_00);
        let second = make_product(ProductUuid::new(), "gadget", 5_00);

        let mut catalog = MockProductCatalog::new();

        catalog
            .expect_list_products()
            .once()
            .return_once(move || Ok(vec![first, second]));

        catalog.expect_get_product().never();
        catalog.expect_create_product().never();
        catalog.expect_delete_product().never();

        let response: ProductsResponse = TestClient::get("http://example.com/products")
            .send(&make_service(catalog))
            .await
            .take_json()
            .await?;

        let names: Vec<&str> = response.products.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["widget", "gadget"]);

        Ok(())
    }
}
