//! Shared fixtures for handler tests.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{Router, Service, affix_state::inject};

use trolley_app::{
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            models::{CartUuid, CartView},
        },
        products::{
            MockProductCatalog,
            models::{Product, ProductUuid},
        },
    },
};

use crate::state::State;

pub(crate) fn make_product(uuid: ProductUuid, name: &str, price: u64) -> Product {
    Product {
        uuid,
        name: name.to_string(),
        price,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

pub(crate) fn make_view(cart_uuid: CartUuid) -> CartView {
    CartView {
        cart_uuid,
        items: vec![],
    }
}

/// Catalog mock that fails the test if any of its methods is called.
fn strict_catalog() -> MockProductCatalog {
    let mut catalog = MockProductCatalog::new();

    catalog.expect_list_products().never();
    catalog.expect_get_product().never();
    catalog.expect_create_product().never();
    catalog.expect_delete_product().never();

    catalog
}

/// Carts mock that fails the test if any of its methods is called.
fn strict_carts() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_get_cart().never();
    carts.expect_add_product().never();
    carts.expect_update_quantity().never();
    carts.expect_remove_product().never();

    carts
}

fn service(carts: MockCartsService, products: MockProductCatalog, route: Router) -> Service {
    let state = State::from_app_context(AppContext {
        carts: Arc::new(carts),
        products: Arc::new(products),
    });

    Service::new(Router::new().hoop(inject(state)).push(route))
}

/// Service wired to the given carts mock; catalog calls fail the test.
pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    service(carts, strict_catalog(), route)
}

/// Service wired to the given catalog mock; carts calls fail the test.
pub(crate) fn products_service(products: MockProductCatalog, route: Router) -> Service {
    service(strict_carts(), products, route)
}
