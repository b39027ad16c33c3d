//! Carts service.
//!
//! [`CartLedger`] owns the rule set for mutating a user's line items and the
//! read path that resolves product references into a [`CartView`]. It holds
//! no state between calls; the store and catalog handles are injected at
//! construction.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::domain::{
    carts::{
        errors::CartsServiceError,
        models::{AddProduct, Cart, CartUuid, CartView, CartViewItem, LineItem},
        store::CartStore,
    },
    products::{CatalogError, ProductCatalog, models::ProductUuid},
};

#[derive(Clone)]
pub struct CartLedger {
    store: Arc<dyn CartStore>,
    catalog: Arc<dyn ProductCatalog>,
}

impl CartLedger {
    #[must_use]
    pub fn new(store: Arc<dyn CartStore>, catalog: Arc<dyn ProductCatalog>) -> Self {
        Self { store, catalog }
    }

    /// Resolve each line item's product reference into full product data.
    ///
    /// Products deleted since they were added resolve to `None`.
    async fn resolve(&self, cart: Cart) -> Result<CartView, CartsServiceError> {
        let mut items = Vec::with_capacity(cart.items.len());

        for line in cart.items {
            let product = match self.catalog.get_product(line.product_uuid).await {
                Ok(product) => Some(product),
                Err(CatalogError::NotFound) => None,
                Err(error) => return Err(CartsServiceError::Catalog(error)),
            };

            items.push(CartViewItem {
                product,
                quantity: line.quantity,
            });
        }

        Ok(CartView {
            cart_uuid: cart.uuid,
            items,
        })
    }
}

#[async_trait]
impl CartsService for CartLedger {
    async fn get_cart(&self, user_id: &str) -> Result<CartView, CartsServiceError> {
        let cart = self
            .store
            .find_by_user(user_id)
            .await?
            .ok_or(CartsServiceError::CartNotFound)?;

        self.resolve(cart).await
    }

    async fn add_product(&self, command: AddProduct) -> Result<CartView, CartsServiceError> {
        if command.quantity == 0 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        // Reject references to products the catalog does not know.
        self.catalog.get_product(command.product_uuid).await?;

        let cart = match self.store.find_by_user(&command.user_id).await? {
            Some(mut cart) => {
                cart.merge_item(command.product_uuid, command.quantity);
                cart
            }
            None => {
                info!(user_id = %command.user_id, "starting new cart");

                Cart::started(
                    command.user_id,
                    LineItem {
                        product_uuid: command.product_uuid,
                        quantity: command.quantity,
                    },
                )
            }
        };

        self.store.save(&cart).await?;

        self.resolve(cart).await
    }

    async fn update_quantity(
        &self,
        cart: CartUuid,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<CartView, CartsServiceError> {
        if quantity == 0 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        let mut cart = self
            .store
            .find_by_id(cart)
            .await?
            .ok_or(CartsServiceError::CartNotFound)?;

        if !cart.set_quantity(product, quantity) {
            return Err(CartsServiceError::ProductNotInCart);
        }

        self.store.save(&cart).await?;

        self.resolve(cart).await
    }

    async fn remove_product(
        &self,
        cart: CartUuid,
        product: ProductUuid,
    ) -> Result<CartView, CartsServiceError> {
        let mut cart = self
            .store
            .find_by_id(cart)
            .await?
            .ok_or(CartsServiceError::CartNotFound)?;

        // Removing a product with no line item still persists and returns
        // the cart unchanged.
        cart.remove_item(product);

        self.store.save(&cart).await?;

        self.resolve(cart).await
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve a user's cart with product references resolved.
    async fn get_cart(&self, user_id: &str) -> Result<CartView, CartsServiceError>;

    /// Add a product to a user's cart, creating the cart on first use and
    /// merging quantities when the product is already present.
    async fn add_product(&self, command: AddProduct) -> Result<CartView, CartsServiceError>;

    /// Overwrite the quantity of a product already in the cart.
    async fn update_quantity(
        &self,
        cart: CartUuid,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<CartView, CartsServiceError>;

    /// Remove a product from the cart; a product that is not present is a
    /// silent no-op.
    async fn remove_product(
        &self,
        cart: CartUuid,
        product: ProductUuid,
    ) -> Result<CartView, CartsServiceError>;
}
