//! Cart Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    domain::products::models::{Product, ProductUuid},
    uuids::TypedUuid,
};

/// Cart UUID
pub type CartUuid = TypedUuid<Cart>;

/// Cart Model
///
/// One cart per user. Line items keep the insertion order of distinct
/// products, and a cart holds at most one line item per product.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub uuid: CartUuid,
    pub user_id: String,
    pub items: Vec<LineItem>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// LineItem Model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_uuid: ProductUuid,
    pub quantity: u32,
}

impl Cart {
    /// Start a new cart for a user with a single line item.
    #[must_use]
    pub fn started(user_id: String, item: LineItem) -> Self {
        let now = Timestamp::now();

        Self {
            uuid: CartUuid::new(),
            user_id,
            items: vec![item],
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a product into the line items.
    ///
    /// Adds the quantity onto the existing line item when the product is
    /// already present, otherwise appends a new line item at the end.
    pub fn merge_item(&mut self, product: ProductUuid, quantity: u32) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product_uuid == product) {
            existing.quantity = existing.quantity.saturating_add(quantity);
        } else {
            self.items.push(LineItem {
                product_uuid: product,
                quantity,
            });
        }
    }

    /// Overwrite the quantity of the line item for a product, leaving its
    /// position and all other line items untouched.
    ///
    /// Returns `false` when the product has no line item in this cart.
    pub fn set_quantity(&mut self, product: ProductUuid, quantity: u32) -> bool {
        match self.items.iter_mut().find(|i| i.product_uuid == product) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove the line item for a product.
    ///
    /// Removing a product with no line item is a no-op.
    pub fn remove_item(&mut self, product: ProductUuid) {
        self.items.retain(|i| i.product_uuid != product);
    }
}

/// Add-to-cart command.
#[derive(Debug, Clone, PartialEq)]
pub struct AddProduct {
    pub user_id: String,
    pub product_uuid: ProductUuid,
    pub quantity: u32,
}

/// Cart read-model with product references resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    pub cart_uuid: CartUuid,
    pub items: Vec<CartViewItem>,
}

/// One resolved line of a [`CartView`].
#[derive(Debug, Clone, PartialEq)]
pub struct CartViewItem {
    /// `None` when the product was deleted after it was added.
    pub product: Option<Product>,
    pub quantity: u32,
}
