//! Per-shopper cart line items, joined against the catalog for valuation.
//!
//! The cart store owns the line items and holds only a weak, id-based
//! reference to products: every read resolves `productId` through the
//! catalog store, nothing is ever copied into the line. A dangling product
//! reference is data corruption and fails the whole cart read.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use rust_decimal::Decimal;
use thiserror::Error;

use aurelia_core::{
    CartIdentity, CartItem, CartItemId, CartItemWithProduct, NewCartItem, ProductId,
};

use super::{CatalogStore, IdSequence};

/// Errors from cart store operations.
///
/// Expected absence (unknown cart item id) is `Option`, not an error; these
/// variants cover the product side of the join.
#[derive(Debug, Error)]
pub enum CartStoreError {
    /// An add referenced a product id the catalog has never seen.
    #[error("product {0} does not exist")]
    UnknownProduct(ProductId),

    /// A stored line references a product that is gone. This should never
    /// happen in a consistent store and is not recoverable by retry.
    #[error("cart item {item} references missing product {product}")]
    DanglingProduct {
        item: CartItemId,
        product: ProductId,
    },
}

/// Owner of all cart line items.
///
/// One `Mutex` guards the line items so that `add`'s find-then-increment
/// sequence is a single atomic critical section: concurrent adds of the same
/// product can neither duplicate the line nor lose an increment.
#[derive(Debug)]
pub struct CartStore {
    catalog: Arc<CatalogStore>,
    state: Mutex<CartState>,
}

#[derive(Debug)]
struct CartState {
    items: BTreeMap<CartItemId, CartItem>,
    ids: IdSequence,
}

impl CartStore {
    /// Create an empty cart store joined to the given catalog.
    #[must_use]
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self {
            catalog,
            state: Mutex::new(CartState {
                items: BTreeMap::new(),
                ids: IdSequence::default(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CartState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All line items for one shopper, each joined with its product.
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError::DanglingProduct`] if any line references a
    /// product the catalog no longer has.
    pub fn items_with_products(
        &self,
        identity: &CartIdentity,
    ) -> Result<Vec<CartItemWithProduct>, CartStoreError> {
        // Snapshot the matching lines first so the catalog join happens
        // without holding the cart lock.
        let items = self.items_for(identity);

        items
            .into_iter()
            .map(|item| {
                let product = self.catalog.product(item.product_id).ok_or(
                    CartStoreError::DanglingProduct {
                        item: item.id,
                        product: item.product_id,
                    },
                )?;
                Ok(CartItemWithProduct { item, product })
            })
            .collect()
    }

    /// Point lookup by line item id.
    #[must_use]
    pub fn item(&self, id: CartItemId) -> Option<CartItem> {
        self.lock().items.get(&id).cloned()
    }

    /// Add a product to a shopper's cart.
    ///
    /// If the shopper already has a line for this product its quantity is
    /// incremented by the requested amount and the line keeps its id;
    /// otherwise a new line is created with the next sequential id and the
    /// current timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError::UnknownProduct`] if the product id does not
    /// exist in the catalog.
    pub fn add(&self, new_item: NewCartItem) -> Result<CartItem, CartStoreError> {
        if self.catalog.product(new_item.product_id).is_none() {
            return Err(CartStoreError::UnknownProduct(new_item.product_id));
        }

        let mut state = self.lock();

        // Find-then-increment must not interleave with another add of the
        // same (product, identity) pair; the lock is held across both steps.
        if let Some(existing) = state.items.values_mut().find(|item| {
            item.product_id == new_item.product_id && item.identity == new_item.identity
        }) {
            existing.quantity += new_item.quantity;
            return Ok(existing.clone());
        }

        let id = CartItemId::new(state.ids.next_id());
        let item = CartItem {
            id,
            identity: new_item.identity,
            product_id: new_item.product_id,
            quantity: new_item.quantity,
            created_at: Utc::now(),
        };
        state.items.insert(id, item.clone());
        Ok(item)
    }

    /// Overwrite a line's quantity.
    ///
    /// A quantity of zero or less deletes the line and returns `None`, the
    /// same as if the id were unknown.
    pub fn update_quantity(&self, id: CartItemId, quantity: i32) -> Option<CartItem> {
        let mut state = self.lock();

        if quantity <= 0 {
            state.items.remove(&id);
            return None;
        }

        let item = state.items.get_mut(&id)?;
        item.quantity = quantity;
        Some(item.clone())
    }

    /// Delete a line. Returns whether a deletion occurred.
    pub fn remove(&self, id: CartItemId) -> bool {
        self.lock().items.remove(&id).is_some()
    }

    /// Delete all lines for a shopper.
    ///
    /// Passing `None` matches nothing and returns `false` - a no-op, not an
    /// error.
    pub fn clear(&self, identity: Option<&CartIdentity>) -> bool {
        let Some(identity) = identity else {
            return false;
        };

        self.lock()
            .items
            .retain(|_, item| item.identity != *identity);
        true
    }

    /// Sum of effective price times quantity over the shopper's lines.
    ///
    /// Exactly zero for an empty cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError::DanglingProduct`] if any line references a
    /// product the catalog no longer has.
    pub fn total(&self, identity: &CartIdentity) -> Result<Decimal, CartStoreError> {
        let items = self.items_with_products(identity)?;
        Ok(items.iter().map(CartItemWithProduct::line_total).sum())
    }

    fn items_for(&self, identity: &CartIdentity) -> Vec<CartItem> {
        self.lock()
            .items
            .values()
            .filter(|item| item.identity == *identity)
            .cloned()
            .collect()
    }
}
