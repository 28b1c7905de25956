//! Cart state mirror for one shopper.
//!
//! The server is the cart's system of record. This client never patches its
//! local state incrementally: every mutation sends one request and, on
//! success, replaces the whole snapshot with whatever the server returned.
//! On failure the previous snapshot stays untouched and the error is
//! surfaced to the caller - no retry, no reconciliation.

use rust_decimal::Decimal;

use aurelia_core::{Cart, CartItem, CartItemId, ProductId};

use crate::api::{ApiClient, ClientError};

/// A shopper's cart mirror plus the cart drawer's UI state.
#[derive(Debug)]
pub struct CartClient {
    api: ApiClient,
    session_id: String,
    cart: Option<Cart>,
    drawer_open: bool,
}

impl CartClient {
    /// Create a mirror for the shopper identified by `session_id`.
    ///
    /// The local snapshot starts empty; call [`refresh`](Self::refresh) to
    /// load the server's current cart.
    #[must_use]
    pub fn new(api: ApiClient, session_id: impl Into<String>) -> Self {
        Self {
            api,
            session_id: session_id.into(),
            cart: None,
            drawer_open: false,
        }
    }

    /// The session id this mirror is scoped to.
    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// The last snapshot received from the server, if any.
    #[must_use]
    pub const fn cart(&self) -> Option<&Cart> {
        self.cart.as_ref()
    }

    /// Item count of the current snapshot; zero before the first fetch.
    #[must_use]
    pub fn item_count(&self) -> i64 {
        self.cart.as_ref().map_or(0, |cart| cart.item_count)
    }

    /// Grand total of the current snapshot; zero before the first fetch.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.cart.as_ref().map_or(Decimal::ZERO, |cart| cart.total)
    }

    // =========================================================================
    // Drawer state
    // =========================================================================

    /// Whether the cart drawer is open.
    #[must_use]
    pub const fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Open the cart drawer.
    pub const fn open_drawer(&mut self) {
        self.drawer_open = true;
    }

    /// Close the cart drawer.
    pub const fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    // =========================================================================
    // Server round-trips
    // =========================================================================

    /// Fetch the current cart and replace the local snapshot.
    ///
    /// # Errors
    ///
    /// Returns the transport or API error; the local snapshot is unchanged.
    pub async fn refresh(&mut self) -> Result<&Cart, ClientError> {
        let cart = self.api.cart(&self.session_id).await?;
        Ok(self.replace(cart))
    }

    /// Add a product, replace the snapshot, and open the drawer.
    ///
    /// Returns the line the server created or incremented.
    ///
    /// # Errors
    ///
    /// Returns the transport or API error (404 unknown product, 400 out of
    /// stock); the local snapshot and drawer state are unchanged.
    pub async fn add(
        &mut self,
        product_id: ProductId,
        quantity: Option<i32>,
    ) -> Result<CartItem, ClientError> {
        let response = self
            .api
            .add_to_cart(&self.session_id, product_id, quantity)
            .await?;

        self.replace(response.cart);
        self.open_drawer();
        tracing::debug!(product = %product_id, "added to cart");
        Ok(response.added_item)
    }

    /// Set a line's quantity (zero removes it) and replace the snapshot.
    ///
    /// # Errors
    ///
    /// Returns the transport or API error; the local snapshot is unchanged.
    pub async fn set_quantity(
        &mut self,
        id: CartItemId,
        quantity: i32,
    ) -> Result<&Cart, ClientError> {
        let cart = self.api.update_cart_item(id, quantity).await?;
        Ok(self.replace(cart))
    }

    /// Remove a line and replace the snapshot.
    ///
    /// # Errors
    ///
    /// Returns the transport or API error; the local snapshot is unchanged.
    pub async fn remove(&mut self, id: CartItemId) -> Result<&Cart, ClientError> {
        let cart = self.api.remove_cart_item(id).await?;
        Ok(self.replace(cart))
    }

    /// Clear the cart and replace the snapshot.
    ///
    /// # Errors
    ///
    /// Returns the transport or API error; the local snapshot is unchanged.
    pub async fn clear(&mut self) -> Result<&Cart, ClientError> {
        let cart = self.api.clear_cart(&self.session_id).await?;
        Ok(self.replace(cart))
    }

    /// Replace the entire local snapshot with the server's response.
    fn replace(&mut self, cart: Cart) -> &Cart {
        self.cart.insert(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty_and_closed() {
        let client = CartClient::new(ApiClient::new("http://localhost:5000"), "sess-1");
        assert!(client.cart().is_none());
        assert_eq!(client.item_count(), 0);
        assert_eq!(client.total(), Decimal::ZERO);
        assert!(!client.is_drawer_open());
    }

    #[test]
    fn test_drawer_toggles() {
        let mut client = CartClient::new(ApiClient::new("http://localhost:5000"), "sess-1");
        client.open_drawer();
        assert!(client.is_drawer_open());
        client.close_drawer();
        assert!(!client.is_drawer_open());
    }

    #[test]
    fn test_replace_swaps_whole_snapshot() {
        let mut client = CartClient::new(ApiClient::new("http://localhost:5000"), "sess-1");
        client.replace(Cart::empty());
        assert!(client.cart().is_some());
        assert_eq!(client.item_count(), 0);
    }
}
