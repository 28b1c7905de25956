//! Aurelia storefront API client.
//!
//! Two layers:
//!
//! - [`ApiClient`] - typed wrappers over every storefront endpoint.
//! - [`CartClient`] - a shopper's cart mirror: holds the latest snapshot the
//!   server returned plus the cart drawer's open/closed flag, and replaces
//!   its entire local state with the server response after every mutation.
//!
//! # Example
//!
//! ```rust,ignore
//! use aurelia_client::{ApiClient, CartClient};
//! use aurelia_core::ProductId;
//!
//! let api = ApiClient::new("http://localhost:5000");
//! let mut cart = CartClient::new(api.clone(), "sess-1");
//!
//! cart.add(ProductId::new(1), None).await?;
//! assert!(cart.is_drawer_open());
//! assert_eq!(cart.item_count(), 1);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod api;
mod cart;

pub use api::{ApiClient, ClientError, ProductListingRequest};
pub use cart::CartClient;
