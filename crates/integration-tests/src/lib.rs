//! Integration tests for the Aurelia storefront.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the API server
//! cargo run -p aurelia-api
//!
//! # Run integration tests against it
//! cargo test -p aurelia-integration-tests -- --ignored
//! ```
//!
//! The target server is configurable via `API_BASE_URL` (default
//! `http://localhost:5000`). Tests use a fresh random session id each so
//! they can run against a shared server without interfering with each
//! other; the catalog itself is read-only.
//!
//! # Test Categories
//!
//! - `api_catalog` - Category, subcategory, and product listing endpoints
//! - `api_cart` - Cart lifecycle driven through the typed client

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn api_base_url() -> String {
    std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string())
}
