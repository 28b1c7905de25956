//! Typed HTTP client for the storefront API.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use aurelia_core::{
    Cart, CartItemId, CartWithAddedItem, Category, CategoryId, ErrorBody, Product, ProductId,
    ProductPage, Subcategory, SubcategoryId, UserId,
};

/// Errors that can occur when talking to the storefront API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error status and a `{message}` body.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Client for the storefront API.
///
/// Cheaply cloneable; all clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

#[derive(Debug)]
struct ApiClientInner {
    client: reqwest::Client,
    base_url: String,
}

/// Parameters for the product listing endpoint.
///
/// Fields mirror the `GET /api/products` query string; absent options are
/// omitted from the request entirely.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListingRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory_id: Option<SubcategoryId>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub featured: bool,
    #[serde(rename = "new", skip_serializing_if = "std::ops::Not::not")]
    pub new_arrivals: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub bestsellers: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub sale: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gemstone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

/// Add-to-cart request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddToCartBody {
    product_id: ProductId,
    #[serde(skip_serializing_if = "Option::is_none")]
    quantity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    session_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize)]
struct UpdateQuantityBody {
    quantity: i32,
}

impl ApiClient {
    /// Create a new client for the API at `base_url`
    /// (e.g., `http://localhost:5000`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            inner: Arc::new(ApiClientInner {
                client: reqwest::Client::new(),
                base_url,
            }),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// Decode a response, surfacing the server's `{message}` on error
    /// statuses.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .map_or_else(|_| format!("HTTP {status}"), |body| body.message);

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// `GET /api/categories`
    pub async fn categories(&self) -> Result<Vec<Category>, ClientError> {
        let response = self
            .inner
            .client
            .get(self.url("/api/categories"))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `GET /api/subcategories`, optionally scoped to one category.
    pub async fn subcategories(
        &self,
        category_id: Option<CategoryId>,
    ) -> Result<Vec<Subcategory>, ClientError> {
        let mut request = self.inner.client.get(self.url("/api/subcategories"));
        if let Some(category_id) = category_id {
            request = request.query(&[("categoryId", category_id.as_i32())]);
        }
        Self::decode(request.send().await?).await
    }

    /// `GET /api/products` with filtering, sorting, and pagination.
    pub async fn products(
        &self,
        listing: &ProductListingRequest,
    ) -> Result<ProductPage, ClientError> {
        let response = self
            .inner
            .client
            .get(self.url("/api/products"))
            .query(listing)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `GET /api/products/{slug}`
    pub async fn product_by_slug(&self, slug: &str) -> Result<Product, ClientError> {
        let response = self
            .inner
            .client
            .get(self.url(&format!("/api/products/{slug}")))
            .send()
            .await?;
        Self::decode(response).await
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// `GET /api/cart?sessionId=`
    pub async fn cart(&self, session_id: &str) -> Result<Cart, ClientError> {
        let response = self
            .inner
            .client
            .get(self.url("/api/cart"))
            .query(&[("sessionId", session_id)])
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `POST /api/cart` for a session shopper.
    pub async fn add_to_cart(
        &self,
        session_id: &str,
        product_id: ProductId,
        quantity: Option<i32>,
    ) -> Result<CartWithAddedItem, ClientError> {
        let body = AddToCartBody {
            product_id,
            quantity,
            user_id: None,
            session_id: Some(session_id.to_string()),
        };
        let response = self
            .inner
            .client
            .post(self.url("/api/cart"))
            .json(&body)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `PUT /api/cart/{id}`
    pub async fn update_cart_item(
        &self,
        id: CartItemId,
        quantity: i32,
    ) -> Result<Cart, ClientError> {
        let response = self
            .inner
            .client
            .put(self.url(&format!("/api/cart/{id}")))
            .json(&UpdateQuantityBody { quantity })
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `DELETE /api/cart/{id}`
    pub async fn remove_cart_item(&self, id: CartItemId) -> Result<Cart, ClientError> {
        let response = self
            .inner
            .client
            .delete(self.url(&format!("/api/cart/{id}")))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `DELETE /api/cart?sessionId=`
    pub async fn clear_cart(&self, session_id: &str) -> Result<Cart, ClientError> {
        let response = self
            .inner
            .client
            .delete(self.url("/api/cart"))
            .query(&[("sessionId", session_id)])
            .send()
            .await?;
        Self::decode(response).await
    }
}
