//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /api/categories              - All categories
//! GET    /api/subcategories           - All subcategories (?categoryId= to scope)
//! GET    /api/products                - Product listing (filter/sort/paginate)
//! GET    /api/products/{slug}         - Product detail
//!
//! GET    /api/cart?sessionId=         - Cart snapshot
//! POST   /api/cart                    - Add a product, returns snapshot + addedItem
//! PUT    /api/cart/{id}               - Set line quantity (0 removes)
//! DELETE /api/cart/{id}               - Remove a line
//! DELETE /api/cart?sessionId=         - Clear the cart
//! ```
//!
//! All error responses carry a `{"message": string}` JSON body.

pub mod cart;
pub mod catalog;

use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

/// Create all `/api` routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(catalog::list_categories))
        .route("/subcategories", get(catalog::list_subcategories))
        .route("/products", get(catalog::list_products))
        .route("/products/{slug}", get(catalog::show_product))
        .route(
            "/cart",
            get(cart::show).post(cart::add).delete(cart::clear),
        )
        .route("/cart/{id}", put(cart::update).delete(cart::remove))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use aurelia_core::{Cart, CartWithAddedItem, Category, Product, ProductPage};

    use crate::config::ApiConfig;
    use crate::seed;
    use crate::state::AppState;

    use super::*;

    fn app() -> Router {
        let state = AppState::new(ApiConfig::default());
        seed::seed_catalog(state.catalog());
        Router::new().nest("/api", routes()).with_state(state)
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(request)
            .await
            .expect("request should not fail at the transport level");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let value = serde_json::from_slice(&bytes).expect("JSON body");
        (status, value)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request")
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    #[tokio::test]
    async fn test_list_categories() {
        let app = app();
        let (status, body) = send(&app, get_request("/api/categories")).await;

        assert_eq!(status, StatusCode::OK);
        let categories: Vec<Category> = serde_json::from_value(body).expect("categories");
        assert_eq!(categories.len(), 5);
        assert_eq!(categories.first().map(|c| c.slug.as_str()), Some("rings"));
    }

    #[tokio::test]
    async fn test_list_subcategories_scoped_by_category() {
        let app = app();
        let (status, body) = send(&app, get_request("/api/subcategories?categoryId=1")).await;

        assert_eq!(status, StatusCode::OK);
        let subcategories = body.as_array().expect("array");
        assert_eq!(subcategories.len(), 4);
        assert!(
            subcategories
                .iter()
                .all(|s| s.get("categoryId") == Some(&json!(1)))
        );
    }

    #[tokio::test]
    async fn test_list_products_default_page() {
        let app = app();
        let (status, body) = send(&app, get_request("/api/products")).await;

        assert_eq!(status, StatusCode::OK);
        let page: ProductPage = serde_json::from_value(body).expect("page");
        assert_eq!(page.pagination.total, 50);
        assert_eq!(page.pagination.limit, 12);
        assert_eq!(page.pagination.total_pages, 5);
        assert_eq!(page.products.len(), 12);
    }

    #[tokio::test]
    async fn test_list_products_search() {
        let app = app();
        let (status, body) = send(&app, get_request("/api/products?search=hoop")).await;

        assert_eq!(status, StatusCode::OK);
        let page: ProductPage = serde_json::from_value(body).expect("page");
        assert!(
            page.products
                .iter()
                .any(|p| p.slug == "golden-hoop-earrings")
        );
    }

    #[tokio::test]
    async fn test_show_product_by_slug() {
        let app = app();
        let (status, body) =
            send(&app, get_request("/api/products/diamond-engagement-ring")).await;

        assert_eq!(status, StatusCode::OK);
        let product: Product = serde_json::from_value(body).expect("product");
        assert_eq!(product.name, "Diamond Engagement Ring");
    }

    #[tokio::test]
    async fn test_show_product_unknown_slug_is_404() {
        let app = app();
        let (status, body) = send(&app, get_request("/api/products/no-such-slug")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Product not found");
    }

    #[tokio::test]
    async fn test_cart_requires_session_id() {
        let app = app();
        let (status, body) = send(&app, get_request("/api/cart")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Session ID is required");
    }

    #[tokio::test]
    async fn test_empty_cart_snapshot() {
        let app = app();
        let (status, body) = send(&app, get_request("/api/cart?sessionId=sess-1")).await;

        assert_eq!(status, StatusCode::OK);
        let cart: Cart = serde_json::from_value(body).expect("cart");
        assert!(cart.items.is_empty());
        assert_eq!(cart.item_count, 0);
    }

    #[tokio::test]
    async fn test_add_to_cart_flow() {
        let app = app();

        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/api/cart",
                json!({"productId": 1, "quantity": 2, "sessionId": "sess-1"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let added: CartWithAddedItem = serde_json::from_value(body).expect("response");
        assert_eq!(added.cart.item_count, 2);
        assert_eq!(added.added_item.quantity, 2);

        // second add of the same product merges into the same line
        let (_, body) = send(
            &app,
            json_request(
                "POST",
                "/api/cart",
                json!({"productId": 1, "sessionId": "sess-1"}),
            ),
        )
        .await;
        let added: CartWithAddedItem = serde_json::from_value(body).expect("response");
        assert_eq!(added.cart.items.len(), 1);
        assert_eq!(added.cart.item_count, 3);
    }

    #[tokio::test]
    async fn test_add_unknown_product_is_404() {
        let app = app();
        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/api/cart",
                json!({"productId": 999, "sessionId": "sess-1"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Product not found");
    }

    #[tokio::test]
    async fn test_add_without_identity_is_400() {
        let app = app();
        let (status, _) = send(
            &app,
            json_request("POST", "/api/cart", json!({"productId": 1})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_add_malformed_body_is_400() {
        let app = app();
        let (status, _) = send(
            &app,
            json_request("POST", "/api/cart", json!({"quantity": 1})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_quantity_and_remove_via_zero() {
        let app = app();
        let (_, body) = send(
            &app,
            json_request(
                "POST",
                "/api/cart",
                json!({"productId": 1, "sessionId": "sess-1"}),
            ),
        )
        .await;
        let added: CartWithAddedItem = serde_json::from_value(body).expect("response");
        let id = added.added_item.id;

        let (status, body) = send(
            &app,
            json_request("PUT", &format!("/api/cart/{id}"), json!({"quantity": 5})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let cart: Cart = serde_json::from_value(body).expect("cart");
        assert_eq!(cart.item_count, 5);

        let (status, body) = send(
            &app,
            json_request("PUT", &format!("/api/cart/{id}"), json!({"quantity": 0})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let cart: Cart = serde_json::from_value(body).expect("cart");
        assert!(cart.items.is_empty());
    }

    #[tokio::test]
    async fn test_update_rejects_negative_quantity() {
        let app = app();
        let (_, body) = send(
            &app,
            json_request(
                "POST",
                "/api/cart",
                json!({"productId": 1, "sessionId": "sess-1"}),
            ),
        )
        .await;
        let added: CartWithAddedItem = serde_json::from_value(body).expect("response");

        let (status, body) = send(
            &app,
            json_request(
                "PUT",
                &format!("/api/cart/{}", added.added_item.id),
                json!({"quantity": -1}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid quantity");
    }

    #[tokio::test]
    async fn test_update_unknown_item_is_404() {
        let app = app();
        let (status, body) = send(
            &app,
            json_request("PUT", "/api/cart/42", json!({"quantity": 1})),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Cart item not found");
    }

    #[tokio::test]
    async fn test_delete_line_returns_remaining_snapshot() {
        let app = app();
        let (_, body) = send(
            &app,
            json_request(
                "POST",
                "/api/cart",
                json!({"productId": 1, "sessionId": "sess-1"}),
            ),
        )
        .await;
        let added: CartWithAddedItem = serde_json::from_value(body).expect("response");

        let (status, body) = send(
            &app,
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/cart/{}", added.added_item.id))
                .body(Body::empty())
                .expect("request"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let cart: Cart = serde_json::from_value(body).expect("cart");
        assert!(cart.items.is_empty());
        assert_eq!(cart.item_count, 0);
    }

    #[tokio::test]
    async fn test_clear_cart() {
        let app = app();
        send(
            &app,
            json_request(
                "POST",
                "/api/cart",
                json!({"productId": 1, "sessionId": "sess-1"}),
            ),
        )
        .await;

        let (status, body) = send(
            &app,
            Request::builder()
                .method("DELETE")
                .uri("/api/cart?sessionId=sess-1")
                .body(Body::empty())
                .expect("request"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let cart: Cart = serde_json::from_value(body).expect("cart");
        assert!(cart.items.is_empty());

        let (_, body) = send(&app, get_request("/api/cart?sessionId=sess-1")).await;
        let cart: Cart = serde_json::from_value(body).expect("cart");
        assert!(cart.items.is_empty());
    }

    #[tokio::test]
    async fn test_clear_cart_requires_session_id() {
        let app = app();
        let (status, body) = send(
            &app,
            Request::builder()
                .method("DELETE")
                .uri("/api/cart")
                .body(Body::empty())
                .expect("request"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Session ID is required");
    }
}
