//! Integration tests for the cart lifecycle, driven through the typed
//! client.
//!
//! These tests require a running API server (cargo run -p aurelia-api).
//!
//! Run with: cargo test -p aurelia-integration-tests -- --ignored

use uuid::Uuid;

use aurelia_client::{ApiClient, CartClient, ClientError};
use aurelia_core::ProductId;
use aurelia_integration_tests::api_base_url;

/// A cart mirror with a session id no other test run shares.
fn fresh_cart() -> CartClient {
    let api = ApiClient::new(api_base_url());
    CartClient::new(api, format!("it-{}", Uuid::new_v4()))
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_cart_starts_empty() {
    let mut cart = fresh_cart();
    let snapshot = cart.refresh().await.expect("fetch cart");
    assert!(snapshot.items.is_empty());
    assert_eq!(snapshot.item_count, 0);
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_add_merge_and_remove_lifecycle() {
    let mut cart = fresh_cart();

    let added = cart.add(ProductId::new(1), None).await.expect("add");
    assert_eq!(added.quantity, 1);
    assert!(cart.is_drawer_open());
    assert_eq!(cart.item_count(), 1);

    // same product again: one line, summed quantity
    cart.add(ProductId::new(1), Some(2)).await.expect("add");
    let snapshot = cart.cart().expect("snapshot");
    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(snapshot.item_count, 3);

    let line_id = snapshot.items.first().expect("line").item.id;
    cart.remove(line_id).await.expect("remove");
    assert_eq!(cart.item_count(), 0);
    assert_eq!(cart.total(), rust_decimal::Decimal::ZERO);
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_set_quantity_zero_removes_line() {
    let mut cart = fresh_cart();

    let added = cart.add(ProductId::new(2), Some(2)).await.expect("add");
    cart.set_quantity(added.id, 0).await.expect("update");
    assert!(cart.cart().expect("snapshot").items.is_empty());
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_failed_add_leaves_state_untouched() {
    let mut cart = fresh_cart();
    cart.add(ProductId::new(1), None).await.expect("add");
    let before = cart.item_count();

    let result = cart.add(ProductId::new(999_999), None).await;
    match result {
        Err(ClientError::Api { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected API error, got {other:?}"),
    }
    assert_eq!(cart.item_count(), before);
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_clear_cart() {
    let mut cart = fresh_cart();
    cart.add(ProductId::new(1), None).await.expect("add");
    cart.add(ProductId::new(2), None).await.expect("add");

    let snapshot = cart.clear().await.expect("clear");
    assert!(snapshot.items.is_empty());
    assert_eq!(snapshot.item_count, 0);
}
