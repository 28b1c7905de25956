//! Cart route handlers.
//!
//! Every endpoint responds with a full cart snapshot rather than the changed
//! line alone; the storefront client replaces its whole local state with the
//! response, so a failed mutation leaves the previous state untouched.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use aurelia_core::{
    Cart, CartIdentity, CartItemId, CartWithAddedItem, NewCartItem, ProductId, UserId,
};

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Query parameters identifying whose cart to read or clear.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartQuery {
    pub session_id: Option<String>,
}

/// Add-to-cart request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    pub quantity: Option<i32>,
    pub user_id: Option<UserId>,
    pub session_id: Option<String>,
}

/// Quantity-update request body.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: i32,
}

/// Assemble the full snapshot for one shopper.
fn snapshot(state: &AppState, identity: &CartIdentity) -> Result<Cart> {
    let items = state.carts().items_with_products(identity)?;
    let total = state.carts().total(identity)?;
    Ok(Cart::new(items, total))
}

/// The session identity from the query string, or 400.
fn session_identity(query: CartQuery) -> Result<CartIdentity> {
    query
        .session_id
        .filter(|session_id| !session_id.is_empty())
        .map(CartIdentity::session)
        .ok_or_else(|| ApiError::BadRequest("Session ID is required".to_string()))
}

/// Show the cart for a session.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Query(query): Query<CartQuery>,
) -> Result<Json<Cart>> {
    let identity = session_identity(query)?;
    Ok(Json(snapshot(&state, &identity)?))
}

/// Add a product to the cart.
///
/// Validates that the product exists and is in stock before touching the
/// store. Responds 201 with the updated snapshot plus the touched line.
#[instrument(skip(state, payload))]
pub async fn add(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AddToCartRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(request) = payload
        .map_err(|rejection| ApiError::BadRequest(format!("Invalid cart data: {rejection}")))?;

    let identity = CartIdentity::from_parts(request.user_id, request.session_id)
        .ok_or_else(|| ApiError::BadRequest("A session ID or user ID is required".to_string()))?;

    let quantity = request.quantity.unwrap_or(1);
    if quantity < 1 {
        return Err(ApiError::BadRequest("Invalid quantity".to_string()));
    }

    let product = state
        .catalog()
        .product(request.product_id)
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;
    if !product.in_stock {
        return Err(ApiError::BadRequest("Product is out of stock".to_string()));
    }

    let added_item = state.carts().add(NewCartItem {
        identity: identity.clone(),
        product_id: request.product_id,
        quantity,
    })?;

    let cart = snapshot(&state, &identity)?;
    Ok((
        StatusCode::CREATED,
        Json(CartWithAddedItem { cart, added_item }),
    ))
}

/// Set a line's quantity; zero removes the line.
#[instrument(skip(state, payload))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<CartItemId>,
    payload: std::result::Result<Json<UpdateQuantityRequest>, JsonRejection>,
) -> Result<Json<Cart>> {
    let Json(request) = payload
        .map_err(|_rejection| ApiError::BadRequest("Invalid quantity".to_string()))?;
    if request.quantity < 0 {
        return Err(ApiError::BadRequest("Invalid quantity".to_string()));
    }

    let item = state
        .carts()
        .item(id)
        .ok_or_else(|| ApiError::NotFound("Cart item not found".to_string()))?;

    if request.quantity == 0 {
        state.carts().remove(id);
    } else {
        state.carts().update_quantity(id, request.quantity);
    }

    Ok(Json(snapshot(&state, &item.identity)?))
}

/// Remove a line from the cart.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<CartItemId>,
) -> Result<Json<Cart>> {
    let item = state
        .carts()
        .item(id)
        .ok_or_else(|| ApiError::NotFound("Cart item not found".to_string()))?;

    state.carts().remove(id);

    Ok(Json(snapshot(&state, &item.identity)?))
}

/// Clear all lines for a session.
#[instrument(skip(state))]
pub async fn clear(
    State(state): State<AppState>,
    Query(query): Query<CartQuery>,
) -> Result<Json<Cart>> {
    let identity = session_identity(query)?;
    state.carts().clear(Some(&identity));
    Ok(Json(Cart::empty()))
}
