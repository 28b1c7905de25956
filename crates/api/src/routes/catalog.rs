//! Catalog route handlers: categories, subcategories, and product listings.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde::Deserialize;
use tracing::instrument;

use aurelia_core::{Category, CategoryId, Product, ProductPage, Subcategory};

use crate::error::{ApiError, Result};
use crate::query::ProductQuery;
use crate::state::AppState;

/// Query parameters for the subcategory listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryQuery {
    pub category_id: Option<CategoryId>,
}

/// List all categories.
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.catalog().categories())
}

/// List subcategories, optionally scoped to one category.
pub async fn list_subcategories(
    State(state): State<AppState>,
    query: std::result::Result<Query<SubcategoryQuery>, QueryRejection>,
) -> Result<Json<Vec<Subcategory>>> {
    let Query(query) = query.map_err(bad_query)?;

    let subcategories = match query.category_id {
        Some(category_id) => state.catalog().subcategories_by_category(category_id),
        None => state.catalog().subcategories(),
    };
    Ok(Json(subcategories))
}

/// List products with filtering, sorting, and pagination.
#[instrument(skip(state, query))]
pub async fn list_products(
    State(state): State<AppState>,
    query: std::result::Result<Query<ProductQuery>, QueryRejection>,
) -> Result<Json<ProductPage>> {
    let Query(query) = query.map_err(bad_query)?;
    Ok(Json(query.execute(state.catalog())))
}

/// Show one product by its slug.
#[instrument(skip(state))]
pub async fn show_product(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Product>> {
    state
        .catalog()
        .product_by_slug(&slug)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))
}

fn bad_query(rejection: QueryRejection) -> ApiError {
    ApiError::BadRequest(format!("Invalid query: {}", rejection.body_text()))
}
