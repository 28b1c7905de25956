//! Catalog records: categories, subcategories, and products.
//!
//! Prices use [`rust_decimal::Decimal`] and serialize as decimal strings,
//! preserving precision on the wire. All field names are camelCase in JSON
//! to match the public storefront API.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CategoryId, ProductId, SubcategoryId};

/// A top-level jewelry category (e.g., Rings, Earrings).
///
/// Categories are created at seed time and immutable afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// URL-safe unique handle.
    pub slug: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Data for creating a [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// A more specific jewelry type within a category (e.g., Hoop Earrings).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    pub id: SubcategoryId,
    pub category_id: CategoryId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

/// Data for creating a [`Subcategory`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubcategory {
    pub category_id: CategoryId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A single sellable jewelry piece.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: Decimal,
    /// Sale price. When set, this is the price the shopper pays.
    pub discount_price: Option<Decimal>,
    pub category_id: CategoryId,
    pub subcategory_id: Option<SubcategoryId>,
    pub image: String,
    pub additional_images: Vec<String>,
    pub metal: Option<String>,
    pub gemstone: Option<String>,
    pub is_new: bool,
    pub is_bestseller: bool,
    pub is_featured: bool,
    pub is_on_sale: bool,
    pub in_stock: bool,
    pub rating: f64,
    pub review_count: i32,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// The price the shopper actually pays: the discount price when one is
    /// set, otherwise the list price.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        self.discount_price.unwrap_or(self.price)
    }
}

/// Data for creating a [`Product`].
///
/// The store assigns the id and stamps `createdAt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub discount_price: Option<Decimal>,
    pub category_id: CategoryId,
    #[serde(default)]
    pub subcategory_id: Option<SubcategoryId>,
    pub image: String,
    #[serde(default)]
    pub additional_images: Vec<String>,
    #[serde(default)]
    pub metal: Option<String>,
    #[serde(default)]
    pub gemstone: Option<String>,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_bestseller: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_on_sale: bool,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: i32,
}

const fn default_in_stock() -> bool {
    true
}
