//! Wire types shared by the API server and the typed client.
//!
//! These are the exact JSON shapes the storefront endpoints produce.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CartItem, CartItemWithProduct, Product};

/// Pagination metadata for a product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Item count after filtering, before pagination.
    pub total: usize,
    /// 1-indexed page number.
    pub page: usize,
    /// Page size.
    pub limit: usize,
    /// `ceil(total / limit)`.
    pub total_pages: usize,
}

/// One page of a product listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub pagination: Pagination,
}

/// A full cart snapshot: joined line items, grand total, and item count.
///
/// Every cart endpoint returns this shape, and the cart client replaces its
/// entire local state with it after each mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub items: Vec<CartItemWithProduct>,
    pub total: Decimal,
    /// Sum of line quantities, not line count.
    pub item_count: i64,
}

impl Cart {
    /// Assemble a snapshot from joined items, computing the item count.
    #[must_use]
    pub fn new(items: Vec<CartItemWithProduct>, total: Decimal) -> Self {
        let item_count = items.iter().map(|item| i64::from(item.item.quantity)).sum();
        Self {
            items,
            total,
            item_count,
        }
    }

    /// An empty cart.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: Decimal::ZERO,
            item_count: 0,
        }
    }
}

/// Response to adding a line: the updated snapshot plus the touched item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartWithAddedItem {
    #[serde(flatten)]
    pub cart: Cart,
    pub added_item: CartItem,
}

/// The JSON body every error response carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cart() {
        let cart = Cart::empty();
        assert!(cart.items.is_empty());
        assert_eq!(cart.total, Decimal::ZERO);
        assert_eq!(cart.item_count, 0);
    }

    #[test]
    fn test_pagination_wire_shape() {
        let pagination = Pagination {
            total: 50,
            page: 2,
            limit: 12,
            total_pages: 5,
        };
        let value = serde_json::to_value(pagination).expect("serialize");
        assert_eq!(value["totalPages"], 5);
        assert_eq!(value["total"], 50);
    }
}
