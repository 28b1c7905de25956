//! Product listing query service.
//!
//! Translates one listing request - primary selector, secondary filters,
//! sort, pagination - into a page over the catalog, applied in that fixed
//! order.

use rust_decimal::Decimal;
use serde::Deserialize;

use aurelia_core::{CategoryId, Pagination, Product, ProductPage, SubcategoryId};

use crate::store::CatalogStore;

/// Default page size when `limit` is absent.
const DEFAULT_LIMIT: i64 = 12;

/// Sort order for a product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSort {
    /// Effective price, cheapest first.
    PriceAsc,
    /// Effective price, most expensive first.
    PriceDesc,
    /// Creation time, newest first.
    Newest,
    /// Rating, highest first.
    Rating,
}

impl ProductSort {
    /// Parse the wire value. Unknown values are not an error - the listing
    /// keeps insertion order, matching the API's historical behavior.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "price-asc" => Some(Self::PriceAsc),
            "price-desc" => Some(Self::PriceDesc),
            "newest" => Some(Self::Newest),
            "rating" => Some(Self::Rating),
            _ => None,
        }
    }
}

/// A single product listing request.
///
/// Deserializes directly from the `GET /api/products` query string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    /// Primary selectors, mutually exclusive; the first present wins in the
    /// order search > category > subcategory > featured > new > bestsellers
    /// > sale.
    pub search: Option<String>,
    pub category_id: Option<CategoryId>,
    pub subcategory_id: Option<SubcategoryId>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, rename = "new")]
    pub new_arrivals: bool,
    #[serde(default)]
    pub bestsellers: bool,
    #[serde(default)]
    pub sale: bool,

    /// Secondary filters, combined with AND.
    pub metal: Option<String>,
    pub gemstone: Option<String>,
    /// Keeps products whose effective price is at least this.
    pub min_price: Option<Decimal>,
    /// Keeps products whose effective price is at most this.
    pub max_price: Option<Decimal>,

    /// Wire sort value; unknown values leave insertion order untouched.
    pub sort: Option<String>,

    /// 1-indexed page, clamped to a minimum of 1.
    pub page: Option<i64>,
    /// Page size, clamped to a minimum of 1.
    pub limit: Option<i64>,
}

impl ProductQuery {
    /// Run the query against the catalog.
    #[must_use]
    pub fn execute(&self, catalog: &CatalogStore) -> ProductPage {
        let mut products = self.select_base(catalog);
        self.apply_filters(&mut products);
        self.apply_sort(&mut products);
        self.paginate(products)
    }

    /// Step 1: the mutually exclusive primary selector. Only one applies.
    fn select_base(&self, catalog: &CatalogStore) -> Vec<Product> {
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            catalog.search_products(search)
        } else if let Some(category_id) = self.category_id {
            catalog.products_by_category(category_id)
        } else if let Some(subcategory_id) = self.subcategory_id {
            catalog.products_by_subcategory(subcategory_id)
        } else if self.featured {
            catalog.featured_products()
        } else if self.new_arrivals {
            catalog.new_arrivals()
        } else if self.bestsellers {
            catalog.bestsellers()
        } else if self.sale {
            catalog.on_sale_products()
        } else {
            catalog.products()
        }
    }

    /// Step 2: optional attribute filters, all ANDed.
    fn apply_filters(&self, products: &mut Vec<Product>) {
        if let Some(metal) = &self.metal {
            let metal = metal.to_lowercase();
            products.retain(|product| {
                product
                    .metal
                    .as_deref()
                    .is_some_and(|value| value.to_lowercase() == metal)
            });
        }
        if let Some(gemstone) = &self.gemstone {
            let gemstone = gemstone.to_lowercase();
            products.retain(|product| {
                product
                    .gemstone
                    .as_deref()
                    .is_some_and(|value| value.to_lowercase() == gemstone)
            });
        }
        if let Some(min_price) = self.min_price {
            products.retain(|product| product.effective_price() >= min_price);
        }
        if let Some(max_price) = self.max_price {
            products.retain(|product| product.effective_price() <= max_price);
        }
    }

    /// Step 3: optional sort. `sort_by` is stable, so ties keep the
    /// pre-sort order.
    fn apply_sort(&self, products: &mut [Product]) {
        let Some(sort) = self.sort.as_deref().and_then(ProductSort::parse) else {
            return;
        };

        match sort {
            ProductSort::PriceAsc => {
                products.sort_by(|a, b| a.effective_price().cmp(&b.effective_price()));
            }
            ProductSort::PriceDesc => {
                products.sort_by(|a, b| b.effective_price().cmp(&a.effective_price()));
            }
            ProductSort::Newest => {
                products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            }
            ProductSort::Rating => {
                products.sort_by(|a, b| {
                    b.rating
                        .partial_cmp(&a.rating)
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
            }
        }
    }

    /// Step 4: pagination. A page past the end yields an empty slice.
    fn paginate(&self, products: Vec<Product>) -> ProductPage {
        let page = clamp_to_one(self.page.unwrap_or(1));
        let limit = clamp_to_one(self.limit.unwrap_or(DEFAULT_LIMIT));

        let total = products.len();
        let total_pages = total.div_ceil(limit);
        let offset = (page - 1).saturating_mul(limit);

        let products = products.into_iter().skip(offset).take(limit).collect();

        ProductPage {
            products,
            pagination: Pagination {
                total,
                page,
                limit,
                total_pages,
            },
        }
    }
}

/// Clamp a wire integer to a usable 1-based value.
fn clamp_to_one(value: i64) -> usize {
    usize::try_from(value.max(1)).unwrap_or(1)
}
