//! Authoritative in-memory collection of categories, subcategories, and
//! products.
//!
//! Records live in `BTreeMap`s keyed by their monotonically assigned ids, so
//! iteration order is insertion order. Point lookups return `Option` - a
//! missing id or slug is expected absence, never an error.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use aurelia_core::{
    Category, CategoryId, NewCategory, NewProduct, NewSubcategory, Product, ProductId,
    Subcategory, SubcategoryId,
};

use super::IdSequence;

/// Owner of all catalog records.
///
/// Catalog content is write-once at seed time; afterwards every operation is
/// a read. A single `RwLock` guards the whole catalog.
#[derive(Debug)]
pub struct CatalogStore {
    state: RwLock<CatalogState>,
}

#[derive(Debug)]
struct CatalogState {
    categories: BTreeMap<CategoryId, Category>,
    subcategories: BTreeMap<SubcategoryId, Subcategory>,
    products: BTreeMap<ProductId, Product>,
    category_ids: IdSequence,
    subcategory_ids: IdSequence,
    product_ids: IdSequence,
}

impl CatalogStore {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwLock::new(CatalogState {
                categories: BTreeMap::new(),
                subcategories: BTreeMap::new(),
                products: BTreeMap::new(),
                category_ids: IdSequence::default(),
                subcategory_ids: IdSequence::default(),
                product_ids: IdSequence::default(),
            }),
        }
    }

    // A poisoned lock only means another handler panicked mid-operation;
    // the maps themselves are always structurally intact.
    fn read(&self) -> RwLockReadGuard<'_, CatalogState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CatalogState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    // =========================================================================
    // Categories
    // =========================================================================

    /// All categories in insertion order.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        self.read().categories.values().cloned().collect()
    }

    /// Point lookup by id.
    #[must_use]
    pub fn category(&self, id: CategoryId) -> Option<Category> {
        self.read().categories.get(&id).cloned()
    }

    /// Case-sensitive exact match on the unique slug.
    #[must_use]
    pub fn category_by_slug(&self, slug: &str) -> Option<Category> {
        self.read()
            .categories
            .values()
            .find(|category| category.slug == slug)
            .cloned()
    }

    /// Store a new category under the next sequential id.
    pub fn create_category(&self, data: NewCategory) -> Category {
        let mut state = self.write();
        let id = CategoryId::new(state.category_ids.next_id());
        let category = Category {
            id,
            name: data.name,
            slug: data.slug,
            description: data.description,
            image: data.image,
        };
        state.categories.insert(id, category.clone());
        category
    }

    // =========================================================================
    // Subcategories
    // =========================================================================

    /// All subcategories in insertion order.
    #[must_use]
    pub fn subcategories(&self) -> Vec<Subcategory> {
        self.read().subcategories.values().cloned().collect()
    }

    /// All subcategories belonging to one category.
    #[must_use]
    pub fn subcategories_by_category(&self, category_id: CategoryId) -> Vec<Subcategory> {
        self.read()
            .subcategories
            .values()
            .filter(|subcategory| subcategory.category_id == category_id)
            .cloned()
            .collect()
    }

    /// Point lookup by id.
    #[must_use]
    pub fn subcategory(&self, id: SubcategoryId) -> Option<Subcategory> {
        self.read().subcategories.get(&id).cloned()
    }

    /// Case-sensitive exact match on the unique slug.
    #[must_use]
    pub fn subcategory_by_slug(&self, slug: &str) -> Option<Subcategory> {
        self.read()
            .subcategories
            .values()
            .find(|subcategory| subcategory.slug == slug)
            .cloned()
    }

    /// Store a new subcategory under the next sequential id.
    pub fn create_subcategory(&self, data: NewSubcategory) -> Subcategory {
        let mut state = self.write();
        let id = SubcategoryId::new(state.subcategory_ids.next_id());
        let subcategory = Subcategory {
            id,
            category_id: data.category_id,
            name: data.name,
            slug: data.slug,
            description: data.description,
        };
        state.subcategories.insert(id, subcategory.clone());
        subcategory
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// All products in insertion order.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.read().products.values().cloned().collect()
    }

    /// Point lookup by id.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<Product> {
        self.read().products.get(&id).cloned()
    }

    /// Case-sensitive exact match on the unique slug.
    #[must_use]
    pub fn product_by_slug(&self, slug: &str) -> Option<Product> {
        self.read()
            .products
            .values()
            .find(|product| product.slug == slug)
            .cloned()
    }

    /// All products in one category.
    #[must_use]
    pub fn products_by_category(&self, category_id: CategoryId) -> Vec<Product> {
        self.filter_products(|product| product.category_id == category_id)
    }

    /// All products in one subcategory.
    #[must_use]
    pub fn products_by_subcategory(&self, subcategory_id: SubcategoryId) -> Vec<Product> {
        self.filter_products(|product| product.subcategory_id == Some(subcategory_id))
    }

    /// Case-insensitive substring search over name, description, metal, and
    /// gemstone. Any one field matching is sufficient.
    #[must_use]
    pub fn search_products(&self, query: &str) -> Vec<Product> {
        let needle = query.to_lowercase();
        self.filter_products(|product| {
            product.name.to_lowercase().contains(&needle)
                || product.description.to_lowercase().contains(&needle)
                || field_contains(product.metal.as_deref(), &needle)
                || field_contains(product.gemstone.as_deref(), &needle)
        })
    }

    /// Products flagged as featured.
    #[must_use]
    pub fn featured_products(&self) -> Vec<Product> {
        self.filter_products(|product| product.is_featured)
    }

    /// Products flagged as new arrivals.
    #[must_use]
    pub fn new_arrivals(&self) -> Vec<Product> {
        self.filter_products(|product| product.is_new)
    }

    /// Products flagged as bestsellers.
    #[must_use]
    pub fn bestsellers(&self) -> Vec<Product> {
        self.filter_products(|product| product.is_bestseller)
    }

    /// Products flagged as on sale.
    #[must_use]
    pub fn on_sale_products(&self) -> Vec<Product> {
        self.filter_products(|product| product.is_on_sale)
    }

    /// Store a new product under the next sequential id, stamping
    /// `createdAt`.
    pub fn create_product(&self, data: NewProduct) -> Product {
        let mut state = self.write();
        let id = ProductId::new(state.product_ids.next_id());
        let product = Product {
            id,
            name: data.name,
            slug: data.slug,
            description: data.description,
            price: data.price,
            discount_price: data.discount_price,
            category_id: data.category_id,
            subcategory_id: data.subcategory_id,
            image: data.image,
            additional_images: data.additional_images,
            metal: data.metal,
            gemstone: data.gemstone,
            is_new: data.is_new,
            is_bestseller: data.is_bestseller,
            is_featured: data.is_featured,
            is_on_sale: data.is_on_sale,
            in_stock: data.in_stock,
            rating: data.rating,
            review_count: data.review_count,
            created_at: Utc::now(),
        };
        state.products.insert(id, product.clone());
        product
    }

    fn filter_products(&self, predicate: impl Fn(&Product) -> bool) -> Vec<Product> {
        self.read()
            .products
            .values()
            .filter(|product| predicate(product))
            .cloned()
            .collect()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

fn field_contains(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase().contains(needle))
}
