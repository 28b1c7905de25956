//! Sample catalog seeding.
//!
//! The API serves an in-memory catalog, so the server seeds it at startup:
//! five categories, their subcategories, ten handcrafted products, and forty
//! generated variations. Seeding goes through the public `create_*`
//! operations so the id sequences behave exactly as production writes would.

use rust_decimal::{Decimal, dec};

use aurelia_core::{
    Category, CategoryId, NewCategory, NewProduct, NewSubcategory, Subcategory,
};

use crate::store::CatalogStore;

const GEMSTONES: [&str; 8] = [
    "Diamond", "Sapphire", "Emerald", "Ruby", "Pearl", "Amethyst", "Topaz", "Opal",
];

const METALS: [&str; 5] = [
    "White Gold",
    "Yellow Gold",
    "Rose Gold",
    "Platinum",
    "Silver",
];

/// Populate the catalog with the sample storefront data.
pub fn seed_catalog(catalog: &CatalogStore) {
    let categories = seed_categories(catalog);
    let subcategories = seed_subcategories(catalog, &categories);
    seed_products(catalog, &categories, &subcategories);

    tracing::info!(
        categories = categories.len(),
        subcategories = subcategories.len(),
        products = catalog.products().len(),
        "Catalog seeded"
    );
}

fn seed_categories(catalog: &CatalogStore) -> Vec<Category> {
    let rows = [
        (
            "Rings",
            "rings",
            "Elegant rings for all occasions",
            "https://images.unsplash.com/photo-1605100804763-247f67b3557e?w=600&q=80",
        ),
        (
            "Earrings",
            "earrings",
            "Beautiful earrings to complete your look",
            "https://images.unsplash.com/photo-1589128777073-263566ae5e4d?w=600&q=80",
        ),
        (
            "Necklaces",
            "necklaces",
            "Stunning necklaces for any style",
            "https://images.unsplash.com/photo-1599643478518-a784e5dc4c8f?w=600&q=80",
        ),
        (
            "Bracelets",
            "bracelets",
            "Charming bracelets for your wrist",
            "https://images.unsplash.com/photo-1630018548696-e1900b010acc?w=600&q=80",
        ),
        (
            "Gemstones",
            "gemstones",
            "Precious gems for unique jewelry",
            "https://images.unsplash.com/photo-1574010498544-4d73cfd939ed?w=600&q=80",
        ),
    ];

    rows.into_iter()
        .map(|(name, slug, description, image)| {
            catalog.create_category(NewCategory {
                name: name.to_string(),
                slug: slug.to_string(),
                description: Some(description.to_string()),
                image: Some(image.to_string()),
            })
        })
        .collect()
}

fn seed_subcategories(catalog: &CatalogStore, categories: &[Category]) -> Vec<Subcategory> {
    // (category index, name, slug, description)
    let rows = [
        (0, "Diamond Rings", "diamond-rings", "Sparkling diamond rings"),
        (0, "Engagement Rings", "engagement-rings", "Perfect for your special moment"),
        (0, "Wedding Bands", "wedding-bands", "Elegant wedding bands"),
        (0, "Gemstone Rings", "gemstone-rings", "Rings with beautiful gemstones"),
        (1, "Stud Earrings", "stud-earrings", "Classic stud earrings"),
        (1, "Hoop Earrings", "hoop-earrings", "Fashionable hoop earrings"),
        (1, "Drop Earrings", "drop-earrings", "Elegant drop earrings"),
        (2, "Pendants", "pendants", "Beautiful pendant necklaces"),
        (2, "Chokers", "chokers", "Stylish choker necklaces"),
        (2, "Chains", "chains", "Fine chain necklaces"),
        (3, "Tennis Bracelets", "tennis-bracelets", "Elegant tennis bracelets"),
        (3, "Cuff Bracelets", "cuff-bracelets", "Bold cuff bracelets"),
        (3, "Charm Bracelets", "charm-bracelets", "Delightful charm bracelets"),
        (4, "Diamonds", "diamonds", "Brilliant diamonds"),
        (4, "Sapphires", "sapphires", "Rich sapphires"),
        (4, "Emeralds", "emeralds", "Vibrant emeralds"),
        (4, "Rubies", "rubies", "Passionate rubies"),
    ];

    rows.into_iter()
        .filter_map(|(category_index, name, slug, description)| {
            let category = categories.get(category_index)?;
            Some(catalog.create_subcategory(NewSubcategory {
                category_id: category.id,
                name: name.to_string(),
                slug: slug.to_string(),
                description: Some(description.to_string()),
            }))
        })
        .collect()
}

struct HandcraftedProduct {
    name: &'static str,
    slug: &'static str,
    description: &'static str,
    price: Decimal,
    discount_price: Option<Decimal>,
    category_index: usize,
    subcategory_index: usize,
    image: &'static str,
    metal: &'static str,
    gemstone: Option<&'static str>,
    is_new: bool,
    is_bestseller: bool,
    is_featured: bool,
    rating: f64,
    review_count: i32,
}

#[allow(clippy::too_many_lines)]
fn handcrafted_products() -> Vec<HandcraftedProduct> {
    vec![
        HandcraftedProduct {
            name: "Diamond Engagement Ring",
            slug: "diamond-engagement-ring",
            description: "A stunning diamond engagement ring set in 14k white gold, featuring a brilliant-cut diamond center stone surrounded by a halo of smaller diamonds.",
            price: dec!(1499.00),
            discount_price: Some(dec!(1299.00)),
            category_index: 0,
            subcategory_index: 1,
            image: "https://images.unsplash.com/photo-1603561591411-07134e71a2a9?w=600&q=80",
            metal: "White Gold",
            gemstone: Some("Diamond"),
            is_new: true,
            is_bestseller: false,
            is_featured: true,
            rating: 4.5,
            review_count: 42,
        },
        HandcraftedProduct {
            name: "White Gold Diamond Ring",
            slug: "white-gold-diamond-ring",
            description: "Elegant white gold ring with a cluster of diamonds for a timeless look.",
            price: dec!(899.00),
            discount_price: None,
            category_index: 0,
            subcategory_index: 0,
            image: "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?w=600&q=80",
            metal: "White Gold",
            gemstone: Some("Diamond"),
            is_new: false,
            is_bestseller: false,
            is_featured: false,
            rating: 4.0,
            review_count: 36,
        },
        HandcraftedProduct {
            name: "Emerald Statement Ring",
            slug: "emerald-statement-ring",
            description: "Bold emerald statement ring set in yellow gold with diamond accents.",
            price: dec!(1499.00),
            discount_price: Some(dec!(1199.00)),
            category_index: 0,
            subcategory_index: 3,
            image: "https://images.unsplash.com/photo-1574010498544-4d73cfd939ed?w=600&q=80",
            metal: "Yellow Gold",
            gemstone: Some("Emerald"),
            is_new: false,
            is_bestseller: false,
            is_featured: false,
            rating: 4.5,
            review_count: 41,
        },
        HandcraftedProduct {
            name: "Pearl Stud Earrings",
            slug: "pearl-stud-earrings",
            description: "Classic pearl stud earrings set in 14k white gold, featuring lustrous freshwater pearls.",
            price: dec!(399.00),
            discount_price: Some(dec!(349.00)),
            category_index: 1,
            subcategory_index: 4,
            image: "https://images.unsplash.com/photo-1611591437281-460bfbe1220a?w=600&q=80",
            metal: "White Gold",
            gemstone: Some("Pearl"),
            is_new: false,
            is_bestseller: true,
            is_featured: true,
            rating: 5.0,
            review_count: 87,
        },
        HandcraftedProduct {
            name: "Golden Hoop Earrings",
            slug: "golden-hoop-earrings",
            description: "Elegant gold hoop earrings with a polished finish, perfect for everyday wear.",
            price: dec!(429.00),
            discount_price: None,
            category_index: 1,
            subcategory_index: 5,
            image: "https://images.unsplash.com/photo-1617038220319-276d3cfab638?w=600&q=80",
            metal: "Yellow Gold",
            gemstone: None,
            is_new: false,
            is_bestseller: false,
            is_featured: false,
            rating: 4.5,
            review_count: 52,
        },
        HandcraftedProduct {
            name: "Pearl Drop Earrings",
            slug: "pearl-drop-earrings",
            description: "Elegant pearl drop earrings with white gold posts and settings.",
            price: dec!(399.00),
            discount_price: None,
            category_index: 1,
            subcategory_index: 6,
            image: "https://images.unsplash.com/photo-1602173574767-37ac01994b2a?w=600&q=80",
            metal: "White Gold",
            gemstone: Some("Pearl"),
            is_new: false,
            is_bestseller: false,
            is_featured: false,
            rating: 4.0,
            review_count: 33,
        },
        HandcraftedProduct {
            name: "Sapphire Pendant Necklace",
            slug: "sapphire-pendant-necklace",
            description: "Stunning sapphire pendant necklace set in 18k white gold with a delicate chain.",
            price: dec!(729.00),
            discount_price: None,
            category_index: 2,
            subcategory_index: 7,
            image: "https://images.unsplash.com/photo-1576022162933-67afca6d2783?w=600&q=80",
            metal: "White Gold",
            gemstone: Some("Sapphire"),
            is_new: false,
            is_bestseller: false,
            is_featured: true,
            rating: 4.0,
            review_count: 29,
        },
        HandcraftedProduct {
            name: "Gold Chain Necklace",
            slug: "gold-chain-necklace",
            description: "Classic gold chain necklace with a durable link design.",
            price: dec!(599.00),
            discount_price: None,
            category_index: 2,
            subcategory_index: 9,
            image: "https://images.unsplash.com/photo-1599643478518-a784e5dc4c8f?w=600&q=80",
            metal: "Yellow Gold",
            gemstone: None,
            is_new: false,
            is_bestseller: false,
            is_featured: false,
            rating: 4.0,
            review_count: 28,
        },
        HandcraftedProduct {
            name: "Diamond Tennis Bracelet",
            slug: "diamond-tennis-bracelet",
            description: "Luxurious diamond tennis bracelet featuring 4 carats of round brilliant diamonds set in 18k white gold.",
            price: dec!(2499.00),
            discount_price: Some(dec!(1899.00)),
            category_index: 3,
            subcategory_index: 10,
            image: "https://images.unsplash.com/photo-1535632787350-4e68ef0ac584?w=600&q=80",
            metal: "White Gold",
            gemstone: Some("Diamond"),
            is_new: false,
            is_bestseller: false,
            is_featured: true,
            rating: 4.5,
            review_count: 54,
        },
        HandcraftedProduct {
            name: "Gemstone Charm Bracelet",
            slug: "gemstone-charm-bracelet",
            description: "Colorful gemstone charm bracelet with mixed stones in gold settings.",
            price: dec!(549.00),
            discount_price: None,
            category_index: 3,
            subcategory_index: 12,
            image: "https://images.unsplash.com/photo-1630018548696-e1900b010acc?w=600&q=80",
            metal: "Yellow Gold",
            gemstone: Some("Mixed"),
            is_new: true,
            is_bestseller: false,
            is_featured: false,
            rating: 5.0,
            review_count: 19,
        },
    ]
}

fn seed_products(
    catalog: &CatalogStore,
    categories: &[Category],
    subcategories: &[Subcategory],
) {
    let handcrafted = handcrafted_products();
    let images: Vec<String> = handcrafted.iter().map(|p| p.image.to_string()).collect();

    for product in &handcrafted {
        let Some(category) = categories.get(product.category_index) else {
            continue;
        };
        catalog.create_product(NewProduct {
            name: product.name.to_string(),
            slug: product.slug.to_string(),
            description: product.description.to_string(),
            price: product.price,
            discount_price: product.discount_price,
            category_id: category.id,
            subcategory_id: subcategories.get(product.subcategory_index).map(|s| s.id),
            image: product.image.to_string(),
            additional_images: Vec::new(),
            metal: Some(product.metal.to_string()),
            gemstone: product.gemstone.map(str::to_string),
            is_new: product.is_new,
            is_bestseller: product.is_bestseller,
            is_featured: product.is_featured,
            is_on_sale: product.discount_price.is_some(),
            in_stock: true,
            rating: product.rating,
            review_count: product.review_count,
        });
    }

    // Generated variations cycling metals, gemstones, prices, and flags,
    // distributed across the five categories.
    for i in 1..=40_usize {
        let category_index = i % 5;
        let Some(category) = categories.get(category_index) else {
            continue;
        };

        let in_category: Vec<&Subcategory> = subcategories
            .iter()
            .filter(|subcategory| subcategory.category_id == category.id)
            .collect();
        let subcategory_id = in_category
            .get(i % in_category.len().max(1))
            .map(|subcategory| subcategory.id);

        let gemstone = GEMSTONES[i % GEMSTONES.len()];
        let metal = METALS[i % METALS.len()];
        let kind = product_kind(category.id);

        let price = Decimal::from(300 + i * 150);
        let on_sale = i % 4 == 0;
        let discount_price = on_sale.then(|| price * dec!(0.85));

        catalog.create_product(NewProduct {
            name: format!("{metal} {gemstone} {kind} {i}"),
            slug: format!(
                "{}-{}-{}-{i}",
                metal.to_lowercase().replace(' ', "-"),
                gemstone.to_lowercase(),
                kind.to_lowercase()
            ),
            description: format!(
                "Beautiful {} jewelry piece crafted from {}.",
                gemstone.to_lowercase(),
                metal.to_lowercase()
            ),
            price,
            discount_price,
            category_id: category.id,
            subcategory_id,
            image: images.get(i % images.len()).cloned().unwrap_or_default(),
            additional_images: Vec::new(),
            metal: Some(metal.to_string()),
            gemstone: Some(gemstone.to_string()),
            is_new: i % 7 == 0,
            is_bestseller: i % 8 == 0,
            is_featured: i % 5 == 0,
            is_on_sale: on_sale,
            in_stock: true,
            rating: 0.5f64.mul_add((i % 3) as f64, 3.5),
            review_count: i32::try_from(10 + i % 30).unwrap_or(10),
        });
    }
}

const fn product_kind(category_id: CategoryId) -> &'static str {
    match category_id.as_i32() {
        1 => "Ring",
        2 => "Earrings",
        3 => "Necklace",
        4 => "Bracelet",
        _ => "Pendant",
    }
}
