// src/services/catalog.rs
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl Product {
    fn new(id: u32, name: &str, price: f64, category: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            price,
            category: category.to_string(),
        }
    }
}

static PRODUCTS: LazyLock<Vec<Product>> = LazyLock::new(|| {
    vec![
        Product::new(1, "Laptop", 999.99, "Electronics"),
        Product::new(2, "Smartphone", 699.99, "Electronics"),
        Product::new(3, "Headphones", 199.99, "Electronics"),
        Product::new(4, "Book", 19.99, "Books"),
        Product::new(5, "Coffee Mug", 12.99, "Home"),
    ]
});

/// The fixed, read-only product list.
pub fn products() -> &'static [Product] {
    &PRODUCTS
}

/// Products whose name contains `query`, ignoring case. An empty query matches everything.
pub fn match_by_name(query: &str) -> Vec<Product> {
    let needle = query.to_lowercase();
    PRODUCTS
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Catalog rendered as JSON for embedding in prompts.
pub fn products_json() -> String {
    serde_json::to_string(products()).unwrap_or_default()
}
