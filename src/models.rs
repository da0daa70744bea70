//! Core data models for Vitrine
//!
//! Defines the fundamental data structures used throughout Vitrine:
//! - `Product`: one catalog entry, immutable once loaded
//! - `Catalog`: the ordered product list with reference lookups

use serde::Serialize;

/// A single product from the catalog source
///
/// `price` is already normalized at load time: it is never negative, and a
/// value that could not be parsed from the source is stored as `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    /// Unique reference code (SKU-like, primary key)
    pub reference: String,

    /// Display name
    pub name: String,

    /// Display description
    pub description: String,

    /// Unit price in the store currency
    pub price: f64,

    /// Image filename relative to the assets directory, if any
    pub image: Option<String>,
}

/// An ordered, immutable product list
///
/// Preserves source row order. References are unique: the loader keeps the
/// first occurrence of a duplicated reference, so `find` resolves to exactly
/// one product or none.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Look up a product by its reference code
    pub fn find(&self, reference: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.reference == reference)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
