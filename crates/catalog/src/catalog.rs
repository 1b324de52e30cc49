//! In-memory catalog snapshot with category filtering and grouping.

use std::collections::BTreeMap;

use serde::Serialize;

use plipshop_core::ProductId;

use crate::category::ProductCategory;
use crate::product::Product;

/// Read-only product list, in provider order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn empty() -> Self {
        Self::default()
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

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products of `category`, or every product when no category is selected.
    pub fn filter(&self, category: Option<ProductCategory>) -> Vec<&Product> {
        match category {
            Some(c) => self.products.iter().filter(|p| p.category == c).collect(),
            None => self.products.iter().collect(),
        }
    }

    /// Products bucketed by category, in category display order.
    ///
    /// Categories without products are omitted.
    pub fn group_by_category(&self) -> BTreeMap<ProductCategory, Vec<&Product>> {
        let mut groups: BTreeMap<ProductCategory, Vec<&Product>> = BTreeMap::new();
        for product in &self.products {
            groups.entry(product.category).or_default().push(product);
        }
        groups
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}
