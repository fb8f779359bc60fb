//! # merit-market
//!
//! A simple in-memory marketplace for tokenized products. Product creation
//! registers the underlying idea with the ecosystem first, so every listing
//! carries a trace from the moment it exists.

use std::collections::HashMap;

use merit_engine::EcosystemEngine;
use serde::{Deserialize, Serialize};

/// A marketplace listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub creator: String,
    pub name: String,
    pub description: String,
    /// Balance a buyer must hold to access the product.
    pub required_tokens: f64,
    /// Belief label the product aligns with, if any.
    pub belief_tag: Option<String>,
}

/// Simple in-memory marketplace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Marketplace {
    products: HashMap<String, Product>,
}

impl Marketplace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_product(&mut self, product: Product) {
        self.products.insert(product.product_id.clone(), product);
    }

    pub fn get_product(&self, product_id: &str) -> Option<&Product> {
        self.products.get(product_id)
    }

    pub fn list_products(&self) -> Vec<&Product> {
        self.products.values().collect()
    }

    /// Create and list a product, registering the idea with the ecosystem
    /// for traceability. The interaction is tagged with the product's
    /// belief tag, or `"product"` when it has none.
    pub fn create_product(
        &mut self,
        eco: &mut EcosystemEngine,
        product: Product,
    ) -> Option<&Product> {
        let tag = product.belief_tag.as_deref().unwrap_or("product");
        eco.add_interaction(&product.product_id, &product.creator, &[tag], &product.name);

        let id = product.product_id.clone();
        self.add_product(product);
        self.get_product(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product(belief_tag: Option<&str>) -> Product {
        Product {
            product_id: "prod1".to_string(),
            creator: "alice".to_string(),
            name: "Guided reflection".to_string(),
            description: "A structured journaling exercise".to_string(),
            required_tokens: 1.0,
            belief_tag: belief_tag.map(str::to_string),
        }
    }

    #[test]
    fn created_product_is_listed() {
        let mut eco = EcosystemEngine::new();
        let mut market = Marketplace::new();

        let created = market.create_product(&mut eco, sample_product(None)).unwrap();
        assert_eq!(created.creator, "alice");
        assert_eq!(market.list_products().len(), 1);
        assert!(market.get_product("prod1").is_some());
    }

    #[test]
    fn creation_registers_the_idea_with_the_ecosystem() {
        let mut eco = EcosystemEngine::new();
        let mut market = Marketplace::new();

        market.create_product(&mut eco, sample_product(Some("growth")));

        let state = eco.idea("prod1").expect("idea registered");
        let record = state.usefulness.as_ref().expect("feedback recorded");
        assert_eq!(record.tags(), vec!["growth"]);
        assert!(eco.overall_score("prod1") > 0.0);
    }

    #[test]
    fn untagged_products_fall_back_to_the_product_tag() {
        let mut eco = EcosystemEngine::new();
        let mut market = Marketplace::new();

        market.create_product(&mut eco, sample_product(None));

        let state = eco.idea("prod1").unwrap();
        assert_eq!(state.usefulness.as_ref().unwrap().tags(), vec!["product"]);
    }

    #[test]
    fn missing_product_is_none() {
        let market = Marketplace::new();
        assert!(market.get_product("ghost").is_none());
    }
}
