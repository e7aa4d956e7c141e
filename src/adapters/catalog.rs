//! # Product Catalog Adapter
//!
//! In-memory product catalog with text search and filtering. The matcher
//! itself lives in [`crate::matching`]; this adapter only hands out catalog
//! snapshots and individual products.

use std::sync::Mutex;

use crate::config::SimulationConfig;
use crate::errors::ApiError;
use crate::model::{Product, SupplierType};

use super::{simulate, ProductCatalog};

/// Optional constraints for catalog search
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    pub category: Option<String>,
    pub supplier_type: Option<SupplierType>,
    /// Inclusive price range in won
    pub price_range: Option<(i64, i64)>,
}

/// In-memory mock of the supplier catalog
pub struct MockCatalog {
    products: Mutex<Vec<Product>>,
    sim: SimulationConfig,
}

impl MockCatalog {
    pub fn new(products: Vec<Product>, sim: SimulationConfig) -> Self {
        Self {
            products: Mutex::new(products),
            sim,
        }
    }

    /// Mock pre-loaded with the demo products
    pub fn with_seed(sim: SimulationConfig) -> Self {
        Self::new(super::seed::seed_products(), sim)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Product>> {
        self.products.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Distinct product categories, sorted
    pub async fn get_categories(&self) -> Result<Vec<String>, ApiError> {
        simulate(&self.sim, "get_categories").await?;
        let mut categories: Vec<String> = self
            .lock()
            .iter()
            .filter_map(|product| product.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }
}

impl ProductCatalog for MockCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        simulate(&self.sim, "list_products").await?;
        Ok(self.lock().clone())
    }

    async fn search_products(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<Product>, ApiError> {
        simulate(&self.sim, "search_products").await?;

        let terms: Vec<String> = query
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();

        let mut results: Vec<Product> = self
            .lock()
            .iter()
            .filter(|product| {
                terms.is_empty()
                    || terms.iter().any(|term| {
                        product.brand.to_lowercase().contains(term)
                            || product.spec.to_lowercase().contains(term)
                            || product
                                .category
                                .as_deref()
                                .is_some_and(|c| c.to_lowercase().contains(term))
                    })
            })
            .filter(|product| match &filters.category {
                Some(category) => product.category.as_deref() == Some(category.as_str()),
                None => true,
            })
            .filter(|product| match filters.supplier_type {
                Some(tier) => product.supplier_type == tier,
                None => true,
            })
            .filter(|product| match filters.price_range {
                Some((min, max)) => product.price >= min && product.price <= max,
                None => true,
            })
            .cloned()
            .collect();

        // Contracted pricing first; stable sort keeps catalog order within a tier
        results.sort_by_key(|product| product.supplier_type);
        Ok(results)
    }

    async fn get_product(&self, id: &str) -> Result<Option<Product>, ApiError> {
        simulate(&self.sim, "get_product").await?;
        Ok(self.lock().iter().find(|product| product.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MockCatalog {
        MockCatalog::with_seed(SimulationConfig::instant())
    }

    #[tokio::test]
    async fn test_search_ranks_contract_suppliers_first() {
        let results = catalog()
            .search_products("목살", &SearchFilters::default())
            .await
            .unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].supplier_type, SupplierType::Contract);
        assert_eq!(results.last().unwrap().supplier_type, SupplierType::Retail);
    }

    #[tokio::test]
    async fn test_search_with_filters() {
        let filters = SearchFilters {
            supplier_type: Some(SupplierType::Retail),
            price_range: Some((0, 3000)),
            ..Default::default()
        };
        let results = catalog().search_products("", &filters).await.unwrap();

        assert!(!results.is_empty());
        for product in &results {
            assert_eq!(product.supplier_type, SupplierType::Retail);
            assert!(product.price <= 3000);
        }
    }

    #[tokio::test]
    async fn test_get_product_roundtrip() {
        let adapter = catalog();
        let product = adapter.get_product("prod-1").await.unwrap().unwrap();
        assert_eq!(product.spec, "목살");

        assert!(adapter.get_product("prod-99").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_categories_are_sorted_and_distinct() {
        let categories = catalog().get_categories().await.unwrap();
        let mut sorted = categories.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(categories, sorted);
        assert!(categories.contains(&"육류".to_string()));
    }
}
