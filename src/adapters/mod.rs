//! # External Collaborator Adapters
//!
//! The pipeline consumes recipes, the product catalog and order persistence
//! through the repository traits defined here, so the pure core never touches
//! storage directly. The bundled implementations are in-memory mocks that
//! simulate network latency and inject transient failures at a configurable
//! rate; the caller is expected to retry those (see [`crate::retry`]).

pub mod catalog;
pub mod orders;
pub mod recipes;
pub mod seed;

use std::time::Duration;

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::config::SimulationConfig;
use crate::errors::ApiError;
use crate::model::{Product, Recipe};

pub use catalog::{MockCatalog, SearchFilters};
pub use orders::{MockOrders, Order, OrderStatus, PaymentOutcome};
pub use recipes::{MockRecipes, RecipeUpdate};

use crate::cart::Cart;

/// Read access to recipe storage
pub trait RecipeStore {
    fn get_recipes(
        &self,
        store_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Recipe>, ApiError>> + Send;

    fn get_recipe(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Option<Recipe>, ApiError>> + Send;

    fn create_recipe(
        &self,
        recipe: Recipe,
    ) -> impl std::future::Future<Output = Result<Recipe, ApiError>> + Send;

    fn update_recipe(
        &self,
        id: &str,
        update: RecipeUpdate,
    ) -> impl std::future::Future<Output = Result<Recipe, ApiError>> + Send;

    fn delete_recipe(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<(), ApiError>> + Send;
}

/// Order persistence and the simulated payment boundary
pub trait OrderStore {
    fn create_order(
        &self,
        cart: Cart,
    ) -> impl std::future::Future<Output = Result<Order, ApiError>> + Send;

    fn get_orders(
        &self,
        store_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Order>, ApiError>> + Send;

    fn get_order(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Option<Order>, ApiError>> + Send;

    fn update_order_status(
        &self,
        id: &str,
        status: OrderStatus,
    ) -> impl std::future::Future<Output = Result<Order, ApiError>> + Send;

    fn cancel_order(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Order, ApiError>> + Send;

    /// Simulated payment; declines are decision values, not errors
    fn process_payment(
        &self,
        cart: &Cart,
    ) -> impl std::future::Future<Output = Result<PaymentOutcome, ApiError>> + Send;
}

/// Read access to the purchasable product catalog
pub trait ProductCatalog {
    /// Full catalog snapshot the matcher scores against
    fn list_products(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Product>, ApiError>> + Send;

    fn search_products(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> impl std::future::Future<Output = Result<Vec<Product>, ApiError>> + Send;

    fn get_product(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Option<Product>, ApiError>> + Send;
}

/// Simulate one adapter call: sleep, then maybe fail
///
/// Rolls against the configured error rate after the latency so a failing
/// call still costs its round trip, like a real timeout would.
pub(crate) async fn simulate(sim: &SimulationConfig, operation: &str) -> Result<(), ApiError> {
    if sim.latency_ms > 0 {
        tokio::time::sleep(Duration::from_millis(sim.latency_ms)).await;
    }
    if sim.error_rate > 0.0 && rand::thread_rng().gen::<f64>() < sim.error_rate {
        return Err(ApiError::transient(format!(
            "{operation} failed (simulated network error)"
        )));
    }
    Ok(())
}

/// Generate a short random identifier for mock entities
pub(crate) fn generate_id(prefix: &str) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect();
    format!("{prefix}-{suffix}")
}
