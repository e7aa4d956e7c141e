//! # Recipe Store Adapter
//!
//! In-memory recipe repository with simulated latency and error injection.

use std::sync::Mutex;

use chrono::Utc;
use log::info;

use crate::config::SimulationConfig;
use crate::errors::ApiError;
use crate::model::{Recipe, RecipeItem};

use super::{generate_id, simulate, RecipeStore};

/// Partial update applied to an existing recipe
#[derive(Debug, Clone, Default)]
pub struct RecipeUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub base_servings: Option<u32>,
    pub items: Option<Vec<RecipeItem>>,
}

/// In-memory mock of the recipe backend
pub struct MockRecipes {
    recipes: Mutex<Vec<Recipe>>,
    sim: SimulationConfig,
}

impl MockRecipes {
    pub fn new(sim: SimulationConfig) -> Self {
        Self {
            recipes: Mutex::new(Vec::new()),
            sim,
        }
    }

    /// Mock pre-loaded with the demo recipes
    pub fn with_seed(sim: SimulationConfig) -> Self {
        Self {
            recipes: Mutex::new(super::seed::seed_recipes()),
            sim,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Recipe>> {
        // a poisoned lock still holds usable data in a read-mostly mock
        self.recipes.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl RecipeStore for MockRecipes {
    async fn get_recipes(&self, store_id: &str) -> Result<Vec<Recipe>, ApiError> {
        simulate(&self.sim, "get_recipes").await?;
        Ok(self
            .lock()
            .iter()
            .filter(|recipe| recipe.store_id == store_id)
            .cloned()
            .collect())
    }

    async fn get_recipe(&self, id: &str) -> Result<Option<Recipe>, ApiError> {
        simulate(&self.sim, "get_recipe").await?;
        Ok(self.lock().iter().find(|recipe| recipe.id == id).cloned())
    }

    async fn create_recipe(&self, mut recipe: Recipe) -> Result<Recipe, ApiError> {
        simulate(&self.sim, "create_recipe").await?;
        recipe.id = generate_id("recipe");
        recipe.created_at = Utc::now();
        recipe.updated_at = recipe.created_at;
        info!("Created recipe {} ({})", recipe.id, recipe.name);
        self.lock().push(recipe.clone());
        Ok(recipe)
    }

    async fn update_recipe(&self, id: &str, update: RecipeUpdate) -> Result<Recipe, ApiError> {
        simulate(&self.sim, "update_recipe").await?;
        let mut recipes = self.lock();
        let recipe = recipes
            .iter_mut()
            .find(|recipe| recipe.id == id)
            .ok_or_else(|| ApiError::not_found(format!("recipe {id}")))?;

        if let Some(name) = update.name {
            recipe.name = name;
        }
        if let Some(category) = update.category {
            recipe.category = category;
        }
        if let Some(base_servings) = update.base_servings {
            recipe.base_servings = base_servings.max(1);
        }
        if let Some(items) = update.items {
            recipe.items = items;
        }
        recipe.updated_at = Utc::now();
        Ok(recipe.clone())
    }

    async fn delete_recipe(&self, id: &str) -> Result<(), ApiError> {
        simulate(&self.sim, "delete_recipe").await?;
        let mut recipes = self.lock();
        let before = recipes.len();
        recipes.retain(|recipe| recipe.id != id);
        if recipes.len() == before {
            return Err(ApiError::not_found(format!("recipe {id}")));
        }
        info!("Deleted recipe {id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Unit;

    fn store() -> MockRecipes {
        MockRecipes::with_seed(SimulationConfig::instant())
    }

    #[tokio::test]
    async fn test_get_recipes_filters_by_store() {
        let recipes = store().get_recipes("store-1").await.unwrap();
        assert_eq!(recipes.len(), 2);

        let none = store().get_recipes("store-99").await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_get_recipe_miss_is_none_not_error() {
        let missing = store().get_recipe("recipe-99").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_id() {
        let adapter = store();
        let recipe = Recipe::new("ignored", "store-1", "육개장", "한식", 4)
            .with_item(RecipeItem::new("소고기", 300.0, Unit::Grams));

        let created = adapter.create_recipe(recipe).await.unwrap();
        assert!(created.id.starts_with("recipe-"));
        assert_ne!(created.id, "ignored");

        let fetched = adapter.get_recipe(&created.id).await.unwrap();
        assert_eq!(fetched.unwrap().name, "육개장");
    }

    #[tokio::test]
    async fn test_update_applies_partial_changes() {
        let adapter = store();
        let updated = adapter
            .update_recipe(
                "recipe-1",
                RecipeUpdate {
                    base_servings: Some(6),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.base_servings, 6);
        assert_eq!(updated.name, "김치찌개");
    }

    #[tokio::test]
    async fn test_update_missing_recipe_is_not_found() {
        let err = store()
            .update_recipe("recipe-99", RecipeUpdate::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind, crate::errors::ErrorKind::NotFound);
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_delete_removes_recipe() {
        let adapter = store();
        adapter.delete_recipe("recipe-1").await.unwrap();
        assert!(adapter.get_recipe("recipe-1").await.unwrap().is_none());

        let err = adapter.delete_recipe("recipe-1").await.unwrap_err();
        assert_eq!(err.kind, crate::errors::ErrorKind::NotFound);
    }
}
