//! # Ingredient Resolution Pipeline
//!
//! Orchestrates the pure stages end to end: scale a recipe, rank catalog
//! candidates per ingredient, enforce MOQ/pack-size rules, and turn the
//! results into cart lines.
//!
//! Each ingredient resolves independently; resolving one never reads or
//! mutates another's result, so callers may evaluate them in any order or
//! concurrently with identical output.

use log::info;

use crate::adapters::{ProductCatalog, RecipeStore};
use crate::cart::{Cart, CartItem};
use crate::errors::ApiError;
use crate::matching::match_products;
use crate::model::{MatchResult, Product, ResolutionWarning, ScaledItem};
use crate::quantity::resolve;
use crate::scaling::scale;

/// Resolve every scaled ingredient against a catalog snapshot
///
/// For each ingredient the top-ranked candidate is preselected and its MOQ and
/// pack size determine the effective quantity. An ingredient with no candidate
/// keeps its scaled quantity and carries a no-match warning; that is data for
/// the caller to render, not an error.
///
/// # Errors
///
/// Only propagates `Validation` failures from quantity resolution, which
/// indicate corrupt catalog data (non-positive pack size).
pub fn resolve_ingredients(
    items: &[ScaledItem],
    catalog: &[Product],
) -> Result<Vec<MatchResult>, ApiError> {
    items
        .iter()
        .map(|item| {
            let candidates = match_products(item, catalog);
            match candidates.first() {
                Some(best) => {
                    let resolution = resolve(item.scaled_qty, best.moq, best.pack_size)?;
                    Ok(MatchResult {
                        ingredient_name: item.name.clone(),
                        selected_product_id: Some(best.id.clone()),
                        candidates,
                        effective_qty: resolution.effective_qty,
                        warning: resolution.warning,
                    })
                }
                None => Ok(MatchResult {
                    ingredient_name: item.name.clone(),
                    candidates: Vec::new(),
                    selected_product_id: None,
                    effective_qty: item.scaled_qty,
                    warning: Some(ResolutionWarning::NoMatch),
                }),
            }
        })
        .collect()
}

/// Load a recipe, scale it, and resolve all ingredients against the catalog
pub async fn resolve_recipe<R, C>(
    recipes: &R,
    catalog: &C,
    recipe_id: &str,
    target_servings: u32,
) -> Result<Vec<MatchResult>, ApiError>
where
    R: RecipeStore,
    C: ProductCatalog,
{
    let recipe = recipes
        .get_recipe(recipe_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("recipe {recipe_id}")))?;

    let scaled = scale(&recipe, target_servings)?;
    let snapshot = catalog.list_products().await?;

    info!(
        "Resolving {} ingredient(s) of recipe {} for {} servings",
        scaled.len(),
        recipe.id,
        target_servings
    );
    resolve_ingredients(&scaled, &snapshot)
}

/// Build cart lines from resolved ingredients
///
/// Ingredients without a selection are skipped. The pack count is recomputed
/// from the selected product, which may differ from the top candidate when
/// the user reassigned the selection after resolution.
pub fn build_cart_items(results: &[MatchResult]) -> Result<Vec<CartItem>, ApiError> {
    let mut lines = Vec::new();
    for result in results {
        let Some(product) = result.selected_product() else {
            continue;
        };
        let resolution = resolve(result.effective_qty, product.moq, product.pack_size)?;
        // a zero-quantity ingredient orders zero packs, which is no line at all
        if resolution.quantity_packs == 0 {
            continue;
        }
        lines.push(CartItem::from_product(product, resolution.quantity_packs));
    }
    Ok(lines)
}

/// Add resolved ingredients to a cart, merging lines for repeated products
pub fn add_to_cart(cart: &mut Cart, results: &[MatchResult]) -> Result<(), ApiError> {
    for item in build_cart_items(results)? {
        cart.add_item(item);
    }
    Ok(())
}
