//! # Recipe Scaling Module
//!
//! Produces scaled ingredient quantities for a target serving count. Scaling
//! is a pure function of the recipe and the target: repeated calls with the
//! same servings replace, never accumulate.

use log::debug;

use crate::errors::ApiError;
use crate::model::{Recipe, ScaledItem};
use crate::units::normalize;

/// Scale a recipe's ingredients to a target serving count
///
/// Each quantity is multiplied by `target_servings / base_servings` and
/// rounded half-up to 2 decimal places; the standard unit is derived through
/// unit normalization without mutating the quantity itself.
///
/// # Errors
///
/// Returns a `Validation` error when `target_servings` is zero.
pub fn scale(recipe: &Recipe, target_servings: u32) -> Result<Vec<ScaledItem>, ApiError> {
    if target_servings == 0 {
        return Err(ApiError::validation("target servings must be at least 1"));
    }

    let ratio = f64::from(target_servings) / f64::from(recipe.base_servings);
    debug!(
        "Scaling recipe {} from {} to {} servings (ratio {:.4})",
        recipe.id, recipe.base_servings, target_servings, ratio
    );

    let items = recipe
        .items
        .iter()
        .map(|item| {
            let scaled_qty = round2(item.base_qty * ratio);
            let (_, std_unit) = normalize(scaled_qty, item.unit, Some(&item.name));

            ScaledItem {
                name: item.name.clone(),
                base_qty: item.base_qty,
                scaled_qty,
                unit: item.unit,
                std_unit,
                alt_names: item.alt_names.clone(),
                notes: item.notes.clone(),
            }
        })
        .collect();

    Ok(items)
}

/// Round half-up to 2 decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
