//! # Domain Data Model
//!
//! This module defines the core value types flowing through the resolution
//! pipeline: recipes and their ingredients, scaled ingredients, catalog
//! products and per-ingredient match results.
//!
//! ## Core Concepts
//!
//! - **RecipeItem**: one ingredient of a recipe at its base serving count
//! - **ScaledItem**: the same ingredient adjusted for a target serving count
//! - **Product**: a purchasable catalog entry with MOQ and pack-size rules
//! - **MatchResult**: ranked product candidates for one scaled ingredient
//!
//! ## Usage
//!
//! ```rust
//! use prepcart::model::{Recipe, RecipeItem};
//! use prepcart::units::Unit;
//!
//! let recipe = Recipe::new("recipe-1", "store-1", "김치찌개", "한식", 4)
//!     .with_item(
//!         RecipeItem::new("돼지고기", 200.0, Unit::Grams)
//!             .with_alt_names(["돼지목살", "삼겹살"]),
//!     );
//! assert_eq!(recipe.items.len(), 1);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::units::{ProductUnit, StdUnit, Unit};

/// Pricing tier of a product's supplier, ordered by purchasing preference
///
/// Contracted pricing beats wholesale beats retail; the derived `Ord` follows
/// declaration order, so `Contract < Wholesale < Retail` sorts best-first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SupplierType {
    Contract,
    Wholesale,
    Retail,
}

impl SupplierType {
    pub fn display_name(&self) -> &'static str {
        match self {
            SupplierType::Contract => "contract",
            SupplierType::Wholesale => "wholesale",
            SupplierType::Retail => "retail",
        }
    }
}

impl fmt::Display for SupplierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One ingredient line of a recipe at its base serving count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeItem {
    /// Primary ingredient name used for product matching
    pub name: String,
    /// Quantity at the recipe's base serving count, always positive
    pub base_qty: f64,
    /// Recipe-native unit
    pub unit: Unit,
    /// Alternative names matched against catalog entries, most specific first
    pub alt_names: Vec<String>,
    /// Optional free-form preparation notes
    pub notes: Option<String>,
}

impl RecipeItem {
    /// Create a new recipe item with no alternative names
    pub fn new(name: &str, base_qty: f64, unit: Unit) -> Self {
        Self {
            name: name.to_string(),
            base_qty,
            unit,
            alt_names: Vec::new(),
            notes: None,
        }
    }

    /// Add alternative names for product matching
    pub fn with_alt_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alt_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Add preparation notes
    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }
}

/// A recipe owned by one store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub store_id: String,
    pub name: String,
    pub category: String,
    /// Serving count the item quantities are written for, always at least 1
    pub base_servings: u32,
    pub items: Vec<RecipeItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    pub fn new(id: &str, store_id: &str, name: &str, category: &str, base_servings: u32) -> Self {
        let now = Utc::now();
        Self {
            id: id.to_string(),
            store_id: store_id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            base_servings: base_servings.max(1),
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_item(mut self, item: RecipeItem) -> Self {
        self.items.push(item);
        self
    }
}

/// A recipe ingredient adjusted for a target serving count
///
/// Derived value: recomputed on every serving-count change and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledItem {
    pub name: String,
    pub base_qty: f64,
    /// Quantity scaled to the target servings, rounded to 2 decimal places
    pub scaled_qty: f64,
    /// Recipe-native unit the quantity was written in
    pub unit: Unit,
    /// Standard unit the scaled quantity normalizes to
    pub std_unit: StdUnit,
    pub alt_names: Vec<String>,
    pub notes: Option<String>,
}

/// A purchasable catalog product
///
/// Read-only to the pipeline; owned by the catalog collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub supplier_type: SupplierType,
    pub brand: String,
    /// Product specification text matched against ingredient names
    pub spec: String,
    pub unit: ProductUnit,
    /// Fixed quantity increment the product is sold in, always positive
    pub pack_size: f64,
    /// Minimum order quantity the supplier accepts, zero when unrestricted
    pub moq: f64,
    /// Price per pack in won
    pub price: i64,
    pub lead_time_days: u32,
    pub category: Option<String>,
}

impl Product {
    /// Brand and spec combined, as rendered on cart lines
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.spec)
    }
}

/// Advisory condition attached to a resolved ingredient
///
/// These are decision values, not errors: an MOQ bump or a pack-size overage
/// still yields a purchasable quantity, and a missed match falls back to the
/// scaled quantity. MOQ adjustment takes precedence over overage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResolutionWarning {
    /// Requested quantity was below the supplier's minimum order quantity
    MoqAdjusted { moq: f64 },
    /// Pack-size rounding orders more than requested, by `excess` units
    Overage { excess: f64 },
    /// No catalog product matched the ingredient
    NoMatch,
}

impl fmt::Display for ResolutionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionWarning::MoqAdjusted { moq } => {
                write!(f, "adjusted up to meet the minimum order quantity ({moq})")
            }
            ResolutionWarning::Overage { excess } => {
                write!(f, "pack-size rounding orders {excess} extra")
            }
            ResolutionWarning::NoMatch => write!(f, "no matching product found"),
        }
    }
}

/// Ranked product candidates for one scaled ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub ingredient_name: String,
    /// Best-first candidates, at most 5
    pub candidates: Vec<Product>,
    /// Defaults to the top candidate; the user may reassign it
    pub selected_product_id: Option<String>,
    /// Purchasable quantity after MOQ and pack-size enforcement, or the
    /// scaled quantity when no product matched
    pub effective_qty: f64,
    pub warning: Option<ResolutionWarning>,
}

impl MatchResult {
    /// The candidate currently selected for purchase, if any
    pub fn selected_product(&self) -> Option<&Product> {
        let id = self.selected_product_id.as_deref()?;
        self.candidates.iter().find(|p| p.id == id)
    }

    /// Reassign the selection to another candidate
    ///
    /// Returns false and leaves the selection untouched when `product_id`
    /// is not one of the candidates.
    pub fn select(&mut self, product_id: &str) -> bool {
        if self.candidates.iter().any(|p| p.id == product_id) {
            self.selected_product_id = Some(product_id.to_string());
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, supplier_type: SupplierType) -> Product {
        Product {
            id: id.to_string(),
            supplier_type,
            brand: "농협".to_string(),
            spec: "목살".to_string(),
            unit: ProductUnit::Grams,
            pack_size: 1000.0,
            moq: 500.0,
            price: 12000,
            lead_time_days: 1,
            category: Some("육류".to_string()),
        }
    }

    #[test]
    fn test_supplier_preference_order() {
        assert!(SupplierType::Contract < SupplierType::Wholesale);
        assert!(SupplierType::Wholesale < SupplierType::Retail);

        let mut tiers = vec![
            SupplierType::Retail,
            SupplierType::Contract,
            SupplierType::Wholesale,
        ];
        tiers.sort();
        assert_eq!(
            tiers,
            vec![
                SupplierType::Contract,
                SupplierType::Wholesale,
                SupplierType::Retail
            ]
        );
    }

    #[test]
    fn test_recipe_builder() {
        let recipe = Recipe::new("recipe-1", "store-1", "김치찌개", "한식", 4)
            .with_item(
                RecipeItem::new("돼지고기", 200.0, Unit::Grams)
                    .with_alt_names(["돼지목살", "삼겹살"]),
            )
            .with_item(RecipeItem::new("두부", 1.0, Unit::Piece).with_notes("연두부 권장"));

        assert_eq!(recipe.base_servings, 4);
        assert_eq!(recipe.items.len(), 2);
        assert_eq!(recipe.items[0].alt_names, vec!["돼지목살", "삼겹살"]);
        assert_eq!(recipe.items[1].notes.as_deref(), Some("연두부 권장"));
    }

    #[test]
    fn test_base_servings_floor() {
        let recipe = Recipe::new("recipe-x", "store-1", "테스트", "기타", 0);
        assert_eq!(recipe.base_servings, 1);
    }

    #[test]
    fn test_match_result_selection() {
        let mut result = MatchResult {
            ingredient_name: "돼지고기".to_string(),
            candidates: vec![
                product("prod-1", SupplierType::Contract),
                product("prod-2", SupplierType::Wholesale),
            ],
            selected_product_id: Some("prod-1".to_string()),
            effective_qty: 1000.0,
            warning: None,
        };

        assert_eq!(result.selected_product().unwrap().id, "prod-1");
        assert!(result.select("prod-2"));
        assert_eq!(result.selected_product().unwrap().id, "prod-2");
        assert!(!result.select("prod-99"));
        assert_eq!(result.selected_product().unwrap().id, "prod-2");
    }

    #[test]
    fn test_warning_messages() {
        let moq = ResolutionWarning::MoqAdjusted { moq: 500.0 };
        assert!(moq.to_string().contains("minimum order quantity"));
        assert!(moq.to_string().contains("500"));

        let overage = ResolutionWarning::Overage { excess: 600.0 };
        assert!(overage.to_string().contains("600"));

        assert_eq!(
            ResolutionWarning::NoMatch.to_string(),
            "no matching product found"
        );
    }
}
