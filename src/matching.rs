//! # Product Matching Module
//!
//! Scores and ranks catalog products against a scaled ingredient. Matching is
//! purely textual plus a unit-compatibility filter: the ingredient's name and
//! alternative names are compared case-folded against each product's spec,
//! brand and category, and a supplier-tier bonus breaks quality ties toward
//! contracted pricing.
//!
//! An empty result means "no match" and is never an error.

use log::debug;

use crate::model::{Product, ScaledItem, SupplierType};
use crate::units::{ProductUnit, StdUnit};

/// Maximum number of candidates returned per ingredient
pub const MAX_CANDIDATES: usize = 5;

/// Scoring policy constants
///
/// The magnitudes are business policy carried over from the ordering rules,
/// not algorithmic necessities; tests pin them, so change them deliberately.
mod score {
    /// Product spec equals a search term exactly
    pub const SPEC_EXACT: u32 = 100;
    /// Product spec contains a search term
    pub const SPEC_PARTIAL: u32 = 50;
    /// Brand contains a search term
    pub const BRAND: u32 = 30;
    /// Category contains a search term
    pub const CATEGORY: u32 = 20;
    /// Contracted supplier bonus
    pub const CONTRACT_BONUS: u32 = 10;
    /// Wholesale supplier bonus
    pub const WHOLESALE_BONUS: u32 = 5;
}

/// Rank catalog products for one scaled ingredient, best first
///
/// Returns at most [`MAX_CANDIDATES`] products. Products with no textual
/// match, or whose sales unit is incompatible with the ingredient's standard
/// unit, are dropped. Deterministic: identical inputs produce identical
/// ordered output.
pub fn match_products(ingredient: &ScaledItem, catalog: &[Product]) -> Vec<Product> {
    let search_terms = search_terms(ingredient);

    let mut scored: Vec<(u32, &Product)> = catalog
        .iter()
        .filter_map(|product| {
            let text_score = text_score(product, &search_terms);
            if text_score == 0 {
                return None;
            }
            if !unit_compatible(ingredient, product.unit) {
                return None;
            }
            Some((text_score + supplier_bonus(product.supplier_type), product))
        })
        .collect();

    // Stable sort keeps catalog order for full ties, so output is deterministic
    scored.sort_by(|(score_a, a), (score_b, b)| {
        score_b
            .cmp(score_a)
            .then_with(|| a.supplier_type.cmp(&b.supplier_type))
    });

    debug!(
        "Matched {} candidate(s) for ingredient '{}'",
        scored.len(),
        ingredient.name
    );

    scored
        .into_iter()
        .take(MAX_CANDIDATES)
        .map(|(_, product)| product.clone())
        .collect()
}

/// Case-folded search terms: the ingredient name plus its alternative names
fn search_terms(ingredient: &ScaledItem) -> Vec<String> {
    std::iter::once(&ingredient.name)
        .chain(&ingredient.alt_names)
        .map(|term| term.to_lowercase())
        .collect()
}

/// Additive textual score across all search terms
///
/// Each term contributes through at most one clause (exact spec beats partial
/// spec beats brand beats category), but a product may accumulate from
/// several terms.
fn text_score(product: &Product, terms: &[String]) -> u32 {
    let spec = product.spec.to_lowercase();
    let brand = product.brand.to_lowercase();
    let category = product.category.as_deref().map(str::to_lowercase);

    terms
        .iter()
        .map(|term| {
            if spec == *term {
                score::SPEC_EXACT
            } else if spec.contains(term.as_str()) {
                score::SPEC_PARTIAL
            } else if brand.contains(term.as_str()) {
                score::BRAND
            } else if category
                .as_deref()
                .is_some_and(|c| c.contains(term.as_str()))
            {
                score::CATEGORY
            } else {
                0
            }
        })
        .sum()
}

fn supplier_bonus(tier: SupplierType) -> u32 {
    match tier {
        SupplierType::Contract => score::CONTRACT_BONUS,
        SupplierType::Wholesale => score::WHOLESALE_BONUS,
        SupplierType::Retail => 0,
    }
}

/// Whether a product's sales unit can satisfy the ingredient's standard unit
///
/// Mass ingredients accept g/kg products, volume ingredients accept ml/L,
/// piece counts only piece products. Spoon-measure ingredients additionally
/// accept both g and ml products, since the spoon conversion lands on mass or
/// volume depending on whether the ingredient has a registered spoon weight.
fn unit_compatible(ingredient: &ScaledItem, product_unit: ProductUnit) -> bool {
    let base = match ingredient.std_unit {
        StdUnit::Grams => matches!(product_unit, ProductUnit::Grams | ProductUnit::Kilograms),
        StdUnit::Milliliters => {
            matches!(product_unit, ProductUnit::Milliliters | ProductUnit::Liters)
        }
        StdUnit::Piece => product_unit == ProductUnit::Piece,
    };

    base || (ingredient.unit.is_spoon()
        && matches!(product_unit, ProductUnit::Grams | ProductUnit::Milliliters))
}
