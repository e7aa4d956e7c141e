//! # Unit Normalization Module
//!
//! Converts recipe-native quantities (spoon measures, pieces) into the three
//! standard units the product catalog is matched against: grams, milliliters
//! and pieces.
//!
//! ## Conversion Rules
//!
//! - Gram/milliliter/piece quantities pass through untouched.
//! - Tablespoon/teaspoon quantities convert through a per-ingredient weight
//!   table when the ingredient is registered there (output in grams), and
//!   fall back to the generic volumetric constants (15 ml / 5 ml) otherwise.
//! - Normalization is deterministic and never fails; anything it does not
//!   recognize passes through as-is.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Generic tablespoon volume in milliliters
pub const TABLESPOON_ML: f64 = 15.0;
/// Generic teaspoon volume in milliliters
pub const TEASPOON_ML: f64 = 5.0;
/// Average mass assumed for one piece when a caller asks for a mass estimate
pub const PIECE_AVG_WEIGHT_G: f64 = 100.0;

/// Units a recipe may express an ingredient quantity in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[serde(rename = "g")]
    Grams,
    #[serde(rename = "ml")]
    Milliliters,
    #[serde(rename = "count")]
    Piece,
    Tablespoon,
    Teaspoon,
}

/// Standard units after normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StdUnit {
    #[serde(rename = "g")]
    Grams,
    #[serde(rename = "ml")]
    Milliliters,
    #[serde(rename = "count")]
    Piece,
}

/// Units a catalog product may be sold in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductUnit {
    #[serde(rename = "g")]
    Grams,
    #[serde(rename = "kg")]
    Kilograms,
    #[serde(rename = "ml")]
    Milliliters,
    #[serde(rename = "L")]
    Liters,
    #[serde(rename = "count")]
    Piece,
}

impl Unit {
    /// Check if this is a spoon measure (tablespoon or teaspoon)
    ///
    /// Spoon-origin ingredients get extra unit flexibility during product
    /// matching because the conversion target (mass vs volume) depends on
    /// whether the ingredient has a registered per-spoon weight.
    pub fn is_spoon(&self) -> bool {
        matches!(self, Unit::Tablespoon | Unit::Teaspoon)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Unit::Grams => "g",
            Unit::Milliliters => "ml",
            Unit::Piece => "pcs",
            Unit::Tablespoon => "tbsp",
            Unit::Teaspoon => "tsp",
        }
    }
}

impl ProductUnit {
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductUnit::Grams => "g",
            ProductUnit::Kilograms => "kg",
            ProductUnit::Milliliters => "ml",
            ProductUnit::Liters => "L",
            ProductUnit::Piece => "pcs",
        }
    }
}

impl fmt::Display for ProductUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl StdUnit {
    pub fn display_name(&self) -> &'static str {
        match self {
            StdUnit::Grams => "g",
            StdUnit::Milliliters => "ml",
            StdUnit::Piece => "pcs",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl fmt::Display for StdUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Grams per spoon measure for a specific ingredient
#[derive(Debug, Clone, Copy)]
struct SpoonWeight {
    tablespoon_g: f64,
    teaspoon_g: f64,
}

/// Per-ingredient spoon weights, keyed by exact ingredient name
///
/// Dense powders and pastes weigh far more per spoon than the volumetric
/// defaults suggest, so frequently ordered seasonings are registered here.
static SPOON_WEIGHTS: LazyLock<HashMap<&'static str, SpoonWeight>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Korean staple seasonings
    map.insert(
        "고춧가루",
        SpoonWeight {
            tablespoon_g: 7.0,
            teaspoon_g: 2.3,
        },
    );
    map.insert(
        "된장",
        SpoonWeight {
            tablespoon_g: 17.0,
            teaspoon_g: 5.7,
        },
    );
    map.insert(
        "고추장",
        SpoonWeight {
            tablespoon_g: 19.0,
            teaspoon_g: 6.3,
        },
    );
    map.insert(
        "설탕",
        SpoonWeight {
            tablespoon_g: 12.0,
            teaspoon_g: 4.0,
        },
    );
    map.insert(
        "소금",
        SpoonWeight {
            tablespoon_g: 15.0,
            teaspoon_g: 5.0,
        },
    );

    map
});

/// Normalize a recipe quantity into a standard unit
///
/// Spoon measures convert to grams when `ingredient_name` is registered in the
/// per-ingredient weight table, to milliliters otherwise. Gram, milliliter and
/// piece quantities pass through unchanged; a bare piece count stays a piece
/// count so it can be matched against piece-type products.
///
/// # Examples
///
/// ```rust
/// use prepcart::units::{normalize, StdUnit, Unit};
///
/// assert_eq!(normalize(400.0, Unit::Grams, None), (400.0, StdUnit::Grams));
/// assert_eq!(normalize(2.0, Unit::Tablespoon, None), (30.0, StdUnit::Milliliters));
/// assert_eq!(
///     normalize(2.0, Unit::Tablespoon, Some("고춧가루")),
///     (14.0, StdUnit::Grams)
/// );
/// ```
pub fn normalize(qty: f64, unit: Unit, ingredient_name: Option<&str>) -> (f64, StdUnit) {
    match unit {
        Unit::Grams => (qty, StdUnit::Grams),
        Unit::Milliliters => (qty, StdUnit::Milliliters),
        Unit::Piece => (qty, StdUnit::Piece),
        Unit::Tablespoon => match ingredient_name.and_then(|name| SPOON_WEIGHTS.get(name)) {
            Some(weight) => (qty * weight.tablespoon_g, StdUnit::Grams),
            None => (qty * TABLESPOON_ML, StdUnit::Milliliters),
        },
        Unit::Teaspoon => match ingredient_name.and_then(|name| SPOON_WEIGHTS.get(name)) {
            Some(weight) => (qty * weight.teaspoon_g, StdUnit::Grams),
            None => (qty * TEASPOON_ML, StdUnit::Milliliters),
        },
    }
}

/// Estimate the mass of a piece count in grams
///
/// Explicit opt-in for callers that need to compare a piece quantity against
/// mass-denominated products; `normalize` itself never applies this heuristic.
pub fn approximate_piece_mass(qty: f64) -> f64 {
    qty * PIECE_AVG_WEIGHT_G
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_units_pass_through() {
        assert_eq!(normalize(200.0, Unit::Grams, None), (200.0, StdUnit::Grams));
        assert_eq!(
            normalize(150.0, Unit::Milliliters, Some("우유")),
            (150.0, StdUnit::Milliliters)
        );
        assert_eq!(normalize(3.0, Unit::Piece, None), (3.0, StdUnit::Piece));
    }

    #[test]
    fn test_generic_spoon_conversion_is_volumetric() {
        assert_eq!(
            normalize(2.0, Unit::Tablespoon, None),
            (30.0, StdUnit::Milliliters)
        );
        assert_eq!(
            normalize(3.0, Unit::Teaspoon, None),
            (15.0, StdUnit::Milliliters)
        );
    }

    #[test]
    fn test_registered_ingredient_converts_to_grams() {
        let (qty, unit) = normalize(2.0, Unit::Tablespoon, Some("고춧가루"));
        assert_eq!(unit, StdUnit::Grams);
        assert!((qty - 14.0).abs() < f64::EPSILON);

        let (qty, unit) = normalize(1.0, Unit::Teaspoon, Some("된장"));
        assert_eq!(unit, StdUnit::Grams);
        assert!((qty - 5.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unregistered_ingredient_falls_back_to_volume() {
        assert_eq!(
            normalize(1.0, Unit::Tablespoon, Some("올리브오일")),
            (15.0, StdUnit::Milliliters)
        );
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let a = normalize(2.5, Unit::Tablespoon, Some("고추장"));
        let b = normalize(2.5, Unit::Tablespoon, Some("고추장"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_piece_mass_estimate_is_explicit() {
        assert_eq!(approximate_piece_mass(2.0), 200.0);
        // normalize never applies the heuristic on its own
        assert_eq!(normalize(2.0, Unit::Piece, None), (2.0, StdUnit::Piece));
    }
}
