//! # Purchase Quantity Resolution Module
//!
//! Turns a scaled ingredient quantity into an enforceable purchase quantity
//! under a product's minimum-order-quantity and pack-size rules. Adjustments
//! are surfaced as advisory warnings, never as errors.

use crate::errors::ApiError;
use crate::model::ResolutionWarning;

/// Purchasable quantity after MOQ and pack-size enforcement
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Quantity actually ordered; a non-negative multiple of the pack size,
    /// at least `max(scaled_qty, moq)`
    pub effective_qty: f64,
    /// Whole packs ordered
    pub quantity_packs: u32,
    pub warning: Option<ResolutionWarning>,
}

/// Compute the enforceable purchase quantity for one product
///
/// The requested quantity is raised to the MOQ when below it, then rounded up
/// to a whole number of packs. An MOQ adjustment warning takes precedence over
/// a pack-size overage warning; exact fits carry no warning.
///
/// # Errors
///
/// Returns a `Validation` error for a negative scaled quantity, a negative
/// MOQ, or a non-positive pack size.
pub fn resolve(scaled_qty: f64, moq: f64, pack_size: f64) -> Result<Resolution, ApiError> {
    if scaled_qty < 0.0 {
        return Err(ApiError::validation("scaled quantity must not be negative"));
    }
    if moq < 0.0 {
        return Err(ApiError::validation("MOQ must not be negative"));
    }
    if pack_size <= 0.0 {
        return Err(ApiError::validation("pack size must be positive"));
    }

    let min_qty = scaled_qty.max(moq);
    let quantity_packs = (min_qty / pack_size).ceil() as u32;
    let effective_qty = f64::from(quantity_packs) * pack_size;

    let warning = if scaled_qty < moq {
        Some(ResolutionWarning::MoqAdjusted { moq })
    } else if effective_qty > scaled_qty {
        Some(ResolutionWarning::Overage {
            excess: effective_qty - scaled_qty,
        })
    } else {
        None
    };

    Ok(Resolution {
        effective_qty,
        quantity_packs,
        warning,
    })
}
