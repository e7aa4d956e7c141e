//! # Cart Module
//!
//! Priced line items and their monetary roll-up. All money is integer won.
//!
//! ## Invariants
//!
//! - One line per product id: re-adding a product merges pack counts and
//!   recomputes that line's subtotal, never duplicates the line.
//! - Line order is insertion order.
//! - After every mutation: `subtotal = Σ item.subtotal`,
//!   `tax = round(subtotal × tax_rate)`, `total = subtotal + tax + shipping`.

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::PricingConfig;
use crate::model::Product;

/// One priced cart line for a single product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: String,
    pub display_name: String,
    pub pack_size: f64,
    /// Price per pack in won
    pub unit_price: i64,
    pub quantity_packs: u32,
    /// `quantity_packs × unit_price`, in won
    pub subtotal: i64,
    /// Snapshot of the product at the time it was added
    pub product: Product,
}

impl CartItem {
    /// Build a line item from a product snapshot and a pack count
    ///
    /// A cart line always orders at least one pack; zero-pack "lines" must be
    /// filtered out before they reach the cart.
    pub fn from_product(product: &Product, quantity_packs: u32) -> Self {
        debug_assert!(quantity_packs >= 1, "cart line needs at least one pack");
        Self {
            product_id: product.id.clone(),
            display_name: product.display_name(),
            pack_size: product.pack_size,
            unit_price: product.price,
            quantity_packs,
            subtotal: i64::from(quantity_packs) * product.price,
            product: product.clone(),
        }
    }

    fn set_quantity(&mut self, quantity_packs: u32) {
        self.quantity_packs = quantity_packs;
        self.subtotal = i64::from(quantity_packs) * self.unit_price;
    }
}

/// Monetary roll-up of a set of cart lines, in won
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: i64,
    pub tax: i64,
    pub shipping_fee: i64,
    pub total: i64,
}

/// Aggregate line subtotals into cart totals
///
/// Tax is the subtotal times the tax rate, rounded to the nearest won; the
/// shipping fee is flat and applies even to an empty cart.
pub fn aggregate(items: &[CartItem], pricing: &PricingConfig) -> CartTotals {
    let subtotal: i64 = items.iter().map(|item| item.subtotal).sum();
    let tax = (subtotal as f64 * pricing.tax_rate).round() as i64;
    let total = subtotal + tax + pricing.shipping_fee;

    CartTotals {
        subtotal,
        tax,
        shipping_fee: pricing.shipping_fee,
        total,
    }
}

/// A purchase cart with always-consistent totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub subtotal: i64,
    pub tax: i64,
    pub shipping_fee: i64,
    pub total: i64,
    pub delivery_date: Option<NaiveDate>,
    pub memo: Option<String>,
    pricing: PricingConfig,
}

impl Cart {
    /// Create an empty cart under the given pricing policy
    pub fn new(pricing: PricingConfig) -> Self {
        let totals = aggregate(&[], &pricing);
        Self {
            items: Vec::new(),
            subtotal: totals.subtotal,
            tax: totals.tax,
            shipping_fee: totals.shipping_fee,
            total: totals.total,
            delivery_date: None,
            memo: None,
            pricing,
        }
    }

    /// Add a line item, merging with an existing line for the same product
    pub fn add_item(&mut self, item: CartItem) {
        match self
            .items
            .iter_mut()
            .find(|existing| existing.product_id == item.product_id)
        {
            Some(existing) => {
                let merged = existing.quantity_packs + item.quantity_packs;
                debug!(
                    "Merging {} into existing cart line ({} packs total)",
                    item.product_id, merged
                );
                existing.set_quantity(merged);
            }
            None => self.items.push(item),
        }
        self.recalculate();
    }

    /// Set the pack count for a product; zero removes the line
    pub fn update_quantity(&mut self, product_id: &str, quantity_packs: u32) {
        if quantity_packs == 0 {
            self.remove_item(product_id);
            return;
        }
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product_id == product_id)
        {
            item.set_quantity(quantity_packs);
        }
        self.recalculate();
    }

    /// Remove the line for a product, if present
    pub fn remove_item(&mut self, product_id: &str) {
        self.items.retain(|item| item.product_id != product_id);
        self.recalculate();
    }

    /// Remove every line
    pub fn clear(&mut self) {
        self.items.clear();
        self.recalculate();
    }

    pub fn set_delivery_date(&mut self, date: NaiveDate) {
        self.delivery_date = Some(date);
    }

    pub fn set_memo(&mut self, memo: &str) {
        self.memo = Some(memo.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals {
            subtotal: self.subtotal,
            tax: self.tax,
            shipping_fee: self.shipping_fee,
            total: self.total,
        }
    }

    fn recalculate(&mut self) {
        let totals = aggregate(&self.items, &self.pricing);
        self.subtotal = totals.subtotal;
        self.tax = totals.tax;
        self.shipping_fee = totals.shipping_fee;
        self.total = totals.total;
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

/// Format an amount of won the way receipts print it, e.g. `₩12,000`
pub fn format_krw(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-₩{grouped}")
    } else {
        format!("₩{grouped}")
    }
}
