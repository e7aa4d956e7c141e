//! # Configuration Module
//!
//! Pricing, retry and simulation knobs with production defaults. The demo
//! binary overlays these from environment variables (loaded via dotenv);
//! tests construct them directly, usually with latency and error injection
//! zeroed out.

use serde::{Deserialize, Serialize};
use std::env;

/// Cart pricing policy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Tax rate applied to the cart subtotal (default: 10%)
    pub tax_rate: f64,
    /// Flat shipping fee in won (default: 3000)
    pub shipping_fee: i64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: 0.1,
            shipping_fee: 3000,
        }
    }
}

impl PricingConfig {
    /// Build a pricing config from the environment, falling back to defaults
    ///
    /// Recognizes `PREPCART_TAX_RATE` and `PREPCART_SHIPPING_FEE`; values that
    /// fail to parse are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(rate) = read_env("PREPCART_TAX_RATE") {
            config.tax_rate = rate;
        }
        if let Some(fee) = read_env("PREPCART_SHIPPING_FEE") {
            config.shipping_fee = fee;
        }
        config
    }
}

/// Retry policy for transient adapter failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    /// Total attempts including the first (default: 3)
    pub max_attempts: u32,
    /// Base backoff delay in milliseconds, doubled per attempt (default: 100)
    pub base_delay_ms: u64,
    /// Maximum random jitter added to each delay in milliseconds
    pub max_jitter_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 100,
            max_jitter_ms: 50,
        }
    }
}

/// Behavior of the in-memory mock collaborators
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Base latency applied to every adapter call, in milliseconds
    pub latency_ms: u64,
    /// Probability in [0, 1] that a call fails with a transient error
    pub error_rate: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            latency_ms: 300,
            error_rate: 0.05,
        }
    }
}

impl SimulationConfig {
    /// No latency, no injected errors; what tests want
    pub fn instant() -> Self {
        Self {
            latency_ms: 0,
            error_rate: 0.0,
        }
    }
}

fn read_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_defaults() {
        let pricing = PricingConfig::default();
        assert_eq!(pricing.tax_rate, 0.1);
        assert_eq!(pricing.shipping_fee, 3000);
    }

    #[test]
    fn test_pricing_env_overrides() {
        // single test touching both vars; parallel tests share the process env
        env::set_var("PREPCART_TAX_RATE", "0.2");
        env::set_var("PREPCART_SHIPPING_FEE", "5000");
        let pricing = PricingConfig::from_env();
        assert_eq!(pricing.tax_rate, 0.2);
        assert_eq!(pricing.shipping_fee, 5000);

        // unparseable values fall back to the default, per-field
        env::set_var("PREPCART_TAX_RATE", "ten percent");
        let pricing = PricingConfig::from_env();
        assert_eq!(pricing.tax_rate, PricingConfig::default().tax_rate);
        assert_eq!(pricing.shipping_fee, 5000);

        env::remove_var("PREPCART_TAX_RATE");
        env::remove_var("PREPCART_SHIPPING_FEE");
        assert_eq!(PricingConfig::from_env(), PricingConfig::default());
    }

    #[test]
    fn test_instant_simulation_disables_injection() {
        let sim = SimulationConfig::instant();
        assert_eq!(sim.latency_ms, 0);
        assert_eq!(sim.error_rate, 0.0);
    }
}
