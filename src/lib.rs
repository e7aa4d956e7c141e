//! # Prepcart
//!
//! Recipe-to-order pipeline for food-service operators: scale a recipe to a
//! target serving count, match each ingredient to purchasable catalog
//! products, enforce minimum-order-quantity and pack-size rules, and roll the
//! selections up into a priced cart.
//!
//! The pipeline stages (`scaling`, `units`, `matching`, `quantity`, `cart`)
//! are pure, synchronous functions over immutable inputs. Recipe, catalog and
//! order storage are external collaborators behind the repository traits in
//! [`adapters`], with in-memory mocks that simulate latency and transient
//! failures.

pub mod adapters;
pub mod cart;
pub mod config;
pub mod errors;
pub mod matching;
pub mod model;
pub mod pipeline;
pub mod quantity;
pub mod retry;
pub mod scaling;
pub mod units;
