//! # Order Store Adapter
//!
//! In-memory order persistence plus a simulated payment processor. Payment
//! declines and insufficient funds are decision values in the outcome, not
//! errors; only simulated network failures surface as `ApiError`.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::config::SimulationConfig;
use crate::errors::{ApiError, ErrorKind};

use super::{generate_id, simulate, OrderStore};

/// Lifecycle state of a placed order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

/// A placed order with its cart frozen at checkout time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub cart_snapshot: Cart,
    pub status: OrderStatus,
    pub invoice_no: String,
    pub tracking_no: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Result of a payment attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentOutcome {
    pub success: bool,
    pub transaction_id: Option<String>,
    pub error: Option<String>,
}

/// In-memory mock of the order backend
pub struct MockOrders {
    orders: Mutex<Vec<Order>>,
    sim: SimulationConfig,
}

impl MockOrders {
    pub fn new(sim: SimulationConfig) -> Self {
        Self {
            orders: Mutex::new(Vec::new()),
            sim,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Order>> {
        self.orders.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl OrderStore for MockOrders {
    async fn create_order(&self, cart: Cart) -> Result<Order, ApiError> {
        simulate(&self.sim, "create_order").await?;

        let now = Utc::now();
        let order = Order {
            id: generate_id("order"),
            cart_snapshot: cart,
            status: OrderStatus::Pending,
            invoice_no: format!("INV-{}", now.timestamp_millis()),
            tracking_no: Some(format!("TRK-{}", now.timestamp_millis())),
            created_at: now,
            updated_at: now,
        };
        info!("Created order {} ({})", order.id, order.invoice_no);
        self.lock().push(order.clone());
        Ok(order)
    }

    async fn get_orders(&self, _store_id: &str) -> Result<Vec<Order>, ApiError> {
        simulate(&self.sim, "get_orders").await?;
        let mut orders = self.lock().clone();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }

    async fn get_order(&self, id: &str) -> Result<Option<Order>, ApiError> {
        simulate(&self.sim, "get_order").await?;
        Ok(self.lock().iter().find(|order| order.id == id).cloned())
    }

    async fn update_order_status(&self, id: &str, status: OrderStatus) -> Result<Order, ApiError> {
        simulate(&self.sim, "update_order_status").await?;
        let mut orders = self.lock();
        let order = orders
            .iter_mut()
            .find(|order| order.id == id)
            .ok_or_else(|| ApiError::not_found(format!("order {id}")))?;

        order.status = status;
        order.updated_at = Utc::now();
        Ok(order.clone())
    }

    async fn cancel_order(&self, id: &str) -> Result<Order, ApiError> {
        simulate(&self.sim, "cancel_order").await?;
        let mut orders = self.lock();
        let order = orders
            .iter_mut()
            .find(|order| order.id == id)
            .ok_or_else(|| ApiError::not_found(format!("order {id}")))?;

        if order.status == OrderStatus::Delivered {
            return Err(ApiError::new(
                ErrorKind::BusinessRule,
                "delivered orders cannot be cancelled",
            ));
        }

        order.status = OrderStatus::Cancelled;
        order.updated_at = Utc::now();
        Ok(order.clone())
    }

    async fn process_payment(&self, _cart: &Cart) -> Result<PaymentOutcome, ApiError> {
        simulate(&self.sim, "process_payment").await?;

        // Decline and insufficient-funds odds scale with the configured error
        // rate, so a zeroed simulation always approves.
        let roll: f64 = rand::thread_rng().gen();
        if roll < self.sim.error_rate * 2.0 {
            return Ok(PaymentOutcome {
                success: false,
                transaction_id: None,
                error: Some("payment declined, please verify the card details".to_string()),
            });
        }
        if roll < self.sim.error_rate * 3.0 {
            return Ok(PaymentOutcome {
                success: false,
                transaction_id: None,
                error: Some("insufficient funds".to_string()),
            });
        }

        Ok(PaymentOutcome {
            success: true,
            transaction_id: Some(format!("TXN-{}", Utc::now().timestamp_millis())),
            error: None,
        })
    }
}
