//! In-memory customer and order store
//!
//! The store is the only owner of the customer and order collections. Both are
//! loaded once from JSON fixtures and only `cancel_order` ever mutates them.
//!
//! Business outcomes (no such customer, no such order, order already shipped)
//! are plain values. The only error a lookup can raise is
//! [`AppError::InvalidKey`] for a lookup key outside `email`/`phone`/`username`.
//!
//! # Example
//!
//! ```rust,ignore
//! use acme_support::store::{CancelOutcome, SupportStore};
//!
//! let mut store = SupportStore::from_files("data/customers.json", "data/orders.json")?;
//! assert_eq!(store.cancel_order("13579"), CancelOutcome::Cancelled);
//! ```

use crate::types::{AppError, Result};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info};

/// Store handle shared between the tools that read and mutate it
pub type SharedStore = Arc<RwLock<SupportStore>>;

/// A customer record. Fields beyond the id and lookup keys (`name` included)
/// are opaque and kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub email: String,
    pub phone: String,
    pub username: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Customer {
    /// Value of the natural key used for lookups
    pub fn key_value(&self, key: LookupKey) -> &str {
        match key {
            LookupKey::Email => &self.email,
            LookupKey::Phone => &self.phone,
            LookupKey::Username => &self.username,
        }
    }
}

/// An order record. Product details (name, quantity, price, ...) are opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    pub status: OrderStatus,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Order status. Unknown statuses from fixtures are preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Processing,
    Shipped,
    Cancelled,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Other(status) => status,
        }
    }
}

impl From<String> for OrderStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "Processing" => OrderStatus::Processing,
            "Shipped" => OrderStatus::Shipped,
            "Cancelled" => OrderStatus::Cancelled,
            _ => OrderStatus::Other(status),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(status) => status,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The natural keys a customer can be looked up by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKey {
    Email,
    Phone,
    Username,
}

impl LookupKey {
    pub const ALL: [LookupKey; 3] = [LookupKey::Email, LookupKey::Phone, LookupKey::Username];

    pub fn as_str(&self) -> &'static str {
        match self {
            LookupKey::Email => "email",
            LookupKey::Phone => "phone",
            LookupKey::Username => "username",
        }
    }
}

impl FromStr for LookupKey {
    type Err = AppError;

    fn from_str(key: &str) -> Result<Self> {
        match key {
            "email" => Ok(LookupKey::Email),
            "phone" => Ok(LookupKey::Phone),
            "username" => Ok(LookupKey::Username),
            other => Err(AppError::InvalidKey(other.to_string())),
        }
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a customer lookup. Serializes as the record or as the message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CustomerLookup {
    Found(Customer),
    NotFound(String),
}

/// Result of a cancellation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelOutcome {
    /// The order was `Processing` and is now `Cancelled`
    Cancelled,
    /// The order exists but its status does not allow cancellation
    Rejected(OrderStatus),
    NotFound,
}

impl CancelOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            CancelOutcome::Cancelled => "Cancelled the order",
            CancelOutcome::Rejected(_) => "Order has already shipped.  Can't cancel it.",
            CancelOutcome::NotFound => "Can't find that order!",
        }
    }
}

impl fmt::Display for CancelOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Data facade over the customer and order collections
#[derive(Debug, Clone, Default)]
pub struct SupportStore {
    customers: Vec<Customer>,
    orders: Vec<Order>,
}

impl SupportStore {
    pub fn new(customers: Vec<Customer>, orders: Vec<Order>) -> Self {
        Self { customers, orders }
    }

    /// Wrap the store for sharing with the tool registry
    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    /// Parse both collections from JSON array text
    pub fn from_json_str(customers: &str, orders: &str) -> Result<Self> {
        let customers: Vec<Customer> = serde_json::from_str(customers)
            .map_err(|e| AppError::Fixture(format!("Failed to parse customers: {}", e)))?;
        let orders: Vec<Order> = serde_json::from_str(orders)
            .map_err(|e| AppError::Fixture(format!("Failed to parse orders: {}", e)))?;

        Ok(Self::new(customers, orders))
    }

    /// Load both collections from JSON fixture files
    pub fn from_files(customers_path: impl AsRef<Path>, orders_path: impl AsRef<Path>) -> Result<Self> {
        let customers_path = customers_path.as_ref();
        let orders_path = orders_path.as_ref();

        let customers = std::fs::read_to_string(customers_path).map_err(|e| {
            AppError::Fixture(format!("Failed to read {}: {}", customers_path.display(), e))
        })?;
        let orders = std::fs::read_to_string(orders_path).map_err(|e| {
            AppError::Fixture(format!("Failed to read {}: {}", orders_path.display(), e))
        })?;

        let store = Self::from_json_str(&customers, &orders)?;
        info!(
            customers = store.customers.len(),
            orders = store.orders.len(),
            "Loaded support fixtures"
        );
        Ok(store)
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Look up a customer by a key name as the model supplies it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidKey`] when `key` is not one of
    /// `email`, `phone`, `username`. A missing customer is not an error.
    pub fn get_user(&self, key: &str, value: &str) -> Result<CustomerLookup> {
        let key: LookupKey = key.parse()?;
        Ok(self.find_customer(key, value))
    }

    /// Look up the first customer whose `key` field equals `value`
    pub fn find_customer(&self, key: LookupKey, value: &str) -> CustomerLookup {
        match self.customers.iter().find(|c| c.key_value(key) == value) {
            Some(customer) => CustomerLookup::Found(customer.clone()),
            None => {
                debug!(%key, value, "No customer matched");
                CustomerLookup::NotFound(format!(
                    "Couldn't find a user with {} of {}",
                    key, value
                ))
            }
        }
    }

    pub fn get_order_by_id(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    /// All orders placed by a customer, in fixture order
    pub fn get_customer_orders(&self, customer_id: &str) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|o| o.customer_id == customer_id)
            .collect()
    }

    /// Cancel an order that is still `Processing`.
    ///
    /// Any other status is left untouched, so repeating a successful
    /// cancellation yields [`CancelOutcome::Rejected`].
    pub fn cancel_order(&mut self, order_id: &str) -> CancelOutcome {
        let Some(order) = self.orders.iter_mut().find(|o| o.id == order_id) else {
            return CancelOutcome::NotFound;
        };

        if order.status == OrderStatus::Processing {
            order.status = OrderStatus::Cancelled;
            info!(order_id, "Order cancelled");
            CancelOutcome::Cancelled
        } else {
            debug!(order_id, status = %order.status, "Order not cancellable");
            CancelOutcome::Rejected(order.status.clone())
        }
    }
}
