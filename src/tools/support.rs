use crate::store::{LookupKey, SharedStore};
use crate::tools::registry::{parse_args, Tool};
use crate::types::{AppError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetUserParams {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderIdParams {
    pub order_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomerIdParams {
    pub customer_id: String,
}

fn to_value<T: serde::Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| AppError::Internal(e.to_string()))
}

pub struct GetUser {
    store: SharedStore,
}

impl GetUser {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for GetUser {
    fn name(&self) -> &str {
        "get_user"
    }

    fn description(&self) -> &str {
        "Looks up a user by email, phone, or username."
    }

    fn parameters_schema(&self) -> Value {
        let keys: Vec<&str> = LookupKey::ALL.iter().map(|k| k.as_str()).collect();
        json!({
            "type": "object",
            "properties": {
                "key": {
                    "type": "string",
                    "enum": keys,
                    "description": "The attribute to search for a user by (email, phone, or username)."
                },
                "value": {
                    "type": "string",
                    "description": "The value to match for the specified attribute."
                }
            },
            "required": ["key", "value"]
        })
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let params: GetUserParams = parse_args(args)?;
        let lookup = self.store.read().get_user(&params.key, &params.value)?;
        to_value(lookup)
    }
}

pub struct GetOrderById {
    store: SharedStore,
}

impl GetOrderById {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for GetOrderById {
    fn name(&self) -> &str {
        "get_order_by_id"
    }

    fn description(&self) -> &str {
        "Retrieves the details of a specific order based on the order ID. Returns the order ID, product name, quantity, price, and order status."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "order_id": {
                    "type": "string",
                    "description": "The unique identifier for the order."
                }
            },
            "required": ["order_id"]
        })
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let params: OrderIdParams = parse_args(args)?;
        let store = self.store.read();
        to_value(store.get_order_by_id(&params.order_id))
    }
}

pub struct GetCustomerOrders {
    store: SharedStore,
}

impl GetCustomerOrders {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for GetCustomerOrders {
    fn name(&self) -> &str {
        "get_customer_orders"
    }

    fn description(&self) -> &str {
        "Retrieves the list of orders belonging to a user based on a user's customer id."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "customer_id": {
                    "type": "string",
                    "description": "The customer_id belonging to the user"
                }
            },
            "required": ["customer_id"]
        })
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let params: CustomerIdParams = parse_args(args)?;
        let store = self.store.read();
        to_value(store.get_customer_orders(&params.customer_id))
    }
}

pub struct CancelOrder {
    store: SharedStore,
}

impl CancelOrder {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for CancelOrder {
    fn name(&self) -> &str {
        "cancel_order"
    }

    fn description(&self) -> &str {
        "Cancels an order based on a provided order_id. Only orders that are 'processing' can be cancelled."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "order_id": {
                    "type": "string",
                    "description": "The order_id pertaining to a particular order"
                }
            },
            "required": ["order_id"]
        })
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let params: OrderIdParams = parse_args(args)?;
        let outcome = self.store.write().cancel_order(&params.order_id);
        Ok(Value::String(outcome.message().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SupportStore;

    fn shared() -> SharedStore {
        SupportStore::from_json_str(
            r#"[{"id": "7", "name": "Cy", "email": "cy@example.com", "phone": "555-7", "username": "cy"}]"#,
            r#"[{"id": "70", "customer_id": "7", "product": "Kettle", "status": "Processing"}]"#,
        )
        .unwrap()
        .into_shared()
    }

    #[tokio::test]
    async fn test_get_user_returns_record() {
        let tool = GetUser::new(shared());
        let value = tool
            .execute(json!({"key": "phone", "value": "555-7"}))
            .await
            .unwrap();
        assert_eq!(value["name"], "Cy");
    }

    #[tokio::test]
    async fn test_get_user_rejects_extra_argument() {
        let tool = GetUser::new(shared());
        let err = tool
            .execute(json!({"key": "email", "value": "cy@example.com", "limit": 1}))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidArguments(_)));
    }

    #[tokio::test]
    async fn test_missing_order_is_null() {
        let tool = GetOrderById::new(shared());
        let value = tool.execute(json!({"order_id": "nope"})).await.unwrap();
        assert!(value.is_null());
    }

    #[tokio::test]
    async fn test_cancel_mutates_shared_store() {
        let store = shared();
        let cancel = CancelOrder::new(store.clone());
        let lookup = GetOrderById::new(store);

        let value = cancel.execute(json!({"order_id": "70"})).await.unwrap();
        assert_eq!(value, "Cancelled the order");

        let order = lookup.execute(json!({"order_id": "70"})).await.unwrap();
        assert_eq!(order["status"], "Cancelled");
    }

    #[test]
    fn test_get_user_schema_lists_keys() {
        let schema = GetUser::new(shared()).parameters_schema();
        assert_eq!(schema["properties"]["key"]["enum"], json!(["email", "phone", "username"]));
    }
}
