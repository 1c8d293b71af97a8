//! Integration tests for the customer/order store against the shipped fixtures

mod common;

use acme_support::store::{CancelOutcome, CustomerLookup, LookupKey, OrderStatus, SupportStore};
use acme_support::types::AppError;
use common::{data_dir, fixture_store};
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_fixtures_load() {
    let store = fixture_store();
    assert_eq!(store.customers().len(), 4);
    assert_eq!(store.orders().len(), 6);
}

#[rstest]
#[case("email", "john@gmail.com")]
#[case("phone", "123-456-7890")]
#[case("username", "johndoe")]
fn test_get_user_by_each_key(#[case] key: &str, #[case] value: &str) {
    let store = fixture_store();
    match store.get_user(key, value).unwrap() {
        CustomerLookup::Found(customer) => {
            assert_eq!(customer.id, "1213210");
            assert_eq!(customer.extra["name"], "John Doe");
        }
        other => panic!("expected a customer, got {:?}", other),
    }
}

#[test]
fn test_get_user_not_found_message() {
    let store = fixture_store();
    let lookup = store.get_user("email", "nobody@example.com").unwrap();
    assert_eq!(
        lookup,
        CustomerLookup::NotFound("Couldn't find a user with email of nobody@example.com".to_string())
    );
}

#[rstest]
#[case("name")]
#[case("EMAIL")]
#[case("")]
fn test_get_user_invalid_key(#[case] key: &str) {
    let store = fixture_store();
    let err = store.get_user(key, "John Doe").unwrap_err();
    assert!(matches!(err, AppError::InvalidKey(k) if k == key));
}

#[test]
fn test_lookup_key_round_trips_names() {
    for key in LookupKey::ALL {
        assert_eq!(key.as_str().parse::<LookupKey>().unwrap(), key);
    }
}

#[test]
fn test_get_order_by_id() {
    let store = fixture_store();
    let order = store.get_order_by_id("24601").unwrap();
    assert_eq!(order.extra["product"], "Wireless Headphones");
    assert_eq!(order.status, OrderStatus::Shipped);

    assert!(store.get_order_by_id("00000").is_none());
}

#[test]
fn test_get_customer_orders() {
    let store = fixture_store();
    let ids: Vec<&str> = store
        .get_customer_orders("1213210")
        .iter()
        .map(|o| o.id.as_str())
        .collect();
    assert_eq!(ids, vec!["24601", "13579", "54321"]);

    assert!(store.get_customer_orders("0000000").is_empty());
}

#[test]
fn test_cancel_processing_order() {
    let mut store = fixture_store();
    assert_eq!(store.cancel_order("13579"), CancelOutcome::Cancelled);
    assert_eq!(
        store.get_order_by_id("13579").unwrap().status,
        OrderStatus::Cancelled
    );

    // Repeating is a no-op rejection
    assert_eq!(
        store.cancel_order("13579"),
        CancelOutcome::Rejected(OrderStatus::Cancelled)
    );
    assert_eq!(
        store.get_order_by_id("13579").unwrap().status,
        OrderStatus::Cancelled
    );
}

#[test]
fn test_cancel_shipped_order_is_rejected() {
    let mut store = fixture_store();
    let outcome = store.cancel_order("24601");
    assert_eq!(outcome, CancelOutcome::Rejected(OrderStatus::Shipped));
    assert_eq!(outcome.message(), "Order has already shipped.  Can't cancel it.");
    assert_eq!(store.get_order_by_id("24601").unwrap().status, OrderStatus::Shipped);
}

#[test]
fn test_cancel_unknown_order() {
    let mut store = fixture_store();
    let before = store.orders().to_vec();
    let outcome = store.cancel_order("99999");
    assert_eq!(outcome, CancelOutcome::NotFound);
    assert_eq!(outcome.message(), "Can't find that order!");
    assert_eq!(store.orders(), before.as_slice());
}

#[test]
fn test_extra_fields_are_preserved() {
    let store = fixture_store();
    let order = store.get_order_by_id("24601").unwrap();
    let value = serde_json::to_value(order).unwrap();
    assert!(value.get("quantity").is_some());
    assert!(value.get("price").is_some());
    assert_eq!(value["status"], "Shipped");
}

#[test]
fn test_unknown_status_is_kept_verbatim() {
    let store = SupportStore::from_json_str(
        "[]",
        r#"[{"id": "1", "customer_id": "2", "product": "Lamp", "status": "Backordered"}]"#,
    )
    .unwrap();
    let order = store.get_order_by_id("1").unwrap();
    assert_eq!(order.status, OrderStatus::Other("Backordered".to_string()));
    assert_eq!(serde_json::to_value(order).unwrap()["status"], "Backordered");
}

#[test]
fn test_fixtures_without_name_or_with_structured_product_load() {
    let dir = TempDir::new().unwrap();
    let customers = dir.path().join("customers.json");
    let orders = dir.path().join("orders.json");
    fs::write(
        &customers,
        r#"[{"id": "5", "email": "anon@example.com", "phone": "555-0100", "username": "anon"}]"#,
    )
    .unwrap();
    fs::write(
        &orders,
        r#"[{"id": "500", "customer_id": "5", "status": "Processing",
             "product": {"sku": "WM-2", "name": "Wireless Mouse", "color": "black"}}]"#,
    )
    .unwrap();

    let mut store = SupportStore::from_files(&customers, &orders).unwrap();

    match store.get_user("username", "anon").unwrap() {
        CustomerLookup::Found(customer) => {
            assert_eq!(customer.id, "5");
            assert!(!customer.extra.contains_key("name"));
        }
        other => panic!("expected a customer, got {:?}", other),
    }

    let order = store.get_order_by_id("500").unwrap();
    assert_eq!(order.extra["product"]["sku"], "WM-2");
    assert_eq!(store.get_customer_orders("5").len(), 1);
    assert_eq!(store.cancel_order("500"), CancelOutcome::Cancelled);
}

#[test]
fn test_missing_fixture_file() {
    let dir = TempDir::new().unwrap();
    let err = SupportStore::from_files(
        dir.path().join("customers.json"),
        data_dir().join("orders.json"),
    )
    .unwrap_err();
    assert!(matches!(err, AppError::Fixture(_)));
}

#[test]
fn test_malformed_fixture_file() {
    let dir = TempDir::new().unwrap();
    let customers = dir.path().join("customers.json");
    fs::write(&customers, "{not json").unwrap();

    let err = SupportStore::from_files(&customers, data_dir().join("orders.json")).unwrap_err();
    assert!(matches!(err, AppError::Fixture(msg) if msg.contains("customers")));
}
