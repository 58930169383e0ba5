mod common;

use common::{saved_customer, saved_product};
use proptest::prelude::*;
use shopline_core::{Customer, Order, OrderLine, Product, ShopError};

// ===== NAME ASSIGNMENT =====

#[test]
fn test_empty_name_rejected_for_transient_customer() {
    let result = Customer::new("", "ana@example.com");
    assert_eq!(result, Err(ShopError::EmptyName { entity: "customer" }));
}

#[test]
fn test_empty_name_rejected_for_persisted_product() {
    let mut product = saved_product(1, "Widget", 9.99);
    let err = product.set_name("").unwrap_err();

    assert!(err.is_validation());
    assert_eq!(product.name(), "Widget");
    assert_eq!(product.id(), Some(1));
}

// ===== ORDER LINES =====

#[test]
fn test_zero_quantity_line_never_reaches_order() {
    let mut order = Order::new(saved_customer(1, "Ana")).unwrap();
    let err = order
        .add_line(saved_product(2, "Widget", 9.99), 0)
        .unwrap_err();

    assert_eq!(err, ShopError::NonPositiveQuantity { quantity: 0 });
    assert!(order.lines().is_empty());
}

#[test]
fn test_transient_references_rejected() {
    let customer = Customer::new("Ana", "ana@example.com").unwrap();
    assert!(matches!(
        Order::new(customer),
        Err(ShopError::NotPersisted { entity: "customer" })
    ));

    let product = Product::new("Widget", 9.99).unwrap();
    assert!(matches!(
        OrderLine::new(product, 1),
        Err(ShopError::NotPersisted { entity: "product" })
    ));
}

// ===== PROPERTIES =====

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: any email without '@' is rejected and the previous email survives.
    #[test]
    fn email_without_at_is_rejected(email in "[^@]{0,40}") {
        let mut customer = saved_customer(1, "Ana");
        let before = customer.email().to_string();

        prop_assert_eq!(customer.set_email(email.clone()), Err(ShopError::InvalidEmail));
        prop_assert_eq!(customer.email(), before.as_str());
        prop_assert!(Customer::new("Ana", email).is_err());
    }

    /// Property: any email containing '@' is accepted as-is.
    #[test]
    fn email_with_at_is_accepted(local in "[a-z0-9.]{0,20}", domain in "[a-z0-9.]{0,20}") {
        let email = format!("{}@{}", local, domain);
        let mut customer = saved_customer(1, "Ana");

        prop_assert!(customer.set_email(email.clone()).is_ok());
        prop_assert_eq!(customer.email(), email.as_str());
    }

    /// Property: any non-empty name is stored verbatim.
    #[test]
    fn non_empty_name_is_accepted(name in ".{1,40}") {
        let mut customer = saved_customer(1, "Ana");
        prop_assert!(customer.set_name(name.clone()).is_ok());
        prop_assert_eq!(customer.name(), name.as_str());
    }

    /// Property: any price at or below zero is rejected and the old price survives.
    #[test]
    fn non_positive_price_is_rejected(price in -1.0e9f64..=0.0) {
        let mut product = saved_product(1, "Widget", 9.99);

        prop_assert!(product.set_price(price).is_err());
        prop_assert_eq!(product.price(), 9.99);
        prop_assert!(Product::new("Widget", price).is_err());
    }

    /// Property: any strictly positive price is accepted.
    #[test]
    fn positive_price_is_accepted(price in 0.01f64..1.0e9) {
        let product = Product::new("Widget", price).unwrap();
        prop_assert_eq!(product.price(), price);
    }

    /// Property: any quantity at or below zero is rejected and the order keeps no line.
    #[test]
    fn non_positive_quantity_is_rejected(quantity in i64::MIN..=0) {
        let product = saved_product(3, "Widget", 9.99);
        prop_assert_eq!(
            OrderLine::new(product.clone(), quantity),
            Err(ShopError::NonPositiveQuantity { quantity })
        );

        let mut order = Order::new(saved_customer(1, "Ana")).unwrap();
        prop_assert!(order.add_line(product, quantity).is_err());
        prop_assert!(order.lines().is_empty());
    }
}
