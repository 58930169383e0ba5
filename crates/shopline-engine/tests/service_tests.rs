// Integration tests for the service layer.
// Covers the create/list/update/delete operations for every entity and the
// rules that span entities.

use shopline_core::{Customer, ErrorCategory, ExErrorKind, Order, OrderLine, Product};
use shopline_engine::{
    add_order_line, create_customer, create_order, create_product, delete_customer,
    delete_order, delete_product, list_customers, list_orders, list_products, update_customer,
    update_product,
};
use shopline_store::Gateway;
use tempfile::TempDir;

fn setup_gateway() -> (TempDir, Gateway) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("shop.db");
    let gateway = Gateway::open(&db_path.to_string_lossy()).unwrap();
    (temp_dir, gateway)
}

fn row_counts(gateway: &Gateway) -> [i64; 4] {
    [
        gateway.count::<Customer>().unwrap(),
        gateway.count::<Product>().unwrap(),
        gateway.count::<Order>().unwrap(),
        gateway.count::<OrderLine>().unwrap(),
    ]
}

// ---------------------------------------------------------------------------
// customers
// ---------------------------------------------------------------------------

#[test]
fn test_create_customer_assigns_identity() {
    let (_tmp, gateway) = setup_gateway();

    let customer = create_customer("Ana", "ana@example.com", &gateway).unwrap();

    assert!(customer.is_persisted());
    let listed = list_customers(&gateway).unwrap();
    assert_eq!(listed, vec![customer]);
}

#[test]
fn test_create_customer_rejects_invalid_fields_without_writing() {
    let (_tmp, gateway) = setup_gateway();

    let err = create_customer("", "ana@example.com", &gateway).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidName);

    let err = create_customer("Ana", "ana.example.com", &gateway).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidEmail);

    assert_eq!(row_counts(&gateway), [0, 0, 0, 0]);
}

#[test]
fn test_update_customer() {
    let (_tmp, gateway) = setup_gateway();
    let customer = create_customer("Ana", "ana@example.com", &gateway).unwrap();
    let id = customer.id().unwrap();

    let updated = update_customer(id, "Ana B", "ana.b@example.com", &gateway).unwrap();

    assert_eq!(updated.id(), Some(id));
    let listed = list_customers(&gateway).unwrap();
    assert_eq!(listed[0].name(), "Ana B");
    assert_eq!(listed[0].email(), "ana.b@example.com");
}

#[test]
fn test_update_customer_invalid_email_keeps_stored_values() {
    let (_tmp, gateway) = setup_gateway();
    let customer = create_customer("Ana", "ana@example.com", &gateway).unwrap();
    let id = customer.id().unwrap();

    let err = update_customer(id, "Ana B", "nope", &gateway).unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Validation);
    assert_eq!(list_customers(&gateway).unwrap(), vec![customer]);
}

#[test]
fn test_update_unknown_customer_is_not_found() {
    let (_tmp, gateway) = setup_gateway();

    // Lookup runs first, so invalid values do not mask the missing identity
    let err = update_customer(41, "", "bad", &gateway).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.entity_id(), Some(41));
}

#[test]
fn test_delete_unknown_customer_leaves_table_unchanged() {
    let (_tmp, gateway) = setup_gateway();
    create_customer("Ana", "ana@example.com", &gateway).unwrap();

    let err = delete_customer(999, &gateway).unwrap_err();

    assert_eq!(err.category(), ErrorCategory::NotFound);
    assert_eq!(err.message(), "Customer with ID 999 not found");
    assert_eq!(gateway.count::<Customer>().unwrap(), 1);
}

#[test]
fn test_delete_customer() {
    let (_tmp, gateway) = setup_gateway();
    let customer = create_customer("Ana", "ana@example.com", &gateway).unwrap();

    delete_customer(customer.id().unwrap(), &gateway).unwrap();

    assert!(list_customers(&gateway).unwrap().is_empty());
}

#[test]
fn test_delete_customer_with_orders_is_refused() {
    let (_tmp, gateway) = setup_gateway();
    let customer = create_customer("Ana", "ana@example.com", &gateway).unwrap();
    let customer_id = customer.id().unwrap();
    create_order(customer_id, &gateway).unwrap();

    let err = delete_customer(customer_id, &gateway).unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Persistence);
    assert_eq!(row_counts(&gateway), [1, 0, 1, 0]);
}

// ---------------------------------------------------------------------------
// products
// ---------------------------------------------------------------------------

#[test]
fn test_product_lifecycle() {
    let (_tmp, gateway) = setup_gateway();

    let product = create_product("Widget", 9.99, &gateway).unwrap();
    let id = product.id().unwrap();

    let updated = update_product(id, "Widget XL", 12.5, &gateway).unwrap();
    assert_eq!(updated.price(), 12.5);
    assert_eq!(list_products(&gateway).unwrap(), vec![updated]);

    delete_product(id, &gateway).unwrap();
    assert!(list_products(&gateway).unwrap().is_empty());
}

#[test]
fn test_create_product_rejects_non_positive_price() {
    let (_tmp, gateway) = setup_gateway();

    for price in [0.0, -1.0] {
        let err = create_product("Widget", price, &gateway).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidPrice);
    }
    assert_eq!(gateway.count::<Product>().unwrap(), 0);
}

#[test]
fn test_update_product_rejects_price_and_keeps_row() {
    let (_tmp, gateway) = setup_gateway();
    let product = create_product("Widget", 9.99, &gateway).unwrap();

    let err = update_product(product.id().unwrap(), "Widget", -3.0, &gateway).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidPrice);
    assert_eq!(list_products(&gateway).unwrap()[0].price(), 9.99);
}

#[test]
fn test_delete_unknown_product_is_not_found() {
    let (_tmp, gateway) = setup_gateway();
    let err = delete_product(5, &gateway).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.entity(), Some("product"));
}

// ---------------------------------------------------------------------------
// orders
// ---------------------------------------------------------------------------

#[test]
fn test_create_order_for_unknown_customer_writes_nothing() {
    let (_tmp, gateway) = setup_gateway();

    let err = create_order(77, &gateway).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.entity(), Some("customer"));
    assert_eq!(row_counts(&gateway), [0, 0, 0, 0]);
}

#[test]
fn test_create_order_has_no_lines() {
    let (_tmp, gateway) = setup_gateway();
    let customer = create_customer("Ana", "ana@example.com", &gateway).unwrap();

    let order = create_order(customer.id().unwrap(), &gateway).unwrap();

    assert!(order.is_persisted());
    assert!(order.lines().is_empty());
    assert_eq!(order.customer().name(), "Ana");
}

#[test]
fn test_add_order_line_increases_line_count_by_one() {
    let (_tmp, gateway) = setup_gateway();
    let customer = create_customer("Ana", "ana@example.com", &gateway).unwrap();
    let product = create_product("Widget", 9.99, &gateway).unwrap();
    let order = create_order(customer.id().unwrap(), &gateway).unwrap();
    let before = gateway.count::<OrderLine>().unwrap();

    let order = add_order_line(order.id().unwrap(), product.id().unwrap(), 3, &gateway).unwrap();

    assert_eq!(gateway.count::<OrderLine>().unwrap(), before + 1);
    let line = order.lines().last().unwrap();
    assert_eq!(line.quantity(), 3);
    assert!(line.is_persisted());
}

#[test]
fn test_add_order_line_lookups_before_quantity() {
    let (_tmp, gateway) = setup_gateway();
    let customer = create_customer("Ana", "ana@example.com", &gateway).unwrap();
    let product = create_product("Widget", 9.99, &gateway).unwrap();
    let order = create_order(customer.id().unwrap(), &gateway).unwrap();
    let order_id = order.id().unwrap();
    let product_id = product.id().unwrap();

    let err = add_order_line(order_id + 100, product_id, 1, &gateway).unwrap_err();
    assert_eq!(err.entity(), Some("order"));
    assert_eq!(err.kind(), ExErrorKind::NotFound);

    let err = add_order_line(order_id, product_id + 100, 0, &gateway).unwrap_err();
    assert_eq!(err.entity(), Some("product"));
    assert_eq!(err.kind(), ExErrorKind::NotFound);

    let err = add_order_line(order_id, product_id, 0, &gateway).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidQuantity);

    assert_eq!(gateway.count::<OrderLine>().unwrap(), 0);
}

#[test]
fn test_full_order_scenario() {
    let (_tmp, gateway) = setup_gateway();

    let customer = create_customer("Ana", "ana@example.com", &gateway).unwrap();
    let product = create_product("Widget", 9.99, &gateway).unwrap();
    let order = create_order(customer.id().unwrap(), &gateway).unwrap();
    add_order_line(order.id().unwrap(), product.id().unwrap(), 2, &gateway).unwrap();

    let orders = list_orders(&gateway).unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].customer().name(), "Ana");
    assert_eq!(orders[0].lines().len(), 1);

    let line = &orders[0].lines()[0];
    assert_eq!(line.quantity(), 2);
    assert_eq!(line.product().name(), "Widget");
    assert_eq!(line.product().price(), 9.99);
    assert_eq!(list_products(&gateway).unwrap()[0].price(), 9.99);
}

#[test]
fn test_delete_order_removes_lines_and_frees_references() {
    let (_tmp, gateway) = setup_gateway();
    let customer = create_customer("Ana", "ana@example.com", &gateway).unwrap();
    let product = create_product("Widget", 9.99, &gateway).unwrap();
    let order = create_order(customer.id().unwrap(), &gateway).unwrap();
    let order_id = order.id().unwrap();
    add_order_line(order_id, product.id().unwrap(), 2, &gateway).unwrap();

    delete_order(order_id, &gateway).unwrap();
    assert_eq!(row_counts(&gateway), [1, 1, 0, 0]);

    delete_product(product.id().unwrap(), &gateway).unwrap();
    delete_customer(customer.id().unwrap(), &gateway).unwrap();
    assert_eq!(row_counts(&gateway), [0, 0, 0, 0]);
}

#[test]
fn test_delete_unknown_order_is_not_found() {
    let (_tmp, gateway) = setup_gateway();
    let err = delete_order(3, &gateway).unwrap_err();
    assert_eq!(err.message(), "Order with ID 3 not found");
}
