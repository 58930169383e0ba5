// Integration tests for deletes: orders own their lines, referenced
// customers and products are protected by foreign keys

use shopline_core::{Customer, ErrorCategory, Order, Product};
use shopline_store::{CustomerRepo, Gateway, OrderLineRepo, OrderRepo, ProductRepo};

fn saved_order(gateway: &Gateway) -> (Customer, Product, Order) {
    let mut customer = Customer::new("Ana", "ana@example.com").unwrap();
    CustomerRepo::add(gateway, &mut customer).unwrap();
    let mut product = Product::new("Widget", 9.99).unwrap();
    ProductRepo::add(gateway, &mut product).unwrap();

    let mut order = Order::new(customer.clone()).unwrap();
    order.add_line(product.clone(), 2).unwrap();
    OrderRepo::add(gateway, &mut order).unwrap();
    (customer, product, order)
}

#[test]
fn test_deleting_order_removes_its_lines() {
    let gateway = Gateway::open_in_memory().unwrap();
    let (_, _, order) = saved_order(&gateway);

    OrderRepo::delete(&gateway, &order).unwrap();

    assert_eq!(gateway.count::<Order>().unwrap(), 0);
    assert_eq!(OrderLineRepo::count(&gateway).unwrap(), 0);
}

#[test]
fn test_referenced_customer_cannot_be_deleted() {
    // Given: A customer with an order
    let gateway = Gateway::open_in_memory().unwrap();
    let (customer, _, _) = saved_order(&gateway);

    // When: The customer is deleted
    let err = CustomerRepo::delete(&gateway, &customer).unwrap_err();

    // Then: The store refuses and nothing changes
    assert_eq!(err.category(), ErrorCategory::Persistence);
    assert_eq!(gateway.count::<Customer>().unwrap(), 1);
    assert_eq!(gateway.count::<Order>().unwrap(), 1);
}

#[test]
fn test_referenced_product_cannot_be_deleted() {
    let gateway = Gateway::open_in_memory().unwrap();
    let (_, product, _) = saved_order(&gateway);

    let err = ProductRepo::delete(&gateway, &product).unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Persistence);
    assert_eq!(gateway.count::<Product>().unwrap(), 1);
}

#[test]
fn test_customer_can_be_deleted_once_orders_are_gone() {
    let gateway = Gateway::open_in_memory().unwrap();
    let (customer, product, order) = saved_order(&gateway);

    OrderRepo::delete(&gateway, &order).unwrap();
    CustomerRepo::delete(&gateway, &customer).unwrap();
    ProductRepo::delete(&gateway, &product).unwrap();

    assert_eq!(gateway.count::<Customer>().unwrap(), 0);
    assert_eq!(gateway.count::<Product>().unwrap(), 0);
}
