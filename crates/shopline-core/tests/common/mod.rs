use shopline_core::{Customer, EntityId, Product};

/// Build a customer that looks as if the store had already saved it
#[allow(dead_code)]
pub fn saved_customer(id: EntityId, name: &str) -> Customer {
    let mut customer = Customer::new(name, format!("{}@example.com", name.to_lowercase()))
        .expect("valid test customer");
    customer.assign_id(id).expect("fresh identity");
    customer
}

/// Build a product that looks as if the store had already saved it
#[allow(dead_code)]
pub fn saved_product(id: EntityId, name: &str, price: f64) -> Product {
    let mut product = Product::new(name, price).expect("valid test product");
    product.assign_id(id).expect("fresh identity");
    product
}
