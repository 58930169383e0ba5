//! Eager loading of orders and lines
//!
//! Orders are always read together with their customer, and lines together
//! with their product, through explicit joins. Nothing is fetched lazily.

use std::collections::HashMap;

use super::customer::customer_from_row;
use super::product::product_from_row;
use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, Row, ToSql};
use shopline_core::{EntityId, Order, OrderLine};

const ORDER_SELECT: &str = "SELECT o.id, c.id, c.name, c.email \
     FROM orders o JOIN customers c ON c.id = o.customer_id";

const LINE_SELECT: &str = "SELECT l.id, l.order_id, p.id, p.name, p.price, l.quantity \
     FROM order_lines l JOIN products p ON p.id = l.product_id";

type OrderRow = (EntityId, (EntityId, String, String));
type LineRow = (EntityId, EntityId, (EntityId, String, f64), i64);

fn read_order_row(row: &Row<'_>) -> rusqlite::Result<OrderRow> {
    Ok((row.get(0)?, (row.get(1)?, row.get(2)?, row.get(3)?)))
}

fn read_line_row(row: &Row<'_>) -> rusqlite::Result<LineRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        (row.get(2)?, row.get(3)?, row.get(4)?),
        row.get(5)?,
    ))
}

fn line_from_row((id, order_id, product, quantity): LineRow) -> Result<OrderLine> {
    let product = product_from_row(product)?;
    Ok(OrderLine::restore(id, order_id, product, quantity)?)
}

fn query_line_rows(
    conn: &Connection,
    filter: &str,
    params: &[&dyn ToSql],
) -> Result<Vec<LineRow>> {
    let sql = format!("{} {} ORDER BY l.id", LINE_SELECT, filter);
    let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;

    let rows = stmt
        .query_map(params, read_line_row)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;
    Ok(rows)
}

/// Load lines matching `filter` (a `WHERE` clause over alias `l`)
pub(super) fn load_lines(
    conn: &Connection,
    filter: &str,
    params: &[&dyn ToSql],
) -> Result<Vec<OrderLine>> {
    query_line_rows(conn, filter, params)?
        .into_iter()
        .map(line_from_row)
        .collect()
}

fn load_orders(
    conn: &Connection,
    order_filter: &str,
    line_filter: &str,
    params: &[&dyn ToSql],
) -> Result<Vec<Order>> {
    let sql = format!("{} {} ORDER BY o.id", ORDER_SELECT, order_filter);
    let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
    let order_rows = stmt
        .query_map(params, read_order_row)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    let mut lines_by_order: HashMap<EntityId, Vec<OrderLine>> = HashMap::new();
    for row in query_line_rows(conn, line_filter, params)? {
        let order_id = row.1;
        lines_by_order
            .entry(order_id)
            .or_default()
            .push(line_from_row(row)?);
    }

    order_rows
        .into_iter()
        .map(|(id, customer)| {
            let customer = customer_from_row(customer)?;
            let lines = lines_by_order.remove(&id).unwrap_or_default();
            Ok(Order::restore(id, customer, lines)?)
        })
        .collect()
}

/// Load one order with its customer and lines
pub(super) fn load_order(conn: &Connection, id: EntityId) -> Result<Option<Order>> {
    let orders = load_orders(
        conn,
        "WHERE o.id = ?1",
        "WHERE l.order_id = ?1",
        rusqlite::params![id],
    )?;
    Ok(orders.into_iter().next())
}

/// Load every order with its customer and lines
pub(super) fn load_all_orders(conn: &Connection) -> Result<Vec<Order>> {
    load_orders(conn, "", "", rusqlite::params![])
}
