//! Row mapping for order lines
//!
//! Lines are read on their own but only ever written through their order,
//! so they are `Loadable` and not `Persistable`.

use super::hydration::load_lines;
use super::Loadable;
use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;
use shopline_core::errors::ShopError;
use shopline_core::{EntityId, OrderLine};

/// Write a transient line of an already saved order
pub(super) fn insert_line(line: &mut OrderLine, conn: &Connection) -> Result<EntityId> {
    let order_id = line
        .order_id()
        .ok_or(ShopError::NotPersisted { entity: "order" })?;

    conn.execute(
        "INSERT INTO order_lines (order_id, product_id, quantity) VALUES (?1, ?2, ?3)",
        rusqlite::params![order_id, line.product_id(), line.quantity()],
    )
    .map_err(from_rusqlite)?;

    let id = conn.last_insert_rowid();
    line.assign_id(id)?;
    tracing::debug!(order_id, line_id = id, "order line inserted");
    Ok(id)
}

impl Loadable for OrderLine {
    const ENTITY: &'static str = "order_line";
    const TABLE: &'static str = "order_lines";

    fn identity(&self) -> Option<EntityId> {
        self.id()
    }

    fn fetch(conn: &Connection, id: EntityId) -> Result<Option<Self>> {
        let lines = load_lines(conn, "WHERE l.id = ?1", rusqlite::params![id])?;
        Ok(lines.into_iter().next())
    }

    fn fetch_all(conn: &Connection) -> Result<Vec<Self>> {
        load_lines(conn, "", rusqlite::params![])
    }
}
