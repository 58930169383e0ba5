//! Row mapping for orders
//!
//! An order owns its lines: saving an order writes any line not yet in the
//! store, and deleting it deletes its lines first.

use super::hydration::{load_all_orders, load_order};
use super::order_line::insert_line;
use super::{Loadable, Persistable};
use crate::errors::{from_rusqlite, row_missing, Result};
use rusqlite::Connection;
use shopline_core::{EntityId, Order};

fn insert_unsaved_lines(order: &mut Order, conn: &Connection) -> Result<()> {
    for line in order.unsaved_lines_mut() {
        insert_line(line, conn)?;
    }
    Ok(())
}

impl Loadable for Order {
    const ENTITY: &'static str = "order";
    const TABLE: &'static str = "orders";

    fn identity(&self) -> Option<EntityId> {
        self.id()
    }

    fn fetch(conn: &Connection, id: EntityId) -> Result<Option<Self>> {
        load_order(conn, id)
    }

    fn fetch_all(conn: &Connection) -> Result<Vec<Self>> {
        load_all_orders(conn)
    }
}

impl Persistable for Order {
    fn insert(&mut self, conn: &Connection) -> Result<EntityId> {
        conn.execute(
            "INSERT INTO orders (customer_id) VALUES (?1)",
            [self.customer_id()],
        )
        .map_err(from_rusqlite)?;

        let id = conn.last_insert_rowid();
        self.assign_id(id)?;
        insert_unsaved_lines(self, conn)?;
        Ok(id)
    }

    fn update(&mut self, conn: &Connection) -> Result<()> {
        let id = self.require_id()?;

        // The customer never changes; this only proves the row still exists.
        let changed = conn
            .execute(
                "UPDATE orders SET customer_id = ?1 WHERE id = ?2",
                rusqlite::params![self.customer_id(), id],
            )
            .map_err(from_rusqlite)?;

        if changed == 0 {
            return Err(row_missing(Self::ENTITY, id));
        }
        insert_unsaved_lines(self, conn)
    }

    fn delete(conn: &Connection, id: EntityId) -> Result<()> {
        let lines = conn
            .execute("DELETE FROM order_lines WHERE order_id = ?1", [id])
            .map_err(from_rusqlite)?;
        conn.execute("DELETE FROM orders WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;

        tracing::debug!(order_id = id, lines, "order deleted with its lines");
        Ok(())
    }
}
