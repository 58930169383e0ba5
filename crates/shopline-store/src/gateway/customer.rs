//! Row mapping for customers

use super::{Loadable, Persistable};
use crate::errors::{from_rusqlite, row_missing, Result};
use rusqlite::{Connection, OptionalExtension};
use shopline_core::{Customer, EntityId};

type CustomerRow = (EntityId, String, String);

/// Rebuild a persisted customer from its row, re-checking field rules
pub(super) fn customer_from_row((id, name, email): CustomerRow) -> Result<Customer> {
    let mut customer = Customer::new(name, email)?;
    customer.assign_id(id)?;
    Ok(customer)
}

impl Loadable for Customer {
    const ENTITY: &'static str = "customer";
    const TABLE: &'static str = "customers";

    fn identity(&self) -> Option<EntityId> {
        self.id()
    }

    fn fetch(conn: &Connection, id: EntityId) -> Result<Option<Self>> {
        let row: Option<CustomerRow> = conn
            .query_row(
                "SELECT id, name, email FROM customers WHERE id = ?1",
                [id],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()
            .map_err(from_rusqlite)?;

        row.map(customer_from_row).transpose()
    }

    fn fetch_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn
            .prepare("SELECT id, name, email FROM customers ORDER BY id")
            .map_err(from_rusqlite)?;

        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<CustomerRow>, _>>()
            .map_err(from_rusqlite)?;

        rows.into_iter().map(customer_from_row).collect()
    }
}

impl Persistable for Customer {
    fn insert(&mut self, conn: &Connection) -> Result<EntityId> {
        conn.execute(
            "INSERT INTO customers (name, email) VALUES (?1, ?2)",
            rusqlite::params![self.name(), self.email()],
        )
        .map_err(from_rusqlite)?;

        let id = conn.last_insert_rowid();
        self.assign_id(id)?;
        Ok(id)
    }

    fn update(&mut self, conn: &Connection) -> Result<()> {
        let id = self.require_id()?;
        let changed = conn
            .execute(
                "UPDATE customers SET name = ?1, email = ?2 WHERE id = ?3",
                rusqlite::params![self.name(), self.email(), id],
            )
            .map_err(from_rusqlite)?;

        if changed == 0 {
            return Err(row_missing(Self::ENTITY, id));
        }
        Ok(())
    }
}
