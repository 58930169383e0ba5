//! Persistence gateway
//!
//! Owns the single SQLite connection of the process and exposes the generic
//! primitives every repository forwards to: save (insert or update), remove,
//! get by identity and list all. Each primitive runs in its own transaction
//! and commits before returning.

#![allow(clippy::result_large_err)]

mod customer;
mod hydration;
mod order;
mod order_line;
mod product;

use crate::db;
use crate::errors::{from_rusqlite, Result};
use crate::migrations::apply_migrations;
use rusqlite::Connection;
use shopline_core::errors::ShopError;
use shopline_core::EntityId;

/// An entity type the gateway can read back from rows
pub trait Loadable: Clone + Sized {
    /// Entity name used in errors and logs
    const ENTITY: &'static str;
    /// Backing table
    const TABLE: &'static str;

    /// Identity held by the entity, `None` while transient
    fn identity(&self) -> Option<EntityId>;

    /// Load one entity with its related rows
    fn fetch(conn: &Connection, id: EntityId) -> Result<Option<Self>>;

    /// Load every entity of this type in identity order
    fn fetch_all(conn: &Connection) -> Result<Vec<Self>>;
}

/// An entity type the gateway can also write and delete on its own
///
/// `insert` and `update` receive a working copy of the entity; the gateway
/// only hands identities back to the caller once the transaction commits.
/// Order lines are only `Loadable`: they are written through their order.
pub trait Persistable: Loadable {
    /// Write a transient entity, assigning the generated identities
    fn insert(&mut self, conn: &Connection) -> Result<EntityId>;

    /// Write changes of a persisted entity
    fn update(&mut self, conn: &Connection) -> Result<()>;

    /// Delete the rows owned by the entity
    fn delete(conn: &Connection, id: EntityId) -> Result<()> {
        conn.execute(
            &format!("DELETE FROM {} WHERE id = ?1", Self::TABLE),
            [id],
        )
        .map_err(from_rusqlite)?;
        Ok(())
    }
}

/// Handle on the store, created once at startup and passed down by reference
pub struct Gateway {
    conn: Connection,
}

impl Gateway {
    /// Open the database behind `url` and ensure the schema exists
    pub fn open(url: &str) -> Result<Self> {
        Self::from_connection(db::open_url(url)?)
    }

    /// Open a private in-memory database with the schema applied
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(db::open_in_memory()?)
    }

    /// Configure an existing connection and ensure the schema exists
    pub fn from_connection(mut conn: Connection) -> Result<Self> {
        db::configure(&conn)?;
        apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }

    /// Underlying connection, for diagnostics and tests
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Insert a transient entity or update a persisted one
    ///
    /// On success the entity carries its (possibly new) identities; on
    /// failure it is left exactly as it was.
    pub fn save<E: Persistable>(&self, entity: &mut E) -> Result<EntityId> {
        let mut staged = entity.clone();
        let tx = self.conn.unchecked_transaction().map_err(from_rusqlite)?;

        let id = match staged.identity() {
            Some(id) => {
                staged.update(&tx)?;
                id
            }
            None => staged.insert(&tx)?,
        };

        tx.commit().map_err(from_rusqlite)?;
        *entity = staged;

        tracing::debug!(entity = E::ENTITY, id, "saved");
        Ok(id)
    }

    /// Delete a persisted entity together with the rows it owns
    pub fn remove<E: Persistable>(&self, entity: &E) -> Result<()> {
        let id = entity
            .identity()
            .ok_or(ShopError::NotPersisted { entity: E::ENTITY })?;

        let tx = self.conn.unchecked_transaction().map_err(from_rusqlite)?;
        E::delete(&tx, id)?;
        tx.commit().map_err(from_rusqlite)?;

        tracing::debug!(entity = E::ENTITY, id, "removed");
        Ok(())
    }

    /// Fetch one entity; a missing row is `Ok(None)`
    pub fn get<E: Loadable>(&self, id: EntityId) -> Result<Option<E>> {
        E::fetch(&self.conn, id)
    }

    /// Fetch every entity of one type
    pub fn list<E: Loadable>(&self) -> Result<Vec<E>> {
        let all = E::fetch_all(&self.conn)?;
        tracing::debug!(entity = E::ENTITY, rows = all.len(), "listed");
        Ok(all)
    }

    /// Count the rows of one entity table
    pub fn count<E: Loadable>(&self) -> Result<i64> {
        self.conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", E::TABLE), [], |row| {
                row.get(0)
            })
            .map_err(from_rusqlite)
    }
}
