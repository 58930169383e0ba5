//! Row mapping for products

use super::{Loadable, Persistable};
use crate::errors::{from_rusqlite, row_missing, Result};
use rusqlite::{Connection, OptionalExtension};
use shopline_core::{EntityId, Product};

type ProductRow = (EntityId, String, f64);

pub(super) fn product_from_row((id, name, price): ProductRow) -> Result<Product> {
    let mut product = Product::new(name, price)?;
    product.assign_id(id)?;
    Ok(product)
}

impl Loadable for Product {
    const ENTITY: &'static str = "product";
    const TABLE: &'static str = "products";

    fn identity(&self) -> Option<EntityId> {
        self.id()
    }

    fn fetch(conn: &Connection, id: EntityId) -> Result<Option<Self>> {
        let row: Option<ProductRow> = conn
            .query_row(
                "SELECT id, name, price FROM products WHERE id = ?1",
                [id],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()
            .map_err(from_rusqlite)?;

        row.map(product_from_row).transpose()
    }

    fn fetch_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn
            .prepare("SELECT id, name, price FROM products ORDER BY id")
            .map_err(from_rusqlite)?;

        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<ProductRow>, _>>()
            .map_err(from_rusqlite)?;

        rows.into_iter().map(product_from_row).collect()
    }
}

impl Persistable for Product {
    fn insert(&mut self, conn: &Connection) -> Result<EntityId> {
        conn.execute(
            "INSERT INTO products (name, price) VALUES (?1, ?2)",
            rusqlite::params![self.name(), self.price()],
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
                "UPDATE products SET name = ?1, price = ?2 WHERE id = ?3",
                rusqlite::params![self.name(), self.price(), id],
            )
            .map_err(from_rusqlite)?;

        if changed == 0 {
            return Err(row_missing(Self::ENTITY, id));
        }
        Ok(())
    }
}
