//! Item Repository
//!
//! SQLite-backed implementation for Item CRUD operations.

use async_trait::async_trait;
use rusqlite::{params, ErrorCode, OptionalExtension, Row};

use crate::domain::{Item, DomainError, DomainResult};
use super::db::DbConn;
use super::traits::Repository;

const SELECT_ITEMS: &str = "SELECT id, label, checked FROM items";

/// SQLite implementation of Item repository
#[derive(Clone)]
pub struct ItemRepository {
    conn: DbConn,
}

impl ItemRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }
}

fn row_to_item(row: &Row) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        label: row.get(1)?,
        checked: row.get::<_, i64>(2)? != 0,
    })
}

fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _) if err.code == ErrorCode::ConstraintViolation
    )
}

#[async_trait]
impl Repository<Item> for ItemRepository {
    async fn create(&self, entity: &Item) -> DomainResult<Item> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO items (id, label, checked) VALUES (?1, ?2, ?3)",
            params![entity.id, entity.label, entity.checked as i64],
        )
        .map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::Conflict(format!("item {} already exists", entity.id))
            } else {
                DomainError::from(e)
            }
        })?;
        Ok(entity.clone())
    }

    async fn find_by_id(&self, id: &String) -> DomainResult<Option<Item>> {
        let conn = self.conn.lock().await;
        let item = conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_ITEMS), params![id], row_to_item)
            .optional()?;
        Ok(item)
    }

    async fn list(&self) -> DomainResult<Vec<Item>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(&format!("{} ORDER BY seq ASC", SELECT_ITEMS))?;
        let items = stmt
            .query_map([], row_to_item)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(items)
    }

    async fn update(&self, entity: &Item) -> DomainResult<Item> {
        let conn = self.conn.lock().await;
        let changed = conn.execute(
            "UPDATE items SET label = ?1, checked = ?2 WHERE id = ?3",
            params![entity.label, entity.checked as i64, entity.id],
        )?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("item {}", entity.id)));
        }
        Ok(entity.clone())
    }

    async fn delete(&self, id: &String) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        let changed = conn.execute("DELETE FROM items WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("item {}", id)));
        }
        Ok(())
    }
}
