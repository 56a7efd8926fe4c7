//! Repository layer for item storage.
//!
//! All item CRUD goes through `Repository`. Connections are scoped per query
//! by the pool and released on drop, including error paths.

use crate::domain::{Item, ItemDraft};
use sqlx::sqlite::SqlitePool;
use sqlx::Row;
use thiserror::Error;

/// Errors surfaced by the store layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("name must not be empty")]
    EmptyName,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Repository for item storage.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// Fetch every stored item in insertion order.
    ///
    /// Returns an empty vec, never an error, when no items exist.
    pub async fn list_items(&self) -> Result<Vec<Item>, sqlx::Error> {
        let rows = sqlx::query("SELECT id, name, description FROM items ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(item_from_row).collect())
    }

    /// Insert a new item and return its assigned id.
    ///
    /// The handlers validate the name before calling this; the schema declares
    /// `name` NOT NULL, so an empty name is also rejected here.
    pub async fn insert_item(&self, draft: &ItemDraft) -> Result<i64, StoreError> {
        if draft.name.trim().is_empty() {
            return Err(StoreError::EmptyName);
        }

        let result = sqlx::query("INSERT INTO items (name, description) VALUES (?, ?)")
            .bind(&draft.name)
            .bind(&draft.description)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// Fetch a single item by id. Returns `None` when no such id exists.
    pub async fn get_item(&self, id: i64) -> Result<Option<Item>, sqlx::Error> {
        let row = sqlx::query("SELECT id, name, description FROM items WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(item_from_row))
    }

    /// Overwrite name and description for the item with the given id.
    ///
    /// Silently a no-op when the id does not exist; existence is not checked
    /// first.
    pub async fn update_item(&self, id: i64, draft: &ItemDraft) -> Result<(), StoreError> {
        if draft.name.trim().is_empty() {
            return Err(StoreError::EmptyName);
        }

        sqlx::query("UPDATE items SET name = ?, description = ? WHERE id = ?")
            .bind(&draft.name)
            .bind(&draft.description)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Remove the item with the given id. Idempotent; a missing id is a no-op.
    pub async fn delete_item(&self, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn item_from_row(row: &sqlx::sqlite::SqliteRow) -> Item {
    let description: Option<String> = row.get("description");
    Item {
        id: row.get("id"),
        name: row.get("name"),
        description: description.unwrap_or_default(),
    }
}
