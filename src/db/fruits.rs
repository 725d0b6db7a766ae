use log::{debug, info};
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::error::{PersistenceContext, StoreError, StoreResult};
use crate::models::{Fruit, FruitId};

/// Byte-wise name order with the id as tie-break. `BINARY` keeps the
/// comparison independent of the host locale.
const ORDER_BY_NAME: &str = "ORDER BY name COLLATE BINARY ASC, id ASC";

fn fruit_from_row(row: &Row<'_>) -> rusqlite::Result<Fruit> {
    Ok(Fruit {
        id: FruitId(row.get(0)?),
        name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
    })
}

/// Retrieve every fruit sorted by name. This query is the single source of
/// truth for the order shown on screen.
pub fn fetch_fruits(conn: &Connection) -> StoreResult<Vec<Fruit>> {
    let sql = format!("SELECT id, name FROM fruits {ORDER_BY_NAME}");
    let mut stmt = conn
        .prepare(&sql)
        .persist_context("prepare fruit query")?;

    let fruits = stmt
        .query_map([], fruit_from_row)
        .persist_context("load fruits")?
        .collect::<Result<Vec<_>, _>>()
        .persist_context("collect fruits")?;

    debug!("event=fruits_fetch count={}", fruits.len());
    Ok(fruits)
}

/// Look up one fruit by id.
pub fn fetch_fruit(conn: &Connection, id: FruitId) -> StoreResult<Fruit> {
    conn.query_row(
        "SELECT id, name FROM fruits WHERE id = ?1",
        params![id.0],
        fruit_from_row,
    )
    .optional()
    .persist_context("load fruit")?
    .ok_or(StoreError::NotFound(id))
}

pub fn count_fruits(conn: &Connection) -> StoreResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM fruits", [], |row| row.get(0))
        .persist_context("count fruits")?;
    Ok(usize::try_from(count).unwrap_or_default())
}

/// Insert a new fruit exactly as typed (empty and duplicate names included)
/// and echo the hydrated struct with its fresh id.
pub fn create_fruit(conn: &Connection, name: &str) -> StoreResult<Fruit> {
    conn.execute("INSERT INTO fruits (name) VALUES (?1)", params![name])
        .persist_context("insert fruit")?;

    let id = FruitId(conn.last_insert_rowid());
    info!("event=fruit_create id={id}");
    Ok(Fruit {
        id,
        name: name.to_string(),
    })
}

/// Replace the name of an existing fruit. Zero touched rows means the id is
/// gone, which is reported instead of silently continuing.
pub fn update_fruit(conn: &Connection, id: FruitId, name: &str) -> StoreResult<()> {
    let updated = conn
        .execute(
            "UPDATE fruits SET name = ?1 WHERE id = ?2",
            params![name, id.0],
        )
        .persist_context("update fruit")?;

    if updated == 0 {
        Err(StoreError::NotFound(id))
    } else {
        info!("event=fruit_update id={id}");
        Ok(())
    }
}

pub fn delete_fruit(conn: &Connection, id: FruitId) -> StoreResult<()> {
    let deleted = conn
        .execute("DELETE FROM fruits WHERE id = ?1", params![id.0])
        .persist_context("delete fruit")?;

    if deleted == 0 {
        Err(StoreError::NotFound(id))
    } else {
        info!("event=fruit_delete id={id}");
        Ok(())
    }
}
