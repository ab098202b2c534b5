use crate::repository::Record;
use common::model::item::Item;
use rusqlite::{params, Connection, Row};

impl Record for Item {
    const NAME: &'static str = "item";
    const TABLE: &'static str = "items_item";
    const COLUMNS: &'static str = "id, name, description";

    fn id(&self) -> i64 {
        self.id
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Item {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
        })
    }

    fn insert(&self, conn: &Connection) -> rusqlite::Result<i64> {
        conn.execute(
            "INSERT INTO items_item (name, description) VALUES (?1, ?2)",
            params![self.name, self.description],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn update(&self, conn: &Connection) -> rusqlite::Result<usize> {
        conn.execute(
            "UPDATE items_item SET name = ?1, description = ?2 WHERE id = ?3",
            params![self.name, self.description, self.id],
        )
    }
}
