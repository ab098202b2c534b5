//! # Repository
//!
//! Maps records to their SQLite tables. Each record type implements
//! [`Record`] (table, columns, row mapping, insert and update statements);
//! the generic functions below cover everything else.

mod articles;
mod items;
mod posts;
mod tasks;

use common::model::Resource;
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::Serialize;

/// A record stored in its own table with an integer `id` primary key.
pub trait Record: Resource + Serialize + Send + 'static {
    /// Singular name used in log lines, e.g. `article`.
    const NAME: &'static str;
    const TABLE: &'static str;
    /// Comma separated column list, in `from_row` order, `id` first.
    const COLUMNS: &'static str;

    fn id(&self) -> i64;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;

    /// Inserts every column but `id` and returns the new row id.
    fn insert(&self, conn: &Connection) -> rusqlite::Result<i64>;

    /// Writes the writable columns back to the row with this record's id.
    fn update(&self, conn: &Connection) -> rusqlite::Result<usize>;
}

/// All rows, ordered by id.
pub fn all<R: Record>(conn: &Connection) -> rusqlite::Result<Vec<R>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM {} ORDER BY id",
        R::COLUMNS,
        R::TABLE
    ))?;
    let rows = stmt.query_map([], |row| R::from_row(row))?;
    rows.collect()
}

pub fn find<R: Record>(conn: &Connection, id: i64) -> rusqlite::Result<Option<R>> {
    conn.query_row(
        &format!("SELECT {} FROM {} WHERE id = ?1", R::COLUMNS, R::TABLE),
        params![id],
        |row| R::from_row(row),
    )
    .optional()
}

/// Stores a new record and returns it as read back from the table.
pub fn create<R: Record>(conn: &Connection, record: &R) -> rusqlite::Result<R> {
    let id = record.insert(conn)?;
    find(conn, id)?.ok_or(rusqlite::Error::QueryReturnedNoRows)
}

/// Returns `false` when no row had this id.
pub fn save<R: Record>(conn: &Connection, record: &R) -> rusqlite::Result<bool> {
    Ok(record.update(conn)? > 0)
}

/// Returns `false` when no row had this id.
pub fn delete<R: Record>(conn: &Connection, id: i64) -> rusqlite::Result<bool> {
    let deleted = conn.execute(
        &format!("DELETE FROM {} WHERE id = ?1", R::TABLE),
        params![id],
    )?;
    Ok(deleted > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::article::{Article, ArticlePayload};
    use common::model::item::{Item, ItemPayload};

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(crate::db::SCHEMA).unwrap();
        conn
    }

    fn article(title: &str) -> Article {
        Article::from_payload(ArticlePayload {
            title: Some(title.into()),
            author: Some("Ada".into()),
            email: Some("ada@example.com".into()),
        })
    }

    #[test]
    fn create_assigns_increasing_ids() {
        let conn = conn();
        let first = create(&conn, &article("one")).unwrap();
        let second = create(&conn, &article("two")).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.title, "two");
    }

    #[test]
    fn all_is_ordered_by_id() {
        let conn = conn();
        for title in ["b", "a", "c"] {
            create(&conn, &article(title)).unwrap();
        }
        let titles: Vec<String> = all::<Article>(&conn)
            .unwrap()
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(titles, vec!["b", "a", "c"]);
    }

    #[test]
    fn find_missing_row_is_none() {
        assert_eq!(find::<Article>(&conn(), 42).unwrap(), None);
    }

    #[test]
    fn save_and_delete_report_missing_rows() {
        let conn = conn();
        let mut item = create(
            &conn,
            &Item::from_payload(ItemPayload {
                name: Some("lamp".into()),
                description: None,
            }),
        )
        .unwrap();

        item.name = "desk lamp".into();
        assert!(save(&conn, &item).unwrap());
        assert_eq!(find::<Item>(&conn, item.id).unwrap().unwrap().name, "desk lamp");

        assert!(delete::<Item>(&conn, item.id).unwrap());
        assert!(!delete::<Item>(&conn, item.id).unwrap());
        assert!(!save(&conn, &item).unwrap());
    }
}
