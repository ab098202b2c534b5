use crate::repository::Record;
use common::model::article::Article;
use rusqlite::{params, Connection, Row};

impl Record for Article {
    const NAME: &'static str = "article";
    const TABLE: &'static str = "rest_api_article";
    const COLUMNS: &'static str = "id, title, author, email, date";

    fn id(&self) -> i64 {
        self.id
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Article {
            id: row.get(0)?,
            title: row.get(1)?,
            author: row.get(2)?,
            email: row.get(3)?,
            date: row.get(4)?,
        })
    }

    fn insert(&self, conn: &Connection) -> rusqlite::Result<i64> {
        conn.execute(
            "INSERT INTO rest_api_article (title, author, email, date) VALUES (?1, ?2, ?3, ?4)",
            params![self.title, self.author, self.email, self.date],
        )?;
        Ok(conn.last_insert_rowid())
    }

    // `date` is set once on insert and never written again.
    fn update(&self, conn: &Connection) -> rusqlite::Result<usize> {
        conn.execute(
            "UPDATE rest_api_article SET title = ?1, author = ?2, email = ?3 WHERE id = ?4",
            params![self.title, self.author, self.email, self.id],
        )
    }
}
