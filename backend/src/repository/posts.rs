use crate::repository::Record;
use common::model::post::Post;
use rusqlite::{params, Connection, Row};

impl Record for Post {
    const NAME: &'static str = "post";
    const TABLE: &'static str = "blog_post";
    const COLUMNS: &'static str = "id, title, content, author, created_at";

    fn id(&self) -> i64 {
        self.id
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Post {
            id: row.get(0)?,
            title: row.get(1)?,
            content: row.get(2)?,
            author: row.get(3)?,
            created_at: row.get(4)?,
        })
    }

    fn insert(&self, conn: &Connection) -> rusqlite::Result<i64> {
        conn.execute(
            "INSERT INTO blog_post (title, content, author, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![self.title, self.content, self.author, self.created_at],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn update(&self, conn: &Connection) -> rusqlite::Result<usize> {
        conn.execute(
            "UPDATE blog_post SET title = ?1, content = ?2, author = ?3 WHERE id = ?4",
            params![self.title, self.content, self.author, self.id],
        )
    }
}
