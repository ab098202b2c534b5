use crate::repository::Record;
use common::model::task::Task;
use rusqlite::{params, Connection, Row};

impl Record for Task {
    const NAME: &'static str = "task";
    const TABLE: &'static str = "task_management_app_task";
    const COLUMNS: &'static str = "id, title, description, completed, created_at";

    fn id(&self) -> i64 {
        self.id
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Task {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            completed: row.get(3)?,
            created_at: row.get(4)?,
        })
    }

    fn insert(&self, conn: &Connection) -> rusqlite::Result<i64> {
        conn.execute(
            "INSERT INTO task_management_app_task (title, description, completed, created_at) \
             VALUES (?1, ?2, ?3, ?4)",
            params![self.title, self.description, self.completed, self.created_at],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn update(&self, conn: &Connection) -> rusqlite::Result<usize> {
        conn.execute(
            "UPDATE task_management_app_task SET title = ?1, description = ?2, completed = ?3 \
             WHERE id = ?4",
            params![self.title, self.description, self.completed, self.id],
        )
    }
}
