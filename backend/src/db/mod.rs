//! Shared SQLite connection.
//!
//! `Db` is created once in `main.rs` and handed to every worker as
//! `web::Data<Db>`. Queries are synchronous `rusqlite` calls, so `Db::run`
//! moves them onto Tokio's blocking pool to keep the async workers free.

mod schema;

#[cfg(test)]
pub(crate) use schema::SCHEMA;

use crate::error::ApiError;
use log::info;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Db {
    conn: Arc<Mutex<Connection>>,
}

impl Db {
    /// Opens (or creates) the database file and makes sure every table exists.
    pub fn open(path: impl AsRef<Path>) -> rusqlite::Result<Self> {
        let path = path.as_ref();
        info!("Opening database {}", path.display());
        Self::init(Connection::open(path)?)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> rusqlite::Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> rusqlite::Result<Self> {
        conn.execute_batch(schema::SCHEMA)?;
        Ok(Db {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Runs `f` with exclusive access to the connection, off the async runtime.
    pub async fn run<F, T>(&self, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&Connection) -> Result<T, ApiError> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn.lock().map_err(|_| ApiError::ConnectionPoisoned)?;
            f(&guard)
        })
        .await?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn schema_creates_every_table() {
        let db = Db::open_in_memory().unwrap();
        let tables: Vec<String> = db
            .run(|conn| {
                let mut stmt = conn.prepare(
                    "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
                )?;
                let names = stmt
                    .query_map([], |row| row.get(0))?
                    .collect::<Result<Vec<String>, _>>()?;
                Ok(names)
            })
            .await
            .unwrap();

        assert_eq!(
            tables,
            vec![
                "blog_post",
                "items_item",
                "rest_api_article",
                "task_management_app_task"
            ]
        );
    }

    #[actix_web::test]
    async fn schema_can_be_applied_twice() {
        let db = Db::open_in_memory().unwrap();
        db.run(|conn| Ok(conn.execute_batch(schema::SCHEMA)?))
            .await
            .unwrap();
    }
}
