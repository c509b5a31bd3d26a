//! SQLite-backed key-value store (lightweight for CLI usage).
//! Plays the role the browser's local storage had for the original habit
//! tracker: a handful of JSON documents under fixed keys.

use rusqlite::{Connection, OptionalExtension, Result};
use std::path::Path;

pub struct LocalStore {
    pub conn: Connection,
}

impl LocalStore {
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        ensure_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
    }

    pub fn put(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;
        Ok(())
    }

    pub fn vacuum(&self) -> Result<()> {
        self.conn.execute_batch("VACUUM;")?;
        Ok(())
    }
}

fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
