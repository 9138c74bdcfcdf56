//! SQLite database layer for the todoctl API
//!
//! Uses rusqlite with automatic schema migrations on startup.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::{ServerError, ServerResult};
use crate::models::{CreateTodoRequest, DeleteConfirmation, TodoItem};

/// Thread-safe database wrapper
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Open or create the database at the given path
    pub fn open(path: impl Into<PathBuf>) -> ServerResult<Self> {
        let path = path.into();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&path)?;

        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };

        db.run_migrations()?;
        Ok(db)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> ServerResult<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.run_migrations()?;
        Ok(db)
    }

    /// Run schema migrations
    fn run_migrations(&self) -> ServerResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(SCHEMA)?;
        tracing::debug!("todos schema ensured");
        Ok(())
    }

    // ========================================================================
    // Todos
    // ========================================================================

    pub fn list_todos(&self) -> ServerResult<Vec<TodoItem>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            r#"
            SELECT id, title, status, created_at, updated_at, deleted_at
            FROM todos
            WHERE deleted_at IS NULL
            ORDER BY id ASC
            "#,
        )?;

        let todos = stmt
            .query_map([], row_to_todo)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(todos)
    }

    pub fn create_todo(&self, req: &CreateTodoRequest) -> ServerResult<TodoItem> {
        let now = Utc::now();

        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO todos (title, status, created_at, updated_at) VALUES (?, ?, ?, ?)",
            params![
                req.title,
                req.status,
                format_datetime(now),
                format_datetime(now)
            ],
        )?;

        let id = conn.last_insert_rowid();

        Ok(TodoItem {
            id,
            title: req.title.clone(),
            status: req.status,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        })
    }

    /// Flip the completion status of a todo item
    pub fn toggle_todo(&self, id: i64) -> ServerResult<TodoItem> {
        let now = Utc::now();

        let conn = self.conn.lock().unwrap();
        let todo = conn
            .query_row(
                r#"
                SELECT id, title, status, created_at, updated_at, deleted_at
                FROM todos
                WHERE id = ? AND deleted_at IS NULL
                "#,
                [id],
                row_to_todo,
            )
            .optional()?
            .ok_or_else(|| ServerError::NotFound("todo not found".to_string()))?;

        let status = !todo.status;
        conn.execute(
            "UPDATE todos SET status = ?, updated_at = ? WHERE id = ?",
            params![status, format_datetime(now), id],
        )?;

        Ok(TodoItem {
            status,
            updated_at: now,
            ..todo
        })
    }

    /// Remove a todo item outright, bypassing the soft-delete column
    pub fn delete_todo(&self, id: i64) -> ServerResult<DeleteConfirmation> {
        let conn = self.conn.lock().unwrap();

        // Verify the todo exists
        let exists: bool = conn
            .query_row(
                "SELECT 1 FROM todos WHERE id = ? AND deleted_at IS NULL",
                [id],
                |_| Ok(true),
            )
            .optional()?
            .unwrap_or(false);

        if !exists {
            return Err(ServerError::NotFound(format!("todo not found, id={id}")));
        }

        conn.execute("DELETE FROM todos WHERE id = ?", [id])?;

        Ok(DeleteConfirmation {
            id,
            message: format!("todo {id} permanently deleted"),
        })
    }
}

// ============================================================================
// Schema
// ============================================================================

const SCHEMA: &str = r#"
-- Todo items table
-- deleted_at is reserved for soft deletes; the delete endpoint removes rows outright
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    status INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    deleted_at TEXT
);
"#;

// ============================================================================
// Helpers
// ============================================================================

fn row_to_todo(row: &Row<'_>) -> rusqlite::Result<TodoItem> {
    Ok(TodoItem {
        id: row.get(0)?,
        title: row.get(1)?,
        status: row.get(2)?,
        created_at: parse_datetime(row.get::<_, String>(3)?),
        updated_at: parse_datetime(row.get::<_, String>(4)?),
        deleted_at: row.get::<_, Option<String>>(5)?.map(parse_datetime),
    })
}

fn parse_datetime(s: String) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339()
}
