//! todoctl-server: HTTP CRUD service for todo items
//!
//! Exposes a single `todos` resource over HTTP, backed by a local
//! SQLite file, with permissive CORS for browser frontends.

pub mod db;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;
pub mod server;

pub use db::Database;
pub use error::{ServerError, ServerResult};
pub use server::{create_router, run_server, ServerConfig};
