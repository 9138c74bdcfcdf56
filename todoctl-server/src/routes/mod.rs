//! Route handlers for the todoctl API
//!
//! Organized by resource type:
//! - todos: Todo item CRUD
//! - health: Health check endpoint

pub mod health;
pub mod todos;

pub use health::*;
pub use todos::*;
