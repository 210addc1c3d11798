//! Database module for the todo service
//!
//! This module holds the table models, the repository traits the handlers
//! depend on, and their PostgreSQL implementations.

pub mod models;
pub mod operations;
pub mod repository;

pub use models::{NewTodo, NewUser, Todo, User};
pub use operations::{PgTodoRepository, PgUserRepository};
pub use repository::{TodoRepository, UserRepository};
