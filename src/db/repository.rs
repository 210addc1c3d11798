use async_trait::async_trait;

use crate::db::models::{NewTodo, NewUser, Todo, User};
use crate::Result;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// All todos in ascending id order.
    async fn get_todos(&self) -> Result<Vec<Todo>>;

    async fn get_todo_by_todo_id(&self, todo_id: i32) -> Result<Option<Todo>>;

    async fn create_todo(&self, todo: NewTodo) -> Result<Todo>;

    /// Persists the completion flag of an existing todo.
    async fn update_todo(&self, todo: Todo) -> Result<Todo>;

    async fn delete_todo(&self, todo_id: i32) -> Result<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn save_user(&self, user: NewUser) -> Result<User>;

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
}
