use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

use crate::db::models::{NewTodo, NewUser, Todo, User};
use crate::db::repository::{TodoRepository, UserRepository};
use crate::Result;

pub async fn connect(url: &str, max_connections: u32, acquire_timeout: Duration) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(url)
        .await?;

    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

#[derive(Clone)]
pub struct PgTodoRepository {
    pool: Arc<PgPool>,
}

impl PgTodoRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PgTodoRepository {
    async fn get_todos(&self) -> Result<Vec<Todo>> {
        let mut conn = self.pool.acquire().await?;
        let todos = sqlx::query_as::<_, Todo>(
            "SELECT id, contents, is_done, user_id FROM todos ORDER BY id ASC",
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(todos)
    }

    async fn get_todo_by_todo_id(&self, todo_id: i32) -> Result<Option<Todo>> {
        let mut conn = self.pool.acquire().await?;
        let todo = sqlx::query_as::<_, Todo>(
            "SELECT id, contents, is_done, user_id FROM todos WHERE id = $1",
        )
        .bind(todo_id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(todo)
    }

    async fn create_todo(&self, todo: NewTodo) -> Result<Todo> {
        let mut conn = self.pool.acquire().await?;
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (contents, is_done)
            VALUES ($1, $2)
            RETURNING id, contents, is_done, user_id
            "#,
        )
        .bind(todo.contents)
        .bind(todo.is_done)
        .fetch_one(&mut *conn)
        .await?;

        Ok(todo)
    }

    async fn update_todo(&self, todo: Todo) -> Result<Todo> {
        let mut conn = self.pool.acquire().await?;
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            UPDATE todos SET is_done = $1
            WHERE id = $2
            RETURNING id, contents, is_done, user_id
            "#,
        )
        .bind(todo.is_done)
        .bind(todo.id)
        .fetch_one(&mut *conn)
        .await?;

        Ok(todo)
    }

    async fn delete_todo(&self, todo_id: i32) -> Result<()> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(todo_id)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }
}

#[derive(Clone)]
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn save_user(&self, user: NewUser) -> Result<User> {
        let mut conn = self.pool.acquire().await?;
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password)
            VALUES ($1, $2)
            RETURNING id, username, password
            "#,
        )
        .bind(user.username)
        .bind(user.hashed_password)
        .fetch_one(&mut *conn)
        .await?;

        Ok(user)
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let mut conn = self.pool.acquire().await?;
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(user)
    }
}
