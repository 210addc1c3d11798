use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: i32,
    pub contents: String,
    pub is_done: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user_id: Option<i32>,
}

impl Todo {
    pub fn done(&mut self) -> &mut Self {
        self.is_done = true;
        self
    }

    pub fn undone(&mut self) -> &mut Self {
        self.is_done = false;
        self
    }
}

/// A todo that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewTodo {
    pub contents: String,
    pub is_done: bool,
}

/// Stored account. `password` holds the argon2 hash, never the plaintext.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub hashed_password: String,
}
