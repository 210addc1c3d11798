use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::db::models::{NewTodo, Todo};
use crate::{AppError, AppState, Result};

pub const MAX_CONTENTS_LEN: usize = 256;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Deserialize)]
pub struct ListTodosQuery {
    #[serde(default)]
    pub order: SortOrder,
}

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub contents: String,
    pub is_done: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub is_done: bool,
}

#[derive(Debug, Serialize)]
pub struct TodoListResponse {
    pub todos: Vec<Todo>,
}

async fn find_todo(state: &AppState, todo_id: i32) -> Result<Todo> {
    state
        .todos
        .get_todo_by_todo_id(todo_id)
        .await?
        .ok_or(AppError::NotFound("Todo"))
}

pub async fn list_todos(
    query: web::Query<ListTodosQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let mut todos = state.todos.get_todos().await?;
    if query.order == SortOrder::Desc {
        todos.reverse();
    }

    Ok(HttpResponse::Ok().json(TodoListResponse { todos }))
}

pub async fn get_todo(
    todo_id: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let todo = find_todo(&state, todo_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(todo))
}

pub async fn create_todo(
    req: web::Json<CreateTodoRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let req = req.into_inner();
    if req.contents.chars().count() > MAX_CONTENTS_LEN {
        return Err(AppError::ValidationError(format!(
            "contents must be at most {} characters",
            MAX_CONTENTS_LEN
        )));
    }

    let todo = state
        .todos
        .create_todo(NewTodo {
            contents: req.contents,
            is_done: req.is_done,
        })
        .await?;

    info!("Created todo {}", todo.id);
    Ok(HttpResponse::Created().json(todo))
}

pub async fn update_todo(
    todo_id: web::Path<i32>,
    req: web::Json<UpdateTodoRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let mut todo = find_todo(&state, todo_id.into_inner()).await?;
    if req.is_done {
        todo.done();
    } else {
        todo.undone();
    }

    let todo = state.todos.update_todo(todo).await?;
    info!("Marked todo {} is_done={}", todo.id, todo.is_done);
    Ok(HttpResponse::Ok().json(todo))
}

pub async fn delete_todo(
    todo_id: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let todo = find_todo(&state, todo_id.into_inner()).await?;
    state.todos.delete_todo(todo.id).await?;

    info!("Deleted todo {}", todo.id);
    Ok(HttpResponse::NoContent().finish())
}
