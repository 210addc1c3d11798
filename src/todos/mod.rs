//! Todo CRUD endpoints

pub mod handlers;

use actix_web::web;

use crate::AppError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/todos")
            .route(web::get().to(handlers::list_todos))
            .route(web::post().to(handlers::create_todo)),
    )
    .service(
        web::resource("/todos/{todo_id}")
            // An id that is not a valid i32 cannot name a stored todo
            .app_data(
                web::PathConfig::default()
                    .error_handler(|_, _| AppError::NotFound("Todo").into()),
            )
            .route(web::get().to(handlers::get_todo))
            .route(web::patch().to(handlers::update_todo))
            .route(web::delete().to(handlers::delete_todo)),
    );
}
