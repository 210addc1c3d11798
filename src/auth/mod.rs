//! Authentication module for the todo service
//!
//! This module handles password hashing, bearer token issue and checks,
//! and the sign-up, log-in and email OTP endpoints.

pub mod handlers;
pub mod password;
mod extractor;
mod service;
mod token;

pub use extractor::AuthenticatedUser;
pub use service::AuthService;
pub use token::{Claims, TokenIssuer};

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("/sign-up", web::post().to(handlers::sign_up))
            .route("/log-in", web::post().to(handlers::log_in))
            .route("/email/otp", web::post().to(handlers::create_otp))
            .route("/email/otp/verify", web::post().to(handlers::verify_otp)),
    );
}
