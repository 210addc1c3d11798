use std::future::{ready, Ready};

use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
use tracing::warn;

use crate::error::AuthError;
use crate::{AppError, AppState};

/// Username taken from a valid `Authorization: Bearer <token>` header.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub username: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, AppError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::InternalError("Application state not configured".into()))?;

    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or(AuthError::MissingToken)?;

    match state.auth_service.tokens().verify(token) {
        Ok(username) => Ok(AuthenticatedUser { username }),
        Err(e) => {
            warn!("Rejected bearer token: {}", e);
            Err(e)
        }
    }
}
