use actix_web::{web, HttpResponse, ResponseError};
use serde::{de, Deserialize, Deserializer, Serialize};
use tracing::{error, info, warn};

use crate::auth::AuthenticatedUser;
use crate::db::models::User;
use crate::error::AuthError;
use crate::otp::generate_otp;
use crate::{notify, AppState, Result};

#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LogInRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateOtpRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    #[serde(deserialize_with = "deserialize_otp")]
    pub otp: u32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OtpInput {
    Number(u32),
    Text(String),
}

/// Accepts the code either as a JSON number or as a numeric string.
fn deserialize_otp<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match OtpInput::deserialize(deserializer)? {
        OtpInput::Number(code) => Ok(code),
        OtpInput::Text(code) => code
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("otp is not a number: {:?}", code))),
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Serialize)]
pub struct OtpResponse {
    pub otp: u32,
}

pub async fn sign_up(
    req: web::Json<SignUpRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    info!("Received sign-up request for username: {}", req.username);
    match state.auth_service.sign_up(&req.username, &req.password).await {
        Ok(user) => {
            info!("Sign-up successful for username: {}", user.username);
            Ok(HttpResponse::Created().json(UserResponse::from(user)))
        }
        Err(e) if e.status_code().is_client_error() => {
            warn!("Sign-up rejected for username: {}: {}", req.username, e);
            Err(e)
        }
        Err(e) => {
            error!("Sign-up failed for username: {}: {}", req.username, e);
            Err(e)
        }
    }
}

pub async fn log_in(
    req: web::Json<LogInRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    info!("Received log-in request for username: {}", req.username);
    match state.auth_service.log_in(&req.username, &req.password).await {
        Ok(access_token) => {
            info!("Log-in successful for username: {}", req.username);
            Ok(HttpResponse::Ok().json(TokenResponse { access_token }))
        }
        Err(e) => {
            warn!("Log-in failed for username: {}: {}", req.username, e);
            Err(e)
        }
    }
}

pub async fn create_otp(
    user: AuthenticatedUser,
    req: web::Json<CreateOtpRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let otp = generate_otp();
    let ttl = chrono::Duration::seconds(state.config.otp.ttl_seconds);
    state.codes.put(&req.email, otp, ttl).await;

    info!("Issued OTP for {} on behalf of {}", req.email, user.username);
    Ok(HttpResponse::Ok().json(OtpResponse { otp }))
}

pub async fn verify_otp(
    user: AuthenticatedUser,
    req: web::Json<VerifyOtpRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    if !state.codes.consume(&req.email, req.otp).await {
        warn!("OTP verification failed for {}", req.email);
        return Err(AuthError::InvalidOtp.into());
    }

    let account = state.auth_service.current_user(&user.username).await?;

    notify::dispatch(state.notifier.clone(), req.email.clone());

    info!("Verified {} for {}", req.email, account.username);
    Ok(HttpResponse::Ok().json(UserResponse::from(account)))
}
