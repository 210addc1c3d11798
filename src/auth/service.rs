use std::sync::Arc;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::token::TokenIssuer;
use crate::db::models::{NewUser, User};
use crate::db::repository::UserRepository;
use crate::error::AuthError;
use crate::{AppError, Result};

pub struct AuthService {
    users: Arc<dyn UserRepository>,
    tokens: TokenIssuer,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, tokens: TokenIssuer) -> Self {
        Self { users, tokens }
    }

    pub fn tokens(&self) -> &TokenIssuer {
        &self.tokens
    }

    pub async fn sign_up(&self, username: &str, password: &str) -> Result<User> {
        let hashed_password = hash_password(password)?;
        self.users
            .save_user(NewUser {
                username: username.to_string(),
                hashed_password,
            })
            .await
    }

    /// Checks the credentials and returns a fresh access token.
    pub async fn log_in(&self, username: &str, password: &str) -> Result<String> {
        let user = self
            .users
            .get_user_by_username(username)
            .await?
            .ok_or(AppError::NotFound("User"))?;

        if !verify_password(password, &user.password) {
            return Err(AuthError::InvalidCredentials.into());
        }

        self.tokens.issue(&user.username)
    }

    /// Resolves the account named by a verified token's subject.
    pub async fn current_user(&self, username: &str) -> Result<User> {
        self.users
            .get_user_by_username(username)
            .await?
            .ok_or(AppError::NotFound("User"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::MockUserRepository;
    use chrono::Duration;

    fn service(users: MockUserRepository) -> AuthService {
        AuthService::new(
            Arc::new(users),
            TokenIssuer::new("test_secret", Duration::hours(24)),
        )
    }

    #[tokio::test]
    async fn test_sign_up_stores_hash_not_plaintext() {
        let mut users = MockUserRepository::new();
        users
            .expect_save_user()
            .withf(|user| user.username == "alice" && user.hashed_password != "password123")
            .times(1)
            .returning(|user| {
                Ok(User {
                    id: 1,
                    username: user.username,
                    password: user.hashed_password,
                })
            });

        let user = service(users).sign_up("alice", "password123").await.unwrap();
        assert_eq!(user.username, "alice");
        assert!(verify_password("password123", &user.password));
    }

    #[tokio::test]
    async fn test_log_in_issues_token_for_username() {
        let hash = hash_password("password123").unwrap();
        let mut users = MockUserRepository::new();
        users
            .expect_get_user_by_username()
            .withf(|username| username == "alice")
            .returning(move |_| {
                Ok(Some(User {
                    id: 1,
                    username: "alice".to_string(),
                    password: hash.clone(),
                }))
            });

        let service = service(users);
        let token = service.log_in("alice", "password123").await.unwrap();
        assert_eq!(service.tokens().verify(&token).unwrap(), "alice");

        let err = service.log_in("alice", "wrong").await.unwrap_err();
        assert!(matches!(err, AppError::AuthError(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_log_in_unknown_user() {
        let mut users = MockUserRepository::new();
        users.expect_get_user_by_username().returning(|_| Ok(None));

        let err = service(users).log_in("ghost", "password123").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound("User")));
    }
}
