use std::sync::Arc;

use auth::PasswordHasher;
use auth::TokenCodec;
use auth::TokenPair;
use async_trait::async_trait;
use chrono::Utc;

use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Authentication flows over the user store.
///
/// Orchestrates the password hasher, the token codec, and the injected store
/// handle. Holds no mutable state; the signing secret and TTLs are fixed
/// inside the codec at construction.
pub struct AuthService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
}

impl<R> AuthService<R>
where
    R: UserRepository,
{
    pub fn new(repository: Arc<R>, token_codec: TokenCodec) -> Self {
        Self {
            repository,
            password_hasher: PasswordHasher::new(),
            token_codec,
        }
    }
}

#[async_trait]
impl<R> AuthServicePort for AuthService<R>
where
    R: UserRepository,
{
    async fn register(&self, command: CreateUserCommand) -> Result<User, UserError> {
        // Best-effort duplicate check; the store's unique constraint closes
        // the remaining race window.
        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(UserError::EmailAlreadyExists);
        }

        let password_hash = self.password_hasher.hash(&command.password)?;

        self.repository
            .create(&command.username, &command.email, &password_hash)
            .await
    }

    async fn login(&self, email: &str, password: &str) -> Result<TokenPair, UserError> {
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(UserError::NotFound)?;

        let password_matches = self
            .password_hasher
            .verify(password, &user.password_hash)
            .map_err(|e| {
                // A hash we wrote ourselves should always parse; an
                // unreadable one means corrupted store data.
                tracing::error!(user_id = %user.id, error = %e, "Stored password hash is unreadable");
                UserError::Password(e)
            })?;

        if !password_matches {
            return Err(UserError::InvalidCredentials);
        }

        Ok(self.token_codec.issue_pair(user.id.0, Utc::now())?)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, UserError> {
        let claims = self.token_codec.decode(refresh_token)?;

        // Full rotation: both tokens are re-issued for the decoded subject.
        Ok(self.token_codec.issue_pair(claims.sub, Utc::now())?)
    }

    async fn status(&self, access_token: &str) -> Result<User, UserError> {
        let claims = self.token_codec.decode(access_token)?;

        // Tokens outlive their subject: the account may have been deleted
        // after issuance.
        self.repository
            .find_by_id(UserId(claims.sub))
            .await?
            .ok_or(UserError::NotFound)
    }
}
