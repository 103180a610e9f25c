use async_trait::async_trait;
use auth::TokenPair;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::User;

/// Port for the authentication flows.
///
/// Every flow takes and returns plain domain data; mapping errors to status
/// signaling belongs to whatever transport sits above.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Store operation failed
    async fn register(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// Verify credentials and issue an access/refresh token pair.
    ///
    /// # Errors
    /// * `NotFound` - No account with this email
    /// * `InvalidCredentials` - Password does not match
    /// * `DatabaseError` - Store operation failed
    async fn login(&self, email: &str, password: &str) -> Result<TokenPair, UserError>;

    /// Exchange a refresh token for a brand-new token pair (full rotation).
    ///
    /// The old refresh token is not invalidated server-side; it simply runs
    /// out its expiry.
    ///
    /// # Errors
    /// * `InvalidToken` - Bad signature or malformed token
    /// * `ExpiredToken` - Token expiry has passed
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, UserError>;

    /// Resolve an access token to the user it asserts identity for.
    ///
    /// # Errors
    /// * `InvalidToken` - Bad signature or malformed token
    /// * `ExpiredToken` - Token expiry has passed
    /// * `NotFound` - Subject was deleted after the token was issued
    async fn status(&self, access_token: &str) -> Result<User, UserError>;
}
