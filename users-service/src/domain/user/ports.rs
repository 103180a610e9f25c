use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

/// Port for user CRUD service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Create a new user with validated credentials.
    ///
    /// Re-checks email uniqueness immediately before the insert; the store's
    /// own unique constraint remains the backstop for concurrent creations.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Store operation failed
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// Retrieve a user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Store operation failed
    async fn get_user(&self, id: UserId) -> Result<User, UserError>;

    /// Retrieve all users in insertion order.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_users(&self) -> Result<Vec<User>, UserError>;

    /// Update an existing user with optional fields.
    ///
    /// A changed email is re-checked for uniqueness; a new password is
    /// hashed before it reaches the store.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DatabaseError` - Store operation failed
    async fn update_user(&self, id: UserId, command: UpdateUserCommand)
        -> Result<User, UserError>;

    /// Delete an existing user.
    ///
    /// # Returns
    /// The deleted user entity, for callers that render its fields
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Store operation failed
    async fn delete_user(&self, id: UserId) -> Result<User, UserError>;
}

/// Persistence operations for the user aggregate.
///
/// This is the external collaborator boundary: the domain services depend on
/// it only through this trait, and tests substitute an in-memory fake.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user; the store assigns the id and creation timestamp.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered (unique constraint)
    /// * `DatabaseError` - Store operation failed
    async fn create(
        &self,
        username: &Username,
        email: &EmailAddress,
        password_hash: &str,
    ) -> Result<User, UserError>;

    /// Retrieve a user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError>;

    /// Retrieve a user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Write the entity's current field values back to the store.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DatabaseError` - Store operation failed
    async fn update(&self, user: &User) -> Result<(), UserError>;

    /// Remove a user from the store.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Store operation failed
    async fn delete(&self, user: &User) -> Result<(), UserError>;

    /// Retrieve all users in insertion order.
    async fn list_all(&self) -> Result<Vec<User>, UserError>;
}
