use std::sync::Arc;

use auth::PasswordHasher;
use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service implementation for user CRUD operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
    password_hasher: PasswordHasher,
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            password_hasher: PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<R> UserServicePort for UserService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
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

    async fn get_user(&self, id: UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound)
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }

    async fn update_user(
        &self,
        id: UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound)?;

        if let Some(new_email) = command.email {
            if new_email != user.email
                && self
                    .repository
                    .find_by_email(new_email.as_str())
                    .await?
                    .is_some()
            {
                return Err(UserError::EmailAlreadyExists);
            }
            user.email = new_email;
        }

        if let Some(new_username) = command.username {
            user.username = new_username;
        }

        if let Some(new_password) = command.password {
            user.password_hash = self.password_hasher.hash(&new_password)?;
        }

        self.repository.update(&user).await?;

        Ok(user)
    }

    async fn delete_user(&self, id: UserId) -> Result<User, UserError> {
        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound)?;

        self.repository.delete(&user).await?;

        Ok(user)
    }
}
