use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use users_service::domain::user::errors::UserError;
use users_service::domain::user::models::EmailAddress;
use users_service::domain::user::models::User;
use users_service::domain::user::models::UserId;
use users_service::domain::user::models::Username;
use users_service::domain::user::ports::UserRepository;

/// In-memory user store standing in for the real database.
///
/// Assigns sequential ids, keeps insertion order, and enforces the same
/// email unique constraint Postgres does, so the service-level duplicate
/// check has the same backstop in tests as in production.
pub struct InMemoryUserRepository {
    inner: Mutex<Inner>,
}

struct Inner {
    users: Vec<User>,
    next_id: i64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(
        &self,
        username: &Username,
        email: &EmailAddress,
        password_hash: &str,
    ) -> Result<User, UserError> {
        let mut inner = self.inner.lock().unwrap();

        if inner.users.iter().any(|u| u.email == *email) {
            return Err(UserError::EmailAlreadyExists);
        }

        let user = User {
            id: UserId(inner.next_id),
            username: username.clone(),
            email: email.clone(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        inner.next_id += 1;
        inner.users.push(user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.iter().find(|u| u.email.as_str() == email).cloned())
    }

    async fn update(&self, user: &User) -> Result<(), UserError> {
        let mut inner = self.inner.lock().unwrap();

        if inner
            .users
            .iter()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(UserError::EmailAlreadyExists);
        }

        let slot = inner
            .users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(UserError::NotFound)?;
        *slot = user.clone();

        Ok(())
    }

    async fn delete(&self, user: &User) -> Result<(), UserError> {
        let mut inner = self.inner.lock().unwrap();

        let position = inner
            .users
            .iter()
            .position(|u| u.id == user.id)
            .ok_or(UserError::NotFound)?;
        inner.users.remove(position);

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.clone())
    }
}
