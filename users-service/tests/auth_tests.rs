mod common;

use std::sync::Arc;

use auth::TokenCodec;
use chrono::Duration;
use common::InMemoryUserRepository;
use users_service::domain::auth::ports::AuthServicePort;
use users_service::domain::auth::service::AuthService;
use users_service::domain::user::errors::UserError;
use users_service::domain::user::models::CreateUserCommand;
use users_service::domain::user::models::EmailAddress;
use users_service::domain::user::models::UserData;
use users_service::domain::user::models::Username;
use users_service::domain::user::ports::UserRepository;

const TEST_SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

fn service_with_store() -> (Arc<InMemoryUserRepository>, AuthService<InMemoryUserRepository>) {
    service_with_ttls(Duration::minutes(15), Duration::days(30))
}

fn service_with_ttls(
    access_ttl: Duration,
    refresh_ttl: Duration,
) -> (Arc<InMemoryUserRepository>, AuthService<InMemoryUserRepository>) {
    let repository = Arc::new(InMemoryUserRepository::new());
    let service = AuthService::new(
        Arc::clone(&repository),
        TokenCodec::new(TEST_SECRET, access_ttl, refresh_ttl),
    );
    (repository, service)
}

fn register_command(username: &str, email: &str, password: &str) -> CreateUserCommand {
    CreateUserCommand::new(
        Username::new(username.to_string()).unwrap(),
        EmailAddress::new(email.to_string()).unwrap(),
        password.to_string(),
    )
}

#[tokio::test]
async fn test_user_registration() {
    let (_store, service) = service_with_store();

    let user = service
        .register(register_command("me", "me@user.com", "testpassword"))
        .await
        .unwrap();

    assert_eq!(user.username.as_str(), "me");
    assert_eq!(user.email.as_str(), "me@user.com");

    // The public projection never carries the password.
    let data = serde_json::to_value(UserData::from(&user)).unwrap();
    assert!(data.get("password").is_none());
    assert!(data.get("password_hash").is_none());
}

#[tokio::test]
async fn test_user_registration_duplicate_email() {
    let (_store, service) = service_with_store();

    service
        .register(register_command("you", "me@user.com", "testpassword"))
        .await
        .unwrap();

    let result = service
        .register(register_command("me", "me@user.com", "testpassword"))
        .await;

    let err = result.unwrap_err();
    assert!(matches!(err, UserError::EmailAlreadyExists));
    assert_eq!(err.to_string(), "Sorry. That email already exists.");
}

#[tokio::test]
async fn test_registered_user_login() {
    let (_store, service) = service_with_store();

    service
        .register(register_command("he", "he@user.com", "testpassword"))
        .await
        .unwrap();

    let pair = service.login("he@user.com", "testpassword").await.unwrap();
    assert!(!pair.access_token.is_empty());
    assert!(!pair.refresh_token.is_empty());
}

#[tokio::test]
async fn test_not_registered_user_login() {
    let (_store, service) = service_with_store();

    let err = service
        .login("none@user.com", "testpassword")
        .await
        .unwrap_err();

    assert!(matches!(err, UserError::NotFound));
    assert_eq!(err.to_string(), "User does not exist.");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let (_store, service) = service_with_store();

    service
        .register(register_command("alex", "alex@x.com", "pw"))
        .await
        .unwrap();

    let result = service.login("alex@x.com", "wrong").await;
    assert!(matches!(result, Err(UserError::InvalidCredentials)));
}

#[tokio::test]
async fn test_valid_refresh() {
    let (_store, service) = service_with_store();

    service
        .register(register_command("she", "she@user.com", "testpassword"))
        .await
        .unwrap();

    let pair = service.login("she@user.com", "testpassword").await.unwrap();
    let rotated = service.refresh(&pair.refresh_token).await.unwrap();

    assert!(!rotated.access_token.is_empty());
    assert!(!rotated.refresh_token.is_empty());

    // The rotated pair still authenticates the same account.
    let user = service.status(&rotated.access_token).await.unwrap();
    assert_eq!(user.email.as_str(), "she@user.com");
}

#[tokio::test]
async fn test_refresh_does_not_inspect_token_type() {
    let (_store, service) = service_with_store();

    service
        .register(register_command("she", "she@user.com", "testpassword"))
        .await
        .unwrap();

    let pair = service.login("she@user.com", "testpassword").await.unwrap();

    // Any token with a valid signature and expiry is accepted, access
    // tokens included.
    let rotated = service.refresh(&pair.access_token).await.unwrap();
    assert!(!rotated.refresh_token.is_empty());
}

#[tokio::test]
async fn test_invalid_refresh_expired_token() {
    let (_store, service) = service_with_ttls(Duration::minutes(15), Duration::seconds(-1));

    service
        .register(register_command("they", "they@user.com", "testpassword"))
        .await
        .unwrap();

    let pair = service
        .login("they@user.com", "testpassword")
        .await
        .unwrap();

    let err = service.refresh(&pair.refresh_token).await.unwrap_err();
    assert!(matches!(err, UserError::ExpiredToken));
    assert_eq!(err.to_string(), "Signature expired. Please log in again.");
}

#[tokio::test]
async fn test_invalid_refresh() {
    let (_store, service) = service_with_store();

    let err = service.refresh("Invalid").await.unwrap_err();
    assert!(matches!(err, UserError::InvalidToken));
    assert_eq!(err.to_string(), "Invalid token. Please log in again.");
}

#[tokio::test]
async fn test_user_status() {
    let (_store, service) = service_with_store();

    service
        .register(register_command("we", "we@user.com", "testpassword"))
        .await
        .unwrap();

    let pair = service.login("we@user.com", "testpassword").await.unwrap();
    let user = service.status(&pair.access_token).await.unwrap();

    assert_eq!(user.username.as_str(), "we");
    assert_eq!(user.email.as_str(), "we@user.com");

    let data = serde_json::to_value(UserData::from(&user)).unwrap();
    assert!(data.get("password").is_none());
}

#[tokio::test]
async fn test_invalid_status() {
    let (_store, service) = service_with_store();

    let err = service.status("invalid").await.unwrap_err();
    assert!(matches!(err, UserError::InvalidToken));
    assert_eq!(err.to_string(), "Invalid token. Please log in again.");
}

#[tokio::test]
async fn test_status_after_subject_deleted() {
    let (store, service) = service_with_store();

    let user = service
        .register(register_command("gone", "gone@user.com", "testpassword"))
        .await
        .unwrap();

    let pair = service
        .login("gone@user.com", "testpassword")
        .await
        .unwrap();

    // Tokens outlive their subject; the lookup is what fails.
    store.delete(&user).await.unwrap();

    let result = service.status(&pair.access_token).await;
    assert!(matches!(result, Err(UserError::NotFound)));
}
