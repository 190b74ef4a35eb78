//! Service tests for the Users domain, run against the in-memory
//! repository.

use axum_helpers::PaginationRequest;
use domain_users::models::CreateUserRequest;
use domain_users::{InMemoryUserRepository, UserError, UserService};

fn create_request(username: &str) -> CreateUserRequest {
    CreateUserRequest {
        username: Some(username.to_string()),
        first_name: Some("John".to_string()),
        last_name: Some("Doe".to_string()),
        email: Some(format!("{username}@example.com")),
        phone: Some("0123456789".to_string()),
        password: Some("correct-horse".to_string()),
    }
}

#[tokio::test]
async fn test_create_user_hashes_credential() {
    let service = UserService::new(InMemoryUserRepository::new());

    let user = service.create_user(create_request("jdoe")).await.unwrap();

    assert!(user.id >= 1);
    assert!(user.active);
    assert!(user.updated_at.is_none());
    assert!(user.password_hash.starts_with("$argon2"));
    assert_ne!(user.password_hash, "correct-horse");
}

#[tokio::test]
async fn test_create_user_rejects_taken_username() {
    let service = UserService::new(InMemoryUserRepository::new());

    service.create_user(create_request("jdoe")).await.unwrap();
    let result = service.create_user(create_request("jdoe")).await;

    assert_eq!(result.unwrap_err(), UserError::UsernameConflict);
}

#[tokio::test]
async fn test_create_user_rejects_username_of_deactivated_account() {
    let repo = InMemoryUserRepository::new();
    let service = UserService::new(repo.clone());

    let user = service.create_user(create_request("jdoe")).await.unwrap();
    repo.set_active(user.id, false).await;
    repo.soft_delete(user.id).await;

    // The name stays reserved even though the owner is hidden
    let result = service.create_user(create_request("jdoe")).await;
    assert_eq!(result.unwrap_err(), UserError::UsernameConflict);
}

#[tokio::test]
async fn test_create_user_without_required_fields_is_validation_error() {
    let service = UserService::new(InMemoryUserRepository::new());

    let mut request = create_request("jdoe");
    request.password = None;

    let result = service.create_user(request).await;
    assert_eq!(result.unwrap_err(), UserError::Validation);
}

#[tokio::test]
async fn test_get_user_returns_entity() {
    let service = UserService::new(InMemoryUserRepository::new());
    let created = service.create_user(create_request("jdoe")).await.unwrap();

    let fetched = service.get_user(created.id).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.username, "jdoe");
}

#[tokio::test]
async fn test_get_missing_user_is_not_found() {
    let service = UserService::new(InMemoryUserRepository::new());

    let result = service.get_user(42).await;
    assert_eq!(result.unwrap_err(), UserError::NotFound);
}

#[tokio::test]
async fn test_get_deactivated_user_is_not_found() {
    let repo = InMemoryUserRepository::new();
    let service = UserService::new(repo.clone());

    let created = service.create_user(create_request("jdoe")).await.unwrap();
    repo.set_active(created.id, false).await;

    // The repository filter hides the row before the service's own
    // inactive check can run.
    let result = service.get_user(created.id).await;
    assert_eq!(result.unwrap_err(), UserError::NotFound);
}

#[tokio::test]
async fn test_list_users_pages_and_counts() {
    let service = UserService::new(InMemoryUserRepository::new());
    for i in 0..7 {
        service
            .create_user(create_request(&format!("user{i}")))
            .await
            .unwrap();
    }

    let pagination = PaginationRequest {
        page: 2,
        page_size: 3,
    };
    let (page, total) = service.list_users(&pagination).await.unwrap();

    assert_eq!(total, 7);
    assert_eq!(page.len(), 3);
    assert_eq!(page[0].username, "user3");
}
