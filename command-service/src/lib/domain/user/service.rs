use std::sync::Arc;

use auth::Authenticator;
use chrono::Utc;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Domain service for user account operations.
pub struct UserService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
    authenticator: Arc<Authenticator>,
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    /// Create a new user service with injected dependencies.
    pub fn new(repository: Arc<R>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    /// Create a new account: hash the password, then persist.
    ///
    /// # Errors
    /// * `Hash` - Password hashing failed
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    pub async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let password_hash = self.authenticator.hash_password(&command.password)?;

        let user = User {
            id: UserId::new(),
            first_name: command.first_name,
            last_name: command.last_name,
            email: command.email,
            password_hash,
            is_email_verified: false,
            is_active: false,
            created_at: Utc::now(),
        };

        self.repository.create(user).await
    }

    /// Retrieve a user by identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    pub async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::ports::MockUserRepository;

    fn authenticator() -> Arc<Authenticator> {
        Arc::new(auth::testutil::authenticator(11, "user-tests"))
    }

    #[tokio::test]
    async fn test_create_user_hashes_password() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_create()
            .withf(|user: &User| {
                user.password_hash != "pass_word!" && user.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|user| Ok(user));

        let service = UserService::new(Arc::new(repository), authenticator());

        let command = CreateUserCommand::new(
            "Nicola".to_string(),
            "Tesla".to_string(),
            EmailAddress::new("nicola@example.com".to_string()).unwrap(),
            "pass_word!".to_string(),
        );

        let user = service.create_user(command).await.expect("Create failed");
        assert_eq!(user.email.as_str(), "nicola@example.com");
        assert!(!user.is_email_verified);
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repository = MockUserRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository), authenticator());

        let result = service.get_user(&UserId::new()).await;
        assert!(matches!(result, Err(UserError::NotFound(_))));
    }
}
