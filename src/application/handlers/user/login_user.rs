//! LoginUserHandler - Command handler for credential checks.
//!
//! Token issuance happens outside this crate; a successful login only
//! verifies the credentials and records the login time.

use std::sync::Arc;

use tracing::debug;

use super::log_failure;
use crate::domain::user::{Email, PlainPassword, User, UserError};
use crate::ports::{PasswordHasher, UserRepository};

/// Command to log in with email and password.
#[derive(Clone)]
pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginUserCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginUserCommand")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginUserResult {
    pub user: User,
}

/// Handler for logging users in.
pub struct LoginUserHandler {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl LoginUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }

    pub async fn handle(&self, cmd: LoginUserCommand) -> Result<LoginUserResult, UserError> {
        let result = self.login(cmd).await;
        if let Err(err) = &result {
            log_failure("login_user", err);
        }
        result
    }

    async fn login(&self, cmd: LoginUserCommand) -> Result<LoginUserResult, UserError> {
        // 1. Email must be well formed
        let email = Email::new(cmd.email)?;

        // 2. Unknown and deleted accounts look the same as a bad password
        let mut user = self
            .repository
            .find_by_email(&email)
            .await?
            .filter(User::is_active)
            .ok_or(UserError::InvalidCredentials)?;

        // 3. Verify password
        let password = PlainPassword::new(cmd.password)?;
        if !self.hasher.verify(&password, user.password())? {
            return Err(UserError::InvalidCredentials);
        }

        // 4. Record login
        user.record_login();
        self.repository.update(&user).await?;

        debug!(user_id = %user.id(), "User logged in");
        Ok(LoginUserResult { user })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::domain::foundation::{ErrorCode, Field, Timestamp};
    use crate::domain::user::aggregate::test_support::john_doe_at;

    fn yesterday() -> Timestamp {
        Timestamp::now().minus_days(1)
    }

    fn handler(repo: Arc<MockUserRepository>) -> LoginUserHandler {
        LoginUserHandler::new(repo, Arc::new(StubHasher::new()))
    }

    fn command(email: &str, password: &str) -> LoginUserCommand {
        LoginUserCommand {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn valid_credentials_record_login() {
        let user = john_doe_at(yesterday());
        let repo = Arc::new(MockUserRepository::with_user(user.clone()));

        let result = handler(repo.clone())
            .handle(command("john@doe.com", TEST_PASSWORD))
            .await
            .unwrap();

        assert!(result.user.last_login_at() > user.last_login_at());
        assert_eq!(result.user.updated_at(), user.updated_at());
        let stored = repo.stored(user.id()).unwrap();
        assert_eq!(stored.last_login_at(), result.user.last_login_at());
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let user = john_doe_at(yesterday());
        let repo = Arc::new(MockUserRepository::with_user(user));

        let err = handler(repo.clone())
            .handle(command("john@doe.com", "Wr0ng!Pass"))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::InvalidCredentials);
        assert_eq!(repo.update_calls(), 0);
    }

    #[tokio::test]
    async fn unknown_email_is_invalid_credentials() {
        let repo = Arc::new(MockUserRepository::new());

        let err = handler(repo)
            .handle(command("nobody@doe.com", TEST_PASSWORD))
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::InvalidCredentials));
    }

    #[tokio::test]
    async fn deleted_user_cannot_log_in() {
        let mut user = john_doe_at(yesterday());
        user.delete().unwrap();
        let repo = Arc::new(MockUserRepository::with_user(user));

        let err = handler(repo)
            .handle(command("john@doe.com", TEST_PASSWORD))
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::InvalidCredentials));
    }

    #[tokio::test]
    async fn malformed_email_is_a_validation_error() {
        let repo = Arc::new(MockUserRepository::new());

        let err = handler(repo)
            .handle(command("john-at-doe", TEST_PASSWORD))
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::Validation(v) if v.field() == Field::Email));
    }

    #[test]
    fn debug_output_hides_password() {
        let rendered = format!("{:?}", command("john@doe.com", TEST_PASSWORD));
        assert!(!rendered.contains(TEST_PASSWORD));
    }
}
