//! RegisterUserHandler - Command handler for creating accounts.

use std::sync::Arc;

use tracing::debug;

use super::log_failure;
use crate::domain::foundation::{CommandMetadata, Field, SerializableDomainEvent};
use crate::domain::user::{
    BirthDate, Country, Email, Enumerated, Gender, Language, Phone, PlainPassword, User,
    UserError, UserFactory, UserRegistered, Username,
};
use crate::ports::{EventPublisher, PasswordHasher, UserRepository};

/// Command to register a new account, carrying raw caller input.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub gender: String,
    /// `YYYY-MM-DD`
    pub birth_date: String,
    pub country: String,
    pub language: String,
    /// `+<dial>-<number>`; empty or absent means no phone
    pub phone: Option<String>,
}

/// Result of successful registration.
#[derive(Debug, Clone)]
pub struct RegisterUserResult {
    pub user: User,
    pub event: UserRegistered,
}

/// Handler for registering users.
pub struct RegisterUserHandler {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    event_publisher: Arc<dyn EventPublisher>,
    factory: UserFactory,
}

impl RegisterUserHandler {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            hasher,
            event_publisher,
            factory: UserFactory::new(),
        }
    }

    pub async fn handle(
        &self,
        cmd: RegisterUserCommand,
        metadata: CommandMetadata,
    ) -> Result<RegisterUserResult, UserError> {
        let result = self.register(cmd, metadata).await;
        if let Err(err) = &result {
            log_failure("register_user", err);
        }
        result
    }

    async fn register(
        &self,
        cmd: RegisterUserCommand,
        metadata: CommandMetadata,
    ) -> Result<RegisterUserResult, UserError> {
        // 1. Validate raw input through the value objects
        let username = Username::new(cmd.username)?;
        let email = Email::new(cmd.email)?;
        let password = PlainPassword::new(cmd.password)?;
        let gender = Gender::parse(&cmd.gender)?;
        let birth_date = BirthDate::parse(&cmd.birth_date)?;
        let country = Country::parse(&cmd.country)?;
        let language = Language::parse(&cmd.language)?;
        let phone = Phone::parse(cmd.phone.as_deref().unwrap_or_default())?;

        // 2. Uniqueness
        if self.repository.exists_by_username(&username).await? {
            return Err(UserError::already_exists(Field::Username));
        }
        if self.repository.exists_by_email(&email).await? {
            return Err(UserError::already_exists(Field::Email));
        }

        // 3. Hash the password
        let hashed = self.hasher.hash(&password)?;

        // 4. Create aggregate
        let user = self.factory.create(
            cmd.first_name,
            cmd.last_name,
            username,
            email,
            hashed,
            gender,
            birth_date,
            country,
            language,
            phone,
        )?;

        // 5. Persist
        self.repository.save(&user).await?;

        // 6. Publish event
        let event = UserRegistered::from_user(&user);
        let envelope = metadata.stamp(event.to_envelope()?);
        self.event_publisher.publish(envelope).await?;

        debug!(user_id = %user.id(), username = %user.username(), "User registered");
        Ok(RegisterUserResult { user, event })
    }
}
