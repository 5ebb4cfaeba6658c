//! Hand-written port doubles shared by the user handler tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, EventEnvelope, UserId};
use crate::domain::user::aggregate::test_support::TEST_HASH;
use crate::domain::user::{
    Country, Email, HashedPassword, Language, PlainPassword, User, Username,
};
use crate::ports::{EventPublisher, PasswordHasher, UserRepository};

/// Password every test user is registered with.
pub const TEST_PASSWORD: &str = "5tr0nG!.";

pub struct MockUserRepository {
    users: Mutex<Vec<User>>,
    update_calls: Mutex<u32>,
    fail_writes: bool,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            update_calls: Mutex::new(0),
            fail_writes: false,
        }
    }

    pub fn with_user(user: User) -> Self {
        let repo = Self::new();
        repo.users.lock().unwrap().push(user);
        repo
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn insert(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }

    pub fn stored(&self, id: &UserId) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id() == id)
            .cloned()
    }

    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn update_calls(&self) -> u32 {
        *self.update_calls.lock().unwrap()
    }

    fn matching(&self, keep: impl Fn(&User) -> bool) -> Vec<User> {
        let mut found: Vec<User> = self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|&u| keep(u))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.username().as_str().cmp(b.username().as_str()));
        found
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::database("connection refused"));
        }
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        *self.update_calls.lock().unwrap() += 1;
        if self.fail_writes {
            return Err(DomainError::database("connection refused"));
        }
        let mut users = self.users.lock().unwrap();
        if let Some(pos) = users.iter().position(|u| u.id() == user.id()) {
            users[pos] = user.clone();
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        Ok(self.stored(id))
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username() == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email() == email)
            .cloned())
    }

    async fn exists_by_username(&self, username: &Username) -> Result<bool, DomainError> {
        Ok(self.find_by_username(username).await?.is_some())
    }

    async fn exists_by_email(&self, email: &Email) -> Result<bool, DomainError> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    async fn list(&self, include_deleted: bool) -> Result<Vec<User>, DomainError> {
        Ok(self.matching(|u| include_deleted || u.is_active()))
    }

    async fn list_by_country(&self, country: Country) -> Result<Vec<User>, DomainError> {
        Ok(self.matching(|u| u.is_active() && u.country() == country))
    }

    async fn list_by_language(&self, language: Language) -> Result<Vec<User>, DomainError> {
        Ok(self.matching(|u| u.is_active() && u.language() == language))
    }

    async fn list_like_username(&self, fragment: &str) -> Result<Vec<User>, DomainError> {
        let needle = fragment.to_lowercase();
        Ok(self.matching(|u| {
            u.is_active() && u.username().as_str().to_lowercase().contains(&needle)
        }))
    }
}

pub struct MockEventPublisher {
    published: Mutex<Vec<EventEnvelope>>,
}

impl MockEventPublisher {
    pub fn new() -> Self {
        Self {
            published: Mutex::new(Vec::new()),
        }
    }

    pub fn published(&self) -> Vec<EventEnvelope> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventPublisher for MockEventPublisher {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        self.published.lock().unwrap().push(event);
        Ok(())
    }
}

/// Hashes everything to `TEST_HASH` and accepts only `TEST_PASSWORD`.
pub struct StubHasher {
    hash_calls: Mutex<u32>,
}

impl StubHasher {
    pub fn new() -> Self {
        Self {
            hash_calls: Mutex::new(0),
        }
    }

    pub fn hash_calls(&self) -> u32 {
        *self.hash_calls.lock().unwrap()
    }
}

impl PasswordHasher for StubHasher {
    fn hash(&self, _password: &PlainPassword) -> Result<HashedPassword, DomainError> {
        *self.hash_calls.lock().unwrap() += 1;
        Ok(HashedPassword::new(TEST_HASH).unwrap())
    }

    fn verify(&self, password: &PlainPassword, _hash: &HashedPassword) -> Result<bool, DomainError> {
        Ok(password.expose() == TEST_PASSWORD)
    }
}
