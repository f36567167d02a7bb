use std::sync::{Arc, RwLock};

use tracing::{debug, info};

use crate::domain::error::DomainError;
use crate::domain::user::User;
use crate::infrastructure::clock::{Clock, SystemClock};

pub trait UserRepository: Send + Sync {
    fn create(&self, name: String, email: String) -> Result<User, DomainError>;
    fn find_by_id(&self, id: u64) -> Result<Option<User>, DomainError>;
    fn list(&self) -> Result<Vec<User>, DomainError>;
}

/// Append-only in-memory store. Records are never updated or removed, so ids
/// handed out as `count + 1` stay gapless for the lifetime of the instance.
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            clock,
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn create(&self, name: String, email: String) -> Result<User, DomainError> {
        let mut users = self
            .users
            .write()
            .map_err(|e| DomainError::Internal(format!("user store lock poisoned: {}", e)))?;

        let user = User::new(users.len() as u64 + 1, name, email, self.clock.now());
        users.push(user.clone());

        info!(user_id = user.id, email = %user.email, "user created");
        Ok(user)
    }

    fn find_by_id(&self, id: u64) -> Result<Option<User>, DomainError> {
        let users = self
            .users
            .read()
            .map_err(|e| DomainError::Internal(format!("user store lock poisoned: {}", e)))?;

        let found = users.iter().find(|user| user.id == id).cloned();
        if found.is_none() {
            debug!(user_id = id, "user not found");
        }
        Ok(found)
    }

    fn list(&self) -> Result<Vec<User>, DomainError> {
        let users = self
            .users
            .read()
            .map_err(|e| DomainError::Internal(format!("user store lock poisoned: {}", e)))?;

        Ok(users.clone())
    }
}
