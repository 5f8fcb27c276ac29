use std::collections::HashSet;
use std::sync::Mutex;

use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::ports::SessionStore;

#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    tokens: Mutex<HashSet<Uuid>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn issue(&self) -> Result<Uuid, DomainError> {
        let token = Uuid::new_v4();
        self.tokens.lock()?.insert(token);
        Ok(token)
    }

    fn contains(&self, token: Uuid) -> Result<bool, DomainError> {
        Ok(self.tokens.lock()?.contains(&token))
    }

    fn revoke(&self, token: Uuid) -> Result<bool, DomainError> {
        Ok(self.tokens.lock()?.remove(&token))
    }
}
