//! Message persistence seam for contact submissions

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use uuid::Uuid;

use crate::models::ContactMessage;

/// Message store error types
#[derive(Debug, Error)]
pub enum StoreError {
    /// The persistence collaborator could not be reached. Transient;
    /// the caller owns any retry policy.
    #[error("message store unavailable: {0}")]
    Unavailable(String),

    #[error("message id already stored: {0}")]
    DuplicateId(Uuid),
}

/// Repository trait for contact message operations.
///
/// Each stored message is a single atomic append; concurrent
/// submissions must never interleave partial writes to one record.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn store(&self, message: ContactMessage) -> Result<(), StoreError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ContactMessage>, StoreError>;
    /// All stored messages, oldest first.
    async fn list(&self) -> Result<Vec<ContactMessage>, StoreError>;
    async fn count(&self) -> Result<usize, StoreError>;
}

/// In-memory repository, the default collaborator.
///
/// A database-backed implementation would sit behind the same trait
/// without touching the handlers.
pub struct InMemoryMessageRepository {
    messages: Arc<Mutex<HashMap<Uuid, ContactMessage>>>,
}

impl InMemoryMessageRepository {
    #[must_use]
    pub fn new() -> Self {
        Self { messages: Arc::new(Mutex::new(HashMap::new())) }
    }
}

impl Default for InMemoryMessageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn store(&self, message: ContactMessage) -> Result<(), StoreError> {
        let mut messages = self
            .messages
            .lock()
            .map_err(|_| StoreError::Unavailable("message store lock poisoned".into()))?;

        if messages.contains_key(&message.id) {
            return Err(StoreError::DuplicateId(message.id));
        }

        messages.insert(message.id, message);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ContactMessage>, StoreError> {
        let messages = self
            .messages
            .lock()
            .map_err(|_| StoreError::Unavailable("message store lock poisoned".into()))?;
        Ok(messages.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<ContactMessage>, StoreError> {
        let messages = self
            .messages
            .lock()
            .map_err(|_| StoreError::Unavailable("message store lock poisoned".into()))?;
        let mut all: Vec<ContactMessage> = messages.values().cloned().collect();
        all.sort_by_key(|m| (m.created_at, m.id));
        Ok(all)
    }

    async fn count(&self) -> Result<usize, StoreError> {
        let messages = self
            .messages
            .lock()
            .map_err(|_| StoreError::Unavailable("message store lock poisoned".into()))?;
        Ok(messages.len())
    }
}
