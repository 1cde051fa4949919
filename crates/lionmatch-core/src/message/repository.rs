//! Message repository trait.
//!
//! Defines the interface toward the backend `messages` table.

use super::model::{Message, MessageWithProfiles, NewMessage};
use crate::error::Result;

/// An abstract repository for direct-message persistence.
#[async_trait::async_trait]
pub trait MessageRepository: Send + Sync {
    /// Persists an outgoing message.
    async fn send(&self, message: &NewMessage) -> Result<()>;

    /// The most recent messages sent or received by `user_id`, newest first,
    /// with both participant profiles joined. Feeds the conversation
    /// overview.
    async fn recent_involving(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<MessageWithProfiles>>;

    /// The full conversation between two users, oldest first.
    async fn conversation_between(&self, one: &str, other: &str) -> Result<Vec<Message>>;

    /// Removes every message sent or received by `user_id` (account
    /// teardown).
    async fn delete_involving(&self, user_id: &str) -> Result<()>;
}
