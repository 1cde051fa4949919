//! Message domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::profile::UserProfile;

/// A stored direct message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub sender_id: String,
    pub receiver_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// The id of the participant that is not `user_id`, or `None` when
    /// `user_id` is not part of this message.
    pub fn peer_of(&self, user_id: &str) -> Option<&str> {
        if self.sender_id == user_id {
            Some(&self.receiver_id)
        } else if self.receiver_id == user_id {
            Some(&self.sender_id)
        } else {
            None
        }
    }
}

/// A message about to be sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMessage {
    pub sender_id: String,
    pub receiver_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A message row with both participant profiles joined in, as returned by the
/// conversation-overview query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageWithProfiles {
    pub message: Message,
    pub sender: UserProfile,
    pub receiver: UserProfile,
}

impl MessageWithProfiles {
    /// The profile of the participant that is not `user_id`.
    pub fn peer_profile(&self, user_id: &str) -> Option<&UserProfile> {
        if self.message.sender_id == user_id {
            Some(&self.receiver)
        } else if self.message.receiver_id == user_id {
            Some(&self.sender)
        } else {
            None
        }
    }
}
