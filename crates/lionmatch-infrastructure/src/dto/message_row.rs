//! `messages` table row.

use chrono::{DateTime, Utc};
use lionmatch_core::error::Result;
use lionmatch_core::message::{Message, MessageWithProfiles};
use serde::Deserialize;

use super::profile_row::ProfileRow;
use super::require;

const TABLE: &str = "messages";

/// A `messages` row as it comes off the wire, optionally with both
/// participant profiles embedded (`sender`/`receiver` foreign-table aliases).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageRow {
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub receiver_id: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sender: Option<ProfileRow>,
    #[serde(default)]
    pub receiver: Option<ProfileRow>,
}

impl MessageRow {
    pub fn try_into_message(self) -> Result<Message> {
        Ok(Message {
            sender_id: require(TABLE, "sender_id", self.sender_id)?,
            receiver_id: require(TABLE, "receiver_id", self.receiver_id)?,
            content: require(TABLE, "content", self.content)?,
            created_at: require(TABLE, "created_at", self.created_at)?,
        })
    }

    /// Conversion for the joined conversation-overview query; both embedded
    /// profiles are required. An embedded-but-incomplete profile counts as
    /// missing.
    pub fn try_into_with_profiles(self) -> Result<MessageWithProfiles> {
        let sender = require(TABLE, "sender", self.sender.filter(ProfileRow::is_complete))?
            .try_into_profile()?;
        let receiver = require(
            TABLE,
            "receiver",
            self.receiver.filter(ProfileRow::is_complete),
        )?
        .try_into_profile()?;
        Ok(MessageWithProfiles {
            message: Message {
                sender_id: require(TABLE, "sender_id", self.sender_id)?,
                receiver_id: require(TABLE, "receiver_id", self.receiver_id)?,
                content: require(TABLE, "content", self.content)?,
                created_at: require(TABLE, "created_at", self.created_at)?,
            },
            sender,
            receiver,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lionmatch_core::profile::{Gender, SeekingPreference};

    fn profile_row(id: &str) -> ProfileRow {
        ProfileRow {
            user_id: Some(id.to_string()),
            name: Some(format!("User {}", id)),
            age: Some(30),
            gender: Some(Gender::Female),
            seeking: Some(SeekingPreference::Everyone),
            location: Some("X".to_string()),
            email: Some(format!("{}@example.com", id)),
            created_at: Some(Utc::now()),
            ..ProfileRow::default()
        }
    }

    #[test]
    fn test_plain_row_converts() {
        let row = MessageRow {
            sender_id: Some("u1".to_string()),
            receiver_id: Some("u2".to_string()),
            content: Some("hola".to_string()),
            created_at: Some(Utc::now()),
            ..MessageRow::default()
        };
        let message = row.try_into_message().unwrap();
        assert_eq!(message.content, "hola");
    }

    #[test]
    fn test_joined_row_requires_both_profiles() {
        let row = MessageRow {
            sender_id: Some("u1".to_string()),
            receiver_id: Some("u2".to_string()),
            content: Some("hola".to_string()),
            created_at: Some(Utc::now()),
            sender: Some(profile_row("u1")),
            receiver: None,
        };
        assert!(row.try_into_with_profiles().unwrap_err().is_validation());
    }
}
