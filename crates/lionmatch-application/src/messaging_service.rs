//! Messages screen: match carousel, conversation overview, chat history.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use lionmatch_core::error::{MatchError, Result};
use lionmatch_core::matching::MatchRepository;
use lionmatch_core::message::{Message, MessageRepository, NewMessage};
use lionmatch_core::profile::UserProfile;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::timefmt::relative_label;

/// How many recent messages feed the conversation overview.
pub const CONVERSATION_FETCH_LIMIT: usize = 50;

/// A match as shown in the carousel on the messages screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub peer: UserProfile,
    pub matched_at: DateTime<Utc>,
}

/// One entry in the conversation list: the peer and their latest message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub peer: UserProfile,
    pub last_message: String,
    pub last_at: DateTime<Utc>,
    /// Compact relative-time label for the list row
    pub time_label: String,
    /// Presence is not tracked by the backend; simulated client-side
    pub online: bool,
}

/// Read/write access to matches and messages for the messages screen.
pub struct MessagingService {
    matches: Arc<dyn MatchRepository>,
    messages: Arc<dyn MessageRepository>,
}

impl MessagingService {
    pub fn new(matches: Arc<dyn MatchRepository>, messages: Arc<dyn MessageRepository>) -> Self {
        Self { matches, messages }
    }

    /// The user's matches, newest first, resolved to the peer profile.
    ///
    /// Rows where the peer cannot be resolved are dropped with a warning
    /// rather than failing the whole list.
    pub async fn list_matches(&self, user_id: &str) -> Result<Vec<MatchSummary>> {
        let rows = self.matches.list_for_user(user_id).await?;
        Ok(rows
            .into_iter()
            .filter_map(|row| match row.peer_profile(user_id) {
                Some(peer) => Some(MatchSummary {
                    peer: peer.clone(),
                    matched_at: row.record.created_at,
                }),
                None => {
                    tracing::warn!(
                        user_a = %row.record.user_a,
                        user_b = %row.record.user_b,
                        "match row does not involve the requesting user"
                    );
                    None
                }
            })
            .collect())
    }

    /// Groups the most recent messages into one entry per peer.
    ///
    /// Messages arrive newest first, so the first message seen for a peer is
    /// the conversation's latest and wins; everything older is skipped.
    pub async fn conversations(&self, user_id: &str) -> Result<Vec<ConversationSummary>> {
        let rows = self
            .messages
            .recent_involving(user_id, CONVERSATION_FETCH_LIMIT)
            .await?;
        let now = Utc::now();

        let mut seen: HashSet<String> = HashSet::new();
        let mut summaries = Vec::new();
        for row in rows {
            let Some(peer) = row.peer_profile(user_id) else {
                tracing::warn!(
                    sender = %row.message.sender_id,
                    receiver = %row.message.receiver_id,
                    "message row does not involve the requesting user"
                );
                continue;
            };
            if !seen.insert(peer.user_id.clone()) {
                continue;
            }
            summaries.push(ConversationSummary {
                peer: peer.clone(),
                last_message: row.message.content.clone(),
                last_at: row.message.created_at,
                time_label: relative_label(row.message.created_at, now),
                online: rand::thread_rng().gen_bool(0.5),
            });
        }
        Ok(summaries)
    }

    /// The full thread between the user and a peer, oldest first.
    pub async fn chat_history(&self, user_id: &str, peer_id: &str) -> Result<Vec<Message>> {
        self.messages.conversation_between(user_id, peer_id).await
    }

    /// Sends a message. Blank content is rejected before any network call.
    pub async fn send_message(&self, sender_id: &str, receiver_id: &str, content: &str) -> Result<()> {
        let content = content.trim();
        if content.is_empty() {
            return Err(MatchError::validation("message content is empty"));
        }
        self.messages
            .send(&NewMessage {
                sender_id: sender_id.to_string(),
                receiver_id: receiver_id.to_string(),
                content: content.to_string(),
                created_at: Utc::now(),
            })
            .await
    }
}
