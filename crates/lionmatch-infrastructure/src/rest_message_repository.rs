//! PostgREST-backed MessageRepository implementation.

use std::sync::Arc;

use lionmatch_core::error::Result;
use lionmatch_core::message::{Message, MessageRepository, MessageWithProfiles, NewMessage};

use crate::dto::MessageRow;
use crate::supabase::query::{limit, or_where, order_asc, order_desc, select};
use crate::supabase::SupabaseClient;

const TABLE: &str = "messages";

/// Embedded-resource select joining both participant profiles.
const JOINED_SELECT: &str =
    "*,sender:profiles!messages_sender_id_fkey(*),receiver:profiles!messages_receiver_id_fkey(*)";

/// `messages` table access over the Supabase REST API.
pub struct RestMessageRepository {
    client: Arc<SupabaseClient>,
}

impl RestMessageRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

/// `or` expression matching rows where `user_id` is either participant.
fn involving(user_id: &str) -> String {
    format!("sender_id.eq.{0},receiver_id.eq.{0}", user_id)
}

/// `or` expression matching the two directions of one conversation.
fn thread_between(one: &str, other: &str) -> String {
    format!(
        "and(sender_id.eq.{0},receiver_id.eq.{1}),and(sender_id.eq.{1},receiver_id.eq.{0})",
        one, other
    )
}

#[async_trait::async_trait]
impl MessageRepository for RestMessageRepository {
    async fn send(&self, message: &NewMessage) -> Result<()> {
        self.client.table_insert(TABLE, message, None).await
    }

    async fn recent_involving(
        &self,
        user_id: &str,
        cap: usize,
    ) -> Result<Vec<MessageWithProfiles>> {
        let rows: Vec<MessageRow> = self
            .client
            .table_select(
                TABLE,
                &[
                    select(JOINED_SELECT),
                    or_where(involving(user_id)),
                    order_desc("created_at"),
                    limit(cap),
                ],
            )
            .await?;
        rows.into_iter()
            .map(MessageRow::try_into_with_profiles)
            .collect()
    }

    async fn conversation_between(&self, one: &str, other: &str) -> Result<Vec<Message>> {
        let rows: Vec<MessageRow> = self
            .client
            .table_select(
                TABLE,
                &[
                    select("*"),
                    or_where(thread_between(one, other)),
                    order_asc("created_at"),
                ],
            )
            .await?;
        rows.into_iter().map(MessageRow::try_into_message).collect()
    }

    async fn delete_involving(&self, user_id: &str) -> Result<()> {
        self.client
            .table_delete(TABLE, &[or_where(involving(user_id))])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_expression_covers_both_directions() {
        assert_eq!(
            thread_between("a", "b"),
            "and(sender_id.eq.a,receiver_id.eq.b),and(sender_id.eq.b,receiver_id.eq.a)"
        );
    }
}
