//! PostgREST-backed MatchRepository implementation.

use std::sync::Arc;

use lionmatch_core::error::Result;
use lionmatch_core::matching::{Match, MatchRepository, MatchWithProfiles};

use crate::dto::{MatchInsertRow, MatchRow};
use crate::supabase::query::{or_where, order_desc, select};
use crate::supabase::SupabaseClient;

const TABLE: &str = "matches";

/// Conflict target making `create` an idempotent upsert on the canonical
/// pair.
const CONFLICT_COLUMNS: &str = "user1_id,user2_id";

/// Embedded-resource select joining both member profiles.
const JOINED_SELECT: &str =
    "*,user1:profiles!matches_user1_id_fkey(*),user2:profiles!matches_user2_id_fkey(*)";

/// `matches` table access over the Supabase REST API.
pub struct RestMatchRepository {
    client: Arc<SupabaseClient>,
}

impl RestMatchRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

/// `or` expression matching rows where `user_id` is either member.
fn involving(user_id: &str) -> String {
    format!("user1_id.eq.{0},user2_id.eq.{0}", user_id)
}

#[async_trait::async_trait]
impl MatchRepository for RestMatchRepository {
    async fn create(&self, record: &Match) -> Result<()> {
        self.client
            .table_insert(TABLE, &MatchInsertRow::from(record), Some(CONFLICT_COLUMNS))
            .await
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<MatchWithProfiles>> {
        let rows: Vec<MatchRow> = self
            .client
            .table_select(
                TABLE,
                &[
                    select(JOINED_SELECT),
                    or_where(involving(user_id)),
                    order_desc("created_at"),
                ],
            )
            .await?;
        rows.into_iter()
            .map(MatchRow::try_into_with_profiles)
            .collect()
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
    fn test_involving_expression() {
        assert_eq!(involving("u1"), "user1_id.eq.u1,user2_id.eq.u1");
    }
}
