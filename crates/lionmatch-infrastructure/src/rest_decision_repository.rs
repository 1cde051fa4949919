//! PostgREST-backed DecisionRepository implementation.

use std::sync::Arc;

use lionmatch_core::decision::{Decision, DecisionRepository};
use lionmatch_core::error::{MatchError, Result};

use crate::dto::decision_row::LikedTargetRow;
use crate::dto::DecisionRow;
use crate::supabase::query::{eq, or_where, select};
use crate::supabase::SupabaseClient;

const TABLE: &str = "likes";

/// Conflict target making `record` an upsert: one decision per directed pair.
const CONFLICT_COLUMNS: &str = "user_id,liked_user_id";

/// `likes` table access over the Supabase REST API.
pub struct RestDecisionRepository {
    client: Arc<SupabaseClient>,
}

impl RestDecisionRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

/// `or` expression matching rows where `user_id` appears on either side.
fn involving(user_id: &str) -> String {
    format!("user_id.eq.{0},liked_user_id.eq.{0}", user_id)
}

#[async_trait::async_trait]
impl DecisionRepository for RestDecisionRepository {
    async fn record(&self, decision: &Decision) -> Result<()> {
        self.client
            .table_insert(TABLE, decision, Some(CONFLICT_COLUMNS))
            .await
    }

    async fn decided_target_ids(&self, user_id: &str) -> Result<Vec<String>> {
        let rows: Vec<LikedTargetRow> = self
            .client
            .table_select(TABLE, &[select("liked_user_id"), eq("user_id", user_id)])
            .await?;
        rows.into_iter()
            .map(|row| {
                row.liked_user_id.ok_or_else(|| {
                    MatchError::validation("likes row missing required field `liked_user_id`")
                })
            })
            .collect()
    }

    async fn reciprocal_like_exists(&self, from: &str, toward: &str) -> Result<bool> {
        let row: Option<DecisionRow> = self
            .client
            .table_select_one(
                TABLE,
                &[
                    select("user_id"),
                    eq("user_id", from),
                    eq("liked_user_id", toward),
                    eq("is_like", true),
                ],
            )
            .await?;
        Ok(row.is_some())
    }

    async fn delete_involving(&self, user_id: &str) -> Result<()> {
        self.client
            .table_delete(TABLE, &[or_where(involving(user_id))])
            .await
    }
}
