//! PostgREST-backed ProfileRepository implementation.

use std::sync::Arc;

use lionmatch_core::error::Result;
use lionmatch_core::profile::{
    CandidateFilter, NewProfile, ProfileRepository, ProfileUpdate, UserProfile,
};

use crate::dto::ProfileRow;
use crate::supabase::query::{eq, limit, not_in, select};
use crate::supabase::SupabaseClient;

const TABLE: &str = "profiles";

/// `profiles` table access over the Supabase REST API.
pub struct RestProfileRepository {
    client: Arc<SupabaseClient>,
}

impl RestProfileRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl ProfileRepository for RestProfileRepository {
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<UserProfile>> {
        let row: Option<ProfileRow> = self
            .client
            .table_select_one(TABLE, &[select("*"), eq("user_id", user_id)])
            .await?;
        match row {
            // A row that onboarding has not completed yet reads as absent;
            // callers route the user back to onboarding.
            Some(row) if row.is_complete() => Ok(Some(row.try_into_profile()?)),
            _ => Ok(None),
        }
    }

    async fn email_exists(&self, email: &str) -> Result<bool> {
        let row: Option<ProfileRow> = self
            .client
            .table_select_one(TABLE, &[select("user_id"), eq("email", email)])
            .await?;
        Ok(row.is_some())
    }

    async fn create(&self, profile: &NewProfile) -> Result<()> {
        self.client.table_insert(TABLE, profile, None).await
    }

    async fn update(&self, user_id: &str, update: &ProfileUpdate) -> Result<()> {
        self.client
            .table_update(TABLE, &[eq("user_id", user_id)], update)
            .await
    }

    async fn find_candidates(&self, filter: &CandidateFilter) -> Result<Vec<UserProfile>> {
        let mut pairs = vec![
            select("*"),
            eq("location", &filter.location),
            not_in("user_id", &filter.exclude),
        ];
        if let Some(gender) = filter.gender {
            pairs.push(eq("gender", gender.as_str()));
        }
        pairs.push(limit(filter.limit));

        let rows: Vec<ProfileRow> = self.client.table_select(TABLE, &pairs).await?;
        let (complete, incomplete): (Vec<_>, Vec<_>) =
            rows.into_iter().partition(ProfileRow::is_complete);
        if !incomplete.is_empty() {
            // Rows still waiting on onboarding are not presentable candidates.
            tracing::debug!(skipped = incomplete.len(), "skipped incomplete candidate rows");
        }
        complete
            .into_iter()
            .map(ProfileRow::try_into_profile)
            .collect()
    }

    async fn delete_by_user_id(&self, user_id: &str) -> Result<()> {
        self.client.table_delete(TABLE, &[eq("user_id", user_id)]).await
    }
}
