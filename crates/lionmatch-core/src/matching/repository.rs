//! Match repository trait.
//!
//! Defines the interface toward the backend `matches` table.

use super::model::{Match, MatchWithProfiles};
use crate::error::Result;

/// An abstract repository for match persistence.
///
/// Implementations must treat [`create`](MatchRepository::create) as an
/// idempotent upsert keyed on the canonical (user_a, user_b) pair, so a
/// re-triggered match creation cannot duplicate the row.
#[async_trait::async_trait]
pub trait MatchRepository: Send + Sync {
    /// Persists a match. Upserts on the canonical pair.
    async fn create(&self, record: &Match) -> Result<()>;

    /// All matches involving `user_id` with both member profiles joined,
    /// newest first.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<MatchWithProfiles>>;

    /// Removes every match involving `user_id` (account teardown).
    async fn delete_involving(&self, user_id: &str) -> Result<()>;
}
