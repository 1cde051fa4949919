//! Decision repository trait.
//!
//! Defines the interface toward the backend `likes` table.

use super::model::Decision;
use crate::error::Result;

/// An abstract repository for swipe-decision persistence.
///
/// Implementations must treat [`record`](DecisionRepository::record) as an
/// upsert keyed on (user_id, liked_user_id) so retries and client bugs cannot
/// insert duplicate rows.
#[async_trait::async_trait]
pub trait DecisionRepository: Send + Sync {
    /// Persists a decision. Upserts on the (user_id, liked_user_id) pair.
    async fn record(&self, decision: &Decision) -> Result<()>;

    /// Returns the ids of every user `user_id` has already decided on,
    /// likes and dislikes alike. Used to build the discovery exclusion set.
    async fn decided_target_ids(&self, user_id: &str) -> Result<Vec<String>>;

    /// Returns whether a Decision(from → toward, is_like=true) exists.
    async fn reciprocal_like_exists(&self, from: &str, toward: &str) -> Result<bool>;

    /// Removes every decision made by or about `user_id` (account teardown).
    async fn delete_involving(&self, user_id: &str) -> Result<()>;
}
