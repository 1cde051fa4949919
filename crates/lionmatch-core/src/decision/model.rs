//! Decision domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A directed swipe decision: the deciding user liked or passed on the target.
///
/// Immutable once created. At most one decision may exist per
/// (user_id, liked_user_id) pair; recording is an upsert so a retried call
/// cannot produce duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// The deciding user
    pub user_id: String,
    /// The target the decision is about
    pub liked_user_id: String,
    /// `true` for like, `false` for dislike
    pub is_like: bool,
    pub created_at: DateTime<Utc>,
}

impl Decision {
    pub fn new(
        user_id: impl Into<String>,
        liked_user_id: impl Into<String>,
        is_like: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            liked_user_id: liked_user_id.into(),
            is_like,
            created_at,
        }
    }
}
