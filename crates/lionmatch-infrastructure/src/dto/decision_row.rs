//! `likes` table row.

use chrono::{DateTime, Utc};
use lionmatch_core::decision::Decision;
use lionmatch_core::error::Result;
use serde::{Deserialize, Serialize};

use super::require;

const TABLE: &str = "likes";

/// A `likes` row as it comes off the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecisionRow {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub liked_user_id: Option<String>,
    #[serde(default)]
    pub is_like: Option<bool>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl DecisionRow {
    pub fn try_into_decision(self) -> Result<Decision> {
        Ok(Decision {
            user_id: require(TABLE, "user_id", self.user_id)?,
            liked_user_id: require(TABLE, "liked_user_id", self.liked_user_id)?,
            is_like: require(TABLE, "is_like", self.is_like)?,
            created_at: require(TABLE, "created_at", self.created_at)?,
        })
    }
}

/// Projection used when only the target id is selected.
#[derive(Debug, Clone, Deserialize)]
pub struct LikedTargetRow {
    #[serde(default)]
    pub liked_user_id: Option<String>,
}
