//! `matches` table row.

use chrono::{DateTime, Utc};
use lionmatch_core::error::Result;
use lionmatch_core::matching::{Match, MatchWithProfiles};
use serde::{Deserialize, Serialize};

use super::profile_row::ProfileRow;
use super::require;

const TABLE: &str = "matches";

/// A `matches` row as it comes off the wire, optionally with both member
/// profiles embedded (`user1`/`user2` foreign-table aliases).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchRow {
    #[serde(default)]
    pub user1_id: Option<String>,
    #[serde(default)]
    pub user2_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub user1: Option<ProfileRow>,
    #[serde(default)]
    pub user2: Option<ProfileRow>,
}

impl MatchRow {
    pub fn try_into_match(self) -> Result<Match> {
        Ok(Match {
            user_a: require(TABLE, "user1_id", self.user1_id)?,
            user_b: require(TABLE, "user2_id", self.user2_id)?,
            created_at: require(TABLE, "created_at", self.created_at)?,
        })
    }

    /// Conversion for the joined match-list query; both embedded profiles are
    /// required. An embedded-but-incomplete profile counts as missing.
    pub fn try_into_with_profiles(self) -> Result<MatchWithProfiles> {
        let profile_a = require(TABLE, "user1", self.user1.filter(ProfileRow::is_complete))?
            .try_into_profile()?;
        let profile_b = require(TABLE, "user2", self.user2.filter(ProfileRow::is_complete))?
            .try_into_profile()?;
        Ok(MatchWithProfiles {
            record: Match {
                user_a: require(TABLE, "user1_id", self.user1_id)?,
                user_b: require(TABLE, "user2_id", self.user2_id)?,
                created_at: require(TABLE, "created_at", self.created_at)?,
            },
            profile_a,
            profile_b,
        })
    }
}

/// The column layout written on insert. The domain's canonical (user_a,
/// user_b) pair maps onto the backend's `user1_id`/`user2_id` columns.
#[derive(Debug, Clone, Serialize)]
pub struct MatchInsertRow {
    pub user1_id: String,
    pub user2_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Match> for MatchInsertRow {
    fn from(record: &Match) -> Self {
        Self {
            user1_id: record.user_a.clone(),
            user2_id: record.user_b.clone(),
            created_at: record.created_at,
        }
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
            gender: Some(Gender::Male),
            seeking: Some(SeekingPreference::Everyone),
            location: Some("X".to_string()),
            email: Some(format!("{}@example.com", id)),
            created_at: Some(Utc::now()),
            ..ProfileRow::default()
        }
    }

    #[test]
    fn test_joined_row_converts() {
        let row = MatchRow {
            user1_id: Some("u1".to_string()),
            user2_id: Some("u2".to_string()),
            created_at: Some(Utc::now()),
            user1: Some(profile_row("u1")),
            user2: Some(profile_row("u2")),
        };
        let joined = row.try_into_with_profiles().unwrap();
        assert_eq!(joined.record.user_a, "u1");
        assert_eq!(joined.profile_b.user_id, "u2");
    }

    #[test]
    fn test_missing_embed_is_validation_error() {
        let row = MatchRow {
            user1_id: Some("u1".to_string()),
            user2_id: Some("u2".to_string()),
            created_at: Some(Utc::now()),
            user1: Some(profile_row("u1")),
            user2: None,
        };
        assert!(row.try_into_with_profiles().unwrap_err().is_validation());
    }

    #[test]
    fn test_insert_row_uses_backend_columns() {
        let record = Match::between("b", "a", Utc::now());
        let insert = MatchInsertRow::from(&record);
        assert_eq!(insert.user1_id, "a");
        assert_eq!(insert.user2_id, "b");
    }
}
