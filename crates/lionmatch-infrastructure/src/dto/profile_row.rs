//! `profiles` table row.

use chrono::{DateTime, NaiveDate, Utc};
use lionmatch_core::error::Result;
use lionmatch_core::profile::{Gender, SeekingPreference, UserProfile};
use serde::{Deserialize, Serialize};

use super::require;

const TABLE: &str = "profiles";

/// A `profiles` row as it comes off the wire.
///
/// A registration-time row carries only `user_id`, `email`, and `created_at`;
/// onboarding fills in the rest. [`is_complete`](ProfileRow::is_complete)
/// distinguishes the two states.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileRow {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub birthdate: Option<NaiveDate>,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub seeking: Option<SeekingPreference>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub interests: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProfileRow {
    /// Whether onboarding has populated this profile.
    pub fn is_complete(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.trim().is_empty())
    }

    /// Converts a complete row into the domain profile, validating required
    /// fields. `updated_at` falls back to `created_at` for rows never edited
    /// after onboarding.
    pub fn try_into_profile(self) -> Result<UserProfile> {
        let created_at = require(TABLE, "created_at", self.created_at)?;
        Ok(UserProfile {
            user_id: require(TABLE, "user_id", self.user_id)?,
            name: require(TABLE, "name", self.name)?,
            age: require(TABLE, "age", self.age)?,
            gender: require(TABLE, "gender", self.gender)?,
            seeking: require(TABLE, "seeking", self.seeking)?,
            bio: self.bio.filter(|b| !b.is_empty()),
            interests: self.interests.filter(|i| !i.is_empty()),
            location: require(TABLE, "location", self.location)?,
            email: require(TABLE, "email", self.email)?,
            created_at,
            updated_at: self.updated_at.unwrap_or(created_at),
        })
    }
}
