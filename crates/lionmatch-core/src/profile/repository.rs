//! Profile repository trait.
//!
//! Defines the interface toward the backend `profiles` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::{Gender, SeekingPreference, UserProfile};
use crate::error::Result;

/// Minimal profile row written at registration time.
///
/// Only identity fields are known at this point; the rest is populated during
/// onboarding via [`ProfileUpdate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProfile {
    pub user_id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Field set applied to an existing profile row.
///
/// `None` fields are left untouched by the update. Onboarding sets all of
/// them; a self-edit sets the editable subset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<chrono::NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seeking: Option<SeekingPreference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileUpdate {
    /// An update that touches nothing yet, stamped at `updated_at`.
    pub fn empty(updated_at: DateTime<Utc>) -> Self {
        Self {
            name: None,
            birthdate: None,
            age: None,
            gender: None,
            seeking: None,
            bio: None,
            interests: None,
            location: None,
            updated_at,
        }
    }
}

/// Candidate query sent to the backend when the discovery queue is refreshed.
///
/// The backend applies the location filter, the optional gender filter, the
/// exclusion list (self plus already-decided targets), and the batch limit.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateFilter {
    pub location: String,
    /// `None` when the user is seeking everyone
    pub gender: Option<Gender>,
    /// User ids that must not appear in the result
    pub exclude: Vec<String>,
    pub limit: usize,
}

/// An abstract repository for profile persistence and candidate queries.
///
/// This trait decouples the discovery workflow and the account services from
/// the concrete backend (a remote table API in production, an in-memory map
/// in tests).
#[async_trait::async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Looks up a profile by user id. `Ok(None)` when the row is absent.
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<UserProfile>>;

    /// Whether any profile row (complete or not) carries this email. Used for
    /// the duplicate-registration check.
    async fn email_exists(&self, email: &str) -> Result<bool>;

    /// Inserts the minimal profile row created at registration.
    async fn create(&self, profile: &NewProfile) -> Result<()>;

    /// Applies `update` to the row keyed by `user_id`.
    async fn update(&self, user_id: &str, update: &ProfileUpdate) -> Result<()>;

    /// Fetches a candidate batch matching `filter`, in backend order.
    async fn find_candidates(&self, filter: &CandidateFilter) -> Result<Vec<UserProfile>>;

    /// Removes the profile row as part of account teardown.
    async fn delete_by_user_id(&self, user_id: &str) -> Result<()>;
}
