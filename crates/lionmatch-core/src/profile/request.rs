//! Onboarding and profile-edit request models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::model::{age_on, Gender, SeekingPreference};
use super::repository::ProfileUpdate;
use crate::error::{MatchError, Result};

/// Minimum age accepted at onboarding.
pub const MIN_AGE: u8 = 18;

/// Date format produced by the onboarding birthdate field.
const BIRTHDATE_FORMAT: &str = "%Y-%m-%d";

/// Onboarding form that completes a freshly registered profile.
///
/// Validation happens client-side and short-circuits before any network call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileForm {
    pub name: String,
    /// Raw form value, expected as `YYYY-MM-DD`
    pub birthdate: String,
    pub gender: Gender,
    /// `None` when the form's choice group was left unselected
    pub seeking: Option<SeekingPreference>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub interests: Option<String>,
}

impl ProfileForm {
    /// Parses the birthdate field.
    pub fn parse_birthdate(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(self.birthdate.trim(), BIRTHDATE_FORMAT)
            .map_err(|_| MatchError::validation(format!("invalid birthdate '{}'", self.birthdate)))
    }

    /// Validates the form against `today` and returns the derived age.
    pub fn validate(&self, today: NaiveDate) -> Result<u8> {
        if self.name.trim().is_empty() {
            return Err(MatchError::validation("name is required"));
        }
        let birthdate = self.parse_birthdate()?;
        let age = age_on(birthdate, today);
        if age < MIN_AGE {
            return Err(MatchError::validation(format!(
                "must be at least {} years old",
                MIN_AGE
            )));
        }
        if self.seeking.is_none() {
            return Err(MatchError::validation("seeking preference is required"));
        }
        Ok(age)
    }

    /// Converts the validated form into a full profile update.
    ///
    /// `home_location` is stamped onto the profile; candidates are only ever
    /// queried within it.
    pub fn into_update(
        self,
        home_location: &str,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<ProfileUpdate> {
        let age = self.validate(today)?;
        let birthdate = self.parse_birthdate()?;
        Ok(ProfileUpdate {
            name: Some(self.name.trim().to_string()),
            birthdate: Some(birthdate),
            age: Some(age),
            gender: Some(self.gender),
            seeking: self.seeking,
            bio: Some(self.bio.unwrap_or_default()),
            interests: Some(self.interests.unwrap_or_default()),
            location: Some(home_location.to_string()),
            updated_at: now,
        })
    }
}

/// Self-edit form for an already completed profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileEdit {
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub interests: Option<String>,
    /// `None` when the form's choice group was left unselected
    pub seeking: Option<SeekingPreference>,
}

impl ProfileEdit {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(MatchError::validation("name is required"));
        }
        if self.seeking.is_none() {
            return Err(MatchError::validation("seeking preference is required"));
        }
        Ok(())
    }

    /// Converts the validated edit into a partial profile update.
    pub fn into_update(self, now: DateTime<Utc>) -> Result<ProfileUpdate> {
        self.validate()?;
        Ok(ProfileUpdate {
            name: Some(self.name.trim().to_string()),
            bio: self.bio,
            interests: self.interests,
            seeking: self.seeking,
            ..ProfileUpdate::empty(now)
        })
    }
}
