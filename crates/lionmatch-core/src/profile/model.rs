//! Profile domain model.
//!
//! Represents the people using the app: the signed-in user's own profile and
//! the candidate profiles presented on the discovery screen.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Gender category recorded on a profile.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// The wire spelling, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Who a user wants to see in their candidate queue.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SeekingPreference {
    Men,
    Women,
    Everyone,
}

impl SeekingPreference {
    /// The gender the candidate query should filter on, or `None` when the
    /// user wants to see everyone.
    pub fn target_gender(&self) -> Option<Gender> {
        match self {
            SeekingPreference::Men => Some(Gender::Male),
            SeekingPreference::Women => Some(Gender::Female),
            SeekingPreference::Everyone => None,
        }
    }
}

/// A user profile, either the signed-in user's own or a candidate's.
///
/// Owned by the backend; the client holds read-only copies with best-effort
/// freshness (re-fetched on screen entry, never invalidated in place).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct UserProfile {
    /// Opaque, stable, unique identifier (UUID format)
    pub user_id: String,
    /// Display name
    pub name: String,
    /// Derived from birthdate at onboarding time
    pub age: u8,
    pub gender: Gender,
    pub seeking: SeekingPreference,
    /// Free-text biography
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Free-text interests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<String>,
    /// Location label used for candidate filtering
    pub location: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Calendar-accurate age on `today` for someone born on `birthdate`.
///
/// The year difference is reduced by one when the birthday has not yet
/// occurred this year. Returns 0 for birthdates in the future.
pub fn age_on(birthdate: NaiveDate, today: NaiveDate) -> u8 {
    let mut age = today.year() - birthdate.year();
    if (today.month(), today.day()) < (birthdate.month(), birthdate.day()) {
        age -= 1;
    }
    age.max(0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_after_birthday() {
        assert_eq!(age_on(date(1990, 3, 10), date(2024, 6, 1)), 34);
    }

    #[test]
    fn test_age_before_birthday() {
        assert_eq!(age_on(date(1990, 9, 10), date(2024, 6, 1)), 33);
    }

    #[test]
    fn test_age_on_birthday() {
        assert_eq!(age_on(date(2000, 6, 1), date(2024, 6, 1)), 24);
    }

    #[test]
    fn test_age_future_birthdate_is_zero() {
        assert_eq!(age_on(date(2030, 1, 1), date(2024, 6, 1)), 0);
    }

    #[test]
    fn test_target_gender_mapping() {
        assert_eq!(SeekingPreference::Men.target_gender(), Some(Gender::Male));
        assert_eq!(
            SeekingPreference::Women.target_gender(),
            Some(Gender::Female)
        );
        assert_eq!(SeekingPreference::Everyone.target_gender(), None);
    }
}
