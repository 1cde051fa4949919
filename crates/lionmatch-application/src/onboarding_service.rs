//! Profile completion and self-edit.

use std::sync::Arc;

use chrono::Utc;
use lionmatch_core::error::{MatchError, Result};
use lionmatch_core::profile::{ProfileEdit, ProfileForm, ProfileRepository, UserProfile};

use crate::session::AppSession;

/// Completes a freshly registered profile and applies later self-edits.
pub struct OnboardingService {
    profiles: Arc<dyn ProfileRepository>,
    /// Location stamped onto every onboarded profile; discovery only queries
    /// within it.
    home_location: String,
}

impl OnboardingService {
    pub fn new(profiles: Arc<dyn ProfileRepository>, home_location: impl Into<String>) -> Self {
        Self {
            profiles,
            home_location: home_location.into(),
        }
    }

    /// Validates and persists the onboarding form, then reloads the profile
    /// into the session.
    pub async fn complete_profile(
        &self,
        session: &mut AppSession,
        form: ProfileForm,
    ) -> Result<UserProfile> {
        let now = Utc::now();
        let update = form.into_update(&self.home_location, now.date_naive(), now)?;
        self.profiles.update(session.user_id(), &update).await?;
        let profile = self.reload(session).await?;
        tracing::info!(user_id = %profile.user_id, "profile onboarding completed");
        Ok(profile)
    }

    /// Validates and persists a self-edit, then reloads the profile into the
    /// session.
    pub async fn update_profile(
        &self,
        session: &mut AppSession,
        edit: ProfileEdit,
    ) -> Result<UserProfile> {
        let update = edit.into_update(Utc::now())?;
        self.profiles.update(session.user_id(), &update).await?;
        self.reload(session).await
    }

    /// Fetches `user_id`'s completed profile.
    pub async fn load_profile(&self, user_id: &str) -> Result<UserProfile> {
        self.profiles
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| MatchError::not_found("profile", user_id))
    }

    async fn reload(&self, session: &mut AppSession) -> Result<UserProfile> {
        let profile = self.load_profile(session.user_id()).await?;
        session.profile = Some(profile.clone());
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lionmatch_core::auth::AuthUser;
    use lionmatch_core::profile::{
        CandidateFilter, Gender, NewProfile, ProfileUpdate, SeekingPreference,
    };
    use std::sync::Mutex;

    /// Profile store holding a single row that updates mutate in place.
    struct MockProfileRepository {
        row: Mutex<Option<UserProfile>>,
        updates: Mutex<Vec<ProfileUpdate>>,
    }

    impl MockProfileRepository {
        fn empty() -> Self {
            Self {
                row: Mutex::new(None),
                updates: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl ProfileRepository for MockProfileRepository {
        async fn find_by_user_id(&self, user_id: &str) -> Result<Option<UserProfile>> {
            Ok(self
                .row
                .lock()
                .unwrap()
                .clone()
                .filter(|p| p.user_id == user_id))
        }

        async fn email_exists(&self, _email: &str) -> Result<bool> {
            Ok(false)
        }

        async fn create(&self, _profile: &NewProfile) -> Result<()> {
            Ok(())
        }

        async fn update(&self, user_id: &str, update: &ProfileUpdate) -> Result<()> {
            self.updates.lock().unwrap().push(update.clone());
            let mut row = self.row.lock().unwrap();
            let now = update.updated_at;
            let mut profile = row.clone().unwrap_or(UserProfile {
                user_id: user_id.to_string(),
                name: String::new(),
                age: 0,
                gender: Gender::Female,
                seeking: SeekingPreference::Everyone,
                bio: None,
                interests: None,
                location: String::new(),
                email: "ana@example.com".to_string(),
                created_at: now,
                updated_at: now,
            });
            if let Some(name) = &update.name {
                profile.name = name.clone();
            }
            if let Some(age) = update.age {
                profile.age = age;
            }
            if let Some(gender) = update.gender {
                profile.gender = gender;
            }
            if let Some(seeking) = update.seeking {
                profile.seeking = seeking;
            }
            if let Some(bio) = &update.bio {
                profile.bio = Some(bio.clone()).filter(|b| !b.is_empty());
            }
            if let Some(location) = &update.location {
                profile.location = location.clone();
            }
            profile.updated_at = now;
            *row = Some(profile);
            Ok(())
        }

        async fn find_candidates(&self, _filter: &CandidateFilter) -> Result<Vec<UserProfile>> {
            Ok(Vec::new())
        }

        async fn delete_by_user_id(&self, _user_id: &str) -> Result<()> {
            Ok(())
        }
    }

    fn session() -> AppSession {
        AppSession::new(
            AuthUser {
                id: "u1".to_string(),
                email: "ana@example.com".to_string(),
            },
            None,
        )
    }

    fn form() -> ProfileForm {
        ProfileForm {
            name: "Ana".to_string(),
            birthdate: "1995-04-20".to_string(),
            gender: Gender::Female,
            seeking: Some(SeekingPreference::Men),
            bio: None,
            interests: None,
        }
    }

    #[tokio::test]
    async fn test_complete_profile_fills_session() {
        let repo = Arc::new(MockProfileRepository::empty());
        let service = OnboardingService::new(repo.clone(), "León, Guanajuato");
        let mut session = session();

        let profile = service
            .complete_profile(&mut session, form())
            .await
            .unwrap();

        assert_eq!(profile.name, "Ana");
        assert_eq!(profile.location, "León, Guanajuato");
        assert!(!session.needs_onboarding());

        let updates = repo.updates.lock().unwrap();
        assert_eq!(updates.len(), 1);
        assert!(updates[0].age.is_some());
    }

    #[tokio::test]
    async fn test_complete_profile_rejects_underage_without_network() {
        let repo = Arc::new(MockProfileRepository::empty());
        let service = OnboardingService::new(repo.clone(), "León, Guanajuato");
        let mut session = session();

        let mut underage = form();
        underage.birthdate = "2020-01-01".to_string();
        let err = service
            .complete_profile(&mut session, underage)
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert!(repo.updates.lock().unwrap().is_empty());
        assert!(session.needs_onboarding());
    }

    #[tokio::test]
    async fn test_update_profile_edits_subset() {
        let repo = Arc::new(MockProfileRepository::empty());
        let service = OnboardingService::new(repo.clone(), "León, Guanajuato");
        let mut session = session();
        service
            .complete_profile(&mut session, form())
            .await
            .unwrap();

        let edit = ProfileEdit {
            name: "Ana María".to_string(),
            bio: Some("nueva bio".to_string()),
            interests: None,
            seeking: Some(SeekingPreference::Everyone),
        };
        let profile = service.update_profile(&mut session, edit).await.unwrap();

        assert_eq!(profile.name, "Ana María");
        assert_eq!(profile.bio.as_deref(), Some("nueva bio"));
        assert_eq!(profile.seeking, SeekingPreference::Everyone);
        // Identity fields survive the edit.
        assert_eq!(profile.age, session.profile.as_ref().unwrap().age);
    }

    #[tokio::test]
    async fn test_load_profile_not_found() {
        let repo = Arc::new(MockProfileRepository::empty());
        let service = OnboardingService::new(repo, "León, Guanajuato");

        let err = service.load_profile("missing").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
