//! Account lifecycle: registration, login, logout, password reset, deletion.

use std::sync::Arc;

use chrono::Utc;
use lionmatch_core::auth::{AuthGateway, Credentials, RegistrationRequest};
use lionmatch_core::decision::DecisionRepository;
use lionmatch_core::error::{MatchError, Result};
use lionmatch_core::matching::MatchRepository;
use lionmatch_core::message::MessageRepository;
use lionmatch_core::profile::{NewProfile, ProfileRepository};

use crate::session::AppSession;

/// Orchestrates account lifecycle operations against the auth gateway and
/// the per-table repositories.
pub struct AccountService {
    auth: Arc<dyn AuthGateway>,
    profiles: Arc<dyn ProfileRepository>,
    decisions: Arc<dyn DecisionRepository>,
    matches: Arc<dyn MatchRepository>,
    messages: Arc<dyn MessageRepository>,
}

impl AccountService {
    pub fn new(
        auth: Arc<dyn AuthGateway>,
        profiles: Arc<dyn ProfileRepository>,
        decisions: Arc<dyn DecisionRepository>,
        matches: Arc<dyn MatchRepository>,
        messages: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            auth,
            profiles,
            decisions,
            matches,
            messages,
        }
    }

    /// Creates an account and its minimal profile row.
    ///
    /// Validation and the duplicate-email pre-check run before the auth
    /// call. The returned session still needs onboarding.
    pub async fn register(&self, request: &RegistrationRequest) -> Result<AppSession> {
        request.validate()?;

        if self.profiles.email_exists(&request.email).await? {
            return Err(MatchError::validation("email is already registered"));
        }

        let user = self.auth.sign_up(&request.email, &request.password).await?;
        self.profiles
            .create(&NewProfile {
                user_id: user.id.clone(),
                email: request.email.clone(),
                created_at: Utc::now(),
            })
            .await?;

        tracing::info!(user_id = %user.id, "account registered");
        Ok(AppSession::new(user, None))
    }

    /// Signs in and loads the profile. `profile` stays `None` when
    /// onboarding never completed, routing the user back to it.
    pub async fn login(&self, credentials: &Credentials) -> Result<AppSession> {
        let user = self
            .auth
            .sign_in(&credentials.email, &credentials.password)
            .await?;
        let profile = self.profiles.find_by_user_id(&user.id).await?;
        Ok(AppSession::new(user, profile))
    }

    /// Restores the session left by a previous run, if the backend still
    /// honors it.
    pub async fn restore_session(&self) -> Result<Option<AppSession>> {
        let Some(user) = self.auth.current_user().await? else {
            return Ok(None);
        };
        let profile = self.profiles.find_by_user_id(&user.id).await?;
        Ok(Some(AppSession::new(user, profile)))
    }

    pub async fn logout(&self, session: AppSession) -> Result<()> {
        self.auth.sign_out().await?;
        tracing::info!(user_id = %session.user.id, "signed out");
        Ok(())
    }

    pub async fn request_password_reset(&self, email: &str) -> Result<()> {
        self.auth.request_password_reset(email).await
    }

    /// Deletes the account and everything attached to it.
    ///
    /// Order: profile, decisions, matches, messages, then the auth user.
    /// The first failure aborts the teardown and surfaces; already-deleted
    /// tables stay deleted (no rollback).
    pub async fn delete_account(&self, session: AppSession) -> Result<()> {
        let user_id = session.user.id;
        self.profiles.delete_by_user_id(&user_id).await?;
        self.decisions.delete_involving(&user_id).await?;
        self.matches.delete_involving(&user_id).await?;
        self.messages.delete_involving(&user_id).await?;
        self.auth.delete_user(&user_id).await?;
        tracing::info!(%user_id, "account deleted");
        Ok(())
    }
}
