//! Signed-in session context.

use lionmatch_core::auth::AuthUser;
use lionmatch_core::profile::UserProfile;

/// Context for a signed-in user.
///
/// Constructed by the account service on login/registration and dropped on
/// logout; services take it explicitly instead of reaching for process-global
/// state. The profile is `None` until onboarding has completed it.
#[derive(Debug, Clone)]
pub struct AppSession {
    pub user: AuthUser,
    pub profile: Option<UserProfile>,
}

impl AppSession {
    pub fn new(user: AuthUser, profile: Option<UserProfile>) -> Self {
        Self { user, profile }
    }

    /// Whether the user still has to complete onboarding before reaching the
    /// discovery screen.
    pub fn needs_onboarding(&self) -> bool {
        self.profile.is_none()
    }

    pub fn user_id(&self) -> &str {
        &self.user.id
    }
}
