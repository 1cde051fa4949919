//! GoTrue-backed AuthGateway implementation.
//!
//! Thin wrappers over the backend's auth REST endpoints. On sign-in the
//! session access token is installed on the shared [`SupabaseClient`] so
//! every subsequent table request runs as the signed-in user.

use std::sync::Arc;

use lionmatch_core::auth::{AuthGateway, AuthUser};
use lionmatch_core::error::{MatchError, Result};
use serde::{Deserialize, Serialize};

use crate::supabase::query::Pair;
use crate::supabase::SupabaseClient;

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RecoverRequest<'a> {
    email: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct AuthUserBody {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

/// Response of `signup` and `token`. Depending on project settings the user
/// object arrives nested under `user` (with a session) or as the top-level
/// body, so both shapes are accepted.
#[derive(Debug, Default, Deserialize)]
struct SessionBody {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    user: Option<AuthUserBody>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

impl SessionBody {
    fn into_parts(self) -> Result<(AuthUser, Option<String>)> {
        let (id, email) = match self.user {
            Some(user) => (user.id, user.email),
            None => (self.id, self.email),
        };
        let user = AuthUser {
            id: id.ok_or_else(|| MatchError::auth("auth response missing user id"))?,
            email: email.ok_or_else(|| MatchError::auth("auth response missing email"))?,
        };
        Ok((user, self.access_token))
    }
}

/// Auth access over the Supabase GoTrue REST API.
pub struct RestAuthGateway {
    client: Arc<SupabaseClient>,
}

impl RestAuthGateway {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }

    fn install_session(&self, token: Option<String>) {
        if token.is_some() {
            self.client.set_access_token(token);
        }
    }
}

#[async_trait::async_trait]
impl AuthGateway for RestAuthGateway {
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthUser> {
        let body: SessionBody = self
            .client
            .auth_post("signup", &[], &PasswordGrant { email, password })
            .await?;
        let (user, token) = body.into_parts()?;
        self.install_session(token);
        Ok(user)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser> {
        let grant: Vec<Pair> = vec![("grant_type".to_string(), "password".to_string())];
        let body: SessionBody = self
            .client
            .auth_post("token", &grant, &PasswordGrant { email, password })
            .await?;
        let (user, token) = body.into_parts()?;
        self.install_session(token);
        Ok(user)
    }

    async fn sign_out(&self) -> Result<()> {
        self.client
            .auth_post_no_content("logout", &serde_json::json!({}))
            .await?;
        self.client.set_access_token(None);
        Ok(())
    }

    async fn request_password_reset(&self, email: &str) -> Result<()> {
        self.client
            .auth_post_no_content("recover", &RecoverRequest { email })
            .await
    }

    async fn current_user(&self) -> Result<Option<AuthUser>> {
        if !self.client.has_access_token() {
            return Ok(None);
        }
        match self.client.auth_get::<AuthUserBody>("user").await {
            Ok(body) => {
                let user = AuthUser {
                    id: body
                        .id
                        .ok_or_else(|| MatchError::auth("auth response missing user id"))?,
                    email: body
                        .email
                        .ok_or_else(|| MatchError::auth("auth response missing email"))?,
                };
                Ok(Some(user))
            }
            // An expired or revoked token is simply "no session".
            Err(err) if err.is_auth() => {
                self.client.set_access_token(None);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    async fn delete_user(&self, user_id: &str) -> Result<()> {
        self.client
            .auth_delete(&format!("admin/users/{}", user_id))
            .await
    }
}
