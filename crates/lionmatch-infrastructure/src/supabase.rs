//! Thin Supabase REST client.
//!
//! Wraps `reqwest` with the headers and conventions of the two Supabase
//! surfaces the client uses: the PostgREST table API (`/rest/v1/…`) and the
//! GoTrue auth API (`/auth/v1/…`). Repositories build their queries from the
//! filter helpers in [`query`] and stay free of HTTP details beyond this
//! module.

use std::sync::RwLock;

use lionmatch_core::error::{MatchError, Result};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::BackendSecrets;

/// PostgREST filter and clause builders.
///
/// Each helper returns a `(key, value)` query pair in PostgREST syntax.
pub mod query {
    use std::fmt::Display;

    pub type Pair = (String, String);

    /// `column=eq.value`
    pub fn eq(column: &str, value: impl Display) -> Pair {
        (column.to_string(), format!("eq.{}", value))
    }

    /// `column=not.in.(v1,v2,…)`
    pub fn not_in(column: &str, values: &[String]) -> Pair {
        (column.to_string(), format!("not.in.({})", values.join(",")))
    }

    /// `or=(expr)` — `expr` is a comma-separated PostgREST condition list.
    pub fn or_where(expr: impl Into<String>) -> Pair {
        ("or".to_string(), format!("({})", expr.into()))
    }

    /// `order=column.desc`
    pub fn order_desc(column: &str) -> Pair {
        ("order".to_string(), format!("{}.desc", column))
    }

    /// `order=column.asc`
    pub fn order_asc(column: &str) -> Pair {
        ("order".to_string(), format!("{}.asc", column))
    }

    /// `limit=n`
    pub fn limit(n: usize) -> Pair {
        ("limit".to_string(), n.to_string())
    }

    /// `select=columns` — plain columns or embedded-resource expressions.
    pub fn select(columns: &str) -> Pair {
        ("select".to_string(), columns.to_string())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_filter_syntax() {
            assert_eq!(eq("user_id", "u1"), ("user_id".into(), "eq.u1".into()));
            assert_eq!(
                not_in("user_id", &["a".into(), "b".into()]),
                ("user_id".into(), "not.in.(a,b)".into())
            );
            assert_eq!(
                or_where("user1_id.eq.u1,user2_id.eq.u1"),
                ("or".into(), "(user1_id.eq.u1,user2_id.eq.u1)".into())
            );
            assert_eq!(order_desc("created_at"), ("order".into(), "created_at.desc".into()));
            assert_eq!(limit(20), ("limit".into(), "20".into()));
        }
    }
}

/// Shared HTTP client for the Supabase project.
///
/// Holds the anon key and, once a user has signed in, the session access
/// token. All table and auth requests flow through here so the bearer token
/// is applied uniformly.
pub struct SupabaseClient {
    http: Client,
    base_url: String,
    anon_key: String,
    access_token: RwLock<Option<String>>,
}

impl SupabaseClient {
    pub fn new(secrets: &BackendSecrets) -> Self {
        Self {
            http: Client::new(),
            base_url: secrets.url.trim_end_matches('/').to_string(),
            anon_key: secrets.anon_key.clone(),
            access_token: RwLock::new(None),
        }
    }

    /// Installs the session token applied to subsequent requests.
    /// `None` reverts to the anon key.
    pub fn set_access_token(&self, token: Option<String>) {
        *self.access_token.write().unwrap() = token;
    }

    fn bearer(&self) -> String {
        self.access_token
            .read()
            .unwrap()
            .clone()
            .unwrap_or_else(|| self.anon_key.clone())
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", self.anon_key.clone())
            .bearer_auth(self.bearer())
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    async fn check(response: Response, context: &str) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Err(MatchError::auth(format!("{}: {} {}", context, status, body)))
        } else {
            Err(MatchError::network(format!(
                "{}: {} {}",
                context, status, body
            )))
        }
    }

    /// Like [`check`](Self::check), but for the auth API, where any 4xx
    /// (rejected credentials, expired session, unknown user) is an auth
    /// failure rather than a transport problem.
    async fn check_auth(response: Response, context: &str) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        if status.is_client_error() {
            Err(MatchError::auth(format!("{}: {} {}", context, status, body)))
        } else {
            Err(MatchError::network(format!(
                "{}: {} {}",
                context, status, body
            )))
        }
    }

    /// Whether a session token is currently installed.
    pub fn has_access_token(&self) -> bool {
        self.access_token.read().unwrap().is_some()
    }

    // ------------------------------------------------------------------
    // PostgREST table API
    // ------------------------------------------------------------------

    /// `GET /rest/v1/{table}` with the given query pairs.
    pub async fn table_select<T: DeserializeOwned>(
        &self,
        table: &str,
        pairs: &[query::Pair],
    ) -> Result<Vec<T>> {
        let response = self
            .request(Method::GET, self.rest_url(table))
            .query(pairs)
            .send()
            .await
            .map_err(|e| MatchError::network(e.to_string()))?;
        let response = Self::check(response, table).await?;
        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| MatchError::network(format!("{}: invalid response body: {}", table, e)))
    }

    /// Like [`table_select`](Self::table_select) but capped at one row.
    pub async fn table_select_one<T: DeserializeOwned>(
        &self,
        table: &str,
        pairs: &[query::Pair],
    ) -> Result<Option<T>> {
        let mut pairs = pairs.to_vec();
        pairs.push(query::limit(1));
        let rows = self.table_select(table, &pairs).await?;
        Ok(rows.into_iter().next())
    }

    /// `POST /rest/v1/{table}`. With `on_conflict` the insert becomes an
    /// upsert merging duplicates on the named columns.
    pub async fn table_insert<B: Serialize>(
        &self,
        table: &str,
        row: &B,
        on_conflict: Option<&str>,
    ) -> Result<()> {
        let mut request = self
            .request(Method::POST, self.rest_url(table))
            .header("Prefer", match on_conflict {
                Some(_) => "return=minimal,resolution=merge-duplicates",
                None => "return=minimal",
            })
            .json(row);
        if let Some(columns) = on_conflict {
            request = request.query(&[("on_conflict", columns)]);
        }
        let response = request
            .send()
            .await
            .map_err(|e| MatchError::network(e.to_string()))?;
        Self::check(response, table).await?;
        Ok(())
    }

    /// `PATCH /rest/v1/{table}` applying `body` to the rows matching the
    /// filter pairs.
    pub async fn table_update<B: Serialize>(
        &self,
        table: &str,
        pairs: &[query::Pair],
        body: &B,
    ) -> Result<()> {
        let response = self
            .request(Method::PATCH, self.rest_url(table))
            .query(pairs)
            .header("Prefer", "return=minimal")
            .json(body)
            .send()
            .await
            .map_err(|e| MatchError::network(e.to_string()))?;
        Self::check(response, table).await?;
        Ok(())
    }

    /// `DELETE /rest/v1/{table}` for the rows matching the filter pairs.
    pub async fn table_delete(&self, table: &str, pairs: &[query::Pair]) -> Result<()> {
        let response = self
            .request(Method::DELETE, self.rest_url(table))
            .query(pairs)
            .send()
            .await
            .map_err(|e| MatchError::network(e.to_string()))?;
        Self::check(response, table).await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // GoTrue auth API
    // ------------------------------------------------------------------

    /// `POST /auth/v1/{path}` with a JSON body, decoding a JSON response.
    pub async fn auth_post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        pairs: &[query::Pair],
        body: &B,
    ) -> Result<T> {
        let response = self
            .request(Method::POST, self.auth_url(path))
            .query(pairs)
            .json(body)
            .send()
            .await
            .map_err(|e| MatchError::network(e.to_string()))?;
        let response = Self::check_auth(response, path).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| MatchError::network(format!("{}: invalid response body: {}", path, e)))
    }

    /// `POST /auth/v1/{path}` with a JSON body, ignoring the response body.
    pub async fn auth_post_no_content<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let response = self
            .request(Method::POST, self.auth_url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| MatchError::network(e.to_string()))?;
        Self::check_auth(response, path).await?;
        Ok(())
    }

    /// `GET /auth/v1/{path}`, decoding a JSON response.
    pub async fn auth_get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .request(Method::GET, self.auth_url(path))
            .send()
            .await
            .map_err(|e| MatchError::network(e.to_string()))?;
        let response = Self::check_auth(response, path).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| MatchError::network(format!("{}: invalid response body: {}", path, e)))
    }

    /// `DELETE /auth/v1/{path}`.
    pub async fn auth_delete(&self, path: &str) -> Result<()> {
        let response = self
            .request(Method::DELETE, self.auth_url(path))
            .send()
            .await
            .map_err(|e| MatchError::network(e.to_string()))?;
        Self::check_auth(response, path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SupabaseClient {
        SupabaseClient::new(&BackendSecrets {
            url: "https://example.supabase.co/".to_string(),
            anon_key: "anon".to_string(),
        })
    }

    #[test]
    fn test_urls_strip_trailing_slash() {
        let client = client();
        assert_eq!(
            client.rest_url("profiles"),
            "https://example.supabase.co/rest/v1/profiles"
        );
        assert_eq!(
            client.auth_url("token"),
            "https://example.supabase.co/auth/v1/token"
        );
    }

    #[test]
    fn test_bearer_falls_back_to_anon_key() {
        let client = client();
        assert_eq!(client.bearer(), "anon");

        client.set_access_token(Some("jwt".to_string()));
        assert_eq!(client.bearer(), "jwt");

        client.set_access_token(None);
        assert_eq!(client.bearer(), "anon");
    }
}
