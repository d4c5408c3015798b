//! HTTP client for the family roster API

use anyhow::{Context, Result};
use kindred_core::api::{AuthResponse, ErrorResponse, LoginRequest, RegisterRequest};
use kindred_core::session::Session;
use kindred_core::member::roster_from_json;
use kindred_core::{FamilyMember, MemberForm, MemberId};
use reqwest::{RequestBuilder, Response};
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 15;

/// HTTP client for the roster API
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl Client {
    /// Client without credentials, for login and registration
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Client that sends the session's bearer token
    pub fn authenticated(base_url: &str, session: &Session) -> Result<Self> {
        let mut client = Self::new(base_url)?;
        client.token = Some(session.token.clone());
        Ok(client)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_auth(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// POST /auth/login
    pub async fn login(&self, req: &LoginRequest) -> Result<AuthResponse> {
        log::debug!("POST /auth/login as {}", req.username);
        let resp = self
            .http
            .post(self.url("/auth/login"))
            .json(req)
            .send()
            .await
            .context("Server error. Please try again.")?;

        let resp = check(resp, "Authentication failed").await?;
        Ok(resp.json().await.context("Malformed login response")?)
    }

    /// POST /auth/register
    pub async fn register(&self, req: &RegisterRequest) -> Result<()> {
        log::debug!("POST /auth/register as {}", req.username);
        let resp = self
            .http
            .post(self.url("/auth/register"))
            .json(req)
            .send()
            .await
            .context("Server error. Please try again.")?;

        check(resp, "Authentication failed").await?;
        Ok(())
    }

    /// GET /family-members
    pub async fn list_members(&self) -> Result<Vec<FamilyMember>> {
        let resp = self
            .with_auth(self.http.get(self.url("/family-members")))
            .send()
            .await
            .context("Failed to fetch family members")?;

        let resp = check(resp, "Failed to fetch family members").await?;
        let body = resp.text().await.context("Failed to fetch family members")?;
        let members = roster_from_json(&body).context("Failed to fetch family members")?;

        log::debug!("fetched {} family members", members.len());
        Ok(members)
    }

    /// POST /family-members
    pub async fn create_member(&self, form: &MemberForm) -> Result<()> {
        let resp = self
            .with_auth(self.http.post(self.url("/family-members")))
            .json(form)
            .send()
            .await
            .context("Failed to add member")?;

        check(resp, "Failed to add member").await?;
        Ok(())
    }

    /// PUT /family-members/:id
    pub async fn update_member(&self, id: &MemberId, form: &MemberForm) -> Result<()> {
        let resp = self
            .with_auth(self.http.put(self.url(&format!("/family-members/{}", id))))
            .json(form)
            .send()
            .await
            .context("Failed to update member")?;

        check(resp, "Failed to update member").await?;
        Ok(())
    }

    /// DELETE /family-members/:id
    pub async fn delete_member(&self, id: &MemberId) -> Result<()> {
        let resp = self
            .with_auth(self.http.delete(self.url(&format!("/family-members/{}", id))))
            .send()
            .await
            .context("Failed to delete member")?;

        check(resp, "Failed to delete member").await?;
        Ok(())
    }
}

/// Turn a non-2xx response into an error carrying the server's message,
/// falling back to `fallback` and the status code.
async fn check(resp: Response, fallback: &str) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    log::warn!("request failed with {}: {}", status, body);

    match ErrorResponse::message_from(&body) {
        Some(message) => anyhow::bail!("{}", message),
        None => anyhow::bail!("{} ({})", fallback, status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = Client::new("http://localhost:3000/api/").unwrap();
        assert_eq!(client.url("/family-members"), "http://localhost:3000/api/family-members");
    }

    #[test]
    fn test_member_urls_use_id_display() {
        let client = Client::new("http://localhost:3000/api").unwrap();
        let id = MemberId::from("42");
        assert_eq!(
            client.url(&format!("/family-members/{}", id)),
            "http://localhost:3000/api/family-members/42"
        );
        assert_eq!(
            client.url(&format!("/family-members/{}", MemberId::from("007"))),
            "http://localhost:3000/api/family-members/007"
        );
    }
}
