//! Typed HTTP client for the admin API

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    handlers::{
        admin::{AdminSummary, CreateAdminResponse, MessageResponse},
        auth::{AdminProfile, CurrentAdminResponse, SignInResponse},
        users::CreateUserResponse,
    },
    models::User,
};

use super::{moderators::NewModerator, session::Session};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client error
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message} (status {status})")]
    Api { status: u16, message: String },

    #[error("Not signed in")]
    NotSignedIn,

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ClientError {
    /// HTTP status for API errors
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Serialize)]
struct SignInBody<'a> {
    email: &'a str,
    password: &'a str,
}

/// Admin API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = base_url.into();
        let base_url = Url::parse(&base_url).map_err(|_| ClientError::InvalidBaseUrl(base_url))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self { http, base_url })
    }

    /// Endpoint URL; every segment is percent-encoded as a single path segment
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn authorized(&self, request: RequestBuilder, session: &Session) -> Result<RequestBuilder, ClientError> {
        let token = session.token().ok_or(ClientError::NotSignedIn)?;
        Ok(request.bearer_auth(token))
    }

    /// Sign in and store the result in `session`
    pub async fn sign_in(
        &self,
        session: &mut Session,
        email: &str,
        password: &str,
    ) -> Result<AdminProfile, ClientError> {
        info!(email = %email, "Signing in");

        let response = self
            .http
            .post(self.url(&["auth", "signin"]))
            .json(&SignInBody { email, password })
            .send()
            .await?;
        let body: SignInResponse = parse(response).await?;

        session.sign_in(body.admin.clone(), body.token);
        Ok(body.admin)
    }

    /// Fetch the admin the session token belongs to
    pub async fn current_admin(&self, session: &Session) -> Result<AdminProfile, ClientError> {
        let request = self.authorized(self.http.get(self.url(&["auth", "me"])), session)?;
        let body: CurrentAdminResponse = parse(request.send().await?).await?;
        Ok(body.admin)
    }

    pub async fn create_moderator(
        &self,
        session: &Session,
        moderator: &NewModerator,
    ) -> Result<AdminProfile, ClientError> {
        info!(admin_id = %moderator.admin_id, "Creating moderator");

        let request = self.authorized(self.http.post(self.url(&["auth", "create"])), session)?;
        let body: CreateAdminResponse = parse(request.json(moderator).send().await?).await?;
        Ok(body.admin)
    }

    pub async fn list_admins(&self, session: &Session) -> Result<Vec<AdminSummary>, ClientError> {
        let request = self.authorized(self.http.get(self.url(&["auth", "admins"])), session)?;
        parse(request.send().await?).await
    }

    pub async fn delete_admin(&self, session: &Session, admin_id: &str) -> Result<String, ClientError> {
        info!(admin_id = %admin_id, "Deleting admin");

        let url = self.url(&["auth", "admins", admin_id]);
        let request = self.authorized(self.http.delete(url), session)?;
        let body: MessageResponse = parse(request.send().await?).await?;
        Ok(body.message)
    }

    pub async fn list_users(&self, session: &Session) -> Result<Vec<User>, ClientError> {
        let request = self.authorized(self.http.get(self.url(&["users"])), session)?;
        parse(request.send().await?).await
    }

    pub async fn create_user(&self, session: &Session, user: &User) -> Result<User, ClientError> {
        let request = self.authorized(self.http.post(self.url(&["users"])), session)?;
        let body: CreateUserResponse = parse(request.json(user).send().await?).await?;
        Ok(body.user)
    }

    pub async fn delete_user(&self, session: &Session, user_id: &str) -> Result<String, ClientError> {
        let url = self.url(&["users", user_id]);
        let request = self.authorized(self.http.delete(url), session)?;
        let body: MessageResponse = parse(request.send().await?).await?;
        Ok(body.message)
    }
}

/// Decode a success body, or turn an error body into [`ClientError::Api`]
async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&text)
        .map(|body| body.message)
        .unwrap_or(text);
    debug!(status = status.as_u16(), message = %message, "API request failed");

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash() {
        let client = ApiClient::new("http://localhost:8000/").unwrap();
        assert_eq!(
            client.url(&["auth", "signin"]).as_str(),
            "http://localhost:8000/auth/signin"
        );

        let prefixed = ApiClient::new("http://localhost:8000/api/").unwrap();
        assert_eq!(
            prefixed.url(&["users"]).as_str(),
            "http://localhost:8000/api/users"
        );
    }

    #[test]
    fn test_ids_stay_in_one_segment() {
        let client = ApiClient::new("http://localhost:8000").unwrap();
        let url = client.url(&["auth", "admins", "mod?x/y#z"]);

        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
        assert_eq!(url.path_segments().map(|s| s.count()), Some(3));
        assert_eq!(url.path(), "/auth/admins/mod%3Fx%2Fy%23z");
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            ApiClient::new("mailto:ops@inventory.com"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_authorized_requires_token() {
        let client = ApiClient::new("http://localhost:8000").unwrap();
        let session = Session::new();
        let result = client.authorized(client.http.get(client.url(&["users"])), &session);
        assert!(matches!(result, Err(ClientError::NotSignedIn)));
    }

    #[test]
    fn test_client_error_status() {
        let err = ClientError::Api {
            status: 403,
            message: "Super admin access required".to_string(),
        };
        assert_eq!(err.status(), Some(403));
        assert_eq!(ClientError::NotSignedIn.status(), None);
    }
}
