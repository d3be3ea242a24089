//! Duolingo REST client
//!
//! Three endpoints are used:
//! - `POST /login` exchanges username and password for a JWT
//! - `GET /users/{username}` returns user data, including the streak
//! - `GET /2017-06-30/users/{id}/xp_summaries` returns daily summaries
//!
//! Each client owns its own HTTP session (cookies included).

use duosync_domain::constants::{
    CAPTCHA_MARKER_KEY, JWT_HEADER, LOGIN_FAILURE_KEY, LOGIN_PATH, USERS_PATH,
    XP_SUMMARIES_API_VERSION, XP_SUMMARIES_START_DATE,
};
use duosync_domain::schema::parse_json;
use duosync_domain::{AccountConfig, DuoSyncError, HttpConfig, LoginMethod, Session};
use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::errors::ApiError;
use crate::errors::InfraError;
use crate::http::HttpClient;

/// Raw response parts the status checks need.
struct RawResponse {
    headers: HeaderMap,
    body: String,
}

/// Client for the handful of Duolingo endpoints we need
#[derive(Clone)]
pub struct DuolingoClient {
    http: HttpClient,
    base_url: Url,
    user_agent: String,
}

impl DuolingoClient {
    /// Create a client on top of an existing HTTP session
    pub fn new(
        http: HttpClient,
        base_url: &str,
        user_agent: impl Into<String>,
    ) -> Result<Self, DuoSyncError> {
        let base_url = Url::parse(base_url).map_err(InfraError::from)?;
        if base_url.cannot_be_a_base() {
            return Err(DuoSyncError::Config(format!("base URL cannot have paths: {base_url}")));
        }
        Ok(Self { http, base_url, user_agent: user_agent.into() })
    }

    /// Create a client with a fresh HTTP session built from `config`
    pub fn from_config(config: &HttpConfig) -> Result<Self, DuoSyncError> {
        Self::new(HttpClient::from_config(config)?, &config.base_url, config.user_agent.clone())
    }

    /// Authenticate.
    ///
    /// A configured JWT is reused without any request. Otherwise the password
    /// is exchanged for a token, which the caller should store.
    #[instrument(skip(self, account), fields(username = %account.username))]
    pub async fn login(&self, account: &AccountConfig) -> Result<Session, DuoSyncError> {
        if let Some(jwt) = account.jwt.as_deref().filter(|jwt| !jwt.trim().is_empty()) {
            debug!("reusing configured JWT");
            return Ok(Session { jwt: jwt.to_string(), method: LoginMethod::Jwt });
        }

        let password = account.password.as_deref().ok_or_else(|| {
            DuoSyncError::Config("a password is required when no JWT is configured".into())
        })?;

        let url = self.endpoint(&[LOGIN_PATH.trim_start_matches('/')])?;
        let body = json!({ "login": account.username, "password": password });
        let response = self.dispatch(Method::POST, url, None, Some(&body)).await?;

        let payload = parse_json(&response.body)?;
        if payload.get(LOGIN_FAILURE_KEY).is_some() {
            return Err(ApiError::LoginFailed(format!(
                "credentials for '{}' were rejected",
                account.username
            ))
            .into());
        }

        let jwt = response
            .headers
            .get(JWT_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ApiError::LoginFailed("login response carried no JWT".into()))?;

        info!("logged in with password");
        Ok(Session { jwt: jwt.to_string(), method: LoginMethod::Password })
    }

    /// Raw user data for `username`
    #[instrument(skip(self, session))]
    pub async fn fetch_user_data(
        &self,
        session: &Session,
        username: &str,
    ) -> Result<Value, DuoSyncError> {
        let url = self.endpoint(&[USERS_PATH.trim_start_matches('/'), username])?;
        let response = self.dispatch(Method::GET, url, Some(session), None).await?;
        parse_json(&response.body)
    }

    /// Raw XP summaries for `user_id`, covering the whole account lifetime
    #[instrument(skip(self, session))]
    pub async fn fetch_summaries(
        &self,
        session: &Session,
        user_id: u64,
    ) -> Result<Value, DuoSyncError> {
        let id = user_id.to_string();
        let mut url = self.endpoint(&[
            XP_SUMMARIES_API_VERSION,
            USERS_PATH.trim_start_matches('/'),
            &id,
            "xp_summaries",
        ])?;
        url.query_pairs_mut().append_pair("startDate", XP_SUMMARIES_START_DATE);

        let response = self.dispatch(Method::GET, url, Some(session), None).await?;
        parse_json(&response.body)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, DuoSyncError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| DuoSyncError::Config(format!("invalid base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn dispatch(
        &self,
        method: Method,
        url: Url,
        session: Option<&Session>,
        body: Option<&Value>,
    ) -> Result<RawResponse, ApiError> {
        let mut request =
            self.http.request(method, url.clone()).header(reqwest::header::USER_AGENT, &self.user_agent);
        if let Some(session) = session {
            request = request.header(AUTHORIZATION, format!("Bearer {}", session.jwt));
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = self.http.send(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await.map_err(|err| DuoSyncError::from(InfraError::from(err)))?;

        check_status(status, &url, &body)?;
        Ok(RawResponse { headers, body })
    }
}

fn check_status(status: StatusCode, url: &Url, body: &str) -> Result<(), ApiError> {
    if status.is_success() {
        return Ok(());
    }

    let path = url.path();
    match status {
        StatusCode::UNAUTHORIZED => {
            Err(ApiError::Unauthorized(format!("not authorized to access {path}")))
        }
        StatusCode::NOT_FOUND => Err(ApiError::NotFound(format!("{path} does not exist"))),
        StatusCode::FORBIDDEN if demands_captcha(body) => {
            warn!(%path, "request blocked behind a captcha");
            Err(ApiError::Captcha(format!(
                "request to {path} was blocked; log in again with a different user agent"
            )))
        }
        StatusCode::TOO_MANY_REQUESTS => Err(ApiError::RateLimit(format!("{path} returned 429"))),
        status if status.is_server_error() => {
            Err(ApiError::Server(format!("{path} returned {status}")))
        }
        status => Err(ApiError::Client(format!("{path} returned {status}"))),
    }
}

fn demands_captcha(body: &str) -> bool {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get(CAPTCHA_MARKER_KEY).map(|marker| !marker.is_null()))
        .unwrap_or(false)
}
