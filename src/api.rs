//! Platform API client
//!
//! Thin asynchronous client for the Microlearn gateway: authentication,
//! profile capture, and AI course suggestions. Requests attach the stored
//! session token as a bearer-style credential; a 401 is retried once with
//! the alternate scheme label before surfacing an error.

use crate::session::SessionStore;
use crate::{Error, Result};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Default API gateway address
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Environment variable overriding the API gateway address
pub const BASE_URL_ENV: &str = "MICROLEARN_API_URL";

/// Authorization scheme labels, in the order they are presented
///
/// The gateway accepts both labels; some deployments behind older proxies
/// only recognize the second.
pub const AUTH_SCHEMES: &[AuthScheme] = &[AuthScheme::Bearer, AuthScheme::Jwt];

/// Recognized token locations in a login response, in priority order
const TOKEN_PATHS: &[&[&str]] = &[
    &["token"],
    &["access_token"],
    &["jwt"],
    &["data", "token"],
    &["data", "access_token"],
    &["auth", "token"],
];

/// Authorization header scheme label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// Standard `Bearer` prefix
    Bearer,
    /// Legacy `JWT` prefix
    Jwt,
}

impl AuthScheme {
    /// Header prefix for this scheme
    pub fn label(&self) -> &'static str {
        match self {
            AuthScheme::Bearer => "Bearer",
            AuthScheme::Jwt => "JWT",
        }
    }
}

/// Extract a session token from a login response body
///
/// Gateways differ in where they put the token. The recognized locations are
/// tried in priority order and the first non-empty string wins; a body with
/// no token in any location yields `None`.
pub fn extract_token(body: &Value) -> Option<String> {
    'paths: for path in TOKEN_PATHS {
        let mut node = body;
        for key in *path {
            match node.get(key) {
                Some(next) => node = next,
                None => continue 'paths,
            }
        }
        if let Some(token) = node.as_str() {
            if !token.is_empty() {
                return Some(token.to_string());
            }
        }
    }
    None
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Account data returned by a successful login
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserInfo {
    /// Server-side account id
    #[serde(default)]
    pub id: Option<i64>,
    /// Account email
    #[serde(default)]
    pub email: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Account creation timestamp as sent by the gateway
    #[serde(default)]
    pub created_at: Option<String>,
    /// Previous login timestamp as sent by the gateway
    #[serde(default)]
    pub last_login_at: Option<String>,
}

impl UserInfo {
    /// Last-login timestamp formatted for display
    ///
    /// Falls back to the raw server string when it is not an ISO timestamp.
    pub fn last_login_display(&self) -> Option<String> {
        self.last_login_at.as_deref().map(format_timestamp)
    }
}

fn format_timestamp(raw: &str) -> String {
    if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(raw) {
        return ts.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(ts) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return ts.format("%Y-%m-%d %H:%M").to_string();
    }
    raw.to_string()
}

/// Result of a successful login
#[derive(Debug, Clone, Default)]
pub struct LoginOutcome {
    /// Account data when the gateway includes it
    pub user: Option<UserInfo>,
}

/// Working-professional profile submission
#[derive(Debug, Clone, Default, Serialize)]
pub struct WorkingProfessionalProfile {
    /// Current job title
    pub current_role: String,
    /// Employer name
    pub organization: String,
    /// Career interest free text
    pub interested_profession: String,
}

/// College-student profile submission
///
/// The form-side field names differ from the wire contract: the gateway
/// spells `specialization` with a z and calls the institution `college`.
/// The serde renames hold that translation in one place.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CollegeStudentProfile {
    /// Degree programme (e.g. "B.E.")
    pub degree: String,
    /// Branch of study
    #[serde(rename = "specialization")]
    pub specialisation: String,
    /// Institution name
    #[serde(rename = "college")]
    pub college_organization: String,
    /// Career interest free text
    pub interested_profession: String,
}

/// AI course suggestion from the dashboard endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseSuggestion {
    /// Server-side course id
    #[serde(default)]
    pub id: i64,
    /// URL-safe course identifier
    #[serde(default)]
    pub slug: String,
    /// Course title
    #[serde(default)]
    pub title: String,
    /// One-line course description
    #[serde(default)]
    pub short_description: String,
    /// Difficulty level (e.g. "beginner")
    #[serde(default)]
    pub level: String,
    /// Topic tags
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Dashboard payload with personalized course suggestions
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dashboard {
    /// Suggested courses, best match first
    #[serde(default)]
    pub suggestions: Vec<CourseSuggestion>,
}

/// HTTP client for the Microlearn gateway
///
/// Holds a reqwest client (with a cookie store, so cookie-session gateways
/// work without a token), the gateway base URL, and the session store the
/// token is read from and written to.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    /// Create a client for the given gateway address
    pub fn new(base_url: &str, session: Arc<dyn SessionStore>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .cookie_store(true)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// Create a client configured from `MICROLEARN_API_URL`, falling back to
    /// the default local gateway address
    pub fn from_env(session: Arc<dyn SessionStore>) -> Result<Self> {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url, session)
    }

    /// Gateway base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a session token is currently stored
    pub fn has_session(&self) -> bool {
        self.session.get().is_some()
    }

    /// Log in with email and password
    ///
    /// On success the session token, when present in the response, is
    /// persisted through the session store. Gateways running pure cookie
    /// sessions return no token; that is not an error.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        let body = serde_json::to_value(LoginRequest { email, password })?;
        let payload = self
            .request_json(Method::POST, "/api/auth/login", Some(body))
            .await?;

        let Some(payload) = payload else {
            return Ok(LoginOutcome::default());
        };

        match extract_token(&payload) {
            Some(token) => {
                self.session.set(&token)?;
                debug!("Session token persisted");
            }
            None => {
                debug!("Login response carried no token, relying on cookie session");
            }
        }

        let user = payload.get("user").cloned().map(|value| {
            serde_json::from_value(value).unwrap_or_else(|e| {
                debug!("Unrecognized user payload: {}", e);
                UserInfo::default()
            })
        });

        Ok(LoginOutcome { user })
    }

    /// End the server session and clear the stored token
    ///
    /// The token is cleared locally even when the server call fails.
    pub async fn logout(&self) -> Result<()> {
        if let Err(e) = self
            .request_json(Method::POST, "/api/auth/logout", Some(serde_json::json!({})))
            .await
        {
            debug!("Logout request failed: {}", e);
        }
        self.session.clear()
    }

    /// Submit a working-professional profile
    pub async fn save_working_professional(
        &self,
        profile: &WorkingProfessionalProfile,
    ) -> Result<()> {
        let body = serde_json::to_value(profile)?;
        self.request_json(Method::POST, "/api/profile/working-professional", Some(body))
            .await?;
        Ok(())
    }

    /// Submit a college-student profile
    pub async fn save_college_student(&self, profile: &CollegeStudentProfile) -> Result<()> {
        let body = serde_json::to_value(profile)?;
        self.request_json(Method::POST, "/api/profile/college-student", Some(body))
            .await?;
        Ok(())
    }

    /// Fetch the personalized course dashboard
    pub async fn get_dashboard(&self) -> Result<Dashboard> {
        let payload = self
            .request_json(Method::GET, "/api/suggest/dashboard", None)
            .await?;

        let Some(payload) = payload else {
            return Ok(Dashboard::default());
        };

        Ok(serde_json::from_value(payload).unwrap_or_else(|e| {
            debug!("Unrecognized dashboard payload: {}", e);
            Dashboard::default()
        }))
    }

    /// Send a request and interpret the response
    ///
    /// With no stored token the request goes out once, unauthenticated. With
    /// a token, a 401 is retried with each remaining scheme label before the
    /// response is interpreted; the scheme list grants one retry.
    pub(crate) async fn request_json(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Option<Value>> {
        let url = format!("{}{}", self.base_url, path);
        let token = self.session.get();

        let Some(token) = token else {
            let response = self.send(&method, &url, body.as_ref(), None).await?;
            return Self::interpret(response).await;
        };

        let mut response = self
            .send(&method, &url, body.as_ref(), Some((AUTH_SCHEMES[0], &token)))
            .await?;

        for scheme in &AUTH_SCHEMES[1..] {
            if response.status() != reqwest::StatusCode::UNAUTHORIZED {
                break;
            }
            warn!(
                "Request to {} rejected with 401, retrying with {} scheme",
                path,
                scheme.label()
            );
            response = self
                .send(&method, &url, body.as_ref(), Some((*scheme, &token)))
                .await?;
        }

        Self::interpret(response).await
    }

    async fn send(
        &self,
        method: &Method,
        url: &str,
        body: Option<&Value>,
        auth: Option<(AuthScheme, &str)>,
    ) -> Result<reqwest::Response> {
        let mut request = self.http.request(method.clone(), url);

        if let Some((scheme, token)) = auth {
            request = request.header(
                reqwest::header::AUTHORIZATION,
                format!("{} {}", scheme.label(), token),
            );
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        Ok(request.send().await?)
    }

    /// Map a response to a parsed body or an error
    ///
    /// Bodies that are not valid JSON count as a null payload. Non-success
    /// statuses become `Error::Http` with the body's `message` or `error`
    /// field, or `HTTP <status>` when neither is usable.
    async fn interpret(response: reqwest::Response) -> Result<Option<Value>> {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let payload: Option<Value> = serde_json::from_str(&text).ok();

        if status.is_success() {
            return Ok(payload);
        }

        let message = error_message(payload.as_ref(), status.as_u16());
        Err(Error::Http {
            status: status.as_u16(),
            message,
        })
    }
}

fn error_message(payload: Option<&Value>, status: u16) -> String {
    payload
        .and_then(|body| {
            ["message", "error"].iter().find_map(|key| {
                body.get(key)
                    .and_then(Value::as_str)
                    .filter(|msg| !msg.is_empty())
            })
        })
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status))
}
