use std::sync::Mutex;

use serde::Deserialize;
use serde_json::json;
use tokio::sync::watch;

use kosha_types::{Credentials, Session};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Remote auth service rejected the request; message comes back verbatim.
    #[error("{0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// `subscribe` may be called at most once per app lifetime.
    #[error("session subscription already taken")]
    SubscriptionTaken,
}

/// Client for the remote managed-auth endpoints.
///
/// Holds the one session the app knows about; every transition (login,
/// logout) is broadcast on a watch channel so the shell can re-evaluate
/// which screen to show. The app never inspects the session beyond presence.
pub struct AuthClient {
    base_url: String,
    api_key: String,
    http: reqwest::Client,
    notify: watch::Sender<Option<Session>>,
    subscription: Mutex<Option<watch::Receiver<Option<Session>>>>,
}

impl AuthClient {
    pub fn new(credentials: &Credentials) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder().build()?;
        let (notify, receiver) = watch::channel(None);

        Ok(Self {
            base_url: credentials.endpoint_url.trim_end_matches('/').to_string(),
            api_key: credentials.api_key.clone(),
            http,
            notify,
            subscription: Mutex::new(Some(receiver)),
        })
    }

    /// Session known to this client, if any. A fresh start has none; the
    /// remote service is the only authority on whether a token is valid.
    pub fn current_session(&self) -> Option<Session> {
        self.notify.borrow().clone()
    }

    /// Take the session-change subscription. At most one per app lifetime.
    pub fn subscribe(&self) -> Result<watch::Receiver<Option<Session>>, AuthError> {
        self.subscription
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take()
            .ok_or(AuthError::SubscriptionTaken)
    }

    /// Password-grant sign-in. On success the new session is stored and
    /// broadcast; on failure the remote message is returned untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let response = self
            .http
            .post(format!("{}/auth/v1/token", self.base_url))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.api_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AuthError::Api(read_error_message(response).await));
        }

        let session: Session = response.json().await?;
        self.notify.send_replace(Some(session.clone()));
        Ok(session)
    }

    /// Create an account. No auto-login: the user confirms via email first.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<(), AuthError> {
        let response = self
            .http
            .post(format!("{}/auth/v1/signup", self.base_url))
            .header("apikey", &self.api_key)
            .json(&json!({
                "email": email,
                "password": password,
                "data": { "full_name": name }
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AuthError::Api(read_error_message(response).await));
        }

        Ok(())
    }

    /// Revoke the current session remotely, then clear it locally. A failed
    /// revoke still clears the local session.
    pub async fn logout(&self) -> Result<(), AuthError> {
        if let Some(session) = self.current_session() {
            let result = self
                .http
                .post(format!("{}/auth/v1/logout", self.base_url))
                .header("apikey", &self.api_key)
                .bearer_auth(&session.access_token)
                .send()
                .await;

            if let Err(e) = result {
                tracing::debug!("logout revoke failed, clearing local session anyway: {e}");
            }
        }

        self.notify.send_replace(None);
        Ok(())
    }
}

/// Error payload shapes the auth service uses, reduced to one message.
#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.error_description.or(self.msg).or(self.message)
    }
}

async fn read_error_message(response: reqwest::Response) -> String {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => body
            .into_message()
            .unwrap_or_else(|| format!("auth request failed with status {status}")),
        Err(_) => format!("auth request failed with status {status}"),
    }
}
