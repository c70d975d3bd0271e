//! Playdeck admin API client
//!
//! Wraps a reqwest transport, attaches the stored bearer token, unwraps the
//! server's `{success, data, message}` envelope, and transparently recovers
//! from exactly one failure mode: an expired-but-refreshable access token.
//! Every other failure surfaces to the caller unchanged.

use std::sync::Arc;
use std::time::Duration;

use playdeck_core::credentials::{CredentialStore, Credentials, MemoryCredentialStore};
use playdeck_core::envelope::{ApiEnvelope, ErrorBody};
use reqwest::{Client, ClientBuilder, Method, header};
use serde::Serialize;
use serde_json::Value;

use crate::api::auth::{RefreshRequest, RefreshResponse};
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::session::{LogoutHook, RefreshOutcome, RefreshTicket, SessionGuard};

/// Admin login route; reachable without a stored access token
pub const LOGIN_ROUTE: &str = "/admin/auth/login";

/// Session refresh route; reachable without a stored access token and
/// terminal when it fails (refreshing cannot recover a failed refresh)
pub const REFRESH_ROUTE: &str = "/admin/auth/refresh";

fn is_public_route(path: &str) -> bool {
    path == LOGIN_ROUTE || path == REFRESH_ROUTE
}

pub(crate) enum RequestBody {
    Json(Value),
    Multipart { file_name: String, bytes: Vec<u8> },
}

/// A rebuildable request: replay after a refresh re-reads the token and
/// reconstructs the wire request instead of reusing the stale one
pub(crate) struct ApiRequest {
    method: Method,
    path: String,
    query: Option<Value>,
    body: Option<RequestBody>,
}

impl ApiRequest {
    pub(crate) fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            body: None,
        }
    }

    pub(crate) fn query(mut self, query: &impl Serialize) -> Result<Self, ClientError> {
        self.query = Some(serde_json::to_value(query)?);
        Ok(self)
    }

    pub(crate) fn json(mut self, body: &impl Serialize) -> Result<Self, ClientError> {
        self.body = Some(RequestBody::Json(serde_json::to_value(body)?));
        Ok(self)
    }

    pub(crate) fn file(mut self, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.body = Some(RequestBody::Multipart {
            file_name: file_name.into(),
            bytes,
        });
        self
    }
}

/// Playdeck admin API client
///
/// Cloning is cheap and clones share the same credential store and session
/// recovery state, so concurrent requests across clones still perform at
/// most one refresh.
#[derive(Clone)]
pub struct AdminClient {
    http: Client,
    base_url: String,
    store: Arc<dyn CredentialStore>,
    session: Arc<SessionGuard>,
}

impl AdminClient {
    /// Create a client with default configuration and an in-memory store
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> AdminClientBuilder {
        AdminClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The credential store backing this client
    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    /// Re-arm the logout side effect, e.g. after presenting a fresh login
    pub fn reset_session(&self) {
        self.session.reset();
    }

    /// Generic enveloped request primitive
    ///
    /// Issues `method path` with an optional JSON body, runs the full
    /// authentication-recovery protocol, and returns the unwrapped `data`
    /// payload.
    pub async fn request<T: serde::de::DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ClientError> {
        let mut request = ApiRequest::new(method, path);
        if let Some(body) = body {
            request.body = Some(RequestBody::Json(body));
        }
        self.execute_enveloped(request).await
    }

    // --- typed helpers used by the api modules ---

    pub(crate) async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ClientError> {
        self.execute_enveloped(ApiRequest::new(Method::GET, path))
            .await
    }

    pub(crate) async fn get_with_query<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &impl Serialize,
    ) -> Result<T, ClientError> {
        self.execute_enveloped(ApiRequest::new(Method::GET, path).query(query)?)
            .await
    }

    pub(crate) async fn post<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ClientError> {
        self.execute_enveloped(ApiRequest::new(Method::POST, path).json(body)?)
            .await
    }

    pub(crate) async fn post_empty<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ClientError> {
        self.execute_enveloped(ApiRequest::new(Method::POST, path))
            .await
    }

    pub(crate) async fn post_multipart<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<T, ClientError> {
        self.execute_enveloped(ApiRequest::new(Method::POST, path).file(file_name, bytes))
            .await
    }

    pub(crate) async fn put<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ClientError> {
        self.execute_enveloped(ApiRequest::new(Method::PUT, path).json(body)?)
            .await
    }

    pub(crate) async fn put_empty<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ClientError> {
        self.execute_enveloped(ApiRequest::new(Method::PUT, path))
            .await
    }

    pub(crate) async fn put_with_query<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &impl Serialize,
    ) -> Result<T, ClientError> {
        self.execute_enveloped(ApiRequest::new(Method::PUT, path).query(query)?)
            .await
    }

    pub(crate) async fn delete<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ClientError> {
        self.execute_enveloped(ApiRequest::new(Method::DELETE, path))
            .await
    }

    /// Issue a request against a raw-contract endpoint (no envelope)
    pub(crate) async fn post_raw<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ClientError> {
        let value = self
            .send_with_recovery(&ApiRequest::new(Method::POST, path).json(body)?)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn execute_enveloped<T: serde::de::DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<T, ClientError> {
        let value = self.send_with_recovery(&request).await?;
        let envelope: ApiEnvelope<T> = serde_json::from_value(value)?;
        Ok(envelope.into_data())
    }

    /// The authentication-recovery state machine
    ///
    /// At most one replay per request: a second 401 on the replayed request
    /// is terminal. Every terminal auth failure fires the at-most-once
    /// logout side effect and surfaces as `Unauthenticated`.
    async fn send_with_recovery(&self, request: &ApiRequest) -> Result<Value, ClientError> {
        if self.store.access_token().is_none() && !is_public_route(&request.path) {
            self.session.force_logout(self.store.as_ref());
            return Err(ClientError::Unauthenticated);
        }

        let mut retried = false;
        loop {
            match self.send_once(request).await {
                Ok(value) => return Ok(value),
                Err(ClientError::DomainAuth { code, message }) => {
                    tracing::warn!(%code, %message, "backend rejected credentials");
                    self.session.force_logout(self.store.as_ref());
                    return Err(ClientError::Unauthenticated);
                }
                Err(ClientError::AuthenticationFailed(message)) => {
                    tracing::debug!(%message, "request unauthorized, entering refresh protocol");
                    if request.path == REFRESH_ROUTE || retried {
                        self.session.force_logout(self.store.as_ref());
                        return Err(ClientError::Unauthenticated);
                    }
                    retried = true;
                    match self.session.begin_refresh() {
                        RefreshTicket::Leader => {
                            let outcome = self.run_refresh().await;
                            self.session.finish_refresh(outcome);
                            if outcome == RefreshOutcome::Failed {
                                self.session.force_logout(self.store.as_ref());
                                return Err(ClientError::Unauthenticated);
                            }
                        }
                        RefreshTicket::Waiter(settled) => match settled.await {
                            Ok(RefreshOutcome::Refreshed) => {}
                            Ok(RefreshOutcome::Failed) | Err(_) => {
                                self.session.force_logout(self.store.as_ref());
                                return Err(ClientError::Unauthenticated);
                            }
                        },
                    }
                    // Refresh succeeded; loop around and replay once
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Build and send the wire request once
    ///
    /// The token is re-read from the store on every attempt so a refresh
    /// that landed mid-flight is picked up by the replay.
    async fn send_once(&self, request: &ApiRequest) -> Result<Value, ClientError> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = self.http.request(request.method.clone(), url);

        if let Some(token) = self.store.access_token() {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(query) = &request.query {
            builder = builder.query(query);
        }
        builder = match &request.body {
            Some(RequestBody::Json(body)) => builder.json(body),
            Some(RequestBody::Multipart { file_name, bytes }) => {
                let part = reqwest::multipart::Part::bytes(bytes.clone())
                    .file_name(file_name.clone());
                builder.multipart(reqwest::multipart::Form::new().part("file", part))
            }
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            if text.is_empty() {
                return Ok(Value::Null);
            }
            return Ok(serde_json::from_str(&text)?);
        }

        let body: ErrorBody = serde_json::from_str(&text).unwrap_or_default();
        Err(ClientError::from_response(status, &body, text))
    }

    /// Perform the single-flight refresh call
    ///
    /// Runs outside the recovery path on purpose: a failing refresh must
    /// never recurse into another refresh.
    async fn run_refresh(&self) -> RefreshOutcome {
        let Some(refresh_token) = self.store.refresh_token() else {
            tracing::warn!("access token rejected and no refresh token stored");
            return RefreshOutcome::Failed;
        };

        tracing::debug!("access token rejected, refreshing session");
        let url = format!("{}{}", self.base_url, REFRESH_ROUTE);
        let response = match self
            .http
            .post(url)
            .json(&RefreshRequest { refresh_token })
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(%err, "refresh request failed");
                return RefreshOutcome::Failed;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "refresh rejected by backend");
            return RefreshOutcome::Failed;
        }

        let refreshed: RefreshResponse = match response.json().await {
            Ok(refreshed) => refreshed,
            Err(err) => {
                tracing::warn!(%err, "malformed refresh response");
                return RefreshOutcome::Failed;
            }
        };

        let credentials = Credentials {
            access_token: refreshed.access_token,
            refresh_token: refreshed.refresh_token,
        };
        if let Err(err) = self.store.store(credentials) {
            tracing::warn!(%err, "failed to persist refreshed credentials");
            return RefreshOutcome::Failed;
        }

        tracing::debug!("session refreshed");
        RefreshOutcome::Refreshed
    }
}

impl std::fmt::Debug for AdminClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminClient")
            .field("base_url", &self.base_url)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

/// Builder for [`AdminClient`]
#[derive(Default)]
pub struct AdminClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    store: Option<Arc<dyn CredentialStore>>,
    logout_hook: Option<LogoutHook>,
}

impl AdminClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Apply a [`ClientConfig`]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.base_url = Some(config.base_url);
        self.timeout = config.timeout;
        self.user_agent = Some(config.user_agent);
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Use a custom credential store (defaults to an in-memory store)
    pub fn credential_store(mut self, store: Arc<dyn CredentialStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Install the logout hook fired when the session becomes unrecoverable
    pub fn on_logout(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.logout_hook = Some(Arc::new(hook));
        self
    }

    /// Build the client
    pub fn build(self) -> Result<AdminClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut builder = ClientBuilder::new();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        } else {
            builder = builder.user_agent(ClientConfig::default().user_agent);
        }
        let http = builder.build()?;

        let store = self
            .store
            .unwrap_or_else(|| Arc::new(MemoryCredentialStore::new()));

        Ok(AdminClient {
            http,
            base_url,
            store,
            session: Arc::new(SessionGuard::new(self.logout_hook)),
        })
    }
}

impl std::fmt::Debug for AdminClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminClientBuilder")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}
