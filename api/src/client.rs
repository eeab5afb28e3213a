//! API client implementation
//!
//! Two pre-configured request channels share one transport. Every response
//! passes through the same failure normalization, the Rust rendering of a
//! response interceptor: a structured `{ "message": ... }` body becomes the
//! failure message, anything else keeps the transport's message text.

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::posts::PostsClient;
use crate::types::ErrorBody;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Supplies the current access token for the private channel
///
/// The provider is consulted per request, so a live session store can
/// rotate tokens without rebuilding the client. No expiry checking or
/// refresh is performed here; an absent token simply means the request is
/// sent without the `authorization` header.
pub trait TokenProvider: Send + Sync {
    /// The current access token, if any
    fn access_token(&self) -> Option<String>;
}

/// Token provider backed by a fixed string
///
/// # Example
///
/// ```
/// use quill_api::{StaticToken, TokenProvider};
///
/// let provider = StaticToken::new("Bearer abc123");
/// assert_eq!(provider.access_token().as_deref(), Some("Bearer abc123"));
/// ```
#[derive(Debug, Clone)]
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    /// Create a provider that always returns the given token
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl TokenProvider for StaticToken {
    fn access_token(&self) -> Option<String> {
        Some(self.token.clone())
    }
}

/// A pre-configured request channel
///
/// Channels accept a relative path plus method-specific payload/params and
/// return the parsed JSON body or a normalized [`ApiError`].
#[derive(Clone)]
pub(crate) struct Channel {
    http: Client,
    base_url: String,
    token_provider: Option<Arc<dyn TokenProvider>>,
}

impl Channel {
    fn new(http: Client, base_url: String, token_provider: Option<Arc<dyn TokenProvider>>) -> Self {
        Self {
            http,
            base_url,
            token_provider,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attach the `authorization` header when a token is available
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token_provider.as_ref().and_then(|p| p.access_token()) {
            Some(token) => request.header("authorization", token),
            None => request,
        }
    }

    pub(crate) async fn get<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let request = self.http.get(self.url(path)).query(query);
        self.execute(request).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.http.post(self.url(path)).json(body);
        self.execute(request).await
    }

    pub(crate) async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.http.patch(self.url(path)).json(body);
        self.execute(request).await
    }

    /// DELETE with an empty success body
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.http.delete(self.url(path));
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(normalize_failure(status, body))
    }

    /// Send a request and parse the JSON response
    ///
    /// Every request on every channel goes through this normalization.
    async fn execute<T>(&self, request: RequestBuilder) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()));
        }

        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), "Request failed");
        Err(normalize_failure(status, body))
    }
}

/// Reduce a non-2xx response to the flat error taxonomy
///
/// A structured `{ "message": ... }` body wins; anything else keeps the
/// status and raw body.
fn normalize_failure(status: StatusCode, body: String) -> ApiError {
    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => ApiError::Api(parsed.message),
        Err(_) => ApiError::Status {
            status: status.as_u16(),
            body,
        },
    }
}

/// The API client: two channels to one base URL
///
/// Reads go through the public channel; mutations go through the private
/// one. Both send and accept JSON.
///
/// # Example
///
/// ```ignore
/// use quill_api::{ApiClient, ApiConfig};
///
/// let client = ApiClient::new(ApiConfig::from_env())?;
/// let posts = client.posts();
/// ```
#[derive(Clone)]
pub struct ApiClient {
    public: Channel,
    private: Channel,
}

impl ApiClient {
    /// Create a client with no token provider
    ///
    /// Private-channel requests are sent without the `authorization` header.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the underlying HTTP client cannot
    /// be constructed (e.g. TLS backend initialization failure).
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        Self::build(config, None)
    }

    /// Create a client whose private channel consults the given provider
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn with_token_provider(
        config: ApiConfig,
        provider: Arc<dyn TokenProvider>,
    ) -> Result<Self, ApiError> {
        Self::build(config, Some(provider))
    }

    fn build(config: ApiConfig, provider: Option<Arc<dyn TokenProvider>>) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let public = Channel::new(http.clone(), config.base_url.clone(), None);
        let private = Channel::new(http, config.base_url, provider);

        Ok(Self { public, private })
    }

    /// The posts endpoint group
    #[must_use]
    pub fn posts(&self) -> PostsClient {
        PostsClient::new(self.public.clone(), self.private.clone())
    }
}
