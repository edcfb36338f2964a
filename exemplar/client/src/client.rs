//! HTTP transport for the generated bindings.
//!
//! This module provides the [`Client`] struct the generated services borrow.
//! It exposes exactly the three operations the bindings call:
//! [`Client::new_request`], [`Client::new_multipart_request`] and
//! [`Client::do_json`].

use std::collections::BTreeMap;
use std::time::Duration;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{Span, debug, instrument};
use url::Url;

use crate::error::{ApiError, ClientError};
use crate::generated::Services;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.vanta.com";

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("exemplar-client/", env!("CARGO_PKG_VERSION"));

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const JSON_MEDIA_TYPE: &str = "application/json";

/// Characters left as-is in a path segment: unreserved plus the sub-delims
/// that are legal inside a segment.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'=')
    .remove(b':')
    .remove(b'@');

/// Percent-encodes a value for use as a single path segment.
///
/// ## Examples
///
/// ```
/// use exemplar_client::encode_path_segment;
///
/// assert_eq!(encode_path_segment("ctl_123"), "ctl_123");
/// assert_eq!(encode_path_segment("a/b c"), "a%2Fb%20c");
/// ```
pub fn encode_path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT_ENCODE_SET).to_string()
}

/// Builder for configuring a [`Client`].
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: String,
    bearer_token: Option<String>,
    user_agent: String,
    timeout: Duration,
    http_client: Option<reqwest::Client>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            bearer_token: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            http_client: None,
        }
    }
}

impl ClientBuilder {
    /// Sets the base URL every request path is joined onto.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// let client = Client::builder()
    ///     .base_url("https://api.example.com/v2")
    ///     .build()?;
    /// ```
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sends `Authorization: Bearer <token>` with every request.
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Overrides the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the request timeout. Ignored when [`http_client`](Self::http_client) is used.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Uses a preconfigured `reqwest::Client` instead of building one.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the [`Client`].
    ///
    /// ## Errors
    ///
    /// Returns `ClientError::InvalidUrl` for an empty or unparsable base URL,
    /// and `ClientError::Http` if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<Client, ClientError> {
        let trimmed = self.base_url.trim();
        if trimmed.is_empty() {
            return Err(ClientError::InvalidUrl("base URL must not be empty".to_string()));
        }
        let base_url = Url::parse(trimmed)
            .map_err(|e| ClientError::InvalidUrl(format!("{trimmed}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(format!(
                "{trimmed}: not a hierarchical URL"
            )));
        }

        let http = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder().timeout(self.timeout).build()?,
        };

        Ok(Client {
            http,
            base_url,
            bearer_token: self.bearer_token,
            user_agent: self.user_agent,
        })
    }
}

/// Async HTTP client used by the generated services.
///
/// Cloning is cheap; the underlying connection pool is shared.
///
/// ## Examples
///
/// ```rust,ignore
/// use exemplar_client::Client;
///
/// let client = Client::builder().bearer_token(token).build()?;
/// let health = client.services().health().health().await?;
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    bearer_token: Option<String>,
    user_agent: String,
}

impl Client {
    /// Creates a new builder with the default base URL and timeout.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Creates a client with default settings and no bearer token.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self, ClientError> {
        Self::builder().build()
    }

    /// Returns the base URL for this client.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the registry of generated services.
    pub fn services(&self) -> Services<'_> {
        Services::new(self)
    }

    /// Builds a request with an optional JSON body.
    ///
    /// `path` is joined onto the base URL path; `query` pairs are appended in
    /// order.
    ///
    /// ## Errors
    ///
    /// Returns `ClientError::Serialization` if the body cannot be encoded and
    /// `ClientError::Http` if the request cannot be built.
    pub fn new_request<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<reqwest::Request, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.request_url(path, query);
        let mut builder = self.base_request(method, url);

        if let Some(body) = body {
            let bytes =
                serde_json::to_vec(body).map_err(|e| ClientError::Serialization(e.to_string()))?;
            builder = builder.header(CONTENT_TYPE, JSON_MEDIA_TYPE).body(bytes);
        }

        Ok(builder.build()?)
    }

    /// Builds a `multipart/form-data` request with one text part per field.
    ///
    /// ## Errors
    ///
    /// Returns `ClientError::Http` if the request cannot be built.
    pub fn new_multipart_request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        fields: &BTreeMap<String, String>,
    ) -> Result<reqwest::Request, ClientError> {
        let url = self.request_url(path, query);
        let form = fields
            .iter()
            .fold(reqwest::multipart::Form::new(), |form, (name, value)| {
                form.text(name.clone(), value.clone())
            });

        Ok(self.base_request(method, url).multipart(form).build()?)
    }

    /// Executes a request and decodes the JSON response body.
    ///
    /// A `204 No Content` or empty body decodes as JSON `null`; for generated
    /// response structs it decodes as an empty object instead.
    ///
    /// ## Errors
    ///
    /// Returns:
    /// - `ClientError::Http` if the request fails to send or the body fails to read
    /// - `ClientError::Api` if the server returns a non-success status
    /// - `ClientError::Json` if the body is not the expected JSON
    #[instrument(
        name = "api_request",
        skip_all,
        fields(
            http.method = %request.method(),
            http.url = %request.url(),
            http.status_code = tracing::field::Empty,
        )
    )]
    pub async fn do_json<T>(&self, request: reqwest::Request) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        debug!(method = %request.method(), url = %request.url(), "sending request");
        let response = self.http.execute(request).await?;

        let status = response.status();
        Span::current().record("http.status_code", status.as_u16());

        if !status.is_success() {
            let error = ApiError::from_response(response).await;
            debug!(status = error.status, "request failed");
            return Err(error.into());
        }

        let body = response.bytes().await?;
        if status == StatusCode::NO_CONTENT || body.iter().all(u8::is_ascii_whitespace) {
            return decode_empty();
        }

        Ok(serde_json::from_slice(&body)?)
    }

    fn base_request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        let builder = self
            .http
            .request(method, url)
            .header(ACCEPT, JSON_MEDIA_TYPE)
            .header(USER_AGENT, self.user_agent.as_str());

        match &self.bearer_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Joins `path` onto the base URL path and replaces the query.
    fn request_url(&self, path: &str, query: &[(&str, String)]) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!(
            "{}/{}",
            url.path().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        url.set_path(&joined);
        url.set_query(None);
        url.set_fragment(None);

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        url
    }
}

/// Decodes an absent body: `null` first, then an empty object.
fn decode_empty<T: DeserializeOwned>() -> Result<T, ClientError> {
    serde_json::from_value(Value::Null)
        .or_else(|_| serde_json::from_value(Value::Object(Map::new())))
        .map_err(ClientError::from)
}
