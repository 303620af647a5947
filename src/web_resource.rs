//! Outgoing request description passed through the filter pipeline.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Request};
use url::Url;

use crate::error::RestError;

/// A request as seen by filters: method, target, headers and optional body.
///
/// Header names are case-insensitive, so `User-Agent` and `user-agent`
/// address the same entry.
#[derive(Debug, Clone)]
pub struct WebResource {
    /// HTTP method.
    pub method: Method,
    /// Target URL. Required before the request can be sent.
    pub url: Option<Url>,
    /// Request headers.
    pub headers: HeaderMap,
    /// Optional text body.
    pub body: Option<String>,
}

impl Default for WebResource {
    fn default() -> Self {
        Self {
            method: Method::GET,
            url: None,
            headers: HeaderMap::new(),
            body: None,
        }
    }
}

impl WebResource {
    /// Creates a request for `method` and `url`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidUrl`] when `url` cannot be parsed.
    pub fn new(method: Method, url: &str) -> Result<Self, RestError> {
        let parsed = Url::parse(url).map_err(|source| RestError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        Ok(Self {
            method,
            url: Some(parsed),
            ..Self::default()
        })
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets `name` to `value`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidHeader`] when the name or value is not legal HTTP.
    pub fn set_header(&mut self, name: &str, value: &str) -> Result<(), RestError> {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| RestError::invalid_header(name, e))?;
        let header_value =
            HeaderValue::from_str(value).map_err(|e| RestError::invalid_header(name, e))?;
        self.headers.insert(header_name, header_value);
        Ok(())
    }

    /// Returns the value of `name` when present and valid visible ASCII.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns true when `name` is present with a non-empty value.
    #[must_use]
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.get(name).is_some_and(|v| !v.is_empty())
    }

    /// Target URL as a string, empty when unset. Used for error context.
    #[must_use]
    pub fn url_str(&self) -> &str {
        self.url.as_ref().map_or("", Url::as_str)
    }

    /// Builds a transport request on `client`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::MissingUrl`] when no URL is set, or
    /// [`RestError::Network`] when the request cannot be built.
    pub fn to_request(&self, client: &Client) -> Result<Request, RestError> {
        let url = self.url.clone().ok_or(RestError::MissingUrl)?;
        let mut builder = client
            .request(self.method.clone(), url)
            .headers(self.headers.clone());
        if let Some(body) = &self.body {
            builder = builder.body(body.clone());
        }
        builder
            .build()
            .map_err(|source| RestError::from_transport(self.url_str(), source))
    }
}
