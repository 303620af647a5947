//! Service client that runs requests through the filter pipeline.
//!
//! The client is designed to be created once and reused, taking advantage of
//! connection pooling in the underlying `reqwest::Client`.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};

use crate::constants::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS};
use crate::error::RestError;
use crate::filters::{MsRestUserAgentFilter, RequestFilter};
use crate::web_resource::WebResource;

/// Response returned by [`ServiceClient::send_request`].
#[derive(Debug, Clone)]
pub struct HttpOperationResponse {
    /// The request as it was sent, after all `before` hooks ran.
    pub request: WebResource,
    /// Response status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body decoded as text.
    pub body: String,
}

/// Builder for [`ServiceClient`].
///
/// # Example
///
/// ```
/// use msrest::ServiceClientBuilder;
///
/// # fn example() -> Result<(), msrest::RestError> {
/// let client = ServiceClientBuilder::new()
///     .user_agent_tokens(&["my-service/1.2.0"])?
///     .connect_timeout_secs(5)
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ServiceClientBuilder {
    connect_timeout_secs: u64,
    read_timeout_secs: u64,
    filters: Vec<Arc<dyn RequestFilter>>,
    user_agent_filter: Option<Arc<dyn RequestFilter>>,
}

impl Default for ServiceClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceClientBuilder {
    /// Creates a builder with default timeouts and no custom filters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connect_timeout_secs: CONNECT_TIMEOUT_SECS,
            read_timeout_secs: READ_TIMEOUT_SECS,
            filters: Vec::new(),
            user_agent_filter: None,
        }
    }

    /// Sets the connect timeout in seconds.
    #[must_use]
    pub fn connect_timeout_secs(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    /// Sets the read timeout in seconds. It bounds each read and the whole
    /// request.
    #[must_use]
    pub fn read_timeout_secs(mut self, secs: u64) -> Self {
        self.read_timeout_secs = secs;
        self
    }

    /// Uses `tokens` for the User-Agent filter instead of an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidHeader`] when a token is not a legal header value.
    pub fn user_agent_tokens<S: AsRef<str>>(mut self, tokens: &[S]) -> Result<Self, RestError> {
        self.user_agent_filter = Some(Arc::new(MsRestUserAgentFilter::new(tokens)?));
        Ok(self)
    }

    /// Appends a filter. Filters run after the User-Agent filter, in the
    /// order they were added.
    #[must_use]
    pub fn filter(mut self, filter: Arc<dyn RequestFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] when the User-Agent filter or the HTTP client
    /// cannot be constructed.
    pub fn build(self) -> Result<ServiceClient, RestError> {
        let user_agent_filter: Arc<dyn RequestFilter> = match self.user_agent_filter {
            Some(filter) => filter,
            None => Arc::new(MsRestUserAgentFilter::new::<&str>(&[])?),
        };
        let mut filters = Vec::with_capacity(self.filters.len() + 1);
        filters.push(user_agent_filter);
        filters.extend(self.filters);

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .timeout(Duration::from_secs(self.read_timeout_secs))
            .read_timeout(Duration::from_secs(self.read_timeout_secs))
            .gzip(true)
            .build()
            .map_err(|source| RestError::Network {
                url: String::new(),
                source,
            })?;

        debug!(
            filters = filters.len(),
            connect_timeout_secs = self.connect_timeout_secs,
            read_timeout_secs = self.read_timeout_secs,
            "service client built"
        );
        Ok(ServiceClient { client, filters })
    }
}

/// HTTP client with an ordered request filter pipeline.
#[derive(Clone)]
pub struct ServiceClient {
    client: Client,
    filters: Vec<Arc<dyn RequestFilter>>,
}

impl std::fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.filters.iter().map(|filter| filter.name()).collect();
        f.debug_struct("ServiceClient")
            .field("filters", &names)
            .finish_non_exhaustive()
    }
}

impl ServiceClient {
    /// Creates a client with default settings and the given User-Agent tokens.
    ///
    /// # Errors
    ///
    /// See [`ServiceClientBuilder::build`].
    pub fn new<S: AsRef<str>>(user_agent_tokens: &[S]) -> Result<Self, RestError> {
        ServiceClientBuilder::new()
            .user_agent_tokens(user_agent_tokens)?
            .build()
    }

    /// Names of the configured filters, in execution order.
    #[must_use]
    pub fn filter_names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Runs every `before` hook on `request` without sending it.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a filter.
    pub async fn prepare_request(&self, mut request: WebResource) -> Result<WebResource, RestError> {
        for filter in &self.filters {
            request = filter.before(request).await?;
        }
        Ok(request)
    }

    /// Sends `request` through the pipeline.
    ///
    /// `before` hooks run in order, then the request is sent, then `after`
    /// hooks run in reverse order.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] when a filter fails, the request has no URL, or
    /// the transport fails.
    #[instrument(level = "debug", skip(self, request), fields(method = %request.method, url = request.url_str()))]
    pub async fn send_request(
        &self,
        request: WebResource,
    ) -> Result<HttpOperationResponse, RestError> {
        let request = self.prepare_request(request).await?;
        let outgoing = request.to_request(&self.client)?;

        let response = self
            .client
            .execute(outgoing)
            .await
            .map_err(|source| RestError::from_transport(request.url_str(), source))?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .map_err(|source| RestError::from_transport(request.url_str(), source))?;
        debug!(status = status.as_u16(), bytes = body.len(), "response received");

        let mut operation = HttpOperationResponse {
            request,
            status,
            headers,
            body,
        };
        for filter in self.filters.iter().rev() {
            operation = filter.after(operation).await?;
        }
        Ok(operation)
    }
}
