//! Request filters applied by [`ServiceClient`](crate::ServiceClient).
//!
//! A filter sees every request before it is sent and every response after it
//! arrives. Both hooks default to pass-through so a filter only implements
//! the side it cares about.

mod user_agent;

use async_trait::async_trait;

use crate::client::HttpOperationResponse;
use crate::error::RestError;
use crate::web_resource::WebResource;

pub use user_agent::MsRestUserAgentFilter;

/// A stage in the request pipeline.
///
/// Implementations must be cheap to share: the client holds them as
/// `Arc<dyn RequestFilter>` and may run them from many tasks at once.
#[async_trait]
pub trait RequestFilter: Send + Sync {
    /// Short name used in logs and [`RestError::Filter`].
    fn name(&self) -> &'static str;

    /// Inspects or rewrites an outgoing request.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] to abort the request.
    async fn before(&self, request: WebResource) -> Result<WebResource, RestError> {
        Ok(request)
    }

    /// Inspects or rewrites a received response.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] to fail the request.
    async fn after(
        &self,
        response: HttpOperationResponse,
    ) -> Result<HttpOperationResponse, RestError> {
        Ok(response)
    }
}
