//! Filter that attaches a composed User-Agent header.

use async_trait::async_trait;
use reqwest::header::HeaderValue;
use tracing::{debug, trace};

use super::RequestFilter;
use crate::constants::USER_AGENT;
use crate::error::RestError;
use crate::user_agent::{PlatformInfo, compose_user_agent};
use crate::web_resource::WebResource;

/// Sets `User-Agent` on requests that do not already carry one.
///
/// The header value is composed once from the runtime tokens given at
/// construction (see [`compose_user_agent`]). A request whose user-agent is
/// already set to a non-empty value passes through untouched.
///
/// # Example
///
/// ```
/// use msrest::{MsRestUserAgentFilter, RequestFilter, WebResource};
///
/// # async fn example() -> Result<(), msrest::RestError> {
/// let filter = MsRestUserAgentFilter::new(&["ms-rest/v1.0.0", "ms-rest-azure/v1.0.0"])?;
/// let request = filter.before(WebResource::default()).await?;
/// assert!(request.header("user-agent").unwrap().contains("Azure-SDK-For-Rust"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MsRestUserAgentFilter {
    user_agent: HeaderValue,
}

impl MsRestUserAgentFilter {
    /// Creates a filter for the current platform.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidHeader`] when a token contains whitespace
    /// or cannot appear in an HTTP header (control characters, non-ASCII).
    pub fn new<S: AsRef<str>>(tokens: &[S]) -> Result<Self, RestError> {
        Self::with_platform(tokens, &PlatformInfo::current())
    }

    /// Creates a filter for an explicit platform description.
    ///
    /// # Errors
    ///
    /// Same as [`MsRestUserAgentFilter::new`].
    pub fn with_platform<S: AsRef<str>>(
        tokens: &[S],
        platform: &PlatformInfo,
    ) -> Result<Self, RestError> {
        if let Some(bad) = tokens
            .iter()
            .map(|t| t.as_ref().trim())
            .find(|t| t.contains(char::is_whitespace))
        {
            return Err(RestError::invalid_header(
                USER_AGENT.as_str(),
                format!("token '{}' contains whitespace", bad.escape_debug()),
            ));
        }
        let composed = compose_user_agent(tokens, platform);
        if !composed.is_ascii() {
            return Err(RestError::invalid_header(
                USER_AGENT.as_str(),
                "tokens must be ASCII",
            ));
        }
        let user_agent = HeaderValue::from_str(&composed)
            .map_err(|e| RestError::invalid_header(USER_AGENT.as_str(), e))?;
        debug!(user_agent = %composed, "user agent composed");
        Ok(Self { user_agent })
    }

    /// The header value attached to untagged requests.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        // Built from a &str, so always visible ASCII.
        self.user_agent.to_str().unwrap_or_default()
    }
}

#[async_trait]
impl RequestFilter for MsRestUserAgentFilter {
    fn name(&self) -> &'static str {
        "user-agent"
    }

    async fn before(&self, mut request: WebResource) -> Result<WebResource, RestError> {
        if request.has_header(USER_AGENT.as_str()) {
            trace!(url = request.url_str(), "user agent already set; leaving unchanged");
            return Ok(request);
        }
        request.headers.insert(USER_AGENT, self.user_agent.clone());
        trace!(url = request.url_str(), "user agent attached");
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_platform() -> PlatformInfo {
        PlatformInfo {
            toolchain_version: "1.88".to_string(),
            arch: "aarch64".to_string(),
            os: "macos".to_string(),
            family: "unix".to_string(),
        }
    }

    #[tokio::test]
    async fn test_before_replaces_empty_user_agent() {
        let filter = MsRestUserAgentFilter::with_platform::<&str>(&[], &fixed_platform()).unwrap();
        let mut resource = WebResource::default();
        resource.set_header("User-Agent", "").unwrap();

        let resource = filter.before(resource).await.unwrap();
        assert_eq!(
            resource.header("user-agent"),
            Some("Rust/1.88 (aarch64-macos-unix) Azure-SDK-For-Rust")
        );
    }

    #[tokio::test]
    async fn test_before_is_stable_across_calls() {
        let filter = MsRestUserAgentFilter::with_platform(&["ms-rest-azure/1"], &fixed_platform())
            .unwrap();
        let first = filter.before(WebResource::default()).await.unwrap();
        let second = filter.before(WebResource::default()).await.unwrap();
        assert_eq!(first.header("user-agent"), second.header("user-agent"));
        assert_eq!(
            first
                .header("user-agent")
                .unwrap()
                .matches("Azure-SDK-For-Rust")
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn test_before_leaves_other_headers_alone() {
        let filter = MsRestUserAgentFilter::new::<&str>(&[]).unwrap();
        let mut resource = WebResource::default();
        resource.set_header("x-ms-client-request-id", "abc").unwrap();

        let resource = filter.before(resource).await.unwrap();
        assert_eq!(resource.header("x-ms-client-request-id"), Some("abc"));
        assert_eq!(resource.headers.len(), 2);
    }

    #[test]
    fn test_new_rejects_token_with_newline() {
        let result = MsRestUserAgentFilter::new(&["evil/1\r\nX-Injected: yes"]);
        assert!(matches!(result, Err(RestError::InvalidHeader { .. })));
    }

    #[test]
    fn test_new_rejects_token_with_inner_space() {
        let result = MsRestUserAgentFilter::new(&["ms-rest-azure/v1.0.0 extra/2"]);
        assert!(matches!(result, Err(RestError::InvalidHeader { .. })));
    }

    #[test]
    fn test_new_rejects_token_with_inner_tab() {
        let result = MsRestUserAgentFilter::new(&["ms-rest/1\tms-rest-azure/1"]);
        assert!(matches!(result, Err(RestError::InvalidHeader { .. })));
    }

    #[test]
    fn test_new_accepts_token_with_surrounding_whitespace() {
        let filter =
            MsRestUserAgentFilter::with_platform(&[" ms-rest-azure/1\t"], &fixed_platform())
                .unwrap();
        let parts: Vec<&str> = filter.user_agent().split(' ').collect();
        let azure = parts.iter().position(|p| *p == "ms-rest-azure/1").unwrap();
        assert_eq!(parts[azure + 1], "Azure-SDK-For-Rust");
    }

    #[test]
    fn test_new_rejects_non_ascii_token() {
        let result = MsRestUserAgentFilter::new(&["caf\u{e9}/1"]);
        assert!(matches!(result, Err(RestError::InvalidHeader { .. })));
    }

    #[test]
    fn test_user_agent_exposes_composed_value() {
        let filter =
            MsRestUserAgentFilter::with_platform(&["ms-rest/v1.0.0"], &fixed_platform()).unwrap();
        assert_eq!(
            filter.user_agent(),
            "Rust/1.88 (aarch64-macos-unix) ms-rest/v1.0.0 Azure-SDK-For-Rust"
        );
        assert_eq!(filter.name(), "user-agent");
    }
}
