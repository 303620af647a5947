//! Integration tests for the User-Agent filter.
//!
//! These tests exercise the filter the way a service client does: a fresh
//! request goes through `before` and the resulting header is inspected.

use msrest::constants::{RUNTIME_NAME, SDK_MARKER, USER_AGENT};
use msrest::{MsRestUserAgentFilter, RequestFilter, WebResource};

const GENERIC_RUNTIME: &str = "ms-rest";
const AZURE_RUNTIME: &str = "ms-rest-azure";

fn runtime_tokens() -> Vec<String> {
    vec![
        format!("{GENERIC_RUNTIME}/v1.0.0"),
        format!("{AZURE_RUNTIME}/v1.0.0"),
    ]
}

#[tokio::test]
async fn test_empty_token_list_constructs_baseline_user_agent() {
    let filter = MsRestUserAgentFilter::new::<String>(&[]).expect("filter should build");
    let resource = filter
        .before(WebResource::default())
        .await
        .expect("before should succeed");

    let ua = resource
        .header(USER_AGENT.as_str())
        .expect("user agent should be set");
    assert!(ua.contains(RUNTIME_NAME), "missing runtime token: {ua}");
    assert!(ua.contains(SDK_MARKER), "missing SDK marker: {ua}");
}

#[tokio::test]
async fn test_existing_user_agent_is_not_modified() {
    let filter = MsRestUserAgentFilter::new(&runtime_tokens()).expect("filter should build");
    let custom_ua = "my custom user agent";
    let mut resource = WebResource::default();
    resource
        .set_header(USER_AGENT.as_str(), custom_ua)
        .expect("custom header is valid");

    let resource = filter.before(resource).await.expect("before should succeed");
    let actual_ua = resource
        .header(USER_AGENT.as_str())
        .expect("user agent should be kept");

    assert_eq!(actual_ua, custom_ua);
    assert!(!actual_ua.contains(RUNTIME_NAME));
    assert!(!actual_ua.contains(SDK_MARKER));
    assert!(!actual_ua.contains(AZURE_RUNTIME));
}

#[tokio::test]
async fn test_existing_user_agent_kept_regardless_of_header_case() {
    let filter = MsRestUserAgentFilter::new(&runtime_tokens()).expect("filter should build");
    let mut resource = WebResource::default();
    resource.set_header("USER-AGENT", "Mixed/1.0").unwrap();

    let resource = filter.before(resource).await.unwrap();
    assert_eq!(resource.header("user-agent"), Some("Mixed/1.0"));
    assert_eq!(resource.headers.get_all(USER_AGENT).iter().count(), 1);
}

#[tokio::test]
async fn test_sdk_marker_inserted_right_after_azure_runtime() {
    let filter = MsRestUserAgentFilter::new(&runtime_tokens()).expect("filter should build");
    let resource = filter
        .before(WebResource::default())
        .await
        .expect("before should succeed");

    let deconstructed: Vec<&str> = resource
        .header(USER_AGENT.as_str())
        .expect("user agent should be set")
        .split(' ')
        .collect();

    let index_of_azure_runtime = deconstructed
        .iter()
        .position(|e| e.starts_with(AZURE_RUNTIME))
        .unwrap_or_else(|| panic!("did not find {AZURE_RUNTIME} in user agent"));
    let index_of_sdk_marker = deconstructed
        .iter()
        .position(|e| *e == SDK_MARKER)
        .unwrap_or_else(|| panic!("did not find {SDK_MARKER} in user agent"));

    assert_eq!(
        index_of_sdk_marker,
        index_of_azure_runtime + 1,
        "{SDK_MARKER} is not in the right place in user agent: {deconstructed:?}"
    );
}

#[tokio::test]
async fn test_token_order_is_preserved() {
    let tokens = ["first/1", "second/2", "third/3"];
    let filter = MsRestUserAgentFilter::new(&tokens).unwrap();
    let resource = filter.before(WebResource::default()).await.unwrap();
    let ua = resource.header(USER_AGENT.as_str()).unwrap();

    let positions: Vec<usize> = tokens
        .iter()
        .map(|t| ua.find(t).expect("token should be present"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "order lost: {ua}");
}
