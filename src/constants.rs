//! Header names and identifier tokens shared by the request pipeline.

pub use reqwest::header::USER_AGENT;

/// Runtime identifier after which the SDK marker is placed.
pub const AZURE_RUNTIME: &str = "ms-rest-azure";

/// Fixed token identifying requests issued through this SDK.
pub const SDK_MARKER: &str = "Azure-SDK-For-Rust";

/// Name of the language runtime in the baseline platform token.
pub const RUNTIME_NAME: &str = "Rust";

/// Token identifying this crate (`msrest/<version>`).
pub const CRATE_TOKEN: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Default HTTP connect timeout (10 seconds).
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default HTTP read timeout (30 seconds).
pub const READ_TIMEOUT_SECS: u64 = 30;
