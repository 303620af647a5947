//! msrest client runtime
//!
//! This library provides the request pipeline used by generated service
//! clients: a request description ([`WebResource`]), the [`RequestFilter`]
//! seam, and a [`ServiceClient`] that runs filters around each HTTP call.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`user_agent`] - User-Agent composition from runtime tokens
//! - [`filters`] - Request filters, including [`MsRestUserAgentFilter`]
//! - [`web_resource`] - Outgoing request description
//! - [`client`] - Pooled HTTP client running the filter pipeline
//! - [`error`] - Error type shared by all modules

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod constants;
pub mod error;
pub mod filters;
pub mod user_agent;
pub mod web_resource;

// Re-export commonly used types
pub use client::{HttpOperationResponse, ServiceClient, ServiceClientBuilder};
pub use error::RestError;
pub use filters::{MsRestUserAgentFilter, RequestFilter};
pub use user_agent::{PlatformInfo, compose_user_agent, default_user_agent};
pub use web_resource::WebResource;
