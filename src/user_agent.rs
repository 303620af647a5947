//! User-Agent composition for outgoing requests.
//!
//! A header value is built from three parts, in order:
//! - the platform tokens (`Rust/<version>` and `(<arch>-<os>-<family>)`);
//! - the caller's runtime tokens, order preserved;
//! - the SDK marker, placed right after the azure runtime token or last.
//!
//! Composition is pure: the caller's tokens are never modified, so repeated
//! calls with the same input yield the same header value.

use crate::constants::{AZURE_RUNTIME, CRATE_TOKEN, RUNTIME_NAME, SDK_MARKER};

/// Description of the platform the client runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformInfo {
    /// Minimum toolchain version declared by the crate (`rust-version`),
    /// not the compiler that built the binary.
    pub toolchain_version: String,
    /// CPU architecture, e.g. `x86_64`.
    pub arch: String,
    /// Operating system, e.g. `linux`.
    pub os: String,
    /// OS family, e.g. `unix`.
    pub family: String,
}

impl PlatformInfo {
    /// Platform information for the running binary.
    #[must_use]
    pub fn current() -> Self {
        Self {
            toolchain_version: env!("CARGO_PKG_RUST_VERSION").to_string(),
            arch: std::env::consts::ARCH.to_string(),
            os: std::env::consts::OS.to_string(),
            family: std::env::consts::FAMILY.to_string(),
        }
    }

    /// `Rust/<version>`, or bare `Rust` when no version is known.
    #[must_use]
    pub fn runtime_token(&self) -> String {
        if self.toolchain_version.is_empty() {
            RUNTIME_NAME.to_string()
        } else {
            format!("{RUNTIME_NAME}/{}", self.toolchain_version)
        }
    }

    /// `(<arch>-<os>-<family>)`. Never contains a space.
    #[must_use]
    pub fn os_token(&self) -> String {
        let raw = format!("({}-{}-{})", self.arch, self.os, self.family);
        raw.split_whitespace().collect::<Vec<_>>().join("_")
    }
}

/// Returns true when `token` identifies the azure runtime (`ms-rest-azure` or
/// `ms-rest-azure/<version>`).
#[must_use]
pub fn is_azure_runtime(token: &str) -> bool {
    token
        .strip_prefix(AZURE_RUNTIME)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Builds the User-Agent header value for `tokens` on `platform`.
///
/// Blank tokens are dropped and the remaining ones trimmed. Platform tokens
/// and the SDK marker are only added when the caller has not supplied them.
#[must_use]
pub fn compose_user_agent<S: AsRef<str>>(tokens: &[S], platform: &PlatformInfo) -> String {
    let supplied: Vec<&str> = tokens
        .iter()
        .map(|t| t.as_ref().trim())
        .filter(|t| !t.is_empty())
        .collect();

    let mut parts: Vec<String> = Vec::with_capacity(supplied.len() + 3);
    for platform_token in [platform.runtime_token(), platform.os_token()] {
        if !supplied.contains(&platform_token.as_str()) {
            parts.push(platform_token);
        }
    }
    let offset = parts.len();
    parts.extend(supplied.iter().map(|t| (*t).to_string()));

    if !supplied.contains(&SDK_MARKER) {
        let insert_at = supplied
            .iter()
            .position(|t| is_azure_runtime(t))
            .map_or(parts.len(), |index| offset + index + 1);
        parts.insert(insert_at, SDK_MARKER.to_string());
    }

    parts.join(" ")
}

/// Composed User-Agent carrying only the crate token, for callers that need
/// a header value without building a filter.
#[must_use]
pub fn default_user_agent() -> String {
    compose_user_agent(&[CRATE_TOKEN], &PlatformInfo::current())
}
