//! Configuration types for the client.
//!
//! This module provides the types used to configure API communication:
//!
//! - [`ClientConfig`]: Optional client settings (API version, host override,
//!   user agent prefix)
//! - [`ClientConfigBuilder`]: A builder for constructing [`ClientConfig`]
//! - [`ShopDomain`]: A validated Shopify shop domain
//! - [`HostUrl`]: A validated alternate host URL
//! - [`ApiVersion`]: The Admin API version to use
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::{ApiVersion, ClientConfig};
//!
//! let config = ClientConfig::builder()
//!     .api_version(ApiVersion::V2025_07)
//!     .user_agent_prefix("MyApp/1.0")
//!     .build();
//!
//! assert_eq!(config.api_version(), &ApiVersion::V2025_07);
//! ```

mod newtypes;
mod version;

pub use newtypes::{HostUrl, ShopDomain};
pub use version::ApiVersion;

/// Configuration for API clients.
///
/// All fields are optional with sensible defaults; an entirely default
/// configuration targets the latest stable API version on the shop's own
/// domain. Values are validated when constructed (see [`ShopDomain`],
/// [`HostUrl`], [`ApiVersion`]), never at request time.
///
/// # Thread Safety
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    host: Option<HostUrl>,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the host URL override, if configured.
    ///
    /// When set, requests are sent to this origin instead of the shop's
    /// `myshopify.com` domain (e.g. when routing through a proxy).
    #[must_use]
    pub const fn host(&self) -> Option<&HostUrl> {
        self.host.as_ref()
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// # Defaults
///
/// - `api_version`: latest stable version
/// - `host`: `None`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    host: Option<HostUrl>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the host URL override.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub const fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ClientConfig`].
    #[must_use]
    pub fn build(self) -> ClientConfig {
        ClientConfig {
            host: self.host,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            user_agent_prefix: self.user_agent_prefix,
        }
    }
}
