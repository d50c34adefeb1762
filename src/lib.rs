//! # Shopify Admin REST Client
//!
//! A Rust client for the Shopify Admin REST API, providing type-safe
//! configuration, an async HTTP client with retry handling, typed resource
//! operations, and strict cursor-based pagination resolved from the `Link`
//! response header.
//!
//! ## Overview
//!
//! This crate provides:
//! - Validated configuration newtypes via [`ClientConfig`], [`ShopDomain`],
//!   [`HostUrl`], and [`ApiVersion`]
//! - [`Session`] for authenticated API calls
//! - An async HTTP client with rate-limit retry handling ([`HttpClient`])
//! - A REST convenience client ([`RestClient`])
//! - Typed resources with list/get/create/delete operations
//!   ([`rest::RestResource`])
//! - Cursor-based pagination with a strict error taxonomy
//!   ([`rest::Pagination`])
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::{InventoryLevel, InventoryLevelListParams};
//! use shopify_rest::rest::RestResource;
//! use shopify_rest::{RestClient, Session, ShopDomain};
//!
//! // Create a session for the shop
//! let session = Session::new(
//!     "session-id".to_string(),
//!     ShopDomain::new("my-store")?,
//!     "access-token".to_string(),
//!     None,
//! );
//!
//! let client = RestClient::new(&session, None);
//!
//! // List inventory levels and walk the pages
//! let params = InventoryLevelListParams {
//!     location_ids: Some("655441491".to_string()),
//!     limit: Some(50),
//!     ..Default::default()
//! };
//!
//! let mut page = InventoryLevel::all(&client, Some(params)).await?;
//! while let Some(cursor) = page.next_page() {
//!     page = InventoryLevel::all(&client, Some(cursor.clone().into())).await?;
//! }
//! ```
//!
//! ## Pagination
//!
//! List endpoints return their cursor state in the `Link` response header.
//! [`rest::Pagination::from_link_header`] resolves that header into typed
//! [`rest::PageCursor`]s, classifying each malformed-input case into a
//! distinct [`rest::PaginationError`] variant. Resolution is atomic: a list
//! call with an unresolvable header fails outright rather than returning
//! partial pagination.
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: newtypes and request builders validate on construction
//! - **Thread-safe**: all types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at the crate root for convenience
pub use auth::Session;
pub use config::{ApiVersion, ClientConfig, ClientConfigBuilder, HostUrl, ShopDomain};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiCallLimit, DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
    RestClient, RestError,
};

// Re-export the pagination core and resource layer
pub use rest::{
    PageCursor, Pagination, PaginationError, ResourceError, ResourceResponse, RestResource,
};
