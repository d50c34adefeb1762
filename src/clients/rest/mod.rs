//! REST API client for the Shopify Admin API.
//!
//! This module provides a higher-level REST client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) that offers convenient methods
//! for interacting with the REST Admin API.
//!
//! # Overview
//!
//! - [`RestClient`]: The REST API client with `get()`, `post()`, `put()`,
//!   `delete()` methods
//! - [`RestError`]: Error type for REST API operations
//!
//! # Path Normalization
//!
//! The client normalizes paths before sending:
//!
//! - Leading slashes are stripped: `/carrier_services` -> `carrier_services`
//! - A single `.json` suffix is guaranteed:
//!   `carrier_services` -> `carrier_services.json`
//! - Empty paths are rejected with [`RestError::InvalidPath`]
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::{RestClient, Session, ShopDomain};
//!
//! let session = Session::new(
//!     "session-id".to_string(),
//!     ShopDomain::new("my-store").unwrap(),
//!     "access-token".to_string(),
//!     None,
//! );
//!
//! let client = RestClient::new(&session, None);
//!
//! let response = client.get("carrier_services", None).await?;
//! println!("Carrier services: {}", response.body);
//! ```

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
