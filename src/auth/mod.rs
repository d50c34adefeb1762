//! Authentication types for API calls.
//!
//! This module provides the [`Session`] type representing an authenticated
//! connection to a shop. How the access token is obtained (OAuth, custom app
//! token, CLI) is outside the scope of this crate; any valid Admin API access
//! token works.
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::{Session, ShopDomain};
//!
//! let session = Session::new(
//!     "session-id".to_string(),
//!     ShopDomain::new("my-store").unwrap(),
//!     "access-token".to_string(),
//!     None, // no expiration
//! );
//!
//! assert!(session.is_active());
//! ```

pub mod session;

pub use session::Session;
