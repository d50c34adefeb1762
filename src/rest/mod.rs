//! REST resource infrastructure.
//!
//! This module provides the typed resource layer on top of the REST client:
//!
//! - **[`pagination`]**: cursor-based pagination resolved from the `Link`
//!   response header: [`Pagination`], [`PageCursor`], [`PaginationError`]
//! - **[`RestResource`] trait**: a standardized interface for list/get/
//!   create/delete operations
//! - **[`ResourceResponse<T>`]**: a Deref-based wrapper combining data with
//!   pagination and rate-limit metadata
//! - **[`ResourceError`]**: semantic error types for resource operations
//! - **[`resources`]**: concrete resource implementations
//!
//! # Example: paging through a collection
//!
//! ```rust,ignore
//! use shopify_rest::rest::RestResource;
//! use shopify_rest::rest::resources::{InventoryLevel, InventoryLevelListParams};
//!
//! let params = InventoryLevelListParams {
//!     location_ids: Some("655441491".to_string()),
//!     limit: Some(50),
//!     ..Default::default()
//! };
//!
//! let mut page = InventoryLevel::all(&client, Some(params)).await?;
//! loop {
//!     for level in page.iter() {
//!         println!("{:?}: {:?} available", level.inventory_item_id, level.available);
//!     }
//!     let Some(cursor) = page.next_page() else { break };
//!     page = InventoryLevel::all(&client, Some(cursor.clone().into())).await?;
//! }
//! ```

mod errors;
pub mod pagination;
mod resource;
mod response;

pub mod resources;

pub use errors::ResourceError;
pub use pagination::{PageCursor, Pagination, PaginationError};
pub use resource::RestResource;
pub use response::ResourceResponse;
