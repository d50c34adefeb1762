//! `InventoryLevel` resource implementation.
//!
//! Inventory levels represent the quantity of an inventory item available at
//! a specific location.
//!
//! # Composite Key
//!
//! Unlike most resources, `InventoryLevel` has no `id` field. A record is
//! identified by the pair `inventory_item_id` + `location_id`, so mutations
//! go through dedicated associated functions instead of the generic trait
//! methods:
//!
//! - [`InventoryLevel::adjust`] - adjust available quantity by a relative amount
//! - [`InventoryLevel::connect`] - connect an inventory item to a location
//! - [`InventoryLevel::set`] - set the available quantity to an absolute value
//! - [`InventoryLevel::delete_at_location`] - remove the level at a location
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::RestResource;
//! use shopify_rest::rest::resources::{InventoryLevel, InventoryLevelListParams};
//!
//! // List inventory levels, following pagination
//! let params = InventoryLevelListParams {
//!     location_ids: Some("655441491".to_string()),
//!     limit: Some(50),
//!     ..Default::default()
//! };
//! let page = InventoryLevel::all(&client, Some(params)).await?;
//! if let Some(cursor) = page.next_page() {
//!     let next = InventoryLevel::all(&client, Some(cursor.clone().into())).await?;
//! }
//!
//! // Adjust inventory by a relative amount
//! let adjusted = InventoryLevel::adjust(&client, 808950810, 655441491, -5).await?;
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpResponse, RestClient};
use crate::rest::pagination::PageCursor;
use crate::rest::{ResourceError, RestResource};

/// An inventory level: the quantity of an inventory item at a location.
///
/// Identified by the composite key `inventory_item_id` + `location_id`;
/// there is no single `id` field.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InventoryLevel {
    /// The ID of the inventory item. Part of the composite key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_item_id: Option<u64>,

    /// The ID of the location. Part of the composite key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,

    /// The quantity available for sale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<i64>,

    /// When the inventory level was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl InventoryLevel {
    /// Adjusts the inventory level by a relative amount.
    ///
    /// Sends a POST request to `inventory_levels/adjust.json`.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] if the request or response decoding
    /// fails.
    pub async fn adjust(
        client: &RestClient,
        inventory_item_id: u64,
        location_id: u64,
        available_adjustment: i64,
    ) -> Result<Self, ResourceError> {
        let body = serde_json::json!({
            "inventory_item_id": inventory_item_id,
            "location_id": location_id,
            "available_adjustment": available_adjustment
        });

        let response = client.post("inventory_levels/adjust", body, None).await?;
        Self::from_level_response(&response)
    }

    /// Connects an inventory item to a location.
    ///
    /// Sends a POST request to `inventory_levels/connect.json`. When
    /// `relocate_if_necessary` is true and the item is stocked at another
    /// fulfillment-service location, its stock is moved to the new location.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] if the request or response decoding
    /// fails.
    pub async fn connect(
        client: &RestClient,
        inventory_item_id: u64,
        location_id: u64,
        relocate_if_necessary: Option<bool>,
    ) -> Result<Self, ResourceError> {
        let mut body = serde_json::json!({
            "inventory_item_id": inventory_item_id,
            "location_id": location_id
        });
        if let Some(relocate) = relocate_if_necessary {
            body["relocate_if_necessary"] = serde_json::json!(relocate);
        }

        let response = client.post("inventory_levels/connect", body, None).await?;
        Self::from_level_response(&response)
    }

    /// Sets the inventory level to an absolute value.
    ///
    /// Sends a POST request to `inventory_levels/set.json`. When
    /// `disconnect_if_necessary` is true and `available` is 0, the item is
    /// disconnected from the location.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] if the request or response decoding
    /// fails.
    pub async fn set(
        client: &RestClient,
        inventory_item_id: u64,
        location_id: u64,
        available: i64,
        disconnect_if_necessary: Option<bool>,
    ) -> Result<Self, ResourceError> {
        let mut body = serde_json::json!({
            "inventory_item_id": inventory_item_id,
            "location_id": location_id,
            "available": available
        });
        if let Some(disconnect) = disconnect_if_necessary {
            body["disconnect_if_necessary"] = serde_json::json!(disconnect);
        }

        let response = client.post("inventory_levels/set", body, None).await?;
        Self::from_level_response(&response)
    }

    /// Deletes the inventory level at a specific location.
    ///
    /// Sends a DELETE request to `inventory_levels.json` with the composite
    /// key as query parameters, unlike resources whose DELETE takes a path
    /// ID.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] if the deletion fails.
    pub async fn delete_at_location(
        client: &RestClient,
        inventory_item_id: u64,
        location_id: u64,
    ) -> Result<(), ResourceError> {
        let mut query = HashMap::new();
        query.insert(
            "inventory_item_id".to_string(),
            inventory_item_id.to_string(),
        );
        query.insert("location_id".to_string(), location_id.to_string());

        let response = client.delete("inventory_levels", Some(query)).await?;

        if !response.is_ok() {
            return Err(ResourceError::from_http_response(
                response.code,
                &response.body,
                Self::NAME,
                None,
                response.request_id(),
            ));
        }

        Ok(())
    }

    /// Decodes the `inventory_level` envelope of a mutation response.
    fn from_level_response(response: &HttpResponse) -> Result<Self, ResourceError> {
        if !response.is_ok() {
            return Err(ResourceError::from_http_response(
                response.code,
                &response.body,
                Self::NAME,
                None,
                response.request_id(),
            ));
        }

        let request_id = response.request_id().map(ToString::to_string);
        let value = response
            .body
            .get(Self::KEY)
            .ok_or_else(|| ResourceError::UnexpectedBody {
                message: format!("missing key '{}'", Self::KEY),
                request_id: request_id.clone(),
            })?;

        serde_json::from_value(value.clone()).map_err(|e| ResourceError::UnexpectedBody {
            message: format!("failed to deserialize '{}': {e}", Self::KEY),
            request_id,
        })
    }
}

impl RestResource for InventoryLevel {
    // Composite key: there is no usable single ID. The trait's id-based
    // operations report MissingId; use the associated functions instead.
    type Id = u64;
    type ListParams = InventoryLevelListParams;

    const NAME: &'static str = "InventoryLevel";
    const KEY: &'static str = "inventory_level";
    const PLURAL: &'static str = "inventory_levels";

    fn id(&self) -> Option<Self::Id> {
        None
    }
}

/// Parameters for listing inventory levels.
///
/// At least one of `inventory_item_ids` or `location_ids` must be provided
/// on the first page request; follow-up pages are requested with the
/// `page_info` cursor alone.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InventoryLevelListParams {
    /// Comma-separated list of inventory item IDs to retrieve levels for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_item_ids: Option<String>,

    /// Comma-separated list of location IDs to retrieve levels for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_ids: Option<String>,

    /// Maximum number of results to return (default: 50, max: 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Cursor to resume a paginated listing from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,

    /// Show inventory levels updated at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
}

impl From<PageCursor> for InventoryLevelListParams {
    fn from(cursor: PageCursor) -> Self {
        Self {
            limit: cursor.limit,
            page_info: Some(cursor.page_info),
            ..Default::default()
        }
    }
}
