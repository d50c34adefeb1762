//! `CarrierService` resource implementation.
//!
//! Carrier services provide real-time shipping rates to the checkout via a
//! callback URL. They support the full set of CRUD operations.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::RestResource;
//! use shopify_rest::rest::resources::CarrierService;
//!
//! // Register a new carrier service
//! let carrier = CarrierService {
//!     name: Some("Shipping Rate Provider".to_string()),
//!     callback_url: Some("https://rates.example.com/rates".to_string()),
//!     service_discovery: Some(true),
//!     ..Default::default()
//! };
//! let created = carrier.create(&client).await?;
//!
//! // List registered carrier services
//! let carriers = CarrierService::all(&client, None).await?;
//!
//! // Remove one
//! created.delete(&client).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::rest::pagination::PageCursor;
use crate::rest::RestResource;

/// A carrier service registered with a shop.
///
/// The shop calls `callback_url` during checkout to fetch live shipping
/// rates from the service.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CarrierService {
    /// The carrier service ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The name of the carrier service as shown to merchants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the carrier service is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// Whether the shop can discover the service's support endpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_discovery: Option<bool>,

    /// The type of carrier service (`api` or `legacy`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_service_type: Option<String>,

    /// The format of the rate payload (`json` or `xml`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// The URL endpoint the shop queries for shipping rates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

impl RestResource for CarrierService {
    type Id = u64;
    type ListParams = CarrierServiceListParams;

    const NAME: &'static str = "CarrierService";
    const KEY: &'static str = "carrier_service";
    const PLURAL: &'static str = "carrier_services";

    fn id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Parameters for listing carrier services.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CarrierServiceListParams {
    /// Maximum number of results to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Cursor to resume a paginated listing from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}

impl From<PageCursor> for CarrierServiceListParams {
    fn from(cursor: PageCursor) -> Self {
        Self {
            limit: cursor.limit,
            page_info: Some(cursor.page_info),
        }
    }
}
