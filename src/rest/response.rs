//! Response wrapper for REST resource operations.
//!
//! [`ResourceResponse<T>`] combines resource data with the metadata of the
//! response it came from: the resolved [`Pagination`], rate limit
//! information, and the request ID. It implements `Deref` for transparent
//! access to the inner data.
//!
//! # Example
//!
//! ```rust,ignore
//! let response = InventoryLevel::all(&client, None).await?;
//!
//! // Iterate directly (Vec method via Deref)
//! for level in response.iter() {
//!     println!("{:?} available", level.available);
//! }
//!
//! // Follow the next page
//! if let Some(cursor) = response.next_page() {
//!     let params = InventoryLevelListParams::from(cursor.clone());
//!     let next = InventoryLevel::all(&client, Some(params)).await?;
//! }
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;

use crate::clients::{ApiCallLimit, HttpResponse};
use crate::rest::pagination::{PageCursor, Pagination};
use crate::rest::ResourceError;

/// A response from a REST resource operation.
///
/// Implements `Deref<Target = T>` so methods of the inner data can be
/// called directly on the wrapper. For single resources `T` is the resource
/// type; for collections it is `Vec<Resource>`.
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    /// The resource data.
    data: T,
    /// Pagination resolved from the `Link` header.
    pagination: Pagination,
    /// Rate limit information from the API call limit header.
    rate_limit: Option<ApiCallLimit>,
    /// Request ID from the `X-Request-Id` header.
    request_id: Option<String>,
}

impl<T> ResourceResponse<T> {
    /// Creates a new `ResourceResponse` with the given data and metadata.
    #[must_use]
    pub const fn new(
        data: T,
        pagination: Pagination,
        rate_limit: Option<ApiCallLimit>,
        request_id: Option<String>,
    ) -> Self {
        Self {
            data,
            pagination,
            rate_limit,
            request_id,
        }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns a reference to the inner data.
    ///
    /// In most cases Deref coercion can be used instead.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns `true` if there is a next page of results.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.pagination.next.is_some()
    }

    /// Returns `true` if there is a previous page of results.
    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.pagination.previous.is_some()
    }

    /// Returns the cursor for the next page, if available.
    ///
    /// Feed this into the resource's list params to fetch the next page.
    #[must_use]
    pub const fn next_page(&self) -> Option<&PageCursor> {
        self.pagination.next.as_ref()
    }

    /// Returns the cursor for the previous page, if available.
    #[must_use]
    pub const fn previous_page(&self) -> Option<&PageCursor> {
        self.pagination.previous.as_ref()
    }

    /// Returns the full resolved pagination state.
    #[must_use]
    pub const fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Returns the rate limit information, if available.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&ApiCallLimit> {
        self.rate_limit.as_ref()
    }

    /// Returns the request ID from the response headers.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Maps the inner data to a new type, preserving metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            pagination: self.pagination,
            rate_limit: self.rate_limit,
            request_id: self.request_id,
        }
    }
}

impl<T: DeserializeOwned> ResourceResponse<T> {
    /// Creates a `ResourceResponse` from an HTTP response.
    ///
    /// Resolves the `Link` header into [`Pagination`] FIRST, then extracts
    /// and deserializes the data under `key` in the response body. The
    /// ordering matters: a malformed pagination header fails the whole
    /// operation before any items are produced, so callers never observe a
    /// partial result.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Pagination`] if the `Link` header is
    /// malformed, or [`ResourceError::UnexpectedBody`] if `key` is absent or
    /// its value does not deserialize.
    pub fn from_http_response(response: HttpResponse, key: &str) -> Result<Self, ResourceError> {
        let request_id = response.request_id().map(ToString::to_string);

        let pagination = Pagination::from_link_header(response.link_header().unwrap_or(""))?;

        let data_value =
            response
                .body
                .get(key)
                .ok_or_else(|| ResourceError::UnexpectedBody {
                    message: format!("missing key '{key}'"),
                    request_id: request_id.clone(),
                })?;

        let data: T = serde_json::from_value(data_value.clone()).map_err(|e| {
            ResourceError::UnexpectedBody {
                message: format!("failed to deserialize '{key}': {e}"),
                request_id: request_id.clone(),
            }
        })?;

        Ok(Self {
            data,
            pagination,
            rate_limit: response.api_call_limit,
            request_id,
        })
    }
}

/// Provides transparent access to the inner data.
impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

/// Provides mutable access to the inner data.
impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

// Verify ResourceResponse is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<String>>();
    assert_send_sync::<ResourceResponse<Vec<String>>>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::pagination::PaginationError;
    use serde::{Deserialize, Serialize};
    use serde_json::json;
    use std::collections::HashMap;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestItem {
        id: u64,
        name: String,
    }

    fn link_headers(link: &str) -> HashMap<String, Vec<String>> {
        let mut headers = HashMap::new();
        headers.insert("link".to_string(), vec![link.to_string()]);
        headers
    }

    #[test]
    fn test_deref_allows_direct_access_to_inner_data() {
        let response =
            ResourceResponse::new(vec!["a", "b", "c"], Pagination::default(), None, None);

        assert_eq!(response.len(), 3);
        assert_eq!(response.first(), Some(&"a"));
    }

    #[test]
    fn test_into_inner_returns_owned_data() {
        let response = ResourceResponse::new(vec![1, 2, 3], Pagination::default(), None, None);
        assert_eq!(response.into_inner(), vec![1, 2, 3]);
    }

    #[test]
    fn test_page_accessors() {
        let pagination = Pagination {
            next: Some(PageCursor::new("fwd")),
            previous: None,
        };
        let response = ResourceResponse::new("data", pagination, None, None);

        assert!(response.has_next_page());
        assert!(!response.has_previous_page());
        assert_eq!(response.next_page().unwrap().page_info, "fwd");
        assert!(response.previous_page().is_none());
    }

    #[test]
    fn test_from_http_response_deserializes_data() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["req-456".to_string()]);
        headers.insert(
            "x-shopify-shop-api-call-limit".to_string(),
            vec!["5/40".to_string()],
        );

        let body = json!({"item": {"id": 123, "name": "Test"}});
        let http_response = HttpResponse::new(200, headers, body);

        let response: ResourceResponse<TestItem> =
            ResourceResponse::from_http_response(http_response, "item").unwrap();

        assert_eq!(response.id, 123);
        assert_eq!(response.request_id(), Some("req-456"));
        assert_eq!(response.rate_limit().unwrap().request_count, 5);
        assert!(!response.has_next_page());
    }

    #[test]
    fn test_from_http_response_resolves_pagination() {
        let link = r#"<https://shop.myshopify.com/admin/api/2025-10/items.json?page_info=next123&limit=50>; rel="next""#;
        let body = json!({"items": [{"id": 1, "name": "One"}]});
        let http_response = HttpResponse::new(200, link_headers(link), body);

        let response: ResourceResponse<Vec<TestItem>> =
            ResourceResponse::from_http_response(http_response, "items").unwrap();

        assert!(response.has_next_page());
        let next = response.next_page().unwrap();
        assert_eq!(next.page_info, "next123");
        assert_eq!(next.limit, Some(50));
    }

    #[test]
    fn test_pagination_error_wins_over_valid_body() {
        // Body is perfectly decodable, but the Link header is broken
        let body = json!({"items": [{"id": 1, "name": "One"}]});
        let http_response = HttpResponse::new(200, link_headers("invalid link"), body);

        let result: Result<ResourceResponse<Vec<TestItem>>, _> =
            ResourceResponse::from_http_response(http_response, "items");

        assert!(matches!(
            result,
            Err(ResourceError::Pagination(PaginationError::MalformedHeader))
        ));
    }

    #[test]
    fn test_missing_key_is_unexpected_body() {
        let http_response = HttpResponse::new(200, HashMap::new(), json!({}));

        let result: Result<ResourceResponse<Vec<TestItem>>, _> =
            ResourceResponse::from_http_response(http_response, "items");

        assert!(matches!(
            result,
            Err(ResourceError::UnexpectedBody { message, .. }) if message.contains("items")
        ));
    }

    #[test]
    fn test_map_transforms_data_preserving_metadata() {
        let pagination = Pagination {
            next: Some(PageCursor::new("n")),
            previous: None,
        };
        let response = ResourceResponse::new(vec![1, 2, 3], pagination, None, Some("req".into()));

        let mapped: ResourceResponse<Vec<String>> =
            response.map(|v| v.iter().map(ToString::to_string).collect());

        assert_eq!(*mapped, vec!["1", "2", "3"]);
        assert!(mapped.has_next_page());
        assert_eq!(mapped.request_id(), Some("req"));
    }
}
