//! REST resource trait for typed CRUD operations.
//!
//! [`RestResource`] provides a standardized interface for Admin REST
//! resources. Implementors define the resource's names and parameter types
//! and get default implementations for `find()`, `all()`, `create()`, and
//! `delete()`.
//!
//! # Implementing a Resource
//!
//! ```rust,ignore
//! use serde::{Deserialize, Serialize};
//! use shopify_rest::rest::RestResource;
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Widget {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub id: Option<u64>,
//!     pub title: String,
//! }
//!
//! impl RestResource for Widget {
//!     type Id = u64;
//!     type ListParams = WidgetListParams;
//!
//!     const NAME: &'static str = "Widget";
//!     const KEY: &'static str = "widget";
//!     const PLURAL: &'static str = "widgets";
//!
//!     fn id(&self) -> Option<Self::Id> {
//!         self.id
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::fmt::Display;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::clients::RestClient;
use crate::rest::{ResourceError, ResourceResponse};

/// A REST resource that can be listed, fetched, created, and deleted.
///
/// Paths follow the flat Admin API convention: the collection lives at
/// `{PLURAL}.json` and a single resource at `{PLURAL}/{id}.json`. Request
/// and response bodies are wrapped in envelopes keyed by [`KEY`](Self::KEY)
/// (single) or [`PLURAL`](Self::PLURAL) (collection).
///
/// # List-With-Pagination
///
/// [`all`](Self::all) is the list-with-pagination operation: it reads the
/// `Link` response header and returns the decoded items together with the
/// resolved [`Pagination`](crate::rest::Pagination). Pagination resolution
/// is strict and takes precedence over the body: if the header is
/// malformed the call fails with that error and returns no items, even when
/// the body decoded cleanly.
#[allow(async_fn_in_trait)]
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The type of the resource's identifier.
    type Id: Display + Clone + Send + Sync;

    /// Parameters for `all()` operations: pagination cursor and resource
    /// filters as explicit typed fields.
    type ListParams: Serialize + Default + Send + Sync;

    /// The singular resource name, used in error messages (e.g., "CarrierService").
    const NAME: &'static str;

    /// The JSON envelope key for a single resource (e.g., "carrier_service").
    const KEY: &'static str;

    /// The plural form: collection envelope key and URL path base
    /// (e.g., "carrier_services").
    const PLURAL: &'static str;

    /// Returns the resource's ID if it exists.
    ///
    /// Returns `None` for new resources that have not been saved, and for
    /// resources identified by a composite key.
    fn id(&self) -> Option<Self::Id>;

    /// Fetches a single resource by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource doesn't exist.
    async fn find(
        client: &RestClient,
        id: Self::Id,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let path = format!("{}/{}", Self::PLURAL, id);

        let response = client.get(&path, None).await?;

        if !response.is_ok() {
            return Err(ResourceError::from_http_response(
                response.code,
                &response.body,
                Self::NAME,
                Some(&id.to_string()),
                response.request_id(),
            ));
        }

        ResourceResponse::from_http_response(response, Self::KEY)
    }

    /// Lists resources matching the given parameters, with pagination.
    ///
    /// Returns the decoded collection together with the pagination state
    /// resolved from the `Link` response header. Use
    /// [`next_page()`](ResourceResponse::next_page) /
    /// [`previous_page()`](ResourceResponse::previous_page) to build the
    /// follow-up request.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Pagination`] if the `Link` header is
    /// malformed; in that case no items are returned even if the body
    /// decoded successfully.
    async fn all(
        client: &RestClient,
        params: Option<Self::ListParams>,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        let query = params
            .map(|p| serialize_to_query(&p))
            .transpose()?
            .filter(|q| !q.is_empty());

        let response = client.get(Self::PLURAL, query).await?;

        if !response.is_ok() {
            return Err(ResourceError::from_http_response(
                response.code,
                &response.body,
                Self::NAME,
                None,
                response.request_id(),
            ));
        }

        ResourceResponse::from_http_response(response, Self::PLURAL)
    }

    /// Creates the resource (POST).
    ///
    /// The resource is serialized under its [`KEY`](Self::KEY) envelope.
    /// Returns the created resource with server-generated fields populated.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the API rejects the
    /// resource (422).
    async fn create(&self, client: &RestClient) -> Result<Self, ResourceError> {
        let body = wrap_in_envelope(self, Self::KEY)?;

        let response = client.post(Self::PLURAL, body, None).await?;

        if !response.is_ok() {
            return Err(ResourceError::from_http_response(
                response.code,
                &response.body,
                Self::NAME,
                None,
                response.request_id(),
            ));
        }

        let result: ResourceResponse<Self> =
            ResourceResponse::from_http_response(response, Self::KEY)?;
        Ok(result.into_inner())
    }

    /// Updates the resource (PUT), matched by its ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the resource has no ID, and
    /// [`ResourceError::NotFound`] if it does not exist remotely.
    async fn update(&self, client: &RestClient) -> Result<Self, ResourceError> {
        let id = self.id().ok_or(ResourceError::MissingId {
            resource: Self::NAME,
            operation: "update",
        })?;
        let path = format!("{}/{}", Self::PLURAL, id);
        let body = wrap_in_envelope(self, Self::KEY)?;

        let response = client.put(&path, body, None).await?;

        if !response.is_ok() {
            return Err(ResourceError::from_http_response(
                response.code,
                &response.body,
                Self::NAME,
                Some(&id.to_string()),
                response.request_id(),
            ));
        }

        let result: ResourceResponse<Self> =
            ResourceResponse::from_http_response(response, Self::KEY)?;
        Ok(result.into_inner())
    }

    /// Deletes the resource, matched by its ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the resource has no ID, and
    /// [`ResourceError::NotFound`] if it does not exist remotely.
    async fn delete(&self, client: &RestClient) -> Result<(), ResourceError> {
        let id = self.id().ok_or(ResourceError::MissingId {
            resource: Self::NAME,
            operation: "delete",
        })?;
        let path = format!("{}/{}", Self::PLURAL, id);

        let response = client.delete(&path, None).await?;

        if !response.is_ok() {
            return Err(ResourceError::from_http_response(
                response.code,
                &response.body,
                Self::NAME,
                Some(&id.to_string()),
                response.request_id(),
            ));
        }

        Ok(())
    }
}

/// Wraps a resource in its JSON envelope: `{"key": {...}}`.
fn wrap_in_envelope<T: Serialize>(resource: &T, key: &str) -> Result<Value, ResourceError> {
    let value = serde_json::to_value(resource).map_err(|e| ResourceError::UnexpectedBody {
        message: format!("failed to serialize resource: {e}"),
        request_id: None,
    })?;

    let mut body = serde_json::Map::new();
    body.insert(key.to_string(), value);
    Ok(Value::Object(body))
}

/// Serializes a params struct to a query parameter map.
///
/// `None` fields are skipped; arrays become comma-separated values.
pub(crate) fn serialize_to_query<T: Serialize>(
    params: &T,
) -> Result<HashMap<String, String>, ResourceError> {
    let value = serde_json::to_value(params).map_err(|e| ResourceError::UnexpectedBody {
        message: format!("failed to serialize params: {e}"),
        request_id: None,
    })?;

    let mut query = HashMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}
