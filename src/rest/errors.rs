//! Resource-specific error types for REST API operations.
//!
//! The SDK maps HTTP status codes to semantic error variants:
//!
//! - **404**: [`ResourceError::NotFound`] - resource doesn't exist
//! - **422**: [`ResourceError::ValidationFailed`] - validation errors from the API
//! - **Other 4xx/5xx**: [`ResourceError::Http`] - wrapped HTTP error
//!
//! Pagination failures surface as [`ResourceError::Pagination`]; per the
//! list-operation contract they take precedence over the response body, so a
//! list call with a bad `Link` header returns this error and no items.

use std::collections::HashMap;

use crate::clients::{HttpError, RestError};
use crate::rest::pagination::PaginationError;
use thiserror::Error;

/// Error type for REST resource operations.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_rest::rest::{ResourceError, RestResource};
///
/// match CarrierService::find(&client, 123).await {
///     Ok(carrier) => println!("Found: {:?}", carrier.name),
///     Err(ResourceError::NotFound { resource, id }) => {
///         println!("{} with id {} not found", resource, id);
///     }
///     Err(ResourceError::Pagination(e)) => {
///         println!("Bad Link header: {}", e);
///     }
///     Err(e) => println!("Other error: {}", e),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource was not found (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The type name of the resource (e.g., "CarrierService").
        resource: &'static str,
        /// The ID that was requested.
        id: String,
    },

    /// Validation failed for the resource (HTTP 422).
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// A map of field names to error messages.
        errors: HashMap<String, Vec<String>>,
        /// The request ID for debugging (from the `X-Request-Id` header).
        request_id: Option<String>,
    },

    /// The operation requires an ID the resource instance does not have.
    #[error("{resource} has no id, cannot {operation}")]
    MissingId {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted (e.g., "delete").
        operation: &'static str,
    },

    /// The response body did not have the expected shape.
    #[error("unexpected response body: {message}")]
    UnexpectedBody {
        /// What was wrong with the body.
        message: String,
        /// The request ID for debugging.
        request_id: Option<String>,
    },

    /// The `Link` pagination header could not be resolved.
    #[error(transparent)]
    Pagination(#[from] PaginationError),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A REST-level error occurred.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl ResourceError {
    /// Creates a `ResourceError` from an HTTP response status code.
    ///
    /// Maps 404 to `NotFound`, 422 to `ValidationFailed` (parsing errors
    /// from the body), and everything else to `Http`.
    #[must_use]
    pub fn from_http_response(
        code: u16,
        body: &serde_json::Value,
        resource: &'static str,
        id: Option<&str>,
        request_id: Option<&str>,
    ) -> Self {
        match code {
            404 => Self::NotFound {
                resource,
                id: id.unwrap_or("unknown").to_string(),
            },
            422 => Self::ValidationFailed {
                errors: parse_validation_errors(body),
                request_id: request_id.map(ToString::to_string),
            },
            _ => Self::Http(HttpError::Response(crate::clients::HttpResponseError {
                code,
                message: body.to_string(),
                error_reference: request_id.map(ToString::to_string),
            })),
        }
    }

    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::ValidationFailed { request_id, .. } | Self::UnexpectedBody { request_id, .. } => {
                request_id.as_deref()
            }
            Self::Http(HttpError::Response(e)) => e.error_reference.as_deref(),
            Self::Http(HttpError::MaxRetries(e)) => e.error_reference.as_deref(),
            _ => None,
        }
    }
}

/// Parses validation errors from an API response body.
///
/// The API returns validation errors either as a field map
/// (`{"errors": {"name": ["can't be blank"]}}`), an array
/// (`{"errors": ["..."]}`), or a bare string; array and string forms are
/// keyed under `base`.
fn parse_validation_errors(body: &serde_json::Value) -> HashMap<String, Vec<String>> {
    let mut result = HashMap::new();

    match body.get("errors") {
        Some(serde_json::Value::Object(map)) => {
            for (field, messages) in map {
                let msgs: Vec<String> = match messages {
                    serde_json::Value::Array(arr) => arr
                        .iter()
                        .filter_map(|v| v.as_str().map(ToString::to_string))
                        .collect(),
                    serde_json::Value::String(s) => vec![s.clone()],
                    other => vec![other.to_string()],
                };
                result.insert(field.clone(), msgs);
            }
        }
        Some(serde_json::Value::Array(arr)) => {
            let msgs: Vec<String> = arr
                .iter()
                .filter_map(|v| v.as_str().map(ToString::to_string))
                .collect();
            if !msgs.is_empty() {
                result.insert("base".to_string(), msgs);
            }
        }
        Some(serde_json::Value::String(s)) => {
            result.insert("base".to_string(), vec![s.clone()]);
        }
        _ => {}
    }

    result
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_not_found_error_formats_message_with_resource_and_id() {
        let error = ResourceError::NotFound {
            resource: "CarrierService",
            id: "123456".to_string(),
        };
        let message = error.to_string();

        assert!(message.contains("CarrierService"));
        assert!(message.contains("123456"));
        assert!(message.contains("not found"));
    }

    #[test]
    fn test_pagination_error_message_passes_through() {
        let error: ResourceError = PaginationError::MissingPageInfo.into();
        assert_eq!(error.to_string(), "page_info is missing");

        let error: ResourceError = PaginationError::MalformedHeader.into();
        assert_eq!(
            error.to_string(),
            "could not extract pagination link header"
        );
    }

    #[test]
    fn test_missing_id_error_names_the_operation() {
        let error = ResourceError::MissingId {
            resource: "InventoryLevel",
            operation: "delete",
        };
        let message = error.to_string();

        assert!(message.contains("InventoryLevel"));
        assert!(message.contains("delete"));
    }

    #[test]
    fn test_from_http_response_maps_404_to_not_found() {
        let error = ResourceError::from_http_response(
            404,
            &json!({"error": "Not found"}),
            "CarrierService",
            Some("123"),
            Some("req-123"),
        );

        assert!(matches!(
            error,
            ResourceError::NotFound { resource: "CarrierService", id } if id == "123"
        ));
    }

    #[test]
    fn test_from_http_response_maps_422_to_validation_failed() {
        let body = json!({
            "errors": {
                "name": ["can't be blank"],
                "callback_url": ["is invalid", "must be https"]
            }
        });

        let error =
            ResourceError::from_http_response(422, &body, "CarrierService", None, Some("req-456"));

        if let ResourceError::ValidationFailed { errors, request_id } = error {
            assert_eq!(errors.get("name"), Some(&vec!["can't be blank".to_string()]));
            assert_eq!(errors.get("callback_url").map(Vec::len), Some(2));
            assert_eq!(request_id, Some("req-456".to_string()));
        } else {
            panic!("Expected ValidationFailed variant");
        }
    }

    #[test]
    fn test_from_http_response_maps_other_codes_to_http() {
        let error = ResourceError::from_http_response(
            500,
            &json!({"error": "Internal error"}),
            "CarrierService",
            None,
            Some("req-789"),
        );

        assert!(matches!(error, ResourceError::Http(_)));
        assert_eq!(error.request_id(), Some("req-789"));
    }

    #[test]
    fn test_parse_validation_errors_array_format() {
        let body = json!({"errors": ["Error 1", "Error 2"]});

        let errors = parse_validation_errors(&body);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("base").map(Vec::len), Some(2));
    }

    #[test]
    fn test_parse_validation_errors_string_format() {
        let body = json!({"errors": "boom"});

        let errors = parse_validation_errors(&body);
        assert_eq!(errors.get("base"), Some(&vec!["boom".to_string()]));
    }

    #[test]
    fn test_all_error_variants_implement_std_error() {
        let _: &dyn std::error::Error = &ResourceError::NotFound {
            resource: "CarrierService",
            id: "123".to_string(),
        };
        let _: &dyn std::error::Error = &ResourceError::Pagination(PaginationError::InvalidUrl);
    }
}
