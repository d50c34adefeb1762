//! Integration tests for the REST resource operations.
//!
//! Drives the carrier service CRUD operations and the inventory level
//! special operations against a mock server, verifying envelope handling
//! and the semantic error mapping.

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopify_rest::rest::resources::{CarrierService, InventoryLevel};
use shopify_rest::rest::{ResourceError, RestResource};
use shopify_rest::{ClientConfig, HostUrl, RestClient, Session, ShopDomain};

fn client_for(server: &MockServer) -> RestClient {
    let session = Session::new(
        "test-session".to_string(),
        ShopDomain::new("fooshop").unwrap(),
        "test-token".to_string(),
        None,
    );
    let config = ClientConfig::builder()
        .host(HostUrl::new(server.uri()).unwrap())
        .build();

    RestClient::new(&session, Some(&config))
}

// ============================================================================
// CarrierService CRUD
// ============================================================================

#[tokio::test]
async fn test_carrier_service_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/carrier_services.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "carrier_services": [
                {"id": 1, "name": "Package Valet", "active": true},
                {"id": 2, "name": "Rate Provider", "active": false}
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let carriers = CarrierService::all(&client, None).await.unwrap();

    assert_eq!(carriers.len(), 2);
    assert_eq!(carriers[0].name.as_deref(), Some("Package Valet"));
    assert_eq!(carriers[1].active, Some(false));
    assert!(!carriers.has_next_page());
}

#[tokio::test]
async fn test_carrier_service_find() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/carrier_services/14079244.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "carrier_service": {
                "id": 14079244,
                "name": "Package Valet",
                "callback_url": "https://packagevalet.example.com/rates"
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let carrier = CarrierService::find(&client, 14079244).await.unwrap();

    assert_eq!(carrier.id, Some(14079244));
    assert_eq!(carrier.name.as_deref(), Some("Package Valet"));
}

#[tokio::test]
async fn test_carrier_service_find_maps_404_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/carrier_services/999.json"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Not Found"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = CarrierService::find(&client, 999).await.unwrap_err();

    assert!(matches!(
        error,
        ResourceError::NotFound { resource: "CarrierService", id } if id == "999"
    ));
}

#[tokio::test]
async fn test_carrier_service_create_wraps_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/api/2025-10/carrier_services.json"))
        .and(body_partial_json(json!({
            "carrier_service": {"name": "Shipping Rate Provider"}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "carrier_service": {
                "id": 1036894957,
                "name": "Shipping Rate Provider",
                "active": true,
                "carrier_service_type": "api"
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let carrier = CarrierService {
        name: Some("Shipping Rate Provider".to_string()),
        callback_url: Some("https://rates.example.com/rates".to_string()),
        service_discovery: Some(true),
        ..Default::default()
    };

    let created = carrier.create(&client).await.unwrap();

    assert_eq!(created.id, Some(1036894957));
    assert_eq!(created.active, Some(true));
}

#[tokio::test]
async fn test_carrier_service_create_maps_422_to_validation_failed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/api/2025-10/carrier_services.json"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "errors": {"name": ["can't be blank"]}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let carrier = CarrierService {
        callback_url: Some("https://rates.example.com/rates".to_string()),
        ..Default::default()
    };

    let error = carrier.create(&client).await.unwrap_err();

    if let ResourceError::ValidationFailed { errors, .. } = error {
        assert_eq!(errors.get("name"), Some(&vec!["can't be blank".to_string()]));
    } else {
        panic!("Expected ValidationFailed, got {error:?}");
    }
}

#[tokio::test]
async fn test_carrier_service_update() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/admin/api/2025-10/carrier_services/14079244.json"))
        .and(body_partial_json(json!({
            "carrier_service": {"id": 14079244, "active": false}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "carrier_service": {"id": 14079244, "name": "Package Valet", "active": false}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let carrier = CarrierService {
        id: Some(14079244),
        active: Some(false),
        ..Default::default()
    };

    let updated = carrier.update(&client).await.unwrap();
    assert_eq!(updated.active, Some(false));
}

#[tokio::test]
async fn test_carrier_service_delete() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/admin/api/2025-10/carrier_services/14079244.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let carrier = CarrierService {
        id: Some(14079244),
        ..Default::default()
    };

    carrier.delete(&client).await.unwrap();
}

#[tokio::test]
async fn test_delete_without_id_fails_before_any_request() {
    // No mock server interaction expected
    let server = MockServer::start().await;
    let client = client_for(&server);

    let carrier = CarrierService::default();
    let error = carrier.delete(&client).await.unwrap_err();

    assert!(matches!(
        error,
        ResourceError::MissingId { resource: "CarrierService", operation: "delete" }
    ));
}

// ============================================================================
// InventoryLevel special operations
// ============================================================================

#[tokio::test]
async fn test_inventory_level_adjust() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/api/2025-10/inventory_levels/adjust.json"))
        .and(body_partial_json(json!({
            "inventory_item_id": 808950810,
            "location_id": 655441491,
            "available_adjustment": -5
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "inventory_level": {
                "inventory_item_id": 808950810,
                "location_id": 655441491,
                "available": 95
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let level = InventoryLevel::adjust(&client, 808950810, 655441491, -5)
        .await
        .unwrap();

    assert_eq!(level.available, Some(95));
}

#[tokio::test]
async fn test_inventory_level_set() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/api/2025-10/inventory_levels/set.json"))
        .and(body_partial_json(json!({"available": 42})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "inventory_level": {
                "inventory_item_id": 808950810,
                "location_id": 655441491,
                "available": 42
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let level = InventoryLevel::set(&client, 808950810, 655441491, 42, None)
        .await
        .unwrap();

    assert_eq!(level.available, Some(42));
}

#[tokio::test]
async fn test_inventory_level_connect() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/api/2025-10/inventory_levels/connect.json"))
        .and(body_partial_json(json!({"relocate_if_necessary": true})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "inventory_level": {
                "inventory_item_id": 808950810,
                "location_id": 844681,
                "available": 0
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let level = InventoryLevel::connect(&client, 808950810, 844681, Some(true))
        .await
        .unwrap();

    assert_eq!(level.location_id, Some(844681));
}

#[tokio::test]
async fn test_inventory_level_delete_at_location_uses_query_params() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/admin/api/2025-10/inventory_levels.json"))
        .and(query_param("inventory_item_id", "808950810"))
        .and(query_param("location_id", "655441491"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server);
    InventoryLevel::delete_at_location(&client, 808950810, 655441491)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_missing_envelope_is_unexpected_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/api/2025-10/inventory_levels/adjust.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"something_else": {}})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = InventoryLevel::adjust(&client, 1, 2, 3).await.unwrap_err();

    assert!(matches!(
        error,
        ResourceError::UnexpectedBody { message, .. } if message.contains("inventory_level")
    ));
}
