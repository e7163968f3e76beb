//! Integration tests against a stub Homebox server.
//!
//! These exercise full tool runs end to end: routing to the versioned API
//! path, bearer authentication, status checking, multipart uploads, and the
//! base64 handling for binary endpoints.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use homebox_mcp_server::core::HomeboxConfig;
use homebox_mcp_server::domains::homebox::{ClientError, HomeboxClient, decode_base64};
use homebox_mcp_server::domains::tools::definitions::attachments::CreateAttachmentParams;
use homebox_mcp_server::domains::tools::definitions::common::EmptyParams;
use homebox_mcp_server::domains::tools::definitions::items::{
    CreateItemParams, ImportItemsParams, ItemIdParams,
};
use homebox_mcp_server::domains::tools::definitions::labelmaker::{
    CreateQrCodeParams, LabelTargetParams,
};
use homebox_mcp_server::domains::tools::definitions::{
    CreateItemAttachmentTool, CreateItemTool, CreateMissingThumbnailsTool, CreateQrCodeTool,
    DeleteItemTool, ExportItemsTool, GetItemLabelTool, GetItemTool, GetItemsTool,
    ImportItemsTool,
};

fn client_for(server: &MockServer) -> Arc<HomeboxClient> {
    let config = HomeboxConfig {
        base_url: Some(server.uri()),
        token: Some("test-token".to_string()),
        ..HomeboxConfig::default()
    };
    Arc::new(HomeboxClient::new(config).unwrap())
}

#[tokio::test]
async fn get_item_sends_bearer_token_and_decodes_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/items/123"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "123",
            "name": "Cordless Drill",
            "quantity": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let item = GetItemTool::run(
        client_for(&server),
        ItemIdParams {
            id: "123".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(item.id, "123");
    assert_eq!(item.name, "Cordless Drill");
    assert_eq!(item.quantity, 2);
}

#[tokio::test]
async fn get_items_decodes_pagination_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "1", "name": "Hammer"}],
            "page": 1,
            "pageSize": 50,
            "total": 1
        })))
        .mount(&server)
        .await;

    let page = GetItemsTool::run(client_for(&server), EmptyParams::default())
        .await
        .unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "Hammer");
}

#[tokio::test]
async fn create_item_expects_201_and_posts_only_set_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/items"))
        .and(body_string_contains("\"name\":\"Ladder\""))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "new-id",
            "name": "Ladder"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let item = CreateItemTool::run(
        client_for(&server),
        CreateItemParams {
            name: "Ladder".to_string(),
            description: None,
            label_ids: None,
            location_id: None,
            parent_id: None,
            quantity: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(item.id, "new-id");
}

#[tokio::test]
async fn delete_item_expects_204() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/items/42"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    DeleteItemTool::run(
        client_for(&server),
        ItemIdParams {
            id: "42".to_string(),
        },
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn unexpected_status_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/items/42"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database locked"))
        .mount(&server)
        .await;

    let err = DeleteItemTool::run(
        client_for(&server),
        ItemIdParams {
            id: "42".to_string(),
        },
    )
    .await
    .unwrap_err();

    match err {
        ClientError::UnexpectedStatus { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "database locked");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn missing_token_fails_before_any_request() {
    let server = MockServer::start().await;
    // No request may reach the server when credentials are incomplete
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = HomeboxConfig {
        base_url: Some(server.uri()),
        token: None,
        ..HomeboxConfig::default()
    };
    let client = Arc::new(HomeboxClient::new(config).unwrap());

    let err = GetItemsTool::run(client, EmptyParams::default())
        .await
        .unwrap_err();

    match err {
        ClientError::MissingCredentials { missing } => assert_eq!(missing, "HOMEBOX_TOKEN"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn item_label_is_returned_as_base64() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/labelmaker/item/7"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"abc".to_vec()))
        .mount(&server)
        .await;

    let output = GetItemLabelTool::run(
        client_for(&server),
        LabelTargetParams {
            id: "7".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(output.image, "YWJj");
    assert_eq!(decode_base64(&output.image).unwrap(), b"abc");
}

#[tokio::test]
async fn qr_code_data_is_query_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/qrcode"))
        .and(query_param("data", "shelf=3&bin=7"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1u8, 2, 3]))
        .expect(1)
        .mount(&server)
        .await;

    let output = CreateQrCodeTool::run(
        client_for(&server),
        CreateQrCodeParams {
            data: "shelf=3&bin=7".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(decode_base64(&output.image).unwrap(), vec![1u8, 2, 3]);
}

#[tokio::test]
async fn import_items_uploads_decoded_csv_as_multipart() {
    let csv = "name,quantity\nDrill,1";
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/items/import"))
        .and(body_string_contains(csv))
        .and(body_string_contains("filename=\"items.csv\""))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    ImportItemsTool::run(
        client_for(&server),
        ImportItemsParams {
            file_content: homebox_mcp_server::domains::homebox::encode_base64(csv.as_bytes()),
            file_name: "items.csv".to_string(),
        },
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn attachment_upload_carries_file_and_type_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/items/i1/attachments"))
        .and(body_string_contains("filename=\"front.jpg\""))
        .and(body_string_contains("name=\"type\""))
        .and(body_string_contains("photo"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "i1",
            "name": "Drill"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let item = CreateItemAttachmentTool::run(
        client_for(&server),
        CreateAttachmentParams {
            item_id: "i1".to_string(),
            file_content: homebox_mcp_server::domains::homebox::encode_base64(b"jpegbytes"),
            file_name: "front.jpg".to_string(),
            kind: Some("photo".to_string()),
            primary: false,
        },
    )
    .await
    .unwrap();

    assert_eq!(item.id, "i1");
}

#[tokio::test]
async fn import_items_rejects_malformed_base64_without_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let err = ImportItemsTool::run(
        client_for(&server),
        ImportItemsParams {
            file_content: "!!not base64!!".to_string(),
            file_name: "items.csv".to_string(),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ClientError::DecodeFailed(_)));
}

#[tokio::test]
async fn maintenance_action_posts_without_body_and_reads_count() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/actions/create-missing-thumbnails"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"completed": 4})))
        .expect(1)
        .mount(&server)
        .await;

    let result = CreateMissingThumbnailsTool::run(client_for(&server), EmptyParams::default())
        .await
        .unwrap();

    assert_eq!(result.completed, 4);
}

#[tokio::test]
async fn export_items_returns_raw_csv_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/items/export"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("HB.name,HB.quantity\nDrill,1\n"),
        )
        .mount(&server)
        .await;

    let output = ExportItemsTool::run(client_for(&server), EmptyParams::default())
        .await
        .unwrap();

    assert!(output.csv_data.starts_with("HB.name"));
}
