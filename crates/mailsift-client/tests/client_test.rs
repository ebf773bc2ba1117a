//! Integration tests for the inbox client against a mocked HTTP service.

use mailsift_core::error::SiftError;
use mailsift_core::traits::{AttachmentSource, TransferFetcher};
use mailsift_client::{HttpFetcher, InboxClient};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> InboxClient {
    InboxClient::with_options("test-key", Some(&server.uri()), 5).unwrap()
}

#[tokio::test]
async fn list_attachments_parses_descriptors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/inboxes/inbox-1/messages/msg-1"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message_id": "msg-1",
            "attachments": [
                {
                    "attachment_id": "att-1",
                    "filename": "invoice.pdf",
                    "content_type": "application/pdf"
                },
                { "attachment_id": "att-2" }
            ]
        })))
        .mount(&server)
        .await;

    let attachments = test_client(&server)
        .list_attachments("inbox-1", "msg-1")
        .await
        .unwrap();

    assert_eq!(attachments.len(), 2);
    assert_eq!(attachments[0].attachment_id, "att-1");
    assert_eq!(attachments[0].filename.as_deref(), Some("invoice.pdf"));
    assert!(attachments[1].filename.is_none());
}

#[tokio::test]
async fn message_without_attachments_is_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/inboxes/inbox-1/messages/msg-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message_id": "msg-2"
        })))
        .mount(&server)
        .await;

    let attachments = test_client(&server)
        .list_attachments("inbox-1", "msg-2")
        .await
        .unwrap();

    assert!(attachments.is_empty());
}

#[tokio::test]
async fn attachment_url_returns_download_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/inboxes/inbox-1/messages/msg-1/attachments/att-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "attachment_id": "att-1",
            "download_url": "https://files.test/signed/att-1"
        })))
        .mount(&server)
        .await;

    let url = test_client(&server)
        .attachment_url("inbox-1", "msg-1", "att-1")
        .await
        .unwrap();

    assert_eq!(url, "https://files.test/signed/att-1");
}

#[tokio::test]
async fn missing_message_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/inboxes/inbox-1/messages/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such message"))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .list_attachments("inbox-1", "gone")
        .await
        .unwrap_err();

    assert!(matches!(err, SiftError::NotFound(_)));
}

#[tokio::test]
async fn fetcher_downloads_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/signed/att-1"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"attachment bytes".to_vec()))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(5).unwrap();
    let bytes = fetcher
        .download(&format!("{}/signed/att-1", server.uri()))
        .await
        .unwrap();

    assert_eq!(bytes, b"attachment bytes");
}

#[tokio::test]
async fn fetcher_rejects_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/signed/expired"))
        .respond_with(ResponseTemplate::new(403).set_body_string("url expired"))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(5).unwrap();
    let err = fetcher
        .download(&format!("{}/signed/expired", server.uri()))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("authentication"));
}
