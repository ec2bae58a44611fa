//! Resend HTTP tests.
//!
//! Drive `ResendTransport` with the real `ResendClient` against a mock server.

use resend_transport::providers::{ResendTransport, ResendTransportOptions};
use resend_transport::{
    Attachment, EmailClient, MailError, MailMessage, ResendClient, SendEmailRequest, Transport,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helper Functions
// ============================================================================

fn transport_for(server: &MockServer) -> ResendTransport {
    ResendTransport::make_transport(
        ResendTransportOptions::new("re_123456789").base_url(server.uri()),
    )
}

fn valid_message() -> MailMessage {
    MailMessage::new()
        .from("tony.stark@example.com")
        .to("steve.rogers@example.com")
        .subject("Hello, Avengers!")
        .html("<h1>Hello</h1>")
        .text("Hello")
}

fn success_response() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "id": "049b9217-30b5-4f61-a8e3-4d2d12f9f5a7"
    }))
}

// ============================================================================
// Basic Delivery Tests
// ============================================================================

#[tokio::test]
async fn successful_delivery_returns_data() {
    let server = MockServer::start().await;
    let transport = transport_for(&server);

    Mock::given(method("POST"))
        .and(path("/emails"))
        .and(header("Authorization", "Bearer re_123456789"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "subject": "Hello, Avengers!",
            "from": "tony.stark@example.com",
            "to": ["steve.rogers@example.com"],
            "cc": [],
            "bcc": [],
            "html": "<h1>Hello</h1>",
            "text": "Hello",
            "attachments": []
        })))
        .respond_with(success_response())
        .expect(1)
        .mount(&server)
        .await;

    let info = transport.deliver(&valid_message()).await.unwrap();
    assert_eq!(info, json!({"id": "049b9217-30b5-4f61-a8e3-4d2d12f9f5a7"}));
}

#[tokio::test]
async fn absent_fields_are_sent_as_empty_strings() {
    let server = MockServer::start().await;
    let transport = transport_for(&server);

    let message = MailMessage::new()
        .from("tony.stark@example.com")
        .to("steve.rogers@example.com");

    Mock::given(method("POST"))
        .and(path("/emails"))
        .and(body_json(json!({
            "subject": "",
            "from": "tony.stark@example.com",
            "to": ["steve.rogers@example.com"],
            "cc": [],
            "bcc": [],
            "html": "",
            "text": "",
            "attachments": []
        })))
        .respond_with(success_response())
        .expect(1)
        .mount(&server)
        .await;

    assert!(transport.deliver(&message).await.is_ok());
}

// ============================================================================
// All Fields Tests
// ============================================================================

#[tokio::test]
async fn deliver_with_all_fields_translates_payload() {
    let server = MockServer::start().await;
    let transport = transport_for(&server);

    let message = MailMessage::new()
        .from(("T Stark", "tony.stark@example.com"))
        .to(("Steve Rogers", "steve.rogers@example.com"))
        .to("bruce.banner@example.com")
        .cc("hulk.smash@example.com")
        .cc(("Janet Pym", "wasp.avengers@example.com"))
        .bcc("thor.odinson@example.com")
        .bcc(("Henry McCoy", "beast.avengers@example.com"))
        .subject("Hello, Avengers!")
        .html("<h1>Hello</h1>")
        .text("Hello")
        .attachment(Attachment::new("plan.txt", "Hello"))
        .attachment(Attachment::new("raw.bin", vec![0u8, 1, 2]));

    Mock::given(method("POST"))
        .and(path("/emails"))
        .and(body_json(json!({
            "subject": "Hello, Avengers!",
            "from": "T Stark <tony.stark@example.com>",
            "to": ["steve.rogers@example.com", "bruce.banner@example.com"],
            "cc": ["hulk.smash@example.com", "wasp.avengers@example.com"],
            "bcc": ["thor.odinson@example.com", "beast.avengers@example.com"],
            "html": "<h1>Hello</h1>",
            "text": "Hello",
            "attachments": [
                {"filename": "plan.txt", "content": "SGVsbG8="},
                {"filename": "raw.bin", "content": "AAEC"}
            ]
        })))
        .respond_with(success_response())
        .expect(1)
        .mount(&server)
        .await;

    assert!(transport.deliver(&message).await.is_ok());
}

// ============================================================================
// Error Response Tests
// ============================================================================

#[tokio::test]
async fn deliver_with_422_response_maps_error_name() {
    let server = MockServer::start().await;
    let transport = transport_for(&server);

    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "statusCode": 422,
            "name": "validation_error",
            "message": "Invalid `to` field."
        })))
        .mount(&server)
        .await;

    let err = transport.deliver(&valid_message()).await.unwrap_err();
    // The table maps validation_error to 403 regardless of the HTTP status.
    assert_eq!(err.status(), Some(403));
    assert_eq!(
        err.to_string(),
        "[403]: validation_error Invalid `to` field."
    );
}

#[tokio::test]
async fn deliver_with_429_response() {
    let server = MockServer::start().await;
    let transport = transport_for(&server);

    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "statusCode": 429,
            "name": "rate_limit_exceeded",
            "message": "Too many requests"
        })))
        .mount(&server)
        .await;

    let err = transport.deliver(&valid_message()).await.unwrap_err();
    assert_eq!(err.status(), Some(429));
    assert_eq!(err.name(), "rate_limit_exceeded");
}

#[tokio::test]
async fn deliver_with_unparseable_500_response() {
    let server = MockServer::start().await;
    let transport = transport_for(&server);

    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let err = transport.deliver(&valid_message()).await.unwrap_err();
    match err {
        MailError::RemoteApi {
            status,
            name,
            message,
        } => {
            assert_eq!(status, 500);
            assert_eq!(name, "application_error");
            assert!(message.contains("500"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn empty_api_key_is_left_for_the_api_to_reject() {
    let server = MockServer::start().await;
    let transport = ResendTransport::new(ResendTransportOptions::default().base_url(server.uri()));

    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "statusCode": 401,
            "name": "missing_api_key",
            "message": "Missing API key in the authorization header."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = transport.deliver(&valid_message()).await.unwrap_err();
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    // Nothing listens on port 1.
    let transport =
        ResendTransport::new(ResendTransportOptions::new("re_123").base_url("http://127.0.0.1:1"));

    let err = transport.deliver(&valid_message()).await.unwrap_err();
    assert!(matches!(err, MailError::Http(_)));
    assert_eq!(err.status(), None);
}

// ============================================================================
// Validation Tests
// ============================================================================

#[tokio::test]
async fn deliver_without_from_makes_no_request() {
    let server = MockServer::start().await;
    let transport = transport_for(&server);

    Mock::given(method("POST"))
        .respond_with(success_response())
        .expect(0)
        .mount(&server)
        .await;

    let message = MailMessage::new().to("steve.rogers@example.com");
    let err = transport.deliver(&message).await.unwrap_err();
    assert!(matches!(err, MailError::MissingRequiredField));
}

#[tokio::test]
async fn deliver_with_stream_attachment_makes_no_request() {
    let server = MockServer::start().await;
    let transport = transport_for(&server);

    Mock::given(method("POST"))
        .respond_with(success_response())
        .expect(0)
        .mount(&server)
        .await;

    let message = valid_message().attachment(Attachment::from_reader(
        "stream.txt",
        std::io::Cursor::new(b"Test content".to_vec()),
    ));
    let err = transport.deliver(&message).await.unwrap_err();
    assert!(matches!(err, MailError::UnsupportedAttachmentContent));
}

// ============================================================================
// Client Tests
// ============================================================================

#[tokio::test]
async fn client_reports_embedded_error_as_ok() {
    let server = MockServer::start().await;
    let client = ResendClient::new("re_123456789").base_url(server.uri());

    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "statusCode": 404,
            "name": "not_found",
            "message": "The requested endpoint does not exist."
        })))
        .mount(&server)
        .await;

    let request = SendEmailRequest {
        subject: String::new(),
        from: "a@x.com".to_string(),
        to: vec!["b@x.com".to_string()],
        cc: vec![],
        bcc: vec![],
        html: String::new(),
        text: String::new(),
        attachments: vec![],
    };

    let response = client.send_email(&request).await.unwrap();
    assert!(response.data.is_none());
    let error = response.error.unwrap();
    assert_eq!(error.name, "not_found");
    assert_eq!(error.message, "The requested endpoint does not exist.");
}
