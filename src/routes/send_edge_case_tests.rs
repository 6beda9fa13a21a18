use crate::dispatch::DispatchQueue;
use crate::handlers::validation::sender::{MockVerifier, SenderVerifier};
use crate::routes::send::configure_routes;
use actix_web::{App, test, web};
use serde_json::json;
use std::sync::Arc;

async fn create_test_app(
    verifier: MockVerifier,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    let queue =
        DispatchQueue::new("redis://127.0.0.1:6379").expect("local redis url should parse");

    test::init_service(
        App::new()
            .app_data(web::Data::from(Arc::new(verifier) as Arc<dyn SenderVerifier>))
            .app_data(web::Data::new(queue))
            .configure(configure_routes),
    )
    .await
}

fn valid_payload() -> serde_json::Value {
    json!({
        "subject": "test subject",
        "message": "<p>quick send</p>",
        "sender": {
            "name": "adedotxn.dev",
            "email": "sender@projects.smtpexpress.com"
        },
        "recipients": { "email": "adedotxn.dev@gmail.com" }
    })
}

#[actix_web::test]
async fn test_send_missing_content_type() {
    let app = create_test_app(MockVerifier::new()).await;
    let req = test::TestRequest::post()
        .uri("/send")
        .set_payload(r#"{"subject": "test subject"}"#)
        .to_request();

    let resp = test::call_service(&app, req).await;
    // The JSON extractor refuses non-JSON content types before validation
    assert!(resp.status().is_client_error());
}

#[actix_web::test]
async fn test_send_malformed_json() {
    let app = create_test_app(MockVerifier::new()).await;
    let req = test::TestRequest::post()
        .uri("/send")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"subject": "test subject""#)
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());
}

#[actix_web::test]
async fn test_send_extra_fields_ignored() {
    let app = create_test_app(MockVerifier::new()).await;

    let mut payload = valid_payload();
    payload["subject"] = json!("Ab");
    payload["attachments"] = json!(["unsupported"]);
    payload["cc"] = json!(42);

    let req = test::TestRequest::post()
        .uri("/send")
        .set_json(payload)
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body = test::read_body(resp).await;
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    // Unknown fields never mask the rule outcome
    assert_eq!(
        body_json["message"],
        "Subject must be at least 3 characters long"
    );
}

#[actix_web::test]
async fn test_send_null_fields_follow_rule_order() {
    let app = create_test_app(MockVerifier::new()).await;

    let req = test::TestRequest::post()
        .uri("/send")
        .set_json(json!({
            "subject": null,
            "message": null,
            "sender": null,
            "recipients": null
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body = test::read_body(resp).await;
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        body_json["message"],
        "Missing value of sender's email in request body"
    );
}

#[actix_web::test]
async fn test_send_whitespace_only_subject_counts_as_missing() {
    let app = create_test_app(MockVerifier::new()).await;

    let mut payload = valid_payload();
    payload["subject"] = json!("   ");

    let req = test::TestRequest::post()
        .uri("/send")
        .set_json(payload)
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body = test::read_body(resp).await;
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        body_json["message"],
        "Missing value of subject in request body"
    );
}

#[actix_web::test]
async fn test_custom_domain_without_credential_is_rejected() {
    let mut verifier = MockVerifier::new();
    verifier.expect_is_reachable_sender().returning(|_| Ok(true));
    verifier
        .expect_domain_matches_secret()
        .withf(|domain, secret| domain == "acme.dev" && secret.is_empty())
        .returning(|_, _| Ok(false));

    let app = create_test_app(verifier).await;

    let mut payload = valid_payload();
    payload["sender"]["email"] = json!("no-reply@acme.dev");

    // No Authorization header at all
    let req = test::TestRequest::post()
        .uri("/send")
        .set_json(payload)
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body = test::read_body(resp).await;
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        body_json["message"],
        "Custom sender domain does not match the selected secret"
    );
}

#[actix_web::test]
async fn test_template_only_payload_reaches_verification() {
    let mut verifier = MockVerifier::new();
    verifier
        .expect_is_reachable_sender()
        .returning(|_| Ok(false));

    let app = create_test_app(verifier).await;

    let mut payload = valid_payload();
    payload["message"] = json!(null);
    payload["template"] = json!({ "id": "tmpl-welcome" });

    let req = test::TestRequest::post()
        .uri("/send")
        .set_json(payload)
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body = test::read_body(resp).await;
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    // Rule three passed on the template id; rule nine rejected the sender
    assert_eq!(body_json["message"], "Sender address is not reachable");
}

#[actix_web::test]
async fn test_routes_are_configured() {
    let app = create_test_app(MockVerifier::new()).await;

    let req = test::TestRequest::post()
        .uri("/send")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_ne!(resp.status().as_u16(), 404);

    let req = test::TestRequest::get()
        .uri("/send-status/some-reference")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_ne!(resp.status().as_u16(), 405);
}
