use std::net::SocketAddr;

use portfolio_service::models::{ContactResponse, FieldError};
use portfolio_service::{app, bootstrap};
use serde_json::json;
use tokio::net::TcpListener;
use uuid::Uuid;

async fn spawn_app() -> SocketAddr {
    let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = bootstrap().unwrap();
    let app = app(state);
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    addr
}

#[tokio::test]
async fn valid_submission_is_acknowledged_with_an_id() {
    let addr = spawn_app().await;
    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api/contact"))
        .json(&json!({
            "name": "Al",
            "email": "a@b.com",
            "subject": "Hello there",
            "message": "This is a message."
        }))
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    let body: ContactResponse = response.json().await.unwrap();
    assert!(body.success);
    assert!(body.id.is_some());
    assert!(body.errors.is_none());
}

#[tokio::test]
async fn invalid_submission_reports_every_field_violation() {
    let addr = spawn_app().await;
    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api/contact"))
        .json(&json!({
            "name": "A",
            "email": "not-an-email",
            "subject": "Hi",
            "message": "short"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);

    let errors: Vec<FieldError> = serde_json::from_value(body["errors"].clone()).unwrap();
    assert_eq!(errors.len(), 4);
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, ["name", "email", "subject", "message"]);
}

#[tokio::test]
async fn unknown_fields_are_rejected_at_the_boundary() {
    let addr = spawn_app().await;
    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api/contact"))
        .json(&json!({
            "name": "Al",
            "email": "a@b.com",
            "subject": "Hello there",
            "message": "This is a message.",
            "phone": "+36 30 000 0000"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn concurrent_submissions_get_distinct_identifiers() {
    let addr = spawn_app().await;
    let client = reqwest::Client::new();

    let submit = |subject: &str| {
        let client = client.clone();
        let body = json!({
            "name": "Al",
            "email": "a@b.com",
            "subject": subject,
            "message": "This is a message."
        });
        let url = format!("http://{addr}/api/contact");
        async move {
            client
                .post(url)
                .json(&body)
                .send()
                .await
                .unwrap()
                .json::<ContactResponse>()
                .await
                .unwrap()
        }
    };

    let (first, second) =
        futures::future::join(submit("First of a pair"), submit("Second of a pair")).await;

    assert!(first.success && second.success);
    let first_id: Uuid = first.id.unwrap();
    let second_id: Uuid = second.id.unwrap();
    assert_ne!(first_id, second_id);
}

#[tokio::test]
async fn missing_fields_are_rejected_at_the_boundary() {
    let addr = spawn_app().await;
    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api/contact"))
        .json(&json!({ "name": "Al" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 422);
}
