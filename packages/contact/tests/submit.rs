//! Submission tests against a live mock of the external contact endpoint.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};

use contact::{AppConfig, ContactClient, ContactForm, Field, Phase, SubmitOutcome};

#[derive(Clone)]
struct MockEndpoint {
    hits: Arc<AtomicUsize>,
    last_body: Arc<Mutex<Option<Value>>>,
    status: StatusCode,
    response: Value,
}

async fn handle_contact(
    State(mock): State<MockEndpoint>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    mock.hits.fetch_add(1, Ordering::SeqCst);
    *mock.last_body.lock().unwrap() = Some(body);
    (mock.status, Json(mock.response.clone()))
}

/// Serve `POST /api/contact` on an ephemeral port, answering every
/// request with the given status and body.
async fn spawn_endpoint(status: StatusCode, response: Value) -> (String, MockEndpoint) {
    let mock = MockEndpoint {
        hits: Arc::new(AtomicUsize::new(0)),
        last_body: Arc::new(Mutex::new(None)),
        status,
        response,
    };
    let app = Router::new()
        .route("/api/contact", post(handle_contact))
        .with_state(mock.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock endpoint");
    let addr = listener.local_addr().expect("mock endpoint addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock endpoint");
    });

    (format!("http://{addr}"), mock)
}

fn valid_form() -> ContactForm {
    let mut form = ContactForm::new();
    form.set(Field::Name, "Grace Hopper");
    form.set(Field::Email, "grace@navy.example");
    form.set(Field::Company, "US Navy");
    form.set(Field::Budget, "50k-100k");
    form.set(Field::Timeline, "2-3-months");
    form.set(Field::ProjectType, "full-stack-development");
    form.set(Field::Message, "Compiler landing page, please.");
    form
}

#[tokio::test]
async fn test_submit_posts_once_and_uses_server_reference() {
    let (base, mock) = spawn_endpoint(StatusCode::OK, json!({"referenceId": "ABC123"})).await;
    let client = ContactClient::new(&AppConfig::with_api_base(base));

    let mut form = valid_form();
    let outcome = client.submit(&mut form).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Submitted {
            reference_id: "ABC123".into()
        }
    );
    assert_eq!(form.reference_id(), Some("ABC123"));
    assert_eq!(mock.hits.load(Ordering::SeqCst), 1);

    let body = mock.last_body.lock().unwrap().take().expect("request body");
    assert_eq!(body["name"], "Grace Hopper");
    assert_eq!(body["projectType"], "full-stack-development");
    assert!(body.get("honeypot").is_none(), "honeypot must be stripped");
}

#[tokio::test]
async fn test_success_without_reference_id_synthesizes_one() {
    let (base, _mock) = spawn_endpoint(StatusCode::OK, json!({"ok": true})).await;
    let client = ContactClient::new(&AppConfig::with_api_base(base));

    let mut form = valid_form();
    let SubmitOutcome::Submitted { reference_id } = client.submit(&mut form).await else {
        panic!("expected Submitted");
    };
    assert!(reference_id.starts_with("GENIUS-"));
}

#[tokio::test]
async fn test_server_failure_returns_form_to_editing() {
    let (base, mock) =
        spawn_endpoint(StatusCode::INTERNAL_SERVER_ERROR, json!({"error": "boom"})).await;
    let client = ContactClient::new(&AppConfig::with_api_base(base));

    let mut form = valid_form();
    let outcome = client.submit(&mut form).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(*form.phase(), Phase::Editing);
    assert_eq!(mock.hits.load(Ordering::SeqCst), 1);
    // Values are retained for manual resubmission.
    assert_eq!(form.value(Field::Name), "Grace Hopper");
    assert!(form.errors().is_empty());
}

#[tokio::test]
async fn test_unreachable_endpoint_returns_failed() {
    // Nothing is listening here.
    let client = ContactClient::new(&AppConfig::with_api_base("http://127.0.0.1:9"));

    let mut form = valid_form();
    assert_eq!(client.submit(&mut form).await, SubmitOutcome::Failed);
    assert_eq!(*form.phase(), Phase::Editing);
}

#[tokio::test]
async fn test_validation_failure_makes_no_network_call() {
    let (base, mock) = spawn_endpoint(StatusCode::OK, json!({"referenceId": "X"})).await;
    let client = ContactClient::new(&AppConfig::with_api_base(base));

    let mut form = valid_form();
    form.set(Field::Name, "");
    form.set(Field::Email, "x");

    assert_eq!(client.submit(&mut form).await, SubmitOutcome::Invalid);
    assert_eq!(form.error(Field::Name), Some(contact::form::ERR_NAME_REQUIRED));
    assert_eq!(form.error(Field::Email), Some(contact::form::ERR_EMAIL_INVALID));
    assert_eq!(mock.hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_honeypot_makes_no_network_call() {
    let (base, mock) = spawn_endpoint(StatusCode::OK, json!({"referenceId": "X"})).await;
    let client = ContactClient::new(&AppConfig::with_api_base(base));

    let mut form = valid_form();
    form.set(Field::Honeypot, "1");

    let SubmitOutcome::Submitted { reference_id } = client.submit(&mut form).await else {
        panic!("expected the bot to see success");
    };
    assert!(reference_id.starts_with("GENIUS-"));
    assert!(form.errors().is_empty());
    assert_eq!(mock.hits.load(Ordering::SeqCst), 0);
}
