use std::sync::{Arc, Mutex};

use axum::{routing, Json, Router};
use folio_client::{ContactForm, ContactFormController};
use folio_models::contact::MailApiResponse;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use url::Url;

#[tokio::test]
async fn submit_accepted() {
    let (endpoint, body) = start_server(MailApiResponse::ok()).await;
    let mut controller = filled_controller(endpoint);

    controller.submit().await;

    assert_eq!(controller.result_message(), "✅ Thank you for your message.");
    assert_eq!(*controller.form(), ContactForm::default());
    assert!(!controller.loading());
    assert_eq!(
        body.lock().unwrap().take().unwrap(),
        json!({
            "name": "Jane Doe",
            "email": "jane.doe@example.com",
            "phone": "",
            "message": "Hello!",
            "website": "",
        })
    );
}

#[tokio::test]
async fn submit_rejected_keeps_the_form() {
    let (endpoint, _body) = start_server(MailApiResponse::error("Spam detected.")).await;
    let mut controller = filled_controller(endpoint);

    controller.submit().await;

    assert_eq!(controller.result_message(), "❌ Spam detected.");
    assert_eq!(controller.form().name, "Jane Doe");
    assert!(!controller.loading());
}

#[tokio::test]
async fn submit_rejected_without_an_error_message() {
    let (endpoint, _body) = start_server(MailApiResponse {
        success: false,
        error: None,
    })
    .await;
    let mut controller = filled_controller(endpoint);

    controller.submit().await;

    assert_eq!(
        controller.result_message(),
        "❌ There was an error sending your message."
    );
}

#[tokio::test]
async fn submit_endpoint_unreachable() {
    // nothing listens on the discard port
    let mut controller = filled_controller("http://127.0.0.1:9/api/mail".parse().unwrap());

    controller.submit().await;

    assert_eq!(
        controller.result_message(),
        "❌ Network issue. Please check your connection and try again."
    );
    assert_eq!(controller.form().name, "Jane Doe");
    assert!(!controller.loading());
}

#[tokio::test]
async fn submit_unexpected_response_body() {
    let router = Router::new().route("/api/mail", routing::post(|| async { "oops" }));
    let mut controller = filled_controller(listen(router).await);

    controller.submit().await;

    assert_eq!(
        controller.result_message(),
        "❌ Sorry, there was an error. Please try later."
    );
    assert_eq!(controller.form().name, "Jane Doe");
}

fn filled_controller(endpoint: Url) -> ContactFormController {
    let mut controller = ContactFormController::new(endpoint);
    controller.set_name("Jane Doe");
    controller.set_email("jane.doe@example.com");
    controller.set_message("Hello!");
    controller
}

async fn start_server(response: MailApiResponse) -> (Url, Arc<Mutex<Option<Value>>>) {
    let body = Arc::new(Mutex::new(None));
    let captured = Arc::clone(&body);
    let router = Router::new().route(
        "/api/mail",
        routing::post(move |Json(request): Json<Value>| async move {
            *captured.lock().unwrap() = Some(request);
            Json(response)
        }),
    );

    (listen(router).await, body)
}

async fn listen(router: Router) -> Url {
    let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}/api/mail").parse().unwrap()
}
