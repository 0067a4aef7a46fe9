use std::{panic::AssertUnwindSafe, sync::Arc};

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    routing, Extension, Json, Router,
};
use folio_core_contact_contracts::{ContactFeatureService, ContactRelayError, MailRequest};
use folio_models::{contact::MailApiResponse, ClientIp};
use futures::FutureExt;

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/mail", routing::post(relay_message))
        .with_state(service)
}

/// Contact form submissions.
///
/// The website shows the response body verbatim. The endpoint therefore
/// always responds with `200 OK` and reports failures in the body, including
/// panics, which are contained here rather than in the outer panic handler.
async fn relay_message(
    service: State<Arc<impl ContactFeatureService>>,
    client_ip: Option<Extension<ClientIp>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request = MailRequest {
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(Into::into),
        body: String::from_utf8_lossy(&body).into_owned(),
        client_ip: client_ip
            .map(|Extension(client_ip)| client_ip)
            .unwrap_or_default(),
    };

    let result = AssertUnwindSafe(service.relay_message(request))
        .catch_unwind()
        .await;

    let response = match result {
        Ok(Ok(())) => MailApiResponse::ok(),
        Ok(Err(ContactRelayError::Other(err))) => {
            tracing::error!("failed to relay contact message: {err}");
            MailApiResponse::error("Server error.")
        }
        Ok(Err(err)) => MailApiResponse::error(err.to_string()),
        Err(_) => {
            tracing::error!("contact message handler panicked");
            MailApiResponse::error("Server error.")
        }
    };

    Json(response).into_response()
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use axum::http::{Request, StatusCode};
    use folio_core_contact_contracts::{MockContactFeatureService, SubmissionRejection};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;

    const BODY: &str = r#"{"name":"Jane Doe","email":"jane.doe@example.com"}"#;

    fn client_ip() -> ClientIp {
        ClientIp(Some("10.13.37.7".parse().unwrap()))
    }

    fn mail_request() -> MailRequest {
        MailRequest {
            content_type: Some("application/json".into()),
            body: BODY.into(),
            client_ip: client_ip(),
        }
    }

    fn request() -> Request<Bytes> {
        Request::post("/api/mail")
            .header("content-type", "application/json")
            .extension(client_ip())
            .body(Bytes::from(BODY))
            .unwrap()
    }

    async fn send(
        service: MockContactFeatureService,
        request: Request<Bytes>,
    ) -> (StatusCode, Value) {
        let router = router(Arc::new(service));
        let response = router
            .oneshot(request.map(axum::body::Body::from))
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let service = MockContactFeatureService::new().with_relay_message(mail_request(), Ok(()));

        // Act
        let (status, body) = send(service, request()).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true}));
    }

    #[tokio::test]
    async fn rejected() {
        // Arrange
        let service = MockContactFeatureService::new().with_relay_message(
            mail_request(),
            Err(SubmissionRejection::Honeypot.into()),
        );

        // Act
        let (status, body) = send(service, request()).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": false, "error": "Spam detected."}));
    }

    #[tokio::test]
    async fn unconfigured() {
        // Arrange
        let service = MockContactFeatureService::new()
            .with_relay_message(mail_request(), Err(ContactRelayError::Configuration));

        // Act
        let (status, body) = send(service, request()).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": false,
                "error": "Server configuration error. Please contact the administrator."
            })
        );
    }

    #[tokio::test]
    async fn internal_errors_are_masked() {
        // Arrange
        let service = MockContactFeatureService::new().with_relay_message(
            mail_request(),
            Err(ContactRelayError::Other(anyhow!("cache exploded"))),
        );

        // Act
        let (status, body) = send(service, request()).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": false, "error": "Server error."}));
    }

    #[tokio::test]
    async fn panics_are_contained() {
        // Arrange
        let mut service = MockContactFeatureService::new();
        service
            .expect_relay_message()
            .return_once(|_| Box::pin(async { panic!("relay exploded") }));

        // Act
        let (status, body) = send(service, request()).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": false, "error": "Server error."}));
    }

    #[tokio::test]
    async fn missing_client_ip_and_content_type() {
        // Arrange
        let service = MockContactFeatureService::new().with_relay_message(
            MailRequest {
                content_type: None,
                body: BODY.into(),
                client_ip: ClientIp(None),
            },
            Err(SubmissionRejection::ContentType.into()),
        );

        let request = Request::post("/api/mail")
            .body(Bytes::from(BODY))
            .unwrap();

        // Act
        let (status, body) = send(service, request).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"success": false, "error": "Invalid Content-Type."})
        );
    }

    #[tokio::test]
    async fn rate_limited() {
        // Arrange
        let service = MockContactFeatureService::new()
            .with_relay_message(mail_request(), Err(ContactRelayError::RateLimited));

        // Act
        let (status, body) = send(service, request()).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": false,
                "error": "Rate limit exceeded. Please try again later."
            })
        );
    }

    #[tokio::test]
    async fn send_failure() {
        // Arrange
        let service = MockContactFeatureService::new()
            .with_relay_message(mail_request(), Err(ContactRelayError::Send));

        // Act
        let (status, body) = send(service, request()).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"success": false, "error": "Failed to send email."})
        );
    }
}
