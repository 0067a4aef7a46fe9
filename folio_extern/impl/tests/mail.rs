use folio_di::{provider, Provide};
use folio_extern_contracts::mail::MailApiService;
use folio_extern_impl::mail::{MailApiServiceConfig, MailApiServiceImpl};
use folio_models::contact::OutgoingMessage;
use tokio::net::TcpListener;
use url::Url;

const API_KEY: &str = "re_test_key";

#[tokio::test]
async fn send_accepted() {
    let sut = make_sut(start_server().await);

    let sent = sut.send(API_KEY, &message()).await.unwrap();

    assert!(sent);
}

#[tokio::test]
async fn send_accepted_with_unexpected_response_body() {
    let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let router =
            axum::Router::new().route("/emails", axum::routing::post(|| async { "created" }));
        axum::serve(listener, router).await.unwrap();
    });

    let sut = make_sut(format!("http://{addr}/emails").parse().unwrap());

    let sent = sut.send(API_KEY, &message()).await.unwrap();

    assert!(sent);
}

#[tokio::test]
async fn send_rejected_credential() {
    let sut = make_sut(start_server().await);

    let sent = sut.send("re_wrong_key", &message()).await.unwrap();

    assert!(!sent);
}

#[tokio::test]
async fn send_provider_unreachable() {
    // nothing listens on the discard port
    let sut = make_sut("http://127.0.0.1:9/emails".parse().unwrap());

    let sent = sut.send(API_KEY, &message()).await.unwrap();

    assert!(!sent);
}

fn make_sut(send_endpoint: Url) -> MailApiServiceImpl {
    provider! {
        Provider {
            mail_api_service_config: MailApiServiceConfig,
        }
    }

    let mut provider = Provider {
        _cache: Default::default(),
        mail_api_service_config: MailApiServiceConfig::new(Some(send_endpoint)),
    };

    provider.provide()
}

async fn start_server() -> Url {
    let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, folio_testing::mail::router(API_KEY.into()))
            .await
            .unwrap();
    });

    format!("http://{addr}/emails").parse().unwrap()
}

fn message() -> OutgoingMessage {
    OutgoingMessage {
        from: "Website <noreply@example.com>".into(),
        reply_to: "Jane Doe <jane@example.com>".into(),
        to: vec!["owner@example.com".into()],
        subject: "New Contact Form Submission".into(),
        text: "Name: Jane Doe\nEmail: jane@example.com\nPhone: N/A\nMessage: hi\n".into(),
        html: "<p><b>Name:</b> Jane Doe</p>".into(),
    }
}
