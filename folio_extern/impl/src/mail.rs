use std::sync::Arc;

use folio_di::Build;
use folio_extern_contracts::mail::MailApiService;
use folio_models::contact::OutgoingMessage;
use folio_utils::trace_instrument;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::http::HttpClient;

const SEND_ENDPOINT: &str = "https://api.resend.com/emails";

#[derive(Debug, Clone, Build)]
pub struct MailApiServiceImpl {
    config: MailApiServiceConfig,
    #[state]
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct MailApiServiceConfig {
    send_endpoint: Arc<Url>,
}

impl MailApiServiceConfig {
    pub fn new(send_endpoint_override: Option<Url>) -> Self {
        Self {
            send_endpoint: send_endpoint_override
                .unwrap_or_else(|| SEND_ENDPOINT.parse().unwrap())
                .into(),
        }
    }
}

impl MailApiService for MailApiServiceImpl {
    #[trace_instrument(skip(self, api_key))]
    async fn send(&self, api_key: &str, message: &OutgoingMessage) -> anyhow::Result<bool> {
        let response = match self
            .client
            .post((*self.config.send_endpoint).clone())
            .bearer_auth(api_key)
            .json(message)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                debug!("Failed to reach the mail provider: {err}");
                return Ok(false);
            }
        };

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            debug!("Mail provider rejected the message: {status} {detail}");
            return Ok(false);
        }

        // A success status always counts as sent, the body is only logged.
        match response.json::<SendResponse>().await {
            Ok(SendResponse { id }) => debug!("Mail provider accepted the message: {id:?}"),
            Err(_) => debug!("Mail provider accepted the message with an unexpected response body"),
        }

        Ok(true)
    }
}

#[derive(Deserialize)]
struct SendResponse {
    id: Option<String>,
}
