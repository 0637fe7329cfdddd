use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::AccountConfig;
use crate::error::TransportError;
use crate::types::{email_label, AccountReply, AccountResponse, AuthMode, Credentials};

/// Remote account service performing login and registration.
///
/// Futures are not `Send`: the form runs on a single-threaded UI event loop,
/// and the browser fetch backend cannot cross threads.
#[async_trait(?Send)]
pub trait AccountService {
    async fn submit(
        &self,
        mode: AuthMode,
        credentials: &Credentials,
    ) -> Result<AccountReply, TransportError>;
}

/// HTTP implementation talking JSON to `{base_url}/account/*`.
#[derive(Debug, Clone)]
pub struct HttpAccountService {
    client: reqwest::Client,
    config: AccountConfig,
}

impl HttpAccountService {
    pub fn new(config: AccountConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Use a preconfigured client, e.g. with a request timeout.
    pub fn with_client(client: reqwest::Client, config: AccountConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait(?Send)]
impl AccountService for HttpAccountService {
    async fn submit(
        &self,
        mode: AuthMode,
        credentials: &Credentials,
    ) -> Result<AccountReply, TransportError> {
        let url = self.config.endpoint(mode);
        debug!(
            "account.submit: mode={} url={} email={}",
            mode,
            url,
            email_label(&credentials.email)
        );

        let res = self
            .client
            .post(&url)
            .json(credentials)
            .send()
            .await
            .map_err(|e| {
                warn!("account.submit: request failed: {e}");
                TransportError::from(e)
            })?;

        let status = res.status();
        if !status.is_success() {
            warn!("account.submit: http status={}", status.as_u16());
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = res.text().await?;
        let parsed: AccountResponse = serde_json::from_str(&body).map_err(|e| {
            warn!("account.submit: undecodable body len={}: {e}", body.len());
            TransportError::Decode(e.to_string())
        })?;

        debug!("account.submit: code={}", parsed.code);
        Ok(parsed.into())
    }
}
