use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

use crate::utils::error_chain_fmt;

const SEND_ENDPOINT: &str = "api/v1.0/email/send";

/// Client for the transactional email relay (EmailJS REST API).
#[derive(Debug, Clone)]
pub struct RelayClient {
    http_client: Client,
    base_url: String,
    service_id: String,
    template_id: String,
}

/// Values rendered by the relay-side template.
/// Field names are the template's variable names and must not change.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TemplateParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub interest: String,
    pub message: String,
}

#[derive(serde::Serialize)]
struct SendEmailRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

#[derive(thiserror::Error)]
#[error("Failed to relay the message through the email service")]
pub struct RelayError(#[from] reqwest::Error);

impl std::fmt::Debug for RelayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl RelayClient {
    pub fn new(
        base_url: String,
        service_id: String,
        template_id: String,
        timeout: Option<Duration>,
    ) -> Result<Self, RelayError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http_client: builder.build()?,
            base_url,
            service_id,
            template_id,
        })
    }

    #[tracing::instrument(
        name = "Relay a contact message",
        skip(self, params, public_key),
        fields(service_id = %self.service_id, template_id = %self.template_id)
    )]
    pub async fn send(
        &self,
        params: &TemplateParams,
        public_key: &Secret<String>,
    ) -> Result<(), RelayError> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), SEND_ENDPOINT);
        let request_body = SendEmailRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: public_key.expose_secret(),
            template_params: params,
        };
        self.http_client
            .post(&url)
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

/// Where the relay public key comes from at submit time.
pub trait KeySource: Send + Sync {
    fn public_key(&self) -> Option<Secret<String>>;
}

/// Reads the key from an environment variable on every call.
/// An unset or blank variable means the relay is not configured.
#[derive(Debug, Clone)]
pub struct EnvironmentKey {
    variable: String,
}

impl EnvironmentKey {
    pub fn new(variable: String) -> Self {
        Self { variable }
    }
}

impl KeySource for EnvironmentKey {
    fn public_key(&self) -> Option<Secret<String>> {
        std::env::var(&self.variable)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(Secret::new)
    }
}

impl KeySource for Option<Secret<String>> {
    fn public_key(&self) -> Option<Secret<String>> {
        self.clone()
    }
}
