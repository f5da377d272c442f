use std::time::Duration;

use anyhow::Context;
use serde_aux::field_attributes::deserialize_option_number_from_string;

use crate::relay_client::{EnvironmentKey, RelayClient, RelayError};

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub relay: RelaySettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct RelaySettings {
    pub base_url: String,
    pub service_id: String,
    pub template_id: String,
    /// Name of the environment variable holding the relay public key.
    pub public_key_variable: String,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub timeout_milliseconds: Option<u64>,
}

impl RelaySettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_milliseconds.map(Duration::from_millis)
    }

    pub fn client(&self) -> Result<RelayClient, RelayError> {
        RelayClient::new(
            self.base_url.clone(),
            self.service_id.clone(),
            self.template_id.clone(),
            self.timeout(),
        )
    }

    /// The key is looked up on every submit, never cached.
    pub fn key_source(&self) -> EnvironmentKey {
        EnvironmentKey::new(self.public_key_variable.clone())
    }
}

pub fn get_configuration() -> Result<Settings, anyhow::Error> {
    let base_path = std::env::current_dir().context("Failed to determine the current directory")?;
    let configuration_directory = base_path.join("configuration");

    let environment = Environment::try_from(
        std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".into()),
    )
    .map_err(anyhow::Error::msg)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // E.g. `APP_RELAY__BASE_URL=https://...` would set `Settings.relay.base_url`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .context("Failed to assemble the configuration sources")?;

    settings
        .try_deserialize::<Settings>()
        .context("Failed to deserialize the configuration")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
