use crate::error::TrackerError;
use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;
use std::time::Duration;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub upstream: UpstreamSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub initial_asset: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub refresh_interval_secs: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub request_timeout_ms: u64,
}

impl ApplicationSettings {
    pub fn refresh_interval(&self) -> Result<Duration, TrackerError> {
        if self.refresh_interval_secs == 0 {
            return Err(TrackerError::InvalidConfiguration(
                "refresh_interval_secs must be at least 1".into(),
            ));
        }
        Ok(Duration::from_secs(self.refresh_interval_secs))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct UpstreamSettings {
    pub gas_oracle_url: String,
    pub mempool_url: String,
    pub price_url: String,
    #[serde(default)]
    pub etherscan_api_key: Option<Secret<String>>,
    #[serde(default)]
    pub coingecko_api_key: Option<Secret<String>>,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Message(format!("no working directory: {}", e)))?;
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // e.g. `APP_APPLICATION__REFRESH_INTERVAL_SECS=10` sets `Settings.application.refresh_interval_secs`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

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
