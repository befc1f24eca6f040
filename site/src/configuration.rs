use serde::Deserialize;
use std::time::Duration;
use telemetry::TelemetrySettings;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub content: ContentSettings,
    pub telemetry: TelemetrySettings,
}

#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    pub application_port: u16,
    pub host_name: String,
    pub base_url: String,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    Api,
    Static,
}

#[derive(Deserialize, Clone)]
pub struct ContentSettings {
    pub source: ContentSource,
    pub api_url: Option<String>,
    pub timeout_milliseconds: u64,
}

impl ContentSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }

    /// The content API base URL. Required when the content comes from the API.
    pub fn api_url(&self) -> Result<&str, ConfigurationError> {
        let url = self
            .api_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(ConfigurationError::MissingApiUrl)?;

        reqwest::Url::parse(url).map_err(|e| ConfigurationError::InvalidApiUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(url)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        match self.source {
            ContentSource::Api => self.api_url().map(|_| ()),
            ContentSource::Static => Ok(()),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigurationError {
    #[error("{0} is not a supported environment. Use either `local` or `production`.")]
    UnsupportedEnvironment(String),
    #[error("Failed to determine the current directory")]
    CurrentDirectory(#[source] std::io::Error),
    #[error("content.api_url must be set when content.source is `api`")]
    MissingApiUrl,
    #[error("content.api_url `{url}` is not a valid URL: {reason}")]
    InvalidApiUrl { url: String, reason: String },
    #[error(transparent)]
    Unreadable(#[from] config::ConfigError),
}

pub fn get_configuration() -> Result<Settings, ConfigurationError> {
    let base_path = std::env::current_dir().map_err(ConfigurationError::CurrentDirectory)?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()?;

    let environment_filename = format!("{}.yaml", environment.as_str());

    // Init configuration reader
    let settings = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join("base.yaml"),
        ))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // Add in settings from environment variables (with a prefix of APP and '__' as separator)
        // E.g. `APP_CONTENT__API_URL=https://api.example.com` would set `Settings.content.api_url`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let settings = settings.try_deserialize::<Settings>()?;
    settings.content.validate()?;

    Ok(settings)
}

#[derive(Debug)]
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
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            _ => Err(ConfigurationError::UnsupportedEnvironment(value)),
        }
    }
}
