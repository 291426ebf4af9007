use std::fmt;
use std::sync::Arc;

use crate::config::EnvironmentProvider;
use crate::config::config_spec::ConfigSpec;
use crate::config::errors::ApplicationError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://hackathon.db?mode=rwc";

/// Process-wide settings, loaded once at startup and passed to whoever needs them
#[derive(Clone)]
pub struct AppSettings {
    database_url: String,
    server_host: String,
    server_port: u16,
    debug: bool,
    seed_sample_data: bool,
    cors_allowed_origins: Vec<String>,
}

impl AppSettings {
    /// Load settings from the given environment provider using ConfigSpec
    pub fn from_env_provider(
        env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    ) -> Result<Self, ApplicationError> {
        let database_url = ConfigSpec::new(env_provider.clone())
            .env_override("DATABASE_URL")
            .default_value(DEFAULT_DATABASE_URL)
            .min_length(1)
            .load_setting_with_source()?
            .value;

        let server_host = ConfigSpec::new(env_provider.clone())
            .env_override("HOST")
            .default_value("0.0.0.0")
            .validator(ConfigSpec::validate_host_address)
            .load_setting_with_source()?
            .value;

        let port_value = ConfigSpec::new(env_provider.clone())
            .env_override("PORT")
            .default_value("3000")
            .validator(|value| ConfigSpec::validate_port_range(value, 1, 65535))
            .load_setting_with_source()?
            .value;
        let server_port = ConfigSpec::parse_port(&port_value, "PORT")?;

        let debug_value = ConfigSpec::new(env_provider.clone())
            .env_override("DEBUG")
            .default_value("true")
            .validator(ConfigSpec::validate_bool)
            .load_setting_with_source()?
            .value;
        let debug = ConfigSpec::parse_bool(&debug_value, "DEBUG")?;

        let seed_value = ConfigSpec::new(env_provider.clone())
            .env_override("SEED_SAMPLE_DATA")
            .default_value("true")
            .validator(ConfigSpec::validate_bool)
            .load_setting_with_source()?
            .value;
        let seed_sample_data = ConfigSpec::parse_bool(&seed_value, "SEED_SAMPLE_DATA")?;

        let origins_value = ConfigSpec::new(env_provider)
            .env_override("CORS_ALLOWED_ORIGINS")
            .default_value("*")
            .min_length(1)
            .load_setting_with_source()?
            .value;
        let cors_allowed_origins = origins_value
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            database_url,
            server_host,
            server_port,
            debug,
            seed_sample_data,
            cors_allowed_origins,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ApplicationError> {
        use crate::config::SystemEnvironment;
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn seed_sample_data(&self) -> bool {
        self.seed_sample_data
    }

    pub fn cors_allowed_origins(&self) -> &[String] {
        &self.cors_allowed_origins
    }

    /// `*` anywhere in the origin list opens CORS to every origin
    pub fn allows_any_origin(&self) -> bool {
        self.cors_allowed_origins.iter().any(|origin| origin == "*")
    }
}

impl fmt::Debug for AppSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppSettings")
            .field("database_url", &self.database_url)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("debug", &self.debug)
            .field("seed_sample_data", &self.seed_sample_data)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .finish()
    }
}
