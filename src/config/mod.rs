mod config_spec;
mod env_provider;
pub mod database;
pub mod errors;
pub mod logging;
pub mod settings;

pub use config_spec::{ConfigSpec, ConfigValue, ConfigValueSource};
pub use database::DatabaseConnections;
pub use env_provider::{EnvironmentProvider, MockEnvironment, SystemEnvironment};
pub use errors::ApplicationError;
pub use logging::{LoggingConfig, init_logging};
pub use settings::AppSettings;
