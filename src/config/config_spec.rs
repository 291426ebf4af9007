use std::sync::Arc;

use crate::config::EnvironmentProvider;
use crate::config::errors::ApplicationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValue {
    pub value: String,
    pub source: ConfigValueSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValueSource {
    EnvironmentVariable { name: String },
    Default,
}

/// Configuration specification with environment override → default priority
pub struct ConfigSpec {
    env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    pub env_override: Option<String>,
    pub default_value: Option<String>,
    pub required: bool,
    pub min_length: Option<usize>,
    pub validator: Option<fn(&str) -> Result<(), String>>,
}

impl ConfigSpec {
    pub fn new(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Self {
        Self {
            env_provider,
            env_override: None,
            default_value: None,
            required: false,
            min_length: None,
            validator: None,
        }
    }

    pub fn env_override(mut self, name: &str) -> Self {
        self.env_override = Some(name.to_string());
        self
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    pub fn validator(mut self, f: fn(&str) -> Result<(), String>) -> Self {
        self.validator = Some(f);
        self
    }

    /// Load a setting value with source tracking
    ///
    /// The environment variable wins over the default. Whichever value is chosen
    /// is validated before being returned.
    pub fn load_setting_with_source(&self) -> Result<ConfigValue, ApplicationError> {
        let setting_name = self.setting_name();

        if let Some(env_var) = &self.env_override {
            if let Some(value) = self.env_provider.get_var(env_var) {
                self.validate_value(&value, env_var)?;
                return Ok(ConfigValue {
                    value,
                    source: ConfigValueSource::EnvironmentVariable { name: env_var.clone() },
                });
            }
        }

        if let Some(default) = &self.default_value {
            self.validate_value(default, setting_name)?;
            return Ok(ConfigValue {
                value: default.clone(),
                source: ConfigValueSource::Default,
            });
        }

        if self.required {
            return Err(ApplicationError::InvalidSetting {
                setting_name: setting_name.to_string(),
                reason: "Required setting has no value from any source".to_string(),
            });
        }

        Ok(ConfigValue {
            value: String::new(),
            source: ConfigValueSource::Default,
        })
    }

    fn setting_name(&self) -> &str {
        self.env_override.as_deref().unwrap_or("unknown_setting")
    }

    fn validate_value(&self, value: &str, setting_name: &str) -> Result<(), ApplicationError> {
        if let Some(min) = self.min_length {
            if value.len() < min {
                return Err(ApplicationError::InvalidSetting {
                    setting_name: setting_name.to_string(),
                    reason: format!("Value must be at least {} characters long", min),
                });
            }
        }

        if let Some(validator) = self.validator {
            validator(value).map_err(|reason| ApplicationError::InvalidSetting {
                setting_name: setting_name.to_string(),
                reason,
            })?;
        }

        Ok(())
    }

    pub fn validate_host_address(value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            return Err("Host address cannot be empty".to_string());
        }
        if value.chars().any(char::is_whitespace) {
            return Err(format!("Host address '{}' must not contain whitespace", value));
        }
        Ok(())
    }

    pub fn validate_port_range(value: &str, min: u16, max: u16) -> Result<(), String> {
        let port: u32 = value
            .parse()
            .map_err(|_| format!("Expected port number between {} and {}, got '{}'", min, max, value))?;
        if port < min as u32 || port > max as u32 {
            return Err(format!("Port {} is outside valid range {}-{}", port, min, max));
        }
        Ok(())
    }

    pub fn validate_bool(value: &str) -> Result<(), String> {
        Self::bool_value(value)
            .map(|_| ())
            .ok_or_else(|| format!("Expected a boolean (true/false/1/0/yes/no), got '{}'", value))
    }

    pub fn parse_port(value: &str, setting_name: &str) -> Result<u16, ApplicationError> {
        value.parse::<u16>().map_err(|e| ApplicationError::ParseError {
            setting_name: setting_name.to_string(),
            error: e.to_string(),
        })
    }

    pub fn parse_bool(value: &str, setting_name: &str) -> Result<bool, ApplicationError> {
        Self::bool_value(value).ok_or_else(|| ApplicationError::ParseError {
            setting_name: setting_name.to_string(),
            error: format!("'{}' is not a boolean", value),
        })
    }

    fn bool_value(value: &str) -> Option<bool> {
        match value.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => None,
        }
    }
}
