//! Configuration validation.

use crate::config::AtelierConfig;
use crate::error::{ConfigError, Result};

impl AtelierConfig {
    /// Validate the merged configuration.
    ///
    /// Deliberately does not require cert/key when `ssl` is set: missing or
    /// unreadable TLS credentials are the engine's error to report, and it
    /// reaches the caller unchanged.
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "host".to_string(),
                value: String::new(),
                hint: "Provide a hostname or IP address, e.g. 127.0.0.1".to_string(),
            }
            .into());
        }

        if self.cert.is_some() != self.key.is_some() {
            return Err(ConfigError::ConflictingOptions(
                "cert and key must be provided together".to_string(),
            )
            .into());
        }

        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "output".to_string(),
                value: String::new(),
                hint: "Provide an output directory, e.g. dist".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
