use crate::error::{RelayError, Result};

/// Configuration for the inbound event listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerConfig {
    /// Port on which to listen for inbound event envelopes.
    pub port: u16,
    /// URL path that receives event envelopes.
    pub path: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            path: "/".to_string(),
        }
    }
}

impl ListenerConfig {
    /// Load the listener configuration from the environment.
    ///
    /// `RCV_PORT` and `RCV_PATH` override the defaults (8080, "/").
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(port) = std::env::var("RCV_PORT") {
            config.port = port
                .parse()
                .map_err(|e| RelayError::Configuration(format!("Invalid RCV_PORT: {e}")))?;
        }

        if let Ok(path) = std::env::var("RCV_PATH") {
            config.path = path;
        }

        config.validate()?;
        Ok(config)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !self.path.starts_with('/') {
            return Err(RelayError::Configuration(format!(
                "Listener path must begin with '/': {}",
                self.path
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_listener_contract() {
        let config = ListenerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.path, "/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn relative_path_is_rejected() {
        let config = ListenerConfig {
            port: 8080,
            path: "events".to_string(),
        };
        assert!(matches!(
            config.validate(),
            Err(RelayError::Configuration(_))
        ));
    }
}
