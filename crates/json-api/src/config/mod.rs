//! Server configuration module

use std::net::SocketAddr;

use clap::Parser;

use crate::config::{
    catalog::CatalogConfig, observability::LoggingConfig, server::ServerRuntimeConfig,
};

pub(crate) mod catalog;
pub(crate) mod observability;
pub(crate) mod server;

/// Perks JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "perks-json", about = "Perks JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Campaign catalog settings.
    #[command(flatten)]
    pub catalog: CatalogConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use perks_app::domain::campaigns::MalformedCampaignPolicy;
    use testresult::TestResult;

    use crate::config::observability::LogFormat;

    use super::*;

    #[test]
    fn parses_explicit_arguments() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "perks-json",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--log-format",
            "json",
            "--catalog-path",
            "campaigns.yml",
            "--malformed-campaigns",
            "skip",
        ])?;

        assert_eq!(config.socket_addr(), SocketAddr::from(([127, 0, 0, 1], 9000)));
        assert!(matches!(config.logging.log_format, LogFormat::Json));
        assert_eq!(config.catalog.catalog_path, Path::new("campaigns.yml"));
        assert_eq!(
            config.catalog.malformed_campaigns,
            MalformedCampaignPolicy::Skip
        );

        Ok(())
    }

    #[test]
    fn defaults_bind_all_interfaces() -> TestResult {
        let config =
            ServerConfig::try_parse_from(["perks-json", "--catalog-path", "campaigns.yml"])?;

        assert_eq!(config.socket_addr(), SocketAddr::from(([0, 0, 0, 0], 8698)));
        assert_eq!(
            config.catalog.malformed_campaigns,
            MalformedCampaignPolicy::Abort
        );

        Ok(())
    }

    #[test]
    fn rejects_unknown_log_format() {
        let result = ServerConfig::try_parse_from([
            "perks-json",
            "--catalog-path",
            "campaigns.yml",
            "--log-format",
            "xml",
        ]);

        assert!(result.is_err(), "xml is not a supported log format");
    }
}
