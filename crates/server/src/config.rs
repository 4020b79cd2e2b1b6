use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::{Args, Parser};

use crate::database::connection::DbConfig;

#[derive(Clone, Debug, Args)]
pub struct ServerConfig {
    #[arg(long, env = "LISTEN_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,
    /// Comma-separated CORS allow-list; any origin is allowed when empty.
    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',')]
    pub allowed_origins: Vec<String>,
    /// Requests per minute allowed for a single client address, `0` disables limiting.
    #[arg(long, env = "RATE_LIMIT_PER_MINUTE", default_value_t = 100)]
    pub rate_limit_per_minute: u32,
}

impl ServerConfig {
    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Read once at startup from flags or their environment variables.
#[derive(Clone, Debug, Parser)]
#[command(version, about = "CRUD REST API for users and resources")]
pub struct AppConfig {
    #[command(flatten)]
    pub server: ServerConfig,
    #[command(flatten)]
    pub database: DbConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags_with_defaults() {
        let config = AppConfig::try_parse_from([
            "catalog-server",
            "--db-host",
            "db.internal",
            "--db-user",
            "catalog",
            "--db-pass",
            "secret",
            "--db-name",
            "catalog",
            "--allowed-origins",
            "https://a.example,https://b.example",
        ])
        .unwrap();

        assert_eq!(config.database.host, "db.internal");
        assert_eq!(
            config.server.allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
        // the environment may override defaults, only check they parsed to something sane
        assert!(config.database.max_connections > 0);
    }

    #[test]
    fn address_joins_host_and_port() {
        let config = ServerConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8080,
            allowed_origins: vec![],
            rate_limit_per_minute: 0,
        };
        assert_eq!(config.address().to_string(), "127.0.0.1:8080");
    }
}
