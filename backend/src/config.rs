//! Server settings loaded via OrthoConfig.
//!
//! Layers, lowest precedence first: defaults, configuration file,
//! `QUIZDESK_*` environment variables, command-line flags.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 5000;

/// Settings controlling where the server listens and which store it uses.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "QUIZDESK")]
pub struct AppSettings {
    /// PostgreSQL URL. When absent the server keeps documents in memory.
    pub database_url: Option<String>,
    /// Interface to bind.
    pub host: Option<IpAddr>,
    /// Port to bind.
    pub port: Option<u16>,
    /// Upper bound on pooled database connections.
    pub max_connections: Option<u32>,
}

impl AppSettings {
    /// The configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Socket address to bind, defaulting to `0.0.0.0:5000`.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }
}
