//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `USER_SERVICE_*` environment variables, or a
//! config file, in OrthoConfig's usual precedence. The request timeout carries
//! an OrthoConfig default; accessors apply the remaining defaults below.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::Path;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::DEFAULT_MAX_SIZE;

/// Default gRPC listener.
pub const DEFAULT_GRPC_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 50051));
/// Default HTTP (Connect and health probes) listener.
pub const DEFAULT_HTTP_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8080));
/// Default per-request deadline in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5000;
/// Default per-request deadline.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS);

/// Conventional fallback for the database URL.
const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Configuration values for the user service process.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_SERVICE")]
pub struct ServerSettings {
    /// PostgreSQL connection URL. Without one the fixture store is served.
    pub database_url: Option<String>,
    /// gRPC listen address.
    pub grpc_addr: Option<SocketAddr>,
    /// HTTP listen address for Connect requests and health probes.
    pub http_addr: Option<SocketAddr>,
    /// Maximum pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Per-request deadline in milliseconds.
    #[ortho_config(default = 5000)]
    pub request_timeout_ms: u64,
    /// JSON file seeding the fixture store when no database is configured.
    pub fixture_path: Option<std::path::PathBuf>,
}

impl ServerSettings {
    /// Configured database URL, falling back to `DATABASE_URL`.
    pub fn database_url(&self) -> Option<String> {
        self.database_url
            .clone()
            .or_else(|| std::env::var(DATABASE_URL_ENV).ok())
            .filter(|url| !url.trim().is_empty())
    }

    pub fn grpc_addr(&self) -> SocketAddr {
        self.grpc_addr.unwrap_or(DEFAULT_GRPC_ADDR)
    }

    pub fn http_addr(&self) -> SocketAddr {
        self.http_addr.unwrap_or(DEFAULT_HTTP_ADDR)
    }

    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_MAX_SIZE)
    }

    /// Per-request deadline; zero is treated as unset.
    pub fn request_timeout(&self) -> Duration {
        if self.request_timeout_ms == 0 {
            DEFAULT_REQUEST_TIMEOUT
        } else {
            Duration::from_millis(self.request_timeout_ms)
        }
    }

    pub fn fixture_path(&self) -> Option<&Path> {
        self.fixture_path.as_deref()
    }
}
