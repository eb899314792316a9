//! User service entry-point: loads settings, connects the user store and
//! serves `UserService.GetUserInfo` over gRPC and Connect.

mod server;

use color_eyre::eyre::{Result, eyre};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use server::ServerConfig;
use user_service::settings::ServerSettings;

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().map_err(|e| eyre!("failed to load settings: {e}"))?;
    let config = ServerConfig::from_settings(&settings).await?;
    server::run(config).await
}
