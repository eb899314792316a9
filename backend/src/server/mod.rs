//! Listener construction and process lifecycle.
//!
//! One [`UserLookupService`] backs both transports: the actix-web server
//! (Connect endpoint and health probes) and the tonic gRPC server. Ctrl-C
//! flips the health probes, drains the HTTP server, then stops gRPC.

mod config;

pub use config::ServerConfig;

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use color_eyre::eyre::{Result, WrapErr};
use futures_util::future::try_join;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tracing::{error, info};

use user_service::Trace;
use user_service::domain::UserLookupService;
use user_service::domain::ports::UserInfoQuery;
use user_service::inbound::grpc::grpc_user_service;
use user_service::inbound::http::get_user_info;
use user_service::inbound::http::health::{HealthState, live, ready};
use user_service::inbound::http::state::HttpState;

fn create_http_server(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    bind_addr: SocketAddr,
) -> std::io::Result<Server> {
    let server = HttpServer::new(move || {
        App::new()
            .app_data(health_state.clone())
            .app_data(http_state.clone())
            .wrap(Trace)
            .service(get_user_info)
            .service(ready)
            .service(live)
    })
    .disable_signals()
    .bind(bind_addr)?
    .run();
    Ok(server)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(error) => {
            error!(%error, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}

/// Bind both listeners and serve until Ctrl-C.
///
/// # Errors
///
/// Fails when a listener cannot be bound or a server stops with an error.
pub async fn run(config: ServerConfig) -> Result<()> {
    let ServerConfig {
        http_addr,
        grpc_addr,
        request_timeout,
        store,
    } = config;

    let query: Arc<dyn UserInfoQuery> = Arc::new(UserLookupService::new(store));
    let health_state = web::Data::new(HealthState::new());
    let http_state = web::Data::new(HttpState::new(Arc::clone(&query), request_timeout));

    let http_server = create_http_server(health_state.clone(), http_state, http_addr)
        .wrap_err_with(|| format!("failed to bind HTTP listener on {http_addr}"))?;
    let http_handle = http_server.handle();

    let grpc_listener = TcpListener::bind(grpc_addr)
        .await
        .wrap_err_with(|| format!("failed to bind gRPC listener on {grpc_addr}"))?;
    let shutdown = {
        let health_state = health_state.clone();
        async move {
            shutdown_signal().await;
            health_state.mark_unhealthy();
            http_handle.stop(true).await;
        }
    };
    let grpc_server = tonic::transport::Server::builder()
        .timeout(request_timeout)
        .add_service(grpc_user_service(query))
        .serve_with_incoming_shutdown(TcpListenerStream::new(grpc_listener), shutdown);

    health_state.mark_ready();
    info!(%http_addr, %grpc_addr, "user service listening");

    try_join(
        async { http_server.await.wrap_err("HTTP server failed") },
        async { grpc_server.await.wrap_err("gRPC server failed") },
    )
    .await?;

    info!("user service stopped");
    Ok(())
}
