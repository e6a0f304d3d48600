use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

use weather_server::api_client::UpstreamClient;
use weather_server::handlers::AppState;
use weather_server::service::{WeatherAggregator, WeatherService};
use weather_server::{app, config, telemetry};

#[tokio::main]
async fn main() {
    telemetry::init_tracing();

    let config = match config::load() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "cannot start server, configuration error");
            std::process::exit(1);
        }
    };

    info!("starting weather server");

    let service: Arc<dyn WeatherService> =
        Arc::new(WeatherAggregator::new(UpstreamClient::new(&config)));
    let app = app(AppState { service });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    info!("weather server listening on {}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, address = %addr, "cannot bind listener");
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "server error");
        std::process::exit(1);
    }

    info!("weather server stopped");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received SIGINT, shutting down...");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        },
    }
}
