use dotenv::dotenv;
use portfolio_stats_relay::config::{self, Config};
use portfolio_stats_relay::counter::CounterApi;
use portfolio_stats_relay::stats::LeetcodeStats;
use portfolio_stats_relay::{build_router, AppState};
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let is_production = config::is_production();
    match is_production {
        // local env
        false => {
            dotenv().ok();

            tracing::subscriber::set_global_default(
                tracing_subscriber::fmt()
                    .pretty()
                    .with_env_filter(EnvFilter::from_default_env())
                    .finish(),
            )?;
        }
        // production env
        true => {
            tracing::subscriber::set_global_default(
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_target(false)
                    .finish(),
            )?;
        }
    }

    let config = Config::from_env()?;

    // upstream clients, shared by all requests
    let counter = CounterApi::new(&config.counter)?;
    let stats = LeetcodeStats::new(&config.stats)?;
    let state = AppState::new(counter, stats);

    let app = build_router(state);

    let addr = config.bind_addr();
    let server = axum::Server::try_bind(&addr)?
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal());

    tracing::info!("server running on {}", addr);

    if let Err(err) = server.await {
        tracing::error!("server encountered an error: {}", err);
    }

    tracing::info!("server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install ctrl+c handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install terminate signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
