mod config;
mod wiring;

use std::error::Error;

use core_game::PayoffGame;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = config::Config::from_env()?;
    init_logging(&config.log_filter)?;

    let game = PayoffGame::shipped()?;
    let listener = TcpListener::bind(config.listen_addr).await?;
    log::info!("serving price game on http://{}", listener.local_addr()?);

    axum::serve(listener, wiring::build_app(game, config.brand_names()))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    log::info!("server stopped");
    Ok(())
}

fn init_logging(filter: &str) -> Result<(), log::SetLoggerError> {
    env_logger::Builder::new()
        .parse_filters(filter)
        .format_timestamp_millis()
        .try_init()
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
}
