mod config;
mod fetch;
mod wiring;

use std::error::Error;

use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = config::Config::from_env()?;
    let app = wiring::build_app(&config)?;
    let listener = TcpListener::bind(config.listen_addr).await?;
    log::info!(
        "dashboard listening on {} (charts from {})",
        config.listen_addr,
        config.chart_source.base_url()
    );

    axum::serve(listener, app).await?;
    Ok(())
}
