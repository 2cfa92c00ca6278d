use anyhow::Context;

use portfolio_contact::config::get_configuration;
use portfolio_contact::startup::AppServer;
use portfolio_contact::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_subscriber(get_subscriber(
        "portfolio-contact".into(),
        "info".into(),
        std::io::stdout,
    ))?;

    let configuration = get_configuration().context("Failed to load configuration")?;
    let server = AppServer::build(configuration).await?;

    server.run_until_stopped().await?;

    Ok(())
}
