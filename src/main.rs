use anyhow::Context;
use interview_bot::{config::Config, logging::init_logging, repl};
use log::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    init_logging(config.log_level_filter()?);
    info!("using server {}", config.server_url);

    repl::run(config).await?;
    Ok(())
}
