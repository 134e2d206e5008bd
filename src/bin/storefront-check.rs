use clap::Parser;
use tracing_subscriber::EnvFilter;

use storefront_ai::client::{CheckClient, ClientArgs};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = ClientArgs::parse();
    let client = CheckClient::new(&args.base_url)?;
    client.run(&args).await;

    Ok(())
}
