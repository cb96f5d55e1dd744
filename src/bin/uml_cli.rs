use clap::Parser;
use uml_generator::client::cli_client::{self, CliArgs};
use uml_generator::common::config::ClientConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ClientConfig::from_env();
    config.init_logging();
    cli_client::run(CliArgs::parse(), &config).await
}
