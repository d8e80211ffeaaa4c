use clap::Parser;

use pokedex::cli::{self, Cli};
use pokedex::config::Config;
use pokedex::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let cli = Cli::parse();
    let config = Config::load()?;

    cli::run(cli, config).await
}
