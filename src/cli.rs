//! Command-line surface: argument types and the command loops that
//! drive the stores.

use std::sync::Arc;

use anyhow::bail;
use clap::{Parser, Subcommand};

use crate::api::{CatalogApi, PokeApiClient};
use crate::config::Config;
use crate::detail::{DetailEvent, DetailState, DetailStore};
use crate::list::{ListEvent, ListState, ListStore};

#[derive(Debug, Parser)]
#[command(name = "pokedex", about = "Browse the remote pokemon catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List pokemon from the catalog.
    List {
        /// Number of pages to fetch before printing.
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// Show the detail view for one pokemon.
    Detail {
        /// Pokemon id, as listed by the `list` command.
        id: u32,
    },
}

pub async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    let api: Arc<dyn CatalogApi> = Arc::new(PokeApiClient::from_config(&config.api));

    match cli.command {
        Command::List { pages } => run_list(api, pages).await,
        Command::Detail { id } => run_detail(api, id).await,
    }
}

/// Drive the list machine until the requested number of pages has been
/// accumulated (or the catalog runs out), then print the items.
async fn run_list(api: Arc<dyn CatalogApi>, pages: u32) -> anyhow::Result<()> {
    let store = ListStore::new(api);
    let mut states = store.observe();
    store.send(ListEvent::Appeared);

    let mut remaining = pages.max(1);
    while let Some(state) = states.next().await {
        match state {
            ListState::Idle => {}
            ListState::Loading => tracing::debug!("fetching first page"),
            ListState::Paginating { offset, .. } => {
                tracing::debug!(offset, "fetching next page");
            }
            ListState::Loaded { items, next_offset } => {
                remaining -= 1;
                match next_offset {
                    Some(offset) if remaining > 0 => {
                        store.send(ListEvent::RequestMore { offset });
                    }
                    _ => {
                        for item in &items {
                            println!("{:>5}  {}", item.id, item.name);
                        }
                        break;
                    }
                }
            }
            ListState::Failed(error) => bail!("catalog request failed: {error}"),
        }
    }

    Ok(())
}

async fn run_detail(api: Arc<dyn CatalogApi>, id: u32) -> anyhow::Result<()> {
    let store = DetailStore::new(api, id);
    let mut states = store.observe();
    store.send(DetailEvent::Appeared);

    while let Some(state) = states.next().await {
        match state {
            DetailState::Idle(_) => {}
            DetailState::Loading(id) => tracing::debug!(id, "fetching detail"),
            DetailState::Loaded(detail) => {
                match detail.artwork {
                    Some(url) => println!("artwork: {url}"),
                    None => println!("no artwork available"),
                }
                break;
            }
            DetailState::Failed { error, .. } => bail!("catalog request failed: {error}"),
        }
    }

    Ok(())
}
