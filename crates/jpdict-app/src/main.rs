use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use jpdict_config::Config;
use tokio::runtime::Handle;
use tracing_subscriber::EnvFilter;

pub mod render;
pub mod session;
pub mod state;


use self::state::AppState;

/// Search for terms and print Japanese-to-English dictionary results.
/// Terms can be English, romaji, or Japanese.
#[derive(Parser, Debug)]
#[command(name = "jpdict", version)]
struct Args {
    /// Print every result instead of only the best one
    #[arg(long)]
    all: bool,

    /// Read every term as English, even if it looks like romaji
    #[arg(long)]
    english: bool,

    /// JSON config profile
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dictionary data directory, overrides the config
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[arg(required = true)]
    query: Vec<String>,
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::new(),
    };
    if let Some(dir) = &args.data_dir {
        config.dictionary.data_dir = dir.display().to_string();
    }
    init_tracing(&config.log_level);

    let print_all = args.all || config.display.print_all;
    let state = Arc::new(AppState::new(config, Handle::current()));

    let query = args.query.join(" ");
    let english = args.english;
    let results = tokio::task::spawn_blocking(move || {
        let mut session = state.session();
        if english {
            session.backup_query(Some(&query))?;
        } else {
            session.query(&query)?;
        }
        anyhow::Ok(session.into_results())
    })
    .await
    .context("search task panicked")?
    .context("search failed")?;

    tracing::debug!("{} results", results.len());

    if results.is_empty() {
        return Ok(());
    }
    if print_all {
        println!("{}", render::dump_all_entries(&results));
    } else {
        println!("{}", render::dump_entry(&results[0], 1));
    }

    Ok(())
}
