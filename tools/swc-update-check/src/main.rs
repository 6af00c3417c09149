use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use swc_update_check::{fetch_latest, update_env_file, Outcome, REGISTRY_URL, VERSION_KEY};
use tracing_subscriber::EnvFilter;

/// Bump NEXT_PUBLIC_SWC_VERSION to the latest published swc wasm binding
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(long, value_name = "PATH", default_value = ".env")]
    env_file: PathBuf,

    #[arg(long, value_name = "URL", default_value = REGISTRY_URL)]
    registry_url: String,

    #[arg(
        long,
        value_name = "VERSION",
        help = "Use this version instead of querying the registry"
    )]
    latest: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    execute(cli)
}

fn execute(cli: Cli) -> Result<()> {
    let latest = match cli.latest {
        Some(version) => version,
        None => fetch_latest(&cli.registry_url)?,
    };

    match update_env_file(&cli.env_file, &latest)? {
        Outcome::UpToDate { version } => println!("{VERSION_KEY} is up to date ({version})"),
        Outcome::Updated { from, to } => println!("{VERSION_KEY}: {from} -> {to}"),
    }
    Ok(())
}
