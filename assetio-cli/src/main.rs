//! assetio: resolve asset paths and managed entity references.
//!
//! Usage:
//!   OPENASSETIO_DEFAULT_CONFIG=/studio/assetio.toml assetio resolve bal:///cube
//!   assetio cat bal:///cube
//!
//! The manager is discovered from `OPENASSETIO_DEFAULT_CONFIG`; extra
//! search directories come from `ASSETIO_DEFAULT_SEARCH_PATH`.

use anyhow::{Context, Result};
use assetio_cli::{Command, run};
use assetio_manager::LibraryManagerFactory;
use assetio_resolver::{DefaultResolver, ManagedResolver, ResolverConfig};
use clap::Parser;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "assetio")]
#[command(about = "Resolve asset paths and managed entity references")]
struct Args {
    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = ResolverConfig::from_env().context("invalid resolver environment")?;
    debug!(?config, "Resolver config");

    let resolver = ManagedResolver::from_config(
        &config,
        &LibraryManagerFactory,
        DefaultResolver::from_config(&config),
    )
    .context("failed to initialize asset resolver")?;

    let stdout = std::io::stdout();
    run(&resolver, &args.command, &mut stdout.lock())
}
