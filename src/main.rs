use clap::Parser;
use log::error;

mod cli;
mod core;
mod error;
mod fetch;
mod providers;
mod sync;

use cli::{Cli, Command};
use providers::cloudflare::{CF_API_BASE, CloudflareClient, CloudflareConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if !cli.zones_directory.is_dir() {
        error!(
            "--zones-directory does not exist: {}",
            cli.zones_directory.display()
        );
        std::process::exit(2);
    }

    let provider = CloudflareClient::new(CloudflareConfig {
        email: cli.email,
        api_key: cli.api_key,
        api_url: CF_API_BASE.to_string(),
    })?;

    match cli.command {
        Command::Fetch { overwrite } => {
            fetch::run(&provider, &cli.zones_directory, overwrite).await?
        }
        Command::Sync { dry_run } => sync::run(&provider, &cli.zones_directory, dry_run).await?,
    }

    Ok(())
}
