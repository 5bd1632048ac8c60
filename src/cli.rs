use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Synchronize local zone files with Cloudflare.
#[derive(Parser, Debug)]
#[command(name = "zone-sync", version)]
pub struct Cli {
    /// Directory with zone files
    #[arg(long, default_value = "./zones")]
    pub zones_directory: PathBuf,

    /// Cloudflare account e-mail address
    #[arg(long, env = "CLOUDFLARE_EMAIL")]
    pub email: String,

    /// Cloudflare account API key
    #[arg(long, env = "CLOUDFLARE_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch remote records into local zone files
    Fetch {
        /// Overwrite existing files
        #[arg(long)]
        overwrite: bool,
    },
    /// Push local zone files to Cloudflare
    Sync {
        /// Compute and report changes without applying them
        #[arg(long)]
        dry_run: bool,
    },
}
