use crate::config::ServiceConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "kora-catalog")]
#[command(about = "Property catalog API backed by a document store")]
pub struct CliArgs {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the store URL (memory:// or file:///path)
    #[arg(long, global = true)]
    pub store_url: Option<String>,

    /// Override the listen host
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Override the listen port
    #[arg(short, long, global = true)]
    pub port: Option<u16>,

    /// Override the seed fixture file
    #[arg(long, global = true)]
    pub seed_fixture: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the HTTP service (default)
    Serve {
        /// Reseed the store before accepting requests
        #[arg(long)]
        seed_on_start: bool,
    },
    /// Replace the store contents with the seed fixture and exit
    Seed,
    /// Validate the seed fixture and print a summary
    CheckFixture,
}

impl CliArgs {
    /// Command-line flags win over file and environment values.
    pub fn apply_to(&self, config: &mut ServiceConfig) {
        if let Some(url) = &self.store_url {
            config.store.url = url.clone();
        }
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(fixture) = &self.seed_fixture {
            config.catalog.seed_fixture = Some(fixture.clone());
        }
        config.logging.verbose |= self.verbose;
        config.logging.json |= self.json_logs;
    }

    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Serve {
                seed_on_start: false,
            })
    }
}
