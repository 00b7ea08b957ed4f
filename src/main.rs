mod cli;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use naengmyeon::config::NaengmyeonConfig;
use naengmyeon::server;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "naengmyeon", version, about = "Pyongyang naengmyeon guide MCP server")]
struct Cli {
    /// Config file (defaults to ~/.naengmyeon/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Transport {
    Stdio,
    Http,
}

#[derive(Subcommand)]
enum Command {
    /// Start the MCP server
    Serve {
        /// Override the configured transport
        #[arg(long, value_enum)]
        transport: Option<Transport>,
    },
    /// Search restaurants and print the result document
    Search(cli::search::SearchArgs),
    /// Print the detail page for one restaurant (id or name)
    Show {
        reference: String,
    },
    /// Check the data directory and report what loads
    Doctor,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level)
    let config = match &cli.config {
        Some(path) => NaengmyeonConfig::load_from(path)?,
        None => NaengmyeonConfig::load()?,
    };

    // Log to stderr so stdout stays clean for MCP JSON-RPC.
    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Serve { transport } => {
            let transport = match transport {
                Some(Transport::Stdio) => "stdio",
                Some(Transport::Http) => "http",
                None => config.server.transport.as_str(),
            };
            match transport {
                "stdio" => server::serve_stdio(config.clone()).await?,
                "http" => server::serve_http(config.clone()).await?,
                other => bail!("unknown transport: {other}. Supported: stdio, http"),
            }
        }
        Command::Search(args) => cli::search::search(&config, args)?,
        Command::Show { reference } => cli::show::show(&config, &reference)?,
        Command::Doctor => cli::doctor::doctor(&config)?,
    }

    Ok(())
}
