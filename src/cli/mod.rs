use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// OSINT indicator toolkit
#[derive(Parser)]
#[command(name = "osint-utils")]
#[command(about = "Classify indicators, validate Bitcoin addresses and run quick lookups")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Classify values as IPs, domains, URLs, emails, hashes, CVEs or Bitcoin addresses
    Classify(commands::classify::ClassifyCommand),
    /// Extract every indicator found in a text file
    Extract(commands::classify::ExtractCommand),
    /// Validate legacy Bitcoin addresses (Base58Check)
    BtcCheck(commands::base58::BtcCheckCommand),
    /// Decode a Base58 string to fixed-length hex
    Base58Decode(commands::base58::Base58DecodeCommand),
    /// Encode hex bytes as Base58
    Base58Encode(commands::base58::Base58EncodeCommand),
    /// Fetch a URL with the lookup HTTP client
    Fetch(commands::fetch::FetchCommand),
    /// Look up an API key by service name
    Apikey(commands::files::ApiKeyCommand),
    /// Recursively list non-hidden files in a directory
    List(commands::files::ListCommand),
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Parse output format string to OutputFormat enum
pub fn parse_format(format_str: &str) -> OutputFormat {
    match format_str.to_lowercase().as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Text,
    }
}

pub async fn run() -> AppResult<()> {
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify(command) => command.run(),
        Commands::Extract(command) => command.run(),
        Commands::BtcCheck(command) => command.run(),
        Commands::Base58Decode(command) => command.run(),
        Commands::Base58Encode(command) => command.run(),
        Commands::Fetch(command) => command.run().await,
        Commands::Apikey(command) => command.run(),
        Commands::List(command) => command.run(),
    }
}
