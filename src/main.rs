//! flipr.sh command-line entry point.
//!
//! # Usage
//!
//! ```bash
//! # Start the server
//! flipr serve --port 8000 --host 0.0.0.0 --url https://flipr.sh
//!
//! # Show the effective configuration
//! flipr config
//! ```
//!
//! Environment variables are read from `.env`, then `.env.local` (which
//! overrides), then the process environment. See [`flipr::config`].

use flipr::config::{self, Config};
use flipr::server;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::EnvFilter;

/// flipr.sh - URL shortener
#[derive(Parser)]
#[command(name = "flipr")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Port to run on
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Base URL short codes are appended to
        #[arg(short, long)]
        url: Option<String>,

        /// Length of generated short codes
        #[arg(short, long = "sc-length")]
        sc_length: Option<usize>,
    },

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    dotenvy::from_filename_override(".env.local").ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            port,
            host,
            url,
            sc_length,
        } => {
            let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
            init_tracing(&log_format);

            let mut config = Config::from_env_with_base_url(url)?;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(host) = host {
                config.hostname = host;
            }
            if let Some(length) = sc_length {
                config.shortcode_length = length;
            }
            config.validate()?;
            config.print_summary();

            server::run(config).await
        }
        Commands::Config => {
            init_tracing("text");
            show_config(&config::load_from_env()?);
            Ok(())
        }
    }
}

/// Installs the global tracing subscriber.
///
/// Level filtering comes from `RUST_LOG` (default `info`); `json` switches the
/// formatter to one JSON object per line.
fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if log_format == "json" {
        builder.json().with_current_span(true).init();
    } else {
        builder.init();
    }
}

/// Prints the effective configuration.
fn show_config(config: &Config) {
    println!("{}", "Current Configuration".bright_blue().bold());
    println!();
    println!("  {:<18} {}", "BASE_URL".bright_white(), config.base_url.cyan());
    println!("  {:<18} {}", "HOSTNAME".bright_white(), config.hostname.cyan());
    println!(
        "  {:<18} {}",
        "PORT".bright_white(),
        config.port.to_string().cyan()
    );
    println!(
        "  {:<18} {}",
        "SHORTCODE_LENGTH".bright_white(),
        config.shortcode_length.to_string().cyan()
    );
    println!(
        "  {:<18} {}",
        "STATIC_DIR".bright_white(),
        config.static_dir.cyan()
    );
    println!(
        "  {:<18} {}",
        "LOG_FORMAT".bright_white(),
        config.log_format.cyan()
    );
    println!();
    println!("{}", "Block-lists".bright_white().bold());
    print_block_list("reserved", &config.code_block_list.reserved);
    print_block_list("offensive", &config.code_block_list.offensive);
    print_block_list("protected", &config.code_block_list.protected);
}

fn print_block_list(name: &str, entries: &std::collections::HashSet<String>) {
    let mut sorted: Vec<&str> = entries.iter().map(String::as_str).collect();
    sorted.sort_unstable();

    if sorted.is_empty() {
        println!("  {:<18} {}", name, "(empty)".bright_black());
    } else {
        println!("  {:<18} {}", name, sorted.join(", ").yellow());
    }
}
