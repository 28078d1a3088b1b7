//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. Nothing re-reads it afterwards.
//!
//! ## Required Variables
//!
//! - `BASE_URL` - Public URL that short codes are appended to (e.g. `https://flipr.sh`)
//!
//! ## Optional Variables
//!
//! - `HOSTNAME` - Bind host (default: `127.0.0.1`)
//! - `PORT` - Bind port (default: `8000`)
//! - `SHORTCODE_LENGTH` - Length of generated codes (default: `6`)
//! - `CODE_BLOCK_LIST_RESERVED` - Comma-separated reserved codes
//! - `CODE_BLOCK_LIST_OFFENSIVE` - Comma-separated offensive codes
//! - `CODE_BLOCK_LIST_PROTECTED` - Comma-separated protected codes
//! - `STATIC_DIR` - Directory served under `/static` (default: `public`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use url::Url;

use crate::application::services::ShortenerConfig;
use crate::application::services::shortener::DEFAULT_SHORTCODE_LENGTH;
use crate::domain::entities::CodeBlockList;
use crate::domain::validator::{MAX_CODE_LENGTH, MIN_CODE_LENGTH};

const DEFAULT_HOSTNAME: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub hostname: String,
    pub port: u16,
    pub shortcode_length: usize,
    pub code_block_list: CodeBlockList,
    pub static_dir: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `BASE_URL` is missing or `PORT` is not a valid port.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_base_url(None)
    }

    /// Loads configuration from environment variables, preferring `base_url`
    /// over `BASE_URL` when given (e.g. from a command-line flag).
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_env`], except a missing `BASE_URL` is fine when
    /// `base_url` is provided.
    pub fn from_env_with_base_url(base_url: Option<String>) -> Result<Self> {
        let base_url = match base_url {
            Some(url) => url,
            None => env::var("BASE_URL").context("BASE_URL environment variable not set")?,
        };

        let hostname = env::var("HOSTNAME").unwrap_or_else(|_| DEFAULT_HOSTNAME.to_string());

        let port = match env::var("PORT") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got '{}'", v))?,
            Err(_) => {
                tracing::warn!("No PORT environment variable set, defaulting to {DEFAULT_PORT}");
                DEFAULT_PORT
            }
        };

        let shortcode_length = Self::load_shortcode_length();

        let code_block_list = CodeBlockList::parse(
            &env::var("CODE_BLOCK_LIST_RESERVED").unwrap_or_default(),
            &env::var("CODE_BLOCK_LIST_OFFENSIVE").unwrap_or_default(),
            &env::var("CODE_BLOCK_LIST_PROTECTED").unwrap_or_default(),
        );

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            base_url,
            hostname,
            port,
            shortcode_length,
            code_block_list,
            static_dir,
            log_level,
            log_format,
        })
    }

    /// Reads `SHORTCODE_LENGTH`, falling back to the default when it is
    /// missing, zero, or not entirely numeric (`12abc` is rejected).
    fn load_shortcode_length() -> usize {
        match env::var("SHORTCODE_LENGTH") {
            Ok(v) => match v.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    tracing::warn!(
                        "Invalid SHORTCODE_LENGTH '{}', defaulting to {}",
                        v,
                        DEFAULT_SHORTCODE_LENGTH
                    );
                    DEFAULT_SHORTCODE_LENGTH
                }
            },
            Err(_) => {
                tracing::warn!(
                    "No SHORTCODE_LENGTH environment variable set, defaulting to {}",
                    DEFAULT_SHORTCODE_LENGTH
                );
                DEFAULT_SHORTCODE_LENGTH
            }
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `base_url` is not an absolute `http`/`https` URL
    /// - `shortcode_length` is outside `1..=10`
    /// - `log_format` is not `text` or `json`
    /// - `hostname` is empty
    pub fn validate(&self) -> Result<()> {
        let parsed = Url::parse(&self.base_url)
            .with_context(|| format!("BASE_URL must be an absolute URL, got '{}'", self.base_url))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            anyhow::bail!(
                "BASE_URL must use http or https, got '{}'",
                self.base_url
            );
        }

        if self.shortcode_length == 0 || self.shortcode_length > MAX_CODE_LENGTH {
            anyhow::bail!(
                "SHORTCODE_LENGTH must be between 1 and {}, got {}",
                MAX_CODE_LENGTH,
                self.shortcode_length
            );
        }

        if self.shortcode_length < MIN_CODE_LENGTH {
            tracing::warn!(
                "SHORTCODE_LENGTH {} is below {}; generated codes will always be rejected",
                self.shortcode_length,
                MIN_CODE_LENGTH
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.hostname.trim().is_empty() {
            anyhow::bail!("HOSTNAME must not be empty");
        }

        Ok(())
    }

    /// Address the server binds to, as `host:port`.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.hostname, self.port)
    }

    /// Settings handed to the shortener at construction.
    pub fn shortener_config(&self) -> ShortenerConfig {
        ShortenerConfig {
            shortcode_length: self.shortcode_length,
            code_block_list: self.code_block_list.clone(),
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Shortcode length: {}", self.shortcode_length);
        tracing::info!(
            "  Block-lists: {} reserved, {} offensive, {} protected",
            self.code_block_list.reserved.len(),
            self.code_block_list.offensive.len(),
            self.code_block_list.protected.len()
        );
        tracing::info!("  Static dir: {}", self.static_dir);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
