//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::{Shortener, ShortenerConfig};

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<Shortener>,
    /// Public base URL that short codes are appended to, without trailing slash.
    pub base_url: String,
}

impl AppState {
    pub fn new(shortener: Arc<Shortener>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            shortener,
            base_url,
        }
    }

    /// Builds state around a fresh, empty shortener.
    pub fn from_config(config: ShortenerConfig, base_url: impl Into<String>) -> Self {
        Self::new(Arc::new(Shortener::new(config)), base_url)
    }
}
