//! # flipr
//!
//! A small URL shortening service built with Axum. Mappings live in process
//! memory only and are lost on restart.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Short records, block-lists, code validation and generation
//! - **Application Layer** ([`application`]) - The [`Shortener`] owning the code → URL mapping
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML landing and 404 pages
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://localhost:8000"
//! export CODE_BLOCK_LIST_RESERVED="api,static,health"
//!
//! cargo run -- serve
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use application::services::Shortener;
pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{Shortener, ShortenerConfig};
    pub use crate::domain::entities::{CodeBlockList, ShortRecord};
    pub use crate::domain::error::ShortenerError;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
