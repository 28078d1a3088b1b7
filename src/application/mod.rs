//! Application layer services.
//!
//! # Available Services
//!
//! - [`services::shortener::Shortener`] - Short code allocation and resolution

pub mod services;
