//! Browser-facing pages.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers

pub mod handlers;
