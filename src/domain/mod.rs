//! Domain layer containing the code-allocation rules.
//!
//! Everything in here is pure and synchronous: no I/O, no logging, no async.
//! The stateful part (the code → URL mapping) lives in
//! [`crate::application::services::Shortener`], which composes these pieces.
//!
//! # Architecture
//!
//! - [`entities`] - [`entities::ShortRecord`] and [`entities::CodeBlockList`]
//! - [`validator`] - Admissibility check for short codes
//! - [`code_generator`] - Random code source, swappable in tests
//! - [`error`] - Failure kinds raised by the shortener

pub mod code_generator;
pub mod entities;
pub mod error;
pub mod validator;
