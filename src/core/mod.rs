//! Core components of the `ytchat-rs` crate.
//!
//! This module contains the foundational building blocks:
//! - The main [`YtClient`] and its builder.
//! - The primary [`YtError`] type and its [`ErrorKind`] classification.
//! - Shared data models: [`ChatMessage`], [`Session`], [`PollOutcome`].
//! - Internal networking helpers.

/// The main client (`YtClient`), builder, and endpoint defaults.
pub mod client;
/// The primary error type (`YtError`) for the crate.
pub mod error;
/// Shared data models used across the pipeline.
pub mod models;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::YtClient`
pub use client::{YtClient, YtClientBuilder};
pub use error::{ErrorKind, YtError};
pub use models::{ChatMessage, FALLBACK_CLIENT_VERSION, PollOutcome, STATUS_AUTHOR, Session};
