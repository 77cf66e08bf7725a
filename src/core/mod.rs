//! Core components of the `dcf-valuation` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The [`YahooClient`] and its builder.
//! - The primary [`DcfError`] type.
//! - Internal networking, retry and authentication logic.

/// The client (`YahooClient`), builder, retry policy and authentication.
pub mod client;
/// The primary error type (`DcfError`) for the crate.
pub mod error;
pub(crate) mod net;
pub(crate) mod wire;

// convenient re-exports so most code can just `use crate::core::YahooClient`
pub use client::{Backoff, RetryConfig, YahooClient, YahooClientBuilder};
pub use error::DcfError;
