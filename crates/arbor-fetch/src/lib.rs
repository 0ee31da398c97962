//! Streaming HTTP transport for batch tree materialization.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable configuration types
//! - [`effects`] - I/O operations with trait abstraction
//!
//! # Key Features
//!
//! - **Streaming bodies**: resources are surfaced as chunk streams so callers
//!   decide whether to spill to disk or buffer in memory
//! - **Mechanism-only**: no retry or progress policy; callers orchestrate both

mod data;
mod effects;
mod error;

pub use data::Timeouts;
pub use effects::{BoxStream, ByteStream, HttpClient, collect_bytes};

#[cfg(feature = "reqwest")]
pub use effects::ReqwestClient;

pub use error::FetchError;
