//! fed-routing-cli library
//!
//! This crate provides the core functionality for the `fed-routing-cli` binary, which pulls the
//! Fedwire and FedACH routing number directories from the Federal Reserve E-Payments
//! Directory service.
//!
//! ## Overview
//!
//! - [`validation`] - Structural checks for the org id and download code
//! - [`format`] - Format token resolution (XML, JSON, TEXT)
//! - [`fetcher`] - Authenticated retrieval and persistence of a single directory
//! - [`pipeline`] - Sequential, failure-isolated retrieval of both directories
//! - [`cli`] - Argument parsing and interactive prompts
//! - [`config`] - Base URL and output directory configuration
//! - [`models`] - Directory descriptions and fetch outcomes
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! ```no_run
//! use fed_routing_cli::{config::ResolvedConfig, fetcher::HttpTransport, pipeline};
//! use fed_routing_cli::{format::resolve_format, validation::Credentials, errors::AppResult};
//!
//! # async fn example() -> AppResult<()> {
//! let credentials = Credentials::new("123456789", "AAAAAAAA-BBBB-CCCC-DDDD-EEEEEEEEEEEE")?;
//! let transport = HttpTransport::new()?;
//! let outcomes = pipeline::run(
//!     &transport,
//!     &credentials,
//!     resolve_format("json"),
//!     &ResolvedConfig::default(),
//! )
//! .await;
//! pipeline::summarize(&outcomes);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod fetcher;
pub mod format;
pub mod models;
pub mod pipeline;
pub mod validation;

#[cfg(test)]
mod test_logs;
