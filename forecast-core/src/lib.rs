//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Argument parsing and validation of the country and date range
//! - The extraction client abstraction and its HTTP implementation
//! - Storing fetched datasets and checking their date coverage
//! - Configuration and typed errors
//!
//! Nothing in here prints or exits; that is left to the binary.

pub mod args;
pub mod config;
pub mod coverage;
pub mod error;
pub mod model;
pub mod provider;
pub mod store;
pub mod validate;

pub use config::{Config, Overrides};
pub use coverage::{Coverage, check_coverage};
pub use error::{CoverageError, ExtractError, StoreError, ValidationError};
pub use model::{Dataset, ForecastRecord, RawArgs, Request};
pub use provider::{ForecastProvider, provider_from_config};
pub use store::store_dataset;
pub use validate::{validate_args, validate_raw};
