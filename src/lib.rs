pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliArgs;

pub use crate::adapters::http::HttpTransport;
pub use crate::config::{job_config::JobConfig, PrinterConfig};
pub use crate::core::{builder::CommandBuilder, client::FpMateClient, defaults::CommandDefaults};
pub use crate::domain::model::*;
pub use crate::domain::ports::{FiscalPrinter, Transport};
pub use crate::utils::error::{FpMateError, Result};
