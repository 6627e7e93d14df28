pub mod builder;
pub mod client;
pub mod defaults;
pub mod envelope;
pub mod interpreter;
pub mod tables;
pub mod xml;

pub use crate::domain::model::{FiscalDocument, NormalizedResult};
pub use crate::domain::ports::{FiscalPrinter, Transport};
pub use crate::utils::error::Result;
