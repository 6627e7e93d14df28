//! TOML job files: printer connection, optional identity defaults and
//! exactly one document.
//!
//! ```toml
//! [printer]
//! host = "192.168.1.10"
//! device_id = "local_printer"
//! timeout = 10000
//!
//! [defaults]
//! operator = 2
//!
//! [receipt]
//! [[receipt.sales]]
//! description = "Espresso"
//! quantity = 2
//! unit_price = 1.2
//!
//! [[receipt.payments]]
//! description = "Payment in cash"
//! amount = 2.4
//! ```

use crate::config::PrinterConfig;
use crate::core::defaults::CommandDefaults;
use crate::domain::model::{
    CancelRequest, DeviceCommand, FiscalDocument, ReceiptDocument, ReportRequest,
};
use crate::utils::error::{FpMateError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub printer: PrinterConfig,
    #[serde(default)]
    pub defaults: CommandDefaults,
    #[serde(default)]
    pub receipt: Option<ReceiptDocument>,
    #[serde(default)]
    pub report: Option<ReportRequest>,
    #[serde(default)]
    pub cancel: Option<CancelRequest>,
    #[serde(default)]
    pub commands: Vec<DeviceCommand>,
}

impl JobConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FpMateError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FpMateError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// The single document this job sends.
    pub fn document(&self) -> Result<FiscalDocument<'_>> {
        let mut found = Vec::new();
        if let Some(receipt) = &self.receipt {
            found.push(FiscalDocument::Receipt(receipt));
        }
        if let Some(report) = &self.report {
            found.push(FiscalDocument::Report(report));
        }
        if let Some(cancel) = &self.cancel {
            found.push(FiscalDocument::Cancel(cancel));
        }
        if !self.commands.is_empty() {
            found.push(FiscalDocument::Commands(&self.commands));
        }

        match found.as_slice() {
            [document] => Ok(*document),
            [] => Err(FpMateError::MissingConfigError {
                field: "receipt | report | cancel | commands".to_string(),
            }),
            many => Err(FpMateError::ConfigError {
                message: format!(
                    "A job sends exactly one document, found {}: {}",
                    many.len(),
                    many.iter().map(|d| d.label()).collect::<Vec<_>>().join(", ")
                ),
            }),
        }
    }
}

impl Validate for JobConfig {
    fn validate(&self) -> Result<()> {
        self.printer.validate()?;
        self.document()?;
        Ok(())
    }
}
