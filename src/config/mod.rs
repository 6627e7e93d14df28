#[cfg(feature = "cli")]
pub mod cli;
pub mod job_config;

use crate::utils::error::{FpMateError, Result};
use crate::utils::validation::{validate_host, validate_range, Validate};
use serde::{Deserialize, Serialize};
use url::Url;

pub const CGI_PATH: &str = "/cgi-bin/fpmate.cgi";

/// Longest wait the FpMate web server accepts, in milliseconds.
pub const MAX_TIMEOUT_MS: u64 = 600_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrinterConfig {
    /// `ip[:port]` of the printer's embedded web server.
    pub host: String,
    #[serde(default)]
    pub device_id: Option<String>,
    /// Milliseconds; sent to the device and used as the HTTP timeout.
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl PrinterConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            device_id: None,
            timeout: None,
        }
    }

    pub fn with_device_id(mut self, device_id: impl Into<String>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }

    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout = Some(timeout_ms);
        self
    }

    /// A zero timeout means "not configured".
    pub fn effective_timeout(&self) -> Option<u64> {
        self.timeout.filter(|t| *t > 0)
    }

    /// `http://{host}/cgi-bin/fpmate.cgi[?devid=..][&timeout=..]`, values form-encoded.
    pub fn endpoint_url(&self) -> Result<String> {
        let base = format!("http://{}{}", self.host, CGI_PATH);
        let mut url = Url::parse(&base).map_err(|e| FpMateError::InvalidConfigValueError {
            field: "printer.host".to_string(),
            value: self.host.clone(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        let mut query = Vec::new();
        if let Some(device_id) = &self.device_id {
            query.push(("devid", device_id.clone()));
        }
        if let Some(timeout) = self.effective_timeout() {
            query.push(("timeout", timeout.to_string()));
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url.to_string())
    }
}

impl Validate for PrinterConfig {
    fn validate(&self) -> Result<()> {
        validate_host("printer.host", &self.host)?;
        if let Some(timeout) = self.timeout {
            validate_range("printer.timeout", timeout, 1, MAX_TIMEOUT_MS)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_without_options() {
        let config = PrinterConfig::new("192.168.1.10");
        assert_eq!(
            config.endpoint_url().unwrap(),
            "http://192.168.1.10/cgi-bin/fpmate.cgi"
        );
    }

    #[test]
    fn test_endpoint_query_composition() {
        let both = PrinterConfig::new("127.0.0.1")
            .with_device_id("local_printer")
            .with_timeout(10000);
        assert_eq!(
            both.endpoint_url().unwrap(),
            "http://127.0.0.1/cgi-bin/fpmate.cgi?devid=local_printer&timeout=10000"
        );

        let timeout_only = PrinterConfig::new("127.0.0.1:8080").with_timeout(5000);
        assert_eq!(
            timeout_only.endpoint_url().unwrap(),
            "http://127.0.0.1:8080/cgi-bin/fpmate.cgi?timeout=5000"
        );

        let zero_timeout = PrinterConfig::new("127.0.0.1").with_device_id("p1").with_timeout(0);
        assert_eq!(
            zero_timeout.endpoint_url().unwrap(),
            "http://127.0.0.1/cgi-bin/fpmate.cgi?devid=p1"
        );
    }

    #[test]
    fn test_device_id_is_form_encoded() {
        let config = PrinterConfig::new("127.0.0.1")
            .with_device_id("front desk&x=1")
            .with_timeout(10000);
        assert_eq!(
            config.endpoint_url().unwrap(),
            "http://127.0.0.1/cgi-bin/fpmate.cgi?devid=front+desk%26x%3D1&timeout=10000"
        );
    }

    #[test]
    fn test_validate() {
        assert!(PrinterConfig::new("192.168.1.10").validate().is_ok());
        assert!(PrinterConfig::new("192.168.1.10").with_timeout(10000).validate().is_ok());
        assert!(PrinterConfig::new("").validate().is_err());
        assert!(PrinterConfig::new("http://192.168.1.10").validate().is_err());
        assert!(PrinterConfig::new("192.168.1.10").with_timeout(0).validate().is_err());
        assert!(PrinterConfig::new("192.168.1.10")
            .with_timeout(MAX_TIMEOUT_MS + 1)
            .validate()
            .is_err());
    }
}
