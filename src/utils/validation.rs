use crate::utils::error::{FpMateError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(FpMateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(FpMateError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(FpMateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// The printer host is an authority (`ip[:port]`), never a full URL.
pub fn validate_host(field_name: &str, host: &str) -> Result<()> {
    validate_non_empty_string(field_name, host)?;

    if host.contains("://") || host.contains('/') || host.contains('?') {
        return Err(FpMateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: host.to_string(),
            reason: "Expected host[:port] without scheme or path".to_string(),
        });
    }

    validate_url(field_name, &format!("http://{}/", host))
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FpMateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(FpMateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("endpoint", "http://192.168.1.10/cgi-bin/fpmate.cgi").is_ok());
        assert!(validate_url("endpoint", "https://example.com").is_ok());
        assert!(validate_url("endpoint", "").is_err());
        assert!(validate_url("endpoint", "invalid-url").is_err());
        assert!(validate_url("endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_host() {
        assert!(validate_host("printer.host", "192.168.1.10").is_ok());
        assert!(validate_host("printer.host", "127.0.0.1:8080").is_ok());
        assert!(validate_host("printer.host", "printer.local").is_ok());
        assert!(validate_host("printer.host", "").is_err());
        assert!(validate_host("printer.host", "   ").is_err());
        assert!(validate_host("printer.host", "http://192.168.1.10").is_err());
        assert!(validate_host("printer.host", "192.168.1.10/cgi-bin").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("printer.timeout", 10_000u64, 1, 600_000).is_ok());
        assert!(validate_range("printer.timeout", 0u64, 1, 600_000).is_err());
        assert!(validate_range("printer.timeout", 600_001u64, 1, 600_000).is_err());
    }
}
