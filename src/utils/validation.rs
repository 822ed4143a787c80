use crate::utils::error::{AtisError, Result};
use std::net::IpAddr;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(AtisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(AtisError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(AtisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_listen_addr(field_name: &str, addr: &str) -> Result<()> {
    addr.parse::<IpAddr>()
        .map(|_| ())
        .map_err(|e| AtisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: format!("Invalid IP address: {}", e),
        })
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(AtisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_accepts_http_and_https() {
        assert!(validate_url("atis_url", "https://www.egcbatis.co.uk/main/index.php").is_ok());
        assert!(validate_url("atis_url", "http://localhost:8080/atis").is_ok());
    }

    #[test]
    fn test_validate_url_rejects_bad_input() {
        assert!(validate_url("atis_url", "").is_err());
        assert!(validate_url("atis_url", "ftp://example.com/atis").is_err());
        assert!(validate_url("atis_url", "not a url").is_err());
    }

    #[test]
    fn test_validate_listen_addr() {
        assert!(validate_listen_addr("listen_addr", "0.0.0.0").is_ok());
        assert!(validate_listen_addr("listen_addr", "127.0.0.1").is_ok());
        assert!(validate_listen_addr("listen_addr", "::1").is_ok());
        assert!(validate_listen_addr("listen_addr", "barton").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("request_timeout_secs", 10, 1).is_ok());
        assert!(validate_positive_number("request_timeout_secs", 0, 1).is_err());
    }
}
