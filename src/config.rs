//! Runtime configuration for a synchronization run.
//!
//! Everything comes from environment variables (a `.env` file is honored when
//! present) and is resolved once at startup. The resulting [`SyncConfig`] is
//! passed down to the components that need each piece; nothing reads the
//! environment after this module returns.

use dotenvy::dotenv;
use secrecy::Secret;
use serde::Serialize;
use std::env;

const DEFAULT_STRIPE_API_BASE_URL: &str = "https://api.stripe.com";
const DEFAULT_TAXJAR_API_BASE_URL: &str = "https://api.taxjar.com";

/// Default page size for billing API list calls
const DEFAULT_REQUEST_LIMIT: u32 = 100;
/// Largest page size the billing API accepts
const MAX_REQUEST_LIMIT: u32 = 100;

/// Error types for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Complete configuration for one synchronization run
#[derive(Clone, Debug)]
pub struct SyncConfig {
    pub stripe: StripeConfig,
    pub taxjar: TaxJarConfig,
    pub from_address: FromAddress,
    /// Page size used for billing API list calls, 1 to 100
    pub request_limit: u32,
}

#[derive(Clone, Debug)]
pub struct StripeConfig {
    pub api_key: Secret<String>,
    pub api_base_url: String,
}

#[derive(Clone, Debug)]
pub struct TaxJarConfig {
    pub api_key: Secret<String>,
    pub api_base_url: String,
}

/// Seller origin address attached to every submitted transaction.
///
/// Serializes with the `from_` field names the tax service expects, so it can
/// be flattened straight into a transaction payload.
#[derive(Clone, Debug, Serialize)]
pub struct FromAddress {
    #[serde(rename = "from_country")]
    pub country: String,
    #[serde(rename = "from_zip")]
    pub zip: String,
    #[serde(rename = "from_state")]
    pub state: String,
    #[serde(rename = "from_city")]
    pub city: String,
    #[serde(rename = "from_street")]
    pub street: String,
}

impl SyncConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let stripe_api_key = require("STRIPE_API_KEY")?;
        let stripe_api_base_url = env::var("STRIPE_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_STRIPE_API_BASE_URL.to_string());

        let taxjar_api_key = require("TAXJAR_API_KEY")?;
        let taxjar_api_base_url = env::var("TAXJAR_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_TAXJAR_API_BASE_URL.to_string());

        let request_limit = parse_request_limit(env::var("REQUEST_LIMIT").ok())?;

        Ok(Self {
            stripe: StripeConfig {
                api_key: Secret::new(stripe_api_key),
                api_base_url: stripe_api_base_url,
            },
            taxjar: TaxJarConfig {
                api_key: Secret::new(taxjar_api_key),
                api_base_url: taxjar_api_base_url,
            },
            from_address: FromAddress {
                country: require("FROM_COUNTRY")?,
                zip: require("FROM_ZIP")?,
                state: require("FROM_STATE")?,
                city: require("FROM_CITY")?,
                street: require("FROM_STREET")?,
            },
            request_limit,
        })
    }
}

/// Read a required variable, treating an empty value as missing
fn require(var: &'static str) -> Result<String, ConfigError> {
    match env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(var)),
    }
}

fn parse_request_limit(raw: Option<String>) -> Result<u32, ConfigError> {
    let raw = match raw {
        Some(raw) => raw,
        None => return Ok(DEFAULT_REQUEST_LIMIT),
    };

    let limit: u32 = raw.trim().parse().map_err(|_| ConfigError::Invalid {
        var: "REQUEST_LIMIT",
        reason: format!("expected an integer, got {:?}", raw),
    })?;

    if limit == 0 || limit > MAX_REQUEST_LIMIT {
        return Err(ConfigError::Invalid {
            var: "REQUEST_LIMIT",
            reason: format!("must be between 1 and {}", MAX_REQUEST_LIMIT),
        });
    }

    Ok(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_limit_defaults_when_unset() {
        assert_eq!(parse_request_limit(None).unwrap(), DEFAULT_REQUEST_LIMIT);
    }

    #[test]
    fn request_limit_accepts_values_in_range() {
        assert_eq!(parse_request_limit(Some("1".to_string())).unwrap(), 1);
        assert_eq!(parse_request_limit(Some("25".to_string())).unwrap(), 25);
        assert_eq!(parse_request_limit(Some("100".to_string())).unwrap(), 100);
    }

    #[test]
    fn request_limit_rejects_zero_and_oversized_values() {
        assert!(parse_request_limit(Some("0".to_string())).is_err());
        assert!(parse_request_limit(Some("101".to_string())).is_err());
    }

    #[test]
    fn request_limit_rejects_garbage() {
        let err = parse_request_limit(Some("lots".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "REQUEST_LIMIT", .. }));
    }
}
