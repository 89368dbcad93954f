// Copyright 2026, Sweetpad
// For licensing, see https://github.com/sweetpad-fi/sweetpad-deploy/blob/main/licenses/COPYRIGHT.md

//! Per-network descriptors and endpoint resolution.

use std::env;

use serde::{Deserialize, Serialize};

use super::{accounts::AccountsConfig, config::DeployEnv};
use crate::utils::color::Color;

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("environment variable {} is not set (required by endpoint)", .0.red())]
    UnsetVariable(String),
    #[error("unterminated ${{..}} in endpoint url: {0}")]
    UnterminatedVariable(String),
    #[error("unsupported endpoint scheme: {0}")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NetworkConfig {
    pub chain_id: u64,
    /// Endpoint URL; may reference environment variables as `${VAR}`.
    pub url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Which deploy-script set applies to this network.
    pub env: DeployEnv,
    pub accounts: AccountsConfig,
    #[serde(default)]
    pub gas_multiplier: Option<f64>,
    #[serde(default)]
    pub confirmations: Option<u64>,
    #[serde(default)]
    pub fork: Option<ForkConfig>,
}

impl NetworkConfig {
    /// The endpoint URL with `${VAR}` references resolved.
    pub fn endpoint(&self) -> Result<String, NetworkError> {
        let url = interpolate(&self.url)?;
        check_endpoint(&url)?;
        Ok(url)
    }
}

/// Forking setup for a local devnode.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ForkConfig {
    #[serde(default)]
    pub enabled: bool,
    pub url: String,
    #[serde(default)]
    pub block_number: Option<u64>,
}

pub fn check_endpoint(endpoint: &str) -> Result<(), NetworkError> {
    let supported = ["http://", "https://", "ws://", "wss://"];
    if supported.iter().any(|scheme| endpoint.starts_with(scheme)) {
        Ok(())
    } else {
        Err(NetworkError::UnsupportedScheme(endpoint.to_string()))
    }
}

fn interpolate(url: &str) -> Result<String, NetworkError> {
    let mut out = String::with_capacity(url.len());
    let mut rest = url;
    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 2..];
        let Some(end) = tail.find('}') else {
            return Err(NetworkError::UnterminatedVariable(url.to_string()));
        };
        let name = &tail[..end];
        let value =
            env::var(name).map_err(|_| NetworkError::UnsetVariable(name.to_string()))?;
        out.push_str(&value);
        rest = &tail[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_variables() {
        env::set_var("SWEETPAD_TEST_API_KEY", "abc123");
        let url = interpolate("https://eth-rinkeby.alchemyapi.io/v2/${SWEETPAD_TEST_API_KEY}")
            .unwrap();
        assert_eq!(url, "https://eth-rinkeby.alchemyapi.io/v2/abc123");
    }

    #[test]
    fn reports_unset_variable() {
        env::remove_var("SWEETPAD_TEST_UNSET");
        let err = interpolate("https://rpc.example/${SWEETPAD_TEST_UNSET}").unwrap_err();
        assert!(matches!(err, NetworkError::UnsetVariable(name) if name == "SWEETPAD_TEST_UNSET"));
    }

    #[test]
    fn reports_unterminated_variable() {
        let err = interpolate("https://rpc.example/${OOPS").unwrap_err();
        assert!(matches!(err, NetworkError::UnterminatedVariable(_)));
    }

    #[test]
    fn checks_endpoint_scheme() {
        assert!(check_endpoint("http://127.0.0.1:8545").is_ok());
        assert!(check_endpoint("wss://rpc.example").is_ok());
        assert!(matches!(
            check_endpoint("ipc:///tmp/geth.ipc"),
            Err(NetworkError::UnsupportedScheme(_))
        ));
    }
}
