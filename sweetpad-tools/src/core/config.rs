// Copyright 2026, Sweetpad
// For licensing, see https://github.com/sweetpad-fi/sweetpad-deploy/blob/main/licenses/COPYRIGHT.md

//! Root configuration loaded from `networks.toml`.

use std::{collections::BTreeMap, env, fmt, fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use super::network::NetworkConfig;

/// Filename for the network configuration file.
pub const FILENAME: &str = "networks.toml";

/// Environment variable overriding the active deploy environment.
pub const ENV_VAR: &str = "SWEETPAD_ENV";

/// Environment variable enabling the mock script overlay outside of dev.
pub const TEST_DEPLOY_VAR: &str = "TEST_DEPLOY";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(String),
    #[error("missing {FILENAME}")]
    Missing,
    #[error("no networks configured")]
    NoNetworks,
    #[error("unknown network: {0}")]
    UnknownNetwork(String),
    #[error("invalid deploy environment: {0}")]
    InvalidEnv(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        // Keep the message, drop the input dump.
        ConfigError::Parse(err.message().to_string())
    }
}

/// Which deploy-script set a network uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeployEnv {
    Dev,
    Stage,
    Prod,
}

impl fmt::Display for DeployEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeployEnv::Dev => write!(f, "dev"),
            DeployEnv::Stage => write!(f, "stage"),
            DeployEnv::Prod => write!(f, "prod"),
        }
    }
}

impl FromStr for DeployEnv {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(DeployEnv::Dev),
            "stage" => Ok(DeployEnv::Stage),
            "prod" => Ok(DeployEnv::Prod),
            other => Err(ConfigError::InvalidEnv(other.to_string())),
        }
    }
}

/// Gas price policy for deployment transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GasPrice {
    /// Ask the node for the current price.
    #[default]
    Auto,
    /// Fixed max fee per gas, in gwei.
    #[serde(untagged)]
    Gwei(u64),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default)]
    pub gas_price: GasPrice,
    #[serde(default = "default_confirmations")]
    pub confirmations: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            gas_price: GasPrice::default(),
            confirmations: default_confirmations(),
        }
    }
}

fn default_confirmations() -> u64 {
    1
}

/// Account names used by deploy scripts, mapped to derivation indices.
pub fn default_named_accounts() -> BTreeMap<String, u32> {
    BTreeMap::from([
        ("deployer".to_string(), 0),
        ("owner".to_string(), 1),
        ("caller".to_string(), 2),
        ("holder".to_string(), 3),
    ])
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub networks: BTreeMap<String, NetworkConfig>,
    #[serde(default = "default_named_accounts")]
    pub named_accounts: BTreeMap<String, u32>,
    #[serde(default)]
    pub defaults: Defaults,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if !path.as_ref().exists() {
            return Err(ConfigError::Missing);
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        if config.networks.is_empty() {
            return Err(ConfigError::NoNetworks);
        }
        Ok(config)
    }

    pub fn network(&self, name: &str) -> Result<&NetworkConfig, ConfigError> {
        self.networks
            .get(name)
            .ok_or_else(|| ConfigError::UnknownNetwork(name.to_string()))
    }

    /// The deploy environment for a network, honoring the `SWEETPAD_ENV`
    /// override.
    pub fn active_env(&self, network: &str) -> Result<DeployEnv, ConfigError> {
        if let Ok(value) = env::var(ENV_VAR) {
            return value.parse();
        }
        Ok(self.network(network)?.env)
    }

    /// Whether the mock script overlay is requested via `TEST_DEPLOY`.
    pub fn test_deploy(&self) -> bool {
        matches!(
            env::var(TEST_DEPLOY_VAR).as_deref(),
            Ok("1") | Ok("true") | Ok("yes")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [networks.localhost]
        chain_id = 31337
        url = "http://127.0.0.1:8545"
        tags = ["dev"]
        env = "dev"
        accounts = ["ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"]
    "#;

    #[test]
    fn parses_minimal_config() {
        let config: Config = toml::from_str(MINIMAL).unwrap();
        let network = config.network("localhost").unwrap();
        assert_eq!(network.chain_id, 31337);
        assert_eq!(network.env, DeployEnv::Dev);
        assert_eq!(config.named_accounts["deployer"], 0);
        assert_eq!(config.defaults.gas_price, GasPrice::Auto);
        assert_eq!(config.defaults.confirmations, 1);
    }

    #[test]
    fn parses_gas_price_gwei() {
        let config: Config =
            toml::from_str(&format!("{MINIMAL}\n[defaults]\ngas_price = 5")).unwrap();
        assert_eq!(config.defaults.gas_price, GasPrice::Gwei(5));
    }

    #[test]
    fn rejects_unknown_network() {
        let config: Config = toml::from_str(MINIMAL).unwrap();
        assert!(matches!(
            config.network("mainnet"),
            Err(ConfigError::UnknownNetwork(_))
        ));
    }

    #[test]
    fn rejects_unknown_env() {
        let err = toml::from_str::<Config>(&MINIMAL.replace("\"dev\"", "\"sandbox\""));
        assert!(err.is_err());
    }

    #[test]
    fn parses_deploy_env() {
        assert_eq!("prod".parse::<DeployEnv>().unwrap(), DeployEnv::Prod);
        assert!(matches!(
            "production".parse::<DeployEnv>(),
            Err(ConfigError::InvalidEnv(_))
        ));
    }
}
