// Copyright 2026, Sweetpad
// For licensing, see https://github.com/sweetpad-fi/sweetpad-deploy/blob/main/licenses/COPYRIGHT.md

//! Named-signer resolution.
//!
//! Deploy scripts refer to accounts by name (`deployer`, `owner`, ...); each
//! name maps to an index into the network's account source, either a mnemonic
//! derivation or an explicit private-key list.

use std::collections::BTreeMap;

use alloy::{
    network::EthereumWallet,
    primitives::Address,
    signers::{
        local::{coins_bip39::English, LocalSignerError, MnemonicBuilder, PrivateKeySigner},
        Signer,
    },
};
use serde::{Deserialize, Serialize};

use super::network::NetworkConfig;

#[derive(Debug, thiserror::Error)]
pub enum AccountsError {
    #[error("unknown account: {0}")]
    UnknownAccount(String),
    #[error("account {name} has index {index}, but only {count} accounts are derived")]
    IndexOutOfRange { name: String, index: u32, count: u32 },
    #[error("mnemonic error: {0}")]
    Mnemonic(#[from] alloy::signers::local::MnemonicBuilderError),
    #[error("invalid private key: {0}")]
    Key(#[from] LocalSignerError),
}

/// Account source for a network, mirroring the two shapes of the original
/// network config: a mnemonic derivation or an explicit key list.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AccountsConfig {
    Mnemonic {
        phrase: String,
        #[serde(default = "default_derivation_path")]
        path: String,
        #[serde(default)]
        initial_index: u32,
        #[serde(default = "default_count")]
        count: u32,
    },
    Keys(Vec<String>),
}

fn default_derivation_path() -> String {
    "m/44'/60'/0'/0".to_string()
}

fn default_count() -> u32 {
    20
}

impl AccountsConfig {
    fn count(&self) -> u32 {
        match self {
            AccountsConfig::Mnemonic { count, .. } => *count,
            AccountsConfig::Keys(keys) => keys.len() as u32,
        }
    }

    fn signer(&self, index: u32, chain_id: u64) -> Result<PrivateKeySigner, AccountsError> {
        let signer = match self {
            AccountsConfig::Mnemonic {
                phrase,
                path,
                initial_index,
                ..
            } => MnemonicBuilder::<English>::default()
                .phrase(phrase.as_str())
                .derivation_path(format!("{path}/{}", initial_index + index))?
                .build()?,
            AccountsConfig::Keys(keys) => {
                let key = keys[index as usize].trim();
                let key = key.strip_prefix("0x").unwrap_or(key);
                key.parse::<PrivateKeySigner>()?
            }
        };
        Ok(signer.with_chain_id(Some(chain_id)))
    }
}

/// Every named account of a network resolved to a local signer, plus a wallet
/// carrying all of them so the `from` field of a deployment selects its
/// signer.
#[derive(Debug, Clone)]
pub struct NamedSigners {
    signers: BTreeMap<String, PrivateKeySigner>,
    wallet: EthereumWallet,
}

impl NamedSigners {
    pub fn derive(
        network: &NetworkConfig,
        named_accounts: &BTreeMap<String, u32>,
    ) -> Result<Self, AccountsError> {
        let count = network.accounts.count();
        let mut signers = BTreeMap::new();
        for (name, &index) in named_accounts {
            if index >= count {
                return Err(AccountsError::IndexOutOfRange {
                    name: name.clone(),
                    index,
                    count,
                });
            }
            let signer = network.accounts.signer(index, network.chain_id)?;
            signers.insert(name.clone(), signer);
        }

        // The deployer signs by default; fall back to the first name.
        let default = signers
            .get("deployer")
            .or_else(|| signers.values().next())
            .cloned()
            .ok_or_else(|| AccountsError::UnknownAccount("deployer".to_string()))?;
        let mut wallet = EthereumWallet::new(default);
        for signer in signers.values() {
            wallet.register_signer(signer.clone());
        }

        Ok(Self { signers, wallet })
    }

    pub fn address(&self, name: &str) -> Result<Address, AccountsError> {
        self.signers
            .get(name)
            .map(|signer| signer.address())
            .ok_or_else(|| AccountsError::UnknownAccount(name.to_string()))
    }

    pub fn wallet(&self) -> &EthereumWallet {
        &self.wallet
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Address)> {
        self.signers
            .iter()
            .map(|(name, signer)| (name.as_str(), signer.address()))
    }
}
