// Copyright 2026, Sweetpad
// For licensing, see https://github.com/sweetpad-fi/sweetpad-deploy/blob/main/licenses/COPYRIGHT.md

//! Deployment records.
//!
//! Every executed deployment is recorded under its deployment name, either as
//! `deployments/<network>/<Name>.json` on disk or in memory for offline runs
//! and fixtures. Records are what later runs compare against to decide
//! whether a contract can be reused.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use alloy::primitives::{Address, TxHash, B256};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("record parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no deployment record for {0}")]
    MissingRecord(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentRecord {
    /// Artifact name the deployment was built from.
    pub contract: String,
    pub address: Address,
    pub transaction_hash: Option<TxHash>,
    pub block_number: Option<u64>,
    /// Resolved constructor arguments, in display form.
    pub args: Vec<String>,
    pub bytecode_hash: B256,
}

#[derive(Debug, Clone)]
pub enum DeploymentsStore {
    Dir { network_dir: PathBuf },
    Memory { records: BTreeMap<String, DeploymentRecord> },
}

impl DeploymentsStore {
    pub fn dir(root: impl AsRef<Path>, network: &str) -> Self {
        DeploymentsStore::Dir {
            network_dir: root.as_ref().join(network),
        }
    }

    pub fn memory() -> Self {
        DeploymentsStore::Memory {
            records: BTreeMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Result<Option<DeploymentRecord>, StoreError> {
        match self {
            DeploymentsStore::Dir { network_dir } => {
                let path = record_path(network_dir, name);
                if !path.exists() {
                    return Ok(None);
                }
                let contents = fs::read_to_string(path)?;
                Ok(Some(serde_json::from_str(&contents)?))
            }
            DeploymentsStore::Memory { records } => Ok(records.get(name).cloned()),
        }
    }

    pub fn put(&mut self, name: &str, record: DeploymentRecord) -> Result<(), StoreError> {
        match self {
            DeploymentsStore::Dir { network_dir } => {
                fs::create_dir_all(&network_dir)?;
                let contents = serde_json::to_string_pretty(&record)?;
                fs::write(record_path(network_dir, name), contents)?;
                Ok(())
            }
            DeploymentsStore::Memory { records } => {
                records.insert(name.to_string(), record);
                Ok(())
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        match self {
            DeploymentsStore::Dir { network_dir } => record_path(network_dir, name).exists(),
            DeploymentsStore::Memory { records } => records.contains_key(name),
        }
    }

    pub fn address(&self, name: &str) -> Result<Address, StoreError> {
        self.get(name)?
            .map(|record| record.address)
            .ok_or_else(|| StoreError::MissingRecord(name.to_string()))
    }

    pub fn list(&self) -> Result<Vec<(String, DeploymentRecord)>, StoreError> {
        match self {
            DeploymentsStore::Dir { network_dir } => {
                let mut records = Vec::new();
                if !network_dir.exists() {
                    return Ok(records);
                }
                for entry in fs::read_dir(network_dir)? {
                    let path = entry?.path();
                    if path.extension().and_then(|e| e.to_str()) != Some("json") {
                        continue;
                    }
                    let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                        continue;
                    };
                    let contents = fs::read_to_string(&path)?;
                    records.push((name.to_string(), serde_json::from_str(&contents)?));
                }
                records.sort_by(|a, b| a.0.cmp(&b.0));
                Ok(records)
            }
            DeploymentsStore::Memory { records } => Ok(records
                .iter()
                .map(|(name, record)| (name.clone(), record.clone()))
                .collect()),
        }
    }
}

fn record_path(network_dir: &Path, name: &str) -> PathBuf {
    network_dir.join(format!("{name}.json"))
}

#[cfg(test)]
mod tests {
    use alloy::primitives::keccak256;

    use super::*;

    fn record(contract: &str) -> DeploymentRecord {
        DeploymentRecord {
            contract: contract.to_string(),
            address: Address::repeat_byte(0x11),
            transaction_hash: None,
            block_number: Some(1),
            args: vec!["100".to_string()],
            bytecode_hash: keccak256(b"code"),
        }
    }

    #[test]
    fn memory_store_roundtrip() {
        let mut store = DeploymentsStore::memory();
        assert!(store.get("Token").unwrap().is_none());
        store.put("Token", record("Token")).unwrap();
        assert!(store.contains("Token"));
        assert_eq!(store.get("Token").unwrap().unwrap(), record("Token"));
        assert_eq!(store.address("Token").unwrap(), Address::repeat_byte(0x11));
    }

    #[test]
    fn dir_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DeploymentsStore::dir(dir.path(), "localhost");
        store.put("Token", record("Token")).unwrap();
        assert!(dir.path().join("localhost/Token.json").exists());

        // A fresh handle over the same directory sees the record.
        let reopened = DeploymentsStore::dir(dir.path(), "localhost");
        assert_eq!(reopened.get("Token").unwrap().unwrap(), record("Token"));
        assert_eq!(reopened.list().unwrap().len(), 1);
    }

    #[test]
    fn missing_record_is_an_error_for_address() {
        let store = DeploymentsStore::memory();
        assert!(matches!(
            store.address("Token"),
            Err(StoreError::MissingRecord(name)) if name == "Token"
        ));
    }

    #[test]
    fn list_is_sorted_by_name() {
        let mut store = DeploymentsStore::memory();
        store.put("B", record("B")).unwrap();
        store.put("A", record("A")).unwrap();
        let names: Vec<_> = store.list().unwrap().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["A", "B"]);
    }
}
