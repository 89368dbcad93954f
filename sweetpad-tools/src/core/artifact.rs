// Copyright 2026, Sweetpad
// For licensing, see https://github.com/sweetpad-fi/sweetpad-deploy/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts.
//!
//! The contract layer enters this system as prebuilt artifacts in the
//! hardhat JSON shape: ABI plus creation bytecode. Constructor arguments are
//! ABI-encoded against the artifact's constructor inputs and appended to the
//! bytecode to form the init code.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt, Specifier},
    json_abi::JsonAbi,
    primitives::{keccak256, B256},
};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("artifact parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no artifact for contract {contract} at {}", .path.display())]
    Missing { contract: String, path: PathBuf },
    #[error("invalid bytecode hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("{contract} constructor takes {expected} arguments, got {got}")]
    ConstructorArity {
        contract: String,
        expected: usize,
        got: usize,
    },
    #[error("{contract}: value for constructor parameter `{param}` has the wrong type")]
    ArgMismatch { contract: String, param: String },
    #[error("abi error: {0}")]
    Abi(#[from] alloy::dyn_abi::Error),
}

/// A compiled contract in the hardhat artifact shape. Unknown fields of the
/// JSON are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub contract_name: String,
    pub abi: JsonAbi,
    pub bytecode: String,
}

impl Artifact {
    pub fn load(dir: impl AsRef<Path>, contract: &str) -> Result<Self, ArtifactError> {
        let path = dir.as_ref().join(format!("{contract}.json"));
        if !path.exists() {
            return Err(ArtifactError::Missing {
                contract: contract.to_string(),
                path,
            });
        }
        let contents = fs::read_to_string(path)?;
        let artifact = serde_json::from_str(&contents)?;
        Ok(artifact)
    }

    pub fn bytecode_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        let text = self.bytecode.strip_prefix("0x").unwrap_or(&self.bytecode);
        Ok(hex::decode(text)?)
    }

    pub fn bytecode_hash(&self) -> Result<B256, ArtifactError> {
        Ok(keccak256(self.bytecode_bytes()?))
    }

    /// ABI-encodes constructor arguments against this artifact's constructor
    /// inputs. Arity and type mismatches are reported naming the parameter.
    pub fn encode_constructor(&self, args: &[DynSolValue]) -> Result<Vec<u8>, ArtifactError> {
        let Some(constructor) = self.abi.constructor.as_ref() else {
            if args.is_empty() {
                return Ok(Vec::new());
            }
            return Err(ArtifactError::ConstructorArity {
                contract: self.contract_name.clone(),
                expected: 0,
                got: args.len(),
            });
        };

        if args.len() != constructor.inputs.len() {
            return Err(ArtifactError::ConstructorArity {
                contract: self.contract_name.clone(),
                expected: constructor.inputs.len(),
                got: args.len(),
            });
        }
        for (value, param) in args.iter().zip(constructor.inputs.iter()) {
            let ty = param.resolve()?;
            if !ty.matches(value) {
                return Err(ArtifactError::ArgMismatch {
                    contract: self.contract_name.clone(),
                    param: param.name.clone(),
                });
            }
        }

        Ok(constructor.abi_encode_input_raw(args)?)
    }

    /// Creation bytecode with encoded constructor arguments appended.
    pub fn init_code(&self, args: &[DynSolValue]) -> Result<Vec<u8>, ArtifactError> {
        let mut code = self.bytecode_bytes()?;
        code.extend(self.encode_constructor(args)?);
        Ok(code)
    }
}

/// Loads artifacts from a directory, caching by contract name.
#[derive(Debug)]
pub struct ArtifactStore {
    dir: PathBuf,
    cache: HashMap<String, Artifact>,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: HashMap::new(),
        }
    }

    pub fn get(&mut self, contract: &str) -> Result<&Artifact, ArtifactError> {
        if !self.cache.contains_key(contract) {
            let artifact = Artifact::load(&self.dir, contract)?;
            self.cache.insert(contract.to_string(), artifact);
        }
        Ok(&self.cache[contract])
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{Address, U256};

    use super::*;

    const TOKEN_ARTIFACT: &str = r#"{
        "_format": "hh-sol-artifact-1",
        "contractName": "Token",
        "sourceName": "contracts/Token.sol",
        "abi": [],
        "bytecode": "0x6080604052",
        "deployedBytecode": "0x6080",
        "linkReferences": {},
        "deployedLinkReferences": {}
    }"#;

    const VAULT_ARTIFACT: &str = r#"{
        "contractName": "Vault",
        "abi": [
            {
                "type": "constructor",
                "stateMutability": "nonpayable",
                "inputs": [
                    { "internalType": "address", "name": "token_", "type": "address" },
                    { "internalType": "uint256", "name": "cap_", "type": "uint256" }
                ]
            }
        ],
        "bytecode": "0x600a600c600039600a6000f3"
    }"#;

    fn write_artifacts(dir: &Path) {
        fs::write(dir.join("Token.json"), TOKEN_ARTIFACT).unwrap();
        fs::write(dir.join("Vault.json"), VAULT_ARTIFACT).unwrap();
    }

    #[test]
    fn loads_and_caches_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        write_artifacts(dir.path());
        let mut store = ArtifactStore::new(dir.path());
        let artifact = store.get("Token").unwrap();
        assert_eq!(artifact.contract_name, "Token");
        assert_eq!(artifact.bytecode_bytes().unwrap().len(), 5);
        // Second lookup is served from the cache even if the file goes away.
        fs::remove_file(dir.path().join("Token.json")).unwrap();
        assert!(store.get("Token").is_ok());
    }

    #[test]
    fn missing_artifact_names_contract() {
        let dir = tempfile::tempdir().unwrap();
        let err = Artifact::load(dir.path(), "Ghost").unwrap_err();
        assert!(matches!(err, ArtifactError::Missing { contract, .. } if contract == "Ghost"));
    }

    #[test]
    fn encodes_constructor_args() {
        let artifact: Artifact = serde_json::from_str(VAULT_ARTIFACT).unwrap();
        let args = [
            DynSolValue::Address(Address::ZERO),
            DynSolValue::Uint(U256::from(1000), 256),
        ];
        let encoded = artifact.encode_constructor(&args).unwrap();
        assert_eq!(encoded.len(), 64);
        let init = artifact.init_code(&args).unwrap();
        assert_eq!(init.len(), 12 + 64);
    }

    #[test]
    fn rejects_arity_mismatch() {
        let artifact: Artifact = serde_json::from_str(VAULT_ARTIFACT).unwrap();
        let err = artifact
            .encode_constructor(&[DynSolValue::Address(Address::ZERO)])
            .unwrap_err();
        assert!(matches!(
            err,
            ArtifactError::ConstructorArity { expected: 2, got: 1, .. }
        ));
    }

    #[test]
    fn rejects_type_mismatch() {
        let artifact: Artifact = serde_json::from_str(VAULT_ARTIFACT).unwrap();
        let args = [
            DynSolValue::Uint(U256::from(1), 256),
            DynSolValue::Uint(U256::from(1000), 256),
        ];
        let err = artifact.encode_constructor(&args).unwrap_err();
        assert!(matches!(err, ArtifactError::ArgMismatch { param, .. } if param == "token_"));
    }

    #[test]
    fn no_constructor_takes_no_args() {
        let artifact: Artifact = serde_json::from_str(TOKEN_ARTIFACT).unwrap();
        assert!(artifact.encode_constructor(&[]).unwrap().is_empty());
        let err = artifact
            .encode_constructor(&[DynSolValue::Uint(U256::ZERO, 256)])
            .unwrap_err();
        assert!(matches!(err, ArtifactError::ConstructorArity { .. }));
    }
}
