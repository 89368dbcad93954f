// Copyright 2026, Sweetpad
// For licensing, see https://github.com/sweetpad-fi/sweetpad-deploy/blob/main/licenses/COPYRIGHT.md

//! Deployment descriptors.
//!
//! A [`DeployScript`] declares how one or more contracts are constructed and
//! under which tags it runs; a [`ScriptRegistry`] is the active script set for
//! an environment. Scripts never execute themselves, planning and execution
//! live in [`plan`](super::plan) and [`deployment`](super::deployment).

use std::fmt;

use alloy::primitives::{Address, B256, U256};

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("duplicate script: {0}")]
    DuplicateScript(String),
    #[error("duplicate deployment name: {0}")]
    DuplicateDeployment(String),
}

/// A constructor argument, resolved at execution time.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// A literal address.
    Address(Address),
    /// The address of a prior deployment, looked up by deployment name.
    Deployment(String),
    /// The address of a named account.
    Account(String),
    Uint(U256),
    FixedBytes(B256),
    /// An ether amount such as `"0.1"`, parsed to wei at resolution.
    Ether(String),
}

impl ArgValue {
    pub fn deployment(name: impl Into<String>) -> Self {
        ArgValue::Deployment(name.into())
    }

    pub fn account(name: impl Into<String>) -> Self {
        ArgValue::Account(name.into())
    }

    pub fn ether(amount: impl Into<String>) -> Self {
        ArgValue::Ether(amount.into())
    }
}

impl From<Address> for ArgValue {
    fn from(address: Address) -> Self {
        ArgValue::Address(address)
    }
}

impl From<U256> for ArgValue {
    fn from(value: U256) -> Self {
        ArgValue::Uint(value)
    }
}

impl From<u64> for ArgValue {
    fn from(value: u64) -> Self {
        ArgValue::Uint(U256::from(value))
    }
}

impl From<B256> for ArgValue {
    fn from(value: B256) -> Self {
        ArgValue::FixedBytes(value)
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Address(address) => write!(f, "{address}"),
            ArgValue::Deployment(name) => write!(f, "deployment({name})"),
            ArgValue::Account(name) => write!(f, "account({name})"),
            ArgValue::Uint(value) => write!(f, "{value}"),
            ArgValue::FixedBytes(value) => write!(f, "{value}"),
            ArgValue::Ether(amount) => write!(f, "{amount} ether"),
        }
    }
}

/// One contract deployment: which artifact, which signer, which arguments.
#[derive(Debug, Clone)]
pub struct ContractDeployment {
    /// Deployment name, the key under which the record is stored.
    pub name: String,
    /// Artifact name; defaults to the deployment name.
    pub contract: String,
    /// Named account signing the create transaction.
    pub from: String,
    pub args: Vec<ArgValue>,
    pub log: bool,
}

impl ContractDeployment {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            contract: name.clone(),
            name,
            from: "deployer".to_string(),
            args: Vec::new(),
            log: true,
        }
    }

    pub fn contract(mut self, contract: impl Into<String>) -> Self {
        self.contract = contract.into();
        self
    }

    pub fn from_account(mut self, name: impl Into<String>) -> Self {
        self.from = name.into();
        self
    }

    pub fn arg(mut self, arg: impl Into<ArgValue>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn log(mut self, log: bool) -> Self {
        self.log = log;
        self
    }
}

/// A deploy script: tags it runs under, dependency tags that must run first,
/// and the deployments it performs.
#[derive(Debug, Clone)]
pub struct DeployScript {
    pub name: String,
    pub tags: Vec<String>,
    pub dependencies: Vec<String>,
    pub deployments: Vec<ContractDeployment>,
}

impl DeployScript {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: Vec::new(),
            dependencies: Vec::new(),
            deployments: Vec::new(),
        }
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn dependency(mut self, tag: impl Into<String>) -> Self {
        self.dependencies.push(tag.into());
        self
    }

    pub fn deploys(mut self, deployment: ContractDeployment) -> Self {
        self.deployments.push(deployment);
        self
    }
}

/// The active script set for an environment. Registration order is preserved
/// and used to break planning ties, so plans are deterministic.
#[derive(Debug, Clone, Default)]
pub struct ScriptRegistry {
    scripts: Vec<DeployScript>,
}

impl ScriptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, script: DeployScript) -> Result<(), RegistryError> {
        if self.scripts.iter().any(|s| s.name == script.name) {
            return Err(RegistryError::DuplicateScript(script.name));
        }
        for deployment in &script.deployments {
            if self
                .scripts
                .iter()
                .flat_map(|s| &s.deployments)
                .any(|d| d.name == deployment.name)
            {
                return Err(RegistryError::DuplicateDeployment(deployment.name.clone()));
            }
        }
        self.scripts.push(script);
        Ok(())
    }

    pub fn scripts(&self) -> &[DeployScript] {
        &self.scripts
    }

    pub fn get(&self, name: &str) -> Option<&DeployScript> {
        self.scripts.iter().find(|s| s.name == name)
    }

    /// Indices of scripts carrying a tag, in registration order.
    pub fn scripts_with_tag(&self, tag: &str) -> Vec<usize> {
        self.scripts
            .iter()
            .enumerate()
            .filter(|(_, s)| s.tags.iter().any(|t| t == tag))
            .map(|(i, _)| i)
            .collect()
    }
}
