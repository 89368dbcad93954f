// Copyright 2026, Sweetpad
// For licensing, see https://github.com/sweetpad-fi/sweetpad-deploy/blob/main/licenses/COPYRIGHT.md

//! Plan execution.
//!
//! The runner walks a [`Plan`] in order, resolves each deployment's
//! constructor arguments against the named signers and the records written so
//! far, and hands the init code to a [`DeployBackend`]. A deployment whose
//! record already matches (same contract, arguments and bytecode) is reused
//! instead of redeployed.

use alloy::{
    dyn_abi::DynSolValue,
    network::TransactionBuilder,
    primitives::{
        utils::{parse_ether, UnitsError},
        Address, TxHash,
    },
    providers::Provider,
    rpc::types::{TransactionReceipt, TransactionRequest},
};

use crate::utils::{
    color::{Color, DebugColor},
    format_gas,
};

use super::{
    accounts::{AccountsError, NamedSigners},
    artifact::{ArtifactError, ArtifactStore},
    network::NetworkConfig,
    plan::Plan,
    script::{ArgValue, ScriptRegistry},
    store::{DeploymentRecord, DeploymentsStore, StoreError},
};
use backend::{DeployBackend, Deployed};

pub mod backend;

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
    #[error("{0}")]
    Accounts(#[from] AccountsError),
    #[error("{0}")]
    Artifact(#[from] ArtifactError),
    #[error("{0}")]
    Store(#[from] StoreError),
    #[error("invalid ether amount: {0}")]
    Ether(#[from] UnitsError),

    #[error("{deployment} needs the address of {name}, which has not been deployed")]
    MissingDependency { deployment: String, name: String },
    #[error("plan references unregistered script: {0}")]
    UnknownScript(String),
    #[error("tx failed to complete")]
    FailedToComplete,
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("no contract address in receipt")]
    NoContractAddress,
}

#[derive(Debug, Clone)]
pub struct DeploymentConfig {
    pub max_fee_per_gas_wei: Option<u128>,
    pub gas_multiplier: Option<f64>,
    pub confirmations: u64,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            max_fee_per_gas_wei: None,
            gas_multiplier: None,
            confirmations: 1,
        }
    }
}

impl DeploymentConfig {
    pub fn for_network(
        network: &NetworkConfig,
        defaults: &super::config::Defaults,
    ) -> Self {
        let max_fee_per_gas_wei = match defaults.gas_price {
            super::config::GasPrice::Auto => None,
            super::config::GasPrice::Gwei(gwei) => Some(gwei as u128 * 1_000_000_000),
        };
        Self {
            max_fee_per_gas_wei,
            gas_multiplier: network.gas_multiplier,
            confirmations: network.confirmations.unwrap_or(defaults.confirmations),
        }
    }
}

#[derive(Debug)]
pub struct DeploymentRequest {
    tx: TransactionRequest,
    max_fee_per_gas_wei: Option<u128>,
}

impl DeploymentRequest {
    pub fn new(sender: Address, init_code: Vec<u8>, max_fee_per_gas_wei: Option<u128>) -> Self {
        Self {
            tx: TransactionRequest::default()
                .with_from(sender)
                .with_deploy_code(init_code),
            max_fee_per_gas_wei,
        }
    }

    pub async fn estimate_gas(&self, provider: &impl Provider) -> Result<u64, DeploymentError> {
        Ok(provider.estimate_gas(self.tx.clone()).await?)
    }

    pub async fn exec(
        self,
        provider: &impl Provider,
        config: &DeploymentConfig,
    ) -> Result<TransactionReceipt, DeploymentError> {
        let mut gas = self.estimate_gas(provider).await?;
        if let Some(multiplier) = config.gas_multiplier {
            gas = (gas as f64 * multiplier) as u64;
        }
        let max_fee_per_gas = self.fee_per_gas(provider).await?;

        let mut tx = self.tx;
        tx.gas = Some(gas);
        tx.max_fee_per_gas = Some(max_fee_per_gas);
        tx.max_priority_fee_per_gas = Some(0);

        let tx = provider.send_transaction(tx).await?;
        let tx_hash = *tx.tx_hash();
        debug!(@grey, "sent deploy tx: {}", tx_hash.debug_lavender());

        let receipt = tx
            .with_required_confirmations(config.confirmations)
            .get_receipt()
            .await
            .or(Err(DeploymentError::FailedToComplete))?;
        if !receipt.status() {
            return Err(DeploymentError::Reverted { tx_hash });
        }

        Ok(receipt)
    }

    async fn fee_per_gas(&self, provider: &impl Provider) -> Result<u128, DeploymentError> {
        match self.max_fee_per_gas_wei {
            Some(wei) => Ok(wei),
            None => Ok(provider.get_gas_price().await?),
        }
    }
}

/// Executes a plan against a backend, writing a record per deployment.
/// Returns the deployment names with their addresses, reused ones included.
pub async fn run_plan<B: DeployBackend>(
    plan: &Plan,
    registry: &ScriptRegistry,
    signers: &NamedSigners,
    artifacts: &mut ArtifactStore,
    store: &mut DeploymentsStore,
    config: &DeploymentConfig,
    backend: &B,
) -> Result<Vec<(String, Address)>, DeploymentError> {
    let mut deployed = Vec::new();
    for step in &plan.steps {
        let script = registry
            .get(&step.script)
            .ok_or_else(|| DeploymentError::UnknownScript(step.script.clone()))?;
        debug!(@grey, "running deploy script {}", script.name.lavender());

        for deployment in &script.deployments {
            let artifact = artifacts.get(&deployment.contract)?;
            let bytecode_hash = artifact.bytecode_hash()?;

            let mut values = Vec::with_capacity(deployment.args.len());
            for arg in &deployment.args {
                values.push(resolve_arg(arg, &deployment.name, signers, store)?);
            }
            let args: Vec<String> = values.iter().map(display_arg).collect();

            if let Some(record) = store.get(&deployment.name)? {
                if record.contract == deployment.contract
                    && record.args == args
                    && record.bytecode_hash == bytecode_hash
                {
                    if deployment.log {
                        info!(@grey, "reusing {} at address: {}",
                            deployment.name.lavender(), record.address.debug_lavender());
                    }
                    deployed.push((deployment.name.clone(), record.address));
                    continue;
                }
                warn!(@yellow, "{} changed since its last deployment, redeploying", deployment.name);
            }

            let init_code = artifact.init_code(&values)?;
            let sender = signers.address(&deployment.from)?;
            let Deployed {
                address,
                transaction_hash,
                block_number,
                gas_used,
            } = backend.deploy(sender, init_code, config).await?;

            if deployment.log {
                info!(@grey, "deployed {} at address: {}",
                    deployment.name.lavender(), address.debug_lavender());
                if let Some(tx_hash) = transaction_hash {
                    info!(@grey, "deployment tx hash: {}", tx_hash.debug_lavender());
                }
                if let Some(gas) = gas_used {
                    debug!(@grey, "gas used: {}", format_gas(gas));
                }
            }

            store.put(
                &deployment.name,
                DeploymentRecord {
                    contract: deployment.contract.clone(),
                    address,
                    transaction_hash,
                    block_number,
                    args,
                    bytecode_hash,
                },
            )?;
            deployed.push((deployment.name.clone(), address));
        }
    }
    Ok(deployed)
}

fn resolve_arg(
    arg: &ArgValue,
    deployment: &str,
    signers: &NamedSigners,
    store: &DeploymentsStore,
) -> Result<DynSolValue, DeploymentError> {
    let value = match arg {
        ArgValue::Address(address) => DynSolValue::Address(*address),
        ArgValue::Deployment(name) => {
            let record = store
                .get(name)?
                .ok_or_else(|| DeploymentError::MissingDependency {
                    deployment: deployment.to_string(),
                    name: name.clone(),
                })?;
            DynSolValue::Address(record.address)
        }
        ArgValue::Account(name) => DynSolValue::Address(signers.address(name)?),
        ArgValue::Uint(value) => DynSolValue::Uint(*value, 256),
        ArgValue::FixedBytes(value) => DynSolValue::FixedBytes(*value, 32),
        ArgValue::Ether(amount) => DynSolValue::Uint(parse_ether(amount)?, 256),
    };
    Ok(value)
}

/// Display form of a resolved argument, as persisted in records.
fn display_arg(value: &DynSolValue) -> String {
    match value {
        DynSolValue::Address(address) => address.to_string(),
        DynSolValue::Uint(value, _) => value.to_string(),
        DynSolValue::FixedBytes(value, _) => value.to_string(),
        other => format!("{other:?}"),
    }
}
