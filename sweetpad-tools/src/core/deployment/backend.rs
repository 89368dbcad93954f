// Copyright 2026, Sweetpad
// For licensing, see https://github.com/sweetpad-fi/sweetpad-deploy/blob/main/licenses/COPYRIGHT.md

//! Execution backends.
//!
//! [`RpcBackend`] sends real create transactions through an alloy provider
//! whose wallet carries the named signers. [`SimBackend`] never touches a
//! chain: it assigns the `CREATE` address each deployment would get from a
//! fresh account state, which makes offline plans predict the addresses an
//! actual run would produce.

use std::{cell::RefCell, collections::HashMap};

use alloy::{
    primitives::{Address, TxHash},
    providers::Provider,
};

use super::{DeploymentConfig, DeploymentError, DeploymentRequest};

#[derive(Debug, Clone, Copy)]
pub struct Deployed {
    pub address: Address,
    pub transaction_hash: Option<TxHash>,
    pub block_number: Option<u64>,
    pub gas_used: Option<u128>,
}

#[allow(async_fn_in_trait)]
pub trait DeployBackend {
    async fn deploy(
        &self,
        sender: Address,
        init_code: Vec<u8>,
        config: &DeploymentConfig,
    ) -> Result<Deployed, DeploymentError>;
}

#[derive(Debug)]
pub struct RpcBackend<P> {
    provider: P,
}

impl<P: Provider> RpcBackend<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P: Provider> DeployBackend for RpcBackend<P> {
    async fn deploy(
        &self,
        sender: Address,
        init_code: Vec<u8>,
        config: &DeploymentConfig,
    ) -> Result<Deployed, DeploymentError> {
        let request = DeploymentRequest::new(sender, init_code, config.max_fee_per_gas_wei);
        let receipt = request.exec(&self.provider, config).await?;
        let address = receipt
            .contract_address
            .ok_or(DeploymentError::NoContractAddress)?;
        Ok(Deployed {
            address,
            transaction_hash: Some(receipt.transaction_hash),
            block_number: receipt.block_number,
            gas_used: Some(receipt.gas_used.into()),
        })
    }
}

/// Chainless backend deriving `CREATE` addresses from per-sender nonces.
#[derive(Debug, Default)]
pub struct SimBackend {
    nonces: RefCell<HashMap<Address, u64>>,
}

impl SimBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DeployBackend for SimBackend {
    async fn deploy(
        &self,
        sender: Address,
        _init_code: Vec<u8>,
        _config: &DeploymentConfig,
    ) -> Result<Deployed, DeploymentError> {
        let mut nonces = self.nonces.borrow_mut();
        let nonce = nonces.entry(sender).or_insert(0);
        let address = sender.create(*nonce);
        *nonce += 1;
        Ok(Deployed {
            address,
            transaction_hash: None,
            block_number: None,
            gas_used: None,
        })
    }
}
