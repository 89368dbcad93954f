// Copyright 2026, Sweetpad
// For licensing, see https://github.com/sweetpad-fi/sweetpad-deploy/blob/main/licenses/COPYRIGHT.md

//! Deploy scripts for staging networks (BSC testnet, Rinkeby).
//!
//! Stage deploys the full suite with the testnet wiring: the lottery gets
//! its draw parameters, the random number generator is pointed at the VRF
//! coordinator, and the treasury contracts that already had a live token on
//! mainnet are wired to that address.

use alloy::primitives::{address, b256, Address, B256};
use sweetpad_tools::core::script::{ArgValue, ContractDeployment, DeployScript};

use crate::contracts::*;

const TAG: &str = "stage";

/// The token already live on BSC mainnet.
pub const LIVE_TOKEN: Address = address!("E8EbCf4Fd1faa9B77c0ec0B26e7Cc32a251Cd799");

pub const VRF_COORDINATOR: Address = address!("a555fC018435bef5A13C6c6870a9d4C11DEC329C");
pub const LINK_TOKEN: Address = address!("84b9B910527Ad5C03A9Ca831909E21e236EA7b06");
pub const VRF_OWNER: Address = address!("1d01f32AdEE0b1d260160272a853b8B3E307E717");
pub const VRF_KEY_HASH: B256 =
    b256!("caf3c3727e033261d383b315559476f48034c13b18f8cafed4d871abe5049186");

pub fn scripts() -> Vec<DeployScript> {
    vec![
        DeployScript::new(SWEETPAD_TOKEN)
            .tag(SWEETPAD_TOKEN)
            .tag(TAG)
            .deploys(ContractDeployment::new(SWEETPAD_TOKEN)),
        DeployScript::new(SWEETPAD_FREEZING)
            .tag(SWEETPAD_FREEZING)
            .tag(TAG)
            .dependency(SWEETPAD_TOKEN)
            .deploys(
                ContractDeployment::new(SWEETPAD_FREEZING)
                    .arg(ArgValue::deployment(SWEETPAD_TOKEN)),
            ),
        DeployScript::new(SWEETPAD_NFT)
            .tag(SWEETPAD_NFT)
            .tag(TAG)
            .deploys(ContractDeployment::new(SWEETPAD_NFT)),
        DeployScript::new(SWEETPAD_TICKET)
            .tag(SWEETPAD_TICKET)
            .tag(TAG)
            .dependency(SWEETPAD_NFT)
            .deploys(
                ContractDeployment::new(SWEETPAD_TICKET).arg(ArgValue::deployment(SWEETPAD_NFT)),
            ),
        DeployScript::new(SWEETPAD_NFT_FREEZING)
            .tag(SWEETPAD_NFT_FREEZING)
            .tag(TAG)
            .dependency(SWEETPAD_NFT)
            .dependency(SWEETPAD_TICKET)
            .deploys(
                ContractDeployment::new(SWEETPAD_NFT_FREEZING)
                    .arg(ArgValue::deployment(SWEETPAD_NFT))
                    .arg(ArgValue::deployment(SWEETPAD_TICKET)),
            ),
        DeployScript::new(SWEETPAD_LOTTERY)
            .tag(SWEETPAD_LOTTERY)
            .tag(TAG)
            .deploys(
                ContractDeployment::new(SWEETPAD_LOTTERY)
                    .arg(10u64)
                    .arg(10u64),
            ),
        DeployScript::new(RANDOM_NUMBER_GENERATOR)
            .tag(RANDOM_NUMBER_GENERATOR)
            .tag(TAG)
            .deploys(
                ContractDeployment::new(RANDOM_NUMBER_GENERATOR)
                    .arg(VRF_COORDINATOR)
                    .arg(LINK_TOKEN)
                    .arg(VRF_OWNER)
                    .arg(VRF_KEY_HASH)
                    .arg(ArgValue::ether("0.1")),
            ),
        DeployScript::new(SWEETPAD_IDO)
            .tag(SWEETPAD_IDO)
            .tag(TAG)
            .dependency(SWEETPAD_NFT_FREEZING)
            .dependency(SWEETPAD_LOTTERY)
            .dependency(SWEETPAD_FREEZING)
            .dependency(ASSET_MOCK)
            .deploys(
                ContractDeployment::new(SWEETPAD_IDO)
                    .arg(ArgValue::deployment(SWEETPAD_TICKET))
                    .arg(ArgValue::deployment(SWEETPAD_FREEZING))
                    .arg(ArgValue::deployment(SWEETPAD_NFT_FREEZING))
                    .arg(ArgValue::deployment(SWEETPAD_LOTTERY))
                    .arg(ArgValue::deployment(ASSET_MOCK))
                    .arg(ArgValue::account("deployer"))
                    .arg(ArgValue::account("deployer")),
            ),
        DeployScript::new(SWEETPAD_ADVISERS)
            .tag(SWEETPAD_ADVISERS)
            .tag(TAG)
            .dependency(SWEETPAD_TOKEN)
            .deploys(
                ContractDeployment::new(SWEETPAD_ADVISERS)
                    .arg(ArgValue::account("deployer"))
                    .arg(ArgValue::deployment(SWEETPAD_TOKEN)),
            ),
        DeployScript::new(SWEETPAD_CHARITY)
            // The original tagged this script with a lowercase initial.
            .tag("sweetpadCharity")
            .tag(TAG)
            .dependency(SWEETPAD_TOKEN)
            .deploys(
                ContractDeployment::new(SWEETPAD_CHARITY)
                    .arg(ArgValue::account("deployer"))
                    .arg(ArgValue::deployment(SWEETPAD_TOKEN)),
            ),
        DeployScript::new(SWEETPAD_LIQUIDITY)
            .tag(SWEETPAD_LIQUIDITY)
            .tag(TAG)
            .deploys(
                ContractDeployment::new(SWEETPAD_LIQUIDITY)
                    .arg(ArgValue::account("deployer"))
                    .arg(LIVE_TOKEN),
            ),
        DeployScript::new(SWEETPAD_RESERVE)
            .tag(SWEETPAD_RESERVE)
            .tag(TAG)
            .deploys(
                ContractDeployment::new(SWEETPAD_RESERVE)
                    .arg(ArgValue::account("deployer"))
                    .arg(LIVE_TOKEN),
            ),
        DeployScript::new(SWEETPAD_TEAM_TOKENOMICS)
            .tag(SWEETPAD_TEAM_TOKENOMICS)
            .tag(TAG)
            .dependency(SWEETPAD_TOKEN)
            .deploys(
                ContractDeployment::new(SWEETPAD_TEAM_TOKENOMICS)
                    .arg(ArgValue::account("deployer"))
                    .arg(ArgValue::deployment(SWEETPAD_TOKEN)),
            ),
    ]
}
