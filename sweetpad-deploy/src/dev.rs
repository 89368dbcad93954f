// Copyright 2026, Sweetpad
// For licensing, see https://github.com/sweetpad-fi/sweetpad-deploy/blob/main/licenses/COPYRIGHT.md

//! Deploy scripts for local development networks.
//!
//! The whole suite deploys from scratch: the token twice (the second
//! instance stands in for the LP token), the freezing and staking contracts
//! wired to it, the NFT line, the lottery and the IDO.

use sweetpad_tools::core::script::{ArgValue, ContractDeployment, DeployScript};

use crate::contracts::*;

const TAG: &str = "dev";

pub fn scripts() -> Vec<DeployScript> {
    vec![
        DeployScript::new(SWEETPAD_TOKEN)
            .tag(SWEETPAD_TOKEN)
            .tag(TAG)
            .deploys(ContractDeployment::new(SWEETPAD_TOKEN))
            .deploys(ContractDeployment::new(LP_TOKEN).contract(SWEETPAD_TOKEN)),
        DeployScript::new(SWEETPAD_FREEZING)
            .tag(SWEETPAD_FREEZING)
            .tag(TAG)
            .dependency(SWEETPAD_TOKEN)
            .deploys(
                ContractDeployment::new(SWEETPAD_FREEZING)
                    .arg(ArgValue::deployment(SWEETPAD_TOKEN))
                    .arg(ArgValue::deployment(LP_TOKEN)),
            ),
        DeployScript::new(STAKING)
            .tag(STAKING)
            .tag(TAG)
            .dependency(SWEETPAD_TOKEN)
            .deploys(
                ContractDeployment::new(STAKING).arg(ArgValue::deployment(SWEETPAD_TOKEN)),
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
        DeployScript::new(SWEETPAD_NFT_STAKING)
            .tag(SWEETPAD_NFT_STAKING)
            .tag(TAG)
            .dependency(SWEETPAD_NFT)
            .deploys(
                ContractDeployment::new(SWEETPAD_NFT_STAKING)
                    .arg(ArgValue::deployment(SWEETPAD_NFT)),
            ),
        DeployScript::new(SWEETPAD_LOTTERY)
            .tag(SWEETPAD_LOTTERY)
            .tag(TAG)
            .deploys(ContractDeployment::new(SWEETPAD_LOTTERY)),
        DeployScript::new(RANDOM_NUMBER_GENERATOR)
            .tag(RANDOM_NUMBER_GENERATOR)
            .tag(TAG)
            .deploys(ContractDeployment::new(RANDOM_NUMBER_GENERATOR)),
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
                    .arg(ArgValue::account("owner"))
                    .arg(ArgValue::account("deployer")),
            ),
        DeployScript::new(SWEETPAD_LIQUIDITY)
            .tag(SWEETPAD_LIQUIDITY)
            .tag(TAG)
            .dependency(SWEETPAD_TOKEN)
            .deploys(
                ContractDeployment::new(SWEETPAD_LIQUIDITY)
                    .arg(ArgValue::account("deployer"))
                    .arg(ArgValue::deployment(SWEETPAD_TOKEN)),
            ),
        DeployScript::new(SWEETPAD_MARKETING)
            .tag(SWEETPAD_MARKETING)
            .tag(TAG)
            .dependency(SWEETPAD_TOKEN)
            .deploys(
                ContractDeployment::new(SWEETPAD_MARKETING)
                    .arg(ArgValue::account("deployer"))
                    .arg(ArgValue::deployment(SWEETPAD_TOKEN)),
            ),
        DeployScript::new(SWEETPAD_RESERVE)
            // The original tagged this script with a lowercase initial.
            .tag("sweetpadReserve")
            .tag(TAG)
            .dependency(SWEETPAD_TOKEN)
            .deploys(
                ContractDeployment::new(SWEETPAD_RESERVE)
                    .arg(ArgValue::account("deployer"))
                    .arg(ArgValue::deployment(SWEETPAD_TOKEN)),
            ),
    ]
}
