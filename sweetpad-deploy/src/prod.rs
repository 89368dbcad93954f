// Copyright 2026, Sweetpad
// For licensing, see https://github.com/sweetpad-fi/sweetpad-deploy/blob/main/licenses/COPYRIGHT.md

//! Deploy scripts for BSC mainnet.
//!
//! Prod assumes the token is already live and the suite is administered by
//! the multisig: the treasury contracts take both as literal addresses, and
//! the NFT freezing contract resolves the NFT from the existing deployment
//! records of the network rather than from a script in this set.

use alloy::primitives::{address, Address};
use sweetpad_tools::core::script::{ArgValue, ContractDeployment, DeployScript};

use crate::contracts::*;

const TAG: &str = "prod";

/// The token live on BSC mainnet.
pub const LIVE_TOKEN: Address = address!("E8EbCf4Fd1faa9B77c0ec0B26e7Cc32a251Cd799");

/// Multisig administering the treasury contracts.
pub const MULTISIG_ADMIN: Address = address!("da0f4027e61C09F74ac67a763e196Ae22a163e1A");

pub fn scripts() -> Vec<DeployScript> {
    vec![
        DeployScript::new(SWEETPAD_TOKEN)
            .tag(SWEETPAD_TOKEN)
            .tag(TAG)
            .deploys(ContractDeployment::new(SWEETPAD_TOKEN)),
        DeployScript::new(SWEETPAD_FREEZING)
            .tag(SWEETPAD_FREEZING)
            .tag(TAG)
            .deploys(ContractDeployment::new(SWEETPAD_FREEZING).arg(LIVE_TOKEN)),
        DeployScript::new(SWEETPAD_NFT_FREEZING)
            .tag(SWEETPAD_NFT_FREEZING)
            .tag(TAG)
            .dependency(SWEETPAD_NFT)
            .deploys(
                ContractDeployment::new(SWEETPAD_NFT_FREEZING)
                    .arg(ArgValue::deployment(SWEETPAD_NFT)),
            ),
        DeployScript::new(SWEETPAD_CHARITY)
            .tag("SweetpadCharity1")
            .tag(TAG)
            .deploys(
                ContractDeployment::new(SWEETPAD_CHARITY)
                    .arg(MULTISIG_ADMIN)
                    .arg(LIVE_TOKEN),
            ),
        DeployScript::new(SWEETPAD_LIQUIDITY)
            .tag("SweetpadLiquidity1")
            .tag(TAG)
            .deploys(
                ContractDeployment::new(SWEETPAD_LIQUIDITY)
                    .arg(MULTISIG_ADMIN)
                    .arg(LIVE_TOKEN),
            ),
        DeployScript::new(SWEETPAD_MARKETING)
            .tag("SweetpadMarketing1")
            .tag(TAG)
            .deploys(
                ContractDeployment::new(SWEETPAD_MARKETING)
                    .arg(MULTISIG_ADMIN)
                    .arg(LIVE_TOKEN),
            ),
        DeployScript::new(SWEETPAD_RESERVE)
            .tag("SweetpadReserve1")
            .tag(TAG)
            .deploys(
                ContractDeployment::new(SWEETPAD_RESERVE)
                    .arg(MULTISIG_ADMIN)
                    .arg(LIVE_TOKEN),
            ),
        DeployScript::new(SWEETPAD_TEAM_TOKENOMICS)
            .tag("SweetpadTeamTokenomics1")
            .tag(TAG)
            .deploys(
                ContractDeployment::new(SWEETPAD_TEAM_TOKENOMICS)
                    .arg(MULTISIG_ADMIN)
                    .arg(LIVE_TOKEN),
            ),
    ]
}
