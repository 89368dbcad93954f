// Copyright 2026, Sweetpad
// For licensing, see https://github.com/sweetpad-fi/sweetpad-deploy/blob/main/licenses/COPYRIGHT.md

//! Mock overlay.
//!
//! Stand-ins for contracts external to the suite: the IDO's payment asset
//! and a lottery variant with fixed draw numbers. Always part of dev;
//! enabled elsewhere by `TEST_DEPLOY`, which the stage IDO wiring presumes.
//! The overlay carries the tag of the environment it is overlaid onto, so
//! selecting an environment's tag never drags mocks across environments.

use sweetpad_tools::core::script::{ContractDeployment, DeployScript};

use crate::contracts::*;

pub fn scripts(env_tag: &str) -> Vec<DeployScript> {
    vec![
        DeployScript::new(ASSET_MOCK)
            .tag(ASSET_MOCK)
            .tag(env_tag)
            .deploys(ContractDeployment::new(ASSET_MOCK)),
        DeployScript::new(SWEETPAD_LOTTERY_MOCK)
            .tag(SWEETPAD_LOTTERY_MOCK)
            .tag(env_tag)
            .deploys(
                ContractDeployment::new(SWEETPAD_LOTTERY_MOCK)
                    .arg(10u64)
                    .arg(11u64),
            ),
    ]
}
