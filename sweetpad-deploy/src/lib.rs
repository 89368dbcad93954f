// Copyright 2026, Sweetpad
// For licensing, see https://github.com/sweetpad-fi/sweetpad-deploy/blob/main/licenses/COPYRIGHT.md

//! The Sweetpad deployment descriptor sets.
//!
//! One module per environment, mirroring the contract suite's deploy
//! folders: `dev` for local nodes, `stage` for testnets and `prod` for BSC
//! mainnet, plus a `mocks` overlay that stands in for external contracts.
//! The mocks are always part of dev; elsewhere they are added only when
//! requested (`TEST_DEPLOY`).

use sweetpad_tools::core::script::{RegistryError, ScriptRegistry};

pub use sweetpad_tools::core::config::DeployEnv;

pub mod dev;
pub mod mocks;
pub mod prod;
pub mod stage;

/// Contract (artifact) names of the suite.
pub mod contracts {
    pub const SWEETPAD_TOKEN: &str = "SweetpadToken";
    pub const SWEETPAD_FREEZING: &str = "SweetpadFreezing";
    pub const STAKING: &str = "Staking";
    pub const SWEETPAD_NFT: &str = "SweetpadNFT";
    pub const SWEETPAD_TICKET: &str = "SweetpadTicket";
    pub const SWEETPAD_NFT_FREEZING: &str = "SweetpadNFTFreezing";
    pub const SWEETPAD_NFT_STAKING: &str = "SweetpadNFTStaking";
    pub const SWEETPAD_LOTTERY: &str = "SweetpadLottery";
    pub const RANDOM_NUMBER_GENERATOR: &str = "RandomNumberGenerator";
    pub const SWEETPAD_IDO: &str = "SweetpadIDO";
    pub const SWEETPAD_ADVISERS: &str = "SweetpadAdvisers";
    pub const SWEETPAD_CHARITY: &str = "SweetpadCharity";
    pub const SWEETPAD_LIQUIDITY: &str = "SweetpadLiquidity";
    pub const SWEETPAD_MARKETING: &str = "SweetpadMarketing";
    pub const SWEETPAD_RESERVE: &str = "SweetpadReserve";
    pub const SWEETPAD_TEAM_TOKENOMICS: &str = "SweetpadTeamTokenomics";
    pub const ASSET_MOCK: &str = "AssetMock";
    pub const SWEETPAD_LOTTERY_MOCK: &str = "SweetpadLotteryMock";

    /// Deployment name of the second token instance deployed in dev.
    pub const LP_TOKEN: &str = "lpToken";
}

/// Assembles the script registry for an environment. `with_mocks` adds the
/// mock overlay; it is implied for dev, whose scripts depend on the mocks.
pub fn registry(env: DeployEnv, with_mocks: bool) -> Result<ScriptRegistry, RegistryError> {
    let mut registry = ScriptRegistry::new();
    let scripts = match env {
        DeployEnv::Dev => dev::scripts(),
        DeployEnv::Stage => stage::scripts(),
        DeployEnv::Prod => prod::scripts(),
    };
    for script in scripts {
        registry.register(script)?;
    }
    if with_mocks || env == DeployEnv::Dev {
        for script in mocks::scripts(&env.to_string()) {
            registry.register(script)?;
        }
    }
    Ok(registry)
}
