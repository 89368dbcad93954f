// Copyright 2026, Sweetpad
// For licensing, see https://github.com/sweetpad-fi/sweetpad-deploy/blob/main/licenses/COPYRIGHT.md

//! Wiring checks for the descriptor sets, run through the simulated backend.

use std::path::PathBuf;

use alloy::primitives::{keccak256, Address};
use sweetpad_deploy::{contracts::*, prod, registry, stage, DeployEnv};
use sweetpad_tools::{
    core::{
        accounts::{AccountsConfig, NamedSigners},
        config::default_named_accounts,
        fixture::Fixture,
        network::NetworkConfig,
        plan::{plan, PlanError},
        store::{DeploymentRecord, DeploymentsStore},
    },
    Error,
};

const MNEMONIC: &str =
    "decide sphere amateur six misery tattoo happy cluster indoor topple clerk message";

fn artifacts_dir(env: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata/artifacts")
        .join(env)
}

fn test_network() -> NetworkConfig {
    NetworkConfig {
        chain_id: 31337,
        url: "http://127.0.0.1:8545".to_string(),
        tags: vec!["dev".to_string()],
        env: DeployEnv::Dev,
        accounts: AccountsConfig::Mnemonic {
            phrase: MNEMONIC.to_string(),
            path: "m/44'/60'/0'/0".to_string(),
            initial_index: 0,
            count: 20,
        },
        gas_multiplier: None,
        confirmations: None,
        fork: None,
    }
}

fn signers() -> NamedSigners {
    NamedSigners::derive(&test_network(), &default_named_accounts()).unwrap()
}

fn fixture(env: DeployEnv, with_mocks: bool) -> Fixture {
    let dir = match env {
        DeployEnv::Dev => "dev",
        DeployEnv::Stage => "stage",
        DeployEnv::Prod => "prod",
    };
    Fixture::new(
        registry(env, with_mocks).unwrap(),
        signers(),
        artifacts_dir(dir),
    )
}

#[tokio::test]
async fn dev_suite_deploys_everything() {
    let store = fixture(DeployEnv::Dev, false).deploy(&["dev"]).await.unwrap();
    // 13 scripts deploying 14 contracts (the token script deploys twice),
    // plus the two mocks.
    assert_eq!(store.list().unwrap().len(), 16);
    for name in [
        SWEETPAD_TOKEN,
        LP_TOKEN,
        SWEETPAD_FREEZING,
        STAKING,
        SWEETPAD_NFT,
        SWEETPAD_TICKET,
        SWEETPAD_NFT_FREEZING,
        SWEETPAD_NFT_STAKING,
        SWEETPAD_LOTTERY,
        RANDOM_NUMBER_GENERATOR,
        SWEETPAD_IDO,
        SWEETPAD_LIQUIDITY,
        SWEETPAD_MARKETING,
        SWEETPAD_RESERVE,
        ASSET_MOCK,
        SWEETPAD_LOTTERY_MOCK,
    ] {
        assert!(store.contains(name), "missing deployment: {name}");
    }
}

#[tokio::test]
async fn dev_freezing_takes_both_token_instances() {
    let store = fixture(DeployEnv::Dev, false).deploy(&["dev"]).await.unwrap();
    let token = store.address(SWEETPAD_TOKEN).unwrap();
    let lp_token = store.address(LP_TOKEN).unwrap();
    assert_ne!(token, lp_token);

    let freezing = store.get(SWEETPAD_FREEZING).unwrap().unwrap();
    assert_eq!(freezing.args, vec![token.to_string(), lp_token.to_string()]);

    let staking = store.get(STAKING).unwrap().unwrap();
    assert_eq!(staking.args, vec![token.to_string()]);
}

#[tokio::test]
async fn dev_ido_is_wired_to_the_suite_and_admins() {
    let store = fixture(DeployEnv::Dev, false).deploy(&["dev"]).await.unwrap();
    let signers = signers();
    let ido = store.get(SWEETPAD_IDO).unwrap().unwrap();
    assert_eq!(
        ido.args,
        vec![
            store.address(SWEETPAD_TICKET).unwrap().to_string(),
            store.address(SWEETPAD_FREEZING).unwrap().to_string(),
            store.address(SWEETPAD_NFT_FREEZING).unwrap().to_string(),
            store.address(SWEETPAD_LOTTERY).unwrap().to_string(),
            store.address(ASSET_MOCK).unwrap().to_string(),
            signers.address("owner").unwrap().to_string(),
            signers.address("deployer").unwrap().to_string(),
        ]
    );
}

#[tokio::test]
async fn selecting_one_tag_pulls_its_dependency_closure() {
    let store = fixture(DeployEnv::Dev, false)
        .deploy(&[SWEETPAD_FREEZING])
        .await
        .unwrap();
    assert!(store.contains(SWEETPAD_FREEZING));
    assert!(store.contains(SWEETPAD_TOKEN));
    assert!(store.contains(LP_TOKEN));
    assert!(!store.contains(SWEETPAD_IDO));
}

#[tokio::test]
async fn fixture_caches_by_normalized_tag_set() {
    let fixture = fixture(DeployEnv::Dev, false);
    let first = fixture.deploy(&["dev"]).await.unwrap();
    let second = fixture.deploy(&["", "dev", "dev"]).await.unwrap();
    assert_eq!(
        first.address(SWEETPAD_IDO).unwrap(),
        second.address(SWEETPAD_IDO).unwrap()
    );
    assert_eq!(first.list().unwrap().len(), second.list().unwrap().len());
}

#[tokio::test]
async fn stage_wires_the_live_token_and_vrf() {
    let store = fixture(DeployEnv::Stage, true)
        .deploy(&["stage"])
        .await
        .unwrap();

    // Stage freezing takes only the suite token.
    let token = store.address(SWEETPAD_TOKEN).unwrap();
    let freezing = store.get(SWEETPAD_FREEZING).unwrap().unwrap();
    assert_eq!(freezing.args, vec![token.to_string()]);

    let lottery = store.get(SWEETPAD_LOTTERY).unwrap().unwrap();
    assert_eq!(lottery.args, vec!["10".to_string(), "10".to_string()]);

    let rng = store.get(RANDOM_NUMBER_GENERATOR).unwrap().unwrap();
    assert_eq!(
        rng.args,
        vec![
            stage::VRF_COORDINATOR.to_string(),
            stage::LINK_TOKEN.to_string(),
            stage::VRF_OWNER.to_string(),
            stage::VRF_KEY_HASH.to_string(),
            // 0.1 ether in wei.
            "100000000000000000".to_string(),
        ]
    );

    // The treasury contracts already wired to mainnet keep the live token.
    let liquidity = store.get(SWEETPAD_LIQUIDITY).unwrap().unwrap();
    assert_eq!(
        liquidity.args,
        vec![
            signers().address("deployer").unwrap().to_string(),
            stage::LIVE_TOKEN.to_string(),
        ]
    );
}

#[test]
fn mock_overlay_carries_the_active_environment_tag() {
    let registry = registry(DeployEnv::Stage, true).unwrap();
    let store = DeploymentsStore::memory();

    // The overlay on a stage registry answers to "stage", not "dev".
    let dev = plan(&registry, &["dev".to_string()], &store).unwrap();
    assert!(dev.is_empty());

    let stage = plan(&registry, &["stage".to_string()], &store).unwrap();
    assert!(stage.position(ASSET_MOCK).is_some());
    assert!(stage.position(SWEETPAD_LOTTERY_MOCK).is_some());
}

#[tokio::test]
async fn stage_ido_pulls_the_asset_mock() {
    let store = fixture(DeployEnv::Stage, true)
        .deploy(&[SWEETPAD_IDO])
        .await
        .unwrap();
    assert!(store.contains(ASSET_MOCK));
    let ido = store.get(SWEETPAD_IDO).unwrap().unwrap();
    assert_eq!(ido.args[4], store.address(ASSET_MOCK).unwrap().to_string());
}

#[tokio::test]
async fn prod_requires_an_existing_nft_record() {
    let err = fixture(DeployEnv::Prod, false)
        .deploy(&["prod"])
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Plan(PlanError::UnknownDependency { script, tag })
            if script == SWEETPAD_NFT_FREEZING && tag == SWEETPAD_NFT
    ));
}

#[tokio::test]
async fn prod_wires_nft_freezing_to_the_recorded_nft() {
    let nft = Address::repeat_byte(0x42);
    let mut base = DeploymentsStore::memory();
    base.put(
        SWEETPAD_NFT,
        DeploymentRecord {
            contract: SWEETPAD_NFT.to_string(),
            address: nft,
            transaction_hash: None,
            block_number: Some(14_000_000),
            args: Vec::new(),
            bytecode_hash: keccak256(b"SweetpadNFT"),
        },
    )
    .unwrap();

    let store = fixture(DeployEnv::Prod, false)
        .with_base_store(base)
        .deploy(&["prod"])
        .await
        .unwrap();

    let nft_freezing = store.get(SWEETPAD_NFT_FREEZING).unwrap().unwrap();
    assert_eq!(nft_freezing.args, vec![nft.to_string()]);

    let freezing = store.get(SWEETPAD_FREEZING).unwrap().unwrap();
    assert_eq!(freezing.args, vec![prod::LIVE_TOKEN.to_string()]);

    let charity = store.get(SWEETPAD_CHARITY).unwrap().unwrap();
    assert_eq!(
        charity.args,
        vec![
            prod::MULTISIG_ADMIN.to_string(),
            prod::LIVE_TOKEN.to_string(),
        ]
    );
}

#[tokio::test]
async fn reruns_reuse_matching_records() {
    let fixture = fixture(DeployEnv::Dev, false);
    let first = fixture.deploy(&["dev"]).await.unwrap();

    // Rerunning over the first run's records must not move any address.
    let rerun = Fixture::new(
        registry(DeployEnv::Dev, false).unwrap(),
        signers(),
        artifacts_dir("dev"),
    )
    .with_base_store(first.clone());
    let second = rerun.deploy(&["dev"]).await.unwrap();
    for (name, record) in first.list().unwrap() {
        assert_eq!(second.address(&name).unwrap(), record.address);
    }
}
