// Copyright 2026, Sweetpad
// For licensing, see https://github.com/sweetpad-fi/sweetpad-deploy/blob/main/licenses/COPYRIGHT.md

use alloy::providers::ProviderBuilder;
use sweetpad_tools::core::{
    deployment::{
        backend::{RpcBackend, SimBackend},
        run_plan, DeploymentConfig,
    },
    plan::plan,
    store::DeploymentsStore,
};

use crate::{
    common_args::{ArtifactArgs, ConfigArgs, NetworkArgs, StoreArgs},
    error::SweetpadCliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Tags selecting the scripts to deploy; nothing selects them all.
    #[arg(value_name = "TAGS")]
    tags: Vec<String>,
    /// Include the mock script overlay outside of dev.
    #[arg(long)]
    mocks: bool,
    /// Resolve and record predicted addresses without touching the network.
    #[arg(long)]
    offline: bool,

    #[command(flatten)]
    config: ConfigArgs,
    #[command(flatten)]
    network: NetworkArgs,
    #[command(flatten)]
    artifacts: ArtifactArgs,
    #[command(flatten)]
    store: StoreArgs,
}

pub async fn exec(args: Args) -> SweetpadCliResult {
    let config = args.config.load()?;
    let (network, env, signers) = args.network.resolve(&config)?;
    let with_mocks = args.mocks || config.test_deploy();
    let registry = sweetpad_deploy::registry(env, with_mocks)?;

    // Offline runs record into memory only, so predicted addresses never end
    // up in the on-disk records.
    let mut store = if args.offline {
        let mut store = DeploymentsStore::memory();
        for (name, record) in args.store.open(&args.network.network).list()? {
            store.put(&name, record)?;
        }
        store
    } else {
        args.store.open(&args.network.network)
    };

    let plan = plan(&registry, &args.tags, &store)?;
    let deployment_config = DeploymentConfig::for_network(network, &config.defaults);
    let mut artifacts = args.artifacts.open();

    let deployed = if args.offline {
        let backend = SimBackend::new();
        run_plan(
            &plan,
            &registry,
            &signers,
            &mut artifacts,
            &mut store,
            &deployment_config,
            &backend,
        )
        .await?
    } else {
        let endpoint = network.endpoint()?;
        let provider = ProviderBuilder::new()
            .wallet(signers.wallet().clone())
            .connect(&endpoint)
            .await?;
        let backend = RpcBackend::new(provider);
        run_plan(
            &plan,
            &registry,
            &signers,
            &mut artifacts,
            &mut store,
            &deployment_config,
            &backend,
        )
        .await?
    };

    println!(
        "{} deployment(s) on {} ({env})",
        deployed.len(),
        args.network.network
    );
    Ok(())
}
