// Copyright 2026, Sweetpad
// For licensing, see https://github.com/sweetpad-fi/sweetpad-deploy/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use sweetpad_tools::core::{
    accounts::NamedSigners,
    artifact::ArtifactStore,
    config::{self, Config, DeployEnv},
    network::NetworkConfig,
    store::DeploymentsStore,
};

use crate::constants::{DEFAULT_ARTIFACTS_DIR, DEFAULT_DEPLOYMENTS_DIR, DEFAULT_NETWORK};

#[derive(Debug, clap::Args)]
pub struct ConfigArgs {
    /// Path to the network configuration file.
    #[arg(long, default_value = config::FILENAME)]
    pub config: PathBuf,
}

impl ConfigArgs {
    pub fn load(&self) -> eyre::Result<Config> {
        Ok(Config::load(&self.config)?)
    }
}

#[derive(Debug, clap::Args)]
pub struct NetworkArgs {
    /// Network to operate on.
    #[arg(short, long, default_value = DEFAULT_NETWORK)]
    pub network: String,
}

impl NetworkArgs {
    /// Resolves the selected network, its deploy environment and its named
    /// signers from the configuration.
    pub fn resolve<'a>(
        &self,
        config: &'a Config,
    ) -> eyre::Result<(&'a NetworkConfig, DeployEnv, NamedSigners)> {
        let network = config.network(&self.network)?;
        let env = config.active_env(&self.network)?;
        let signers = NamedSigners::derive(network, &config.named_accounts)?;
        Ok((network, env, signers))
    }
}

#[derive(Debug, clap::Args)]
pub struct ArtifactArgs {
    /// Directory holding the contract build artifacts.
    #[arg(long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts: PathBuf,
}

impl ArtifactArgs {
    pub fn open(&self) -> ArtifactStore {
        ArtifactStore::new(&self.artifacts)
    }
}

#[derive(Debug, clap::Args)]
pub struct StoreArgs {
    /// Root directory for per-network deployment records.
    #[arg(long, default_value = DEFAULT_DEPLOYMENTS_DIR)]
    pub deployments: PathBuf,
}

impl StoreArgs {
    pub fn open(&self, network: &str) -> DeploymentsStore {
        DeploymentsStore::dir(&self.deployments, network)
    }
}
