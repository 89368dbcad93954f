// Copyright 2026, Sweetpad
// For licensing, see https://github.com/sweetpad-fi/sweetpad-deploy/blob/main/licenses/COPYRIGHT.md

//! Cached deployment fixtures for tests.
//!
//! A fixture runs a tagged subset of the registry through the simulated
//! backend into an in-memory store and caches the result keyed by the tag
//! set; repeated requests for the same tags get a clone of the snapshot
//! instead of a fresh run.

use std::{cell::RefCell, collections::HashMap, path::PathBuf};

use super::{
    accounts::NamedSigners,
    artifact::ArtifactStore,
    deployment::{backend::SimBackend, run_plan, DeploymentConfig},
    plan::plan,
    script::ScriptRegistry,
    store::DeploymentsStore,
};
use crate::Result;

pub struct Fixture {
    registry: ScriptRegistry,
    signers: NamedSigners,
    artifacts_dir: PathBuf,
    config: DeploymentConfig,
    base: DeploymentsStore,
    cache: RefCell<HashMap<Vec<String>, DeploymentsStore>>,
}

impl Fixture {
    pub fn new(
        registry: ScriptRegistry,
        signers: NamedSigners,
        artifacts_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            registry,
            signers,
            artifacts_dir: artifacts_dir.into(),
            config: DeploymentConfig::default(),
            base: DeploymentsStore::memory(),
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Starts every run from a copy of this store instead of an empty one.
    /// Used to model dependencies satisfied by prior on-chain deployments.
    pub fn with_base_store(mut self, store: DeploymentsStore) -> Self {
        self.base = store;
        self
    }

    /// Deploys the scripts selected by `tags`, or returns the cached snapshot
    /// for this tag set. Empty tag entries are ignored.
    pub async fn deploy(&self, tags: &[&str]) -> Result<DeploymentsStore> {
        let mut key: Vec<String> = tags
            .iter()
            .filter(|tag| !tag.is_empty())
            .map(|tag| tag.to_string())
            .collect();
        key.sort();
        key.dedup();

        if let Some(store) = self.cache.borrow().get(&key) {
            return Ok(store.clone());
        }

        let mut store = self.base.clone();
        let plan = plan(&self.registry, &key, &store)?;
        let mut artifacts = ArtifactStore::new(&self.artifacts_dir);
        let backend = SimBackend::new();
        run_plan(
            &plan,
            &self.registry,
            &self.signers,
            &mut artifacts,
            &mut store,
            &self.config,
            &backend,
        )
        .await?;

        self.cache.borrow_mut().insert(key, store.clone());
        Ok(store)
    }
}
