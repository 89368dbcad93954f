// Copyright 2026, Sweetpad
// For licensing, see https://github.com/sweetpad-fi/sweetpad-deploy/blob/main/licenses/COPYRIGHT.md

use eyre::Result;
use reqwest::{header::HeaderValue, Method, Response};
use sweetpad_tools::core::{accounts::AccountsConfig, config::DeployEnv, network::NetworkConfig};
use testcontainers::{
    core::{wait::HttpWaitStrategy, IntoContainerPort, WaitFor},
    runners::AsyncRunner,
    ContainerAsync, GenericImage, ImageExt,
};

/// Mnemonic the devnode funds, matching the suite's deploy accounts.
pub const DEVNET_MNEMONIC: &str =
    "decide sphere amateur six misery tattoo happy cluster indoor topple clerk message";

const ANVIL_IMAGE_NAME: &str = "ghcr.io/foundry-rs/foundry";
const ANVIL_IMAGE_TAG: &str = "stable";
const ANVIL_PORT: u16 = 8545;
const ANVIL_CHAIN_ID: u64 = 31337;

pub struct DevNode {
    _container: ContainerAsync<GenericImage>,
    rpc: String,
}

impl DevNode {
    /// Starts an anvil devnode in the background. The node is shut down when
    /// this struct is dropped.
    pub async fn new() -> Result<Self> {
        let wait_strategy = HttpWaitStrategy::new("/")
            .with_port(ANVIL_PORT.into())
            .with_method(Method::POST)
            .with_header("Content-Type", HeaderValue::from_static("application/json"))
            .with_body(r#"{"jsonrpc":"2.0","method":"net_version","params":[],"id":1}"#)
            .with_response_matcher_async(anvil_response_matcher);
        // The image entrypoint runs its command through `sh -c`.
        let command = format!(
            "anvil --host 0.0.0.0 --port {ANVIL_PORT} --chain-id {ANVIL_CHAIN_ID} \
             --mnemonic '{DEVNET_MNEMONIC}'"
        );
        let container = GenericImage::new(ANVIL_IMAGE_NAME, ANVIL_IMAGE_TAG)
            .with_exposed_port(ANVIL_PORT.tcp())
            .with_wait_for(WaitFor::Http(wait_strategy))
            .with_cmd(vec![command])
            .start()
            .await?;
        let port = container.get_host_port_ipv4(ANVIL_PORT).await?;
        let rpc = format!("http://localhost:{port}");
        Ok(DevNode {
            _container: container,
            rpc,
        })
    }

    /// Gets the devnode RPC endpoint.
    pub fn rpc(&self) -> &str {
        &self.rpc
    }

    /// A network descriptor pointing at this node, with the funded mnemonic
    /// as account source.
    pub fn network_config(&self) -> NetworkConfig {
        NetworkConfig {
            chain_id: ANVIL_CHAIN_ID,
            url: self.rpc.clone(),
            tags: vec!["dev".to_string()],
            env: DeployEnv::Dev,
            accounts: AccountsConfig::Mnemonic {
                phrase: DEVNET_MNEMONIC.to_string(),
                path: "m/44'/60'/0'/0".to_string(),
                initial_index: 0,
                count: 10,
            },
            gas_multiplier: None,
            confirmations: None,
            fork: None,
        }
    }
}

async fn anvil_response_matcher(response: Response) -> bool {
    let Ok(t) = response.text().await else {
        return false;
    };
    t.contains("result")
}
