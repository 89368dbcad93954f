// Copyright 2026, Sweetpad
// For licensing, see https://github.com/sweetpad-fi/sweetpad-deploy/blob/main/licenses/COPYRIGHT.md

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),

    #[error("{0}")]
    Config(#[from] crate::core::config::ConfigError),
    #[error("{0}")]
    Network(#[from] crate::core::network::NetworkError),
    #[error("{0}")]
    Accounts(#[from] crate::core::accounts::AccountsError),
    #[error("{0}")]
    Artifact(#[from] crate::core::artifact::ArtifactError),
    #[error("{0}")]
    Registry(#[from] crate::core::script::RegistryError),
    #[error("{0}")]
    Plan(#[from] crate::core::plan::PlanError),
    #[error("{0}")]
    Store(#[from] crate::core::store::StoreError),
    #[error("{0}")]
    Deployment(#[from] crate::core::deployment::DeploymentError),
}
