// Copyright 2026, Sweetpad
// For licensing, see https://github.com/sweetpad-fi/sweetpad-deploy/blob/main/licenses/COPYRIGHT.md

/// The network deployed to when none is selected.
pub const DEFAULT_NETWORK: &str = "localhost";

/// Default directory holding the contract build artifacts.
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// Default root directory for per-network deployment records.
pub const DEFAULT_DEPLOYMENTS_DIR: &str = "deployments";
