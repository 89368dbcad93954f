// Copyright 2026, Sweetpad
// For licensing, see https://github.com/sweetpad-fi/sweetpad-deploy/blob/main/licenses/COPYRIGHT.md

//! Devnode harness for end-to-end deployment tests.

#[cfg(feature = "integration-tests")]
mod node;

#[cfg(feature = "integration-tests")]
pub use node::{DevNode, DEVNET_MNEMONIC};
