// Copyright 2026, Sweetpad
// For licensing, see https://github.com/sweetpad-fi/sweetpad-deploy/blob/main/licenses/COPYRIGHT.md

//! Tools for deploying the Sweetpad contract suite.
//!
//! The contracts themselves are opaque build artifacts; this crate owns the
//! orchestration around them: network configuration, named signers, deploy
//! scripts with tag/dependency planning, execution backends and deployment
//! records.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;

pub mod utils;

pub use error::{Error, Result};
