// Copyright 2026, Sweetpad
// For licensing, see https://github.com/sweetpad-fi/sweetpad-deploy/blob/main/licenses/COPYRIGHT.md

pub mod accounts;
pub mod artifact;
pub mod config;
pub mod deployment;
pub mod fixture;
pub mod network;
pub mod plan;
pub mod script;
pub mod store;
