// Copyright 2026, Sweetpad
// For licensing, see https://github.com/sweetpad-fi/sweetpad-deploy/blob/main/licenses/COPYRIGHT.md

use crate::error::SweetpadCliResult;

mod accounts;
mod deploy;
mod deployments;
mod networks;
mod plan;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Show the named accounts of a network
    #[clap(visible_alias = "a")]
    Accounts(accounts::Args),
    /// Deploy the scripts selected by tags
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
    /// List the deployment records of a network
    Deployments(deployments::Args),
    /// List the configured networks
    #[clap(visible_alias = "n")]
    Networks(networks::Args),
    /// Show the deployment plan without executing it
    #[clap(visible_alias = "p")]
    Plan(plan::Args),
}

pub async fn exec(cmd: Command) -> SweetpadCliResult {
    match cmd {
        Command::Accounts(args) => accounts::exec(args),
        Command::Deploy(args) => deploy::exec(args).await,
        Command::Deployments(args) => deployments::exec(args),
        Command::Networks(args) => networks::exec(args),
        Command::Plan(args) => plan::exec(args),
    }
}
