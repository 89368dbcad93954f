// Copyright 2026, Sweetpad
// For licensing, see https://github.com/sweetpad-fi/sweetpad-deploy/blob/main/licenses/COPYRIGHT.md

use crate::{
    common_args::{NetworkArgs, StoreArgs},
    error::SweetpadCliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    network: NetworkArgs,
    #[command(flatten)]
    store: StoreArgs,
}

pub fn exec(args: Args) -> SweetpadCliResult {
    let store = args.store.open(&args.network.network);
    let records = store.list()?;
    if records.is_empty() {
        println!("no deployments recorded for {}", args.network.network);
        return Ok(());
    }
    for (name, record) in records {
        println!("{name}: {} ({})", record.address, record.contract);
    }
    Ok(())
}
