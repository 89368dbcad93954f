// Copyright 2026, Sweetpad
// For licensing, see https://github.com/sweetpad-fi/sweetpad-deploy/blob/main/licenses/COPYRIGHT.md

use crate::{
    common_args::{ConfigArgs, NetworkArgs},
    error::SweetpadCliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    config: ConfigArgs,
    #[command(flatten)]
    network: NetworkArgs,
}

pub fn exec(args: Args) -> SweetpadCliResult {
    let config = args.config.load()?;
    let (_, _, signers) = args.network.resolve(&config)?;
    for (name, address) in signers.iter() {
        println!("{name}: {address}");
    }
    Ok(())
}
