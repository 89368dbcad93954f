// Copyright 2026, Sweetpad
// For licensing, see https://github.com/sweetpad-fi/sweetpad-deploy/blob/main/licenses/COPYRIGHT.md

use crate::{common_args::ConfigArgs, error::SweetpadCliResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    config: ConfigArgs,
}

pub fn exec(args: Args) -> SweetpadCliResult {
    let config = args.config.load()?;
    for (name, network) in &config.networks {
        let endpoint = match network.endpoint() {
            Ok(url) => url,
            Err(err) => format!("unresolved: {err}"),
        };
        let mut line = format!(
            "{name}: chain {} ({}), {endpoint}",
            network.chain_id, network.env
        );
        if !network.tags.is_empty() {
            line.push_str(&format!("  tags: {}", network.tags.join(", ")));
        }
        println!("{line}");
    }
    Ok(())
}
