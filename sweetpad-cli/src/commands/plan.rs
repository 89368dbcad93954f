// Copyright 2026, Sweetpad
// For licensing, see https://github.com/sweetpad-fi/sweetpad-deploy/blob/main/licenses/COPYRIGHT.md

use sweetpad_tools::core::plan::plan;

use crate::{
    common_args::{ConfigArgs, NetworkArgs, StoreArgs},
    error::SweetpadCliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Tags selecting the scripts to plan; nothing selects them all.
    #[arg(value_name = "TAGS")]
    tags: Vec<String>,
    /// Include the mock script overlay outside of dev.
    #[arg(long)]
    mocks: bool,

    #[command(flatten)]
    config: ConfigArgs,
    #[command(flatten)]
    network: NetworkArgs,
    #[command(flatten)]
    store: StoreArgs,
}

pub fn exec(args: Args) -> SweetpadCliResult {
    let config = args.config.load()?;
    let (_, env, _) = args.network.resolve(&config)?;
    let with_mocks = args.mocks || config.test_deploy();
    let registry = sweetpad_deploy::registry(env, with_mocks)?;
    let store = args.store.open(&args.network.network);

    let plan = plan(&registry, &args.tags, &store)?;
    println!(
        "plan for {} ({env}): {} script(s)",
        args.network.network,
        plan.len()
    );
    for (i, step) in plan.steps.iter().enumerate() {
        let mut line = format!("{:>3}. {}", i + 1, step.script);
        if !step.depends_on.is_empty() {
            line.push_str(&format!("  after: {}", step.depends_on.join(", ")));
        }
        if !step.external.is_empty() {
            line.push_str(&format!("  from records: {}", step.external.join(", ")));
        }
        println!("{line}");
    }
    Ok(())
}
