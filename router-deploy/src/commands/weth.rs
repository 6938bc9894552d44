// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use router_tools::ops;

use crate::{common_args::ConfigArgs, error::DeployCliResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Network to resolve
    #[arg(short, long)]
    network: String,

    #[command(flatten)]
    config: ConfigArgs,
}

pub fn exec(args: Args) -> DeployCliResult {
    let env = args.config.load()?;
    ops::print_weth(&env, &args.network)?;
    Ok(())
}
