// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use alloy::primitives::Address;
use router_tools::{
    core::{deployment::Deployment, migration::FACTORY_ADDRESS},
    ops::{self, DeployOptions},
};

use crate::{
    common_args::{AuthArgs, ConfigArgs, ProviderArgs},
    constants::DEFAULT_RECORDS_DIR,
    error::DeployCliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Network to deploy to, as named in the configuration
    #[arg(short, long)]
    network: String,
    /// Compiled router artifact (Truffle or Foundry JSON)
    #[arg(long, value_name = "PATH")]
    artifact: PathBuf,
    /// Address of the already deployed factory passed to the router constructor
    #[arg(long, default_value_t = FACTORY_ADDRESS)]
    factory: Address,
    /// Only simulate the deployment and print gas estimates.
    #[arg(long)]
    dry_run: bool,
    /// Directory to write the deployment record to.
    #[arg(long, default_value = DEFAULT_RECORDS_DIR)]
    records_dir: PathBuf,
    /// Do not write a deployment record.
    #[arg(long)]
    no_record: bool,

    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    config: ConfigArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> DeployCliResult {
    let env = args.config.load()?;
    let profile = env.profile(&args.network)?;
    // Everything that can fail without a node is checked before connecting.
    env.address_table().lookup(&args.network)?;

    let rpc_url = args.provider.rpc_url(&args.network, profile)?;
    let artifact = ops::load_artifact(&env, &args.artifact)?;
    let provider = args
        .provider
        .build_provider_with_wallet(&rpc_url, &args.auth)
        .await?;

    let mut opts = DeployOptions::new(&args.network);
    opts.factory = args.factory;
    opts.max_fee_per_gas_wei = args.auth.get_max_fee_per_gas_wei()?;
    opts.simulate_only = args.dry_run;
    opts.records_dir = (!args.no_record).then_some(args.records_dir);

    match ops::deploy(&env, &opts, artifact, &provider).await? {
        Deployment::Simulated { .. } => log::info!("dry run complete, nothing was sent"),
        Deployment::Confirmed(deployed) => println!("{}", deployed.address),
    }
    Ok(())
}
