// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::signers::Signer;

use crate::{common_args::AuthArgs, error::DeployCliResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    auth: AuthArgs,
}

pub fn exec(args: Args) -> DeployCliResult {
    for signer in args.auth.signers(None)? {
        println!("{}", signer.address());
    }
    Ok(())
}
