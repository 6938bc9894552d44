// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::DeployCliResult;

mod accounts;
mod deploy;
mod networks;
mod weth;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Print the accounts derived from the configured signer
    Accounts(accounts::Args),
    /// Deploy the router to a network
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
    /// List the configured networks
    #[clap(visible_alias = "n")]
    Networks(networks::Args),
    /// Print the wrapped native token address for a network
    Weth(weth::Args),
}

pub async fn exec(cmd: Command) -> DeployCliResult {
    match cmd {
        Command::Accounts(args) => accounts::exec(args),
        Command::Deploy(args) => deploy::exec(args).await,
        Command::Networks(args) => networks::exec(args),
        Command::Weth(args) => weth::exec(args),
    }
}
