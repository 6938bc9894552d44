// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{
    core::{config::EnvironmentConfig, migration::FACTORY_ADDRESS, registry::FEE_TO_SETTER},
    utils::color::{Color, DebugColor},
};

/// Prints every configured network profile along with its WETH address, then the
/// addresses shared by all networks.
pub fn print_networks(env: &EnvironmentConfig) {
    let table = env.address_table();
    for (name, profile) in env.networks() {
        let weth = table
            .get(name)
            .map(|addr| addr.to_checksum(None).lavender())
            .unwrap_or_else(|| "unregistered".red());
        mintln!("{name}");
        greyln!("  network id:     {}", profile.network_id.debug_lavender());
        greyln!("  endpoint:       {}", profile.endpoint);
        greyln!("  gas:            {}", profile.gas.debug_lavender());
        greyln!("  confirmations:  {}", profile.confirmations.debug_lavender());
        greyln!("  timeout blocks: {}", profile.timeout_blocks.debug_lavender());
        greyln!("  skip dry run:   {}", profile.skip_dry_run.debug_lavender());
        greyln!("  weth:           {weth}");
    }
    greyln!("solc {}", env.compiler().version.lavender());
    greyln!("factory:       {}", FACTORY_ADDRESS.to_checksum(None).lavender());
    greyln!("fee to setter: {}", FEE_TO_SETTER.to_checksum(None).lavender());
}

/// Prints the WETH address the router would be deployed with on `network`.
pub fn print_weth(env: &EnvironmentConfig, network: &str) -> eyre::Result<()> {
    let weth = env.address_table().lookup(network)?;
    println!("{}", weth.to_checksum(None));
    Ok(())
}
