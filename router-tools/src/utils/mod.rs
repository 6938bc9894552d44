// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.
//!
//! Formatting helpers used when reporting deployments to the terminal.

use alloy::primitives::{utils::format_units, U256};
use color::Color;

pub mod color;

/// Pretty-prints an amount of wei as ETH, colored by magnitude.
pub fn format_eth(wei: U256) -> String {
    let Ok(text) = format_units(wei, "ether") else {
        return "???".red();
    };
    let Ok(eth) = text.parse::<f64>() else {
        return "???".red();
    };
    let text = format!("{eth:.6} ETH");
    if eth <= 0.05 {
        text.mint()
    } else if eth <= 0.5 {
        text.yellow()
    } else {
        text.red()
    }
}

/// Pretty-prints an amount of gas, colored against the block gas ceiling of older networks.
pub fn format_gas(gas: u128) -> String {
    let text = format!("{gas} gas");
    if gas <= 3_000_000 {
        text.mint()
    } else if gas <= 7_000_000 {
        text.yellow()
    } else {
        text.pink()
    }
}

/// Total transaction cost for `gas` units at `fee_per_gas` wei.
pub fn gas_cost(gas: u64, fee_per_gas: u128) -> U256 {
    U256::from(gas) * U256::from(fee_per_gas)
}

pub fn decode0x(text: impl AsRef<str>) -> Result<Vec<u8>, hex::FromHexError> {
    let text = text.as_ref().trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(text)
}
