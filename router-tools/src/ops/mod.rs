// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub use deploy::{deploy, load_artifact, DeployOptions};
pub use networks::{print_networks, print_weth};

mod deploy;
mod networks;
